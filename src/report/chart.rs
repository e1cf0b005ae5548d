//! ASCII line chart of cost against medical spend

use crate::sweep::ComparisonResult;

const GLYPHS: [char; 8] = ['*', '+', 'o', 'x', '#', '@', '%', '&'];

/// Largest plot area drawn; bigger requests are clamped
pub const MAX_CHART_WIDTH: usize = 1000;
pub const MAX_CHART_HEIGHT: usize = 500;

/// Plot area in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: usize,
    pub height: usize,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self { width: 72, height: 20 }
    }
}

/// Plot every plan's cost curve; later plans draw over earlier ones
pub fn render_chart(result: &ComparisonResult, size: ChartSize) -> String {
    let width = size.width.clamp(2, MAX_CHART_WIDTH);
    let height = size.height.clamp(2, MAX_CHART_HEIGHT);
    let (lo, hi) = result.cost_range().unwrap_or((0.0, 0.0));
    let max_spend = result.spend_levels().last().copied().unwrap_or(0.0);

    let mut grid = vec![vec![' '; width]; height];
    for (plan_idx, series) in result.series().iter().enumerate() {
        let glyph = GLYPHS[plan_idx % GLYPHS.len()];
        for (&spend, &cost) in result.spend_levels().iter().zip(&series.costs) {
            let col = scale(spend, 0.0, max_spend, width);
            let row = height - 1 - scale(cost, lo, hi, height);
            grid[row][col] = glyph;
        }
    }

    let hi_label = format!("{:.2}", hi);
    let lo_label = format!("{:.2}", lo);
    let label_width = hi_label.len().max(lo_label.len());

    let mut out = String::new();
    out.push_str("Health Insurance Comparison\n");
    out.push_str(&format!("{:>w$}\n", "You Pay", w = label_width));
    for (row_idx, row) in grid.iter().enumerate() {
        let label = if row_idx == 0 {
            hi_label.as_str()
        } else if row_idx == height - 1 {
            lo_label.as_str()
        } else {
            ""
        };
        let line: String = row.iter().collect();
        out.push_str(&format!("{:>w$} |{}\n", label, line.trim_end(), w = label_width));
    }

    out.push_str(&format!("{:>w$} +{}\n", "", "-".repeat(width), w = label_width));
    let max_label = format!("{:.2}", max_spend);
    out.push_str(&format!(
        "{:>w$}  0{:>r$}\n",
        "",
        max_label,
        w = label_width,
        r = width.saturating_sub(1),
    ));
    out.push_str(&format!("{:>w$}\n", "Medical Bills", w = label_width + 2 + (width + 13) / 2));

    for (plan_idx, series) in result.series().iter().enumerate() {
        out.push_str(&format!("  {} {}\n", GLYPHS[plan_idx % GLYPHS.len()], series.name));
    }

    out
}

/// Map `value` in [lo, hi] onto 0..cells
fn scale(value: f64, lo: f64, hi: f64, cells: usize) -> usize {
    if hi <= lo {
        return 0;
    }
    let pos = ((value - lo) / (hi - lo) * (cells - 1) as f64).round();
    (pos.max(0.0) as usize).min(cells - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::Plan;
    use crate::sweep::sweep;

    fn result() -> ComparisonResult {
        let plans = vec![
            Plan::builder("Flat")
                .monthly_premium(500.0)
                .deductible(0.0)
                .out_of_pocket_max(0.0)
                .build()
                .unwrap(),
            Plan::builder("Rising")
                .monthly_premium(100.0)
                .deductible(10_000.0)
                .out_of_pocket_max(10_000.0)
                .build()
                .unwrap(),
        ];
        sweep(&plans, 10_000.0, 1000.0).unwrap()
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale(0.0, 0.0, 100.0, 11), 0);
        assert_eq!(scale(50.0, 0.0, 100.0, 11), 5);
        assert_eq!(scale(100.0, 0.0, 100.0, 11), 10);
        assert_eq!(scale(7.0, 7.0, 7.0, 11), 0);
    }

    #[test]
    fn test_chart_layout() {
        let size = ChartSize { width: 40, height: 10 };
        let chart = render_chart(&result(), size);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[0], "Health Insurance Comparison");
        let plot_rows: Vec<&&str> = lines.iter().filter(|l| l.contains(" |")).collect();
        assert_eq!(plot_rows.len(), 10);
        assert!(chart.contains("  * Flat"));
        assert!(chart.contains("  + Rising"));
        assert!(chart.contains("Medical Bills"));
    }

    #[test]
    fn test_chart_extremes() {
        let size = ChartSize { width: 40, height: 10 };
        let chart = render_chart(&result(), size);
        let plot_rows: Vec<&str> = chart.lines().filter(|l| l.contains(" |")).collect();

        // Cheapest point: Rising at zero spend (1200), bottom-left
        assert!(plot_rows[9].starts_with(" 1200.00 |+"));
        // Most expensive point: Rising at the top spend (11200), top-right
        assert!(plot_rows[0].starts_with("11200.00 |"));
        assert!(plot_rows[0].ends_with('+'));
    }

    #[test]
    fn test_oversized_chart_is_clamped() {
        let size = ChartSize { width: usize::MAX, height: 3 };
        let chart = render_chart(&result(), size);
        let plot_rows: Vec<&str> = chart.lines().filter(|l| l.contains(" |")).collect();

        assert_eq!(plot_rows.len(), 3);
        assert!(chart.contains(&format!("+{}", "-".repeat(MAX_CHART_WIDTH))));

        let size = ChartSize { width: 10, height: usize::MAX };
        let chart = render_chart(&result(), size);
        assert_eq!(chart.lines().filter(|l| l.contains(" |")).count(), MAX_CHART_HEIGHT);
    }

    #[test]
    fn test_undersized_chart_is_clamped() {
        let chart = render_chart(&result(), ChartSize { width: 0, height: 0 });
        assert_eq!(chart.lines().filter(|l| l.contains(" |")).count(), 2);
    }
}
