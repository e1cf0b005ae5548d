//! Render a [`ComparisonResult`] for people or for other tools

mod chart;

pub use chart::{render_chart, ChartSize, MAX_CHART_HEIGHT, MAX_CHART_WIDTH};

use crate::sweep::ComparisonResult;
use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Output style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width text table
    #[default]
    Table,
    /// ASCII line chart
    Chart,
    /// Comma-separated values
    Csv,
    /// Pretty-printed JSON
    Json,
}

/// Render `result` in the requested format
pub fn render(result: &ComparisonResult, format: OutputFormat, size: ChartSize) -> Result<String, ReportError> {
    match format {
        OutputFormat::Table => Ok(render_table(result)),
        OutputFormat::Chart => Ok(render_chart(result, size)),
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            write_csv(result, &mut buf)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
        OutputFormat::Json => render_json(result),
    }
}

/// Text table with one row per spend level; `*` marks the cheapest plan
pub fn render_table(result: &ComparisonResult) -> String {
    const SPEND_HEADER: &str = "Medical Bills";

    let cell = |v: f64| format!("{:.2}", v);
    let spend_width = result
        .spend_levels()
        .iter()
        .map(|&s| cell(s).len())
        .chain(std::iter::once(SPEND_HEADER.len()))
        .max()
        .unwrap_or(SPEND_HEADER.len());
    let widths: Vec<usize> = result
        .series()
        .iter()
        .map(|s| {
            s.costs
                .iter()
                .map(|&c| cell(c).len() + 1)
                .chain(std::iter::once(s.name.len()))
                .max()
                .unwrap_or(s.name.len())
        })
        .collect();

    let mut out = String::new();
    out.push_str(&format!("{:>w$}", SPEND_HEADER, w = spend_width));
    for (series, &w) in result.series().iter().zip(&widths) {
        out.push_str(&format!(" | {:>w$}", series.name, w = w));
    }
    out.push('\n');

    let rule_len = spend_width + widths.iter().map(|w| w + 3).sum::<usize>();
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');

    for (level_idx, &spend) in result.spend_levels().iter().enumerate() {
        let cheapest = result.cheapest_at(level_idx);
        out.push_str(&format!("{:>w$}", cell(spend), w = spend_width));
        for (plan_idx, (series, &w)) in result.series().iter().zip(&widths).enumerate() {
            let mark = if cheapest == Some(plan_idx) { "*" } else { "" };
            let value = format!("{}{}", mark, cell(series.costs[level_idx]));
            out.push_str(&format!(" | {:>w$}", value, w = w));
        }
        out.push('\n');
    }

    out
}

/// CSV with a `medical_spend` column followed by one column per plan
pub fn write_csv<W: Write>(result: &ComparisonResult, writer: W) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["medical_spend".to_string()];
    header.extend(result.series().iter().map(|s| s.name.clone()));
    wtr.write_record(&header)?;

    for (level_idx, &spend) in result.spend_levels().iter().enumerate() {
        let mut record = vec![format!("{:.2}", spend)];
        record.extend(
            result
                .series()
                .iter()
                .map(|s| format!("{:.2}", s.costs[level_idx])),
        );
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Pretty JSON: spend levels, per-plan series and crossovers
pub fn render_json(result: &ComparisonResult) -> Result<String, ReportError> {
    #[derive(Serialize)]
    struct JsonReport<'a> {
        #[serde(flatten)]
        result: &'a ComparisonResult,
        crossovers: Vec<crate::sweep::Crossover>,
    }

    let report = JsonReport {
        result,
        crossovers: result.crossovers(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::load_plans_from_reader;
    use crate::sweep::sweep;

    const PLANS_CSV: &str = "\
name,monthly_premium,deductible,copay,coinsurance,out_of_pocket_max,employer_hsa_contribution,employee_hsa_contribution
\"HSA 2000-20\",400,2000,0,0.20,8000,100,0
\"HSA 3000-20\",300,3000,0,0.20,10000,100,0
";

    fn result() -> ComparisonResult {
        let plans = load_plans_from_reader(PLANS_CSV.as_bytes()).unwrap();
        sweep(&plans, 10_000.0, 5000.0).unwrap()
    }

    #[test]
    fn test_table() {
        let table = render_table(&result());
        let lines: Vec<&str> = table.lines().collect();

        // header, rule, 3 levels
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("Medical Bills"));
        assert!(lines[0].contains("HSA 2000-20"));
        assert!(lines[0].contains("HSA 3000-20"));
        assert!(lines[1].chars().all(|c| c == '-'));
        // At zero spend the lower premium plan is cheapest: 3600 - 100
        assert!(lines[2].contains("*3500.00"));
        assert!(lines[2].contains("4700.00"));
        assert!(lines[3].starts_with("      5000.00"));
    }

    #[test]
    fn test_csv() {
        let mut buf = Vec::new();
        write_csv(&result(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("medical_spend,HSA 2000-20,HSA 3000-20"));
        assert_eq!(lines.next(), Some("0.00,4700.00,3500.00"));
        assert_eq!(lines.next(), Some("5000.00,7300.00,6900.00"));
        assert_eq!(lines.next(), Some("10000.00,8300.00,7900.00"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_json() {
        let json = render_json(&result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["spend_levels"].as_array().unwrap().len(), 3);
        assert_eq!(value["series"][0]["name"], "HSA 2000-20");
        assert_eq!(value["series"][1]["costs"][0], 3500.0);
        assert!(value["crossovers"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_render_dispatch() {
        let r = result();
        let size = ChartSize::default();
        assert_eq!(render(&r, OutputFormat::Table, size).unwrap(), render_table(&r));
        assert!(render(&r, OutputFormat::Csv, size).unwrap().starts_with("medical_spend,"));
        assert!(render(&r, OutputFormat::Chart, size).unwrap().contains("Health Insurance Comparison"));
    }

    #[test]
    fn test_format_from_json() {
        let format: OutputFormat = serde_json::from_str("\"chart\"").unwrap();
        assert_eq!(format, OutputFormat::Chart);
    }
}
