//! Output of a sweep: annual cost per plan per spend level

use serde::Serialize;

/// Costs for one plan, aligned with [`ComparisonResult::spend_levels`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSeries {
    pub name: String,
    pub costs: Vec<f64>,
}

/// Point where a different plan becomes the cheapest
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Crossover {
    /// First spend level at which `to` is cheapest
    pub spend: f64,
    pub from: String,
    pub to: String,
}

/// Annual cost of every plan at every spend level
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    spend_levels: Vec<f64>,
    series: Vec<PlanSeries>,
}

impl ComparisonResult {
    pub(crate) fn new(spend_levels: Vec<f64>, series: Vec<PlanSeries>) -> Self {
        debug_assert!(series.iter().all(|s| s.costs.len() == spend_levels.len()));
        Self { spend_levels, series }
    }

    /// Ascending spend levels
    pub fn spend_levels(&self) -> &[f64] {
        &self.spend_levels
    }

    /// Per-plan costs in input plan order
    pub fn series(&self) -> &[PlanSeries] {
        &self.series
    }

    /// Cost of plan `plan_idx` at spend level `level_idx`
    pub fn cost(&self, plan_idx: usize, level_idx: usize) -> Option<f64> {
        self.series.get(plan_idx)?.costs.get(level_idx).copied()
    }

    /// Costs for the first plan named `name`
    pub fn costs_for(&self, name: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.costs.as_slice())
    }

    /// Index of the cheapest plan at a spend level; ties go to the earlier plan
    pub fn cheapest_at(&self, level_idx: usize) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, series) in self.series.iter().enumerate() {
            let cost = *series.costs.get(level_idx)?;
            match best {
                Some((_, best_cost)) if cost >= best_cost => {}
                _ => best = Some((idx, cost)),
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Spend levels at which the cheapest plan changes
    pub fn crossovers(&self) -> Vec<Crossover> {
        let mut crossovers = Vec::new();
        let mut current: Option<usize> = None;

        for (level_idx, &spend) in self.spend_levels.iter().enumerate() {
            let Some(cheapest) = self.cheapest_at(level_idx) else {
                continue;
            };
            if let Some(prev) = current {
                if prev != cheapest {
                    crossovers.push(Crossover {
                        spend,
                        from: self.series[prev].name.clone(),
                        to: self.series[cheapest].name.clone(),
                    });
                }
            }
            current = Some(cheapest);
        }

        crossovers
    }

    /// Lowest and highest cost across all plans and levels
    pub fn cost_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.costs.iter().copied())
            .fold(None, |acc, cost| match acc {
                None => Some((cost, cost)),
                Some((lo, hi)) => Some((lo.min(cost), hi.max(cost))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> ComparisonResult {
        ComparisonResult::new(
            vec![0.0, 1000.0, 2000.0, 3000.0],
            vec![
                PlanSeries { name: "Low premium".into(), costs: vec![100.0, 900.0, 1700.0, 1800.0] },
                PlanSeries { name: "High premium".into(), costs: vec![600.0, 700.0, 800.0, 900.0] },
                PlanSeries { name: "Middle".into(), costs: vec![100.0, 800.0, 1500.0, 1600.0] },
            ],
        )
    }

    #[test]
    fn test_lookup() {
        let r = result();
        assert_eq!(r.cost(1, 2), Some(800.0));
        assert_eq!(r.cost(3, 0), None);
        assert_eq!(r.cost(0, 4), None);
        assert_eq!(r.costs_for("Middle"), Some(&[100.0, 800.0, 1500.0, 1600.0][..]));
        assert_eq!(r.costs_for("Missing"), None);
    }

    #[test]
    fn test_cheapest_prefers_first_on_tie() {
        let r = result();
        assert_eq!(r.cheapest_at(0), Some(0));
        assert_eq!(r.cheapest_at(1), Some(1));
        assert_eq!(r.cheapest_at(9), None);
    }

    #[test]
    fn test_crossovers() {
        let crossovers = result().crossovers();
        assert_eq!(
            crossovers,
            vec![Crossover {
                spend: 1000.0,
                from: "Low premium".into(),
                to: "High premium".into(),
            }]
        );
    }

    #[test]
    fn test_cost_range() {
        assert_eq!(result().cost_range(), Some((100.0, 1800.0)));
        assert_eq!(ComparisonResult::new(vec![], vec![]).cost_range(), None);
    }
}
