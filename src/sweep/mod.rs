//! Sweep every plan across an ascending range of medical spend
//!
//! Spend levels run `0, step, 2*step, ...` up to the last multiple of `step`
//! that does not exceed `max_spend`. When `max_spend` is not itself a
//! multiple of `step` it is appended, so the top level is always exactly
//! `max_spend` and there are `ceil(max_spend / step) + 1` levels.
//!
//! A `max_spend` within a relative 1e-9 of a nonzero multiple counts as that
//! multiple: the multiple is replaced by `max_spend` rather than followed by
//! a level a rounding error away.

mod result;

pub use result::{ComparisonResult, Crossover, PlanSeries};

use crate::cost::{CostEvaluator, CostOptions};
use crate::error::{check_amount, CostError, ValidationError};
use crate::plan::Plan;
use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Default distance between spend levels
pub const DEFAULT_STEP: f64 = 1000.0;

/// Default upper bound on the number of spend levels in one sweep
pub const DEFAULT_MAX_LEVELS: usize = 100_000;

/// Relative tolerance when deciding whether `max_spend` is a multiple of `step`
const MULTIPLE_TOLERANCE: f64 = 1e-9;

/// Sweep configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Highest medical spend to evaluate
    pub max_spend: f64,

    /// Distance between consecutive spend levels
    #[serde(default = "default_step")]
    pub step: f64,

    /// Reject sweeps that would produce more levels than this
    #[serde(default = "default_max_levels")]
    pub max_levels: usize,

    #[serde(default)]
    pub cost: CostOptions,
}

fn default_step() -> f64 { DEFAULT_STEP }
fn default_max_levels() -> usize { DEFAULT_MAX_LEVELS }

impl SweepConfig {
    pub fn new(max_spend: f64, step: f64) -> Self {
        Self {
            max_spend,
            step,
            max_levels: DEFAULT_MAX_LEVELS,
            cost: CostOptions::default(),
        }
    }

    /// Ascending spend levels for this configuration
    pub fn spend_levels(&self) -> Result<Vec<f64>, ValidationError> {
        let max_spend = check_amount("max_spend", self.max_spend)?;
        if !self.step.is_finite() {
            return Err(ValidationError::NonFinite { field: "step" });
        }
        if self.step <= 0.0 {
            return Err(ValidationError::NonPositiveStep(self.step));
        }

        let ratio = max_spend / self.step;
        let whole_steps = (ratio + MULTIPLE_TOLERANCE * ratio.max(1.0)).floor();
        let top_multiple = (whole_steps * self.step).min(max_spend);

        // Within tolerance of a multiple the nearest multiple becomes
        // `max_spend`; otherwise `max_spend` is appended. Level 0 is never
        // replaced.
        let snap = whole_steps >= 1.0
            && (max_spend - top_multiple) / self.step <= MULTIPLE_TOLERANCE * ratio.max(1.0);
        let append = top_multiple < max_spend && !snap;

        // Guard the level count before allocating anything
        let count = whole_steps + 1.0 + if append { 1.0 } else { 0.0 };
        if count > self.max_levels as f64 {
            return Err(ValidationError::TooManyLevels {
                levels: count,
                limit: self.max_levels,
            });
        }

        let mut levels: Vec<f64> = (0..=whole_steps as usize)
            .map(|i| (i as f64 * self.step).min(max_spend))
            .collect();
        if append {
            levels.push(max_spend);
        } else if let Some(last) = levels.last_mut() {
            if snap {
                *last = max_spend;
            }
        }

        Ok(levels)
    }
}

/// Evaluate every plan at every spend level from 0 to `max_spend`
pub fn sweep(plans: &[Plan], max_spend: f64, step: f64) -> Result<ComparisonResult, CostError> {
    sweep_with(plans, &SweepConfig::new(max_spend, step))
}

/// Evaluate every plan at every spend level described by `config`
///
/// Plans are evaluated in parallel; the result keeps input plan order and
/// ascending spend order.
pub fn sweep_with(plans: &[Plan], config: &SweepConfig) -> Result<ComparisonResult, CostError> {
    if plans.is_empty() {
        return Err(ValidationError::NoPlans.into());
    }
    let evaluator = CostEvaluator::new(config.cost)?;
    let levels = config.spend_levels()?;

    info!(
        "Sweeping {} plans across {} spend levels (0 to {:.2}, step {:.2})",
        plans.len(),
        levels.len(),
        config.max_spend,
        config.step
    );

    let series = plans
        .par_iter()
        .map(|plan| -> Result<PlanSeries, CostError> {
            let costs = levels
                .iter()
                .map(|&spend| evaluator.evaluate(plan, spend))
                .collect::<Result<Vec<f64>, _>>()?;
            debug!("{}: {} levels evaluated", plan.name(), costs.len());
            Ok(PlanSeries {
                name: plan.name().to_string(),
                costs,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ComparisonResult::new(levels, series))
}
