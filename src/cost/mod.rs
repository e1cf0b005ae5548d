//! Annual cost of a plan at a given level of medical spend
//!
//! The policyholder pays:
//! - the premium for every covered month
//! - all spend up to the deductible
//! - the coinsurance share of spend above the deductible
//! - copays
//!
//! Medical cost (everything except premium) is capped at the plan's
//! out-of-pocket maximum, and HSA contributions are credited once per year.
//! A negative total means the HSA credits outweigh premium plus medical cost.

use crate::error::{InvalidInputError, ValidationError};
use crate::plan::{Plan, MONTHS_PER_YEAR};
use serde::{Deserialize, Serialize};

/// Options that shape the cost formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostOptions {
    /// Months of premium to bill (1 to 12)
    #[serde(default = "default_months")]
    pub months: u32,

    /// Expected office visits. `None` charges the copay once whenever there
    /// is any medical spend; `Some(n)` charges it `n` times.
    #[serde(default)]
    pub visits: Option<u32>,
}

fn default_months() -> u32 { MONTHS_PER_YEAR }

impl Default for CostOptions {
    fn default() -> Self {
        Self {
            months: MONTHS_PER_YEAR,
            visits: None,
        }
    }
}

impl CostOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.months == 0 || self.months > MONTHS_PER_YEAR {
            return Err(ValidationError::MonthsOutOfRange(self.months));
        }
        Ok(())
    }
}

/// Components of one cost evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub medical_spend: f64,
    pub premium: f64,
    pub deductible_paid: f64,
    pub coinsurance_paid: f64,
    pub copays: f64,
    /// Deductible + coinsurance + copays, after the out-of-pocket cap
    pub medical_cost: f64,
    pub hsa_credit: f64,
    pub total: f64,
}

impl CostBreakdown {
    /// Whether the out-of-pocket maximum limited the medical cost
    pub fn capped(&self) -> bool {
        self.medical_cost < self.deductible_paid + self.coinsurance_paid + self.copays
    }
}

/// Stateless evaluator holding validated [`CostOptions`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CostEvaluator {
    options: CostOptions,
}

impl CostEvaluator {
    pub fn new(options: CostOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &CostOptions {
        &self.options
    }

    /// Total annual cost for `plan` at `medical_spend`
    pub fn evaluate(&self, plan: &Plan, medical_spend: f64) -> Result<f64, InvalidInputError> {
        self.breakdown(plan, medical_spend).map(|b| b.total)
    }

    /// Full breakdown of the annual cost for `plan` at `medical_spend`
    pub fn breakdown(&self, plan: &Plan, medical_spend: f64) -> Result<CostBreakdown, InvalidInputError> {
        if !medical_spend.is_finite() {
            return Err(InvalidInputError::NonFiniteSpend);
        }
        if medical_spend < 0.0 {
            return Err(InvalidInputError::NegativeSpend(medical_spend));
        }

        let premium = plan.annual_premium(self.options.months);

        let deductible_paid = medical_spend.min(plan.deductible());
        let above_deductible = (medical_spend - plan.deductible()).max(0.0);
        let coinsurance_paid = above_deductible * plan.coinsurance();

        let copays = match self.options.visits {
            Some(visits) => plan.copay() * visits as f64,
            None if medical_spend > 0.0 => plan.copay(),
            None => 0.0,
        };

        let medical_cost = (deductible_paid + coinsurance_paid + copays).min(plan.out_of_pocket_max());
        let hsa_credit = plan.hsa_contributions();

        Ok(CostBreakdown {
            medical_spend,
            premium,
            deductible_paid,
            coinsurance_paid,
            copays,
            medical_cost,
            hsa_credit,
            total: premium + medical_cost - hsa_credit,
        })
    }
}

/// Total annual cost for `plan` at `medical_spend` with a full year of
/// premiums and a single copay
pub fn evaluate(plan: &Plan, medical_spend: f64) -> Result<f64, InvalidInputError> {
    CostEvaluator::default().evaluate(plan, medical_spend)
}
