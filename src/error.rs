//! Error types for plan validation, cost evaluation and sweeps

use thiserror::Error;

/// A plan or sweep configuration that violates its invariants
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("coinsurance must be between 0 and 1 (got {0})")]
    CoinsuranceOutOfRange(f64),

    #[error("deductible {deductible} exceeds out-of-pocket max {out_of_pocket_max}")]
    DeductibleExceedsOutOfPocketMax {
        deductible: f64,
        out_of_pocket_max: f64,
    },

    #[error("missing required field {0}")]
    MissingField(&'static str),

    #[error("at least one plan is required")]
    NoPlans,

    #[error("step must be greater than zero (got {0})")]
    NonPositiveStep(f64),

    #[error("coverage months must be between 1 and 12 (got {0})")]
    MonthsOutOfRange(u32),

    #[error("sweep would produce {levels} spend levels, limit is {limit}")]
    TooManyLevels { levels: f64, limit: usize },
}

/// A medical spend value the evaluator cannot price
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidInputError {
    #[error("medical spend must not be negative (got {0})")]
    NegativeSpend(f64),

    #[error("medical spend must be a finite number")]
    NonFiniteSpend,
}

/// Any failure raised while sweeping plans across spend levels
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CostError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

/// Reject negative or non-finite monetary amounts
pub(crate) fn check_amount(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeAmount { field, value });
    }
    Ok(value)
}
