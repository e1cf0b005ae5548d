//! Health Plan Compare - annual cost of health insurance plans across medical spend
//!
//! This library provides:
//! - Validated plan records and CSV loading
//! - The annual cost formula (premium, deductible, coinsurance, copay,
//!   out-of-pocket cap, HSA credits)
//! - A sweep of every plan across an ascending range of medical spend
//! - Table, chart, CSV and JSON rendering of the comparison

pub mod error;
pub mod plan;
pub mod cost;
pub mod sweep;
pub mod report;
pub mod config;

// Re-export commonly used types
pub use error::{CostError, InvalidInputError, ValidationError};
pub use plan::{Plan, PlanBuilder};
pub use cost::{evaluate, CostEvaluator, CostOptions};
pub use sweep::{sweep, sweep_with, ComparisonResult, SweepConfig};
pub use config::CompareConfig;
