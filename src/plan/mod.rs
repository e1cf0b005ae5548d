//! Plan records and CSV loading

mod data;
pub mod loader;

pub use data::{Plan, PlanBuilder, MONTHS_PER_YEAR};
pub use loader::{load_plans, load_plans_from_reader, LoadError};
