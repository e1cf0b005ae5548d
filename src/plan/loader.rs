//! Load plans from CSV
//!
//! Expected header (column order does not matter):
//!
//! ```text
//! name,monthly_premium,deductible,copay,coinsurance,out_of_pocket_max,employer_hsa_contribution,employee_hsa_contribution
//! "HSA 2000-20",400,2000,0,0.20,8000,100,0
//! ```
//!
//! Empty numeric cells read as zero.

use super::{Plan, PlanBuilder};
use crate::error::ValidationError;
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading a plan table
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row} ({name:?}): {source}")]
    InvalidRow {
        row: usize,
        name: String,
        #[source]
        source: ValidationError,
    },

    #[error("no plans found in input")]
    Empty,
}

/// Raw CSV row before validation
#[derive(Debug, Deserialize)]
struct PlanRow {
    #[serde(default)]
    name: String,
    #[serde(default)]
    monthly_premium: Option<f64>,
    #[serde(default)]
    deductible: Option<f64>,
    #[serde(default)]
    copay: Option<f64>,
    #[serde(default)]
    coinsurance: Option<f64>,
    #[serde(default)]
    out_of_pocket_max: Option<f64>,
    #[serde(default)]
    employer_hsa_contribution: Option<f64>,
    #[serde(default)]
    employee_hsa_contribution: Option<f64>,
}

impl PlanRow {
    fn into_plan(self) -> Result<Plan, ValidationError> {
        PlanBuilder::new(self.name)
            .monthly_premium(self.monthly_premium.unwrap_or(0.0))
            .deductible(self.deductible.unwrap_or(0.0))
            .out_of_pocket_max(self.out_of_pocket_max.unwrap_or(0.0))
            .copay(self.copay.unwrap_or(0.0))
            .coinsurance(self.coinsurance.unwrap_or(0.0))
            .employer_hsa_contribution(self.employer_hsa_contribution.unwrap_or(0.0))
            .employee_hsa_contribution(self.employee_hsa_contribution.unwrap_or(0.0))
            .build()
    }
}

/// Load plans from a CSV file
pub fn load_plans<P: AsRef<Path>>(path: P) -> Result<Vec<Plan>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_plans_from_reader(file)
}

/// Load plans from any CSV source (file, stdin, in-memory string)
pub fn load_plans_from_reader<R: Read>(reader: R) -> Result<Vec<Plan>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut plans = Vec::new();
    let mut seen = HashSet::new();

    for (idx, result) in rdr.deserialize::<PlanRow>().enumerate() {
        let row_num = idx + 1;
        let row = result?;
        let name = row.name.clone();
        let plan = row.into_plan().map_err(|source| LoadError::InvalidRow {
            row: row_num,
            name: name.clone(),
            source,
        })?;

        if !seen.insert(name.clone()) {
            warn!("Duplicate plan name {:?} at row {}; report columns will be ambiguous", name, row_num);
        }
        debug!("Loaded plan {:?}", plan.name());
        plans.push(plan);
    }

    if plans.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(plans)
}
