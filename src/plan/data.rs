//! Health plan parameters

use serde::Serialize;

use crate::error::{check_amount, ValidationError};

/// Months of premium billed in a full coverage year
pub const MONTHS_PER_YEAR: u32 = 12;

/// One validated health insurance plan
///
/// Fields are private so a `Plan` can only come out of [`Plan::new`] or
/// [`PlanBuilder::build`], both of which enforce the invariants:
/// every amount is finite and non-negative, coinsurance lies in [0, 1],
/// and the deductible does not exceed the out-of-pocket maximum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    name: String,
    monthly_premium: f64,
    deductible: f64,
    copay: f64,
    coinsurance: f64,
    out_of_pocket_max: f64,
    employer_hsa_contribution: f64,
    employee_hsa_contribution: f64,
}

impl Plan {
    /// Create a plan from all of its parameters
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        monthly_premium: f64,
        deductible: f64,
        copay: f64,
        coinsurance: f64,
        out_of_pocket_max: f64,
        employer_hsa_contribution: f64,
        employee_hsa_contribution: f64,
    ) -> Result<Self, ValidationError> {
        let monthly_premium = check_amount("monthly_premium", monthly_premium)?;
        let deductible = check_amount("deductible", deductible)?;
        let copay = check_amount("copay", copay)?;
        let out_of_pocket_max = check_amount("out_of_pocket_max", out_of_pocket_max)?;
        let employer_hsa_contribution =
            check_amount("employer_hsa_contribution", employer_hsa_contribution)?;
        let employee_hsa_contribution =
            check_amount("employee_hsa_contribution", employee_hsa_contribution)?;

        if !coinsurance.is_finite() {
            return Err(ValidationError::NonFinite { field: "coinsurance" });
        }
        if !(0.0..=1.0).contains(&coinsurance) {
            return Err(ValidationError::CoinsuranceOutOfRange(coinsurance));
        }
        if deductible > out_of_pocket_max {
            return Err(ValidationError::DeductibleExceedsOutOfPocketMax {
                deductible,
                out_of_pocket_max,
            });
        }

        Ok(Self {
            name: name.into(),
            monthly_premium,
            deductible,
            copay,
            coinsurance,
            out_of_pocket_max,
            employer_hsa_contribution,
            employee_hsa_contribution,
        })
    }

    /// Start a builder for a plan with the given label
    pub fn builder(name: impl Into<String>) -> PlanBuilder {
        PlanBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn monthly_premium(&self) -> f64 {
        self.monthly_premium
    }

    pub fn deductible(&self) -> f64 {
        self.deductible
    }

    pub fn copay(&self) -> f64 {
        self.copay
    }

    pub fn coinsurance(&self) -> f64 {
        self.coinsurance
    }

    pub fn out_of_pocket_max(&self) -> f64 {
        self.out_of_pocket_max
    }

    pub fn employer_hsa_contribution(&self) -> f64 {
        self.employer_hsa_contribution
    }

    pub fn employee_hsa_contribution(&self) -> f64 {
        self.employee_hsa_contribution
    }

    /// Premium billed over `months` of coverage
    pub fn annual_premium(&self, months: u32) -> f64 {
        self.monthly_premium * months as f64
    }

    /// Combined employer and employee HSA credit for the year
    pub fn hsa_contributions(&self) -> f64 {
        self.employer_hsa_contribution + self.employee_hsa_contribution
    }
}

/// Builder for [`Plan`]
///
/// Premium, deductible and out-of-pocket max are required. Copay,
/// coinsurance and both HSA contributions default to zero.
#[derive(Debug, Clone, Default)]
pub struct PlanBuilder {
    name: String,
    monthly_premium: Option<f64>,
    deductible: Option<f64>,
    out_of_pocket_max: Option<f64>,
    copay: f64,
    coinsurance: f64,
    employer_hsa_contribution: f64,
    employee_hsa_contribution: f64,
}

impl PlanBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn monthly_premium(mut self, amount: f64) -> Self {
        self.monthly_premium = Some(amount);
        self
    }

    pub fn deductible(mut self, amount: f64) -> Self {
        self.deductible = Some(amount);
        self
    }

    pub fn out_of_pocket_max(mut self, amount: f64) -> Self {
        self.out_of_pocket_max = Some(amount);
        self
    }

    pub fn copay(mut self, amount: f64) -> Self {
        self.copay = amount;
        self
    }

    pub fn coinsurance(mut self, rate: f64) -> Self {
        self.coinsurance = rate;
        self
    }

    pub fn employer_hsa_contribution(mut self, amount: f64) -> Self {
        self.employer_hsa_contribution = amount;
        self
    }

    pub fn employee_hsa_contribution(mut self, amount: f64) -> Self {
        self.employee_hsa_contribution = amount;
        self
    }

    /// Validate and produce the immutable plan
    pub fn build(self) -> Result<Plan, ValidationError> {
        Plan::new(
            self.name,
            self.monthly_premium
                .ok_or(ValidationError::MissingField("monthly_premium"))?,
            self.deductible
                .ok_or(ValidationError::MissingField("deductible"))?,
            self.copay,
            self.coinsurance,
            self.out_of_pocket_max
                .ok_or(ValidationError::MissingField("out_of_pocket_max"))?,
            self.employer_hsa_contribution,
            self.employee_hsa_contribution,
        )
    }
}
