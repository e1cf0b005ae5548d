//! Compare health insurance plans across a range of medical bills
//!
//! Reads a plan table (CSV) from a file or stdin and prints what each plan
//! costs at every spend level from 0 up to MAX_SPEND:
//!
//! ```text
//! compare_plans 10000 < data/plans.csv
//! compare_plans 50000 --step 500 --format chart --input data/plans.csv
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use health_plan_compare::{
    plan::{load_plans, load_plans_from_reader},
    report::{render, OutputFormat},
    sweep_with, CompareConfig,
};
use log::info;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "compare_plans", about = "Health insurance annual cost comparison")]
struct Cli {
    /// Total medical bills over the coverage period (top of the sweep)
    max_spend: f64,

    /// Distance between evaluated spend levels
    #[arg(long)]
    step: Option<f64>,

    /// Months in the coverage period (usually 12)
    #[arg(long)]
    months: Option<u32>,

    /// Expected number of office visits; copay is charged once per visit
    #[arg(long)]
    visits: Option<u32>,

    /// Output style
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Plan CSV file (defaults to stdin)
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// JSON config file with defaults for the options above
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reject sweeps with more spend levels than this
    #[arg(long)]
    max_levels: Option<usize>,

    /// Chart width in characters
    #[arg(long)]
    width: Option<usize>,

    /// Chart height in characters
    #[arg(long)]
    height: Option<usize>,
}

impl Cli {
    /// Config file values overridden by explicit flags
    fn resolve_config(&self) -> Result<CompareConfig> {
        let mut config = match &self.config {
            Some(path) => CompareConfig::load(path)?,
            None => CompareConfig::default(),
        };
        if let Some(step) = self.step {
            config.step = step;
        }
        if let Some(months) = self.months {
            config.months = months;
        }
        if self.visits.is_some() {
            config.visits = self.visits;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(max_levels) = self.max_levels {
            config.max_levels = max_levels;
        }
        if let Some(width) = self.width {
            config.chart_width = width;
        }
        if let Some(height) = self.height {
            config.chart_height = height;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let start = Instant::now();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let plans = match &cli.input {
        Some(path) => load_plans(path)
            .with_context(|| format!("Failed to load plans from {}", path.display()))?,
        None => load_plans_from_reader(io::stdin().lock())
            .context("Failed to load plans from stdin")?,
    };
    info!("Loaded {} plans", plans.len());

    let result = sweep_with(&plans, &config.sweep_config(cli.max_spend))
        .context("Failed to compare plans")?;

    for crossover in result.crossovers() {
        info!(
            "{} becomes cheaper than {} at {:.2}",
            crossover.to, crossover.from, crossover.spend
        );
    }

    let output = render(&result, config.format, config.chart_size())
        .context("Failed to render report")?;
    print!("{}", output);

    info!("Done in {:?}", start.elapsed());
    Ok(())
}
