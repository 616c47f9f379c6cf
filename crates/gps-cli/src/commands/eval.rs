//! Cost evaluation command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use gps_core::{Config, Sample, TrajectorySample};
use gps_cost::{Cost, CostDerivatives, CostSum};
use serde::Serialize;
use tracing::info;

#[derive(Args)]
pub struct EvalArgs {
    /// Sample file (JSON: {"x": [[..]], "u": [[..]]})
    #[arg(short, long)]
    pub sample: PathBuf,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Omit the derivative arrays from the report
    #[arg(long)]
    pub summary: bool,
}

/// Evaluation output printed to stdout
#[derive(Debug, Serialize)]
pub struct EvalReport {
    pub horizon: usize,
    pub control_dim: usize,
    pub state_dim: usize,
    pub total_cost: f64,
    pub terms: Vec<TermReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivatives: Option<CostDerivatives>,
}

#[derive(Debug, Serialize)]
pub struct TermReport {
    pub name: String,
    pub weight: f64,
    /// Weighted total of this term
    pub total: f64,
}

impl EvalReport {
    pub fn build(sum: &CostSum, sample: &dyn Sample, summary: bool) -> Result<Self> {
        let terms = sum.eval_terms(sample)?;

        let mut total = CostDerivatives::zeros(
            sample.horizon(),
            sample.control_dim(),
            sample.state_dim(),
        );
        for term in &terms {
            total.add_scaled(1.0, term)?;
        }

        let term_reports = sum
            .terms()
            .zip(&terms)
            .map(|((cost, weight), d)| TermReport {
                name: cost.name().to_string(),
                weight,
                total: d.total(),
            })
            .collect();

        Ok(Self {
            horizon: sample.horizon(),
            control_dim: sample.control_dim(),
            state_dim: sample.state_dim(),
            total_cost: total.total(),
            terms: term_reports,
            derivatives: (!summary).then_some(total),
        })
    }
}

pub fn run(args: EvalArgs, config: Config) -> Result<()> {
    let sum = CostSum::from_config(&config.cost).context("Failed to build cost terms")?;
    let sample = TrajectorySample::load(&args.sample)
        .with_context(|| format!("Failed to load sample {}", args.sample.display()))?;

    let report = EvalReport::build(&sum, &sample, args.summary)?;
    info!(
        "Evaluated {} over {} steps: total cost {:.6}",
        sum.name(),
        report.horizon,
        report.total_cost
    );

    let rendered = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{rendered}");

    Ok(())
}
