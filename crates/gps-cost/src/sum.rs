//! Weighted sum of cost terms

use gps_core::{CostSumConfig, GpsError, Result, Sample};
use tracing::{debug, info};

use crate::cost::{build_cost, Cost};
use crate::derivatives::CostDerivatives;

/// Sum of cost terms, each scaled by its weight
pub struct CostSum {
    costs: Vec<Box<dyn Cost>>,
    weights: Vec<f64>,
}

impl CostSum {
    /// Create a cost sum from parallel lists of terms and weights
    pub fn new(costs: Vec<Box<dyn Cost>>, weights: Vec<f64>) -> Result<Self> {
        if costs.is_empty() {
            return Err(GpsError::Config(
                "cost sum needs at least one cost term".to_string(),
            ));
        }
        if costs.len() != weights.len() {
            return Err(GpsError::Config(format!(
                "cost sum has {} terms but {} weights",
                costs.len(),
                weights.len()
            )));
        }
        Ok(Self { costs, weights })
    }

    /// Build every configured term
    pub fn from_config(config: &CostSumConfig) -> Result<Self> {
        let weights = config.resolved_weights()?;
        let costs: Vec<Box<dyn Cost>> = config.costs.iter().map(build_cost).collect();

        info!(
            "Built cost sum: [{}]",
            costs
                .iter()
                .zip(&weights)
                .map(|(cost, w)| format!("{}*{}", w, cost.name()))
                .collect::<Vec<_>>()
                .join(" + ")
        );

        Self::new(costs, weights)
    }

    /// Terms with their weights, in evaluation order
    pub fn terms(&self) -> impl Iterator<Item = (&dyn Cost, f64)> {
        self.costs
            .iter()
            .map(|cost| cost.as_ref())
            .zip(self.weights.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Evaluate every term and return `(weight * term derivatives)` per term
    pub fn eval_terms(&self, sample: &dyn Sample) -> Result<Vec<CostDerivatives>> {
        self.terms()
            .map(|(cost, weight)| {
                let mut d = cost.eval(sample)?;
                d.scale(weight);
                Ok(d)
            })
            .collect()
    }
}

impl Cost for CostSum {
    fn name(&self) -> &str {
        "sum"
    }

    fn eval(&self, sample: &dyn Sample) -> Result<CostDerivatives> {
        let mut total = CostDerivatives::zeros(
            sample.horizon(),
            sample.control_dim(),
            sample.state_dim(),
        );

        for (cost, weight) in self.terms() {
            let d = cost.eval(sample)?;
            debug!(
                "Cost term {} (weight {}): total {:.6}",
                cost.name(),
                weight,
                d.total()
            );
            total.add_scaled(weight, &d)?;
        }

        Ok(total)
    }
}

impl std::fmt::Debug for CostSum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CostSum")
            .field(
                "costs",
                &self.costs.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("weights", &self.weights)
            .finish()
    }
}
