//! Cost trait and config-driven construction

use gps_core::{CostTermConfig, Result, Sample};

use crate::action::ActionCost;
use crate::derivatives::CostDerivatives;
use crate::state::StateCost;

/// Trait for trajectory cost terms
pub trait Cost: Send + Sync {
    /// Cost term name
    fn name(&self) -> &str;

    /// Evaluate the cost and its derivatives on every timestep of a sample
    fn eval(&self, sample: &dyn Sample) -> Result<CostDerivatives>;
}

/// Build a cost term from its configuration
pub fn build_cost(config: &CostTermConfig) -> Box<dyn Cost> {
    match config {
        CostTermConfig::Action(action) => Box::new(ActionCost::new(action)),
        CostTermConfig::State(state) => Box::new(StateCost::new(state)),
    }
}
