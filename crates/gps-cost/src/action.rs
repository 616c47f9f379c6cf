//! Quadratic control-effort cost
//!
//! `l[t] = 0.5 * sum_i wu[i] * u[t, i]^2`. The cost has no state dependence,
//! so `lx`, `lxx` and `lux` are always zero and `luu` is `diag(wu)` at every
//! timestep.

use gps_core::{ActionCostConfig, Config, GpsError, Result, Sample};
use ndarray::{Array1, Array2, Array3, Axis};
use tracing::{debug, trace, warn};

use crate::cost::Cost;
use crate::derivatives::{repeated_diag, CostDerivatives};

/// Action (control-effort) cost term
#[derive(Debug, Clone, PartialEq)]
pub struct ActionCost {
    wu: Array1<f64>,
}

impl ActionCost {
    /// Create an action cost from a snapshot of its hyperparameters
    pub fn new(config: &ActionCostConfig) -> Self {
        if let Some(i) = config.wu.iter().position(|&w| w < 0.0) {
            warn!(
                "Action cost weight wu[{}] = {} is negative",
                i, config.wu[i]
            );
        }
        Self {
            wu: Array1::from_vec(config.wu.clone()),
        }
    }

    /// Create an action cost from the action term of a loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.action_cost()?))
    }

    /// Control weights `wu`
    pub fn weights(&self) -> &Array1<f64> {
        &self.wu
    }
}

impl Cost for ActionCost {
    fn name(&self) -> &str {
        "action"
    }

    fn eval(&self, sample: &dyn Sample) -> Result<CostDerivatives> {
        let t = sample.horizon();
        let du = sample.control_dim();
        let dx = sample.state_dim();
        let u = sample.controls();

        if self.wu.len() != du {
            return Err(GpsError::dimension("wu", du, self.wu.len()));
        }
        if u.nrows() != t {
            return Err(GpsError::dimension("controls rows", t, u.nrows()));
        }
        if u.ncols() != du {
            return Err(GpsError::dimension("controls", du, u.ncols()));
        }

        let lu = &u * &self.wu;
        let l = (u.mapv(|v| v * v) * &self.wu).sum_axis(Axis(1)) * 0.5;
        let luu = repeated_diag(t, self.wu.view());

        trace!("Action cost over {} steps: total {:.6}", t, l.sum());
        debug!("Evaluated action cost: T={}, Du={}, Dx={}", t, du, dx);

        Ok(CostDerivatives {
            l,
            lx: Array2::zeros((t, dx)),
            lu,
            lxx: Array3::zeros((t, dx, dx)),
            luu,
            lux: Array3::zeros((t, du, dx)),
        })
    }
}
