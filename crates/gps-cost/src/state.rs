//! Quadratic state-tracking cost

use gps_core::{GpsError, Result, Sample, StateCostConfig};
use ndarray::{Array1, Array2, Array3, Axis};
use tracing::debug;

use crate::cost::Cost;
use crate::derivatives::{repeated_diag, CostDerivatives};

/// Penalises the weighted squared distance between each state and a target
#[derive(Debug, Clone, PartialEq)]
pub struct StateCost {
    wp: Array1<f64>,
    target: Option<Array1<f64>>,
}

impl StateCost {
    pub fn new(config: &StateCostConfig) -> Self {
        Self {
            wp: Array1::from_vec(config.wp.clone()),
            target: config.target.clone().map(Array1::from_vec),
        }
    }

    pub fn weights(&self) -> &Array1<f64> {
        &self.wp
    }
}

impl Cost for StateCost {
    fn name(&self) -> &str {
        "state"
    }

    fn eval(&self, sample: &dyn Sample) -> Result<CostDerivatives> {
        let t = sample.horizon();
        let du = sample.control_dim();
        let dx = sample.state_dim();
        let x = sample.states();

        if self.wp.len() != dx {
            return Err(GpsError::dimension("wp", dx, self.wp.len()));
        }
        if x.nrows() != t {
            return Err(GpsError::dimension("states rows", t, x.nrows()));
        }
        if x.ncols() != dx {
            return Err(GpsError::dimension("states", dx, x.ncols()));
        }

        let dist = match &self.target {
            Some(target) if target.len() != dx => {
                return Err(GpsError::dimension("target", dx, target.len()));
            }
            Some(target) => &x - target,
            None => x.to_owned(),
        };

        let lx = &dist * &self.wp;
        let l = (&lx * &dist).sum_axis(Axis(1)) * 0.5;

        debug!("Evaluated state cost: T={}, Du={}, Dx={}", t, du, dx);

        Ok(CostDerivatives {
            l,
            lx,
            lu: Array2::zeros((t, du)),
            lxx: repeated_diag(t, self.wp.view()),
            luu: Array3::zeros((t, du, du)),
            lux: Array3::zeros((t, du, dx)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gps_core::TrajectorySample;
    use ndarray::array;

    #[test]
    fn test_distance_to_target() {
        let cost = StateCost::new(&StateCostConfig {
            wp: vec![2.0, 1.0],
            target: Some(vec![1.0, -1.0]),
        });
        let sample =
            TrajectorySample::new(array![[3.0, 1.0], [1.0, -1.0]], Array2::zeros((2, 1))).unwrap();

        let d = cost.eval(&sample).unwrap();

        // d = [2, 2] then [0, 0]
        assert_eq!(d.l, array![0.5 * (2.0 * 4.0 + 4.0), 0.0]);
        assert_eq!(d.lx, array![[4.0, 2.0], [0.0, 0.0]]);
        assert_eq!(d.lxx, array![[[2.0, 0.0], [0.0, 1.0]], [[2.0, 0.0], [0.0, 1.0]]]);
        assert!(d.lu.iter().all(|&v| v == 0.0));
        assert_eq!(d.luu.shape(), &[2, 1, 1]);
        assert_eq!(d.lux.shape(), &[2, 1, 2]);
    }

    #[test]
    fn test_origin_target_by_default() {
        let cost = StateCost::new(&StateCostConfig {
            wp: vec![1.0],
            target: None,
        });
        let sample = TrajectorySample::new(array![[-3.0]], array![[1.0, 1.0]]).unwrap();

        let d = cost.eval(&sample).unwrap();

        assert_eq!(d.l, array![4.5]);
        assert_eq!(d.lx, array![[-3.0]]);
    }

    #[test]
    fn test_target_length_mismatch() {
        let cost = StateCost::new(&StateCostConfig {
            wp: vec![1.0, 1.0],
            target: Some(vec![0.0]),
        });
        let sample = TrajectorySample::new(array![[0.0, 0.0]], array![[1.0]]).unwrap();

        assert!(matches!(
            cost.eval(&sample),
            Err(GpsError::DimensionMismatch { what: "target", .. })
        ));
    }

    #[test]
    fn test_weight_length_mismatch() {
        let cost = StateCost::new(&StateCostConfig {
            wp: vec![1.0],
            target: None,
        });
        let sample = TrajectorySample::from_controls(array![[1.0]], 3).unwrap();

        assert!(matches!(
            cost.eval(&sample),
            Err(GpsError::DimensionMismatch {
                what: "wp",
                expected: 3,
                found: 1
            })
        ));
    }
}
