//! Cost value and derivatives over a trajectory

use gps_core::{GpsError, Result};
use ndarray::{Array1, Array2, Array3, ArrayView1, Dimension};
use serde::Serialize;

/// Cost and derivatives at every timestep of a sample
///
/// Shapes, for horizon `T`, control dimension `Du` and state dimension `Dx`:
/// `l` (T), `lx` (T, Dx), `lu` (T, Du), `lxx` (T, Dx, Dx), `luu` (T, Du, Du),
/// `lux` (T, Du, Dx).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostDerivatives {
    pub l: Array1<f64>,
    pub lx: Array2<f64>,
    pub lu: Array2<f64>,
    pub lxx: Array3<f64>,
    pub luu: Array3<f64>,
    pub lux: Array3<f64>,
}

impl CostDerivatives {
    /// All-zero derivatives of the given dimensions
    pub fn zeros(t: usize, du: usize, dx: usize) -> Self {
        Self {
            l: Array1::zeros(t),
            lx: Array2::zeros((t, dx)),
            lu: Array2::zeros((t, du)),
            lxx: Array3::zeros((t, dx, dx)),
            luu: Array3::zeros((t, du, du)),
            lux: Array3::zeros((t, du, dx)),
        }
    }

    pub fn horizon(&self) -> usize {
        self.l.len()
    }

    pub fn control_dim(&self) -> usize {
        self.lu.ncols()
    }

    pub fn state_dim(&self) -> usize {
        self.lx.ncols()
    }

    /// Total cost over the trajectory
    pub fn total(&self) -> f64 {
        self.l.sum()
    }

    /// `self += weight * other`, elementwise on all six arrays
    pub fn add_scaled(&mut self, weight: f64, other: &CostDerivatives) -> Result<()> {
        check_shape("l", self.l.raw_dim(), other.l.raw_dim())?;
        check_shape("lx", self.lx.raw_dim(), other.lx.raw_dim())?;
        check_shape("lu", self.lu.raw_dim(), other.lu.raw_dim())?;
        check_shape("lxx", self.lxx.raw_dim(), other.lxx.raw_dim())?;
        check_shape("luu", self.luu.raw_dim(), other.luu.raw_dim())?;
        check_shape("lux", self.lux.raw_dim(), other.lux.raw_dim())?;

        self.l.scaled_add(weight, &other.l);
        self.lx.scaled_add(weight, &other.lx);
        self.lu.scaled_add(weight, &other.lu);
        self.lxx.scaled_add(weight, &other.lxx);
        self.luu.scaled_add(weight, &other.luu);
        self.lux.scaled_add(weight, &other.lux);
        Ok(())
    }

    /// Multiply every array by `weight`
    pub fn scale(&mut self, weight: f64) {
        self.l *= weight;
        self.lx *= weight;
        self.lu *= weight;
        self.lxx *= weight;
        self.luu *= weight;
        self.lux *= weight;
    }

    /// `(l, lx, lu, lxx, luu, lux)`
    #[allow(clippy::type_complexity)]
    pub fn into_tuple(
        self,
    ) -> (
        Array1<f64>,
        Array2<f64>,
        Array2<f64>,
        Array3<f64>,
        Array3<f64>,
        Array3<f64>,
    ) {
        (self.l, self.lx, self.lu, self.lxx, self.luu, self.lux)
    }
}

/// `diag(weights)` stacked `t` times, shape (t, n, n)
pub(crate) fn repeated_diag(t: usize, weights: ArrayView1<'_, f64>) -> Array3<f64> {
    let diag = Array2::from_diag(&weights);
    let mut stacked = Array3::zeros((t, weights.len(), weights.len()));
    for mut slice in stacked.outer_iter_mut() {
        slice.assign(&diag);
    }
    stacked
}

fn check_shape<D: Dimension>(name: &'static str, expected: D, found: D) -> Result<()> {
    if expected == found {
        return Ok(());
    }
    let axis = expected
        .slice()
        .iter()
        .zip(found.slice())
        .position(|(a, b)| a != b)
        .unwrap_or(0);
    Err(GpsError::dimension(
        name,
        expected.slice()[axis],
        found.slice()[axis],
    ))
}
