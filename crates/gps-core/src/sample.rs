//! Trajectory sample contract
//!
//! A sample is a recorded rollout: `T` timesteps of states `X` (T x Dx) and
//! controls `U` (T x Du). Cost terms only ever read from a sample.

use std::path::Path;

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{GpsError, Result};

/// Read-only view of a trajectory sample consumed by cost terms
pub trait Sample {
    /// Number of timesteps `T`
    fn horizon(&self) -> usize;

    /// Control dimensionality `Du`
    fn control_dim(&self) -> usize;

    /// State dimensionality `Dx`
    fn state_dim(&self) -> usize;

    /// Control matrix, shape (T, Du)
    fn controls(&self) -> ArrayView2<'_, f64>;

    /// State matrix, shape (T, Dx)
    fn states(&self) -> ArrayView2<'_, f64>;
}

/// Owned trajectory sample backed by two dense matrices
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectorySample {
    x: Array2<f64>,
    u: Array2<f64>,
}

impl TrajectorySample {
    /// Create a sample from a state matrix (T, Dx) and a control matrix (T, Du)
    pub fn new(x: Array2<f64>, u: Array2<f64>) -> Result<Self> {
        if u.nrows() == 0 {
            return Err(GpsError::Sample(
                "trajectory must contain at least one timestep".to_string(),
            ));
        }
        if x.nrows() != u.nrows() {
            return Err(GpsError::dimension("state rows", u.nrows(), x.nrows()));
        }
        Ok(Self { x, u })
    }

    /// Create a sample whose states are all zero, for costs that ignore state
    pub fn from_controls(u: Array2<f64>, dx: usize) -> Result<Self> {
        let x = Array2::zeros((u.nrows(), dx));
        Self::new(x, u)
    }

    /// Parse a sample from its JSON record form
    pub fn from_json_str(json: &str) -> Result<Self> {
        let record: SampleRecord = serde_json::from_str(json)?;
        Self::try_from(record)
    }

    /// Load a sample from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let sample = Self::from_json_str(&contents)?;
        tracing::debug!(
            "Loaded sample from {:?}: T={}, Du={}, Dx={}",
            path,
            sample.horizon(),
            sample.control_dim(),
            sample.state_dim()
        );
        Ok(sample)
    }

    /// Convert back into the nested-list record form
    pub fn to_record(&self) -> SampleRecord {
        SampleRecord {
            x: matrix_to_rows(&self.x),
            u: matrix_to_rows(&self.u),
            dx: Some(self.x.ncols()),
        }
    }
}

impl Sample for TrajectorySample {
    fn horizon(&self) -> usize {
        self.u.nrows()
    }

    fn control_dim(&self) -> usize {
        self.u.ncols()
    }

    fn state_dim(&self) -> usize {
        self.x.ncols()
    }

    fn controls(&self) -> ArrayView2<'_, f64> {
        self.u.view()
    }

    fn states(&self) -> ArrayView2<'_, f64> {
        self.x.view()
    }
}

/// Serialized sample: one inner list per timestep
///
/// `x` may be omitted when `dx` is given; the states are then all zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    #[serde(default)]
    pub x: Vec<Vec<f64>>,
    pub u: Vec<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dx: Option<usize>,
}

impl TryFrom<SampleRecord> for TrajectorySample {
    type Error = GpsError;

    fn try_from(record: SampleRecord) -> Result<Self> {
        let u = rows_to_matrix(&record.u, "u")?;

        if record.x.is_empty() {
            return Self::from_controls(u, record.dx.unwrap_or(0));
        }

        let x = rows_to_matrix(&record.x, "x")?;
        if let Some(dx) = record.dx {
            if dx != x.ncols() {
                return Err(GpsError::dimension("dx", dx, x.ncols()));
            }
        }
        Self::new(x, u)
    }
}

fn rows_to_matrix(rows: &[Vec<f64>], name: &str) -> Result<Array2<f64>> {
    let cols = rows.first().map_or(0, Vec::len);
    if let Some(t) = rows.iter().position(|row| row.len() != cols) {
        return Err(GpsError::Sample(format!(
            "ragged rows in {name}: row {t} has {} entries, expected {cols}",
            rows[t].len()
        )));
    }
    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Ok(Array2::from_shape_vec((rows.len(), cols), flat)?)
}

fn matrix_to_rows(matrix: &Array2<f64>) -> Vec<Vec<f64>> {
    matrix.rows().into_iter().map(|row| row.to_vec()).collect()
}
