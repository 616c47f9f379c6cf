//! GPS Core - Core types, traits, and shared functionality
//!
//! This crate provides the foundational types used by every GPS cost term:
//! the error type, the explicit hyperparameter configuration, and the
//! trajectory sample contract.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod sample;

pub use crate::config::{
    ActionCostConfig, Config, CostSumConfig, CostTermConfig, LoggingConfig, StateCostConfig,
};
pub use error::{GpsError, Result};
pub use sample::{Sample, SampleRecord, TrajectorySample};
