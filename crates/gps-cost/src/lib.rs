//! GPS Cost - Cost terms for trajectory optimization
//!
//! Each cost term evaluates a trajectory sample and returns the cost per
//! timestep together with its first and second derivatives with respect to
//! state and control. A trajectory optimizer sums these terms via
//! [`CostSum`].

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]

pub mod action;
pub mod cost;
pub mod derivatives;
pub mod state;
pub mod sum;

pub use action::ActionCost;
pub use cost::{build_cost, Cost};
pub use derivatives::CostDerivatives;
pub use state::StateCost;
pub use sum::CostSum;
