//! Aggregation engine: pure derivation of every dataset the views consume.
//!
//! Everything here is a function of (filtered holdings, filter state); no
//! rendering environment is needed to exercise it.

mod aggregation_model;
mod aggregation_service;
mod rounding;

pub use aggregation_model::*;
pub use aggregation_service::*;
pub use rounding::*;

#[cfg(test)]
mod aggregation_tests;
