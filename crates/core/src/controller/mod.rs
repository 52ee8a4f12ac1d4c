//! Interaction controller: owns the application state and runs the
//! synchronous re-aggregation and re-render pass behind every gesture.

mod backend;
mod dashboard_controller;

pub use backend::*;
pub use dashboard_controller::*;
