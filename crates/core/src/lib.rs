//! Folioscope Core
//!
//! Client-side engine for the brokerage portfolio dashboard. It keeps one
//! source of truth (the holdings list), applies the user's sector/stock
//! cross-filter consistently across every visual, and rebuilds all derived
//! aggregates on each filter change.
//!
//! # Architecture
//!
//! ```text
//! gesture --> Interaction Controller --> Filter State mutation
//!                      |
//!                      v
//!             Aggregation Engine (pure)
//!        filtered holdings, sector roll-ups,
//!        ring/ranking datasets, KPI totals
//!                      |
//!                      v
//!               View Binders (traits)
//!        table, KPIs, legend, chart sinks
//! ```
//!
//! Data flow is unidirectional and synchronous: no binder holds derived
//! state, and every filter mutation is followed by one atomic
//! re-aggregation and re-render pass before control returns to the caller.

pub mod aggregation;
pub mod constants;
pub mod controller;
pub mod errors;
pub mod filter;
pub mod holdings;
pub mod view;

pub use aggregation::*;
pub use controller::*;
pub use errors::{Error, Result};
pub use filter::*;
pub use holdings::*;
