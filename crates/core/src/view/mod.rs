//! View-side contracts: table sorting, per-chart toggles, binder traits,
//! and the owned chart-instance registry.
//!
//! Binders hold no derived state of their own; every render call carries
//! everything needed to redraw from scratch, which makes each binder
//! idempotently re-render-able.

mod binders;
mod chart_registry;
mod datasets;
mod sort;
mod view_model;

pub use binders::*;
pub use chart_registry::*;
pub use datasets::*;
pub use sort::*;
pub use view_model::*;
