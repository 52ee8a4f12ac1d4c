//! Cross-filter state shared by every view.

mod filter_model;

pub use filter_model::*;
