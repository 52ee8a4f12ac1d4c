//! Owned chart-instance lifecycle.
//!
//! Every render of a target is a scoped acquire-dispose cycle: the prior
//! drawing is disposed before the replacement is created, so repeated
//! filter changes cannot leak rendering resources.

use std::collections::HashMap;

use rust_decimal::Decimal;

/// One labeled series of a chart dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub labels: Vec<String>,
    pub values: Vec<Decimal>,
    /// Per-point hex colors, parallel to `labels`.
    pub colors: Vec<String>,
    /// Per-point fade flags, parallel to `labels`.
    pub dimmed: Vec<bool>,
}

/// Dataset handed to a chart sink.
///
/// Click positions come back as (series index, point index);
/// [`hit_label`](Self::hit_label) maps them to the sector/stock label the
/// controller cross-filters on. Any replacement rendering layer must keep
/// this hit-testing contract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartDataset {
    pub series: Vec<ChartSeries>,
}

impl ChartDataset {
    /// Resolves a click hit back to its label.
    pub fn hit_label(&self, series: usize, index: usize) -> Option<&str> {
        self.series
            .get(series)?
            .labels
            .get(index)
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.labels.is_empty())
    }
}

/// A live drawing on one canvas target.
pub trait ChartInstance {
    /// Releases the rendering resources behind this drawing.
    fn dispose(&mut self);
}

/// Creates a drawing on the identified target from a dataset.
pub trait ChartFactory {
    fn create(&self, target_id: &str, dataset: &ChartDataset) -> Box<dyn ChartInstance>;
}

/// Owned-resource map of live charts keyed by canvas target id.
pub struct ChartRegistry {
    factory: Box<dyn ChartFactory>,
    instances: HashMap<String, Box<dyn ChartInstance>>,
}

impl ChartRegistry {
    pub fn new(factory: Box<dyn ChartFactory>) -> Self {
        Self {
            factory,
            instances: HashMap::new(),
        }
    }

    /// Redraws a target. The previous instance, if any, is disposed before
    /// the new one is created.
    pub fn render(&mut self, target_id: &str, dataset: &ChartDataset) {
        self.dispose(target_id);
        let instance = self.factory.create(target_id, dataset);
        self.instances.insert(target_id.to_string(), instance);
    }

    /// Clears a target without drawing a replacement, for empty datasets.
    pub fn dispose(&mut self, target_id: &str) {
        if let Some(mut instance) = self.instances.remove(target_id) {
            instance.dispose();
        }
    }

    pub fn is_rendered(&self, target_id: &str) -> bool {
        self.instances.contains_key(target_id)
    }
}
