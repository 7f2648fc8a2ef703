use serde::{Deserialize, Serialize};

use crate::selection::SelectionPolicy;

/// Pool configuration.
///
/// Deserializable so a host can embed it in its own configuration; missing
/// fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolOptions {
    /// Name used to tag the pool's log records.
    pub label: String,
    /// Reuse policy the pool passes to its strategy on every acquire.
    pub selection: SelectionPolicy,
}

impl PoolOptions {
    pub fn with_label(mut self, label: impl Into<String>) -> PoolOptions {
        self.label = label.into();
        self
    }

    pub fn with_selection(mut self, selection: SelectionPolicy) -> PoolOptions {
        self.selection = selection;
        self
    }
}

impl Default for PoolOptions {
    fn default() -> Self {
        PoolOptions {
            label: "pool".to_string(),
            selection: SelectionPolicy::FirstFit,
        }
    }
}
