//! Kit configurations: one dashboard row each.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Which variant the kit takes from each group, and how many units are planned.
///
/// Selections are keyed by group name. A group missing from the map is simply
/// not part of the kit (no insulation, say), so new groups never change this
/// shape.
///
/// `volume` is signed so that a bad value can reach the engine and be rejected
/// instead of being silently clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitConfiguration {
    pub name: String,
    #[serde(default)]
    pub selections: IndexMap<String, String>,
    pub volume: i64,
}

impl KitConfiguration {
    /// A kit with no selections and a volume of one.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selections: IndexMap::new(),
            volume: 1,
        }
    }

    /// Pick `variant` for `group`, replacing any earlier pick.
    pub fn select(mut self, group: impl Into<String>, variant: impl Into<String>) -> Self {
        self.selections.insert(group.into(), variant.into());
        self
    }

    pub fn with_volume(mut self, volume: i64) -> Self {
        self.volume = volume;
        self
    }

    pub fn selection(&self, group: &str) -> Option<&str> {
        self.selections.get(group).map(String::as_str)
    }
}
