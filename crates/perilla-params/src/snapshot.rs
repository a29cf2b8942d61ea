//! Value snapshots for host recall and preset files.
//!
//! A [`TreeSnapshot`] is the serializable state of a [`ParamTree`]: one
//! `(id, value)` pair per parameter, in registration order. Hosts store it on
//! save and hand it back on recall; preset files are the same blob written to
//! disk as JSON.
//!
//! Apply is tolerant by design: ids missing from the tree are skipped with a
//! warning (a preset from an older plugin version must still load), and
//! values are clamped through each parameter's descriptor.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ParamTree;

/// One parameter's saved value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamValue {
    /// Stable string id the value belongs to.
    pub id: String,
    /// Saved plain value.
    pub value: f32,
}

/// Serializable state of every parameter in a tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    /// Saved values in registration order.
    #[serde(default)]
    pub params: Vec<ParamValue>,
}

impl TreeSnapshot {
    /// Capture the current value of every parameter in the tree.
    pub fn capture(tree: &ParamTree) -> Self {
        Self {
            params: tree
                .iter()
                .map(|p| ParamValue {
                    id: p.id().to_string(),
                    value: p.value(),
                })
                .collect(),
        }
    }

    /// Apply saved values back onto the tree.
    ///
    /// Returns the number of values applied. Unknown ids are skipped with a
    /// warning; applied values pass through the parameter's clamp.
    pub fn apply(&self, tree: &ParamTree) -> usize {
        let mut applied = 0;
        for entry in &self.params {
            match tree.lookup(&entry.id) {
                Ok(param) => {
                    param.set_value(entry.value);
                    applied += 1;
                }
                Err(_) => {
                    warn!(id = %entry.id, "snapshot refers to unknown parameter, skipping");
                }
            }
        }
        applied
    }
}
