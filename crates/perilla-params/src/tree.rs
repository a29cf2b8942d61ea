//! Parameter tree: the registry a plugin editor resolves controls against.
//!
//! A [`ParamTree`] owns every [`AutomatableParam`] of a plugin instance
//! behind `Arc` and answers id lookups. Registration order is preserved so
//! generic editors and snapshots see parameters in a stable order.
//!
//! Lookup is a linear scan over the registered ids. Trees are built once at
//! editor construction and parameter counts are small, so this stays off any
//! hot path.

use std::sync::Arc;

use tracing::debug;

use crate::{AutomatableParam, ParamError, ParamInfo};

/// Ordered registry of a plugin's automatable parameters.
#[derive(Debug, Default)]
pub struct ParamTree {
    params: Vec<Arc<AutomatableParam>>,
}

impl ParamTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Build a tree from a slice of descriptors.
    ///
    /// Fails with [`ParamError::DuplicateId`] if two descriptors share an id;
    /// nothing from the slice is kept in that case.
    pub fn from_infos(infos: &[ParamInfo]) -> Result<Self, ParamError> {
        let mut tree = Self::new();
        for info in infos {
            tree.register(*info)?;
        }
        Ok(tree)
    }

    /// Register a parameter and return its shared handle.
    ///
    /// Fails with [`ParamError::DuplicateId`] if the id is already taken.
    pub fn register(&mut self, info: ParamInfo) -> Result<Arc<AutomatableParam>, ParamError> {
        if self.params.iter().any(|p| p.id() == info.id) {
            return Err(ParamError::DuplicateId(info.id.to_string()));
        }
        let param = Arc::new(AutomatableParam::new(info));
        self.params.push(Arc::clone(&param));
        debug!(id = info.id, "registered parameter");
        Ok(param)
    }

    /// Resolve a parameter by its stable string id.
    ///
    /// Fails with [`ParamError::UnknownId`] if nothing matches.
    pub fn lookup(&self, id: &str) -> Result<Arc<AutomatableParam>, ParamError> {
        self.params
            .iter()
            .find(|p| p.id() == id)
            .cloned()
            .ok_or_else(|| ParamError::UnknownId(id.to_string()))
    }

    /// Parameter at the given registration index.
    pub fn get(&self, index: usize) -> Option<&Arc<AutomatableParam>> {
        self.params.get(index)
    }

    /// Iterate over all parameters in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<AutomatableParam>> {
        self.params.iter()
    }

    /// Number of registered parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the tree has no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Restore every parameter to its descriptor default.
    pub fn reset_all(&self) {
        for param in &self.params {
            param.reset_to_default();
        }
    }
}

impl<'a> IntoIterator for &'a ParamTree {
    type Item = &'a Arc<AutomatableParam>;
    type IntoIter = std::slice::Iter<'a, Arc<AutomatableParam>>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
