//! Per-pass registry of the latest model tree per region name.

use std::collections::HashMap;

use crate::node::NodeTree;

/// Lifecycle state of a stored model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    /// The region is still open; the stored tree is a partial view.
    Open,
    /// The region closed normally; the stored tree is the full model.
    Complete,
}

/// A stored model tree with its lifecycle state.
#[derive(Debug)]
struct StoredModel {
    tree: NodeTree,
    state: ModelState,
}

/// Mapping from region name to the most recent model tree for that name.
///
/// Holds at most one tree per name: a new store unconditionally replaces the
/// previous tree, which is how sibling repetitions of a region overwrite each
/// other instead of accumulating.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: HashMap<String, StoredModel>,
}

impl ModelRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a model tree, replacing any previous tree for the same name.
    pub fn store(&mut self, name: impl Into<String>, tree: NodeTree, state: ModelState) {
        let name = name.into();
        tracing::debug!(region = %name, state = ?state, "Storing model tree");
        self.models.insert(name, StoredModel { tree, state });
    }

    /// The current tree for a region name, or `None` if no region of that
    /// name has opened yet in this pass. Absence is a normal outcome, not an
    /// error.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NodeTree> {
        self.models.get(name).map(|model| &model.tree)
    }

    /// Lifecycle state of the stored model for a name.
    #[must_use]
    pub fn state(&self, name: &str) -> Option<ModelState> {
        self.models.get(name).map(|model| model.state)
    }

    /// Whether the stored model for a name is complete.
    #[must_use]
    pub fn is_complete(&self, name: &str) -> bool {
        self.state(name) == Some(ModelState::Complete)
    }

    /// Names with a stored model.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Number of stored models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
