//! Per-document-pass processing context.

use crate::builder::BuilderStack;
use crate::registry::ModelRegistry;

/// State owned by one document pass: the stack of open region builders and
/// the model registry.
///
/// A context is created at the start of a pass, threaded explicitly through
/// every operation, and discarded (or consumed by
/// [`ModelCreator::finish`](crate::creator::ModelCreator::finish)) at the
/// end. Concurrent passes use separate contexts; nothing is shared between
/// them. Dropping a context abandons the pass — no teardown protocol beyond
/// normal reclamation.
#[derive(Debug, Default)]
pub struct PassContext {
    pub(crate) stack: BuilderStack,
    pub(crate) registry: ModelRegistry,
}

impl PassContext {
    /// Create a fresh context for one document pass.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the models built so far in this pass.
    #[must_use]
    pub fn models(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Number of currently open model regions.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }
}
