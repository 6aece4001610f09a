//! Stack of fragment builders for the currently open model regions.

use crate::error::{ModelError, Result};

use super::fragment::FragmentBuilder;

/// LIFO stack of [`FragmentBuilder`]s, one per open model region.
///
/// Stack order equals the current nesting depth of open regions; the top is
/// the single builder receiving events. Depth never grows with sibling
/// repetitions of a region, only with nesting — that is the memory bound
/// this design exists to deliver.
#[derive(Debug, Default)]
pub struct BuilderStack {
    builders: Vec<FragmentBuilder>,
}

impl BuilderStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a builder, making it the active one. Any previous top stops
    /// receiving events until this one is popped.
    pub fn push(&mut self, builder: FragmentBuilder) {
        self.builders.push(builder);
    }

    /// Pop the active builder.
    ///
    /// # Errors
    /// Returns `ModelError::EmptyBuilderStack` if no region is open; the
    /// `region` argument names the exit that triggered the pop.
    pub fn pop(&mut self, region: &str) -> Result<FragmentBuilder> {
        self.builders
            .pop()
            .ok_or_else(|| ModelError::EmptyBuilderStack(region.to_string()))
    }

    /// The active builder: always the stack top.
    #[must_use]
    pub fn active_mut(&mut self) -> Option<&mut FragmentBuilder> {
        self.builders.last_mut()
    }

    /// The active builder's region name.
    #[must_use]
    pub fn active_region(&self) -> Option<&str> {
        self.builders.last().map(FragmentBuilder::region)
    }

    /// Number of open regions.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.builders.len()
    }

    /// Whether any region is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Remove and return all builders, innermost last.
    pub(crate) fn drain(&mut self) -> Vec<FragmentBuilder> {
        std::mem::take(&mut self.builders)
    }
}
