//! Model creator: routes stream events to region builders and maintains the
//! active-handler swap protocol.

use std::collections::BTreeSet;

use crate::builder::FragmentBuilder;
use crate::config::{ModelConfig, UnclosedPolicy};
use crate::context::PassContext;
use crate::error::{ModelError, Result};
use crate::event::{Attribute, StreamEvent};
use crate::node::{Element, NodeTree};
use crate::registry::{ModelRegistry, ModelState};

/// Builds in-memory fragment models for configured element names as a
/// document streams past.
///
/// When the stream enters an element whose name is configured as a model
/// boundary, a fresh [`FragmentBuilder`] is pushed and becomes the sole
/// receiver of events; the previous builder (if any) is suspended. When that
/// element closes, the finished tree is stored in the pass's
/// [`ModelRegistry`] under the region name, replacing any earlier tree for
/// the same name, and the parent builder resumes. Sibling repetitions of a
/// region therefore overwrite each other instead of accumulating, and an
/// outer model never contains the data of an inner model.
///
/// One creator is immutable and shared across passes; all per-pass state
/// lives in the [`PassContext`] passed to every call.
#[derive(Debug)]
pub struct ModelCreator {
    config: ModelConfig,
}

impl ModelCreator {
    /// Create a model creator from a validated configuration.
    ///
    /// # Errors
    /// Returns `ModelError::EmptyModelSet` if the configuration names no
    /// model elements.
    pub fn new(config: ModelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The element names that act as model region boundaries.
    ///
    /// The external selector consults this set to decide which elements it
    /// routes through region enter/exit handling.
    #[must_use]
    pub fn model_names(&self) -> &BTreeSet<String> {
        self.config.model_names()
    }

    /// Whether an element name is a model region boundary.
    #[must_use]
    pub fn is_model_element(&self, name: &str) -> bool {
        self.config.model_names().contains(name)
    }

    /// Process one event from the document stream.
    ///
    /// Events for model-boundary elements open and close regions; all other
    /// events go to the currently active builder only. Events arriving while
    /// no region is open are not modeled and are ignored.
    ///
    /// # Errors
    /// Returns a protocol-violation error for a region exit with no open
    /// region, a region exit that does not match the innermost open region,
    /// or an element end below the document root. A failed pass is not
    /// retried; the caller abandons the context.
    pub fn process(&self, ctx: &mut PassContext, event: &StreamEvent) -> Result<()> {
        match event {
            StreamEvent::StartElement { name, attributes } if self.is_model_element(name) => {
                self.open_region(ctx, name, attributes)
            }
            StreamEvent::EndElement { name } if self.is_model_element(name) => {
                self.close_region(ctx, name)
            }
            StreamEvent::StartElement { name, attributes } => {
                if let Some(builder) = ctx.stack.active_mut() {
                    builder.start_element(name, attributes.clone())?;
                }
                Ok(())
            }
            StreamEvent::Text { content, kind } => {
                if let Some(builder) = ctx.stack.active_mut() {
                    builder.text(content, *kind);
                }
                Ok(())
            }
            StreamEvent::EndElement { .. } => {
                if let Some(builder) = ctx.stack.active_mut() {
                    builder.end_element()?;
                }
                Ok(())
            }
        }
    }

    /// End the document pass, consuming the context.
    ///
    /// With an empty builder stack this simply hands back the registry. With
    /// regions still open, the configured [`UnclosedPolicy`] decides between
    /// failing the pass and publishing the partial trees as open models.
    ///
    /// # Errors
    /// Returns `ModelError::UnclosedRegions` under [`UnclosedPolicy::Abort`]
    /// when regions are still open.
    pub fn finish(&self, mut ctx: PassContext) -> Result<ModelRegistry> {
        let open = ctx.stack.drain();
        if open.is_empty() {
            return Ok(ctx.registry);
        }

        let names: Vec<String> = open
            .iter()
            .map(|builder| builder.region().to_string())
            .collect();

        match self.config.unclosed_policy() {
            UnclosedPolicy::Abort => {
                tracing::warn!(
                    regions = ?names,
                    "Document pass ended with unclosed model regions"
                );
                Err(ModelError::UnclosedRegions { names })
            }
            UnclosedPolicy::PublishPartial => {
                for builder in open {
                    tracing::warn!(
                        region = %builder.region(),
                        "Region never closed, publishing partial model"
                    );
                    let region = builder.region().to_string();
                    if let Some(tree) = builder.into_tree() {
                        ctx.registry.store(region, tree, ModelState::Open);
                    }
                }
                Ok(ctx.registry)
            }
        }
    }

    /// Push a fresh builder for a matched region enter.
    ///
    /// The previous stack top is implicitly suspended: the active handler is
    /// always the stack top, so the swap is the push itself. The enter event
    /// becomes the new builder's root element, and a root-only snapshot is
    /// registered immediately so the model is observable before the region
    /// closes.
    fn open_region(&self, ctx: &mut PassContext, name: &str, attributes: &[Attribute]) -> Result<()> {
        tracing::debug!(region = %name, depth = ctx.stack.depth(), "Opening model region");

        let mut builder = FragmentBuilder::new(name);
        builder.start_element(name, attributes.to_vec())?;

        let snapshot = NodeTree::new(Element::new(name, attributes.to_vec()));
        ctx.registry.store(name, snapshot, ModelState::Open);

        ctx.stack.push(builder);
        Ok(())
    }

    /// Pop the active builder for a matched region exit and store its tree.
    fn close_region(&self, ctx: &mut PassContext, name: &str) -> Result<()> {
        match ctx.stack.active_region() {
            None => {
                return Err(ModelError::EmptyBuilderStack(name.to_string()));
            }
            Some(active) if active != name => {
                return Err(ModelError::RegionMismatch {
                    expected: active.to_string(),
                    found: name.to_string(),
                });
            }
            Some(_) => {}
        }

        let mut builder = ctx.stack.pop(name)?;
        let innermost = builder.open_element().map(str::to_string);
        builder.end_element()?;

        if !builder.is_complete() {
            // Elements inside the region were left open: the source violated
            // nesting order.
            return Err(ModelError::RegionMismatch {
                expected: innermost.unwrap_or_else(|| name.to_string()),
                found: name.to_string(),
            });
        }

        tracing::debug!(region = %name, depth = ctx.stack.depth(), "Closing model region");

        if let Some(tree) = builder.into_tree() {
            ctx.registry.store(name, tree, ModelState::Complete);
        }
        Ok(())
    }
}
