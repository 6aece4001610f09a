//! Fragment-model - bounded-memory tree models for streaming document pipelines.
//!
//! A streaming pipeline processes documents as a single forward pass of
//! start/text/end events so that document size never dictates memory use.
//! Some pipeline stages still need a navigable tree view of specific
//! sub-regions ("give me the current order-item as a tree"). This crate
//! builds those trees on the fly: whenever the stream enters a configured
//! element name, the matched region is materialized as an in-memory node
//! tree, and exactly the most recent instance per name is kept.
//!
//! Regions may nest. Only the builders for the currently open chain of
//! matched regions are alive, so sibling repetitions of an inner region
//! overwrite each other instead of accumulating, and an outer model never
//! contains inner-model data.
//!
//! # Example
//!
//! ```
//! use fragment_model::{ModelConfig, ModelCreator, PassContext, StreamEvent};
//!
//! let creator = ModelCreator::new(ModelConfig::new(["order"]))?;
//! let mut ctx = PassContext::new();
//!
//! creator.process(&mut ctx, &StreamEvent::start("order", Vec::new()))?;
//! creator.process(&mut ctx, &StreamEvent::start("customer", Vec::new()))?;
//! creator.process(&mut ctx, &StreamEvent::text("Joe"))?;
//! creator.process(&mut ctx, &StreamEvent::end("customer"))?;
//! creator.process(&mut ctx, &StreamEvent::end("order"))?;
//!
//! let models = creator.finish(ctx)?;
//! let order = models.get("order").expect("order model");
//! assert_eq!(order.root().text_content(), "Joe");
//! # Ok::<(), fragment_model::ModelError>(())
//! ```
//!
//! # Architecture
//!
//! - [`event`]: the consumed event-stream interface
//! - [`node`]: the in-memory node tree
//! - [`builder`]: per-region builders and the per-pass builder stack
//! - [`registry`]: latest completed tree per region name
//! - [`context`]: per-document-pass state container
//! - [`creator`]: event routing and the active-handler swap protocol
//! - [`config`]: model names and the unclosed-region policy
//! - [`error`]: error types and Result alias

pub mod builder;
pub mod config;
pub mod context;
pub mod creator;
pub mod error;
pub mod event;
pub mod node;
pub mod registry;

// Re-export the main entry points
pub use config::{ModelConfig, UnclosedPolicy};
pub use context::PassContext;
pub use creator::ModelCreator;
pub use error::{ModelError, Result};
pub use event::{Attribute, StreamEvent, TextKind};
pub use node::{Element, Node, NodeTree};
pub use registry::{ModelRegistry, ModelState};
