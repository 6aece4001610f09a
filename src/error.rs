//! Error types for the fragment-model library.
//!
//! Uses a single `ModelError` enum for library consumers with detailed
//! error context, plus a `Result` alias used throughout the crate.

use thiserror::Error;

/// Main error type for fragment-model operations.
#[derive(Debug, Error)]
pub enum ModelError {
    /// No model element names configured.
    #[error("No model element names configured. At least one name is required to build fragment models")]
    EmptyModelSet,

    /// A region exit arrived with no open builder.
    #[error("No model builder available: region exit for <{0}> without a matching region enter")]
    EmptyBuilderStack(String),

    /// A region exit did not match the innermost open region.
    #[error("Region mismatch: expected exit for <{expected}>, got <{found}>")]
    RegionMismatch { expected: String, found: String },

    /// An element event arrived with the cursor outside the region's element
    /// tree (an end without a matching start, or any event after the region
    /// root was closed).
    #[error("Event outside the open element tree of model region <{region}>")]
    CursorUnderflow { region: String },

    /// The document pass ended while matched regions were still open.
    #[error("Document pass ended with unclosed model regions: {}", .names.join(", "))]
    UnclosedRegions { names: Vec<String> },

    /// Configuration YAML parsing failed.
    #[error("Configuration parsing failed: {0}")]
    ConfigParse(#[from] serde_yaml_ng::Error),
}

/// Result type alias for fragment-model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
