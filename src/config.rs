//! Configuration for the fragment-model creator.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Policy for a document pass that ends while model regions are still open.
///
/// A region that never sees its exit event cannot be finalized. Which way to
/// resolve that is a pipeline decision, so it is configurable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnclosedPolicy {
    /// Fail the pass with [`ModelError::UnclosedRegions`].
    #[default]
    Abort,
    /// Publish each partially built tree to the registry, marked as open.
    PublishPartial,
}

/// Configuration for [`ModelCreator`](crate::creator::ModelCreator).
///
/// Lists the element names that act as model region boundaries, and the
/// policy for regions left open at the end of a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Element names that trigger model building.
    model_names: BTreeSet<String>,

    /// What to do with regions left open at end of pass.
    #[serde(default)]
    unclosed_policy: UnclosedPolicy,
}

impl ModelConfig {
    /// Create a configuration from a set of model element names.
    #[must_use]
    pub fn new(model_names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            model_names: model_names.into_iter().map(Into::into).collect(),
            unclosed_policy: UnclosedPolicy::default(),
        }
    }

    /// Set the unclosed-region policy.
    #[must_use]
    pub fn with_unclosed_policy(mut self, policy: UnclosedPolicy) -> Self {
        self.unclosed_policy = policy;
        self
    }

    /// Parse a configuration from YAML.
    ///
    /// # Errors
    /// Returns `ModelError::ConfigParse` if the YAML is malformed.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// The configured model element names.
    ///
    /// Consulted by the external selector to decide which elements trigger
    /// region enter/exit handling.
    #[must_use]
    pub fn model_names(&self) -> &BTreeSet<String> {
        &self.model_names
    }

    /// The unclosed-region policy.
    #[must_use]
    pub fn unclosed_policy(&self) -> UnclosedPolicy {
        self.unclosed_policy
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns `ModelError::EmptyModelSet` if no model names are configured.
    pub fn validate(&self) -> Result<()> {
        if self.model_names.is_empty() {
            return Err(ModelError::EmptyModelSet);
        }
        Ok(())
    }
}
