//! Candidate environment pool declarations for envmatch.
//!
//! Load the pool of discovered/declared environments from TOML or YAML
//! runbook documents and turn each entry into the concrete node list the
//! matcher evaluates requirements against. Field names are camelCase on the
//! wire, matching the discovery layer's serialization of
//! [`NodeDescription`].
//!
//! # Examples
//!
//! Load a pool from a TOML string:
//!
//! ```
//! use envmatch_runbook::EnvironmentPool;
//!
//! let pool = EnvironmentPool::from_toml_str(r#"
//!     maxConcurrency = 2
//!
//!     [[environments]]
//!     name = "client-server"
//!
//!     [[environments.nodes]]
//!     coreCount = 8
//!     memoryMb = 16384
//!
//!     [[environments.nodes]]
//!     coreCount = 4
//! "#).unwrap();
//!
//! assert_eq!(pool.max_concurrency, 2);
//! assert_eq!(pool.environments[0].node_pool().len(), 2);
//! ```
//!
//! Use an empty pool when the file is missing:
//!
//! ```
//! use envmatch_runbook::EnvironmentPool;
//!
//! let pool = EnvironmentPool::load("environments.toml").unwrap_or_default();
//! // Proceeds with no candidates if the file doesn't exist
//! ```

use std::path::Path;

use envmatch_core::NodeDescription;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};


/// Runbook error
#[derive(Debug, Error)]
pub enum RunbookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid runbook: {0}")]
    Invalid(String),
}

/// The root of a runbook's environment section: every candidate environment
/// available to a run, plus run-wide settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvironmentPool {
    /// How many environments may execute test cases at once.
    pub max_concurrency: i64,

    /// Treat environment capability warnings as errors.
    pub warn_as_error: bool,

    /// The declared candidate environments.
    pub environments: Vec<EnvironmentEntry>,
}

impl EnvironmentPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a pool from a file, picking the format by extension
    /// (`.yml`/`.yaml` for YAML, anything else for TOML).
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, fails to parse, or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RunbookError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml") | Some("yaml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads a pool from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, RunbookError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a pool from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, RunbookError> {
        let pool: Self = toml::from_str(s)?;
        pool.validated()
    }

    /// Loads a pool from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, RunbookError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses a pool from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, RunbookError> {
        let pool: Self = serde_yaml::from_str(s)?;
        pool.validated()
    }

    /// Sets the concurrency limit.
    pub fn with_max_concurrency(mut self, max_concurrency: i64) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    /// Adds an environment entry.
    pub fn with_environment(mut self, environment: EnvironmentEntry) -> Self {
        self.environments.push(environment);
        self
    }

    fn validated(self) -> Result<Self, RunbookError> {
        if self.max_concurrency < 1 {
            return Err(RunbookError::Invalid(format!(
                "maxConcurrency must be at least 1, got {}",
                self.max_concurrency
            )));
        }
        for environment in &self.environments {
            environment.validate()?;
        }
        info!(
            environments = self.environments.len(),
            max_concurrency = self.max_concurrency,
            "loaded environment pool"
        );
        Ok(self)
    }
}

impl Default for EnvironmentPool {
    fn default() -> Self {
        EnvironmentPool {
            max_concurrency: 1,
            warn_as_error: false,
            environments: Vec::new(),
        }
    }
}

/// One declared candidate environment: either an explicit node list or a
/// template expanded into identical nodes. The two forms are mutually
/// exclusive.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvironmentEntry {
    /// Display name used in logs and reports.
    pub name: String,

    /// Template form: one node shape repeated `nodeCount` times.
    pub template: Option<Template>,

    /// Explicit form: each node spelled out.
    pub nodes: Option<Vec<NodeDescription>>,
}

impl EnvironmentEntry {
    /// Creates an entry with an explicit node list.
    pub fn with_nodes(name: impl Into<String>, nodes: Vec<NodeDescription>) -> Self {
        EnvironmentEntry {
            name: name.into(),
            template: None,
            nodes: Some(nodes),
        }
    }

    /// Creates an entry from a template.
    pub fn with_template(name: impl Into<String>, template: Template) -> Self {
        EnvironmentEntry {
            name: name.into(),
            template: Some(template),
            nodes: None,
        }
    }

    /// Returns the concrete node list, expanding the template form.
    pub fn node_pool(&self) -> Vec<NodeDescription> {
        if let Some(template) = &self.template {
            let nodes = template.expand();
            debug!(
                environment = %self.name,
                node_count = nodes.len(),
                "expanded environment template"
            );
            return nodes;
        }
        self.nodes.clone().unwrap_or_default()
    }

    fn validate(&self) -> Result<(), RunbookError> {
        if self.template.is_some() && self.nodes.is_some() {
            return Err(RunbookError::Invalid(format!(
                "environment '{}' cannot specify template and nodes both",
                self.name
            )));
        }
        if let Some(template) = &self.template {
            template.validate()?;
        }
        Ok(())
    }
}

/// A node shape repeated a fixed number of times, used to declare large
/// uniform environments without duplicating content.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Template {
    /// The shape every expanded node takes.
    #[serde(flatten)]
    pub node: NodeDescription,

    /// How many copies to expand.
    pub node_count: i64,
}

impl Template {
    /// Creates a template.
    pub fn new(node: NodeDescription, node_count: i64) -> Self {
        Template { node, node_count }
    }

    /// Produces `node_count` copies of the node shape.
    pub fn expand(&self) -> Vec<NodeDescription> {
        vec![self.node.clone(); self.node_count.max(0) as usize]
    }

    fn validate(&self) -> Result<(), RunbookError> {
        if self.node_count < 1 {
            return Err(RunbookError::Invalid(format!(
                "nodeCount must be at least 1, got {}",
                self.node_count
            )));
        }
        Ok(())
    }
}

impl Default for Template {
    fn default() -> Self {
        Template {
            node: NodeDescription::default(),
            node_count: 1,
        }
    }
}
