//! Configuration types for archsynth artifact generation.
//!
//! This module provides configuration structures that control how system
//! descriptions are read and how artifacts are rendered. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`ModelConfig`] - Reading limits and the reference check switch.
//! - [`ContractConfig`] - Contract JSON formatting.
//! - [`DiagramConfig`] - Diagram rendering options.
//!
//! # Example
//!
//! ```
//! # use archsynth::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.model().max_deployment_depth(), 16);
//! assert_eq!(config.diagrams().container_external_limit(), 2);
//! ```

use serde::Deserialize;

use archsynth_parser::{DEFAULT_MAX_DEPLOYMENT_DEPTH, ReaderConfig};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Model reading section.
    #[serde(default)]
    model: ModelConfig,

    /// Contract rendering section.
    #[serde(default)]
    contract: ContractConfig,

    /// Diagram rendering section.
    #[serde(default)]
    diagrams: DiagramConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(model: ModelConfig, contract: ContractConfig, diagrams: DiagramConfig) -> Self {
        Self {
            model,
            contract,
            diagrams,
        }
    }

    /// Returns the model configuration.
    pub fn model(&self) -> &ModelConfig {
        &self.model
    }

    /// Returns the contract configuration.
    pub fn contract(&self) -> &ContractConfig {
        &self.contract
    }

    /// Returns the diagram configuration.
    pub fn diagrams(&self) -> &DiagramConfig {
        &self.diagrams
    }
}

/// Settings for reading system descriptions.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Deepest allowed deployment node level.
    #[serde(default = "default_max_deployment_depth")]
    max_deployment_depth: usize,

    /// Whether to run the reference check after reading.
    #[serde(default = "default_true")]
    check_references: bool,
}

impl ModelConfig {
    /// Creates a new [`ModelConfig`].
    ///
    /// # Arguments
    ///
    /// * `max_deployment_depth` - Deepest allowed deployment node level.
    /// * `check_references` - Whether unresolved references are reported.
    pub fn new(max_deployment_depth: usize, check_references: bool) -> Self {
        Self {
            max_deployment_depth,
            check_references,
        }
    }

    pub fn max_deployment_depth(&self) -> usize {
        self.max_deployment_depth
    }

    pub fn check_references(&self) -> bool {
        self.check_references
    }

    /// The reader settings derived from this section.
    pub fn reader(&self) -> ReaderConfig {
        ReaderConfig::new(self.max_deployment_depth)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPLOYMENT_DEPTH, true)
    }
}

/// Contract output formatting.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractConfig {
    /// Pretty-print the contract JSON with two-space indentation.
    #[serde(default = "default_true")]
    pretty: bool,
}

impl ContractConfig {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Diagram rendering options.
#[derive(Debug, Clone, Deserialize)]
pub struct DiagramConfig {
    /// How many external systems the container diagram shows.
    #[serde(default = "default_container_external_limit")]
    container_external_limit: usize,
}

impl DiagramConfig {
    pub fn new(container_external_limit: usize) -> Self {
        Self {
            container_external_limit,
        }
    }

    pub fn container_external_limit(&self) -> usize {
        self.container_external_limit
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self::new(default_container_external_limit())
    }
}

fn default_max_deployment_depth() -> usize {
    DEFAULT_MAX_DEPLOYMENT_DEPTH
}

fn default_container_external_limit() -> usize {
    2
}

fn default_true() -> bool {
    true
}
