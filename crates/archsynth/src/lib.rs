//! Archsynth - architecture artifacts from a single system description
//!
//! This library turns one JSON description of a software system into an
//! OpenAPI 3.0.3 contract and five C4-style Mermaid diagrams. A bare resource
//! name instead of a description yields a complete CRUD contract.

pub mod config;
pub mod contract;
pub mod crud;
pub mod diagram;
pub mod doc_check;

mod error;

pub use archsynth_core::{api, identifier, model};
pub use archsynth_parser::{Diagnostic, ErrorCode, ParseError, Source};

pub use error::ArchsynthError;

use log::{debug, info, trace};

use archsynth_core::{api::ApiDescription, model::EntityModel};

use config::AppConfig;
use contract::ContractDocument;
use diagram::DiagramSet;
use doc_check::DocumentReport;

/// Builder for reading system descriptions and rendering their artifacts.
///
/// # Examples
///
/// ```rust,no_run
/// use archsynth::{ArtifactBuilder, config::AppConfig};
///
/// let source = r#"{"system_name": "Shop", "authentication": "bearer"}"#;
///
/// let builder = ArtifactBuilder::new(AppConfig::default());
///
/// // Read the description into an entity model
/// let model = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Render the contract and the diagram document
/// let json = builder.contract_json(model.api())
///     .expect("Failed to render");
/// let markdown = builder.render_diagrams(&model).to_markdown();
///
/// // Or use default config
/// let builder = ArtifactBuilder::default();
/// ```
#[derive(Default)]
pub struct ArtifactBuilder {
    config: AppConfig,
}

impl ArtifactBuilder {
    /// Create a new builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including reader and render settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a JSON system description into an entity model.
    ///
    /// When reference checking is enabled, unresolved and duplicate ids are
    /// logged as warnings; they never fail the parse.
    ///
    /// # Arguments
    ///
    /// * `source` - JSON text of the description
    ///
    /// # Errors
    ///
    /// Returns `ArchsynthError::Parse` for malformed JSON or malformed sections.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use archsynth::ArtifactBuilder;
    ///
    /// let model = ArtifactBuilder::default()
    ///     .parse(r#"{"system_name": "Shop"}"#)
    ///     .expect("Failed to parse description");
    /// assert_eq!(model.system().name(), "Shop");
    /// ```
    pub fn parse(&self, source: &str) -> Result<EntityModel, ArchsynthError> {
        let model = self.read(source)?;
        if self.config.model().check_references() {
            self.check(&model);
        }
        Ok(model)
    }

    /// Parse a description and check its references, whatever the
    /// configuration says.
    ///
    /// The check runs exactly once, so each warning is logged once.
    ///
    /// # Errors
    ///
    /// Returns `ArchsynthError::Parse` for malformed JSON or malformed sections.
    pub fn parse_and_check(
        &self,
        source: &str,
    ) -> Result<(EntityModel, Vec<Diagnostic>), ArchsynthError> {
        let model = self.read(source)?;
        let warnings = self.check(&model);
        Ok((model, warnings))
    }

    fn read(&self, source: &str) -> Result<EntityModel, ArchsynthError> {
        info!("Reading system description");
        let model = archsynth_parser::parse(source, self.config.model().reader())
            .map_err(|err| ArchsynthError::new_parse_error(err, source))?;
        debug!(system = model.system().name(); "System description read");
        trace!(model:?; "Entity model");
        Ok(model)
    }

    /// Resolve the API to render from text that is either a description or a
    /// bare resource name.
    ///
    /// A description yields its declared API; a resource name is expanded
    /// into the CRUD API of that resource.
    ///
    /// # Errors
    ///
    /// Returns `ArchsynthError::Parse` for malformed descriptions and blank
    /// input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use archsynth::ArtifactBuilder;
    ///
    /// let api = ArtifactBuilder::default().api_from_source("Order").unwrap();
    /// assert_eq!(api.info().name(), "Order Management");
    /// ```
    pub fn api_from_source(&self, source: &str) -> Result<ApiDescription, ArchsynthError> {
        let parsed = archsynth_parser::parse_source(source, self.config.model().reader())
            .map_err(|err| ArchsynthError::new_parse_error(err, source))?;
        match parsed {
            Source::Model(model) => {
                info!(system = model.system().name(); "Using declared API");
                if self.config.model().check_references() {
                    self.check(&model);
                }
                Ok(model.api().clone())
            }
            Source::Resource(resource) => {
                info!(resource = resource.as_str(); "Synthesizing CRUD API");
                crud::synthesize(&resource)
            }
        }
    }

    /// Render the contract document of `api`.
    pub fn render_contract(&self, api: &ApiDescription) -> ContractDocument {
        contract::render_contract(api)
    }

    /// Render the contract of `api` as JSON text.
    ///
    /// Output is pretty-printed unless the contract configuration disables it.
    ///
    /// # Errors
    ///
    /// Returns `ArchsynthError::Serialize` if serialization fails.
    pub fn contract_json(&self, api: &ApiDescription) -> Result<String, ArchsynthError> {
        let document = self.render_contract(api);
        let json = contract::to_json(&document, self.config.contract().pretty())?;
        info!(
            paths = document.paths().len(),
            bytes = json.len();
            "Contract rendered"
        );
        Ok(json)
    }

    /// Render the five diagrams of `model`.
    pub fn render_diagrams(&self, model: &EntityModel) -> DiagramSet {
        diagram::render_diagrams(model, self.config.diagrams())
    }

    /// Check that every relationship endpoint of `model` resolves.
    ///
    /// Returns the warning diagnostics; an empty list means every id resolves.
    pub fn check(&self, model: &EntityModel) -> Vec<Diagnostic> {
        let warnings = archsynth_parser::check_references(model);
        debug!(warnings = warnings.len(); "References checked");
        warnings
    }

    /// Check the section structure of an architecture document.
    pub fn check_document(&self, text: &str) -> DocumentReport {
        doc_check::check_document(text)
    }
}
