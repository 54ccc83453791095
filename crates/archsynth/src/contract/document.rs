//! Serializable OpenAPI 3.0.3 document types.
//!
//! Field order here is the key order of the emitted JSON.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// OpenAPI version written into every contract.
pub const OPENAPI_VERSION: &str = "3.0.3";

/// A rendered OpenAPI contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractDocument {
    pub(super) openapi: String,
    pub(super) info: Info,
    pub(super) servers: Vec<Server>,
    pub(super) paths: IndexMap<String, IndexMap<String, Operation>>,
    pub(super) components: Components,
    pub(super) tags: Vec<TagObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) security: Option<Vec<IndexMap<String, Vec<String>>>>,
}

impl ContractDocument {
    pub fn openapi(&self) -> &str {
        &self.openapi
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    /// Operations keyed by path, then by lower-cased method.
    pub fn paths(&self) -> &IndexMap<String, IndexMap<String, Operation>> {
        &self.paths
    }

    pub fn components(&self) -> &Components {
        &self.components
    }

    pub fn tags(&self) -> &[TagObject] {
        &self.tags
    }

    /// Global security requirements, absent when the API declares none.
    pub fn security(&self) -> Option<&[IndexMap<String, Vec<String>>]> {
        self.security.as_deref()
    }

    /// Look up the operation at `path` and `method`.
    pub fn operation(&self, path: &str, method: &str) -> Option<&Operation> {
        self.paths.get(path)?.get(method)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Info {
    pub(super) title: String,
    pub(super) description: String,
    pub(super) version: String,
    pub(super) contact: Contact,
}

impl Info {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    pub(super) name: String,
    pub(super) email: String,
}

impl Contact {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Server {
    pub(super) url: String,
    pub(super) description: String,
}

impl Server {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Reusable schemas, security schemes and responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    pub(super) schemas: IndexMap<String, Value>,
    pub(super) security_schemes: IndexMap<String, SecurityScheme>,
    pub(super) responses: IndexMap<String, Value>,
}

impl Components {
    pub fn schemas(&self) -> &IndexMap<String, Value> {
        &self.schemas
    }

    pub fn security_schemes(&self) -> &IndexMap<String, SecurityScheme> {
        &self.security_schemes
    }

    pub fn responses(&self) -> &IndexMap<String, Value> {
        &self.responses
    }
}

/// A security scheme object, tagged by its `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SecurityScheme {
    /// `{"type": "http", "scheme": "bearer", "bearerFormat": "JWT"}`
    #[serde(rename_all = "camelCase")]
    Http {
        scheme: String,
        bearer_format: String,
    },
    /// `{"type": "apiKey", "in": "header", "name": "X-API-Key"}`
    ApiKey {
        #[serde(rename = "in")]
        location: String,
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagObject {
    pub(super) name: String,
    pub(super) description: String,
}

impl TagObject {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// One operation under a path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub(super) summary: String,
    pub(super) description: String,
    pub(super) operation_id: String,
    pub(super) tags: Vec<String>,
    pub(super) responses: IndexMap<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(super) parameters: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) request_body: Option<Value>,
}

impl Operation {
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn responses(&self) -> &IndexMap<String, Value> {
        &self.responses
    }

    pub fn parameters(&self) -> &[Value] {
        &self.parameters
    }

    pub fn request_body(&self) -> Option<&Value> {
        self.request_body.as_ref()
    }
}
