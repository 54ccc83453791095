//! API description types.
//!
//! An [`ApiDescription`] is everything the contract renderer needs: document
//! info, the authentication mode, tags, schemas and endpoints. Schemas and the
//! parameter/request/response fragments of an [`Endpoint`] are opaque JSON
//! values; they are passed through to the contract untouched.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

/// Contact name used when the caller declares none.
pub const DEFAULT_CONTACT_NAME: &str = "API Team";
/// Contact email used when the caller declares none.
pub const DEFAULT_CONTACT_EMAIL: &str = "api@example.com";
/// Server URL used when the caller declares none.
pub const DEFAULT_BASE_URL: &str = "https://api.example.com";
/// Server description used when the caller declares none.
pub const DEFAULT_SERVER_DESCRIPTION: &str = "Production server";
/// Tag applied to endpoints that declare no tags.
pub const DEFAULT_TAG: &str = "default";

/// Document-level information of the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiInfo {
    name: String,
    version: String,
    description: String,
    contact_name: String,
    contact_email: String,
    base_url: String,
    server_description: String,
}

impl ApiInfo {
    /// Create API info with the default contact and server.
    ///
    /// # Arguments
    ///
    /// * `name` - System name; the contract title is `"<name> API"`.
    /// * `version` - API version string.
    /// * `description` - Free-form API description.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: description.into(),
            contact_name: DEFAULT_CONTACT_NAME.to_string(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            server_description: DEFAULT_SERVER_DESCRIPTION.to_string(),
        }
    }

    /// Set the contact name and email.
    pub fn with_contact(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.contact_name = name.into();
        self.contact_email = email.into();
        self
    }

    /// Set the single server's URL and description.
    pub fn with_server(mut self, url: impl Into<String>, description: impl Into<String>) -> Self {
        self.base_url = url.into();
        self.server_description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn contact_name(&self) -> &str {
        &self.contact_name
    }

    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn server_description(&self) -> &str {
        &self.server_description
    }
}

/// How clients authenticate against the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AuthMode {
    /// HTTP bearer token in JWT format (`bearer` or `jwt`).
    Bearer,
    /// API key in the `X-API-Key` header (`apikey`).
    ApiKey,
    /// No global security requirement.
    #[default]
    None,
}

impl AuthMode {
    /// Map a declared authentication mode to an [`AuthMode`].
    ///
    /// Matching ignores surrounding whitespace and ASCII case. Unknown modes
    /// map to [`AuthMode::None`].
    ///
    /// ```
    /// use archsynth_core::api::AuthMode;
    ///
    /// assert_eq!(AuthMode::from_declared("JWT"), AuthMode::Bearer);
    /// assert_eq!(AuthMode::from_declared("apikey"), AuthMode::ApiKey);
    /// assert_eq!(AuthMode::from_declared("oauth2"), AuthMode::None);
    /// ```
    pub fn from_declared(mode: &str) -> Self {
        match mode.trim().to_ascii_lowercase().as_str() {
            "bearer" | "jwt" => AuthMode::Bearer,
            "apikey" => AuthMode::ApiKey,
            _ => AuthMode::None,
        }
    }
}

/// An operation tag with its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
    description: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Lower-cased HTTP method of an endpoint.
///
/// Any method text is accepted; it is only normalized to lower case, which is
/// how OpenAPI keys operations under a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HttpMethod(String);

impl HttpMethod {
    pub fn new(method: &str) -> Self {
        Self(method.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the operation id used when an endpoint declares none:
/// the method followed by the path with every `/` replaced by `_`.
///
/// ```
/// use archsynth_core::api::{HttpMethod, derive_operation_id};
///
/// let id = derive_operation_id(&HttpMethod::new("GET"), "/users/{id}");
/// assert_eq!(id, "get_users_{id}");
/// ```
pub fn derive_operation_id(method: &HttpMethod, path: &str) -> String {
    format!("{}{}", method, path.replace('/', "_"))
}

/// One API operation, addressed by path and method.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    path: String,
    method: HttpMethod,
    summary: String,
    description: String,
    operation_id: String,
    tags: Vec<String>,
    parameters: Vec<Value>,
    request_body: Option<Value>,
    responses: Option<IndexMap<String, Value>>,
}

impl Endpoint {
    /// Create an endpoint with empty texts, a derived operation id, the
    /// default tag, no parameters, no request body and default responses.
    pub fn new(path: impl Into<String>, method: HttpMethod) -> Self {
        let path = path.into();
        let operation_id = derive_operation_id(&method, &path);
        Self {
            path,
            method,
            summary: String::new(),
            description: String::new(),
            operation_id,
            tags: vec![DEFAULT_TAG.to_string()],
            parameters: Vec::new(),
            request_body: None,
            responses: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_operation_id(mut self, operation_id: impl Into<String>) -> Self {
        self.operation_id = operation_id.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the parameter objects, passed through verbatim.
    pub fn with_parameters(mut self, parameters: Vec<Value>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Set the request body object, passed through verbatim.
    pub fn with_request_body(mut self, request_body: Value) -> Self {
        self.request_body = Some(request_body);
        self
    }

    /// Set explicit responses. These replace the default responses entirely.
    pub fn with_responses(mut self, responses: IndexMap<String, Value>) -> Self {
        self.responses = Some(responses);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> &HttpMethod {
        &self.method
    }

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

    pub fn parameters(&self) -> &[Value] {
        &self.parameters
    }

    pub fn request_body(&self) -> Option<&Value> {
        self.request_body.as_ref()
    }

    /// Explicit responses, or `None` when the defaults apply.
    pub fn responses(&self) -> Option<&IndexMap<String, Value>> {
        self.responses.as_ref()
    }
}

/// The API side of a system description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiDescription {
    info: ApiInfo,
    auth: AuthMode,
    tags: Vec<Tag>,
    schemas: IndexMap<String, Value>,
    endpoints: Vec<Endpoint>,
}

impl ApiDescription {
    pub fn new(info: ApiInfo) -> Self {
        Self {
            info,
            ..Self::default()
        }
    }

    pub fn with_auth(mut self, auth: AuthMode) -> Self {
        self.auth = auth;
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the schemas, keyed by name in declaration order.
    pub fn with_schemas(mut self, schemas: IndexMap<String, Value>) -> Self {
        self.schemas = schemas;
        self
    }

    pub fn with_endpoints(mut self, endpoints: Vec<Endpoint>) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn info(&self) -> &ApiInfo {
        &self.info
    }

    pub fn auth(&self) -> AuthMode {
        self.auth
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn schemas(&self) -> &IndexMap<String, Value> {
        &self.schemas
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_endpoint_defaults() {
        let endpoint = Endpoint::new("/health", HttpMethod::new("GET"));

        assert_eq!(endpoint.method().as_str(), "get");
        assert_eq!(endpoint.operation_id(), "get_health");
        assert_eq!(endpoint.tags(), ["default".to_string()]);
        assert!(endpoint.parameters().is_empty());
        assert!(endpoint.request_body().is_none());
        assert!(endpoint.responses().is_none());
    }

    #[test]
    fn test_endpoint_explicit_operation_id_wins() {
        let endpoint =
            Endpoint::new("/users", HttpMethod::new("post")).with_operation_id("createUser");

        assert_eq!(endpoint.operation_id(), "createUser");
    }

    #[test]
    fn test_root_path_operation_id() {
        assert_eq!(derive_operation_id(&HttpMethod::new("get"), "/"), "get_");
    }

    #[test]
    fn test_api_info_defaults() {
        let info = ApiInfo::new("Shop", "2.0.0", "Shop API");

        assert_eq!(info.contact_name(), DEFAULT_CONTACT_NAME);
        assert_eq!(info.contact_email(), DEFAULT_CONTACT_EMAIL);
        assert_eq!(info.base_url(), DEFAULT_BASE_URL);
        assert_eq!(info.server_description(), DEFAULT_SERVER_DESCRIPTION);
    }

    #[test]
    fn test_auth_mode_from_declared() {
        assert_eq!(AuthMode::from_declared("bearer"), AuthMode::Bearer);
        assert_eq!(AuthMode::from_declared(" Bearer "), AuthMode::Bearer);
        assert_eq!(AuthMode::from_declared("jwt"), AuthMode::Bearer);
        assert_eq!(AuthMode::from_declared("APIKEY"), AuthMode::ApiKey);
        assert_eq!(AuthMode::from_declared("basic"), AuthMode::None);
        assert_eq!(AuthMode::from_declared(""), AuthMode::None);
    }

    #[test]
    fn test_schemas_keep_declaration_order() {
        let mut schemas = IndexMap::new();
        schemas.insert("Zebra".to_string(), json!({"type": "object"}));
        schemas.insert("Apple".to_string(), json!({"type": "object"}));

        let api = ApiDescription::new(ApiInfo::default()).with_schemas(schemas);
        let names: Vec<_> = api.schemas().keys().cloned().collect();

        assert_eq!(names, vec!["Zebra".to_string(), "Apple".to_string()]);
    }
}
