//! OpenAPI contract rendering.
//!
//! [`render_contract`] turns an [`ApiDescription`] into a [`ContractDocument`],
//! which serializes to OpenAPI 3.0.3 JSON. Rendering is a pure function of
//! the description: the same input always gives byte-identical JSON.

mod document;

pub use document::{
    Components, Contact, ContractDocument, Info, OPENAPI_VERSION, Operation, SecurityScheme,
    Server, TagObject,
};

use indexmap::IndexMap;
use log::debug;
use serde_json::{Value, json};

use archsynth_core::api::{ApiDescription, AuthMode, Endpoint};

const ERROR_SCHEMA_REF: &str = "#/components/schemas/Error";

/// Render the OpenAPI contract of `api`.
///
/// Every contract registers the `Error` schema and the `UnauthorizedError`
/// and `NotFoundError` responses. Caller schemas are registered after
/// `Error`, so a caller schema named `Error` replaces it. Endpoints sharing a
/// path and method overwrite each other; the last one wins.
///
/// # Example
///
/// ```
/// # use archsynth::{contract::render_contract, crud::synthesize};
/// let contract = render_contract(&synthesize("Order").unwrap());
///
/// assert_eq!(contract.openapi(), "3.0.3");
/// assert_eq!(contract.info().title(), "Order Management API");
/// assert!(contract.operation("/orders/{id}", "delete").is_some());
/// ```
pub fn render_contract(api: &ApiDescription) -> ContractDocument {
    let info = api.info();

    let (security_schemes, security) = security(api.auth());

    let mut schemas = IndexMap::new();
    schemas.insert("Error".to_string(), error_schema());
    schemas.extend(
        api.schemas()
            .iter()
            .map(|(name, schema)| (name.clone(), schema.clone())),
    );

    let mut paths: IndexMap<String, IndexMap<String, Operation>> = IndexMap::new();
    for endpoint in api.endpoints() {
        paths
            .entry(endpoint.path().to_string())
            .or_default()
            .insert(endpoint.method().to_string(), operation(endpoint));
    }

    debug!(
        paths = paths.len(),
        schemas = schemas.len(),
        auth:? = api.auth();
        "Contract rendered"
    );

    ContractDocument {
        openapi: OPENAPI_VERSION.to_string(),
        info: Info {
            title: format!("{} API", info.name()),
            description: info.description().to_string(),
            version: info.version().to_string(),
            contact: Contact {
                name: info.contact_name().to_string(),
                email: info.contact_email().to_string(),
            },
        },
        servers: vec![Server {
            url: info.base_url().to_string(),
            description: info.server_description().to_string(),
        }],
        paths,
        components: Components {
            schemas,
            security_schemes,
            responses: common_responses(),
        },
        tags: api
            .tags()
            .iter()
            .map(|tag| TagObject {
                name: tag.name().to_string(),
                description: tag.description().to_string(),
            })
            .collect(),
        security,
    }
}

/// Serialize a contract as JSON text, two-space indented when `pretty`.
pub fn to_json(contract: &ContractDocument, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(contract)
    } else {
        serde_json::to_string(contract)
    }
}

type SecurityRequirements = Vec<IndexMap<String, Vec<String>>>;

fn security(auth: AuthMode) -> (IndexMap<String, SecurityScheme>, Option<SecurityRequirements>) {
    let (name, scheme) = match auth {
        AuthMode::Bearer => (
            "bearerAuth",
            SecurityScheme::Http {
                scheme: "bearer".to_string(),
                bearer_format: "JWT".to_string(),
            },
        ),
        AuthMode::ApiKey => (
            "apiKey",
            SecurityScheme::ApiKey {
                location: "header".to_string(),
                name: "X-API-Key".to_string(),
            },
        ),
        AuthMode::None => return (IndexMap::new(), None),
    };
    (
        IndexMap::from([(name.to_string(), scheme)]),
        Some(vec![IndexMap::from([(name.to_string(), Vec::new())])]),
    )
}

fn operation(endpoint: &Endpoint) -> Operation {
    let responses = match endpoint.responses() {
        Some(responses) if !responses.is_empty() => responses.clone(),
        _ => default_responses(),
    };
    Operation {
        summary: endpoint.summary().to_string(),
        description: endpoint.description().to_string(),
        operation_id: endpoint.operation_id().to_string(),
        tags: endpoint.tags().to_vec(),
        responses,
        parameters: endpoint.parameters().to_vec(),
        request_body: endpoint.request_body().cloned(),
    }
}

fn error_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "error": {"type": "string", "description": "Error message"},
            "code": {"type": "string", "description": "Error code"}
        },
        "required": ["error"]
    })
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {"application/json": {"schema": {"$ref": ERROR_SCHEMA_REF}}}
    })
}

fn common_responses() -> IndexMap<String, Value> {
    IndexMap::from([
        (
            "UnauthorizedError".to_string(),
            error_response("Authentication information is missing or invalid"),
        ),
        (
            "NotFoundError".to_string(),
            error_response("The specified resource was not found"),
        ),
    ])
}

fn default_responses() -> IndexMap<String, Value> {
    IndexMap::from([
        (
            "200".to_string(),
            json!({
                "description": "Successful operation",
                "content": {"application/json": {"schema": {"type": "object"}}}
            }),
        ),
        (
            "401".to_string(),
            json!({"$ref": "#/components/responses/UnauthorizedError"}),
        ),
        (
            "404".to_string(),
            json!({"$ref": "#/components/responses/NotFoundError"}),
        ),
    ])
}
