//! CRUD API synthesis from a bare resource name.
//!
//! Expands a name like `Order` into a complete [`ApiDescription`]: two
//! schemas (`Order`, `OrderInput`) and five endpoints over `/orders` and
//! `/orders/{id}`. The output depends on the name only.

use indexmap::IndexMap;
use log::debug;
use serde_json::{Value, json};

use archsynth_core::api::{
    ApiDescription, ApiInfo, AuthMode, DEFAULT_SERVER_DESCRIPTION, Endpoint, HttpMethod, Tag,
};

use crate::error::ArchsynthError;

/// Server URL of synthesized APIs.
const CRUD_BASE_URL: &str = "https://api.example.com/v1";

/// Synthesize the CRUD API of `resource`.
///
/// The name is trimmed; plural paths add a literal `s` to the lower-cased
/// name, and schema and operation names use its title-cased form.
///
/// # Errors
///
/// Returns [`ArchsynthError::Input`] when the name is blank.
///
/// # Example
///
/// ```
/// # use archsynth::crud::synthesize;
/// let api = synthesize("Order").unwrap();
///
/// assert_eq!(api.info().name(), "Order Management");
/// assert_eq!(api.endpoints().len(), 5);
/// assert_eq!(api.endpoints()[0].path(), "/orders");
/// assert_eq!(api.endpoints()[2].operation_id(), "getOrder");
/// ```
pub fn synthesize(resource: &str) -> Result<ApiDescription, ArchsynthError> {
    let resource = resource.trim();
    if resource.is_empty() {
        return Err(ArchsynthError::Input(
            "resource name must not be empty".to_string(),
        ));
    }

    let lower = resource.to_lowercase();
    let title = title_case(resource);
    debug!(resource = resource, lower = lower.as_str(), title = title.as_str(); "Synthesizing CRUD API");

    let info = ApiInfo::new(
        format!("{title} Management"),
        "1.0.0",
        format!("API for managing {lower} resources"),
    )
    .with_server(CRUD_BASE_URL, DEFAULT_SERVER_DESCRIPTION);

    Ok(ApiDescription::new(info)
        .with_auth(AuthMode::Bearer)
        .with_tags(vec![Tag::new(lower.as_str(), format!("{title} operations"))])
        .with_schemas(schemas(&title))
        .with_endpoints(endpoints(&lower, &title)))
}

/// Title-case `text`: the first letter of every run of cased letters is
/// upper-cased, the rest lower-cased.
///
/// ```
/// # use archsynth::crud::title_case;
/// assert_eq!(title_case("order item"), "Order Item");
/// assert_eq!(title_case("HTTP2log"), "Http2Log");
/// ```
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_cased = false;
    for c in text.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && previous_cased {
            result.extend(c.to_lowercase());
        } else if cased {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        previous_cased = cased;
    }
    result
}

fn schemas(title: &str) -> IndexMap<String, Value> {
    let mut schemas = IndexMap::new();
    schemas.insert(
        title.to_string(),
        json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "format": "uuid",
                    "description": format!("{title} ID")
                },
                "name": {
                    "type": "string",
                    "description": format!("{title} name")
                },
                "createdAt": {
                    "type": "string",
                    "format": "date-time",
                    "description": "Creation timestamp"
                },
                "updatedAt": {
                    "type": "string",
                    "format": "date-time",
                    "description": "Last update timestamp"
                }
            },
            "required": ["id", "name"]
        }),
    );
    schemas.insert(
        format!("{title}Input"),
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": format!("{title} name")
                }
            },
            "required": ["name"]
        }),
    );
    schemas
}

fn endpoints(lower: &str, title: &str) -> Vec<Endpoint> {
    let collection = format!("/{lower}s");
    let item = format!("/{lower}s/{{id}}");
    let tags = vec![lower.to_string()];
    let entity_ref = json!({"$ref": format!("#/components/schemas/{title}")});
    let id_parameter = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "description": format!("{title} ID"),
        "schema": {"type": "string", "format": "uuid"}
    });
    let input_body = json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": {"$ref": format!("#/components/schemas/{title}Input")}
            }
        }
    });
    let entity_response = |description: &str| {
        json!({
            "description": description,
            "content": {"application/json": {"schema": entity_ref.clone()}}
        })
    };

    vec![
        Endpoint::new(collection.as_str(), HttpMethod::new("get"))
            .with_summary(format!("List all {lower}s"))
            .with_description(format!("Retrieve a list of {lower}s with pagination"))
            .with_operation_id(format!("list{title}s"))
            .with_tags(tags.clone())
            .with_parameters(vec![
                json!({
                    "name": "page",
                    "in": "query",
                    "description": "Page number",
                    "schema": {"type": "integer", "default": 1}
                }),
                json!({
                    "name": "limit",
                    "in": "query",
                    "description": "Items per page",
                    "schema": {"type": "integer", "default": 20}
                }),
            ])
            .with_responses(responses(
                "200",
                json!({
                    "description": "Successful operation",
                    "content": {
                        "application/json": {
                            "schema": {
                                "type": "object",
                                "properties": {
                                    "data": {"type": "array", "items": entity_ref.clone()},
                                    "total": {"type": "integer"},
                                    "page": {"type": "integer"},
                                    "limit": {"type": "integer"}
                                }
                            }
                        }
                    }
                }),
            )),
        Endpoint::new(collection.as_str(), HttpMethod::new("post"))
            .with_summary(format!("Create a new {lower}"))
            .with_description(format!("Create a new {lower} resource"))
            .with_operation_id(format!("create{title}"))
            .with_tags(tags.clone())
            .with_request_body(input_body.clone())
            .with_responses(responses("201", entity_response("Created successfully"))),
        Endpoint::new(item.as_str(), HttpMethod::new("get"))
            .with_summary(format!("Get a {lower} by ID"))
            .with_description(format!("Retrieve a specific {lower} by its ID"))
            .with_operation_id(format!("get{title}"))
            .with_tags(tags.clone())
            .with_parameters(vec![id_parameter.clone()])
            .with_responses(responses("200", entity_response("Successful operation"))),
        Endpoint::new(item.as_str(), HttpMethod::new("put"))
            .with_summary(format!("Update a {lower}"))
            .with_description(format!("Update an existing {lower} resource"))
            .with_operation_id(format!("update{title}"))
            .with_tags(tags.clone())
            .with_parameters(vec![id_parameter.clone()])
            .with_request_body(input_body)
            .with_responses(responses("200", entity_response("Updated successfully"))),
        Endpoint::new(item.as_str(), HttpMethod::new("delete"))
            .with_summary(format!("Delete a {lower}"))
            .with_description(format!("Delete a {lower} resource"))
            .with_operation_id(format!("delete{title}"))
            .with_tags(tags)
            .with_parameters(vec![id_parameter])
            .with_responses(responses(
                "204",
                json!({"description": "Deleted successfully"}),
            )),
    ]
}

fn responses(status: &str, response: Value) -> IndexMap<String, Value> {
    IndexMap::from([(status.to_string(), response)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("order"), "Order");
        assert_eq!(title_case("ORDER"), "Order");
        assert_eq!(title_case("order item"), "Order Item");
        assert_eq!(title_case("line_item"), "Line_Item");
        assert_eq!(title_case("a1b"), "A1B");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_synthesize_order() {
        let api = synthesize("Order").unwrap();

        assert_eq!(api.info().name(), "Order Management");
        assert_eq!(api.info().description(), "API for managing order resources");
        assert_eq!(api.info().base_url(), "https://api.example.com/v1");
        assert_eq!(api.auth(), AuthMode::Bearer);
        assert_eq!(api.tags()[0].name(), "order");
        assert_eq!(api.tags()[0].description(), "Order operations");

        let names: Vec<_> = api.schemas().keys().map(String::as_str).collect();
        assert_eq!(names, ["Order", "OrderInput"]);
        assert_eq!(api.schemas()["Order"]["required"], json!(["id", "name"]));
        assert_eq!(api.schemas()["OrderInput"]["required"], json!(["name"]));

        let routes: Vec<_> = api
            .endpoints()
            .iter()
            .map(|e| (e.method().as_str(), e.path(), e.operation_id()))
            .collect();
        assert_eq!(
            routes,
            [
                ("get", "/orders", "listOrders"),
                ("post", "/orders", "createOrder"),
                ("get", "/orders/{id}", "getOrder"),
                ("put", "/orders/{id}", "updateOrder"),
                ("delete", "/orders/{id}", "deleteOrder"),
            ]
        );
    }

    #[test]
    fn test_synthesize_endpoint_details() {
        let api = synthesize("Order").unwrap();
        let endpoints = api.endpoints();

        assert_eq!(endpoints[0].parameters().len(), 2);
        assert_eq!(endpoints[0].parameters()[1]["schema"]["default"], json!(20));
        assert!(endpoints[0].request_body().is_none());
        assert_eq!(
            endpoints[1].request_body().unwrap()["content"]["application/json"]["schema"]["$ref"],
            json!("#/components/schemas/OrderInput")
        );
        assert_eq!(endpoints[2].parameters()[0]["in"], json!("path"));
        assert!(endpoints[3].request_body().is_some());

        let delete = endpoints[4].responses().unwrap();
        assert_eq!(delete.len(), 1);
        assert_eq!(delete["204"], json!({"description": "Deleted successfully"}));
        assert!(endpoints.iter().all(|e| e.tags() == ["order".to_string()]));
    }

    #[test]
    fn test_synthesize_lowercases_paths() {
        let api = synthesize("  UserAccount ").unwrap();

        assert_eq!(api.endpoints()[0].path(), "/useraccounts");
        assert_eq!(api.endpoints()[0].operation_id(), "listUseraccounts");
        assert!(api.schemas().contains_key("Useraccount"));
    }

    #[test]
    fn test_synthesize_rejects_blank() {
        assert!(matches!(synthesize("   "), Err(ArchsynthError::Input(_))));
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn resource_name() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9 ]{0,15}"
    }

    fn check_shape(resource: &str) -> Result<(), TestCaseError> {
        let api = synthesize(resource).map_err(|err| TestCaseError::fail(err.to_string()))?;

        prop_assert_eq!(api.schemas().len(), 2);
        prop_assert_eq!(api.endpoints().len(), 5);

        let mut paths: Vec<_> = api.endpoints().iter().map(|e| e.path()).collect();
        paths.dedup();
        prop_assert_eq!(paths.len(), 2);
        Ok(())
    }

    fn check_deterministic(resource: &str) -> Result<(), TestCaseError> {
        let first = synthesize(resource).map_err(|err| TestCaseError::fail(err.to_string()))?;
        let second = synthesize(resource).map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(first, second);
        Ok(())
    }

    proptest! {
        #[test]
        fn synthesized_api_has_fixed_shape(resource in resource_name()) {
            check_shape(&resource)?;
        }

        #[test]
        fn synthesis_is_deterministic(resource in resource_name()) {
            check_deterministic(&resource)?;
        }

        #[test]
        fn title_case_keeps_length_for_ascii(text in "[a-zA-Z0-9 _-]{0,24}") {
            prop_assert_eq!(title_case(&text).len(), text.len());
        }
    }
}
