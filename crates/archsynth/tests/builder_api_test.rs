//! Integration tests for the ArtifactBuilder API
//!
//! These tests drive the public API from description text to artifacts.

use archsynth::{
    ArchsynthError, ArtifactBuilder, ErrorCode,
    config::{AppConfig, ContractConfig, DiagramConfig, ModelConfig},
    diagram::DiagramKind,
};

const SHOP: &str = r#"{
    "system_name": "Shop",
    "description": "Online shop",
    "authentication": "bearer",
    "users": [{"id": "buyer", "name": "Buyer", "description": "Places orders"}],
    "external_systems": [
        {"id": "stripe", "name": "Stripe", "description": "Payments", "relationship": "charges via"}
    ],
    "containers": [
        {"id": "web", "name": "Web", "technology": "React", "description": "Storefront"},
        {"id": "api", "name": "API", "technology": "Rust", "description": "Orders"}
    ],
    "container_relationships": [
        {"from": "web", "to": "api", "description": "calls", "protocol": "HTTPS"}
    ],
    "main_container_name": "API",
    "components": [{"id": "orders", "name": "Orders", "technology": "axum"}],
    "component_dependencies": [{"id": "pg", "name": "Orders DB", "type": "Database", "technology": "PostgreSQL"}],
    "component_relationships": [{"from": "orders", "to": "pg", "description": "reads"}],
    "endpoints": [{"path": "/orders", "method": "GET", "summary": "List orders"}]
}"#;

#[test]
fn test_builder_api_exists() {
    // Just verify the API compiles and can be constructed
    let _builder = ArtifactBuilder::new(AppConfig::default());
    let _builder = ArtifactBuilder::default();
}

#[test]
fn test_parse_description() {
    let result = ArtifactBuilder::default().parse(SHOP);
    assert!(
        result.is_ok(),
        "Should parse valid description: {:?}",
        result.err()
    );

    let model = result.unwrap();
    assert_eq!(model.system().name(), "Shop");
    assert_eq!(model.containers().len(), 2);
}

#[test]
fn test_render_contract_from_description() {
    let builder = ArtifactBuilder::default();
    let model = builder.parse(SHOP).unwrap();

    let json = builder.contract_json(model.api()).unwrap();

    assert!(json.starts_with("{\n  \"openapi\": \"3.0.3\""));
    assert!(json.contains("\"title\": \"Shop API\""));
    assert!(json.contains("\"operationId\": \"get_orders\""));
    assert!(json.contains("\"bearerAuth\""));
}

#[test]
fn test_compact_contract() {
    let config = AppConfig::new(
        ModelConfig::default(),
        ContractConfig::new(false),
        DiagramConfig::default(),
    );
    let builder = ArtifactBuilder::new(config);
    let api = builder.api_from_source("Order").unwrap();

    let json = builder.contract_json(&api).unwrap();

    assert!(json.starts_with("{\"openapi\":\"3.0.3\""));
    assert!(!json.contains('\n'));
}

#[test]
fn test_resource_name_falls_back_to_crud() {
    let builder = ArtifactBuilder::default();

    let api = builder.api_from_source("  Order  ").unwrap();
    let contract = builder.render_contract(&api);

    assert_eq!(contract.paths().len(), 2);
    assert!(contract.operation("/orders", "post").is_some());
    assert!(contract.operation("/orders/{id}", "put").is_some());
}

#[test]
fn test_description_source_uses_declared_api() {
    let api = ArtifactBuilder::default().api_from_source(SHOP).unwrap();

    assert_eq!(api.info().name(), "Shop");
    assert_eq!(api.endpoints().len(), 1);
}

#[test]
fn test_render_diagrams() {
    let builder = ArtifactBuilder::default();
    let model = builder.parse(SHOP).unwrap();

    let diagrams = builder.render_diagrams(&model);

    assert_eq!(diagrams.diagrams().len(), 5);
    let component = diagrams.get(DiagramKind::Component).unwrap().source();
    assert!(component.contains("ContainerDb(pg, \"Orders DB\", \"PostgreSQL\", \"Database\")"));
    let container = diagrams.get(DiagramKind::Container).unwrap().source();
    assert!(container.contains("Rel(web, api, \"calls [HTTPS]\")"));
}

#[test]
fn test_external_system_placeholders_per_diagram() {
    let builder = ArtifactBuilder::default();
    let model = builder.parse(r#"{"external_systems": [{}]}"#).unwrap();

    let diagrams = builder.render_diagrams(&model);

    let context = diagrams.get(DiagramKind::Context).unwrap().source();
    assert!(context.contains("System_Ext(ext0, \"External System 0\", \"Third-party service\")"));
    let container = diagrams.get(DiagramKind::Container).unwrap().source();
    assert!(container.contains("System_Ext(ext, \"External System\", \"External service\")"));
}

#[test]
fn test_check_reports_dangling_reference() {
    let builder = ArtifactBuilder::default();
    let model = builder
        .parse(r#"{"container_relationships": [{"from": "web", "to": "ghost"}]}"#)
        .unwrap();

    let warnings = builder.check(&model);

    assert_eq!(warnings.len(), 2);
    assert!(
        warnings
            .iter()
            .all(|warning| warning.code() == Some(ErrorCode::W100))
    );
}

#[test]
fn test_parse_and_check_ignores_config_switch() {
    let source = r#"{"data_flows": [{"from": "in", "to": "out"}]}"#;

    for check_references in [true, false] {
        let config = AppConfig::new(
            ModelConfig::new(16, check_references),
            ContractConfig::default(),
            DiagramConfig::default(),
        );
        let (model, warnings) = ArtifactBuilder::new(config).parse_and_check(source).unwrap();

        assert_eq!(model.data_flow().flows().len(), 1);
        assert_eq!(warnings.len(), 2);
    }
}

#[test]
fn test_check_clean_description() {
    let builder = ArtifactBuilder::default();
    let model = builder.parse(SHOP).unwrap();

    assert!(builder.check(&model).is_empty());
}

#[test]
fn test_parse_invalid_json_returns_error() {
    let result = ArtifactBuilder::default().parse("{\"users\": [}");

    match result {
        Err(ArchsynthError::Parse { err, src }) => {
            assert_eq!(src, "{\"users\": [}");
            assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E001));
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_blank_source_returns_error() {
    let result = ArtifactBuilder::default().api_from_source("   ");
    assert!(result.is_err(), "Should return error for blank input");
}

#[test]
fn test_deployment_depth_from_config() {
    let config = AppConfig::new(
        ModelConfig::new(2, true),
        ContractConfig::default(),
        DiagramConfig::default(),
    );
    let source = r#"{"deployment_nodes": [
        {"id": "a", "nested_nodes": [{"id": "b", "nested_nodes": [{"id": "c"}]}]}
    ]}"#;

    assert!(ArtifactBuilder::default().parse(source).is_ok());
    let result = ArtifactBuilder::new(config).parse(source);
    match result {
        Err(ArchsynthError::Parse { err, .. }) => {
            assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E004));
        }
        other => panic!("Expected depth error, got {other:?}"),
    }
}

#[test]
fn test_check_document() {
    let report = ArtifactBuilder::default().check_document("## 1. Project Structure\n");

    assert!(!report.passed());
    assert!(report.issues()[0].starts_with("Missing required sections: 2. "));
}
