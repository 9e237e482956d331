//! Integration tests for the casing rule.

mod common;

use common::*;
use http::Method;
use serde_json::json;
use svclint::ir::{HttpParameterLocation, Primitive};
use svclint::rule::{RuleOptions, Severity};
use svclint::rules::casing;

#[test]
fn unconfigured_entity_kinds_are_not_checked() {
    let mut svc = service();
    svc.types = vec![type_def("My_Type", vec![])];

    assert!(casing(&svc, &RuleOptions::default()).is_empty());
    // A selector for another entity kind does not implicate types.
    let methods_only = RuleOptions::new(json!({ "method": "camel" }));
    assert!(casing(&svc, &methods_only).is_empty());
}

#[test]
fn flags_type_names_with_the_corrected_value() {
    let mut svc = service();
    svc.types = vec![type_def("My_Type", vec![])];

    let options = RuleOptions::new(json!({ "type": "pascal" }));
    let violations = casing(&svc, &options);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].code, "svclint/type-casing");
    assert!(violations[0].message.contains("\"MyType\""));
    assert_eq!(violations[0].severity, Severity::Error);
}

#[test]
fn conforming_type_names_pass() {
    let mut svc = service();
    svc.types = vec![type_def("MyType", vec![])];

    let options = RuleOptions::new(json!({ "type": "pascal" }));
    assert!(casing(&svc, &options).is_empty());
}

#[test]
fn flags_enum_names_and_member_contents() {
    let mut svc = service();
    svc.enums = vec![enum_def("widget_status", &["in-progress", "DONE"])];

    let options = RuleOptions::new(json!({ "enum": "pascal", "enumValue": "constant" }));
    let violations = casing(&svc, &options);

    let codes: Vec<&str> = violations.iter().map(|v| v.code.as_str()).collect();
    assert_eq!(codes, vec!["svclint/enum-casing", "svclint/enum-member-casing"]);
    assert!(violations[0].message.contains("\"WidgetStatus\""));
    assert!(violations[1].message.contains("\"IN_PROGRESS\""));
}

#[test]
fn flags_method_and_parameter_names() {
    let mut m = method("GetWidget");
    m.parameters = vec![parameter("WidgetId", primitive_value(Primitive::String))];

    let mut svc = service();
    svc.interfaces = vec![interface("widgets", vec![m])];

    let options = RuleOptions::new(json!({ "method": "camel", "parameter": "camel" }));
    let violations = casing(&svc, &options);
    assert_eq!(violations.len(), 2);
    assert!(violations[0].message.contains("\"getWidget\""));
    assert!(violations[1].message.contains("\"widgetId\""));
}

#[test]
fn path_segments_skip_parameter_placeholders() {
    let mut svc = service();
    let mut iface = interface("widgets", vec![method("getWidget")]);
    iface.routes = vec![http_route(
        "/WidgetStore/{widgetId}/:rev/partNumbers",
        vec![http_binding("getWidget", Method::GET, 200)],
    )];
    svc.interfaces = vec![iface];

    let options = RuleOptions::new(json!({ "path": "kebab" }));
    let violations = casing(&svc, &options);
    // WidgetStore and partNumbers violate; the two placeholders are skipped.
    assert_eq!(violations.len(), 2);
    assert!(violations.iter().all(|v| v.code == "svclint/route-casing"));
    assert!(violations[0].message.contains("\"widget-store\""));
    assert!(violations[1].message.contains("\"part-numbers\""));
}

#[test]
fn header_parameters_use_the_header_selector() {
    let mut m = method("getWidget");
    m.parameters = vec![
        parameter("request_id", primitive_value(Primitive::String)),
        parameter("page_size", primitive_value(Primitive::Integer)),
    ];

    let mut binding = http_binding("getWidget", Method::GET, 200);
    binding.parameters = vec![
        http_parameter("request_id", HttpParameterLocation::Header),
        http_parameter("page_size", HttpParameterLocation::Query),
    ];

    let mut iface = interface("widgets", vec![m]);
    iface.routes = vec![http_route("/widgets", vec![binding])];
    let mut svc = service();
    svc.interfaces = vec![iface];

    let options = RuleOptions::new(json!({
        "parameter": "snake",
        "header": "header",
        "query": "snake"
    }));
    let violations = casing(&svc, &options);

    // Both parameters are snake-cased, so only the header check fires.
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].code, "svclint/header-casing");
    assert!(violations[0].message.contains("\"Request-Id\""));
}

#[test]
fn flags_property_names_and_required_map_keys() {
    let mut svc = service();
    let mut labels = type_def("labels", vec![]);
    labels.map_properties = Some(svclint::ir::MapProperties {
        key: svclint::ir::MapMember {
            value: primitive_value(Primitive::String),
            loc: None,
        },
        value: svclint::ir::MapMember {
            value: primitive_value(Primitive::String),
            loc: None,
        },
        required_keys: vec![svclint::ir::Spanned::new("DisplayName".to_string())],
        loc: None,
    });
    svc.types = vec![
        type_def(
            "widget",
            vec![property("CreatedAt", primitive_value(Primitive::DateTime))],
        ),
        labels,
    ];

    let options = RuleOptions::new(json!({ "property": "camel" }));
    let violations = casing(&svc, &options);
    assert_eq!(violations.len(), 2);
    assert!(violations.iter().all(|v| v.code == "svclint/property-casing"));
    assert!(violations[0].message.contains("\"createdAt\""));
    assert!(violations[1].message.contains("\"displayName\""));
}

#[test]
fn unknown_casing_selectors_are_ignored() {
    let mut svc = service();
    svc.types = vec![type_def("My_Type", vec![])];

    let options = RuleOptions::new(json!({ "type": "mystery" }));
    assert!(casing(&svc, &options).is_empty());
}

#[test]
fn severity_option_overrides_the_default() {
    let mut svc = service();
    svc.types = vec![type_def("My_Type", vec![])];

    let options = RuleOptions::new(json!({ "type": "pascal", "severity": "warning" }));
    let violations = casing(&svc, &options);
    assert_eq!(violations[0].severity, Severity::Warning);
}
