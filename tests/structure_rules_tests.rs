//! Integration tests for the structural rules: map shapes, string IDs,
//! array parameter lengths, and the response envelope.

mod common;

use common::*;
use serde_json::json;
use svclint::ir::{MapMember, MapProperties, Primitive};
use svclint::rule::RuleOptions;
use svclint::rules::{
    array_parameter_length, no_free_form_objects, no_mixed_properties, object_response_body,
    response_envelope, string_id, string_map_key,
};

fn map_type(key: svclint::ir::Value, value: svclint::ir::Value) -> svclint::ir::TypeDef {
    let mut ty = type_def("labels", vec![]);
    ty.map_properties = Some(MapProperties {
        key: MapMember {
            value: key,
            loc: None,
        },
        value: MapMember {
            value,
            loc: None,
        },
        required_keys: Vec::new(),
        loc: None,
    });
    ty
}

#[test]
fn untyped_map_values_are_flagged() {
    let mut svc = service();
    svc.types = vec![map_type(
        primitive_value(Primitive::String),
        primitive_value(Primitive::Untyped),
    )];

    let violations = no_free_form_objects(&svc, &RuleOptions::default());
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].code, "svclint/no-free-form-objects");
}

#[test]
fn typed_map_values_pass() {
    let mut svc = service();
    svc.types = vec![map_type(
        primitive_value(Primitive::String),
        primitive_value(Primitive::String),
    )];

    assert!(no_free_form_objects(&svc, &RuleOptions::default()).is_empty());
}

#[test]
fn types_mixing_properties_and_map_semantics_are_flagged() {
    let mut ty = map_type(
        primitive_value(Primitive::String),
        primitive_value(Primitive::String),
    );
    ty.properties = vec![property("id", primitive_value(Primitive::String))];

    let mut svc = service();
    svc.types = vec![ty];

    let violations = no_mixed_properties(&svc, &RuleOptions::default());
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].code, "svclint/no-mixed-properties");
}

#[test]
fn array_and_non_string_map_keys_yield_independent_violations() {
    let mut svc = service();
    svc.types = vec![map_type(
        array(primitive_value(Primitive::Integer)),
        primitive_value(Primitive::String),
    )];

    let violations = string_map_key(&svc, &RuleOptions::default());
    assert_eq!(violations.len(), 2);
    assert!(violations[0].message.contains("must not be an array"));
    assert!(violations[1].message.contains("must be a string"));
}

#[test]
fn string_map_keys_pass() {
    let mut svc = service();
    svc.types = vec![map_type(
        primitive_value(Primitive::String),
        primitive_value(Primitive::String),
    )];

    assert!(string_map_key(&svc, &RuleOptions::default()).is_empty());
}

#[test]
fn non_string_id_properties_are_flagged() {
    let mut svc = service();
    svc.types = vec![type_def(
        "widget",
        vec![
            property("id", primitive_value(Primitive::Integer)),
            property("name", primitive_value(Primitive::String)),
        ],
    )];

    let violations = string_id(&svc, &RuleOptions::default());
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].code, "svclint/string-id");
}

#[test]
fn string_id_properties_pass() {
    let mut svc = service();
    svc.types = vec![type_def(
        "widget",
        vec![property("id", primitive_value(Primitive::String))],
    )];

    assert!(string_id(&svc, &RuleOptions::default()).is_empty());
}

#[test]
fn array_parameters_without_max_items_are_flagged() {
    let mut m = method("someMethod");
    m.parameters = vec![parameter("tags", array(primitive_value(Primitive::String)))];
    let mut svc = service();
    svc.interfaces = vec![interface("widgets", vec![m])];

    let violations = array_parameter_length(&svc, &RuleOptions::default());
    assert_eq!(violations.len(), 1);
    assert!(violations[0].message.contains("tags"));
    assert!(violations[0].message.contains("someMethod"));
}

#[test]
fn array_parameters_with_max_items_pass() {
    let mut m = method("someMethod");
    m.parameters = vec![parameter(
        "tags",
        with_rule(array(primitive_value(Primitive::String)), "array-max-items"),
    )];
    let mut svc = service();
    svc.interfaces = vec![interface("widgets", vec![m])];

    assert!(array_parameter_length(&svc, &RuleOptions::default()).is_empty());
}

#[test]
fn envelope_with_errors_and_payload_passes() {
    let mut m = method("someMethod");
    m.returns = returns(complex_value("envelope"));
    let mut svc = service();
    svc.interfaces = vec![interface("widgets", vec![m])];
    svc.types = vec![envelope(false, "data"), type_def("widget", vec![])];

    assert!(response_envelope(&svc, &RuleOptions::default()).is_empty());
}

#[test]
fn non_envelope_return_types_are_flagged() {
    let mut m = method("someMethod");
    m.returns = returns(complex_value("widget"));
    let mut svc = service();
    svc.interfaces = vec![interface("widgets", vec![m])];
    svc.types = vec![type_def(
        "widget",
        vec![property("id", primitive_value(Primitive::String))],
    )];

    let violations = response_envelope(&svc, &RuleOptions::default());
    assert_eq!(violations.len(), 1);
    assert!(violations[0].message.contains("value, values, data"));
}

#[test]
fn envelope_payload_option_restricts_accepted_names() {
    let mut m = method("someMethod");
    m.returns = returns(complex_value("envelope"));
    let mut svc = service();
    svc.interfaces = vec![interface("widgets", vec![m])];
    svc.types = vec![envelope(false, "data"), type_def("widget", vec![])];

    let options = RuleOptions::new(json!({ "payload": "result" }));
    let violations = response_envelope(&svc, &options);
    assert_eq!(violations.len(), 1);
    assert!(violations[0].message.contains("result"));
}

#[test]
fn primitive_response_bodies_are_flagged() {
    let mut m = method("someMethod");
    m.returns = returns(primitive_value(Primitive::String));
    let mut svc = service();
    svc.interfaces = vec![interface("widgets", vec![m])];

    let violations = object_response_body(&svc, &RuleOptions::default());
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].code, "svclint/object-response-body");
}

#[test]
fn union_of_objects_response_bodies_pass() {
    let mut m = method("someMethod");
    m.returns = returns(complex_value("pet"));
    let mut svc = service();
    svc.interfaces = vec![interface("widgets", vec![m])];
    svc.types = vec![type_def("cat", vec![]), type_def("dog", vec![])];
    svc.unions = vec![union_def(
        "pet",
        vec![complex_value("cat"), complex_value("dog")],
    )];

    assert!(object_response_body(&svc, &RuleOptions::default()).is_empty());
}
