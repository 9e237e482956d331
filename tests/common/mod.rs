//! Shared IR builders for rule tests.
//!
//! Every builder produces the smallest valid node and lets the test mutate
//! public fields for the scenario under test.

#![allow(dead_code)]

use http::Method;
use svclint::ir::{
    ComplexValue, EnumDef, EnumMember, HttpBinding, HttpParameterBinding, HttpParameterLocation,
    HttpRoute, Interface, MethodDef, Parameter, Primitive, PrimitiveValue, Property, ReturnValue,
    Service, Spanned, TypeDef, UnionDef, ValidationRule, Value, Verb,
};

pub const LOC: &str = "1;1;0";

pub fn service() -> Service {
    Service {
        title: Some(Spanned::new("test".to_string())),
        source_paths: vec!["test.api.json".to_string()],
        interfaces: Vec::new(),
        types: Vec::new(),
        enums: Vec::new(),
        unions: Vec::new(),
        loc: Some(LOC.to_string()),
    }
}

pub fn interface(name: &str, methods: Vec<MethodDef>) -> Interface {
    Interface {
        name: Spanned::new(name.to_string()),
        methods,
        routes: Vec::new(),
        loc: None,
    }
}

pub fn method(name: &str) -> MethodDef {
    MethodDef {
        name: Spanned::new(name.to_string()),
        description: None,
        parameters: Vec::new(),
        returns: None,
        loc: Some(LOC.to_string()),
    }
}

pub fn described(mut method: MethodDef) -> MethodDef {
    method.description = Some(Spanned::new("A description.".to_string()));
    method
}

pub fn primitive_value(primitive: Primitive) -> Value {
    Value::Primitive(PrimitiveValue {
        type_name: Spanned::new(primitive),
        is_array: None,
        is_required: None,
        is_nullable: None,
        rules: Vec::new(),
    })
}

pub fn complex_value(type_name: &str) -> Value {
    Value::Complex(ComplexValue {
        type_name: Spanned::new(type_name.to_string()),
        is_array: None,
        is_required: None,
        is_nullable: None,
        rules: Vec::new(),
    })
}

pub fn array(mut value: Value) -> Value {
    match &mut value {
        Value::Primitive(v) => v.is_array = Some(Spanned::new(true)),
        Value::Complex(v) => v.is_array = Some(Spanned::new(true)),
    }
    value
}

pub fn required(mut value: Value) -> Value {
    match &mut value {
        Value::Primitive(v) => v.is_required = Some(Spanned::new(true)),
        Value::Complex(v) => v.is_required = Some(Spanned::new(true)),
    }
    value
}

pub fn nullable(mut value: Value) -> Value {
    match &mut value {
        Value::Primitive(v) => v.is_nullable = Some(Spanned::new(true)),
        Value::Complex(v) => v.is_nullable = Some(Spanned::new(true)),
    }
    value
}

pub fn with_rule(mut value: Value, id: &str) -> Value {
    let rule = ValidationRule {
        id: id.to_string(),
        value: None,
        loc: None,
    };
    match &mut value {
        Value::Primitive(v) => v.rules.push(rule),
        Value::Complex(v) => v.rules.push(rule),
    }
    value
}

pub fn parameter(name: &str, value: Value) -> Parameter {
    Parameter {
        name: Spanned::new(name.to_string()),
        description: None,
        value,
        loc: Some(LOC.to_string()),
    }
}

pub fn property(name: &str, value: Value) -> Property {
    Property {
        name: Spanned::new(name.to_string()),
        description: None,
        value,
        loc: Some(LOC.to_string()),
    }
}

pub fn type_def(name: &str, properties: Vec<Property>) -> TypeDef {
    TypeDef {
        name: Spanned::new(name.to_string()),
        description: None,
        properties,
        map_properties: None,
        rules: Vec::new(),
        loc: Some(LOC.to_string()),
    }
}

pub fn enum_def(name: &str, members: &[&str]) -> EnumDef {
    EnumDef {
        name: Spanned::new(name.to_string()),
        description: None,
        members: members
            .iter()
            .map(|m| EnumMember {
                content: Spanned::new(m.to_string()),
                loc: None,
            })
            .collect(),
        loc: Some(LOC.to_string()),
    }
}

pub fn union_def(name: &str, members: Vec<Value>) -> UnionDef {
    UnionDef {
        name: Spanned::new(name.to_string()),
        members,
        loc: Some(LOC.to_string()),
    }
}

pub fn returns(value: Value) -> Option<ReturnValue> {
    Some(ReturnValue {
        value,
        loc: Some(LOC.to_string()),
    })
}

pub fn http_binding(name: &str, verb: Method, success_code: u16) -> HttpBinding {
    HttpBinding {
        name: Spanned::new(name.to_string()),
        verb: Verb::new(verb),
        success_code: Spanned::new(success_code),
        parameters: Vec::new(),
        loc: Some(LOC.to_string()),
    }
}

pub fn http_parameter(name: &str, location: HttpParameterLocation) -> HttpParameterBinding {
    HttpParameterBinding {
        name: Spanned::new(name.to_string()),
        location: Spanned::new(location),
        loc: None,
    }
}

pub fn http_route(pattern: &str, bindings: Vec<HttpBinding>) -> HttpRoute {
    HttpRoute {
        pattern: Spanned::new(pattern.to_string()),
        bindings,
        loc: None,
    }
}

/// An envelope type named `envelope`: an `errors` array plus one payload
/// property referencing `widget`.
pub fn envelope(is_array: bool, payload: &str) -> TypeDef {
    let payload_value = if is_array {
        array(complex_value("widget"))
    } else {
        complex_value("widget")
    };
    type_def(
        "envelope",
        vec![
            property("errors", array(complex_value("error"))),
            property(payload, payload_value),
        ],
    )
}
