//! Structural conformance: map shapes, identifier typing, and array
//! length bounds.

use crate::ir::{Primitive, Service};
use crate::rule::{
    parameter_rule, property_rule, type_rule, RuleOptions, Severity, SeverityOpt, Violation,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct StructureOptions {
    severity: SeverityOpt,
}

/// Map types must explicitly define a value schema; `untyped` values are
/// free-form and disallowed.
pub fn no_free_form_objects(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: StructureOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);

    type_rule(service, |ctx| {
        let map = ctx.ty.map_properties.as_ref()?;
        if !map.value.value.is_primitive(Primitive::Untyped) {
            return None;
        }

        let loc = map
            .value
            .loc
            .as_deref()
            .or(map.loc.as_deref())
            .or(ctx.ty.name.loc())
            .or(ctx.ty.loc.as_deref());
        Some(
            Violation::new(
                "svclint/no-free-form-objects",
                "Map type must explicitly define a value schema.",
                severity,
            )
            .at(service, loc),
        )
    })
}

/// A type has either declared properties or map semantics, never both.
pub fn no_mixed_properties(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: StructureOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);

    type_rule(service, |ctx| {
        if ctx.ty.map_properties.is_none() || ctx.ty.properties.is_empty() {
            return None;
        }

        Some(
            Violation::new(
                "svclint/no-mixed-properties",
                "Types may not have mixed properties. Choose between defined properties or a map.",
                severity,
            )
            .at(service, ctx.ty.name.loc().or(ctx.ty.loc.as_deref())),
        )
    })
}

/// Map keys must be non-array strings. Both conditions are checked
/// independently, so one key can produce two violations.
pub fn string_map_key(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: StructureOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);
    let mut violations = Vec::new();

    for ty in &service.types {
        let Some(map) = &ty.map_properties else {
            continue;
        };
        let key_loc = map.key.loc.as_deref().or(map.loc.as_deref());

        if map.key.value.is_array() {
            violations.push(
                Violation::new(
                    "svclint/string-map-key",
                    "Map key must not be an array.",
                    severity,
                )
                .at(service, key_loc),
            );
        }

        if !map.key.value.is_primitive(Primitive::String) {
            violations.push(
                Violation::new(
                    "svclint/string-map-key",
                    "Map keys must be a string.",
                    severity,
                )
                .at(service, key_loc),
            );
        }
    }

    violations
}

/// Properties named `id` must be strings.
pub fn string_id(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: StructureOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);

    property_rule(service, |ctx| {
        if ctx.property.name.value != "id"
            || ctx.property.value.is_primitive(Primitive::String)
        {
            return None;
        }

        Some(
            Violation::new(
                "svclint/string-id",
                "Type IDs must be of type `string`",
                severity,
            )
            .at(service, ctx.property.loc.as_deref())
            .with_link("https://github.com/microscaler/svclint#string-ids"),
        )
    })
}

/// Array parameters must declare a maximum length.
pub fn array_parameter_length(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: StructureOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);

    parameter_rule(service, |ctx| {
        if !ctx.parameter.value.is_array() {
            return None;
        }
        if ctx
            .parameter
            .value
            .rules()
            .iter()
            .any(|rule| rule.id == "array-max-items")
        {
            return None;
        }

        Some(
            Violation::new(
                "svclint/array-parameter-length",
                format!(
                    "Parameter \"{}\" (method \"{}\") is an array and must define a max array length.",
                    ctx.parameter.name.value, ctx.method.name.value
                ),
                severity,
            )
            .at(service, ctx.parameter.name.loc())
            .with_link("https://github.com/microscaler/svclint#array-parameter-length"),
        )
    })
}
