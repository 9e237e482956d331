//! Required-description checks for methods, parameters, properties, and
//! types.

use crate::ir::Service;
use crate::rule::{
    combine, method_rule, parameter_rule, property_rule, type_rule, RuleOptions, Severity,
    SeverityOpt, Violation,
};
use serde::Deserialize;

const LINK: &str = "https://github.com/microscaler/svclint#descriptions";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DescriptionOptions {
    severity: SeverityOpt,
}

pub fn method_description(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: DescriptionOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);

    method_rule(service, |ctx| {
        if ctx.method.description.is_some() {
            return None;
        }
        Some(
            Violation::new(
                "svclint/method-description",
                format!(
                    "Method \"{}\" is required to have a description.",
                    ctx.method.name.value
                ),
                severity,
            )
            .at(service, ctx.method.loc.as_deref())
            .with_link(LINK),
        )
    })
}

pub fn parameter_description(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: DescriptionOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);

    parameter_rule(service, |ctx| {
        if ctx.parameter.description.is_some() {
            return None;
        }
        Some(
            Violation::new(
                "svclint/parameter-description",
                format!(
                    "Parameter \"{}\" is required to have a description.",
                    ctx.parameter.name.value
                ),
                severity,
            )
            .at(service, ctx.parameter.loc.as_deref()),
        )
    })
}

pub fn property_description(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: DescriptionOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);

    property_rule(service, |ctx| {
        if ctx.property.description.is_some() {
            return None;
        }
        Some(
            Violation::new(
                "svclint/property-description",
                format!(
                    "Property \"{}\" is required to have a description.",
                    ctx.property.name.value
                ),
                severity,
            )
            .at(service, ctx.property.loc.as_deref()),
        )
    })
}

pub fn type_description(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: DescriptionOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);

    type_rule(service, |ctx| {
        if ctx.ty.description.is_some() {
            return None;
        }
        Some(
            Violation::new(
                "svclint/type-description",
                format!(
                    "Type \"{}\" is required to have a description.",
                    ctx.ty.name.value
                ),
                severity,
            )
            .at(service, ctx.ty.loc.as_deref())
            .with_link(LINK),
        )
    })
}

/// All description checks combined.
pub fn description(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    combine(
        service,
        options,
        &[
            method_description,
            parameter_description,
            property_description,
            type_description,
        ],
    )
}
