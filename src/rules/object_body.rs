//! Request and response bodies must be objects or unions of objects.

use crate::ir::{HttpParameterLocation, Service, Value};
use crate::rule::{
    combine, method_rule, parameter_rule, RuleOptions, Severity, SeverityOpt, Violation,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ObjectBodyOptions {
    severity: SeverityOpt,
}

/// A value is an acceptable body shape when it resolves to a non-array
/// declared type, or to a union whose members are all non-array objects.
fn is_object_shaped(service: &Service, value: &Value) -> bool {
    let Some(name) = value.complex_name() else {
        return false;
    };

    if service.type_by_name(name).is_some() && !value.is_array() {
        return true;
    }

    service
        .union_by_name(name)
        .is_some_and(|union| {
            union
                .members
                .iter()
                .all(|member| !member.is_array() && member.complex_name().is_some())
        })
}

pub fn object_request_body(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: ObjectBodyOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);

    parameter_rule(service, |ctx| {
        let http_parameter = ctx.http_parameter?;
        if http_parameter.location.value != HttpParameterLocation::Body {
            return None;
        }
        if is_object_shaped(service, &ctx.parameter.value) {
            return None;
        }

        Some(
            Violation::new(
                "svclint/object-request-body",
                format!(
                    "Body parameter \"{}\" must be an object or a union of objects.",
                    ctx.parameter.name.value
                ),
                severity,
            )
            .at(service, ctx.parameter.loc.as_deref())
            .with_link("https://github.com/microscaler/svclint#object-request-body"),
        )
    })
}

pub fn object_response_body(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: ObjectBodyOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);

    method_rule(service, |ctx| {
        let returns = ctx.method.returns.as_ref()?;
        if is_object_shaped(service, &returns.value) {
            return None;
        }

        Some(
            Violation::new(
                "svclint/object-response-body",
                format!(
                    "Method \"{}\" must return an object or a union of objects.",
                    ctx.method.name.value
                ),
                severity,
            )
            .at(service, ctx.method.loc.as_deref())
            .with_link("https://github.com/microscaler/svclint#object-response-body"),
        )
    })
}

/// Request- and response-body checks combined.
pub fn object_body(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    combine(service, options, &[object_request_body, object_response_body])
}
