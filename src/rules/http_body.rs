//! Body-less verbs must not define body parameters.

use crate::ir::{HttpParameterLocation, Service};
use crate::rule::{combine, parameter_rule, RuleOptions, Severity, SeverityOpt, Violation};
use http::Method;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct BodyOptions {
    severity: SeverityOpt,
}

fn no_body_rule(
    service: &Service,
    options: &RuleOptions,
    verb: Method,
    code: &'static str,
    link: &'static str,
) -> Vec<Violation> {
    let opts: BodyOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);

    parameter_rule(service, |ctx| {
        let binding = ctx.http?;
        let http_parameter = ctx.http_parameter?;
        if binding.verb.value != verb
            || http_parameter.location.value != HttpParameterLocation::Body
        {
            return None;
        }

        Some(
            Violation::new(
                code,
                format!(
                    "HTTP {} method \"{}\" must not define a body parameter.",
                    verb, ctx.method.name.value
                ),
                severity,
            )
            .at(service, ctx.parameter.loc.as_deref())
            .with_link(link),
        )
    })
}

pub fn no_http_get_body(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    no_body_rule(
        service,
        options,
        Method::GET,
        "svclint/no-http-get-body",
        "https://github.com/microscaler/svclint#no-http-get-body",
    )
}

pub fn no_http_delete_body(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    no_body_rule(
        service,
        options,
        Method::DELETE,
        "svclint/no-http-delete-body",
        "https://github.com/microscaler/svclint#no-http-delete-body",
    )
}

pub fn no_http_head_body(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    no_body_rule(
        service,
        options,
        Method::HEAD,
        "svclint/no-http-head-body",
        "https://github.com/microscaler/svclint#no-http-head-body",
    )
}

pub fn no_http_options_body(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    no_body_rule(
        service,
        options,
        Method::OPTIONS,
        "svclint/no-http-options-body",
        "https://github.com/microscaler/svclint#no-http-options-body",
    )
}

pub fn no_http_trace_body(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    no_body_rule(
        service,
        options,
        Method::TRACE,
        "svclint/no-http-trace-body",
        "https://github.com/microscaler/svclint#no-http-trace-body",
    )
}

/// All body-less-verb checks combined.
pub fn no_disallowed_body(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    combine(
        service,
        options,
        &[
            no_http_delete_body,
            no_http_get_body,
            no_http_head_body,
            no_http_options_body,
            no_http_trace_body,
        ],
    )
}
