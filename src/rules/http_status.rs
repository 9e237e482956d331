//! Success-status-code conformance per HTTP verb.

use crate::ir::Service;
use crate::rule::{combine, method_rule, RuleOptions, Severity, SeverityOpt, Violation};
use http::Method;
use serde::Deserialize;

const LINK: &str = "https://github.com/microscaler/svclint#http-status-codes";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct StatusOptions {
    severity: SeverityOpt,
}

fn verb_status_rule(
    service: &Service,
    options: &RuleOptions,
    verb: Method,
    code: &'static str,
    allowed: &[u16],
) -> Vec<Violation> {
    let opts: StatusOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);

    method_rule(service, |ctx| {
        let binding = ctx.http?;
        if binding.verb.value != verb || allowed.contains(&binding.success_code.value) {
            return None;
        }

        let allowed_list = allowed
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Some(
            Violation::new(
                code,
                format!(
                    "HTTP status code for {} method \"{}\" must be one of the following: {}.",
                    verb, binding.name.value, allowed_list
                ),
                severity,
            )
            .at(
                service,
                binding.success_code.loc().or(binding.loc.as_deref()),
            ),
        )
    })
}

pub fn http_get_status(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    verb_status_rule(
        service,
        options,
        Method::GET,
        "svclint/http-get-status",
        &[200, 204, 206],
    )
}

pub fn http_post_status(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    verb_status_rule(
        service,
        options,
        Method::POST,
        "svclint/http-post-status",
        &[200, 201, 202, 204],
    )
}

pub fn http_put_status(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    verb_status_rule(
        service,
        options,
        Method::PUT,
        "svclint/http-put-status",
        &[200, 201, 202, 204],
    )
}

pub fn http_patch_status(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    verb_status_rule(
        service,
        options,
        Method::PATCH,
        "svclint/http-patch-status",
        &[200, 202, 204],
    )
}

pub fn http_delete_status(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    verb_status_rule(
        service,
        options,
        Method::DELETE,
        "svclint/http-delete-status",
        &[200, 202, 204],
    )
}

/// Methods without a return value must answer 204; methods with one must
/// not.
pub fn http_no_content_status(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: StatusOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);

    method_rule(service, |ctx| {
        let binding = ctx.http?;
        let loc = binding.success_code.loc().or(binding.loc.as_deref());

        if ctx.method.returns.is_none() && binding.success_code.value != 204 {
            Some(
                Violation::new(
                    "svclint/http-no-content-status",
                    format!(
                        "Method \"{}\" does not have a return type and must return an HTTP status code of 204.",
                        binding.name.value
                    ),
                    severity,
                )
                .at(service, loc),
            )
        } else if ctx.method.returns.is_some() && binding.success_code.value == 204 {
            Some(
                Violation::new(
                    "svclint/http-no-content-status",
                    format!(
                        "Method \"{}\" has a return type and must not return an HTTP status code of 204.",
                        binding.name.value
                    ),
                    severity,
                )
                .at(service, loc)
                .with_link(LINK),
            )
        } else {
            None
        }
    })
}

/// All status-code checks combined.
pub fn http_status(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    combine(
        service,
        options,
        &[
            http_delete_status,
            http_get_status,
            http_no_content_status,
            http_patch_status,
            http_post_status,
            http_put_status,
        ],
    )
}
