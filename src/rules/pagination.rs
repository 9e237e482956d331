//! Pagination contracts: offset/limit pairs and Relay-style cursors.

use super::{is_array_payload, method_selected, verb_filter_allows};
use crate::ir::{MethodDef, Primitive, Service, TypeDef};
use crate::rule::{method_rule, NameList, RuleOptions, Severity, SeverityOpt, Violation};
use crate::text::{camel, snake};
use serde::Deserialize;

const LINK: &str = "https://github.com/microscaler/svclint#pagination";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PaginationOptions {
    severity: SeverityOpt,
    payload: NameList,
    verb: NameList,
    verbs: NameList,
    allow: NameList,
    deny: NameList,
}

impl PaginationOptions {
    fn verbs(&self) -> &NameList {
        if !self.verb.is_empty() {
            &self.verb
        } else {
            &self.verbs
        }
    }
}

fn optional_primitive_param<'a>(
    method: &'a MethodDef,
    name: &str,
    primitive: Primitive,
) -> Option<&'a crate::ir::Parameter> {
    method.parameters.iter().find(|p| {
        snake(&p.name.value) == name
            && p.value.is_primitive(primitive)
            && !p.value.is_required()
    })
}

/// Methods returning an array payload must accept optional integer
/// `offset` and `limit` parameters.
pub fn offset_pagination(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: PaginationOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);

    method_rule(service, |ctx| {
        if !method_selected(&ctx.method.name.value, &opts.allow, &opts.deny) {
            return None;
        }
        let verbs = opts.verbs();
        if !verbs.is_empty() && !verb_filter_allows(ctx.http, verbs) {
            return None;
        }
        if !is_array_payload(service, &opts.payload, ctx.method.returns.as_ref()) {
            return None;
        }

        let offset = optional_primitive_param(ctx.method, "offset", Primitive::Integer);
        let limit = optional_primitive_param(ctx.method, "limit", Primitive::Integer);
        if offset.is_some() && limit.is_some() {
            return None;
        }

        Some(
            Violation::new(
                "svclint/offset-pagination",
                format!(
                    "Method \"{}\" must define optional integer offset and limit parameters.",
                    ctx.method.name.value
                ),
                severity,
            )
            .at(service, ctx.method.loc.as_deref())
            .with_link(LINK),
        )
    })
}

/// Whether a type has the Relay page-info shape: `hasPreviousPage` and
/// `hasNextPage` booleans plus `startCursor` and `endCursor` strings.
fn is_page_info(ty: &TypeDef) -> bool {
    let has = |name: &str, primitive: Primitive| {
        ty.properties
            .iter()
            .any(|p| camel(&p.name.value) == name && p.value.is_primitive(primitive))
    };

    has("hasPreviousPage", Primitive::Boolean)
        && has("hasNextPage", Primitive::Boolean)
        && has("startCursor", Primitive::String)
        && has("endCursor", Primitive::String)
}

/// Methods returning an array payload must accept the four optional Relay
/// cursor parameters and return a type referencing a page-info object.
pub fn relay_pagination(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: PaginationOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);
    let default_verbs = NameList(vec!["get".to_string()]);
    let verbs = if opts.verbs().is_empty() {
        &default_verbs
    } else {
        opts.verbs()
    };

    method_rule(service, |ctx| {
        if !method_selected(&ctx.method.name.value, &opts.allow, &opts.deny) {
            return None;
        }
        if !verb_filter_allows(ctx.http, verbs) {
            return None;
        }
        if !is_array_payload(service, &opts.payload, ctx.method.returns.as_ref()) {
            return None;
        }

        let first = optional_primitive_param(ctx.method, "first", Primitive::Integer);
        let after = optional_primitive_param(ctx.method, "after", Primitive::String);
        let last = optional_primitive_param(ctx.method, "last", Primitive::Integer);
        let before = optional_primitive_param(ctx.method, "before", Primitive::String);

        let page_info = ctx
            .method
            .returns
            .as_ref()
            .and_then(|r| r.value.complex_name())
            .and_then(|name| service.type_by_name(name))
            .map(|ty| {
                ty.properties
                    .iter()
                    .filter_map(|p| p.value.complex_name())
                    .filter_map(|name| service.type_by_name(name))
                    .any(is_page_info)
            })
            .unwrap_or(false);

        if first.is_some() && after.is_some() && last.is_some() && before.is_some() && page_info {
            return None;
        }

        Some(
            Violation::new(
                "svclint/relay-pagination",
                format!(
                    "Method \"{}\" must define optional relay pagination parameters and return a \"page info\" object.",
                    ctx.method.name.value
                ),
                severity,
            )
            .at(service, ctx.method.loc.as_deref())
            .with_link(LINK),
        )
    })
}
