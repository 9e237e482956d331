//! No nullable properties on any type exposed through the API surface.
//!
//! Scope is computed by the reachability traversal: a type that no method
//! references is not checked. Methods whose HTTP verb appears in the
//! `allowHttpVerbs` option keep their parameter types out of scope.

use crate::ir::Service;
use crate::reachability::ServiceScope;
use crate::rule::{NameList, RuleOptions, Severity, SeverityOpt, Violation};
use http::Method;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct NoNullOptions {
    severity: SeverityOpt,
    allow_http_verbs: NameList,
}

pub fn no_null_properties(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: NoNullOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);

    let allow_verbs: Vec<Method> = opts
        .allow_http_verbs
        .iter()
        .filter_map(|verb| Method::from_bytes(verb.to_ascii_uppercase().as_bytes()).ok())
        .collect();

    let scope = ServiceScope::build(service, &allow_verbs);
    let mut violations = Vec::new();

    for ty in scope.types() {
        for property in &ty.properties {
            let Some(flag) = property.value.nullable_flag() else {
                continue;
            };

            let loc = flag
                .loc()
                .or(property.name.loc())
                .or(property.loc.as_deref());
            violations.push(
                Violation::new(
                    "svclint/no-null-properties",
                    "Property may not be null.",
                    severity,
                )
                .at(service, loc),
            );
        }
    }

    violations
}
