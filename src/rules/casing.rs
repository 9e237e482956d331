//! Naming-convention conformance, configured per entity kind.

use crate::ir::Service;
use crate::iter::{all_enum_members, all_enums, all_http_routes};
use crate::rule::{
    method_rule, parameter_rule, property_rule, type_rule, RuleOptions, Severity, SeverityOpt,
    Violation,
};
use crate::text::{apply, Casing};
use serde::Deserialize;

const LINK: &str = "https://github.com/microscaler/svclint#casing";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CasingOptions {
    severity: SeverityOpt,
    r#enum: Option<String>,
    enum_value: Option<String>,
    path: Option<String>,
    method: Option<String>,
    parameter: Option<String>,
    header: Option<String>,
    query: Option<String>,
    property: Option<String>,
    r#type: Option<String>,
}

fn selected(selector: &Option<String>) -> Option<Casing> {
    selector.as_deref().and_then(Casing::parse)
}

/// Check every configured entity kind for casing conformance. Entity kinds
/// with no configured selector are not checked at all.
pub fn casing(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: CasingOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);
    let mut violations = Vec::new();

    if let Some(casing) = selected(&opts.r#enum) {
        for ctx in all_enums(service) {
            let name = &ctx.en.name;
            let correct = apply(&name.value, casing);
            if name.value != correct {
                violations.push(
                    Violation::new(
                        "svclint/enum-casing",
                        format!(
                            "Enum name \"{}\" must be {} cased: \"{}\"",
                            name.value, casing, correct
                        ),
                        severity,
                    )
                    .at(service, name.loc())
                    .with_link(LINK),
                );
            }
        }
    }

    if let Some(casing) = selected(&opts.enum_value) {
        for ctx in all_enum_members(service) {
            let content = &ctx.member.content;
            let correct = apply(&content.value, casing);
            if content.value != correct {
                violations.push(
                    Violation::new(
                        "svclint/enum-member-casing",
                        format!(
                            "Enum member \"{}\" must be {} cased: \"{}\"",
                            content.value, casing, correct
                        ),
                        severity,
                    )
                    .at(service, ctx.member.loc.as_deref())
                    .with_link(LINK),
                );
            }
        }
    }

    if let Some(casing) = selected(&opts.path) {
        for ctx in all_http_routes(service) {
            let pattern = &ctx.route.pattern;
            for segment in pattern.value.split('/') {
                // Parameter segments are named by the parameter rules.
                if segment.starts_with(':')
                    || (segment.starts_with('{') && segment.ends_with('}'))
                {
                    continue;
                }
                let correct = apply(segment, casing);
                if segment != correct {
                    violations.push(
                        Violation::new(
                            "svclint/route-casing",
                            format!(
                                "Path segment \"{}\" must be {} cased: \"{}\"",
                                segment, casing, correct
                            ),
                            severity,
                        )
                        .at(service, pattern.loc())
                        .with_link(LINK),
                    );
                }
            }
        }
    }

    if let Some(casing) = selected(&opts.method) {
        violations.extend(method_rule(service, |ctx| {
            let name = &ctx.method.name;
            let correct = apply(&name.value, casing);
            (name.value != correct).then(|| {
                Violation::new(
                    "svclint/method-casing",
                    format!(
                        "Method name \"{}\" must be {} cased: \"{}\"",
                        name.value, casing, correct
                    ),
                    severity,
                )
                .at(service, name.loc())
                .with_link(LINK)
            })
        }));
    }

    if let Some(casing) = selected(&opts.parameter) {
        let header_checked = selected(&opts.header).is_some();
        let query_checked = selected(&opts.query).is_some();
        violations.extend(parameter_rule(service, |ctx| {
            let location = ctx.http_parameter.map(|p| p.location.value);
            // Header and query parameters get their own casing when one is
            // configured for them.
            if header_checked && location == Some(crate::ir::HttpParameterLocation::Header) {
                return None;
            }
            if query_checked && location == Some(crate::ir::HttpParameterLocation::Query) {
                return None;
            }

            let name = &ctx.parameter.name;
            let correct = apply(&name.value, casing);
            (name.value != correct).then(|| {
                Violation::new(
                    "svclint/parameter-casing",
                    format!(
                        "Parameter name \"{}\" must be {} cased: \"{}\"",
                        name.value, casing, correct
                    ),
                    severity,
                )
                .at(service, name.loc())
                .with_link(LINK)
            })
        }));
    }

    if let Some(casing) = selected(&opts.header) {
        violations.extend(parameter_rule(service, |ctx| {
            let location = ctx.http_parameter.map(|p| p.location.value);
            if location != Some(crate::ir::HttpParameterLocation::Header) {
                return None;
            }

            let name = &ctx.parameter.name;
            let correct = apply(&name.value, casing);
            (name.value != correct).then(|| {
                Violation::new(
                    "svclint/header-casing",
                    format!(
                        "Header name \"{}\" must be {} cased: \"{}\"",
                        name.value, casing, correct
                    ),
                    severity,
                )
                .at(service, name.loc())
                .with_link(LINK)
            })
        }));
    }

    if let Some(casing) = selected(&opts.query) {
        violations.extend(parameter_rule(service, |ctx| {
            let location = ctx.http_parameter.map(|p| p.location.value);
            if location != Some(crate::ir::HttpParameterLocation::Query) {
                return None;
            }

            let name = &ctx.parameter.name;
            let correct = apply(&name.value, casing);
            (name.value != correct).then(|| {
                Violation::new(
                    "svclint/query-casing",
                    format!(
                        "Query parameter \"{}\" must be {} cased: \"{}\"",
                        name.value, casing, correct
                    ),
                    severity,
                )
                .at(service, name.loc())
                .with_link(LINK)
            })
        }));
    }

    if let Some(casing) = selected(&opts.property) {
        violations.extend(property_rule(service, |ctx| {
            let name = &ctx.property.name;
            let correct = apply(&name.value, casing);
            (name.value != correct).then(|| {
                Violation::new(
                    "svclint/property-casing",
                    format!(
                        "Property name \"{}\" must be {} cased: \"{}\"",
                        name.value, casing, correct
                    ),
                    severity,
                )
                .at(service, name.loc())
                .with_link(LINK)
            })
        }));

        // Required map keys are property names too.
        for ty in &service.types {
            let Some(map) = &ty.map_properties else {
                continue;
            };
            for required_key in &map.required_keys {
                let correct = apply(&required_key.value, casing);
                if required_key.value != correct {
                    violations.push(
                        Violation::new(
                            "svclint/property-casing",
                            format!(
                                "Property name \"{}\" must be {} cased: \"{}\"",
                                required_key.value, casing, correct
                            ),
                            severity,
                        )
                        .at(service, required_key.loc())
                        .with_link(LINK),
                    );
                }
            }
        }
    }

    if let Some(casing) = selected(&opts.r#type) {
        violations.extend(type_rule(service, |ctx| {
            let name = &ctx.ty.name;
            let correct = apply(&name.value, casing);
            (name.value != correct).then(|| {
                Violation::new(
                    "svclint/type-casing",
                    format!(
                        "Type name \"{}\" must be {} cased: \"{}\"",
                        name.value, casing, correct
                    ),
                    severity,
                )
                .at(service, name.loc())
                .with_link(LINK)
            })
        }));
    }

    violations
}
