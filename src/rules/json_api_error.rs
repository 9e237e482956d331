//! JSON:API-flavored structural contract over the service's `error` type.
//!
//! The service must declare a type named `error` (snake-case
//! insensitively) shaped per the JSON:API error-object specification,
//! including the nested `links` and `source` sub-objects. With
//! `strict: false`, `status` may be numeric and `code` may be an enum.

use crate::ir::{Primitive, Property, Service, TypeDef, Value};
use crate::rule::{RuleOptions, Severity, SeverityOpt, Violation};
use crate::text::snake;
use serde::Deserialize;
use std::collections::HashSet;

const CODE: &str = "svclint/json-api-error";
const LINK: &str = "https://jsonapi.org/format/#error-objects";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct JsonApiErrorOptions {
    severity: SeverityOpt,
    strict: Option<bool>,
}

pub fn json_api_error(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: JsonApiErrorOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);
    let lenient = opts.strict == Some(false);

    let Some(error) = service
        .types
        .iter()
        .find(|ty| snake(&ty.name.value) == "error")
    else {
        return vec![Violation::new(
            CODE,
            "Service must define an `error` type.",
            severity,
        )
        .at(service, service.loc.as_deref())
        .with_link(LINK)];
    };

    let mut shape = ErrorShape {
        service,
        severity,
        lenient,
        violations: Vec::new(),
    };
    shape.check_error(error);
    shape.violations
}

#[derive(Debug, Clone, Copy, Default)]
struct CheckOpt {
    allow_enums: bool,
    allow_array: bool,
    required: bool,
    allow_numeric: bool,
}

struct ErrorShape<'a> {
    service: &'a Service,
    severity: Severity,
    lenient: bool,
    violations: Vec<Violation>,
}

impl<'a> ErrorShape<'a> {
    fn violation(&mut self, message: String, loc: Option<&str>) {
        self.violations.push(
            Violation::new(CODE, message, self.severity)
                .at(self.service, loc)
                .with_link(LINK),
        );
    }

    /// Resolve a dotted property path, matching each segment snake-case
    /// insensitively. Returns the final property when every segment
    /// resolves.
    fn get_property(&self, ty: &'a TypeDef, path: &str) -> Option<&'a Property> {
        let service: &'a Service = self.service;
        let mut current: Option<&'a TypeDef> = Some(ty);
        let mut found: Option<&'a Property> = None;

        for segment in path.split('.') {
            let segment = snake(segment);
            let prop = current?
                .properties
                .iter()
                .find(|p| snake(&p.name.value) == segment)?;
            found = Some(prop);
            current = prop
                .value
                .complex_name()
                .and_then(|name| service.type_by_name(name));
        }
        found
    }

    fn get_sub_type(&self, ty: &'a TypeDef, prop: &str) -> Option<&'a TypeDef> {
        let service: &'a Service = self.service;
        self.get_property(ty, prop)
            .and_then(|p| p.value.complex_name())
            .and_then(|name| service.type_by_name(name))
    }

    fn check(&mut self, ty: &'a TypeDef, path: &str, opt: CheckOpt) {
        if let Some(prop) = self.get_property(ty, path) {
            if opt.required && !prop.value.is_required() {
                let loc = prop.name.loc().or(prop.loc.as_deref());
                self.violation(format!("Property `{path}` must be required."), loc);
            } else if prop.value.is_array() && !opt.allow_array {
                let loc = prop
                    .value
                    .array_flag()
                    .and_then(|f| f.loc())
                    .or(prop.name.loc())
                    .or(prop.loc.as_deref());
                self.violation(format!("Property `{path}` must not be an array."), loc);
            } else {
                if prop.value.is_primitive(Primitive::String) {
                    return;
                }
                let is_numeric = prop.value.primitive().is_some_and(|p| p.is_numeric());
                if is_numeric && opt.allow_numeric {
                    return;
                }
                let is_enum = prop
                    .value
                    .complex_name()
                    .is_some_and(|name| self.service.enum_by_name(name).is_some());
                if is_enum && opt.allow_enums {
                    return;
                }

                let loc = prop
                    .value
                    .type_name_loc()
                    .or(prop.name.loc())
                    .or(prop.loc.as_deref());
                self.violation(
                    format!(
                        "Property `{path}` must be a string{}{}.",
                        if opt.allow_enums { " or enum" } else { "" },
                        if opt.allow_numeric {
                            " or numeric type"
                        } else {
                            ""
                        },
                    ),
                    loc,
                );
            }
        } else if opt.required {
            let loc = ty.name.loc().or(ty.loc.as_deref());
            self.violation(format!("Property `{path}` must be defined."), loc);
        }
    }

    fn check_error(&mut self, error: &'a TypeDef) {
        self.check(error, "id", CheckOpt::default());
        self.check(
            error,
            "status",
            CheckOpt {
                allow_numeric: self.lenient,
                ..CheckOpt::default()
            },
        );
        self.check(
            error,
            "code",
            CheckOpt {
                allow_enums: self.lenient,
                ..CheckOpt::default()
            },
        );
        self.check(error, "title", CheckOpt::default());
        self.check(error, "detail", CheckOpt::default());

        if let Some(links) = self.get_sub_type(error, "links") {
            self.check_links(links);
        }
        if let Some(source) = self.get_sub_type(error, "source") {
            self.check_source(source);
        }

        self.restrict(
            error,
            &[
                "id", "links", "status", "code", "title", "detail", "source", "meta",
            ],
        );
    }

    fn check_source(&mut self, source: &'a TypeDef) {
        self.check(source, "pointer", CheckOpt::default());
        self.check(source, "parameter", CheckOpt::default());
        self.check(source, "header", CheckOpt::default());

        self.restrict(source, &["pointer", "parameter", "header"]);
    }

    fn check_links(&mut self, links: &'a TypeDef) {
        let mut visited = Vec::new();
        let about = self.get_property(links, "about");
        self.check_link(about, &mut visited);
        let link_type = self.get_property(links, "type");
        self.check_link(link_type, &mut visited);

        self.restrict(links, &["about", "type"]);
    }

    /// A link is either a string or a link object with a required `href`.
    /// The visited list terminates self-referential `describedby` chains.
    fn check_link(&mut self, link: Option<&'a Property>, visited: &mut Vec<&'a str>) {
        let Some(link) = link else {
            return;
        };

        match &link.value {
            Value::Primitive(primitive) => {
                if primitive.type_name.value != Primitive::String {
                    let loc = primitive
                        .type_name
                        .loc()
                        .or(link.name.loc())
                        .or(link.loc.as_deref());
                    self.violation(
                        format!(
                            "Property `{}` must be a string or an object.",
                            link.name.value
                        ),
                        loc,
                    );
                }
            }
            Value::Complex(complex) => {
                let service: &'a Service = self.service;
                let Some(ty) = service.type_by_name(&complex.type_name.value) else {
                    return;
                };
                if visited.contains(&ty.name.value.as_str()) {
                    return;
                }
                visited.push(ty.name.value.as_str());

                self.check(
                    ty,
                    "href",
                    CheckOpt {
                        required: true,
                        ..CheckOpt::default()
                    },
                );
                self.check(ty, "rel", CheckOpt::default());
                self.check(ty, "title", CheckOpt::default());
                self.check(ty, "type", CheckOpt::default());
                self.check(
                    ty,
                    "hreflang",
                    CheckOpt {
                        allow_array: true,
                        ..CheckOpt::default()
                    },
                );

                let described_by = self.get_property(ty, "describedby");
                self.check_link(described_by, visited);

                self.restrict(
                    ty,
                    &[
                        "href",
                        "rel",
                        "describedby",
                        "title",
                        "type",
                        "hreflang",
                        "meta",
                    ],
                );
            }
        }
    }

    /// Flag every property outside the allowed set.
    fn restrict(&mut self, ty: &'a TypeDef, allowed: &[&str]) {
        let known: HashSet<String> = allowed.iter().map(|p| snake(p)).collect();

        for prop in &ty.properties {
            if known.contains(&snake(&prop.name.value)) {
                continue;
            }
            let list = allowed
                .iter()
                .map(|p| format!("`{p}`"))
                .collect::<Vec<_>>()
                .join(", ");
            let loc = prop.name.loc().or(prop.loc.as_deref());
            self.violation(
                format!(
                    "Property `{}` is not allowed. Allowed properties are {}. Define non-standard meta-information in `error.meta`.",
                    prop.name.value, list
                ),
                loc,
            );
        }
    }
}
