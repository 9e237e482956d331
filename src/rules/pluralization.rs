//! Singular/plural naming tied to array-ness.
//!
//! Array-valued parameters and properties must carry plural names;
//! everything else must be singular. Names ending in an uncountable suffix
//! (`...data` by default) pass both ways.

use crate::ir::Service;
use crate::rule::{
    combine, enum_rule, parameter_rule, property_rule, NameList, RuleOptions, Severity,
    SeverityOpt, Violation,
};
use crate::text::Inflection;
use serde::Deserialize;

const LINK: &str = "https://github.com/microscaler/svclint#pluralization";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PluralizationOptions {
    severity: SeverityOpt,
    /// Extra uncountable suffixes on top of the built-in `data`.
    uncountable: NameList,
}

fn inflection(opts: &PluralizationOptions) -> Inflection {
    if opts.uncountable.is_empty() {
        Inflection::default()
    } else {
        let suffixes = std::iter::once("data".to_string())
            .chain(opts.uncountable.iter().map(|s| s.to_lowercase()));
        Inflection::new(suffixes)
    }
}

pub fn enum_pluralization(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: PluralizationOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);
    let inflection = inflection(&opts);

    enum_rule(service, |ctx| {
        let name = &ctx.en.name;
        let singular = inflection.singular(&name.value);
        if name.value == singular {
            return None;
        }
        Some(
            Violation::new(
                "svclint/enum-pluralization",
                format!("Enum name should be singular: \"{singular}\""),
                severity,
            )
            .at(service, name.loc())
            .with_link(LINK),
        )
    })
}

pub fn parameter_pluralization(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: PluralizationOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);
    let inflection = inflection(&opts);

    parameter_rule(service, |ctx| {
        let name = &ctx.parameter.name;
        let method_name = &ctx.method.name.value;

        if ctx.parameter.value.is_array() {
            let plural = inflection.plural(&name.value);
            (name.value != plural).then(|| {
                Violation::new(
                    "svclint/parameter-pluralization",
                    format!(
                        "Parameter \"{}\" (method \"{}\") is an array and must be named \"{}\"",
                        name.value, method_name, plural
                    ),
                    severity,
                )
                .at(service, name.loc())
            })
        } else {
            let singular = inflection.singular(&name.value);
            (name.value != singular).then(|| {
                Violation::new(
                    "svclint/parameter-pluralization",
                    format!(
                        "Parameter \"{}\" (method \"{}\") is not an array and must be named \"{}\"",
                        name.value, method_name, singular
                    ),
                    severity,
                )
                .at(service, name.loc())
            })
        }
    })
}

pub fn property_pluralization(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: PluralizationOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);
    let inflection = inflection(&opts);

    property_rule(service, |ctx| {
        let name = &ctx.property.name;
        let type_name = &ctx.owner.name.value;

        if ctx.property.value.is_array() {
            let plural = inflection.plural(&name.value);
            (name.value != plural).then(|| {
                Violation::new(
                    "svclint/property-pluralization",
                    format!(
                        "Property \"{}\" (type \"{}\") is an array and must be named \"{}\"",
                        name.value, type_name, plural
                    ),
                    severity,
                )
                .at(service, name.loc())
            })
        } else {
            let singular = inflection.singular(&name.value);
            (name.value != singular).then(|| {
                Violation::new(
                    "svclint/property-pluralization",
                    format!(
                        "Property \"{}\" (type \"{}\") is not an array and must be named \"{}\"",
                        name.value, type_name, singular
                    ),
                    severity,
                )
                .at(service, name.loc())
            })
        }
    })
}

/// All pluralization checks combined.
pub fn pluralization(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    combine(
        service,
        options,
        &[
            enum_pluralization,
            parameter_pluralization,
            property_pluralization,
        ],
    )
}
