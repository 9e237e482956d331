//! Response envelopes: an `errors` array plus a designated payload
//! property.

use super::{payload_display, payload_names};
use crate::ir::Service;
use crate::rule::{method_rule, NameList, RuleOptions, Severity, SeverityOpt, Violation};
use crate::text::snake;
use serde::Deserialize;

const LINK: &str = "https://github.com/microscaler/svclint#response-envelopes";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct EnvelopeOptions {
    severity: SeverityOpt,
    payload: NameList,
}

/// Every returning method must return an envelope type: a type with an
/// `errors` array property and a payload property from the allowed set.
pub fn response_envelope(service: &Service, options: &RuleOptions) -> Vec<Violation> {
    let opts: EnvelopeOptions = options.parse();
    let severity = opts.severity.unwrap_or(Severity::Error);
    let allowed = payload_names(&opts.payload);

    method_rule(service, |ctx| {
        let returns = ctx.method.returns.as_ref()?;
        let ty = returns
            .value
            .complex_name()
            .and_then(|name| service.type_by_name(name));

        let errors = ty.and_then(|t| {
            t.properties
                .iter()
                .find(|p| snake(&p.name.value) == "errors")
        });
        let payload = ty.and_then(|t| {
            t.properties
                .iter()
                .find(|p| allowed.contains(&snake(&p.name.value)))
        });

        if errors.is_some_and(|p| p.value.is_array()) && payload.is_some() {
            return None;
        }

        Some(
            Violation::new(
                "svclint/response-envelope",
                format!(
                    "Method \"{}\" must return an envelope with at least an errors array and payload property with one of the following names: {}.",
                    ctx.method.name.value,
                    payload_display(&opts.payload).join(", ")
                ),
                severity,
            )
            .at(service, returns.loc.as_deref())
            .with_link(LINK),
        )
    })
}
