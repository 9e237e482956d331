//! The rule set: ~40 independent contract checks over the service IR.
//!
//! Each rule is a pure function registered under a stable kebab-case name;
//! `by_name` is the single dispatch point used by the CLI. Composite rules
//! (`description`, `http-status`, ...) concatenate their members via
//! [`crate::rule::combine`].

use crate::ir::{HttpBinding, ReturnValue, Service};
use crate::rule::{NameList, Rule};
use crate::text::snake;
use once_cell::sync::Lazy;
use std::collections::HashSet;

mod casing;
mod descriptions;
mod envelope;
mod http_body;
mod http_status;
mod json_api_error;
mod no_null_properties;
mod object_body;
mod pagination;
mod pluralization;
mod structure;

pub use casing::casing;
pub use descriptions::{
    description, method_description, parameter_description, property_description,
    type_description,
};
pub use envelope::response_envelope;
pub use http_body::{
    no_disallowed_body, no_http_delete_body, no_http_get_body, no_http_head_body,
    no_http_options_body, no_http_trace_body,
};
pub use http_status::{
    http_delete_status, http_get_status, http_no_content_status, http_patch_status,
    http_post_status, http_put_status, http_status,
};
pub use json_api_error::json_api_error;
pub use no_null_properties::no_null_properties;
pub use object_body::{object_body, object_request_body, object_response_body};
pub use pagination::{offset_pagination, relay_pagination};
pub use pluralization::{
    enum_pluralization, parameter_pluralization, pluralization, property_pluralization,
};
pub use structure::{
    array_parameter_length, no_free_form_objects, no_mixed_properties, string_id, string_map_key,
};

const REGISTRY: &[(&str, Rule)] = &[
    ("array-parameter-length", array_parameter_length),
    ("casing", casing),
    ("description", description),
    ("enum-pluralization", enum_pluralization),
    ("http-delete-status", http_delete_status),
    ("http-get-status", http_get_status),
    ("http-no-content-status", http_no_content_status),
    ("http-patch-status", http_patch_status),
    ("http-post-status", http_post_status),
    ("http-put-status", http_put_status),
    ("http-status", http_status),
    ("json-api-error", json_api_error),
    ("method-description", method_description),
    ("no-disallowed-body", no_disallowed_body),
    ("no-free-form-objects", no_free_form_objects),
    ("no-http-delete-body", no_http_delete_body),
    ("no-http-get-body", no_http_get_body),
    ("no-http-head-body", no_http_head_body),
    ("no-http-options-body", no_http_options_body),
    ("no-http-trace-body", no_http_trace_body),
    ("no-mixed-properties", no_mixed_properties),
    ("no-null-properties", no_null_properties),
    ("object-body", object_body),
    ("object-request-body", object_request_body),
    ("object-response-body", object_response_body),
    ("offset-pagination", offset_pagination),
    ("parameter-description", parameter_description),
    ("parameter-pluralization", parameter_pluralization),
    ("pluralization", pluralization),
    ("property-description", property_description),
    ("property-pluralization", property_pluralization),
    ("relay-pagination", relay_pagination),
    ("response-envelope", response_envelope),
    ("string-id", string_id),
    ("string-map-key", string_map_key),
    ("type-description", type_description),
];

/// Look up a rule by its registered name.
pub fn by_name(name: &str) -> Option<Rule> {
    REGISTRY
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, rule)| *rule)
}

/// All registered rule names, in registry (alphabetical) order.
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(name, _)| *name)
}

static DEFAULT_PAYLOAD_PROPS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["value", "values", "data"]));

/// The snake-cased set of allowed payload property names, from the
/// `payload` option or the default set.
pub(crate) fn payload_names(payload: &NameList) -> HashSet<String> {
    if payload.is_empty() {
        DEFAULT_PAYLOAD_PROPS.iter().map(|p| snake(p)).collect()
    } else {
        payload.iter().map(|p| snake(p)).collect()
    }
}

/// The allowed payload names for display in messages, in configured order.
pub(crate) fn payload_display(payload: &NameList) -> Vec<String> {
    if payload.is_empty() {
        vec!["value".to_string(), "values".to_string(), "data".to_string()]
    } else {
        payload.iter().cloned().collect()
    }
}

/// Whether a method's payload is an array. When the return type resolves to
/// an envelope (an `errors` array plus a payload property), array-ness is
/// judged on the payload property; otherwise on the return value itself.
pub(crate) fn is_array_payload(
    service: &Service,
    payload: &NameList,
    returns: Option<&ReturnValue>,
) -> bool {
    let Some(returns) = returns else {
        return false;
    };

    let ty = returns
        .value
        .complex_name()
        .and_then(|name| service.type_by_name(name));
    let Some(ty) = ty else {
        return returns.value.is_array();
    };

    let has_errors_array = ty
        .properties
        .iter()
        .any(|p| snake(&p.name.value) == "errors" && p.value.is_array());
    if !has_errors_array {
        return returns.value.is_array();
    }

    let allowed = payload_names(payload);
    let Some(payload_prop) = ty
        .properties
        .iter()
        .find(|p| allowed.contains(&snake(&p.name.value)))
    else {
        return returns.value.is_array();
    };

    payload_prop.value.is_array()
}

/// Whether a method passes the `verb`/`verbs` option filter. Methods with
/// no HTTP binding always pass; verbs match case-insensitively.
pub(crate) fn verb_filter_allows(http: Option<&HttpBinding>, verbs: &NameList) -> bool {
    let Some(binding) = http else {
        return true;
    };
    verbs.contains_ignore_case(binding.verb.as_str())
}

/// Whether a method passes the `allow`/`deny` name-list filters.
pub(crate) fn method_selected(name: &str, allow: &NameList, deny: &NameList) -> bool {
    if !allow.is_empty() && !allow.iter().any(|n| n == name) {
        return false;
    }
    !deny.iter().any(|n| n == name)
}
