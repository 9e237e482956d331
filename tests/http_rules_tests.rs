//! Integration tests for the HTTP status-code and body rules.

mod common;

use common::*;
use http::Method;
use svclint::ir::{HttpParameterLocation, Primitive};
use svclint::rule::RuleOptions;
use svclint::rules::{
    http_get_status, http_no_content_status, http_post_status, http_status, no_disallowed_body,
    no_http_get_body,
};

fn bound_service(verb: Method, success_code: u16, with_return: bool) -> svclint::ir::Service {
    let mut m = method("someMethod");
    if with_return {
        m.returns = returns(complex_value("widget"));
    }

    let mut iface = interface("widgets", vec![m]);
    iface.routes = vec![http_route(
        "/widgets",
        vec![http_binding("someMethod", verb, success_code)],
    )];

    let mut svc = service();
    svc.interfaces = vec![iface];
    svc.types = vec![type_def("widget", vec![])];
    svc
}

#[test]
fn unbound_methods_are_not_checked() {
    let mut m = method("someMethod");
    m.returns = returns(complex_value("widget"));
    let mut svc = service();
    svc.interfaces = vec![interface("widgets", vec![m])];
    svc.types = vec![type_def("widget", vec![])];

    assert!(http_status(&svc, &RuleOptions::default()).is_empty());
}

#[test]
fn get_status_outside_the_allow_list_is_flagged() {
    let svc = bound_service(Method::GET, 201, true);
    let violations = http_get_status(&svc, &RuleOptions::default());
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].code, "svclint/http-get-status");
    assert!(violations[0].message.contains("200, 204, 206"));
}

#[test]
fn get_status_within_the_allow_list_passes() {
    let svc = bound_service(Method::GET, 200, true);
    assert!(http_get_status(&svc, &RuleOptions::default()).is_empty());
}

#[test]
fn post_status_allows_created() {
    let svc = bound_service(Method::POST, 201, true);
    assert!(http_post_status(&svc, &RuleOptions::default()).is_empty());

    let svc = bound_service(Method::POST, 206, true);
    assert_eq!(http_post_status(&svc, &RuleOptions::default()).len(), 1);
}

#[test]
fn methods_without_return_must_answer_no_content() {
    let svc = bound_service(Method::DELETE, 200, false);
    let violations = http_no_content_status(&svc, &RuleOptions::default());
    assert_eq!(violations.len(), 1);
    assert!(violations[0].message.contains("must return an HTTP status code of 204"));

    let svc = bound_service(Method::DELETE, 204, false);
    assert!(http_no_content_status(&svc, &RuleOptions::default()).is_empty());
}

#[test]
fn methods_with_return_must_not_answer_no_content() {
    let svc = bound_service(Method::GET, 204, true);
    let violations = http_no_content_status(&svc, &RuleOptions::default());
    assert_eq!(violations.len(), 1);
    assert!(violations[0].message.contains("must not return an HTTP status code of 204"));
}

#[test]
fn combined_status_rule_concatenates_in_sub_rule_order() {
    // A GET answering 418 with no return value violates both the GET
    // status rule and the no-content rule.
    let svc = bound_service(Method::GET, 418, false);
    let violations = http_status(&svc, &RuleOptions::default());
    let codes: Vec<&str> = violations.iter().map(|v| v.code.as_str()).collect();
    assert_eq!(
        codes,
        vec!["svclint/http-get-status", "svclint/http-no-content-status"]
    );
}

fn body_service(verb: Method) -> svclint::ir::Service {
    let mut m = method("someMethod");
    m.parameters = vec![parameter("body", complex_value("widget"))];

    let mut binding = http_binding("someMethod", verb, 200);
    binding.parameters = vec![http_parameter("body", HttpParameterLocation::Body)];

    let mut iface = interface("widgets", vec![m]);
    iface.routes = vec![http_route("/widgets", vec![binding])];

    let mut svc = service();
    svc.interfaces = vec![iface];
    svc.types = vec![type_def("widget", vec![])];
    svc
}

#[test]
fn get_methods_must_not_define_body_parameters() {
    let svc = body_service(Method::GET);
    let violations = no_http_get_body(&svc, &RuleOptions::default());
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].code, "svclint/no-http-get-body");
    assert!(violations[0].message.contains("someMethod"));
}

#[test]
fn post_methods_may_define_body_parameters() {
    let svc = body_service(Method::POST);
    assert!(no_disallowed_body(&svc, &RuleOptions::default()).is_empty());
}

#[test]
fn non_body_parameters_on_get_pass() {
    let mut m = method("someMethod");
    m.parameters = vec![parameter("id", primitive_value(Primitive::String))];

    let mut binding = http_binding("someMethod", Method::GET, 200);
    binding.parameters = vec![http_parameter("id", HttpParameterLocation::Query)];

    let mut iface = interface("widgets", vec![m]);
    iface.routes = vec![http_route("/widgets", vec![binding])];
    let mut svc = service();
    svc.interfaces = vec![iface];

    assert!(no_disallowed_body(&svc, &RuleOptions::default()).is_empty());
}

#[test]
fn combined_body_rule_flags_every_bodyless_verb() {
    for verb in [
        Method::DELETE,
        Method::GET,
        Method::HEAD,
        Method::OPTIONS,
        Method::TRACE,
    ] {
        let svc = body_service(verb.clone());
        let violations = no_disallowed_body(&svc, &RuleOptions::default());
        assert_eq!(violations.len(), 1, "verb {verb}");
    }
}
