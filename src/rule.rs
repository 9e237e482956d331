//! The rule contract: violations, severities, options, and the combinators
//! that lift per-entity checks into whole-service rules.
//!
//! A rule is a pure function from `(service, options)` to a violation list.
//! Rules never fail: an inapplicable condition or an unresolvable reference
//! yields no violation for that entity, and invalid option values fall back
//! to defaults.

use crate::ir::Service;
use crate::iter::{
    all_enums, all_methods, all_parameters, all_properties, all_types, EnumContext, MethodContext,
    ParameterContext, PropertyContext, TypeContext,
};
use crate::location::{decode, Range};
use serde::{Deserialize, Deserializer, Serialize};

/// Severity of a reported violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn parse(input: &str) -> Option<Severity> {
        match input {
            "info" => Some(Severity::Info),
            "warning" => Some(Severity::Warning),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// A lenient severity option: any value outside the closed set decodes to
/// `None` and the rule's default applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeverityOpt(pub Option<Severity>);

impl SeverityOpt {
    pub fn unwrap_or(self, fallback: Severity) -> Severity {
        self.0.unwrap_or(fallback)
    }
}

impl<'de> Deserialize<'de> for SeverityOpt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(SeverityOpt(value.as_str().and_then(Severity::parse)))
    }
}

/// A lenient name-list option accepting a single string or an array.
/// Non-string entries are stringified; anything else decodes empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameList(pub Vec<String>);

impl NameList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn contains_ignore_case(&self, name: &str) -> bool {
        self.0.iter().any(|n| n.eq_ignore_ascii_case(name))
    }
}

impl From<Vec<String>> for NameList {
    fn from(names: Vec<String>) -> Self {
        NameList(names)
    }
}

impl<'de> Deserialize<'de> for NameList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let names = match value {
            serde_json::Value::String(s) => vec![s],
            serde_json::Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(s) => Some(s),
                    serde_json::Value::Number(n) => Some(n.to_string()),
                    serde_json::Value::Bool(b) => Some(b.to_string()),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };
        Ok(NameList(names))
    }
}

/// The loosely-typed configuration bag a rule is invoked with. Each rule
/// parses it once, at its boundary, into a typed options struct; unknown
/// keys are ignored and malformed values fall back to the struct default.
#[derive(Debug, Clone, Default)]
pub struct RuleOptions(serde_json::Value);

impl RuleOptions {
    pub fn new(value: serde_json::Value) -> Self {
        RuleOptions(value)
    }

    pub fn from_json(input: &str) -> anyhow::Result<Self> {
        Ok(RuleOptions(serde_json::from_str(input)?))
    }

    pub fn parse<T>(&self) -> T
    where
        T: serde::de::DeserializeOwned + Default,
    {
        if self.0.is_null() {
            return T::default();
        }
        serde_json::from_value(self.0.clone()).unwrap_or_default()
    }
}

/// One reported contract failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub code: String,
    pub message: String,
    pub range: Range,
    pub severity: Severity,
    pub source_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Violation {
    pub fn new(code: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Violation {
            code: code.into(),
            message: message.into(),
            range: Range::default(),
            severity,
            source_path: String::new(),
            link: None,
        }
    }

    /// Anchor the violation at a location token, resolving the owning
    /// source document through the service.
    pub fn at(mut self, service: &Service, loc: Option<&str>) -> Self {
        let decoded = decode(loc);
        self.range = decoded.range;
        self.source_path = service.source_path_for(decoded.source_index);
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// A whole-service rule.
pub type Rule = fn(&Service, &RuleOptions) -> Vec<Violation>;

/// Run each rule against the same arguments and concatenate the violation
/// lists in sub-rule order.
pub fn combine(service: &Service, options: &RuleOptions, rules: &[Rule]) -> Vec<Violation> {
    rules
        .iter()
        .flat_map(|rule| rule(service, options))
        .collect()
}

/// Lift a per-method check into a whole-service rule.
pub fn method_rule<'a, F>(service: &'a Service, mut check: F) -> Vec<Violation>
where
    F: FnMut(&MethodContext<'a>) -> Option<Violation>,
{
    all_methods(service).filter_map(|ctx| check(&ctx)).collect()
}

/// Lift a per-parameter check into a whole-service rule.
pub fn parameter_rule<'a, F>(service: &'a Service, mut check: F) -> Vec<Violation>
where
    F: FnMut(&ParameterContext<'a>) -> Option<Violation>,
{
    all_parameters(service)
        .filter_map(|ctx| check(&ctx))
        .collect()
}

/// Lift a per-property check into a whole-service rule.
pub fn property_rule<'a, F>(service: &'a Service, mut check: F) -> Vec<Violation>
where
    F: FnMut(&PropertyContext<'a>) -> Option<Violation>,
{
    all_properties(service)
        .filter_map(|ctx| check(&ctx))
        .collect()
}

/// Lift a per-type check into a whole-service rule.
pub fn type_rule<'a, F>(service: &'a Service, mut check: F) -> Vec<Violation>
where
    F: FnMut(&TypeContext<'a>) -> Option<Violation>,
{
    all_types(service).filter_map(|ctx| check(&ctx)).collect()
}

/// Lift a per-enum check into a whole-service rule.
pub fn enum_rule<'a, F>(service: &'a Service, mut check: F) -> Vec<Violation>
where
    F: FnMut(&EnumContext<'a>) -> Option<Violation>,
{
    all_enums(service).filter_map(|ctx| check(&ctx)).collect()
}
