//! The canonical service IR consumed by every rule.
//!
//! The IR is produced by an upstream parser and is immutable for the
//! duration of a rule evaluation; rules never mutate it. All name lookups
//! (`type_by_name` and friends) return `Option`; a reference to an
//! undeclared name is "no match", never an error.

use http::Method;
use serde::{Deserialize, Deserializer};

/// A value paired with its optional source-location token.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Spanned<T> {
    pub value: T,
    #[serde(default)]
    pub loc: Option<String>,
}

impl<T> Spanned<T> {
    pub fn new(value: T) -> Self {
        Spanned { value, loc: None }
    }

    pub fn with_loc(value: T, loc: impl Into<String>) -> Self {
        Spanned {
            value,
            loc: Some(loc.into()),
        }
    }

    pub fn loc(&self) -> Option<&str> {
        self.loc.as_deref()
    }
}

/// Primitive type names understood by the IR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    String,
    Number,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    Date,
    #[serde(rename = "date-time")]
    DateTime,
    Binary,
    Null,
    Untyped,
}

impl Primitive {
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Integer => "integer",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::Boolean => "boolean",
            Primitive::Date => "date",
            Primitive::DateTime => "date-time",
            Primitive::Binary => "binary",
            Primitive::Null => "null",
            Primitive::Untyped => "untyped",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Primitive::Number
                | Primitive::Integer
                | Primitive::Long
                | Primitive::Float
                | Primitive::Double
        )
    }
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validation rule attached to a value descriptor, e.g. `array-max-items`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
    pub id: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    #[serde(default)]
    pub loc: Option<String>,
}

/// A primitive-typed value descriptor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimitiveValue {
    pub type_name: Spanned<Primitive>,
    #[serde(default)]
    pub is_array: Option<Spanned<bool>>,
    #[serde(default)]
    pub is_required: Option<Spanned<bool>>,
    #[serde(default)]
    pub is_nullable: Option<Spanned<bool>>,
    #[serde(default)]
    pub rules: Vec<ValidationRule>,
}

/// A value descriptor referencing a declared type, enum, or union by name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexValue {
    pub type_name: Spanned<String>,
    #[serde(default)]
    pub is_array: Option<Spanned<bool>>,
    #[serde(default)]
    pub is_required: Option<Spanned<bool>>,
    #[serde(default)]
    pub is_nullable: Option<Spanned<bool>>,
    #[serde(default)]
    pub rules: Vec<ValidationRule>,
}

/// A value descriptor is exactly one of primitive or complex; array,
/// required, and nullable are orthogonal flags on either variant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind")]
pub enum Value {
    #[serde(rename = "PrimitiveValue")]
    Primitive(PrimitiveValue),
    #[serde(rename = "ComplexValue")]
    Complex(ComplexValue),
}

impl Value {
    pub fn is_array(&self) -> bool {
        self.array_flag().map(|f| f.value).unwrap_or(false)
    }

    pub fn array_flag(&self) -> Option<&Spanned<bool>> {
        match self {
            Value::Primitive(v) => v.is_array.as_ref(),
            Value::Complex(v) => v.is_array.as_ref(),
        }
    }

    pub fn is_required(&self) -> bool {
        let flag = match self {
            Value::Primitive(v) => v.is_required.as_ref(),
            Value::Complex(v) => v.is_required.as_ref(),
        };
        flag.map(|f| f.value).unwrap_or(false)
    }

    pub fn nullable_flag(&self) -> Option<&Spanned<bool>> {
        let flag = match self {
            Value::Primitive(v) => v.is_nullable.as_ref(),
            Value::Complex(v) => v.is_nullable.as_ref(),
        };
        flag.filter(|f| f.value)
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable_flag().is_some()
    }

    /// The primitive type name, if this is a primitive value.
    pub fn primitive(&self) -> Option<Primitive> {
        match self {
            Value::Primitive(v) => Some(v.type_name.value),
            Value::Complex(_) => None,
        }
    }

    pub fn is_primitive(&self, primitive: Primitive) -> bool {
        self.primitive() == Some(primitive)
    }

    /// The referenced declaration name, if this is a complex value.
    pub fn complex_name(&self) -> Option<&str> {
        match self {
            Value::Primitive(_) => None,
            Value::Complex(v) => Some(v.type_name.value.as_str()),
        }
    }

    /// Location of the type-name token, regardless of variant.
    pub fn type_name_loc(&self) -> Option<&str> {
        match self {
            Value::Primitive(v) => v.type_name.loc(),
            Value::Complex(v) => v.type_name.loc(),
        }
    }

    pub fn rules(&self) -> &[ValidationRule] {
        match self {
            Value::Primitive(v) => &v.rules,
            Value::Complex(v) => &v.rules,
        }
    }
}

/// Where an HTTP-bound parameter travels on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HttpParameterLocation {
    Path,
    Query,
    Header,
    Body,
    FormData,
    Cookie,
}

impl std::fmt::Display for HttpParameterLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HttpParameterLocation::Path => "path",
            HttpParameterLocation::Query => "query",
            HttpParameterLocation::Header => "header",
            HttpParameterLocation::Body => "body",
            HttpParameterLocation::FormData => "formData",
            HttpParameterLocation::Cookie => "cookie",
        };
        write!(f, "{}", s)
    }
}

/// An HTTP verb, canonicalized case-insensitively at the load boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Verb {
    pub value: Method,
    pub loc: Option<String>,
}

impl Verb {
    pub fn new(method: Method) -> Self {
        Verb {
            value: method,
            loc: None,
        }
    }

    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }
}

impl<'de> Deserialize<'de> for Verb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            value: String,
            #[serde(default)]
            loc: Option<String>,
        }
        let raw = Raw::deserialize(deserializer)?;
        let method = Method::from_bytes(raw.value.to_ascii_uppercase().as_bytes())
            .map_err(|_| serde::de::Error::custom(format!("invalid HTTP verb: {}", raw.value)))?;
        Ok(Verb {
            value: method,
            loc: raw.loc,
        })
    }
}

/// The HTTP binding of a single parameter within a method binding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpParameterBinding {
    pub name: Spanned<String>,
    pub location: Spanned<HttpParameterLocation>,
    #[serde(default)]
    pub loc: Option<String>,
}

/// The HTTP binding of a single method: verb, success status code, and
/// per-parameter wire locations. `name` is the join key to the method.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpBinding {
    pub name: Spanned<String>,
    pub verb: Verb,
    pub success_code: Spanned<u16>,
    #[serde(default)]
    pub parameters: Vec<HttpParameterBinding>,
    #[serde(default)]
    pub loc: Option<String>,
}

/// One HTTP route: a path pattern and the method bindings served under it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpRoute {
    pub pattern: Spanned<String>,
    #[serde(default)]
    pub bindings: Vec<HttpBinding>,
    #[serde(default)]
    pub loc: Option<String>,
}

/// The value a method returns.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnValue {
    pub value: Value,
    #[serde(default)]
    pub loc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: Spanned<String>,
    #[serde(default)]
    pub description: Option<Spanned<String>>,
    pub value: Value,
    #[serde(default)]
    pub loc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDef {
    pub name: Spanned<String>,
    #[serde(default)]
    pub description: Option<Spanned<String>>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    // `returnType` is the legacy field name; accepted at the load boundary only.
    #[serde(default, alias = "returnType")]
    pub returns: Option<ReturnValue>,
    #[serde(default)]
    pub loc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interface {
    pub name: Spanned<String>,
    #[serde(default)]
    pub methods: Vec<MethodDef>,
    #[serde(default)]
    pub routes: Vec<HttpRoute>,
    #[serde(default)]
    pub loc: Option<String>,
}

impl Interface {
    /// The HTTP binding for a method of this interface, searched across the
    /// interface's routes in declaration order.
    pub fn http_binding(&self, method_name: &str) -> Option<&HttpBinding> {
        self.routes
            .iter()
            .flat_map(|route| route.bindings.iter())
            .find(|binding| binding.name.value == method_name)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: Spanned<String>,
    #[serde(default)]
    pub description: Option<Spanned<String>>,
    pub value: Value,
    #[serde(default)]
    pub loc: Option<String>,
}

/// One side of a map declaration (key or value).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMember {
    pub value: Value,
    #[serde(default)]
    pub loc: Option<String>,
}

/// Map semantics for a type: an open-ended key/value structure in place of
/// declared properties.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapProperties {
    pub key: MapMember,
    pub value: MapMember,
    #[serde(default)]
    pub required_keys: Vec<Spanned<String>>,
    #[serde(default)]
    pub loc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDef {
    pub name: Spanned<String>,
    #[serde(default)]
    pub description: Option<Spanned<String>>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub map_properties: Option<MapProperties>,
    #[serde(default)]
    pub rules: Vec<ValidationRule>,
    #[serde(default)]
    pub loc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumMember {
    pub content: Spanned<String>,
    #[serde(default)]
    pub loc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDef {
    pub name: Spanned<String>,
    #[serde(default)]
    pub description: Option<Spanned<String>>,
    #[serde(default)]
    pub members: Vec<EnumMember>,
    #[serde(default)]
    pub loc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionDef {
    pub name: Spanned<String>,
    #[serde(default)]
    pub members: Vec<Value>,
    #[serde(default)]
    pub loc: Option<String>,
}

/// The root of the IR: a parsed service description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default)]
    pub title: Option<Spanned<String>>,
    #[serde(default)]
    pub source_paths: Vec<String>,
    #[serde(default)]
    pub interfaces: Vec<Interface>,
    #[serde(default)]
    pub types: Vec<TypeDef>,
    #[serde(default)]
    pub enums: Vec<EnumDef>,
    #[serde(default)]
    pub unions: Vec<UnionDef>,
    #[serde(default)]
    pub loc: Option<String>,
}

impl Service {
    pub fn type_by_name(&self, name: &str) -> Option<&TypeDef> {
        self.types.iter().find(|t| t.name.value == name)
    }

    pub fn enum_by_name(&self, name: &str) -> Option<&EnumDef> {
        self.enums.iter().find(|e| e.name.value == name)
    }

    pub fn union_by_name(&self, name: &str) -> Option<&UnionDef> {
        self.unions.iter().find(|u| u.name.value == name)
    }

    /// The source document for a decoded location index. Out-of-range
    /// indices clamp to the first document (single-document mode).
    pub fn source_path_for(&self, index: usize) -> String {
        self.source_paths
            .get(index)
            .or_else(|| self.source_paths.first())
            .cloned()
            .unwrap_or_default()
    }
}
