//! Flat, lazy iteration over every entity kind in a service, paired with
//! the enclosing context a rule needs to build a message and locate a
//! violation.
//!
//! Iteration preserves declaration order exactly as given by the IR
//! (interfaces in order, methods in order within each interface, and so
//! on), which is what makes violation ordering deterministic. Each entity
//! is yielded once regardless of how many methods reference its type.

use crate::ir::{
    EnumDef, EnumMember, HttpBinding, HttpParameterBinding, HttpRoute, Interface, MethodDef,
    Parameter, Property, Service, TypeDef,
};

pub struct MethodContext<'a> {
    pub interface: &'a Interface,
    pub method: &'a MethodDef,
    /// The HTTP binding whose name matches the method, when the method is
    /// HTTP-bound.
    pub http: Option<&'a HttpBinding>,
}

pub struct ParameterContext<'a> {
    pub interface: &'a Interface,
    pub method: &'a MethodDef,
    pub parameter: &'a Parameter,
    pub http: Option<&'a HttpBinding>,
    /// The wire binding for this parameter, when present.
    pub http_parameter: Option<&'a HttpParameterBinding>,
}

pub struct PropertyContext<'a> {
    pub owner: &'a TypeDef,
    pub property: &'a Property,
}

pub struct TypeContext<'a> {
    pub ty: &'a TypeDef,
}

pub struct EnumContext<'a> {
    pub en: &'a EnumDef,
}

pub struct EnumMemberContext<'a> {
    pub en: &'a EnumDef,
    pub member: &'a EnumMember,
}

pub struct HttpRouteContext<'a> {
    pub interface: &'a Interface,
    pub route: &'a HttpRoute,
}

/// Every method of every interface, in declaration order.
pub fn all_methods(service: &Service) -> impl Iterator<Item = MethodContext<'_>> {
    service.interfaces.iter().flat_map(|interface| {
        interface.methods.iter().map(move |method| MethodContext {
            interface,
            method,
            http: interface.http_binding(&method.name.value),
        })
    })
}

/// Every parameter of every method, in declaration order.
pub fn all_parameters(service: &Service) -> impl Iterator<Item = ParameterContext<'_>> {
    all_methods(service).flat_map(|ctx| {
        let MethodContext {
            interface,
            method,
            http,
        } = ctx;
        method.parameters.iter().map(move |parameter| {
            let http_parameter = http.and_then(|binding| {
                binding
                    .parameters
                    .iter()
                    .find(|p| p.name.value == parameter.name.value)
            });
            ParameterContext {
                interface,
                method,
                parameter,
                http,
                http_parameter,
            }
        })
    })
}

/// Every declared property of every type, in declaration order.
pub fn all_properties(service: &Service) -> impl Iterator<Item = PropertyContext<'_>> {
    service.types.iter().flat_map(|owner| {
        owner
            .properties
            .iter()
            .map(move |property| PropertyContext { owner, property })
    })
}

/// Every declared type, in declaration order.
pub fn all_types(service: &Service) -> impl Iterator<Item = TypeContext<'_>> {
    service.types.iter().map(|ty| TypeContext { ty })
}

/// Every declared enum, in declaration order.
pub fn all_enums(service: &Service) -> impl Iterator<Item = EnumContext<'_>> {
    service.enums.iter().map(|en| EnumContext { en })
}

/// Every member of every enum, in declaration order.
pub fn all_enum_members(service: &Service) -> impl Iterator<Item = EnumMemberContext<'_>> {
    service.enums.iter().flat_map(|en| {
        en.members
            .iter()
            .map(move |member| EnumMemberContext { en, member })
    })
}

/// Every HTTP route of every interface, in declaration order.
pub fn all_http_routes(service: &Service) -> impl Iterator<Item = HttpRouteContext<'_>> {
    service.interfaces.iter().flat_map(|interface| {
        interface
            .routes
            .iter()
            .map(move |route| HttpRouteContext { interface, route })
    })
}
