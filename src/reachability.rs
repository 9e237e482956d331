//! Input/output reachability over the type graph.
//!
//! Determines which types, unions, and enums are actually exposed through
//! the API surface: reachable from method parameters (the input direction)
//! or from method return values (the output direction). A declaration that
//! no method references is out of scope for structural rules built on top
//! of this module.
//!
//! The walk is bounded by one visited-set per direction, so it terminates
//! on cyclic graphs (a type containing a property of its own type, or
//! mutually-referential types). A name that resolves to nothing is
//! terminal; dangling references are another rule's concern.

use crate::ir::{EnumDef, Service, TypeDef, UnionDef, Value};
use http::Method;
use std::collections::HashMap;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Input,
    Output,
}

/// The set of declarations reachable through the method graph, split by
/// direction. Built once per rule invocation.
pub struct ServiceScope<'a> {
    input_types: HashMap<&'a str, &'a TypeDef>,
    output_types: HashMap<&'a str, &'a TypeDef>,
    input_unions: HashMap<&'a str, &'a UnionDef>,
    output_unions: HashMap<&'a str, &'a UnionDef>,
    input_enums: HashMap<&'a str, &'a EnumDef>,
    output_enums: HashMap<&'a str, &'a EnumDef>,
}

impl<'a> ServiceScope<'a> {
    /// Walk the service's method graph. Parameters of methods whose HTTP
    /// verb is in `allow_verbs` are skipped entirely; return values are
    /// always walked.
    pub fn build(service: &'a Service, allow_verbs: &[Method]) -> Self {
        let mut scope = ServiceScope {
            input_types: HashMap::new(),
            output_types: HashMap::new(),
            input_unions: HashMap::new(),
            output_unions: HashMap::new(),
            input_enums: HashMap::new(),
            output_enums: HashMap::new(),
        };

        for interface in &service.interfaces {
            for method in &interface.methods {
                let binding = interface.http_binding(&method.name.value);
                let skip_inputs = binding
                    .map(|b| allow_verbs.contains(&b.verb.value))
                    .unwrap_or(false);

                if !skip_inputs {
                    for parameter in &method.parameters {
                        if let Value::Complex(complex) = &parameter.value {
                            scope.walk(service, &complex.type_name.value, Direction::Input);
                        }
                    }
                }

                if let Some(returns) = &method.returns {
                    if let Value::Complex(complex) = &returns.value {
                        scope.walk(service, &complex.type_name.value, Direction::Output);
                    }
                }
            }
        }

        scope
    }

    fn visited(&self, direction: Direction, name: &str) -> bool {
        match direction {
            Direction::Input => {
                self.input_types.contains_key(name)
                    || self.input_unions.contains_key(name)
                    || self.input_enums.contains_key(name)
            }
            Direction::Output => {
                self.output_types.contains_key(name)
                    || self.output_unions.contains_key(name)
                    || self.output_enums.contains_key(name)
            }
        }
    }

    fn walk(&mut self, service: &'a Service, name: &str, direction: Direction) {
        if self.visited(direction, name) {
            return;
        }

        // Resolution priority: type, then union, then enum. A name is
        // never more than one of these within a valid service.
        if let Some((key, ty)) = service
            .types
            .iter()
            .find(|t| t.name.value == name)
            .map(|t| (t.name.value.as_str(), t))
        {
            match direction {
                Direction::Input => self.input_types.insert(key, ty),
                Direction::Output => self.output_types.insert(key, ty),
            };

            for property in &ty.properties {
                if let Value::Complex(complex) = &property.value {
                    self.walk(service, &complex.type_name.value, direction);
                }
            }

            if let Some(map) = &ty.map_properties {
                if let Value::Complex(complex) = &map.key.value {
                    self.walk(service, &complex.type_name.value, direction);
                }
                if let Value::Complex(complex) = &map.value.value {
                    self.walk(service, &complex.type_name.value, direction);
                }
            }
        } else if let Some((key, union)) = service
            .unions
            .iter()
            .find(|u| u.name.value == name)
            .map(|u| (u.name.value.as_str(), u))
        {
            match direction {
                Direction::Input => self.input_unions.insert(key, union),
                Direction::Output => self.output_unions.insert(key, union),
            };

            for member in &union.members {
                if let Value::Complex(complex) = member {
                    self.walk(service, &complex.type_name.value, direction);
                }
            }
        } else if let Some((key, en)) = service
            .enums
            .iter()
            .find(|e| e.name.value == name)
            .map(|e| (e.name.value.as_str(), e))
        {
            match direction {
                Direction::Input => self.input_enums.insert(key, en),
                Direction::Output => self.output_enums.insert(key, en),
            };
        }
        // Unresolvable name: terminal, no violation raised here.
    }

    /// All reachable types, deduplicated by name and sorted
    /// lexicographically; when a type is reachable in both directions the
    /// input-direction declaration is preferred.
    pub fn types(&self) -> Vec<&'a TypeDef> {
        merged(&self.input_types, &self.output_types)
    }

    pub fn input_types(&self) -> Vec<&'a TypeDef> {
        sorted(&self.input_types)
    }

    pub fn output_types(&self) -> Vec<&'a TypeDef> {
        sorted(&self.output_types)
    }

    pub fn unions(&self) -> Vec<&'a UnionDef> {
        merged(&self.input_unions, &self.output_unions)
    }

    pub fn input_unions(&self) -> Vec<&'a UnionDef> {
        sorted(&self.input_unions)
    }

    pub fn output_unions(&self) -> Vec<&'a UnionDef> {
        sorted(&self.output_unions)
    }

    pub fn enums(&self) -> Vec<&'a EnumDef> {
        merged(&self.input_enums, &self.output_enums)
    }

    pub fn input_enums(&self) -> Vec<&'a EnumDef> {
        sorted(&self.input_enums)
    }

    pub fn output_enums(&self) -> Vec<&'a EnumDef> {
        sorted(&self.output_enums)
    }
}

fn sorted<'a, T: ?Sized>(map: &HashMap<&'a str, &'a T>) -> Vec<&'a T> {
    let mut entries: Vec<(&str, &T)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    entries.sort_unstable_by_key(|(name, _)| *name);
    entries.into_iter().map(|(_, value)| value).collect()
}

fn merged<'a, T: ?Sized>(
    input: &HashMap<&'a str, &'a T>,
    output: &HashMap<&'a str, &'a T>,
) -> Vec<&'a T> {
    let mut names: Vec<&str> = input.keys().chain(output.keys()).copied().collect();
    names.sort_unstable();
    names.dedup();
    names
        .into_iter()
        .filter_map(|name| input.get(name).or_else(|| output.get(name)).copied())
        .collect()
}
