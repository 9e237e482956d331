//! # svclint
//!
//! **svclint** is a contract linter for parsed API service descriptions.
//! It consumes an immutable intermediate representation of a service
//! (interfaces, methods, parameters, types, properties, enums, unions, and
//! HTTP bindings) and evaluates a set of independent rules against it,
//! producing an ordered list of violations.
//!
//! ## Architecture
//!
//! The library is organized into a small core plus the rule set:
//!
//! - **[`ir`]** - The canonical service IR and the load boundary that
//!   adapts legacy document shapes onto it
//! - **[`location`]** - Decoding of opaque source-location tokens into
//!   ranges and source-document indices
//! - **[`iter`]** - Declaration-ordered iteration over every entity kind,
//!   paired with its enclosing context
//! - **[`rule`]** - The rule contract: violations, severities, typed
//!   option parsing, the combinator, and per-entity-kind rule factories
//! - **[`reachability`]** - Input/output reachability over the type graph,
//!   with per-direction cycle detection
//! - **[`rules`]** - The rule bodies and the name registry the CLI
//!   dispatches through
//! - **[`text`]** - Casing and pluralization utilities for the naming
//!   rules
//!
//! ## Design constraints
//!
//! Rules are pure: they never mutate the IR, never fail, and allocate a
//! fresh violation list per invocation. An unresolvable type reference is
//! "not applicable" for the rule performing the lookup, never an error.
//! Violation order follows IR declaration order, which keeps output
//! deterministic and reproducible.
//!
//! ## Quick Start
//!
//! ```no_run
//! use svclint::ir::load_service;
//! use svclint::rule::RuleOptions;
//! use svclint::rules;
//!
//! # fn main() -> anyhow::Result<()> {
//! let service = load_service(std::path::Path::new("service.api.json"))?;
//! let rule = rules::by_name("casing").expect("registered rule");
//! let options = RuleOptions::from_json(r#"{"type": "pascal"}"#)?;
//!
//! for violation in rule(&service, &options) {
//!     eprintln!("[{}] {}: {}", violation.severity, violation.source_path, violation.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod ir;
pub mod iter;
pub mod location;
pub mod reachability;
pub mod rule;
pub mod rules;
pub mod text;

pub use ir::{load_service, Service};
pub use rule::{Rule, RuleOptions, Severity, Violation};
