//! Conformance engine for ercheck rule tables.
//!
//! Checks a contract model against a ruleset and produces a structured
//! report:
//! - [`matcher`] — exact signature matching for functions and events
//! - [`getters`] — field-or-function getter resolution
//! - [`emission`] — transitive event-emission tracing over the call graph
//! - [`engine`] — orchestration into a [`types::Report`]

pub mod types;
pub mod matcher;
pub mod getters;
pub mod emission;
pub mod engine;
