//! Core model, signature rules, and call graph for ercheck.
//!
//! This crate provides the foundational data structures used across all
//! ercheck crates:
//! - [`types`] — The externally supplied contract model and error types
//! - [`sig`] — Canonical member signatures and type normalization
//! - [`ruleset`] — Rule tables (built-in ERC20, loadable overrides)
//! - [`model`] — Deserialized source models and contract lookup
//! - [`graph`] — The resolved internal-call graph

pub mod graph;
pub mod model;
pub mod ruleset;
pub mod sig;
pub mod types;
