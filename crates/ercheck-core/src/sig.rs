//! Canonical member signatures.
//!
//! Rule signatures and declared members are compared through one
//! canonical `(name, parameter_types, return_types)` form. Type strings
//! are normalized before any comparison, so `uint` and `uint256` are
//! the same type here even though the external model reports them as
//! distinct spellings.

use serde::{Deserialize, Serialize};

use crate::types::{Event, Function, StateVariable};

/// Canonicalize a Solidity type spelling.
///
/// Strips whitespace and expands the elastic aliases (`uint` → `uint256`,
/// `int` → `int256`, `byte` → `bytes1`). Anything else is kept verbatim;
/// this is spelling normalization, not type inference.
pub fn normalize_type(ty: &str) -> String {
    let trimmed: String = ty.split_whitespace().collect();
    match trimmed.as_str() {
        "uint" => "uint256".to_string(),
        "int" => "int256".to_string(),
        "byte" => "bytes1".to_string(),
        _ => trimmed,
    }
}

/// Canonical identity of an expected member: name, ordered parameter
/// types, ordered return types. Equality is exact over canonical forms
/// (order-sensitive, case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawSignature")]
pub struct Signature {
    pub name: String,
    pub parameter_types: Vec<String>,
    pub return_types: Vec<String>,
}

/// Wire form of a [`Signature`]; re-normalized on deserialization so
/// loaded rulesets go through the same canonicalization as built-ins.
#[derive(Deserialize)]
struct RawSignature {
    name: String,
    #[serde(default)]
    parameter_types: Vec<String>,
    #[serde(default)]
    return_types: Vec<String>,
}

impl From<RawSignature> for Signature {
    fn from(raw: RawSignature) -> Self {
        Signature::new(&raw.name, &raw.parameter_types, &raw.return_types)
    }
}

impl Signature {
    pub fn new<S: AsRef<str>>(name: &str, parameter_types: &[S], return_types: &[S]) -> Self {
        Self {
            name: name.to_string(),
            parameter_types: parameter_types
                .iter()
                .map(|t| normalize_type(t.as_ref()))
                .collect(),
            return_types: return_types
                .iter()
                .map(|t| normalize_type(t.as_ref()))
                .collect(),
        }
    }

    /// Render as `name(param,param) -> (ret)`. With `with_returns`
    /// false (events, which have no return slot) the arrow is omitted.
    pub fn format_inline(&self, with_returns: bool) -> String {
        let params = self.parameter_types.join(",");
        if with_returns && !self.return_types.is_empty() {
            format!("{}({}) -> ({})", self.name, params, self.return_types.join(","))
        } else {
            format!("{}({})", self.name, params)
        }
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_inline(true))
    }
}

/// Uniform signature view over heterogeneous member kinds, in place of
/// probing each kind for attributes it may not have.
pub trait SignatureShape {
    fn member_name(&self) -> &str;
    fn parameter_types(&self) -> Vec<String>;
    fn return_types(&self) -> Vec<String>;

    /// Exact structural match against an expected (canonical) signature.
    fn matches(&self, expected: &Signature) -> bool {
        self.member_name() == expected.name
            && self.parameter_types() == expected.parameter_types
            && self.return_types() == expected.return_types
    }
}

impl SignatureShape for Function {
    fn member_name(&self) -> &str {
        &self.name
    }

    fn parameter_types(&self) -> Vec<String> {
        self.parameter_types.iter().map(|t| normalize_type(t)).collect()
    }

    fn return_types(&self) -> Vec<String> {
        self.return_types.iter().map(|t| normalize_type(t)).collect()
    }
}

impl SignatureShape for Event {
    fn member_name(&self) -> &str {
        &self.name
    }

    fn parameter_types(&self) -> Vec<String> {
        self.argument_types.iter().map(|t| normalize_type(t)).collect()
    }

    // Events have no return slot.
    fn return_types(&self) -> Vec<String> {
        Vec::new()
    }
}

impl SignatureShape for StateVariable {
    fn member_name(&self) -> &str {
        &self.name
    }

    fn parameter_types(&self) -> Vec<String> {
        Vec::new()
    }

    fn return_types(&self) -> Vec<String> {
        vec![normalize_type(&self.declared_type)]
    }
}

#[cfg(test)]
#[path = "sig_tests.rs"]
mod tests;
