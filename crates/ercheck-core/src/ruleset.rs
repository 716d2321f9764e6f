//! Rule tables for conformance checking.
//!
//! A [`Ruleset`] is the canonical expectation table: required function
//! signatures, required event signatures, required getters, and the
//! function-to-event emission obligations. The built-in table is ERC20;
//! an alternative standard can be loaded from a JSON file and injected
//! into the engine without touching it.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sig::Signature;
use crate::types::ModelError;

/// Expectation table for one token standard. Constructed once at
/// startup and treated as immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ruleset {
    /// Label used in report headers ("ERC20" for the built-in table).
    pub standard: String,
    /// Required visible-function signatures.
    pub functions: Vec<Signature>,
    /// Required event declarations.
    pub events: Vec<Signature>,
    /// Required getters, satisfiable by a public field or a visible
    /// function. Each carries no parameters unless the getter is keyed
    /// (e.g. `balanceOf(address)`), and exactly the return types a
    /// matching function must expose.
    pub getters: Vec<Signature>,
    /// Event each required function must emit, directly or transitively.
    /// Functions absent from this map carry no emission obligation.
    pub event_by_function: BTreeMap<String, Signature>,
}

impl Ruleset {
    /// The ERC20 standard: transfer/approve/transferFrom with their
    /// Transfer/Approval obligations, plus the standard getters.
    pub fn erc20() -> Self {
        let transfer_event = Signature::new("Transfer", &["address", "address", "uint256"], &[]);
        let approval_event = Signature::new("Approval", &["address", "address", "uint256"], &[]);

        let mut event_by_function = BTreeMap::new();
        event_by_function.insert("transfer".to_string(), transfer_event.clone());
        event_by_function.insert("approve".to_string(), approval_event.clone());
        event_by_function.insert("transferFrom".to_string(), transfer_event.clone());

        Self {
            standard: "ERC20".to_string(),
            functions: vec![
                Signature::new("transfer", &["address", "uint256"], &["bool"]),
                Signature::new("approve", &["address", "uint256"], &["bool"]),
                Signature::new(
                    "transferFrom",
                    &["address", "address", "uint256"],
                    &["bool"],
                ),
            ],
            events: vec![transfer_event, approval_event],
            getters: vec![
                Signature::new("totalSupply", &[] as &[&str], &["uint256"]),
                Signature::new("balanceOf", &["address"], &["uint256"]),
                Signature::new("allowance", &["address", "address"], &["uint256"]),
                Signature::new("name", &[] as &[&str], &["string"]),
                Signature::new("symbol", &[] as &[&str], &["string"]),
                Signature::new("decimals", &[] as &[&str], &["uint8"]),
            ],
            event_by_function,
        }
    }

    /// Load a ruleset override from a JSON file. Type strings are
    /// re-normalized during deserialization.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(|e| ModelError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| ModelError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "ruleset_tests.rs"]
mod tests;
