//! Source model loading.
//!
//! The external static-analysis engine serializes its semantic model
//! (one or more contracts, each with functions, events, state
//! variables, and call edges) to JSON; this module deserializes it and
//! answers contract lookups.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{Contract, ModelError};

/// A deserialized semantic model for one source unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceModel {
    #[serde(default)]
    pub contracts: Vec<Contract>,
}

impl SourceModel {
    /// Load a model from a JSON file.
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

    /// Look up a contract by name. Absence is the fatal precondition of
    /// a run: no report is produced for a contract that isn't there.
    pub fn contract(&self, name: &str) -> Result<&Contract, ModelError> {
        self.contracts
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| ModelError::ContractNotFound(name.to_string()))
    }
}
