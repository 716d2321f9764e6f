use serde::{Deserialize, Serialize};

/// Declared accessibility of a contract member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    External,
    Internal,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::External => "external",
            Visibility::Internal => "internal",
            Visibility::Private => "private",
        }
    }

    /// Callable from outside the contract: public or external.
    pub fn is_visible(&self) -> bool {
        matches!(self, Visibility::Public | Visibility::External)
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event emission site inside a function body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCall {
    pub name: String,
    #[serde(default)]
    pub argument_types: Vec<String>,
}

/// A function declared on a contract, as reported by the external
/// static-analysis engine.
///
/// `internal_calls` holds callee names; resolving them to functions is
/// the call graph's job. A name that resolves to nothing is a malformed
/// model edge and is dropped during graph construction rather than
/// failing the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub visibility: Visibility,
    #[serde(default)]
    pub parameter_types: Vec<String>,
    #[serde(default)]
    pub return_types: Vec<String>,
    #[serde(default)]
    pub internal_calls: Vec<String>,
    #[serde(default)]
    pub emitted_events: Vec<EventCall>,
    /// Names of custom modifiers applied to this function.
    #[serde(default)]
    pub modifiers: Vec<String>,
}

/// An event declared on a contract. Events carry no visibility and no
/// return types in this model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(default)]
    pub argument_types: Vec<String>,
}

/// A state variable declared on a contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateVariable {
    pub name: String,
    pub visibility: Visibility,
    pub declared_type: String,
}

/// One contract from the external semantic model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    pub name: String,
    #[serde(default)]
    pub functions: Vec<Function>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub state_variables: Vec<StateVariable>,
}

impl Contract {
    /// Functions callable from outside the contract, in declaration order.
    pub fn visible_functions(&self) -> Vec<&Function> {
        self.functions
            .iter()
            .filter(|f| f.visibility.is_visible())
            .collect()
    }
}

/// Errors that can occur while loading or querying a source model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Contract {0} not found")]
    ContractNotFound(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
