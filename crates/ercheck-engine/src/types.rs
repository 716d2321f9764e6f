use serde::Serialize;

use ercheck_core::sig::Signature;

/// Verdict for one expected signature: the name of the matched member,
/// or `None` when nothing in the contract matches. At most one match
/// per expected signature; the first structural match in declaration
/// order wins.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub expected: Signature,
    pub matched: Option<String>,
}

impl MatchResult {
    pub fn is_satisfied(&self) -> bool {
        self.matched.is_some()
    }
}

/// Verdict for one emission obligation: whether `function` emits
/// `event`, directly or via a transitive internal call. Only functions
/// that matched and carry an obligation appear in this sequence.
#[derive(Debug, Clone, Serialize)]
pub struct EmissionResult {
    pub function: Signature,
    pub event: Signature,
    pub satisfied: bool,
}

/// Verdict for one getter obligation, satisfiable by a public state
/// variable or a visible function.
#[derive(Debug, Clone, Serialize)]
pub struct GetterResult {
    pub getter: Signature,
    pub satisfied: bool,
}

/// A matched function carrying custom modifiers. Modifiers can alter
/// or suppress the standard behavior, so each one is surfaced for
/// review; functions without modifiers produce no entry.
#[derive(Debug, Clone, Serialize)]
pub struct ModifierResult {
    pub function: Signature,
    pub modifiers: Vec<String>,
}

/// Full conformance report for one contract. Retains per-rule detail;
/// collapsing to a single verdict is the consumer's decision.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub contract: String,
    pub standard: String,
    pub functions: Vec<MatchResult>,
    pub events: Vec<MatchResult>,
    pub emissions: Vec<EmissionResult>,
    pub getters: Vec<GetterResult>,
    pub modifiers: Vec<ModifierResult>,
}

impl Report {
    /// True iff every rule is satisfied and no matched function carries
    /// a custom modifier.
    pub fn is_conformant(&self) -> bool {
        self.functions.iter().all(MatchResult::is_satisfied)
            && self.events.iter().all(MatchResult::is_satisfied)
            && self.emissions.iter().all(|e| e.satisfied)
            && self.getters.iter().all(|g| g.satisfied)
            && self.modifiers.is_empty()
    }

    /// Number of rules that failed, across all sections.
    pub fn unsatisfied_count(&self) -> usize {
        self.functions.iter().filter(|m| !m.is_satisfied()).count()
            + self.events.iter().filter(|m| !m.is_satisfied()).count()
            + self.emissions.iter().filter(|e| !e.satisfied).count()
            + self.getters.iter().filter(|g| !g.satisfied).count()
            + self.modifiers.len()
    }
}
