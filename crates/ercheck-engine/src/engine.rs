use ercheck_core::graph::CallGraph;
use ercheck_core::ruleset::Ruleset;
use ercheck_core::types::{Contract, Event};

use crate::emission::emits_event;
use crate::getters::verify_getters;
use crate::matcher::verify_signatures;
use crate::types::{EmissionResult, MatchResult, ModifierResult, Report};

/// Core conformance engine. Borrows an immutable ruleset and checks one
/// contract snapshot per call; each run is a pure, single-pass batch
/// computation.
pub struct ConformanceEngine<'a> {
    ruleset: &'a Ruleset,
}

impl<'a> ConformanceEngine<'a> {
    pub fn new(ruleset: &'a Ruleset) -> Self {
        Self { ruleset }
    }

    /// Check `contract` against the ruleset and assemble the report.
    pub fn analyze(&self, contract: &Contract) -> Report {
        let visible = contract.visible_functions();
        let events: Vec<&Event> = contract.events.iter().collect();

        let function_matches = verify_signatures(&visible, &self.ruleset.functions);
        let event_matches = verify_signatures(&events, &self.ruleset.events);

        // Emission obligations apply only to functions that matched and
        // carry an entry in the obligation map; everything else is
        // skipped, not reported false.
        let graph = CallGraph::build(contract);
        let mut emissions = Vec::new();
        for m in &function_matches {
            let Some(matched_name) = m.matched.as_deref() else {
                continue;
            };
            let Some(event) = self.ruleset.event_by_function.get(&m.expected.name) else {
                continue;
            };
            let satisfied = graph
                .index_of(matched_name)
                .is_some_and(|root| emits_event(contract, &graph, root, event));
            emissions.push(EmissionResult {
                function: m.expected.clone(),
                event: event.clone(),
                satisfied,
            });
        }

        let getters = verify_getters(&contract.state_variables, &visible, &self.ruleset.getters);
        let modifiers = collect_modifiers(contract, &function_matches);

        Report {
            contract: contract.name.clone(),
            standard: self.ruleset.standard.clone(),
            functions: function_matches,
            events: event_matches,
            emissions,
            getters,
            modifiers,
        }
    }
}

/// Custom modifiers on matched functions. A modifier can gate or
/// replace the standard behavior, so every occurrence is reported;
/// unmatched functions and unmodified matches contribute nothing.
fn collect_modifiers(contract: &Contract, function_matches: &[MatchResult]) -> Vec<ModifierResult> {
    let mut results = Vec::new();
    for m in function_matches {
        let Some(matched_name) = m.matched.as_deref() else {
            continue;
        };
        let Some(function) = contract.functions.iter().find(|f| f.name == matched_name) else {
            continue;
        };
        if !function.modifiers.is_empty() {
            results.push(ModifierResult {
                function: m.expected.clone(),
                modifiers: function.modifiers.clone(),
            });
        }
    }
    results
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
