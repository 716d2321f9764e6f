//! Transitive event-emission tracing.
//!
//! Answers one question: does a function emit a given event, either
//! directly or through any function reachable via internal calls? The
//! traversal is an iterative depth-first search over the resolved call
//! graph with a visited set, so recursive and mutually-recursive
//! contracts terminate (each function is explored at most once per root
//! query). Reachability is over the static graph: an emission inside an
//! unreachable branch still counts.

use ercheck_core::graph::CallGraph;
use ercheck_core::sig::{normalize_type, Signature};
use ercheck_core::types::{Contract, EventCall};

/// Upper bound on functions explored per root query. Contract call
/// graphs are small; hitting this means the model is pathological, and
/// the query resolves to false rather than exhausting memory.
pub const MAX_TRACE_NODES: usize = 10_000;

/// Whether the function at `root` transitively emits `expected`.
/// Short-circuits on the first emission found.
pub fn emits_event(contract: &Contract, graph: &CallGraph, root: usize, expected: &Signature) -> bool {
    let mut visited = vec![false; contract.functions.len()];
    let mut stack = vec![root];
    let mut explored = 0usize;

    while let Some(ix) = stack.pop() {
        if visited[ix] {
            continue;
        }
        visited[ix] = true;

        explored += 1;
        if explored > MAX_TRACE_NODES {
            return false;
        }

        let function = &contract.functions[ix];
        if function.emitted_events.iter().any(|call| call_matches(call, expected)) {
            return true;
        }

        stack.extend(graph.callees(ix).filter(|&callee| !visited[callee]));
    }

    false
}

/// An emission site matches when the event name and the ordered,
/// canonicalized argument types equal the expected event's name and
/// parameter types. Events carry no return slot, so the expected
/// signature's return types play no part. Arity must match exactly.
fn call_matches(call: &EventCall, expected: &Signature) -> bool {
    call.name == expected.name
        && call.argument_types.len() == expected.parameter_types.len()
        && call
            .argument_types
            .iter()
            .zip(&expected.parameter_types)
            .all(|(arg, want)| normalize_type(arg) == *want)
}

#[cfg(test)]
#[path = "emission_tests.rs"]
mod tests;
