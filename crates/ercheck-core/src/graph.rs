//! Resolved internal-call graph.
//!
//! The external model records call edges as callee names on each
//! function. This module resolves those names against the contract's
//! function list into a directed graph over function indices, so
//! traversals work on indices instead of re-resolving names at every
//! hop. A callee name with no matching function is a malformed model
//! edge and is silently dropped; the traversal then simply never
//! reaches it.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::types::Contract;

/// Directed call graph over the functions of one contract. Node weights
/// are indices into `contract.functions`; may contain cycles.
pub struct CallGraph {
    graph: DiGraph<usize, ()>,
    nodes: Vec<NodeIndex>,
    by_name: HashMap<String, usize>,
}

impl CallGraph {
    pub fn build(contract: &Contract) -> Self {
        let mut graph = DiGraph::new();
        let mut nodes = Vec::with_capacity(contract.functions.len());
        let mut by_name: HashMap<String, usize> = HashMap::new();

        for (ix, function) in contract.functions.iter().enumerate() {
            nodes.push(graph.add_node(ix));
            // Duplicate names: first declaration wins, deterministically.
            by_name.entry(function.name.clone()).or_insert(ix);
        }

        for (ix, function) in contract.functions.iter().enumerate() {
            for callee in &function.internal_calls {
                if let Some(&target) = by_name.get(callee.as_str()) {
                    graph.add_edge(nodes[ix], nodes[target], ());
                }
            }
        }

        Self {
            graph,
            nodes,
            by_name,
        }
    }

    /// Index of the function with the given name, if declared.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Function indices directly called by the function at `ix`.
    pub fn callees(&self, ix: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph
            .neighbors(self.nodes[ix])
            .map(|n| self.graph[n])
    }

    pub fn function_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Function, Visibility};

    fn function(name: &str, calls: &[&str]) -> Function {
        Function {
            name: name.to_string(),
            visibility: Visibility::Internal,
            parameter_types: vec![],
            return_types: vec![],
            internal_calls: calls.iter().map(|c| c.to_string()).collect(),
            emitted_events: vec![],
            modifiers: vec![],
        }
    }

    fn contract(functions: Vec<Function>) -> Contract {
        Contract {
            name: "T".to_string(),
            functions,
            events: vec![],
            state_variables: vec![],
        }
    }

    #[test]
    fn test_edges_resolve_by_name() {
        let c = contract(vec![function("a", &["b"]), function("b", &[])]);
        let graph = CallGraph::build(&c);
        let callees: Vec<usize> = graph.callees(0).collect();
        assert_eq!(callees, vec![1]);
        assert_eq!(graph.callees(1).count(), 0);
    }

    #[test]
    fn test_unresolvable_callee_is_dropped() {
        let c = contract(vec![function("a", &["missing"])]);
        let graph = CallGraph::build(&c);
        assert_eq!(graph.callees(0).count(), 0);
    }

    #[test]
    fn test_cycles_are_representable() {
        let c = contract(vec![function("a", &["b"]), function("b", &["a"])]);
        let graph = CallGraph::build(&c);
        assert_eq!(graph.callees(0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(graph.callees(1).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_duplicate_names_resolve_to_first_declaration() {
        let c = contract(vec![
            function("dup", &[]),
            function("dup", &[]),
            function("caller", &["dup"]),
        ]);
        let graph = CallGraph::build(&c);
        assert_eq!(graph.index_of("dup"), Some(0));
        assert_eq!(graph.callees(2).collect::<Vec<_>>(), vec![0]);
    }
}
