//! Tier assignment.
//!
//! A vertex whose code carries a level (`MATH-235` is level 2) sits in that
//! tier. Other vertices, typically placeholders with unusual numbering, fall
//! back to their longest-path rank over the strongly connected component
//! condensation of the subgraph. Collapsing each cycle to one component keeps
//! the rank finite on cyclic input.

use petgraph::{Direction, algo::tarjan_scc, graph::DiGraph};

use crate::graph::Subgraph;

/// Returns the tier of every vertex, indexed by vertex.
pub(crate) fn assign(subgraph: &Subgraph, graph: &DiGraph<(), ()>) -> Vec<u32> {
    let ranks = condensed_ranks(graph);
    subgraph
        .vertices()
        .map(|(idx, code)| {
            code.level()
                .map(u32::from)
                .unwrap_or(ranks[idx.index()])
        })
        .collect()
}

/// Longest-path rank of every vertex over the component condensation.
///
/// Vertices of one strongly connected component share a rank; a component
/// with no incoming edge from another component has rank zero.
pub(crate) fn condensed_ranks(graph: &DiGraph<(), ()>) -> Vec<u32> {
    // Components come out in reverse topological order.
    let components = tarjan_scc(graph);

    let mut component_of = vec![0; graph.node_count()];
    for (component, nodes) in components.iter().enumerate() {
        for node in nodes {
            component_of[node.index()] = component;
        }
    }

    let mut component_rank = vec![0u32; components.len()];
    for (component, nodes) in components.iter().enumerate().rev() {
        for &node in nodes {
            for successor in graph.neighbors_directed(node, Direction::Outgoing) {
                let successor_component = component_of[successor.index()];
                if successor_component != component {
                    component_rank[successor_component] =
                        component_rank[successor_component].max(component_rank[component] + 1);
                }
            }
        }
    }

    component_of
        .into_iter()
        .map(|component| component_rank[component])
        .collect()
}
