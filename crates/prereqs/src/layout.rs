//! Layered layout of department subgraphs.
//!
//! Every vertex of a [`Subgraph`] gets a 2D [`Point`]. Vertices are grouped
//! into horizontal tiers: by course level where the code carries one, by an
//! algorithm-assigned rank otherwise. Subgraphs are presumed acyclic but not
//! checked; on cyclic input the engines still terminate and place every
//! vertex, with no guarantee on layering quality.

mod engines;
mod tiers;

pub use engines::{EngineBuilder, EngineKind, LayoutEngine};

use log::warn;
use petgraph::{
    algo::is_cyclic_directed,
    graph::{DiGraph, NodeIndex},
};

use crate::graph::{Subgraph, VertexIndex};

/// A position in layout space. `y` grows with the tier.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Coordinates of every vertex of one subgraph, indexed by vertex.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    positions: Vec<Point>,
}

impl Layout {
    pub fn new(positions: Vec<Point>) -> Self {
        Self { positions }
    }

    /// Returns the position of a vertex.
    pub fn position(&self, idx: VertexIndex) -> Option<Point> {
        self.positions.get(idx.index()).copied()
    }

    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Mirrors a subgraph into a petgraph graph with identical vertex indices.
pub(crate) fn to_digraph(subgraph: &Subgraph) -> DiGraph<(), ()> {
    let mut graph = DiGraph::with_capacity(subgraph.vertex_count(), subgraph.edge_count());
    for _ in 0..subgraph.vertex_count() {
        graph.add_node(());
    }
    for (_, edge) in subgraph.edges() {
        graph.add_edge(
            NodeIndex::new(edge.source().index()),
            NodeIndex::new(edge.target().index()),
            (),
        );
    }
    graph
}

/// Logs a warning when the subgraph contains a cycle.
pub(crate) fn warn_if_cyclic(subgraph: &Subgraph, graph: &DiGraph<(), ()>) -> bool {
    let cyclic = is_cyclic_directed(graph);
    if cyclic {
        warn!(
            department = subgraph.department();
            "Subgraph contains a cycle, layering quality not guaranteed",
        );
    }
    cyclic
}
