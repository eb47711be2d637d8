//! Low-level graph storage.
//!
//! [`GraphArena`] stores vertices in a dense array and edges as pairs of
//! vertex indices, with a side map from course code to vertex index. Both the
//! full dependency graph and department subgraphs are built on it.
//!
//! Capabilities:
//! - Vertex storage in insertion order, named by [`CourseCode`]
//! - Tracking of both incoming and outgoing edges per vertex
//! - Self-loops and parallel edges, kept verbatim
//! - Induced sub-arenas over a vertex subset
//!
//! Mutation is crate-private: once built, arenas are only read.

use std::collections::{BTreeSet, HashMap};

use prereqs_core::code::CourseCode;

/// Dense index of a vertex within one arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexIndex(usize);

impl VertexIndex {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Dense index of an edge within one arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeIndex(usize);

impl EdgeIndex {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A directed edge between two vertices of the same arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    source: VertexIndex,
    target: VertexIndex,
}

impl Edge {
    pub fn source(&self) -> VertexIndex {
        self.source
    }

    pub fn target(&self) -> VertexIndex {
        self.target
    }
}

/// Vertex-index arena backing every graph in this crate.
#[derive(Debug, Clone, Default)]
pub struct GraphArena {
    vertices: Vec<CourseCode>,
    edges: Vec<Edge>,
    by_name: HashMap<CourseCode, VertexIndex>,
    incoming: Vec<Vec<EdgeIndex>>,
    outgoing: Vec<Vec<EdgeIndex>>,
}

impl GraphArena {
    /// Creates a new empty arena.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex named `code`, or returns the index of the existing one.
    pub(crate) fn add_vertex(&mut self, code: CourseCode) -> VertexIndex {
        if let Some(&idx) = self.by_name.get(&code) {
            return idx;
        }

        let idx = VertexIndex(self.vertices.len());
        self.by_name.insert(code.clone(), idx);
        self.vertices.push(code);
        self.incoming.push(Vec::new());
        self.outgoing.push(Vec::new());
        idx
    }

    /// Adds a directed edge between two existing vertices.
    ///
    /// # Panics
    ///
    /// Panics if either vertex index does not belong to this arena.
    pub(crate) fn add_edge(&mut self, source: VertexIndex, target: VertexIndex) -> EdgeIndex {
        assert!(
            source.0 < self.vertices.len() && target.0 < self.vertices.len(),
            "Adding edge: vertex {source:?} or {target:?} does not exist",
        );

        let idx = EdgeIndex(self.edges.len());
        self.edges.push(Edge { source, target });
        self.outgoing[source.0].push(idx);
        self.incoming[target.0].push(idx);
        idx
    }

    /// Returns the name of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if the index does not belong to this arena.
    pub fn vertex(&self, idx: VertexIndex) -> &CourseCode {
        &self.vertices[idx.0]
    }

    /// Returns the index of the vertex named `code`, if any.
    pub fn index_of(&self, code: &str) -> Option<VertexIndex> {
        self.by_name.get(code).copied()
    }

    /// Iterates over vertices in index order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexIndex, &CourseCode)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(idx, code)| (VertexIndex(idx), code))
    }

    /// Iterates over edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeIndex, Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(idx, edge)| (EdgeIndex(idx), *edge))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over the targets of the edges leaving `idx`, one per edge.
    pub fn successors(&self, idx: VertexIndex) -> impl Iterator<Item = VertexIndex> + '_ {
        self.outgoing[idx.0]
            .iter()
            .map(|edge| self.edges[edge.0].target)
    }

    /// Iterates over the sources of the edges entering `idx`, one per edge.
    pub fn predecessors(&self, idx: VertexIndex) -> impl Iterator<Item = VertexIndex> + '_ {
        self.incoming[idx.0]
            .iter()
            .map(|edge| self.edges[edge.0].source)
    }

    /// Returns the distinct vertices adjacent to `idx` through any edge, excluding `idx`.
    pub fn neighbors(&self, idx: VertexIndex) -> BTreeSet<VertexIndex> {
        self.predecessors(idx)
            .chain(self.successors(idx))
            .filter(|&other| other != idx)
            .collect()
    }

    /// Builds the sub-arena induced by `keep`.
    ///
    /// Kept vertices retain their relative order and names; every edge whose
    /// endpoints are both kept is copied, in original order.
    pub(crate) fn induced(&self, keep: &BTreeSet<VertexIndex>) -> GraphArena {
        let mut sub = GraphArena::new();
        let mut remap = HashMap::with_capacity(keep.len());
        for &old in keep {
            let new = sub.add_vertex(self.vertex(old).clone());
            remap.insert(old, new);
        }

        for edge in &self.edges {
            if let (Some(&source), Some(&target)) = (remap.get(&edge.source), remap.get(&edge.target))
            {
                sub.add_edge(source, target);
            }
        }

        sub
    }
}
