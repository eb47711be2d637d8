use prereqs_core::code::CourseCode;

use super::arena::{Edge, EdgeIndex, GraphArena, VertexIndex};

/// Induced view of one department within a [`DependencyGraph`](super::DependencyGraph).
///
/// Vertex indices are local to the subgraph and dense, starting at zero.
/// Only vertex names survive the extraction.
#[derive(Debug, Clone)]
pub struct Subgraph {
    department: String,
    arena: GraphArena,
}

impl Subgraph {
    pub(crate) fn new(department: impl Into<String>, arena: GraphArena) -> Self {
        Self {
            department: department.into(),
            arena,
        }
    }

    /// Returns the department code this view was extracted for.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns the underlying arena.
    pub fn arena(&self) -> &GraphArena {
        &self.arena
    }

    pub fn vertex_count(&self) -> usize {
        self.arena.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.arena.edge_count()
    }

    pub fn vertex(&self, idx: VertexIndex) -> &CourseCode {
        self.arena.vertex(idx)
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexIndex, &CourseCode)> {
        self.arena.vertices()
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeIndex, Edge)> + '_ {
        self.arena.edges()
    }
}
