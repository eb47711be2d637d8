//! Prerequisite dependency graphs.
//!
//! A [`DependencyGraph`] is built once per institution from its catalog and
//! the extracted [`PrerequisiteEdge`]s, and is never mutated afterwards. Every
//! department view is derived from it by read-only extraction
//! ([`DependencyGraph::department_subgraph`]).
//!
//! # Vertex order
//!
//! Catalog courses come first, in catalog order, followed by placeholder
//! vertices: codes referenced by an edge but absent from the catalog (courses
//! not offered recently), in the order they are first referenced.

mod arena;
mod subgraph;

pub use arena::{Edge, EdgeIndex, GraphArena, VertexIndex};
pub use subgraph::Subgraph;

use std::collections::BTreeSet;

use log::debug;

use prereqs_core::{catalog::InstitutionCatalog, code::CourseCode};

use crate::extract::PrerequisiteEdge;

/// The directed prerequisite graph of one institution.
///
/// Edges point from a prerequisite to the course requiring it. Duplicate
/// edges and self-loops produced by the extractor are kept verbatim.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    arena: GraphArena,
    course_count: usize,
}

impl DependencyGraph {
    /// Builds the graph of one institution.
    pub fn build(catalog: &InstitutionCatalog, edges: &[PrerequisiteEdge]) -> Self {
        let mut arena = GraphArena::new();
        for code in catalog.codes() {
            arena.add_vertex(code.clone());
        }
        let course_count = arena.vertex_count();

        for edge in edges {
            let source = arena.add_vertex(edge.prerequisite().clone());
            let target = arena.add_vertex(edge.dependent().clone());
            arena.add_edge(source, target);
        }

        let graph = Self {
            arena,
            course_count,
        };
        debug!(
            vertices = graph.vertex_count(),
            placeholders = graph.placeholder_count(),
            edges = graph.edge_count();
            "Dependency graph built",
        );
        graph
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

    /// Returns the number of vertices with no catalog record.
    pub fn placeholder_count(&self) -> usize {
        self.arena.vertex_count() - self.course_count
    }

    /// Returns whether the vertex stands for a code with no catalog record.
    pub fn is_placeholder(&self, idx: VertexIndex) -> bool {
        idx.index() >= self.course_count
    }

    /// Returns the vertex named `code`, if any.
    pub fn index_of(&self, code: &str) -> Option<VertexIndex> {
        self.arena.index_of(code)
    }

    /// Returns the name of a vertex.
    pub fn vertex(&self, idx: VertexIndex) -> &CourseCode {
        self.arena.vertex(idx)
    }

    /// Extracts the view of one department.
    ///
    /// The view contains every vertex of the department, every vertex one
    /// edge away from it in either direction, and every edge of the full graph
    /// between two included vertices. Department vertices without any edge
    /// are included as isolated vertices.
    pub fn department_subgraph(&self, department: &str) -> Subgraph {
        let members: Vec<VertexIndex> = self
            .arena
            .vertices()
            .filter(|(_, code)| code.department() == department)
            .map(|(idx, _)| idx)
            .collect();

        let mut keep: BTreeSet<VertexIndex> = members.iter().copied().collect();
        for &member in &members {
            keep.extend(self.arena.neighbors(member));
        }

        let subgraph = Subgraph::new(department, self.arena.induced(&keep));
        debug!(
            department,
            members = members.len(),
            vertices = subgraph.vertex_count(),
            edges = subgraph.edge_count();
            "Department subgraph extracted",
        );
        subgraph
    }
}

#[cfg(test)]
mod tests {
    use prereqs_core::record::CourseRecord;

    use super::*;

    fn catalog(codes: &[&str]) -> InstitutionCatalog {
        codes
            .iter()
            .map(|code| (CourseCode::new(*code), CourseRecord::default()))
            .collect()
    }

    fn edge(prerequisite: &str, dependent: &str) -> PrerequisiteEdge {
        PrerequisiteEdge::new(CourseCode::new(prerequisite), CourseCode::new(dependent))
    }

    fn names(subgraph: &Subgraph) -> Vec<&str> {
        subgraph
            .vertices()
            .map(|(_, code)| code.as_str())
            .collect()
    }

    #[test]
    fn test_placeholders_follow_catalog_courses() {
        let catalog = catalog(&["MATH-101", "MATH-235"]);
        let edges = vec![
            edge("MATH-101", "MATH-235"),
            edge("STAT-111", "MATH-235"),
            edge("STAT-111", "MATH-235"),
            edge("MATH-090", "MATH-101"),
        ];

        let graph = DependencyGraph::build(&catalog, &edges);

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.placeholder_count(), 2);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.index_of("STAT-111"), Some(VertexIndex::new(2)));
        assert!(graph.is_placeholder(VertexIndex::new(3)));
        assert!(!graph.is_placeholder(VertexIndex::new(1)));
    }

    #[test]
    fn test_self_loop_is_kept() {
        let graph = DependencyGraph::build(&catalog(&["MATH-101"]), &[edge("MATH-101", "MATH-101")]);

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_subgraph_includes_one_hop_neighbourhood() {
        // PHYS-151 requires MATH-101; MATH-101 requires MATH-090 (placeholder);
        // PHYS-300 requires PHYS-151 and is two hops from MATH.
        let catalog = catalog(&["MATH-101", "MATH-500", "PHYS-151", "PHYS-300"]);
        let edges = vec![
            edge("MATH-101", "PHYS-151"),
            edge("MATH-090", "MATH-101"),
            edge("PHYS-151", "PHYS-300"),
        ];
        let graph = DependencyGraph::build(&catalog, &edges);

        let subgraph = graph.department_subgraph("MATH");

        assert_eq!(names(&subgraph), vec!["MATH-101", "MATH-500", "PHYS-151", "MATH-090"]);
        assert_eq!(subgraph.edge_count(), 2);
        assert_eq!(subgraph.department(), "MATH");
    }

    #[test]
    fn test_subgraph_keeps_edges_between_neighbours() {
        // Both ENGL-100 and PHYS-151 neighbour MATH-101, and PHYS-151 requires ENGL-100.
        let catalog = catalog(&["ENGL-100", "MATH-101", "PHYS-151"]);
        let edges = vec![
            edge("ENGL-100", "MATH-101"),
            edge("MATH-101", "PHYS-151"),
            edge("ENGL-100", "PHYS-151"),
        ];
        let graph = DependencyGraph::build(&catalog, &edges);

        let subgraph = graph.department_subgraph("MATH");

        assert_eq!(subgraph.vertex_count(), 3);
        assert_eq!(subgraph.edge_count(), 3);
    }

    #[test]
    fn test_subgraph_of_unknown_department_is_empty() {
        let graph = DependencyGraph::build(&catalog(&["MATH-101"]), &[]);

        let subgraph = graph.department_subgraph("HIST");

        assert_eq!(subgraph.vertex_count(), 0);
        assert_eq!(subgraph.edge_count(), 0);
    }
}
