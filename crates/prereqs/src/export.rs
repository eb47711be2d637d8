//! Node-link export of laid-out department subgraphs.
//!
//! [`VisualizationExporter`] turns a [`Subgraph`] and its [`Layout`] into a
//! [`VisualizationDocument`], the document consumed by the graph-visualization
//! front end. Field names, key order and value types of the document are a
//! fixed contract with that front end.
//!
//! Where the document is written is decided by an [`OutputLocator`];
//! [`TemplateScaffold`] is the default, creating one directory per
//! institution and department from an optional template.

mod colors;
mod document;
mod locator;

pub use colors::department_colors;
pub use document::{Edge, EdgeAttributes, Node, NodeAttributes, VisualizationDocument};
pub use locator::{OutputLocator, TemplateScaffold};

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::{debug, error};
use rand::Rng;
use thiserror::Error;

use prereqs_core::catalog::InstitutionCatalog;

use crate::{graph::Subgraph, layout::Layout};

/// Description given to vertices with no catalog record.
pub const PLACEHOLDER_DESCRIPTION: &str = "not offered in the last 4 semesters";

/// Errors raised while locating or writing export documents.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to prepare output directory {}: {source}", path.display())]
    Location {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Builds visualization documents from laid-out subgraphs.
#[derive(Debug, Clone)]
pub struct VisualizationExporter {
    node_size: f64,
    edge_size: f64,
}

impl Default for VisualizationExporter {
    fn default() -> Self {
        Self::new(10.0, 1.0)
    }
}

impl VisualizationExporter {
    pub fn new(node_size: f64, edge_size: f64) -> Self {
        Self {
            node_size,
            edge_size,
        }
    }

    /// Exports one subgraph.
    ///
    /// Department colors are drawn from `rng` once per call, so a seeded
    /// source gives identical documents for identical input.
    ///
    /// Node ids are vertex indices. Edge `k` gets id `N - 1 + 2k` for a
    /// subgraph of `N` vertices, the numbering the front-end template expects.
    pub fn export<R>(
        &self,
        subgraph: &Subgraph,
        layout: &Layout,
        catalog: &InstitutionCatalog,
        rng: &mut R,
    ) -> VisualizationDocument
    where
        R: Rng + ?Sized,
    {
        let colors = department_colors(
            subgraph.vertices().map(|(_, code)| code.department()),
            rng,
        );
        let color_of = |department: &str| colors.get(department).copied().unwrap_or_default();

        let nodes: Vec<Node> = subgraph
            .vertices()
            .map(|(idx, code)| {
                let position = layout.position(idx).unwrap_or_default();
                let attributes = match catalog.get(code.as_str()) {
                    Some(record) => NodeAttributes {
                        title: record.title().to_string(),
                        description: record.description().to_string(),
                        department_code: code.department().to_string(),
                        course_site: format!("<a href= '{}'> Course Site </a>", record.url()),
                        requisite: record.requisite_text().to_string(),
                    },
                    None => NodeAttributes {
                        title: code.to_string(),
                        description: PLACEHOLDER_DESCRIPTION.to_string(),
                        department_code: code.department().to_string(),
                        course_site: String::new(),
                        requisite: String::new(),
                    },
                };

                Node {
                    label: code.to_string(),
                    x: position.x(),
                    y: position.y(),
                    id: idx.index().to_string(),
                    attributes,
                    color: color_of(code.department()),
                    size: self.node_size,
                }
            })
            .collect();

        let offset = nodes.len().saturating_sub(1);
        let edges: Vec<Edge> = subgraph
            .edges()
            .map(|(idx, edge)| {
                let target = subgraph.vertex(edge.target());
                Edge {
                    label: String::new(),
                    source: edge.source().index().to_string(),
                    target: edge.target().index().to_string(),
                    id: (offset + 2 * idx.index()).to_string(),
                    attributes: EdgeAttributes::default(),
                    color: color_of(target.department()),
                    size: self.edge_size,
                }
            })
            .collect();

        debug!(
            department = subgraph.department(),
            nodes = nodes.len(),
            edges = edges.len(),
            colors = colors.len();
            "Visualization document built",
        );
        VisualizationDocument { edges, nodes }
    }
}

/// Writes a document as compact JSON, replacing any existing file.
pub fn write_document(document: &VisualizationDocument, path: &Path) -> Result<(), Error> {
    let file = File::create(path).map_err(|source| {
        error!(path:? = path, err:% = source; "Failed to create document file");
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, document)?;
    writer.flush().map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use prereqs_core::{code::CourseCode, record::CourseRecord};

    use super::*;
    use crate::{
        extract::PrerequisiteEdge,
        graph::DependencyGraph,
        layout::{EngineBuilder, EngineKind},
    };

    fn catalog() -> InstitutionCatalog {
        let mut algebra = CourseRecord::new(
            "Linear Algebra",
            "https://example.edu/math-235",
            "Fall 2017",
            "Mathematics",
            "Vectors. Prerequisite: MATH 131.",
        );
        algebra.set_requisite_text("Prerequisite: MATH 131");

        [
            (
                "MATH-131",
                CourseRecord::new("Calculus I", "https://example.edu/math-131", "Fall 2017", "Mathematics", "Limits."),
            ),
            ("MATH-235", algebra),
        ]
        .into_iter()
        .map(|(code, record)| (CourseCode::new(code), record))
        .collect()
    }

    fn document(seed: u64) -> (Subgraph, VisualizationDocument) {
        let catalog = catalog();
        let edges = [
            PrerequisiteEdge::new("MATH-131".into(), "MATH-235".into()),
            PrerequisiteEdge::new("PHYS-100".into(), "MATH-235".into()),
            PrerequisiteEdge::new("MATH-235".into(), "CS-311".into()),
        ];
        let graph = DependencyGraph::build(&catalog, &edges);
        let subgraph = graph.department_subgraph("MATH");
        let layout = EngineBuilder::new().build(EngineKind::Tiered).calculate(&subgraph);

        let document = VisualizationExporter::default().export(
            &subgraph,
            &layout,
            &catalog,
            &mut StdRng::seed_from_u64(seed),
        );
        (subgraph, document)
    }

    #[test]
    fn test_counts_match_subgraph() {
        let (subgraph, document) = document(1);
        assert_eq!(document.nodes.len(), subgraph.vertex_count());
        assert_eq!(document.edges.len(), subgraph.edge_count());
    }

    #[test]
    fn test_edge_ids_follow_offset_formula() {
        let (subgraph, document) = document(1);
        let n = subgraph.vertex_count();

        for (k, edge) in document.edges.iter().enumerate() {
            assert_eq!(edge.id, (n - 1 + 2 * k).to_string());
        }
        for (i, node) in document.nodes.iter().enumerate() {
            assert_eq!(node.id, i.to_string());
        }
    }

    #[test]
    fn test_seeded_exports_are_identical() {
        let (_, first) = document(7);
        let (_, second) = document(7);
        assert_eq!(first, second);
    }

    #[test]
    fn test_placeholder_and_catalog_attributes() {
        let (_, document) = document(1);

        let placeholder = document.nodes.iter().find(|n| n.label == "PHYS-100").unwrap();
        assert_eq!(placeholder.attributes.title, "PHYS-100");
        assert_eq!(placeholder.attributes.description, PLACEHOLDER_DESCRIPTION);
        assert_eq!(placeholder.attributes.department_code, "PHYS");
        assert_eq!(placeholder.attributes.course_site, "");
        assert_eq!(placeholder.attributes.requisite, "");

        let algebra = document.nodes.iter().find(|n| n.label == "MATH-235").unwrap();
        assert_eq!(algebra.attributes.title, "Linear Algebra");
        assert_eq!(
            algebra.attributes.course_site,
            "<a href= 'https://example.edu/math-235'> Course Site </a>"
        );
        assert_eq!(algebra.attributes.requisite, "Prerequisite: MATH 131");
        assert_eq!(algebra.size, 10.0);
    }

    #[test]
    fn test_colors_shared_per_department() {
        let (_, document) = document(3);

        let color_of = |label: &str| document.nodes.iter().find(|n| n.label == label).unwrap().color;
        assert_eq!(color_of("MATH-131"), color_of("MATH-235"));

        // Edges take the color of their target.
        for edge in &document.edges {
            let target = &document.nodes[edge.target.parse::<usize>().unwrap()];
            assert_eq!(edge.color, target.color);
            assert_eq!(edge.size, 1.0);
        }
    }

    #[test]
    fn test_json_key_order() {
        let (_, document) = document(1);
        let json = serde_json::to_string(&document).unwrap();

        assert!(json.starts_with(r#"{"edges":[{"label":"","source":"#));
        assert!(json.contains(r#""attributes":{},"color":"rgb("#));
        assert!(json.contains(r#"{"label":"MATH-131","x":"#));
        assert!(json.contains(
            r#""attributes":{"Title":"Calculus I","Description":"Limits.","Department Code":"MATH","Course Site":"#
        ));
        assert!(json.contains(r#","size":10.0}"#));
    }

    #[test]
    fn test_write_document_is_compact() {
        let (_, document) = document(1);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        write_document(&document, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["nodes"].as_array().unwrap().len(), document.nodes.len());
    }
}
