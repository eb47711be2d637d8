//! The batch run over a whole catalog.
//!
//! For every institution: extract prerequisite edges, build the dependency
//! graph once, then lay out and export one document per department. A
//! department that fails to export is recorded in the [`RunReport`] and the
//! run carries on with the next one.

use std::path::PathBuf;

use indexmap::IndexSet;
use log::{debug, error, info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};

use prereqs_core::catalog::{Catalog, InstitutionCatalog};

use crate::{
    PrereqsError,
    config::AppConfig,
    export::{self, OutputLocator, VisualizationDocument, VisualizationExporter},
    extract::{self, PrerequisiteEdge},
    graph::DependencyGraph,
    layout::{EngineBuilder, LayoutEngine},
};

/// The product of processing one institution's catalog.
#[derive(Debug, Clone)]
pub struct InstitutionGraph {
    pub edges: Vec<PrerequisiteEdge>,
    pub graph: DependencyGraph,
    /// Courses with requisite text that yielded no edge.
    pub unmatched: usize,
}

/// Per-institution progress figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstitutionSummary {
    pub institution: String,
    pub courses: usize,
    pub edges: usize,
    pub vertices: usize,
    pub placeholders: usize,
    pub unmatched: usize,
}

/// A department document written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedUnit {
    pub institution: String,
    pub department: String,
    pub path: PathBuf,
    pub nodes: usize,
    pub edges: usize,
}

/// A department whose document could not be written.
#[derive(Debug)]
pub struct UnitFailure {
    pub institution: String,
    pub department: String,
    pub error: export::Error,
}

/// Outcome of a run: what was exported and what failed.
#[derive(Debug, Default)]
pub struct RunReport {
    pub institutions: Vec<InstitutionSummary>,
    pub exported: Vec<ExportedUnit>,
    pub failures: Vec<UnitFailure>,
}

impl RunReport {
    /// Returns true when no department failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs extraction, graph building, layout and export with one configuration.
pub struct Pipeline {
    config: AppConfig,
    engine: Box<dyn LayoutEngine>,
    exporter: VisualizationExporter,
}

impl Pipeline {
    pub fn new(config: AppConfig) -> Self {
        let engine = EngineBuilder::from_config(config.layout()).build(config.layout().engine());
        let exporter =
            VisualizationExporter::new(config.export().node_size(), config.export().edge_size());
        Self {
            config,
            engine,
            exporter,
        }
    }

    /// Extracts edges from one institution's catalog and builds its graph.
    ///
    /// Stores the derived requisite text on every record.
    pub fn build_institution(
        &self,
        institution: &str,
        catalog: &mut InstitutionCatalog,
    ) -> InstitutionGraph {
        let edges = extract::extract(catalog);
        let graph = DependencyGraph::build(catalog, &edges);
        let unmatched = extract::unmatched_requisites(catalog, &edges);

        for code in &unmatched {
            debug!(institution, course:% = code; "Requisite text yielded no edge");
        }

        InstitutionGraph {
            unmatched: unmatched.len(),
            edges,
            graph,
        }
    }

    /// Lays out and exports one department of an institution graph.
    pub fn export_department<R>(
        &self,
        graph: &DependencyGraph,
        catalog: &InstitutionCatalog,
        department: &str,
        rng: &mut R,
    ) -> VisualizationDocument
    where
        R: Rng + ?Sized,
    {
        let subgraph = graph.department_subgraph(department);
        let layout = self.engine.calculate(&subgraph);
        self.exporter.export(&subgraph, &layout, catalog, rng)
    }

    /// Processes the selected institutions, or all of them when `institutions`
    /// is empty, writing one document per department through `locator`.
    ///
    /// # Errors
    ///
    /// Returns [`PrereqsError::UnknownInstitution`] before any work is done if
    /// a selected institution is not in the catalog. Failures of single
    /// departments are collected in the report instead.
    pub fn run(
        &self,
        catalog: &mut Catalog,
        institutions: &[String],
        locator: &dyn OutputLocator,
    ) -> Result<RunReport, PrereqsError> {
        let selected: Vec<String> = if institutions.is_empty() {
            catalog.institutions().map(|(code, _)| code.to_string()).collect()
        } else {
            for institution in institutions {
                if catalog.institution(institution).is_none() {
                    return Err(PrereqsError::UnknownInstitution(institution.clone()));
                }
            }
            // Repeats are processed once, in first-seen order.
            institutions
                .iter()
                .cloned()
                .collect::<IndexSet<String>>()
                .into_iter()
                .collect()
        };

        let mut rng = match self.config.export().seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut report = RunReport::default();
        for institution in &selected {
            let courses = catalog.institution_mut(institution);
            let built = self.build_institution(institution, courses);
            let courses = &*courses;

            let summary = InstitutionSummary {
                institution: institution.clone(),
                courses: courses.len(),
                edges: built.edges.len(),
                vertices: built.graph.vertex_count(),
                placeholders: built.graph.placeholder_count(),
                unmatched: built.unmatched,
            };
            info!(
                institution,
                courses = summary.courses,
                edges = summary.edges,
                vertices = summary.vertices,
                placeholders = summary.placeholders;
                "Built institution graph",
            );
            info!(
                institution,
                unmatched = summary.unmatched;
                "Courses with requisite text but no extracted edge",
            );
            report.institutions.push(summary);

            for department in courses.departments() {
                if department.is_empty() {
                    warn!(institution; "Skipping courses with no department segment");
                    continue;
                }

                let document = self.export_department(&built.graph, courses, department, &mut rng);
                match self.write(locator, institution, department, &document) {
                    Ok(path) => {
                        info!(
                            institution,
                            department,
                            path:? = path,
                            nodes = document.nodes.len(),
                            edges = document.edges.len();
                            "Exported department",
                        );
                        report.exported.push(ExportedUnit {
                            institution: institution.clone(),
                            department: department.to_string(),
                            path,
                            nodes: document.nodes.len(),
                            edges: document.edges.len(),
                        });
                    }
                    Err(err) => {
                        error!(institution, department, err:% = err; "Department export failed");
                        report.failures.push(UnitFailure {
                            institution: institution.clone(),
                            department: department.to_string(),
                            error: err,
                        });
                    }
                }
            }
        }

        Ok(report)
    }

    fn write(
        &self,
        locator: &dyn OutputLocator,
        institution: &str,
        department: &str,
        document: &VisualizationDocument,
    ) -> Result<PathBuf, export::Error> {
        let path = locator
            .locate(institution, department)?
            .join(self.config.export().file_name());
        export::write_document(document, &path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use prereqs_core::{code::CourseCode, record::CourseRecord};

    use super::*;
    use crate::export::TemplateScaffold;

    fn catalog() -> Catalog {
        let json = r#"{
            "A": {
                "MATH-111": {"title": "Calculus I", "url": "u1", "date": "F17", "department": "Mathematics", "description": "Limits."},
                "MATH-211": {"title": "Calculus II", "url": "u2", "date": "F17", "department": "Mathematics", "description": "Series. Prerequisite: MATH 111."},
                "PHYS-116": {"title": "Mechanics", "url": "u3", "date": "F17", "department": "Physics", "description": "Forces. Prerequisite: Mathematics 211 and Physics 111."}
            },
            "S": {
                "CHEM-100": {"title": "Chemistry", "url": "u4", "date": "F17", "department": "Chemistry", "description": "Atoms."}
            }
        }"#;
        Catalog::from_json(json).unwrap()
    }

    fn seeded() -> AppConfig {
        let mut config = AppConfig::default();
        config.export_mut().set_seed(5);
        config
    }

    #[test]
    fn test_build_institution() {
        let mut catalog = catalog();
        let pipeline = Pipeline::new(seeded());

        let built = pipeline.build_institution("A", catalog.institution_mut("A"));

        // MATH-111 -> MATH-211, MATH-211 -> PHYS-116, PHYS-111 -> PHYS-116
        assert_eq!(built.edges.len(), 3);
        assert_eq!(built.graph.vertex_count(), 4);
        assert_eq!(built.graph.placeholder_count(), 1);
        assert_eq!(built.unmatched, 0);
        assert_eq!(
            catalog.institution("A").unwrap().get("MATH-211").unwrap().requisite_text(),
            " Prerequisite: MATH 111"
        );
    }

    #[test]
    fn test_run_exports_every_department() {
        let mut catalog = catalog();
        let output = tempfile::tempdir().unwrap();
        let locator = TemplateScaffold::new(output.path());

        let report = Pipeline::new(seeded()).run(&mut catalog, &[], &locator).unwrap();

        assert!(report.is_success());
        assert_eq!(report.institutions.len(), 2);
        let units: Vec<_> = report
            .exported
            .iter()
            .map(|unit| format!("{}/{}", unit.institution, unit.department))
            .collect();
        assert_eq!(units, ["A/MATH", "A/PHYS", "S/CHEM"]);

        let written = fs::read_to_string(output.path().join("A").join("PHYS").join("data.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["nodes"].as_array().unwrap().len(), 3);
        assert_eq!(value["edges"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_run_filters_institutions() {
        let mut catalog = catalog();
        let output = tempfile::tempdir().unwrap();
        let locator = TemplateScaffold::new(output.path());

        let report = Pipeline::new(seeded())
            .run(&mut catalog, &["S".to_string()], &locator)
            .unwrap();

        assert_eq!(report.exported.len(), 1);
        assert!(!output.path().join("A").exists());
    }

    #[test]
    fn test_repeated_institution_runs_once() {
        let mut catalog = catalog();
        let output = tempfile::tempdir().unwrap();
        let locator = TemplateScaffold::new(output.path());
        let selected = ["S".to_string(), "A".to_string(), "S".to_string()];

        let report = Pipeline::new(seeded())
            .run(&mut catalog, &selected, &locator)
            .unwrap();

        let institutions: Vec<_> = report
            .institutions
            .iter()
            .map(|summary| summary.institution.as_str())
            .collect();
        assert_eq!(institutions, ["S", "A"]);
        assert_eq!(report.exported.len(), 3);
    }

    #[test]
    fn test_unknown_institution_is_fatal() {
        let mut catalog = catalog();
        let output = tempfile::tempdir().unwrap();
        let locator = TemplateScaffold::new(output.path());

        let err = Pipeline::new(seeded())
            .run(&mut catalog, &["Z".to_string()], &locator)
            .unwrap_err();
        assert!(matches!(err, PrereqsError::UnknownInstitution(code) if code == "Z"));
    }

    #[test]
    fn test_failing_department_is_isolated() {
        struct RejectPhysics(TemplateScaffold);

        impl OutputLocator for RejectPhysics {
            fn locate(&self, institution: &str, department: &str) -> Result<PathBuf, export::Error> {
                if department == "PHYS" {
                    return Err(export::Error::Location {
                        path: PathBuf::from(department),
                        source: std::io::Error::other("read-only"),
                    });
                }
                self.0.locate(institution, department)
            }
        }

        let mut catalog = catalog();
        let output = tempfile::tempdir().unwrap();
        let locator = RejectPhysics(TemplateScaffold::new(output.path()));

        let report = Pipeline::new(seeded()).run(&mut catalog, &[], &locator).unwrap();

        assert!(!report.is_success());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].department, "PHYS");
        assert_eq!(report.exported.len(), 2);
    }

    #[test]
    fn test_unleveled_codes_export() {
        let mut catalog = Catalog::new();
        catalog.institution_mut("H").insert(
            CourseCode::new("WRIT-A"),
            CourseRecord::new("Writing", "", "", "Writing", "Essays."),
        );

        let pipeline = Pipeline::new(seeded());
        let built = pipeline.build_institution("H", catalog.institution_mut("H"));
        let document = pipeline.export_department(
            &built.graph,
            catalog.institution("H").unwrap(),
            "WRIT",
            &mut StdRng::seed_from_u64(1),
        );

        assert_eq!(document.nodes.len(), 1);
        assert!(document.edges.is_empty());
    }
}
