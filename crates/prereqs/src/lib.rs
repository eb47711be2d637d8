//! Prereqs - Prerequisite graphs mined from course catalogs.
//!
//! Course descriptions are scanned for prerequisite references, the
//! references become a directed dependency graph per institution, and each
//! department's neighbourhood of that graph is laid out in tiers and exported
//! as a node-link document for a graph-visualization front end.
//!
//! # Examples
//!
//! ```rust,no_run
//! use prereqs::{Pipeline, catalog::Catalog, config::AppConfig, export::TemplateScaffold};
//!
//! let json = std::fs::read_to_string("catalog.json").expect("Failed to read catalog");
//! let mut catalog = Catalog::from_json(&json).expect("Invalid catalog");
//!
//! let pipeline = Pipeline::new(AppConfig::default());
//! let report = pipeline
//!     .run(&mut catalog, &[], &TemplateScaffold::new("output"))
//!     .expect("Run failed");
//!
//! for unit in &report.exported {
//!     println!("{}/{}: {} nodes", unit.institution, unit.department, unit.nodes);
//! }
//! ```

pub mod config;
pub mod departments;
pub mod export;
pub mod extract;
pub mod graph;
pub mod layout;
pub mod pipeline;

mod error;

pub use prereqs_core::{catalog, code, color, record};

pub use error::PrereqsError;
pub use pipeline::{Pipeline, RunReport};
