//! CLI logic for the prerequisite graph exporter.
//!
//! This module contains the core CLI logic: configuration loading, catalog
//! merging and persistence, and the batch run over all departments.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use prereqs::{Pipeline, PrereqsError, RunReport, catalog::Catalog, export::TemplateScaffold};

/// Run the prereqs CLI application
///
/// Reads the catalog, merges fresh listings into it when `--merge` is given
/// (rewriting the catalog file), then exports one document per department.
///
/// # Errors
///
/// Returns `PrereqsError` for:
/// - Configuration loading errors
/// - Unreadable or invalid catalog and listing files
/// - An unwritable catalog file
/// - Unknown institutions
///
/// Failures of single departments do not abort the run; they are listed in
/// the returned [`RunReport`].
pub fn run(args: &Args) -> Result<RunReport, PrereqsError> {
    info!(
        catalog_path = args.catalog,
        output_dir = args.output;
        "Processing catalog"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(seed) = args.seed {
        app_config.export_mut().set_seed(seed);
    }
    if let Some(template) = &args.template {
        app_config.export_mut().set_template_dir(template);
    }

    let mut catalog = Catalog::from_json(&fs::read_to_string(&args.catalog)?)?;

    if let Some(listings) = &args.merge {
        let fresh = Catalog::from_json(&fs::read_to_string(listings)?)?;
        catalog.merge(fresh);
        fs::write(&args.catalog, catalog.to_json()?)?;
        info!(catalog_path = args.catalog, listings; "Merged listings into catalog");
    }

    let mut locator = TemplateScaffold::new(&args.output);
    if let Some(template) = app_config.export().template_dir() {
        locator = locator.with_template(template);
    }

    let pipeline = Pipeline::new(app_config);
    let report = pipeline.run(&mut catalog, &args.institutions, &locator)?;

    info!(
        exported = report.exported.len(),
        failed = report.failures.len();
        "Catalog processed"
    );

    Ok(report)
}
