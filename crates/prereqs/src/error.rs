//! Error types for prerequisite graph operations.
//!
//! This module provides the main error type [`PrereqsError`] which wraps
//! the error conditions that can occur while processing a catalog.

use std::io;

use thiserror::Error;

use prereqs_core::catalog::CatalogError;

/// The main error type for prerequisite graph operations.
#[derive(Debug, Error)]
pub enum PrereqsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown institution: {0}")]
    UnknownInstitution(String),
}
