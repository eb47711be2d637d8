//! Error adapter for converting prereqs errors to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's report formatting used in the CLI. Fatal errors and the
//! per-department failures of a finished run are rendered the same way.

use std::{error::Error as _, fmt};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use prereqs::{PrereqsError, RunReport, pipeline::UnitFailure};

/// Adapter for a fatal [`PrereqsError`].
pub struct ErrorAdapter<'a>(pub &'a PrereqsError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            PrereqsError::Io(_) => "prereqs::io",
            PrereqsError::Catalog(_) => "prereqs::catalog",
            PrereqsError::Config(_) => "prereqs::config",
            PrereqsError::UnknownInstitution(_) => "prereqs::institution",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            PrereqsError::UnknownInstitution(_) => Some(Box::new(
                "institution codes are the top-level keys of the catalog file",
            )),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Adapter for one department that failed to export.
pub struct UnitFailureAdapter<'a>(pub &'a UnitFailure);

impl fmt::Debug for UnitFailureAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for UnitFailureAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Department {}/{} was not exported: {}",
            self.0.institution, self.0.department, self.0.error
        )
    }
}

impl std::error::Error for UnitFailureAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0.error)
    }
}

impl MietteDiagnostic for UnitFailureAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("prereqs::export"))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// An error that stopped the run.
    Error(ErrorAdapter<'a>),
    /// A department that failed while the run carried on.
    Unit(UnitFailureAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Error(e) => fmt::Display::fmt(e, f),
            Reportable::Unit(u) => fmt::Display::fmt(u, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Error(e) => e.source(),
            Reportable::Unit(u) => u.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Error(e) => e.code(),
            Reportable::Unit(u) => u.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Error(e) => e.help(),
            Reportable::Unit(u) => u.help(),
        }
    }
}

/// Convert a fatal [`PrereqsError`] into a reportable error.
pub fn to_reportables(err: &PrereqsError) -> Vec<Reportable<'_>> {
    vec![Reportable::Error(ErrorAdapter(err))]
}

/// Convert the department failures of a run into reportable errors.
pub fn failures_to_reportables(report: &RunReport) -> Vec<Reportable<'_>> {
    report
        .failures
        .iter()
        .map(|failure| Reportable::Unit(UnitFailureAdapter(failure)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::{error::Error, path::PathBuf};

    use prereqs::export;

    use super::*;

    #[test]
    fn test_fatal_error() {
        let err = PrereqsError::UnknownInstitution("Z".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        assert_eq!(reportables[0].to_string(), "Unknown institution: Z");
        assert_eq!(
            reportables[0].code().map(|c| c.to_string()).as_deref(),
            Some("prereqs::institution")
        );
        assert!(reportables[0].help().is_some());
    }

    #[test]
    fn test_config_error_has_own_code() {
        let err = PrereqsError::Config("Failed to parse TOML configuration".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(
            reportables[0].code().map(|c| c.to_string()).as_deref(),
            Some("prereqs::config")
        );
        assert_eq!(
            reportables[0].to_string(),
            "Configuration error: Failed to parse TOML configuration"
        );
    }

    #[test]
    fn test_unit_failures() {
        let report = RunReport {
            failures: vec![UnitFailure {
                institution: "A".to_string(),
                department: "MATH".to_string(),
                error: export::Error::Location {
                    path: PathBuf::from("out/A/MATH"),
                    source: std::io::Error::other("denied"),
                },
            }],
            ..RunReport::default()
        };

        let reportables = failures_to_reportables(&report);

        assert_eq!(reportables.len(), 1);
        assert_eq!(
            reportables[0].to_string(),
            "Department A/MATH was not exported: Failed to prepare output directory out/A/MATH: denied"
        );
        assert!(reportables[0].source().is_some());
    }

    #[test]
    fn test_successful_run_has_nothing_to_report() {
        assert!(failures_to_reportables(&RunReport::default()).is_empty());
    }
}
