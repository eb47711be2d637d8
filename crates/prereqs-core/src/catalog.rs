//! Institution catalogs.
//!
//! The persisted catalog is a JSON object mapping institution codes to
//! objects that map course codes to [`CourseRecord`]s. Both levels keep
//! insertion order, so vertex ordering downstream (and with it the ids of
//! exported nodes) is reproducible from run to run.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{code::CourseCode, record::CourseRecord};

/// Errors raised while reading or writing a persisted catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// All institutions' course records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    institutions: IndexMap<String, InstitutionCatalog>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a catalog from its persisted JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if the text is not a valid catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the catalog to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns the catalog of one institution.
    pub fn institution(&self, code: &str) -> Option<&InstitutionCatalog> {
        self.institutions.get(code)
    }

    /// Returns the catalog of one institution, creating it if absent.
    pub fn institution_mut(&mut self, code: &str) -> &mut InstitutionCatalog {
        self.institutions.entry(code.to_string()).or_default()
    }

    /// Iterates over institutions in insertion order.
    pub fn institutions(&self) -> impl Iterator<Item = (&str, &InstitutionCatalog)> {
        self.institutions
            .iter()
            .map(|(code, catalog)| (code.as_str(), catalog))
    }

    /// Returns the number of institutions.
    pub fn len(&self) -> usize {
        self.institutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.institutions.is_empty()
    }

    /// Merges freshly fetched listings into this catalog.
    ///
    /// A fresh record replaces a stored record with the same code in place;
    /// new codes are appended. Institutions absent from `fresh` are untouched.
    pub fn merge(&mut self, fresh: Catalog) {
        for (institution, listings) in fresh.institutions {
            let target = self.institutions.entry(institution.clone()).or_default();
            let before = target.len();
            for (code, record) in listings.courses {
                target.insert(code, record);
            }
            debug!(
                institution,
                added = target.len() - before;
                "Merged fresh listings",
            );
        }
    }
}

/// The course records of one institution, keyed by course code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstitutionCatalog {
    courses: IndexMap<CourseCode, CourseRecord>,
}

impl InstitutionCatalog {
    /// Creates an empty institution catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any record with the same code in place.
    pub fn insert(&mut self, code: CourseCode, record: CourseRecord) -> Option<CourseRecord> {
        self.courses.insert(code, record)
    }

    pub fn get(&self, code: &str) -> Option<&CourseRecord> {
        self.courses.get(code)
    }

    /// Iterates over `(code, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&CourseCode, &CourseRecord)> {
        self.courses.iter()
    }

    /// Iterates mutably over `(code, record)` pairs in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&CourseCode, &mut CourseRecord)> {
        self.courses.iter_mut()
    }

    /// Iterates over course codes in insertion order.
    pub fn codes(&self) -> impl Iterator<Item = &CourseCode> {
        self.courses.keys()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Returns the distinct department codes of all records, sorted.
    pub fn departments(&self) -> BTreeSet<&str> {
        self.courses.keys().map(CourseCode::department).collect()
    }
}

impl FromIterator<(CourseCode, CourseRecord)> for InstitutionCatalog {
    fn from_iter<T: IntoIterator<Item = (CourseCode, CourseRecord)>>(iter: T) -> Self {
        Self {
            courses: iter.into_iter().collect(),
        }
    }
}
