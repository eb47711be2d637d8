//! Department name to department code mapping.
//!
//! Catalog descriptions often refer to other departments by their printed
//! name ("Prerequisite: Mathematics 101") rather than by code. The
//! [`DepartmentNameMap`] of an institution rewrites those names to codes so
//! the extractor sees `MATH 101` either way. Department naming is local to an
//! institution, so the map is rebuilt for every institution.

use std::borrow::Cow;

use indexmap::IndexSet;
use log::debug;

use prereqs_core::catalog::InstitutionCatalog;

/// Distinct `(department code, department name)` pairs of one institution.
#[derive(Debug, Clone, Default)]
pub struct DepartmentNameMap {
    entries: IndexSet<(String, String)>,
}

impl DepartmentNameMap {
    /// Pairs every record's department code with its printed department name.
    pub fn from_catalog(catalog: &InstitutionCatalog) -> Self {
        let entries: IndexSet<(String, String)> = catalog
            .iter()
            .map(|(code, record)| {
                (
                    code.department().to_string(),
                    record.department_name().to_string(),
                )
            })
            .collect();

        debug!(departments = entries.len(); "Built department name map");
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces every occurrence of a known department name with its code.
    ///
    /// Pairs are applied in first-seen order, each on the output of the
    /// previous one. Names with no known code are left as they are, and empty
    /// names never match.
    pub fn substitute<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut text = Cow::Borrowed(text);
        for (code, name) in &self.entries {
            if !name.is_empty() && text.contains(name.as_str()) {
                text = Cow::Owned(text.replace(name.as_str(), code));
            }
        }
        text
    }
}
