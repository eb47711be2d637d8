//! Catalog records.
//!
//! A [`CourseRecord`] holds what the course listing publishes about one course.
//! The course code itself is the key the record is stored under in an
//! [`InstitutionCatalog`](crate::catalog::InstitutionCatalog).

use serde::{Deserialize, Serialize};

/// One course as published in an institution's catalog.
///
/// Field names on the wire follow the persisted catalog format: the offering
/// tag is stored as `date`, the department name as `department`, and the
/// derived requisite text as `prereqs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    title: String,

    url: String,

    /// Term and year the course was last offered, e.g. `2016F`.
    #[serde(rename = "date", default)]
    offering_tag: String,

    /// Department name as printed in the catalog.
    #[serde(rename = "department", default)]
    department_name: String,

    #[serde(default)]
    description: String,

    /// Sentences of the description that mention requisites.
    #[serde(rename = "prereqs", default)]
    requisite_text: String,
}

impl CourseRecord {
    /// Creates a record with empty requisite text.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        offering_tag: impl Into<String>,
        department_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            offering_tag: offering_tag.into(),
            department_name: department_name.into(),
            description: description.into(),
            requisite_text: String::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn offering_tag(&self) -> &str {
        &self.offering_tag
    }

    pub fn department_name(&self) -> &str {
        &self.department_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn requisite_text(&self) -> &str {
        &self.requisite_text
    }

    /// Replaces the requisite text derived from the description.
    pub fn set_requisite_text(&mut self, requisite_text: impl Into<String>) {
        self.requisite_text = requisite_text.into();
    }
}
