//! Prerequisite extraction from free-text course descriptions.
//!
//! The extractor is a best-effort heuristic, not a parser of English:
//!
//! 1. Department names in the description are rewritten to department codes.
//! 2. The description is split into sentence-like units on `.` and newlines,
//!    and the units mentioning a requisite marker become the requisite text.
//! 3. The requisite text is split into tokens. Walking them left to right, a
//!    token equal to a known department code switches the current department,
//!    and a token equal to a known course number emits an edge from
//!    `<current department>-<number>` to the described course.
//!
//! The current department starts as the described course's own department.
//! A token that is both a department code and a course number only switches
//! the department. Edges are neither de-duplicated nor checked against the
//! catalog; numbers are matched against every number in the institution
//! regardless of department.

use std::collections::HashSet;

use log::{debug, trace};

use prereqs_core::{
    catalog::InstitutionCatalog,
    code::{CourseCode, SEGMENT_SEPARATOR},
};

use crate::departments::DepartmentNameMap;

/// Substrings marking a sentence as stating requisites. Matching is case-sensitive.
pub const REQUISITE_MARKERS: [&str; 7] = [
    "requisite",
    "Requisite",
    "Prerequisite",
    "Pre Req",
    "prereq",
    "Prereq",
    "prerequisite",
];

const SENTENCE_DELIMITERS: [char; 2] = ['\n', '.'];

const TOKEN_DELIMITERS: [char; 6] = [' ', SEGMENT_SEPARATOR, ',', '/', ';', '.'];

/// A directed prerequisite relation: `prerequisite` must be taken before `dependent`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrerequisiteEdge {
    prerequisite: CourseCode,
    dependent: CourseCode,
}

impl PrerequisiteEdge {
    pub fn new(prerequisite: CourseCode, dependent: CourseCode) -> Self {
        Self {
            prerequisite,
            dependent,
        }
    }

    pub fn prerequisite(&self) -> &CourseCode {
        &self.prerequisite
    }

    pub fn dependent(&self) -> &CourseCode {
        &self.dependent
    }
}

/// What the extractor found in one course description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseExtraction {
    /// The requisite-bearing sentences, space-joined.
    pub requisite_text: String,
    /// Edges pointing at the described course, in token order.
    pub edges: Vec<PrerequisiteEdge>,
}

/// Extracts prerequisite edges from the descriptions of one institution.
///
/// Holds the institution's department codes, course numbers and
/// [`DepartmentNameMap`], all derived once from its catalog.
#[derive(Debug)]
pub struct Extractor {
    departments: HashSet<String>,
    numbers: HashSet<String>,
    names: DepartmentNameMap,
}

impl Extractor {
    /// Derives the vocabulary of known codes and numbers from a catalog.
    pub fn new(catalog: &InstitutionCatalog) -> Self {
        let departments = catalog
            .codes()
            .map(|code| code.department().to_string())
            .collect();
        let numbers = catalog
            .codes()
            .map(|code| code.number().to_string())
            .collect();

        Self {
            departments,
            numbers,
            names: DepartmentNameMap::from_catalog(catalog),
        }
    }

    /// Returns whether `token` is a department code of this institution.
    pub fn is_department(&self, token: &str) -> bool {
        self.departments.contains(token)
    }

    /// Returns whether `token` is the number of some course at this institution.
    pub fn is_course_number(&self, token: &str) -> bool {
        self.numbers.contains(token)
    }

    /// Collects the requisite-bearing sentences of a description.
    ///
    /// Non-breaking spaces are normalised and department names rewritten to
    /// codes before the description is split.
    pub fn requisite_text(&self, description: &str) -> String {
        if description.is_empty() {
            return String::new();
        }

        let description = description.replace('\u{a0}', " ");
        let description = self.names.substitute(&description);

        description
            .split(SENTENCE_DELIMITERS)
            .filter(|unit| REQUISITE_MARKERS.iter().any(|marker| unit.contains(marker)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Walks the tokens of a requisite text and emits edges to `course`.
    pub fn edges(&self, course: &CourseCode, requisite_text: &str) -> Vec<PrerequisiteEdge> {
        let mut edges = Vec::new();
        let mut current_department = course.department();

        for token in requisite_text
            .split(TOKEN_DELIMITERS)
            .filter(|token| !token.is_empty())
        {
            if self.is_department(token) {
                trace!(course:%, token; "Department context switch");
                current_department = token;
            } else if self.is_course_number(token) {
                let prerequisite = CourseCode::from_parts(current_department, token);
                trace!(course:%, prerequisite:%; "Prerequisite found");
                edges.push(PrerequisiteEdge::new(prerequisite, course.clone()));
            }
        }

        edges
    }

    /// Extracts the requisite text and edges of one course.
    pub fn extract_course(&self, course: &CourseCode, description: &str) -> CourseExtraction {
        let requisite_text = self.requisite_text(description);
        let edges = self.edges(course, &requisite_text);
        CourseExtraction {
            requisite_text,
            edges,
        }
    }
}

/// Extracts the prerequisite edges of a whole institution.
///
/// Stores each course's requisite text on its record (empty when the
/// description names no requisite) and returns all edges in catalog order.
pub fn extract(catalog: &mut InstitutionCatalog) -> Vec<PrerequisiteEdge> {
    let extractor = Extractor::new(catalog);

    let mut edges = Vec::new();
    for (code, record) in catalog.iter_mut() {
        let extraction = extractor.extract_course(code, record.description());
        record.set_requisite_text(extraction.requisite_text);
        edges.extend(extraction.edges);
    }

    debug!(
        courses = catalog.len(),
        edges = edges.len();
        "Extracted prerequisite edges",
    );
    edges
}

/// Returns the courses whose requisite text is non-empty but which are an
/// endpoint of no edge.
///
/// A coarse self-check of the heuristic, not a validation gate.
pub fn unmatched_requisites<'a>(
    catalog: &'a InstitutionCatalog,
    edges: &[PrerequisiteEdge],
) -> Vec<&'a CourseCode> {
    let endpoints: HashSet<&str> = edges
        .iter()
        .flat_map(|edge| [edge.prerequisite().as_str(), edge.dependent().as_str()])
        .collect();

    catalog
        .iter()
        .filter(|(code, record)| {
            !record.requisite_text().is_empty() && !endpoints.contains(code.as_str())
        })
        .map(|(code, _)| code)
        .collect()
}
