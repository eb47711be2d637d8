//! Course code resolution.
//!
//! A course code is a department segment (one or more hyphen-joined tokens)
//! followed by a trailing numeric segment, e.g. `ENGL-100` or `COMM-DIS-201`.
//! [`CourseCode`] derives the department code and course level from that
//! shape without any catalog context.
//!
//! # Edge cases
//!
//! A code without any hyphen has no department segment. Such codes are not
//! supported by the scheme: [`CourseCode::department`] returns an empty
//! string and [`CourseCode::number`] returns the whole code.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Separator between the segments of a course code.
pub const SEGMENT_SEPARATOR: char = '-';

/// A course code, unique within an institution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseCode(String);

impl CourseCode {
    /// Creates a course code from its textual form.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Joins a department code and a course number into a course code.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prereqs_core::code::CourseCode;
    /// let code = CourseCode::from_parts("MATH", "101");
    /// assert_eq!(code.as_str(), "MATH-101");
    /// ```
    pub fn from_parts(department: &str, number: &str) -> Self {
        Self(format!("{department}{SEGMENT_SEPARATOR}{number}"))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the department code: every segment except the last, joined by hyphens.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prereqs_core::code::CourseCode;
    /// assert_eq!(CourseCode::new("ENGL-100").department(), "ENGL");
    /// assert_eq!(CourseCode::new("COMM-DIS-201").department(), "COMM-DIS");
    /// ```
    pub fn department(&self) -> &str {
        department_of(&self.0)
    }

    /// Returns the trailing segment of the code (the course number).
    pub fn number(&self) -> &str {
        number_of(&self.0)
    }

    /// Returns the course level: the leading digit of the course number.
    ///
    /// Returns `None` when the number does not start with an ASCII digit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prereqs_core::code::CourseCode;
    /// assert_eq!(CourseCode::new("MATH-235").level(), Some(2));
    /// assert_eq!(CourseCode::new("MATH-H01").level(), None);
    /// ```
    pub fn level(&self) -> Option<u8> {
        level_of(&self.0)
    }
}

/// Returns the department segment of a textual course code.
pub fn department_of(code: &str) -> &str {
    code.rsplit_once(SEGMENT_SEPARATOR)
        .map_or("", |(department, _)| department)
}

/// Returns the numeric (final) segment of a textual course code.
pub fn number_of(code: &str) -> &str {
    code.rsplit_once(SEGMENT_SEPARATOR)
        .map_or(code, |(_, number)| number)
}

/// Returns the level (leading digit of the final segment) of a textual course code.
pub fn level_of(code: &str) -> Option<u8> {
    number_of(code)
        .chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .map(|digit| digit as u8)
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CourseCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CourseCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CourseCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for CourseCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}
