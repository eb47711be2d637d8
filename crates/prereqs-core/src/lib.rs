//! Prereqs Core Types and Definitions
//!
//! This crate provides the foundational vocabulary shared by the prerequisite
//! graph builder. It includes:
//!
//! - **Course codes**: Department/number resolution ([`code::CourseCode`])
//! - **Records**: Catalog entries as scraped from a course listing ([`record::CourseRecord`])
//! - **Catalogs**: Insertion-ordered per-institution record sets ([`catalog`] module)
//! - **Colors**: RGB colors in the notation the front end expects ([`color::Color`])

pub mod catalog;
pub mod code;
pub mod color;
pub mod record;
