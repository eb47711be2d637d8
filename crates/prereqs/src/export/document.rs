//! The node-link document read by the visualization front end.
//!
//! Field declaration order is the serialized key order.

use serde::Serialize;

use prereqs_core::color::Color;

/// A complete document for one (institution, department) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualizationDocument {
    pub edges: Vec<Edge>,
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// The course code.
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub id: String,
    pub attributes: NodeAttributes,
    pub color: Color,
    pub size: f64,
}

/// Details shown by the front end when a node is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeAttributes {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "Department Code")]
    pub department_code: String,

    /// Hyperlink markup, empty for placeholders.
    #[serde(rename = "Course Site")]
    pub course_site: String,

    #[serde(rename = "Requisite")]
    pub requisite: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub label: String,
    pub source: String,
    pub target: String,
    pub id: String,
    pub attributes: EdgeAttributes,
    /// Color of the target node's department.
    pub color: Color,
    pub size: f64,
}

/// Edges carry no details; serialized as an empty object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EdgeAttributes {}
