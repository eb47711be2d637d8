//! Configuration types for prerequisite graph export.
//!
//! This module provides configuration structures that control how department
//! subgraphs are laid out and exported. All types implement
//! [`serde::Deserialize`] with every field defaulted, so a partial TOML file
//! (or none at all) is a valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and export settings.
//! - [`LayoutConfig`] - Selects the [`EngineKind`] and its spacing and iteration bound.
//! - [`ExportConfig`] - Node/edge sizes, color seed, scaffold template and file name.
//!
//! # Example
//!
//! ```
//! # use prereqs::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().max_iterations(), 1000);
//! assert_eq!(config.export().file_name(), "data.json");
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::layout::EngineKind;

/// Top-level application configuration combining layout and export settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Export configuration section.
    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and export configurations.
    pub fn new(layout: LayoutConfig, export: ExportConfig) -> Self {
        Self { layout, export }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    /// Returns the export configuration for in-place overrides.
    pub fn export_mut(&mut self) -> &mut ExportConfig {
        &mut self.export
    }
}

/// Layout engine configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Layout algorithm used for every department subgraph.
    ///
    /// Only [`EngineKind::Tiered`] quantizes `y` by course level.
    engine: EngineKind,

    /// Upper bound on crossing-minimisation sweeps of the tiered engine,
    /// including when it stands in for the Sugiyama engine.
    max_iterations: usize,

    /// Distance between neighbouring vertices of one tier.
    horizontal_spacing: f64,

    /// Distance between consecutive tiers.
    vertical_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            max_iterations: 1000,
            horizontal_spacing: 1.0,
            vertical_spacing: 1.0,
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    pub fn new(
        engine: EngineKind,
        max_iterations: usize,
        horizontal_spacing: f64,
        vertical_spacing: f64,
    ) -> Self {
        Self {
            engine,
            max_iterations,
            horizontal_spacing,
            vertical_spacing,
        }
    }

    pub fn engine(&self) -> EngineKind {
        self.engine
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn horizontal_spacing(&self) -> f64 {
        self.horizontal_spacing
    }

    pub fn vertical_spacing(&self) -> f64 {
        self.vertical_spacing
    }
}

/// Export configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Size given to every exported node.
    node_size: f64,

    /// Size given to every exported edge.
    edge_size: f64,

    /// Seed pinning department colors; colors are random per run when absent.
    seed: Option<u64>,

    /// Directory copied into each department directory the first time it is created.
    template_dir: Option<PathBuf>,

    /// Name of the document written into each department directory.
    file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            node_size: 10.0,
            edge_size: 1.0,
            seed: None,
            template_dir: None,
            file_name: "data.json".to_string(),
        }
    }
}

impl ExportConfig {
    pub fn node_size(&self) -> f64 {
        self.node_size
    }

    pub fn edge_size(&self) -> f64 {
        self.edge_size
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn template_dir(&self) -> Option<&Path> {
        self.template_dir.as_deref()
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Pins department colors to the given seed.
    pub fn set_seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the scaffold template directory.
    pub fn set_template_dir(&mut self, template_dir: impl Into<PathBuf>) -> &mut Self {
        self.template_dir = Some(template_dir.into());
        self
    }
}
