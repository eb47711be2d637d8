//! Layout engine selection.
//!
//! Two engines are available, chosen by [`EngineKind`]:
//!
//! - [`EngineKind::Tiered`] places vertices in course-level tiers and orders
//!   each tier by barycenter sweeps.
//! - [`EngineKind::Sugiyama`] delegates to the `rust-sugiyama` crate, which
//!   assigns its own layers, and falls back to the tiered engine on failure.
//!
//! Engines are created through [`EngineBuilder`].

mod sugiyama;
mod tiered;

use serde::Deserialize;

use crate::{config::LayoutConfig, graph::Subgraph, layout::Layout};

/// Trait implemented by every layout engine.
pub trait LayoutEngine {
    /// Calculates a position for every vertex of the subgraph.
    ///
    /// Must terminate and place every vertex even when the subgraph is cyclic.
    fn calculate(&self, subgraph: &Subgraph) -> Layout;
}

/// Available layout algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    #[default]
    Tiered,
    /// Layers come from rust-sugiyama rather than course level, and
    /// `max_iterations` applies only to its tiered fallback.
    Sugiyama,
}

/// Builder for creating and configuring layout engines.
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    max_iterations: usize,
    horizontal_spacing: f64,
    vertical_spacing: f64,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBuilder {
    /// Create a new engine builder with default settings.
    pub fn new() -> Self {
        Self {
            max_iterations: 1000,
            horizontal_spacing: 1.0,
            vertical_spacing: 1.0,
        }
    }

    /// Create a builder carrying the settings of a [`LayoutConfig`].
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new()
            .with_max_iterations(config.max_iterations())
            .with_horizontal_spacing(config.horizontal_spacing())
            .with_vertical_spacing(config.vertical_spacing())
    }

    /// Set the bound on crossing-minimisation sweeps.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the distance between neighbouring vertices of one tier.
    pub fn with_horizontal_spacing(mut self, spacing: f64) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    /// Set the distance between consecutive tiers.
    pub fn with_vertical_spacing(mut self, spacing: f64) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    fn tiered(&self) -> tiered::Engine {
        let mut engine = tiered::Engine::new();
        engine
            .set_max_iterations(self.max_iterations)
            .set_horizontal_spacing(self.horizontal_spacing)
            .set_vertical_spacing(self.vertical_spacing);
        engine
    }

    /// Build an engine of the requested kind.
    pub fn build(&self, kind: EngineKind) -> Box<dyn LayoutEngine> {
        match kind {
            EngineKind::Tiered => Box::new(self.tiered()),
            EngineKind::Sugiyama => {
                let mut engine = sugiyama::Engine::new(self.tiered());
                engine
                    .set_horizontal_spacing(self.horizontal_spacing)
                    .set_vertical_spacing(self.vertical_spacing);
                Box::new(engine)
            }
        }
    }
}
