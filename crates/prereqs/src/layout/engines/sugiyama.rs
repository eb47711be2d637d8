//! Sugiyama (hierarchical) layout engine
//!
//! Uses the rust-sugiyama implementation, which assigns layers itself rather
//! than by course level, so `y` follows the longest prerequisite chain and
//! courses of one level may land on different layers. rust-sugiyama runs its
//! own crossing reduction; `max_iterations` only bounds the tiered fallback.
//! Connected components are placed side by side and vertices without edges
//! in a row beneath them. Falls back to the tiered engine when rust-sugiyama
//! panics or returns nothing.

use std::{panic, thread};

use log::{debug, warn};
use rust_sugiyama::configure::Config;

use super::tiered;
use crate::{
    graph::Subgraph,
    layout::{Layout, Point, engines::LayoutEngine, to_digraph, warn_if_cyclic},
};

/// Spacing rust-sugiyama is asked to leave between vertices of one layer.
const VERTEX_SPACING: f64 = 3.0;

/// `(vertex, x, y)` triples of each connected component.
type Components = Vec<Vec<(usize, f64, f64)>>;

/// The Sugiyama layout engine.
#[derive(Debug, Clone)]
pub struct Engine {
    /// Horizontal spacing between neighbouring vertices
    horizontal_spacing: f64,

    /// Vertical spacing between layers
    vertical_spacing: f64,

    /// Engine used when rust-sugiyama cannot produce a layout
    fallback: tiered::Engine,
}

impl Engine {
    /// Create a new Sugiyama layout engine
    pub fn new(fallback: tiered::Engine) -> Self {
        Self {
            horizontal_spacing: 1.0,
            vertical_spacing: 1.0,
            fallback,
        }
    }

    /// Set the horizontal spacing between neighbouring vertices
    pub fn set_horizontal_spacing(&mut self, spacing: f64) -> &mut Self {
        self.horizontal_spacing = spacing;
        self
    }

    /// Set the vertical spacing between layers
    pub fn set_vertical_spacing(&mut self, spacing: f64) -> &mut Self {
        self.vertical_spacing = spacing;
        self
    }

    /// Places one connected component's coordinates at `offset_x`.
    ///
    /// Returns the horizontal extent used and the number of layers.
    fn place_component(
        &self,
        coords: &[(usize, f64, f64)],
        offset_x: f64,
        positions: &mut [Option<Point>],
    ) -> (f64, usize) {
        let min_x = coords.iter().map(|c| c.1).fold(f64::INFINITY, f64::min);
        let max_x = coords.iter().map(|c| c.1).fold(f64::NEG_INFINITY, f64::max);

        let mut layers: Vec<f64> = coords.iter().map(|c| c.2).collect();
        layers.sort_by(f64::total_cmp);
        layers.dedup();

        for &(id, x, y) in coords {
            let Some(slot) = positions.get_mut(id) else {
                debug!("Vertex {id} from rust-sugiyama result is out of range");
                continue;
            };
            let layer = layers.partition_point(|&value| value < y);
            *slot = Some(Point::new(
                offset_x + (x - min_x) / VERTEX_SPACING * self.horizontal_spacing,
                layer as f64 * self.vertical_spacing,
            ));
        }

        let extent = (max_x - min_x) / VERTEX_SPACING * self.horizontal_spacing;
        (extent, layers.len())
    }

    /// Turns the outcome of a rust-sugiyama run into a layout.
    fn arrange(&self, subgraph: &Subgraph, layouts: thread::Result<Components>) -> Layout {
        let components = match layouts {
            Ok(components) if !components.is_empty() => components,
            Ok(_) => {
                warn!("rust-sugiyama returned empty layout results, using tiered layout");
                return self.fallback.calculate(subgraph);
            }
            Err(err) => {
                let message = err
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| err.downcast_ref::<&str>().copied())
                    .unwrap_or("unknown error");
                warn!(message; "rust-sugiyama panicked, using tiered layout");
                return self.fallback.calculate(subgraph);
            }
        };

        let mut positions: Vec<Option<Point>> = vec![None; subgraph.vertex_count()];
        let mut offset_x = 0.0;
        let mut layer_count = 0;
        for coords in &components {
            let (extent, layers) = self.place_component(coords, offset_x, &mut positions);
            offset_x += extent + self.horizontal_spacing;
            layer_count = layer_count.max(layers);
        }

        // Vertices rust-sugiyama never saw have no edges; they go in a row beneath.
        let isolated_y = layer_count as f64 * self.vertical_spacing;
        let mut isolated_x = 0.0;
        let positions: Vec<Point> = positions
            .into_iter()
            .map(|position| {
                position.unwrap_or_else(|| {
                    let point = Point::new(isolated_x, isolated_y);
                    isolated_x += self.horizontal_spacing;
                    point
                })
            })
            .collect();

        debug!(
            department = subgraph.department(),
            components = components.len(),
            layers = layer_count;
            "Sugiyama layout calculated",
        );
        Layout::new(positions)
    }
}

impl LayoutEngine for Engine {
    fn calculate(&self, subgraph: &Subgraph) -> Layout {
        let count = subgraph.vertex_count();
        if count == 0 {
            return Layout::default();
        }

        let graph = to_digraph(subgraph);
        warn_if_cyclic(subgraph, &graph);

        // rust-sugiyama wants simple edges: no self-loops, no parallels.
        let mut edges: Vec<(u32, u32)> = subgraph
            .edges()
            .filter(|(_, edge)| edge.source() != edge.target())
            .map(|(_, edge)| (edge.source().index() as u32, edge.target().index() as u32))
            .collect();
        edges.sort_unstable();
        edges.dedup();

        if edges.is_empty() {
            debug!("Subgraph has no edges, using tiered layout");
            return self.fallback.calculate(subgraph);
        }

        debug!(
            "Applying Sugiyama algorithm to graph with {} vertices and {} edges",
            count,
            edges.len()
        );

        // Try the rust_sugiyama crate, catching any panics
        let layouts = panic::catch_unwind(move || {
            let config = Config {
                minimum_length: 1,
                vertex_spacing: VERTEX_SPACING,
                ..Default::default()
            };
            rust_sugiyama::from_edges(&edges, &config)
                .iter()
                .map(|(coords, ..)| {
                    coords
                        .iter()
                        .map(|&(id, (x, y))| (id as usize, x as f64, y as f64))
                        .collect::<Vec<_>>()
                })
                .collect::<Components>()
        });

        self.arrange(subgraph, layouts)
    }
}
