//! Tiered (level-based) layout engine
//!
//! Vertices are placed in horizontal tiers by course level, then each tier is
//! reordered with alternating downward and upward barycenter sweeps to reduce
//! edge crossings. Sweeps stop once two consecutive sweeps leave every tier
//! unchanged, or after the configured maximum.

use log::debug;

use crate::{
    graph::Subgraph,
    layout::{Layout, Point, engines::LayoutEngine, tiers, to_digraph, warn_if_cyclic},
};

/// The tiered layout engine.
#[derive(Debug, Clone)]
pub struct Engine {
    /// Upper bound on barycenter sweeps
    max_iterations: usize,

    /// Horizontal spacing between vertices of one tier
    horizontal_spacing: f64,

    /// Vertical spacing between tiers
    vertical_spacing: f64,
}

impl Engine {
    /// Create a new tiered layout engine
    pub fn new() -> Self {
        Self {
            max_iterations: 1000,
            horizontal_spacing: 1.0,
            vertical_spacing: 1.0,
        }
    }

    /// Set the maximum number of sweeps
    pub fn set_max_iterations(&mut self, max_iterations: usize) -> &mut Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the horizontal spacing between vertices of one tier
    pub fn set_horizontal_spacing(&mut self, spacing: f64) -> &mut Self {
        self.horizontal_spacing = spacing;
        self
    }

    /// Set the vertical spacing between tiers
    pub fn set_vertical_spacing(&mut self, spacing: f64) -> &mut Self {
        self.vertical_spacing = spacing;
        self
    }

    /// Reorders vertices within rows to reduce crossings.
    ///
    /// Returns the number of sweeps performed.
    fn minimize_crossings(
        &self,
        rows: &mut [Vec<usize>],
        row_of: &[usize],
        neighbors: &[Vec<usize>],
    ) -> usize {
        let mut position = vec![0; row_of.len()];
        for row in rows.iter() {
            for (pos, &vertex) in row.iter().enumerate() {
                position[vertex] = pos;
            }
        }

        let mut sweeps = 0;
        let mut stable_sweeps = 0;
        while sweeps < self.max_iterations && stable_sweeps < 2 {
            let downward = sweeps % 2 == 0;
            sweeps += 1;

            let row_order: Vec<usize> = if downward {
                (0..rows.len()).collect()
            } else {
                (0..rows.len()).rev().collect()
            };

            let mut changed = false;
            for r in row_order {
                let mut keyed: Vec<(usize, f64)> = rows[r]
                    .iter()
                    .map(|&vertex| {
                        let fixed: Vec<usize> = neighbors[vertex]
                            .iter()
                            .copied()
                            .filter(|&other| {
                                if downward {
                                    row_of[other] < r
                                } else {
                                    row_of[other] > r
                                }
                            })
                            .collect();

                        let key = if fixed.is_empty() {
                            position[vertex] as f64
                        } else {
                            fixed.iter().map(|&other| position[other] as f64).sum::<f64>()
                                / fixed.len() as f64
                        };
                        (vertex, key)
                    })
                    .collect();

                keyed.sort_by(|a, b| a.1.total_cmp(&b.1));
                let reordered: Vec<usize> = keyed.into_iter().map(|(vertex, _)| vertex).collect();

                if reordered != rows[r] {
                    changed = true;
                    for (pos, &vertex) in reordered.iter().enumerate() {
                        position[vertex] = pos;
                    }
                    rows[r] = reordered;
                }
            }

            if changed {
                stable_sweeps = 0;
            } else {
                stable_sweeps += 1;
            }
        }

        sweeps
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
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
        let tiers = tiers::assign(subgraph, &graph);

        let mut tier_values = tiers.clone();
        tier_values.sort_unstable();
        tier_values.dedup();

        let row_of: Vec<usize> = tiers
            .iter()
            .map(|tier| tier_values.binary_search(tier).unwrap_or_else(|idx| idx))
            .collect();

        let mut rows: Vec<Vec<usize>> = vec![Vec::new(); tier_values.len()];
        for (vertex, &row) in row_of.iter().enumerate() {
            rows[row].push(vertex);
        }

        let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); count];
        for (_, edge) in subgraph.edges() {
            let (source, target) = (edge.source().index(), edge.target().index());
            if source != target {
                neighbors[source].push(target);
                neighbors[target].push(source);
            }
        }

        let sweeps = self.minimize_crossings(&mut rows, &row_of, &neighbors);
        debug!(
            department = subgraph.department(),
            tiers = rows.len(),
            sweeps;
            "Tiered layout calculated",
        );

        let mut positions = vec![Point::default(); count];
        for (row, vertices) in rows.iter().enumerate() {
            let center = (vertices.len() as f64 - 1.0) / 2.0;
            let y = f64::from(tier_values[row]) * self.vertical_spacing;
            for (pos, &vertex) in vertices.iter().enumerate() {
                let x = (pos as f64 - center) * self.horizontal_spacing;
                positions[vertex] = Point::new(x, y);
            }
        }

        Layout::new(positions)
    }
}
