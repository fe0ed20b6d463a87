// src/layout/mod.rs
//! Layered graph layout.
//!
//! Responsibilities
//! - Break cycles by reversing back edges found along a depth-first walk
//! - Assign every node a rank via longest-path over the acyclic edge set
//! - Order nodes within each rank by barycenter sweeps to reduce crossings
//! - Pack ranks into centered rows and give every node a center coordinate

mod order;
mod position;
mod rank;

pub use position::Point;

use tracing::debug;

/// Spacing knobs for the layout passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSettings {
    /// Horizontal gap between neighbouring nodes in a rank.
    pub nodesep: f64,
    /// Vertical gap between ranks.
    pub ranksep: f64,
    pub node_width: f64,
    pub node_height: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            nodesep: 50.0,
            ranksep: 100.0,
            node_width: 240.0,
            node_height: 120.0,
        }
    }
}

/// Input graph for the layout passes. Nodes are dense indices `0..node_count`.
#[derive(Debug, Clone, Default)]
pub struct LayoutGraph {
    node_count: usize,
    edges: Vec<(usize, usize)>,
}

impl LayoutGraph {
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Vec::new(),
        }
    }

    /// Add a directed edge. Out-of-range endpoints and duplicates are ignored.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        if from >= self.node_count || to >= self.node_count {
            return;
        }
        if self.edges.contains(&(from, to)) {
            return;
        }
        self.edges.push((from, to));
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
}

/// Computed placement for every node of a [`LayoutGraph`].
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub centers: Vec<Point>,
    pub ranks: Vec<usize>,
}

/// Run the full pipeline: cycle breaking, ranking, ordering, positioning.
pub fn compute_layout(graph: &LayoutGraph, settings: &LayoutSettings) -> Layout {
    let acyclic = rank::break_cycles(graph.node_count(), graph.edges());
    let ranks = rank::assign_ranks(graph.node_count(), &acyclic);
    let rows = order::order_ranks(graph.node_count(), &acyclic, &ranks);
    let centers = position::assign_centers(&rows, graph.node_count(), settings);
    debug!(
        nodes = graph.node_count(),
        edges = graph.edges().len(),
        ranks = rows.len(),
        "layout computed"
    );
    Layout { centers, ranks }
}
