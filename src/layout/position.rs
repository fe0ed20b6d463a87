// src/layout/position.rs

use crate::layout::LayoutSettings;

/// A 2D coordinate in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Assign a center coordinate to every node.
///
/// Nodes in a rank are packed left to right, `node_width + nodesep` apart;
/// each rank is then centered against the widest rank. Ranks advance
/// downward by `node_height + ranksep`. With positive node dimensions no
/// two nodes can share a center: same-rank neighbours differ in x by at
/// least a node width, different ranks differ in y by at least a node
/// height.
pub fn assign_centers(
    rows: &[Vec<usize>],
    node_count: usize,
    settings: &LayoutSettings,
) -> Vec<Point> {
    let mut centers = vec![Point::default(); node_count];

    let max_width = rows
        .iter()
        .map(|row| row_width(row.len(), settings))
        .fold(0.0f64, f64::max);

    for (rank, row) in rows.iter().enumerate() {
        let offset = (max_width - row_width(row.len(), settings)) / 2.0;
        let y = rank as f64 * (settings.node_height + settings.ranksep) + settings.node_height / 2.0;

        for (slot, &v) in row.iter().enumerate() {
            let x = offset
                + slot as f64 * (settings.node_width + settings.nodesep)
                + settings.node_width / 2.0;
            centers[v] = Point { x, y };
        }
    }

    centers
}

fn row_width(len: usize, settings: &LayoutSettings) -> f64 {
    if len == 0 {
        0.0
    } else {
        len as f64 * settings.node_width + (len as f64 - 1.0) * settings.nodesep
    }
}
