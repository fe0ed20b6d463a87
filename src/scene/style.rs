// src/scene/style.rs

use std::collections::HashSet;

const ACTIVE_STROKE: &str = "#10b981";
const INACTIVE_STROKE: &str = "#4b5563";

/// Visual emphasis for one prerequisite edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStyle {
    pub stroke: &'static str,
    pub stroke_width: f64,
    pub opacity: f64,
    pub animated: bool,
}

/// Style an edge from its prerequisite endpoint.
///
/// An edge is active exactly when the prerequisite course is completed.
/// The dependent node's own status never enters into it.
pub fn edge_style(prereq_id: &str, completed: &HashSet<String>) -> EdgeStyle {
    if completed.contains(prereq_id) {
        EdgeStyle {
            stroke: ACTIVE_STROKE,
            stroke_width: 2.0,
            opacity: 1.0,
            animated: true,
        }
    } else {
        EdgeStyle {
            stroke: INACTIVE_STROKE,
            stroke_width: 1.0,
            opacity: 0.5,
            animated: false,
        }
    }
}
