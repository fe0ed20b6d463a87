// src/scene/mod.rs
//! Derived view of the catalog for one frame of rendering.
//!
//! Responsibilities
//! - Resolve every course's status against the completed set
//! - Build the layout graph from prerequisite pairs whose endpoints both exist
//! - Attach styled edge descriptors and per-node dimming to the placed nodes
//! - Locate nodes by search query and produce camera targets

mod progress;
mod status;
mod style;

pub use progress::{CategoryProgress, UNCATEGORIZED, category_progress};
pub use status::{CourseStatus, derive_status, resolve_statuses};
pub use style::{EdgeStyle, edge_style};

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::catalog::Catalog;
use crate::layout::{LayoutGraph, LayoutSettings, Point, compute_layout};

/// Which nodes to de-emphasize when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FilterMode {
    #[default]
    All,
    Next,
    Completed,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Next => "next",
            FilterMode::Completed => "completed",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "next" => Ok(FilterMode::Next),
            "completed" => Ok(FilterMode::Completed),
            other => Err(format!("unknown filter mode '{other}'")),
        }
    }
}

/// Whether a node is shown dimmed under the given filter.
///
/// Dimming never removes a node from the scene, moves it, or changes its
/// status. Under `next` both unlocked and completed nodes stay at full
/// emphasis so the next available courses keep their context.
pub fn is_dimmed(mode: FilterMode, status: CourseStatus) -> bool {
    match mode {
        FilterMode::All => false,
        FilterMode::Next => status == CourseStatus::Locked,
        FilterMode::Completed => status != CourseStatus::Completed,
    }
}

/// A placed course card. `position` is the card's top-left corner.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub id: String,
    pub title: String,
    pub category: Option<String>,
    pub status: CourseStatus,
    pub dimmed: bool,
    pub position: Point,
    pub rank: usize,
}

/// A styled prerequisite edge between two placed nodes.
#[derive(Debug, Clone)]
pub struct SceneEdge {
    pub from: String,
    pub to: String,
    /// True when the prerequisite endpoint is completed.
    pub active: bool,
    pub style: EdgeStyle,
}

/// Where to point the camera after a search hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

/// Everything the rendering surface needs for one frame. Nodes keep catalog
/// order so search resolves ties the same way every time.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
    settings: LayoutSettings,
}

impl Scene {
    /// Find the first node whose title or ID contains the query, ignoring
    /// case, and return a camera target centered on it at a fixed zoom.
    pub fn focus(&self, query: &str) -> Option<CameraTarget> {
        if query.is_empty() {
            return None;
        }
        let q = query.to_lowercase();
        self.nodes
            .iter()
            .find(|n| n.title.to_lowercase().contains(&q) || n.id.to_lowercase().contains(&q))
            .map(|n| CameraTarget {
                x: n.position.x + self.settings.node_width / 2.0,
                y: n.position.y + self.settings.node_height / 2.0,
                zoom: 1.2,
            })
    }
}

/// Derive a full scene from the catalog, the completed set, and a filter.
///
/// Statuses consider every prerequisite ID, known or not. The layout graph
/// only keeps edges whose endpoints both exist in the catalog, and duplicate
/// prerequisite entries collapse to a single edge.
pub fn build_scene(
    catalog: &Catalog,
    completed: &HashSet<String>,
    filter: FilterMode,
    settings: &LayoutSettings,
) -> Scene {
    let statuses = resolve_statuses(catalog.courses(), completed);

    let mut graph = LayoutGraph::new(catalog.len());
    let mut edges = Vec::new();
    let mut seen = HashSet::new();

    for (to_ix, course) in catalog.courses().iter().enumerate() {
        for prereq in &course.prerequisites {
            let Some(from_ix) = catalog.position(prereq) else {
                continue;
            };
            if !seen.insert((from_ix, to_ix)) {
                continue;
            }
            graph.add_edge(from_ix, to_ix);
            edges.push(SceneEdge {
                from: prereq.clone(),
                to: course.id.clone(),
                active: completed.contains(prereq),
                style: edge_style(prereq, completed),
            });
        }
    }

    let layout = compute_layout(&graph, settings);

    let nodes = catalog
        .courses()
        .iter()
        .enumerate()
        .map(|(ix, course)| {
            let status = statuses
                .get(&course.id)
                .copied()
                .unwrap_or(CourseStatus::Locked);
            SceneNode {
                id: course.id.clone(),
                title: course.title.clone(),
                category: course.category.clone(),
                status,
                dimmed: is_dimmed(filter, status),
                position: Point {
                    x: layout.centers[ix].x - settings.node_width / 2.0,
                    y: layout.centers[ix].y - settings.node_height / 2.0,
                },
                rank: layout.ranks[ix],
            }
        })
        .collect();

    Scene {
        nodes,
        edges,
        settings: *settings,
    }
}
