// src/render.rs

//! Plain-text rendering of scenes, progress, and notices.
//!
//! Everything here returns a `String`; the session runtime and `--once`
//! mode decide where it goes. Keeping the renderers pure makes them easy
//! to assert on in tests.

use std::cmp::Ordering;

use crate::catalog::{Course, LoadReport};
use crate::scene::{CameraTarget, CategoryProgress, CourseStatus, Scene, SceneNode};

/// Render the course map tier by tier.
///
/// Within a tier, nodes print left to right by x position, so the text
/// order matches the spatial order. Dimmed nodes are tagged rather than
/// hidden.
pub fn render_scene(scene: &Scene) -> String {
    if scene.nodes.is_empty() {
        return "The catalog is empty.\n".to_string();
    }

    let mut out = format!("Course map ({} courses)\n", scene.nodes.len());

    let tier_count = scene.nodes.iter().map(|n| n.rank + 1).max().unwrap_or(0);
    for tier in 0..tier_count {
        let mut row: Vec<&SceneNode> = scene.nodes.iter().filter(|n| n.rank == tier).collect();
        row.sort_by(|a, b| {
            a.position
                .x
                .partial_cmp(&b.position.x)
                .unwrap_or(Ordering::Equal)
        });

        out.push_str(&format!("Tier {tier}:\n"));
        for node in row {
            out.push_str(&format!(
                "  {} {}  {}",
                status_mark(node.status),
                node.id,
                node.title
            ));
            if let Some(category) = node.category.as_deref() {
                if !category.is_empty() {
                    out.push_str(&format!("  ({category})"));
                }
            }
            out.push_str(&format!(
                "  @({:.0},{:.0})",
                node.position.x, node.position.y
            ));
            if node.dimmed {
                out.push_str("  [dimmed]");
            }
            out.push('\n');
        }
    }

    let active = scene.edges.iter().filter(|e| e.active).count();
    out.push_str(&format!(
        "{} prerequisite edges, {} active\n",
        scene.edges.len(),
        active
    ));

    out
}

/// Render per-category completion bars plus the overall headline count.
pub fn render_progress(
    groups: &[CategoryProgress],
    completed_count: usize,
    course_count: usize,
) -> String {
    let mut out = format!("Progress: {completed_count}/{course_count} completed\n");

    if groups.is_empty() {
        out.push_str("  (no courses)\n");
        return out;
    }

    let width = groups.iter().map(|g| g.category.len()).max().unwrap_or(0);
    for group in groups {
        out.push_str(&format!(
            "  {:<width$}  {}/{}  {:>3}%",
            group.category,
            group.completed,
            group.total,
            group.percent(),
        ));
        if group.is_complete() {
            out.push_str("  (complete)");
        }
        out.push('\n');
    }

    out
}

/// Render one course's full details.
pub fn render_details(course: &Course, status: CourseStatus) -> String {
    let mut out = format!("{}: {}\n", course.id, course.title);

    if let Some(category) = course.category.as_deref() {
        if !category.is_empty() {
            out.push_str(&format!("  Category: {category}\n"));
        }
    }
    out.push_str(&format!("  Status: {}\n", status.as_str()));

    match course.description.as_deref() {
        Some(description) if !description.is_empty() => {
            out.push_str(&format!("  {description}\n"));
        }
        _ => out.push_str("  No description provided for this course.\n"),
    }

    if !course.prerequisites.is_empty() {
        out.push_str(&format!(
            "  Prerequisites: {}\n",
            course.prerequisites.join(", ")
        ));
    }

    if let Some(objectives) = &course.objectives {
        if !objectives.is_empty() {
            out.push_str("  Objectives:\n");
            for objective in objectives {
                out.push_str(&format!("    - {objective}\n"));
            }
        }
    }

    out
}

/// Render catalog load warnings, one line each.
pub fn render_load_report(report: &LoadReport) -> String {
    let mut out = String::new();

    for id in &report.duplicate_ids {
        out.push_str(&format!(
            "warning: duplicate course ID '{id}', the last occurrence wins\n"
        ));
    }
    for (course, prereq) in &report.dangling {
        out.push_str(&format!(
            "warning: '{course}' requires unknown course '{prereq}'\n"
        ));
    }
    if let Some(id) = &report.cycle {
        out.push_str(&format!(
            "warning: prerequisite cycle involving '{id}'; courses on the cycle stay locked\n"
        ));
    }

    out
}

/// Render a search camera target.
pub fn render_camera(target: &CameraTarget) -> String {
    format!(
        "Centering view on ({:.0}, {:.0}) at zoom {:.1}",
        target.x, target.y, target.zoom
    )
}

/// Command reference for the interactive console.
pub fn help_text() -> &'static str {
    "Commands:\n\
     \x20 toggle <course-id>        mark or unmark a course as completed\n\
     \x20 filter <all|next|completed>  choose which courses are dimmed\n\
     \x20 search <text>             center the view on a matching course\n\
     \x20 details <course-id>       show one course in full\n\
     \x20 map                       render the course map\n\
     \x20 progress                  per-category completion summary\n\
     \x20 load <path>               replace the catalog from a CSV file\n\
     \x20 load example              load the bundled example catalog\n\
     \x20 generate <topic>          ask the model for a new curriculum\n\
     \x20 reset                     clear all progress (asks to confirm)\n\
     \x20 help                      this text\n\
     \x20 quit                      exit"
}

fn status_mark(status: CourseStatus) -> &'static str {
    match status {
        CourseStatus::Completed => "[x]",
        CourseStatus::Unlocked => "[ ]",
        CourseStatus::Locked => "[-]",
    }
}
