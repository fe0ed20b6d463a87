// src/catalog/validate.rs

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::catalog::model::Course;

/// Non-fatal findings from loading a course list.
///
/// None of these reject the catalog. Dangling prerequisites and cycles are
/// tolerated at runtime (affected courses simply stay locked); the report
/// exists so a typo is visible at load time instead of silently producing a
/// course nobody can ever unlock.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub course_count: usize,

    /// IDs that appeared more than once; the last occurrence wins.
    pub duplicate_ids: Vec<String>,

    /// `(course, prerequisite)` pairs where the prerequisite matches no
    /// course in the list.
    pub dangling: Vec<(String, String)>,

    /// A course involved in a prerequisite cycle, if one exists.
    pub cycle: Option<String>,
}

impl LoadReport {
    pub fn has_warnings(&self) -> bool {
        !self.duplicate_ids.is_empty() || !self.dangling.is_empty() || self.cycle.is_some()
    }
}

/// Inspect a raw course list for problems worth reporting.
pub fn check_courses(courses: &[Course]) -> LoadReport {
    let mut report = LoadReport {
        course_count: courses.len(),
        ..LoadReport::default()
    };

    let mut seen: HashSet<&str> = HashSet::new();
    for course in courses {
        if !seen.insert(course.id.as_str()) && !report.duplicate_ids.contains(&course.id) {
            report.duplicate_ids.push(course.id.clone());
        }
    }

    let known: HashSet<&str> = courses.iter().map(|c| c.id.as_str()).collect();
    for course in courses {
        for prereq in course.prerequisites.iter() {
            if !known.contains(prereq.as_str()) {
                report.dangling.push((course.id.clone(), prereq.clone()));
            }
        }
    }

    report.cycle = find_cycle(courses);
    report
}

/// Detect a prerequisite cycle, returning one involved course ID.
///
/// Edge direction: prerequisite -> dependent. Edges to unknown IDs are not
/// part of the graph; they cannot close a cycle.
fn find_cycle(courses: &[Course]) -> Option<String> {
    let known: HashSet<&str> = courses.iter().map(|c| c.id.as_str()).collect();

    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for course in courses {
        graph.add_node(course.id.as_str());
    }
    for course in courses {
        for prereq in course.prerequisites.iter() {
            if known.contains(prereq.as_str()) {
                graph.add_edge(prereq.as_str(), course.id.as_str(), ());
            }
        }
    }

    // A topological sort fails exactly when there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => None,
        Err(cycle) => Some(cycle.node_id().to_string()),
    }
}
