// src/scene/progress.rs

use std::collections::{BTreeMap, HashSet};

use crate::catalog::Course;

/// Bucket for courses without a category of their own.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Completion tally for one category of courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryProgress {
    pub category: String,
    pub total: usize,
    pub completed: usize,
}

impl CategoryProgress {
    /// A category only counts as complete when it has courses at all.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u8
    }
}

/// Group courses by category and count completions per group.
///
/// Missing and empty categories both land in [`UNCATEGORIZED`]. Groups come
/// back sorted by name so listings are stable across runs.
pub fn category_progress(courses: &[Course], completed: &HashSet<String>) -> Vec<CategoryProgress> {
    let mut groups: BTreeMap<&str, (usize, usize)> = BTreeMap::new();

    for course in courses {
        let name = match course.category.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => UNCATEGORIZED,
        };
        let entry = groups.entry(name).or_insert((0, 0));
        entry.0 += 1;
        if completed.contains(&course.id) {
            entry.1 += 1;
        }
    }

    groups
        .into_iter()
        .map(|(category, (total, completed))| CategoryProgress {
            category: category.to_string(),
            total,
            completed,
        })
        .collect()
}
