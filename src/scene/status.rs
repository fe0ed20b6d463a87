// src/scene/status.rs

use std::collections::{HashMap, HashSet};

use crate::catalog::Course;

/// Resolved state of a course relative to the completed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseStatus {
    Completed,
    Unlocked,
    Locked,
}

impl CourseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::Completed => "completed",
            CourseStatus::Unlocked => "unlocked",
            CourseStatus::Locked => "locked",
        }
    }
}

/// Resolve the status of a single course.
///
/// Membership in the completed set wins outright, regardless of
/// prerequisites. Otherwise the course is unlocked when every prerequisite
/// ID is in the completed set, which holds vacuously for a course with no
/// prerequisites. Prerequisites are matched purely by ID membership, so an
/// ID naming no catalog course still counts once it has been toggled.
pub fn derive_status(course: &Course, completed: &HashSet<String>) -> CourseStatus {
    if completed.contains(&course.id) {
        return CourseStatus::Completed;
    }
    if course.prerequisites.iter().all(|p| completed.contains(p)) {
        CourseStatus::Unlocked
    } else {
        CourseStatus::Locked
    }
}

/// Resolve every course's status in one pass, keyed by course ID.
pub fn resolve_statuses(
    courses: &[Course],
    completed: &HashSet<String>,
) -> HashMap<String, CourseStatus> {
    courses
        .iter()
        .map(|course| (course.id.clone(), derive_status(course, completed)))
        .collect()
}
