// src/catalog/model.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single course in the curriculum.
///
/// The `id` doubles as the reference token in other courses' prerequisite
/// lists. Prerequisite IDs are not required to resolve: unknown references
/// are tolerated everywhere, they just keep their dependents locked (see
/// `catalog::validate` for the load-time warnings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code, e.g. `CS101`.
    pub id: String,

    pub title: String,

    /// IDs of courses that must be completed before this one unlocks.
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Grouping key for progress tracking; absent renders as "Uncategorized".
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Optional learning objectives.
    #[serde(default)]
    pub objectives: Option<Vec<String>>,
}

/// The course registry: an ordered course list plus an ID index.
///
/// Ordering is load order and drives layout determinism. Duplicate IDs are
/// collapsed on construction; the last occurrence wins, keeping the list
/// position of the first.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a raw course list.
    pub fn from_courses(courses: Vec<Course>) -> Self {
        let mut catalog = Self::default();
        for course in courses {
            catalog.insert(course);
        }
        catalog
    }

    fn insert(&mut self, course: Course) {
        match self.index.get(&course.id) {
            Some(&pos) => {
                self.courses[pos] = course;
            }
            None => {
                self.index.insert(course.id.clone(), self.courses.len());
                self.courses.push(course);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Course> {
        self.index.get(id).map(|&pos| &self.courses[pos])
    }

    /// Position of a course in catalog order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Courses in catalog order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
