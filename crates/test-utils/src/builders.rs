#![allow(dead_code)]

use skilltree::catalog::{Catalog, Course};

/// Builder for `Course` to simplify test setup.
pub struct CourseBuilder {
    course: Course,
}

impl CourseBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            course: Course {
                id: id.to_string(),
                title: format!("{id} title"),
                prerequisites: vec![],
                category: None,
                description: None,
                objectives: None,
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.course.title = title.to_string();
        self
    }

    pub fn requires(mut self, prereq: &str) -> Self {
        self.course.prerequisites.push(prereq.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.course.category = Some(category.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.course.description = Some(description.to_string());
        self
    }

    pub fn objective(mut self, objective: &str) -> Self {
        self.course
            .objectives
            .get_or_insert_with(Vec::new)
            .push(objective.to_string());
        self
    }

    pub fn build(self) -> Course {
        self.course
    }
}

/// Builder for a course list / `Catalog` to simplify test setup.
pub struct CatalogBuilder {
    courses: Vec<Course>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self { courses: vec![] }
    }

    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    /// Shorthand: add a course with just an ID and its prerequisites.
    pub fn with_chain(mut self, id: &str, prereqs: &[&str]) -> Self {
        let mut builder = CourseBuilder::new(id);
        for p in prereqs {
            builder = builder.requires(p);
        }
        self.courses.push(builder.build());
        self
    }

    /// The raw course list, for APIs that take `Vec<Course>`.
    pub fn courses(self) -> Vec<Course> {
        self.courses
    }

    pub fn build(self) -> Catalog {
        Catalog::from_courses(self.courses)
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
