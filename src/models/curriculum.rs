//! Curriculum model.
//!
//! A curriculum is a named group of courses followed by the same set of
//! students. Two courses of one curriculum can never be scheduled in the
//! same (day, period), and the objective rewards packing a curriculum's
//! lectures into contiguous periods.

use serde::{Deserialize, Serialize};

/// A named group of courses that share students.
///
/// Membership is given by course name; the catalog resolves names to ids
/// and precomputes the course ↔ curriculum lookups in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curriculum {
    /// Unique curriculum name.
    pub name: String,
    /// Names of member courses. A course may appear in several curricula.
    pub courses: Vec<String>,
}

impl Curriculum {
    /// Creates an empty curriculum.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            courses: Vec::new(),
        }
    }

    /// Adds a member course.
    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.courses.push(course.into());
        self
    }

    /// Sets the full member list.
    pub fn with_courses(mut self, courses: Vec<String>) -> Self {
        self.courses = courses;
        self
    }
}
