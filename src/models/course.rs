//! Course model.
//!
//! A course gives rise to a fixed number of interchangeable lecture
//! occurrences, each of which must be placed into a distinct grid slot.
//! Lectures of the same course are not distinguished from one another:
//! the solution grid records only which course occupies a cell.

use serde::{Deserialize, Serialize};

/// A course to be timetabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course name.
    pub name: String,
    /// Name of the lecturer teaching this course.
    pub lecturer: String,
    /// Number of enrolled students (drives room capacity overflow).
    pub students: u32,
    /// Minimum number of distinct days the lectures should spread over.
    pub min_working_days: u32,
    /// Total number of lectures to schedule.
    pub lectures: u32,
}

impl Course {
    /// Creates a course with one lecture, one required working day, and no
    /// enrolled students.
    pub fn new(name: impl Into<String>, lecturer: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lecturer: lecturer.into(),
            students: 0,
            min_working_days: 1,
            lectures: 1,
        }
    }

    /// Sets the enrolled student count.
    pub fn with_students(mut self, students: u32) -> Self {
        self.students = students;
        self
    }

    /// Sets the minimum number of distinct working days.
    pub fn with_min_working_days(mut self, days: u32) -> Self {
        self.min_working_days = days;
        self
    }

    /// Sets the total lecture count.
    pub fn with_lectures(mut self, lectures: u32) -> Self {
        self.lectures = lectures;
        self
    }
}
