//! Course unavailability windows.

use serde::{Deserialize, Serialize};

/// A (day, period) pair during which a course cannot be scheduled.
///
/// A course with no unavailability entries is unconstrained. Entries are
/// grouped by course inside the catalog for O(1) lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unavailability {
    /// Name of the constrained course.
    pub course: String,
    /// Blocked day (0-based).
    pub day: usize,
    /// Blocked period within the day (0-based).
    pub period: usize,
}

impl Unavailability {
    /// Creates an unavailability entry.
    pub fn new(course: impl Into<String>, day: usize, period: usize) -> Self {
        Self {
            course: course.into(),
            day,
            period,
        }
    }
}
