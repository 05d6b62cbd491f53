//! Room model.

use serde::{Deserialize, Serialize};

/// A room lectures can be scheduled into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room name.
    pub name: String,
    /// Seating capacity.
    pub capacity: u32,
}

impl Room {
    /// Creates a room.
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }

    /// How many of `students` do not fit into this room.
    #[inline]
    pub fn overflow(&self, students: u32) -> u32 {
        students.saturating_sub(self.capacity)
    }
}
