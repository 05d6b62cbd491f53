//! Grid slot addressing.
//!
//! A slot is one cell of the (day × period × room) assignment grid. Days
//! and periods are zero-based positions inside the planning horizon the
//! catalog defines.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RoomId;

/// Address of a single cell in the (day, period, room) grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Day within the planning horizon (0-based).
    pub day: usize,
    /// Period within the day (0-based).
    pub period: usize,
    /// Room hosting the lecture.
    pub room: RoomId,
}

impl Slot {
    /// Creates a slot address.
    pub fn new(day: usize, period: usize, room: RoomId) -> Self {
        Self { day, period, room }
    }

    /// Whether this slot is in the same (day, period) column as another,
    /// regardless of room.
    #[inline]
    pub fn same_period(&self, other: &Slot) -> bool {
        self.day == other.day && self.period == other.period
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(day {}, period {}, room {})",
            self.day, self.period, self.room
        )
    }
}
