//! Dense entity identifiers.
//!
//! The catalog assigns every course, room, and curriculum a dense index id
//! at build time. Ids are cheap to copy and hash and double as positions in
//! the catalog's entity tables; the catalog keeps the name → id maps for the
//! loader boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a course in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CourseId(pub(crate) u32);

/// Identifier of a room in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub(crate) u32);

/// Identifier of a curriculum in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CurriculumId(pub(crate) u32);

impl CourseId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position of this course in the catalog's course table.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl RoomId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position of this room in the catalog's room table.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl CurriculumId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position of this curriculum in the catalog's curriculum table.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for CurriculumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
