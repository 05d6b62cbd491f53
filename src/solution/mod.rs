//! Timetable solution state and move primitives.
//!
//! [`Timetable`] owns the mutable (day × period × room) assignment grid,
//! the unscheduled lecture multiset, and the incremental indexes that keep
//! delta evaluation proportional to one day's periods instead of the whole
//! grid:
//! - per-course occupied-slot lists (distinct days, distinct rooms)
//! - per-(curriculum, day, period) occupancy counts (compactness)
//!
//! All writes go through [`Timetable::insert`], [`Timetable::remove`], and
//! [`Timetable::destroy`]. Writing a cell any other way would desynchronize
//! the indexes and the unscheduled multiset from the grid, so no such path
//! exists. Conservation holds at every call boundary: for each course,
//! placed count + unscheduled count equals its lecture count.

mod construction;
mod feasibility;

use rand::Rng;
use thiserror::Error;
use tracing::trace;

use crate::models::{Catalog, CourseId, CurriculumId, RoomId, Slot};
use crate::objective::Weights;

/// One grid cell: empty, or occupied by a course's lecture.
pub type Cell = Option<CourseId>;

/// A rejected move. Both variants are caller bugs: the search driver must
/// check feasibility before inserting and only remove occupied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The target placement violates a hard constraint.
    #[error("cannot insert course {course} at {slot}: placement is infeasible")]
    Infeasible {
        /// Rejected slot.
        slot: Slot,
        /// Course that was being inserted.
        course: CourseId,
    },
    /// Every lecture of the course is already placed.
    #[error("cannot insert course {course}: all of its lectures are already placed")]
    NoUnscheduledLecture {
        /// Course that was being inserted.
        course: CourseId,
    },
    /// The cell to remove from holds no lecture.
    #[error("cannot remove from {slot}: the cell is empty")]
    EmptyCell {
        /// Addressed slot.
        slot: Slot,
    },
}

/// A mutable timetable over an immutable catalog.
///
/// Created empty (every lecture occurrence unscheduled); populated through
/// [`Timetable::build_initial_solution`] and then improved by a search
/// driver alternating [`Timetable::destroy`] with feasibility-gated
/// [`Timetable::insert`] calls.
#[derive(Debug, Clone)]
pub struct Timetable {
    pub(crate) catalog: Catalog,
    pub(crate) weights: Weights,
    /// Flat grid, day-major then period then room.
    pub(crate) grid: Vec<Cell>,
    /// Unscheduled occurrence count per course.
    pub(crate) unscheduled: Vec<u32>,
    pub(crate) unscheduled_total: usize,
    pub(crate) placed_total: usize,
    /// Occupied slots per course, unordered.
    pub(crate) course_slots: Vec<Vec<Slot>>,
    /// Occupancy count per (curriculum, day, period), flat.
    pub(crate) curriculum_occupancy: Vec<u16>,
}

impl Timetable {
    /// Creates an empty timetable: every lecture occurrence starts
    /// unscheduled.
    pub fn new(catalog: Catalog, weights: Weights) -> Self {
        let grid = vec![None; catalog.slot_count()];
        let unscheduled: Vec<u32> = catalog.courses().map(|(_, c)| c.lectures).collect();
        let unscheduled_total = catalog.total_lectures();
        let course_slots = vec![Vec::new(); catalog.course_count()];
        let curriculum_occupancy =
            vec![0; catalog.curriculum_count() * catalog.days() * catalog.periods_per_day()];
        Self {
            catalog,
            weights,
            grid,
            unscheduled,
            unscheduled_total,
            placed_total: 0,
            course_slots,
            curriculum_occupancy,
        }
    }

    /// The catalog this timetable schedules against.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The objective weights in effect.
    #[inline]
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    #[inline]
    fn cell_index(&self, slot: Slot) -> usize {
        (slot.day * self.catalog.periods_per_day() + slot.period) * self.catalog.room_count()
            + slot.room.index()
    }

    #[inline]
    fn occupancy_index(&self, curriculum: CurriculumId, day: usize, period: usize) -> usize {
        (curriculum.index() * self.catalog.days() + day) * self.catalog.periods_per_day() + period
    }

    /// Content of a cell.
    #[inline]
    pub fn cell(&self, slot: Slot) -> Cell {
        self.grid[self.cell_index(slot)]
    }

    /// Whether any lecture of a curriculum occupies (day, period).
    #[inline]
    pub(crate) fn curriculum_occupies(
        &self,
        curriculum: CurriculumId,
        day: usize,
        period: usize,
    ) -> bool {
        self.curriculum_occupancy[self.occupancy_index(curriculum, day, period)] > 0
    }

    /// Occupied slots of a course, in no particular order.
    #[inline]
    pub fn slots_of(&self, course: CourseId) -> &[Slot] {
        &self.course_slots[course.index()]
    }

    /// Number of placed occurrences of a course.
    #[inline]
    pub fn placed_count(&self, course: CourseId) -> usize {
        self.course_slots[course.index()].len()
    }

    /// Number of unscheduled occurrences of a course.
    #[inline]
    pub fn unscheduled_count(&self, course: CourseId) -> u32 {
        self.unscheduled[course.index()]
    }

    /// Total unscheduled occurrences across all courses.
    #[inline]
    pub fn unscheduled_total(&self) -> usize {
        self.unscheduled_total
    }

    /// Total placed occurrences across all courses.
    #[inline]
    pub fn placed_total(&self) -> usize {
        self.placed_total
    }

    /// Number of distinct days the course currently occupies.
    pub fn distinct_days(&self, course: CourseId) -> usize {
        let mut days: Vec<usize> = self.slots_of(course).iter().map(|s| s.day).collect();
        days.sort_unstable();
        days.dedup();
        days.len()
    }

    /// Number of distinct rooms the course currently occupies.
    pub fn distinct_rooms(&self, course: CourseId) -> usize {
        let mut rooms: Vec<RoomId> = self.slots_of(course).iter().map(|s| s.room).collect();
        rooms.sort_unstable();
        rooms.dedup();
        rooms.len()
    }

    /// All slot addresses in grid order (day-major, then period, then room).
    pub fn slots(&self) -> impl Iterator<Item = Slot> {
        let days = self.catalog.days();
        let periods = self.catalog.periods_per_day();
        let rooms = self.catalog.room_count();
        (0..days).flat_map(move |day| {
            (0..periods).flat_map(move |period| {
                (0..rooms).map(move |room| Slot::new(day, period, RoomId::new(room)))
            })
        })
    }

    /// Currently empty cells, in grid order.
    pub fn empty_slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.slots()
            .zip(self.grid.iter())
            .filter_map(|(slot, cell)| cell.is_none().then_some(slot))
    }

    /// Placed lectures in grid order, the shape an exporter renders
    /// (one line per occurrence: course, day, period, room).
    pub fn placed_lectures(&self) -> impl Iterator<Item = (Slot, CourseId)> + '_ {
        self.slots()
            .zip(self.grid.iter())
            .filter_map(|(slot, cell)| cell.map(|course| (slot, course)))
    }

    /// Lectures placed at (day, period) across all rooms.
    pub(crate) fn courses_at(
        &self,
        day: usize,
        period: usize,
    ) -> impl Iterator<Item = (RoomId, CourseId)> + '_ {
        let rooms = self.catalog.room_count();
        let base = (day * self.catalog.periods_per_day() + period) * rooms;
        self.grid[base..base + rooms]
            .iter()
            .enumerate()
            .filter_map(|(room, cell)| cell.map(|course| (RoomId::new(room), course)))
    }

    /// Places one unscheduled occurrence of `course` at `slot`.
    ///
    /// The returned delta is the signed change to the weighted objective,
    /// computed against the pre-insertion state and exactly equal to the
    /// difference between full evaluations before and after the move.
    ///
    /// # Errors
    /// [`MoveError::NoUnscheduledLecture`] if every lecture of the course is
    /// already placed; [`MoveError::Infeasible`] if the placement violates a
    /// hard constraint. Both indicate a bug in the caller.
    pub fn insert(&mut self, slot: Slot, course: CourseId) -> Result<i64, MoveError> {
        if self.unscheduled[course.index()] == 0 {
            return Err(MoveError::NoUnscheduledLecture { course });
        }
        if !self.is_feasible(slot, course) {
            return Err(MoveError::Infeasible { slot, course });
        }

        let delta = self.insert_delta(slot, course);

        let idx = self.cell_index(slot);
        self.grid[idx] = Some(course);
        self.unscheduled[course.index()] -= 1;
        self.unscheduled_total -= 1;
        self.placed_total += 1;
        self.course_slots[course.index()].push(slot);
        for &q in self.catalog.curricula_of(course) {
            let oi = self.occupancy_index(q, slot.day, slot.period);
            self.curriculum_occupancy[oi] += 1;
        }
        Ok(delta)
    }

    /// Removes the lecture at `slot`, returning the course it held and the
    /// signed objective delta of the removal.
    ///
    /// # Errors
    /// [`MoveError::EmptyCell`] if the cell holds no lecture.
    pub fn remove(&mut self, slot: Slot) -> Result<(CourseId, i64), MoveError> {
        let idx = self.cell_index(slot);
        let Some(course) = self.grid[idx] else {
            return Err(MoveError::EmptyCell { slot });
        };

        let delta = self.remove_delta(slot, course);

        self.grid[idx] = None;
        self.unscheduled[course.index()] += 1;
        self.unscheduled_total += 1;
        self.placed_total -= 1;
        let slots = &mut self.course_slots[course.index()];
        let pos = slots.iter().position(|s| *s == slot);
        debug_assert!(pos.is_some(), "course slot index out of sync with grid");
        if let Some(pos) = pos {
            slots.swap_remove(pos);
        }
        for &q in self.catalog.curricula_of(course) {
            let oi = self.occupancy_index(q, slot.day, slot.period);
            self.curriculum_occupancy[oi] -= 1;
        }
        Ok((course, delta))
    }

    /// Removes up to `count` uniformly random placed lectures (fewer only if
    /// the grid runs empty first). Occupied cells are found by rejection
    /// sampling. Returns the removed (slot, course) pairs so a repair step
    /// can re-insert them preferentially.
    pub fn destroy<R: Rng>(&mut self, count: usize, rng: &mut R) -> Vec<(Slot, CourseId)> {
        let mut removed = Vec::with_capacity(count.min(self.placed_total));
        while removed.len() < count && self.placed_total > 0 {
            let slot = Slot::new(
                rng.random_range(0..self.catalog.days()),
                rng.random_range(0..self.catalog.periods_per_day()),
                RoomId::new(rng.random_range(0..self.catalog.room_count())),
            );
            if self.cell(slot).is_none() {
                continue;
            }
            if let Ok((course, _)) = self.remove(slot) {
                removed.push((slot, course));
            }
        }
        trace!(removed = removed.len(), "destroy batch");
        removed
    }
}
