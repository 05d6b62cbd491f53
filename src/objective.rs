//! Multi-term objective: full evaluation and per-move delta evaluation.
//!
//! The objective is a weighted sum of five non-negative penalty counts
//! (lower is better):
//!
//! | Term | Counts |
//! |------|--------|
//! | Unscheduled | lecture occurrences not placed |
//! | Room capacity | enrolled students beyond room capacity, per placed lecture |
//! | Minimum working days | missing distinct days below each course's minimum |
//! | Curriculum compactness | curriculum periods with no adjacent curriculum period |
//! | Room stability | extra distinct rooms beyond one, per course |
//!
//! Full evaluation rescans the incremental indexes. Delta evaluation
//! recomputes only the scope a single insert or remove touches — one cell,
//! one course, one day, and the curricula containing the course — and is
//! exact: `evaluate → move → evaluate` always differs by the move's
//! returned delta.

use serde::{Deserialize, Serialize};

use crate::models::{CourseId, CurriculumId, Slot};
use crate::solution::Timetable;

/// Per-term penalty weights.
///
/// Defaults match the classic curriculum-timetabling weighting; all five
/// are plain data so a driver can tune them per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights {
    /// Weight of the unscheduled-lectures term.
    pub unscheduled: i64,
    /// Weight of the room-capacity-overflow term.
    pub room_capacity: i64,
    /// Weight of the minimum-working-days shortfall term.
    pub min_working_days: i64,
    /// Weight of the curriculum-compactness term.
    pub curriculum_compactness: i64,
    /// Weight of the room-stability term.
    pub room_stability: i64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            unscheduled: 10,
            room_capacity: 1,
            min_working_days: 5,
            curriculum_compactness: 2,
            room_stability: 1,
        }
    }
}

impl Weights {
    pub(crate) fn weighted_total(
        &self,
        unscheduled: i64,
        room_capacity: i64,
        min_working_days: i64,
        curriculum_compactness: i64,
        room_stability: i64,
    ) -> i64 {
        self.unscheduled * unscheduled
            + self.room_capacity * room_capacity
            + self.min_working_days * min_working_days
            + self.curriculum_compactness * curriculum_compactness
            + self.room_stability * room_stability
    }
}

/// Objective breakdown: the five raw (unweighted) term counts plus the
/// weighted total. Serializable so an exporter can render the report
/// alongside the placed lectures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Weighted sum of all five terms.
    pub total: i64,
    /// Lecture occurrences not placed.
    pub unscheduled: i64,
    /// Total students beyond room capacity across placed lectures.
    pub room_capacity: i64,
    /// Total missing working days across courses.
    pub min_working_days: i64,
    /// Curriculum periods without an adjacent occupied period.
    pub curriculum_compactness: i64,
    /// Extra distinct rooms beyond one, summed over courses.
    pub room_stability: i64,
}

impl Timetable {
    /// Computes the full objective from the current state.
    pub fn evaluate(&self) -> Score {
        let unscheduled = self.unscheduled_total() as i64;

        let mut room_capacity = 0;
        for (slot, course) in self.placed_lectures() {
            room_capacity +=
                self.catalog.room(slot.room).overflow(self.catalog.course(course).students) as i64;
        }

        // A fully unscheduled course counts its whole minimum; see the
        // delta rules below, which assume this.
        let mut min_working_days = 0;
        let mut room_stability = 0;
        for (id, course) in self.catalog.courses() {
            let shortfall = course.min_working_days as i64 - self.distinct_days(id) as i64;
            min_working_days += shortfall.max(0);
            room_stability += (self.distinct_rooms(id) as i64 - 1).max(0);
        }

        let mut curriculum_compactness = 0;
        for q in 0..self.catalog.curriculum_count() {
            let q = CurriculumId::new(q);
            for day in 0..self.catalog.days() {
                curriculum_compactness += self.day_compactness(q, day, None);
            }
        }

        Score {
            total: self.weights.weighted_total(
                unscheduled,
                room_capacity,
                min_working_days,
                curriculum_compactness,
                room_stability,
            ),
            unscheduled,
            room_capacity,
            min_working_days,
            curriculum_compactness,
            room_stability,
        }
    }

    /// Compactness penalty of one curriculum on one day: occupied periods
    /// whose existing neighbors (one at the day's boundary, two otherwise)
    /// are all empty.
    ///
    /// `flip` overrides the occupancy of a single period, which lets the
    /// delta paths score the day as it would look after an insert or
    /// remove without mutating anything.
    fn day_compactness(
        &self,
        curriculum: CurriculumId,
        day: usize,
        flip: Option<(usize, bool)>,
    ) -> i64 {
        let periods = self.catalog.periods_per_day();
        let occupied = |p: usize| match flip {
            Some((fp, v)) if fp == p => v,
            _ => self.curriculum_occupies(curriculum, day, p),
        };

        let mut penalty = 0;
        for p in 0..periods {
            if !occupied(p) {
                continue;
            }
            let prev = p > 0 && occupied(p - 1);
            let next = p + 1 < periods && occupied(p + 1);
            if !prev && !next {
                penalty += 1;
            }
        }
        penalty
    }

    /// Signed weighted objective change of inserting `course` at `slot`,
    /// computed against the current (pre-insertion) state.
    ///
    /// Only called on feasible placements, which guarantees the affected
    /// (curriculum, day, period) cells are currently unoccupied.
    pub(crate) fn insert_delta(&self, slot: Slot, course: CourseId) -> i64 {
        let c = self.catalog.course(course);

        let unscheduled = -1;
        let room_capacity = self.catalog.room(slot.room).overflow(c.students) as i64;

        let slots = self.slots_of(course);
        let days = self.distinct_days(course) as i64;
        let new_day = !slots.iter().any(|s| s.day == slot.day);
        let min_working_days = if new_day && days < c.min_working_days as i64 {
            -1
        } else {
            0
        };

        let rooms = self.distinct_rooms(course) as i64;
        let new_room = !slots.iter().any(|s| s.room == slot.room);
        let room_stability = if new_room && rooms > 0 { 1 } else { 0 };

        let mut curriculum_compactness = 0;
        for &q in self.catalog.curricula_of(course) {
            let before = self.day_compactness(q, slot.day, None);
            let after = self.day_compactness(q, slot.day, Some((slot.period, true)));
            curriculum_compactness += after - before;
        }

        self.weights.weighted_total(
            unscheduled,
            room_capacity,
            min_working_days,
            curriculum_compactness,
            room_stability,
        )
    }

    /// Signed weighted objective change of removing the lecture of
    /// `course` at `slot`, computed against the current (pre-removal)
    /// state.
    pub(crate) fn remove_delta(&self, slot: Slot, course: CourseId) -> i64 {
        let c = self.catalog.course(course);

        let unscheduled = 1;
        let room_capacity = -(self.catalog.room(slot.room).overflow(c.students) as i64);

        let slots = self.slots_of(course);
        let days = self.distinct_days(course) as i64;
        let last_on_day = slots.iter().filter(|s| s.day == slot.day).count() == 1;
        let min_working_days = if last_on_day && days <= c.min_working_days as i64 {
            1
        } else {
            0
        };

        let rooms = self.distinct_rooms(course) as i64;
        let last_in_room = slots.iter().filter(|s| s.room == slot.room).count() == 1;
        let room_stability = if last_in_room && rooms > 1 { -1 } else { 0 };

        let mut curriculum_compactness = 0;
        for &q in self.catalog.curricula_of(course) {
            let before = self.day_compactness(q, slot.day, None);
            let after = self.day_compactness(q, slot.day, Some((slot.period, false)));
            curriculum_compactness += after - before;
        }

        self.weights.weighted_total(
            unscheduled,
            room_capacity,
            min_working_days,
            curriculum_compactness,
            room_stability,
        )
    }
}
