//! Greedy random initial construction.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::models::{CourseId, Slot};

use super::Timetable;

impl Timetable {
    /// Places unscheduled lectures by feasibility-gated random insertion.
    ///
    /// Visits the unscheduled occurrences in random order; for each one,
    /// scans the currently empty cells in random order and inserts at the
    /// first feasible one. An occurrence with no feasible cell stays
    /// unscheduled — that is a scored outcome, not an error. Returns the
    /// number of occurrences placed by this call.
    ///
    /// Placement quality is not guaranteed; the contract is only that every
    /// occurrence ends placed-or-unscheduled and all hard constraints hold
    /// among placed lectures. Also usable as a repair step after
    /// [`Timetable::destroy`], since it works from the current unscheduled
    /// multiset.
    pub fn build_initial_solution<R: Rng>(&mut self, rng: &mut R) -> usize {
        let mut lectures: Vec<CourseId> = Vec::with_capacity(self.unscheduled_total());
        for (id, _) in self.catalog.courses() {
            for _ in 0..self.unscheduled[id.index()] {
                lectures.push(id);
            }
        }
        lectures.shuffle(rng);

        let mut placed = 0;
        for course in lectures {
            let mut free: Vec<Slot> = self.empty_slots().collect();
            free.shuffle(rng);
            for slot in free {
                if self.is_feasible(slot, course) && self.insert(slot, course).is_ok() {
                    placed += 1;
                    break;
                }
            }
        }

        debug!(
            placed,
            unscheduled = self.unscheduled_total(),
            "initial construction finished"
        );
        placed
    }
}
