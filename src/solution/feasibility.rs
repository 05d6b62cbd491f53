//! Hard-constraint feasibility checking.
//!
//! A placement is feasible only if it violates none of the hard
//! constraints: the cell is empty, the course is available in that period,
//! and no lecture already in the same (day, period) clashes by course,
//! lecturer, or curriculum. Checks are ordered by cost and short-circuit.

use crate::models::{CourseId, Slot};

use super::Timetable;

impl Timetable {
    /// Whether placing `course` at `slot` would keep the timetable free of
    /// hard-constraint violations.
    ///
    /// Pure predicate over the current grid; nothing is mutated. In order:
    /// 1. The target cell must be empty.
    /// 2. The course must not be unavailable at (day, period).
    /// 3. The course must not already run in another room of the same
    ///    (day, period).
    /// 4. No lecture in the same (day, period) may share the lecturer.
    /// 5. No lecture in the same (day, period) may share a curriculum.
    pub fn is_feasible(&self, slot: Slot, course: CourseId) -> bool {
        if self.cell(slot).is_some() {
            return false;
        }
        if self.catalog.is_unavailable(course, slot.day, slot.period) {
            return false;
        }
        for (_, other) in self.courses_at(slot.day, slot.period) {
            if other == course {
                return false;
            }
            if self.catalog.same_lecturer(course, other) {
                return false;
            }
            if self.catalog.share_curriculum(course, other) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Catalog, Course, Curriculum, Room, RoomId, Slot, Unavailability};
    use crate::objective::Weights;
    use crate::solution::Timetable;

    fn sample_timetable() -> Timetable {
        let catalog = Catalog::build(
            3,
            4,
            vec![
                Course::new("A", "Ocra").with_students(20).with_lectures(3),
                Course::new("B", "Ocra").with_students(15).with_lectures(2),
                Course::new("C", "Rosa").with_students(10).with_lectures(2),
                Course::new("D", "Indaco").with_students(8).with_lectures(1),
            ],
            vec![Room::new("R0", 25), Room::new("R1", 25)],
            vec![Curriculum::new("Q1").with_course("A").with_course("C")],
            vec![Unavailability::new("D", 0, 0), Unavailability::new("D", 0, 1)],
        )
        .unwrap();
        Timetable::new(catalog, Weights::default())
    }

    fn rooms(tt: &Timetable) -> (RoomId, RoomId) {
        let mut it = tt.catalog().rooms().map(|(id, _)| id);
        (it.next().unwrap(), it.next().unwrap())
    }

    #[test]
    fn test_empty_grid_is_feasible() {
        let tt = sample_timetable();
        let a = tt.catalog().course_id("A").unwrap();
        let (r0, _) = rooms(&tt);
        assert!(tt.is_feasible(Slot::new(0, 0, r0), a));
    }

    #[test]
    fn test_occupied_cell_is_infeasible() {
        let mut tt = sample_timetable();
        let a = tt.catalog().course_id("A").unwrap();
        let d = tt.catalog().course_id("D").unwrap();
        let (r0, _) = rooms(&tt);

        tt.insert(Slot::new(1, 0, r0), a).unwrap();
        assert!(!tt.is_feasible(Slot::new(1, 0, r0), d));
    }

    #[test]
    fn test_unavailability_blocks_placement() {
        let tt = sample_timetable();
        let d = tt.catalog().course_id("D").unwrap();
        let (r0, r1) = rooms(&tt);

        assert!(!tt.is_feasible(Slot::new(0, 0, r0), d));
        assert!(!tt.is_feasible(Slot::new(0, 1, r1), d));
        assert!(tt.is_feasible(Slot::new(0, 2, r0), d));
        assert!(tt.is_feasible(Slot::new(1, 0, r0), d));
    }

    #[test]
    fn test_lecturer_clash_across_rooms() {
        let mut tt = sample_timetable();
        let a = tt.catalog().course_id("A").unwrap();
        let b = tt.catalog().course_id("B").unwrap();
        let (r0, r1) = rooms(&tt);

        // A and B are both taught by Ocra.
        tt.insert(Slot::new(0, 2, r0), a).unwrap();
        assert!(!tt.is_feasible(Slot::new(0, 2, r1), b));
        assert!(tt.is_feasible(Slot::new(0, 3, r1), b));
    }

    #[test]
    fn test_curriculum_clash_across_rooms() {
        let mut tt = sample_timetable();
        let a = tt.catalog().course_id("A").unwrap();
        let c = tt.catalog().course_id("C").unwrap();
        let (r0, r1) = rooms(&tt);

        // A and C share curriculum Q1.
        tt.insert(Slot::new(2, 1, r0), a).unwrap();
        assert!(!tt.is_feasible(Slot::new(2, 1, r1), c));
        assert!(tt.is_feasible(Slot::new(2, 2, r1), c));
    }

    #[test]
    fn test_same_course_twice_in_period_rejected() {
        let mut tt = sample_timetable();
        let a = tt.catalog().course_id("A").unwrap();
        let (r0, r1) = rooms(&tt);

        tt.insert(Slot::new(1, 1, r0), a).unwrap();
        // Second lecture of A in the same (day, period), different room.
        assert!(!tt.is_feasible(Slot::new(1, 1, r1), a));
        // A different period the same day is fine.
        assert!(tt.is_feasible(Slot::new(1, 2, r1), a));
    }

    #[test]
    fn test_unrelated_courses_share_period() {
        let mut tt = sample_timetable();
        let b = tt.catalog().course_id("B").unwrap();
        let c = tt.catalog().course_id("C").unwrap();
        let (r0, r1) = rooms(&tt);

        // Different lecturers, no shared curriculum.
        tt.insert(Slot::new(2, 0, r0), b).unwrap();
        assert!(tt.is_feasible(Slot::new(2, 0, r1), c));
    }
}
