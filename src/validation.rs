//! Catalog input validation.
//!
//! Checks the structural integrity of loader output before the catalog is
//! built. Detects:
//! - Duplicate course, room, and curriculum names
//! - Curriculum membership referencing unknown courses
//! - Unavailability entries for unknown courses or outside the grid
//! - Degenerate dimensions (no days, no periods, no rooms)
//! - Courses with no lectures to schedule
//!
//! All problems are collected and reported together so a data file can be
//! fixed in one pass.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Course, Curriculum, Room, Unavailability};

/// A catalog integrity error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two courses share the same name.
    #[error("duplicate course name: {0}")]
    DuplicateCourse(String),
    /// Two rooms share the same name.
    #[error("duplicate room name: {0}")]
    DuplicateRoom(String),
    /// Two curricula share the same name.
    #[error("duplicate curriculum name: {0}")]
    DuplicateCurriculum(String),
    /// A curriculum lists a course the catalog does not contain.
    #[error("curriculum '{curriculum}' references unknown course '{course}'")]
    UnknownCurriculumCourse {
        /// Offending curriculum name.
        curriculum: String,
        /// Unresolved course name.
        course: String,
    },
    /// An unavailability entry names a course the catalog does not contain.
    #[error("unavailability entry references unknown course '{0}'")]
    UnknownUnavailabilityCourse(String),
    /// An unavailability entry lies outside the planning grid.
    #[error("unavailability for '{course}' is outside the grid: day {day}, period {period}")]
    UnavailabilityOutOfRange {
        /// Constrained course name.
        course: String,
        /// Out-of-range day.
        day: usize,
        /// Out-of-range period.
        period: usize,
    },
    /// A course has zero lectures and can never appear in a solution.
    #[error("course '{0}' has no lectures")]
    NoLectures(String),
    /// The planning grid has no cells in the time dimension.
    #[error("grid dimensions must be positive (days={days}, periods={periods})")]
    EmptyGrid {
        /// Configured day count.
        days: usize,
        /// Configured periods per day.
        periods: usize,
    },
    /// The catalog contains no rooms.
    #[error("catalog has no rooms")]
    NoRooms,
}

/// Validates loader output for catalog construction.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub(crate) fn validate(
    days: usize,
    periods_per_day: usize,
    courses: &[Course],
    rooms: &[Room],
    curricula: &[Curriculum],
    unavailability: &[Unavailability],
) -> Result<(), Vec<CatalogError>> {
    let mut errors = Vec::new();

    if days == 0 || periods_per_day == 0 {
        errors.push(CatalogError::EmptyGrid {
            days,
            periods: periods_per_day,
        });
    }
    if rooms.is_empty() {
        errors.push(CatalogError::NoRooms);
    }

    let mut course_names = HashSet::new();
    for c in courses {
        if !course_names.insert(c.name.as_str()) {
            errors.push(CatalogError::DuplicateCourse(c.name.clone()));
        }
        if c.lectures == 0 {
            errors.push(CatalogError::NoLectures(c.name.clone()));
        }
    }

    let mut room_names = HashSet::new();
    for r in rooms {
        if !room_names.insert(r.name.as_str()) {
            errors.push(CatalogError::DuplicateRoom(r.name.clone()));
        }
    }

    let mut curriculum_names = HashSet::new();
    for q in curricula {
        if !curriculum_names.insert(q.name.as_str()) {
            errors.push(CatalogError::DuplicateCurriculum(q.name.clone()));
        }
        for member in &q.courses {
            if !course_names.contains(member.as_str()) {
                errors.push(CatalogError::UnknownCurriculumCourse {
                    curriculum: q.name.clone(),
                    course: member.clone(),
                });
            }
        }
    }

    for u in unavailability {
        if !course_names.contains(u.course.as_str()) {
            errors.push(CatalogError::UnknownUnavailabilityCourse(u.course.clone()));
        }
        if u.day >= days || u.period >= periods_per_day {
            errors.push(CatalogError::UnavailabilityOutOfRange {
                course: u.course.clone(),
                day: u.day,
                period: u.period,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_courses() -> Vec<Course> {
        vec![
            Course::new("SceCosC", "Ocra").with_lectures(3),
            Course::new("ArcTec", "Indaco").with_lectures(2),
        ]
    }

    fn sample_rooms() -> Vec<Room> {
        vec![Room::new("A", 30), Room::new("B", 20)]
    }

    #[test]
    fn test_valid_input() {
        let curricula = vec![Curriculum::new("Cur1")
            .with_course("SceCosC")
            .with_course("ArcTec")];
        let unavail = vec![Unavailability::new("SceCosC", 1, 0)];
        assert!(validate(
            5,
            4,
            &sample_courses(),
            &sample_rooms(),
            &curricula,
            &unavail
        )
        .is_ok());
    }

    #[test]
    fn test_duplicate_course_name() {
        let courses = vec![Course::new("X", "L1"), Course::new("X", "L2")];
        let errors = validate(5, 4, &courses, &sample_rooms(), &[], &[]).unwrap_err();
        assert!(errors.contains(&CatalogError::DuplicateCourse("X".into())));
    }

    #[test]
    fn test_duplicate_room_name() {
        let rooms = vec![Room::new("A", 10), Room::new("A", 20)];
        let errors = validate(5, 4, &sample_courses(), &rooms, &[], &[]).unwrap_err();
        assert!(errors.contains(&CatalogError::DuplicateRoom("A".into())));
    }

    #[test]
    fn test_duplicate_curriculum_name() {
        let curricula = vec![Curriculum::new("Cur1"), Curriculum::new("Cur1")];
        let errors =
            validate(5, 4, &sample_courses(), &sample_rooms(), &curricula, &[]).unwrap_err();
        assert!(errors.contains(&CatalogError::DuplicateCurriculum("Cur1".into())));
    }

    #[test]
    fn test_unknown_curriculum_course() {
        let curricula = vec![Curriculum::new("Cur1").with_course("Ghost")];
        let errors =
            validate(5, 4, &sample_courses(), &sample_rooms(), &curricula, &[]).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            CatalogError::UnknownCurriculumCourse { course, .. } if course == "Ghost"
        )));
    }

    #[test]
    fn test_unknown_unavailability_course() {
        let unavail = vec![Unavailability::new("Ghost", 0, 0)];
        let errors = validate(5, 4, &sample_courses(), &sample_rooms(), &[], &unavail).unwrap_err();
        assert!(errors.contains(&CatalogError::UnknownUnavailabilityCourse("Ghost".into())));
    }

    #[test]
    fn test_unavailability_out_of_range() {
        let unavail = vec![
            Unavailability::new("SceCosC", 5, 0),
            Unavailability::new("ArcTec", 0, 4),
        ];
        let errors = validate(5, 4, &sample_courses(), &sample_rooms(), &[], &unavail).unwrap_err();
        let out_of_range = errors
            .iter()
            .filter(|e| matches!(e, CatalogError::UnavailabilityOutOfRange { .. }))
            .count();
        assert_eq!(out_of_range, 2);
    }

    #[test]
    fn test_zero_lectures() {
        let courses = vec![Course::new("X", "L").with_lectures(0)];
        let errors = validate(5, 4, &courses, &sample_rooms(), &[], &[]).unwrap_err();
        assert!(errors.contains(&CatalogError::NoLectures("X".into())));
    }

    #[test]
    fn test_empty_grid_and_no_rooms() {
        let errors = validate(0, 4, &sample_courses(), &[], &[], &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, CatalogError::EmptyGrid { .. })));
        assert!(errors.contains(&CatalogError::NoRooms));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let courses = vec![
            Course::new("X", "L").with_lectures(0),
            Course::new("X", "L"),
        ];
        let curricula = vec![Curriculum::new("Cur1").with_course("Ghost")];
        let errors = validate(5, 4, &courses, &sample_rooms(), &curricula, &[]).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_error_messages() {
        let e = CatalogError::UnknownCurriculumCourse {
            curriculum: "Cur1".into(),
            course: "Ghost".into(),
        };
        assert_eq!(
            e.to_string(),
            "curriculum 'Cur1' references unknown course 'Ghost'"
        );
    }
}
