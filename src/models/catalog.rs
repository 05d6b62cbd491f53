//! Entity catalog: immutable reference data for one timetabling instance.
//!
//! Built once from loader output (courses, rooms, curricula, unavailability
//! windows plus the grid dimensions), validated, and then only read for the
//! lifetime of a solve. Construction resolves entity names to dense ids and
//! precomputes the lookups the hot paths need:
//! - course → curricula and curriculum → courses (both directions of the
//!   many-to-many membership relation)
//! - per-course unavailable (day, period) sets

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::validation::{self, CatalogError};

use super::{Course, CourseId, Curriculum, CurriculumId, Room, RoomId, Unavailability};

/// Immutable reference data for a timetabling instance.
#[derive(Debug, Clone)]
pub struct Catalog {
    days: usize,
    periods_per_day: usize,
    courses: Vec<Course>,
    rooms: Vec<Room>,
    curricula: Vec<Curriculum>,
    course_curricula: Vec<Vec<CurriculumId>>,
    curriculum_courses: Vec<Vec<CourseId>>,
    unavailable: Vec<HashSet<(usize, usize)>>,
    course_ids: HashMap<String, CourseId>,
    room_ids: HashMap<String, RoomId>,
    curriculum_ids: HashMap<String, CurriculumId>,
    total_lectures: usize,
}

impl Catalog {
    /// Builds and validates a catalog from loader output.
    ///
    /// Entity ids are assigned in input order. Returns every integrity
    /// problem found, not just the first.
    pub fn build(
        days: usize,
        periods_per_day: usize,
        courses: Vec<Course>,
        rooms: Vec<Room>,
        curricula: Vec<Curriculum>,
        unavailability: Vec<Unavailability>,
    ) -> Result<Self, Vec<CatalogError>> {
        validation::validate(
            days,
            periods_per_day,
            &courses,
            &rooms,
            &curricula,
            &unavailability,
        )?;

        let course_ids: HashMap<String, CourseId> = courses
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), CourseId::new(i)))
            .collect();
        let room_ids: HashMap<String, RoomId> = rooms
            .iter()
            .enumerate()
            .map(|(i, r)| (r.name.clone(), RoomId::new(i)))
            .collect();
        let curriculum_ids: HashMap<String, CurriculumId> = curricula
            .iter()
            .enumerate()
            .map(|(i, q)| (q.name.clone(), CurriculumId::new(i)))
            .collect();

        let mut course_curricula = vec![Vec::new(); courses.len()];
        let mut curriculum_courses = Vec::with_capacity(curricula.len());
        for (qi, q) in curricula.iter().enumerate() {
            let qid = CurriculumId::new(qi);
            let mut members: Vec<CourseId> = Vec::with_capacity(q.courses.len());
            for name in &q.courses {
                let cid = course_ids[name.as_str()];
                // Listing a course twice in one curriculum has no extra meaning.
                if !members.contains(&cid) {
                    members.push(cid);
                    course_curricula[cid.index()].push(qid);
                }
            }
            curriculum_courses.push(members);
        }

        let mut unavailable = vec![HashSet::new(); courses.len()];
        for u in &unavailability {
            let cid = course_ids[u.course.as_str()];
            unavailable[cid.index()].insert((u.day, u.period));
        }

        let total_lectures = courses.iter().map(|c| c.lectures as usize).sum();
        debug!(
            courses = courses.len(),
            rooms = rooms.len(),
            curricula = curricula.len(),
            total_lectures,
            "catalog built"
        );

        Ok(Self {
            days,
            periods_per_day,
            courses,
            rooms,
            curricula,
            course_curricula,
            curriculum_courses,
            unavailable,
            course_ids,
            room_ids,
            curriculum_ids,
            total_lectures,
        })
    }

    /// Number of days in the planning horizon.
    #[inline]
    pub fn days(&self) -> usize {
        self.days
    }

    /// Number of periods per day.
    #[inline]
    pub fn periods_per_day(&self) -> usize {
        self.periods_per_day
    }

    /// Number of rooms.
    #[inline]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of courses.
    #[inline]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Number of curricula.
    #[inline]
    pub fn curriculum_count(&self) -> usize {
        self.curricula.len()
    }

    /// Total cell count of the (day × period × room) grid.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.days * self.periods_per_day * self.rooms.len()
    }

    /// Total lecture occurrences across all courses.
    #[inline]
    pub fn total_lectures(&self) -> usize {
        self.total_lectures
    }

    /// The course with the given id.
    #[inline]
    pub fn course(&self, id: CourseId) -> &Course {
        &self.courses[id.index()]
    }

    /// The room with the given id.
    #[inline]
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    /// Name of the curriculum with the given id.
    pub fn curriculum_name(&self, id: CurriculumId) -> &str {
        &self.curricula[id.index()].name
    }

    /// Looks up a course by name.
    pub fn course_id(&self, name: &str) -> Option<CourseId> {
        self.course_ids.get(name).copied()
    }

    /// Looks up a room by name.
    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.room_ids.get(name).copied()
    }

    /// Looks up a curriculum by name.
    pub fn curriculum_id(&self, name: &str) -> Option<CurriculumId> {
        self.curriculum_ids.get(name).copied()
    }

    /// Iterates all courses with their ids, in id order.
    pub fn courses(&self) -> impl Iterator<Item = (CourseId, &Course)> {
        self.courses
            .iter()
            .enumerate()
            .map(|(i, c)| (CourseId::new(i), c))
    }

    /// Iterates all rooms with their ids, in id order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(i, r)| (RoomId::new(i), r))
    }

    /// Curricula the course belongs to.
    #[inline]
    pub fn curricula_of(&self, course: CourseId) -> &[CurriculumId] {
        &self.course_curricula[course.index()]
    }

    /// Member courses of a curriculum.
    #[inline]
    pub fn courses_in(&self, curriculum: CurriculumId) -> &[CourseId] {
        &self.curriculum_courses[curriculum.index()]
    }

    /// Whether the course is blocked at (day, period).
    ///
    /// A course with no unavailability entries is always available.
    #[inline]
    pub fn is_unavailable(&self, course: CourseId, day: usize, period: usize) -> bool {
        self.unavailable[course.index()].contains(&(day, period))
    }

    /// Whether two courses are taught by the same lecturer.
    #[inline]
    pub fn same_lecturer(&self, a: CourseId, b: CourseId) -> bool {
        self.courses[a.index()].lecturer == self.courses[b.index()].lecturer
    }

    /// Whether two courses belong to at least one common curriculum.
    pub fn share_curriculum(&self, a: CourseId, b: CourseId) -> bool {
        let qa = &self.course_curricula[a.index()];
        self.course_curricula[b.index()]
            .iter()
            .any(|q| qa.contains(q))
    }
}
