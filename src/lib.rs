//! Curriculum-based course timetabling core.
//!
//! Assigns course lectures to a (day × period × room) grid under hard
//! conflict constraints (room occupancy, lecturer clashes, curriculum
//! clashes, course availability) and a five-term soft objective with exact
//! incremental (delta) scoring, built for destroy/repair local search.
//!
//! # Modules
//!
//! - **`models`**: domain types — `Course`, `Room`, `Curriculum`,
//!   `Unavailability`, the resolved immutable `Catalog`, dense ids, `Slot`
//! - **`solution`**: the mutable `Timetable` grid with the
//!   insert/remove/destroy move primitives, hard-constraint feasibility
//!   checking, and greedy random initial construction
//! - **`objective`**: tunable `Weights`, the `Score` breakdown, full and
//!   per-move delta evaluation
//! - **`validation`**: catalog integrity checks (duplicate names, dangling
//!   references, out-of-range windows)
//!
//! # Usage
//!
//! A search driver builds a [`Catalog`] from loader output, wraps it in a
//! [`Timetable`], seeds it with [`Timetable::build_initial_solution`], and
//! then improves the schedule by alternating [`Timetable::destroy`] with
//! feasibility-gated [`Timetable::insert`] calls, accepting or rejecting
//! moves on the returned deltas. [`Timetable::evaluate`] produces the final
//! score breakdown; [`Timetable::placed_lectures`] exposes the grid for
//! export. The core is single-threaded and performs no I/O; iteration and
//! time budgets belong to the driver, which can stop between any two calls
//! without leaving the grid inconsistent.

pub mod models;
pub mod objective;
pub mod solution;
pub mod validation;

pub use models::{
    Catalog, Course, CourseId, Curriculum, CurriculumId, Room, RoomId, Slot, Unavailability,
};
pub use objective::{Score, Weights};
pub use solution::{Cell, MoveError, Timetable};
pub use validation::CatalogError;
