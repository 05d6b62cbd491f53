//! Timetabling domain models.
//!
//! Input entities arrive from an external loader in name-keyed form
//! (`Course`, `Room`, `Curriculum`, `Unavailability`) and are resolved into
//! an immutable [`Catalog`] with dense ids and precomputed lookups. The
//! catalog is the only reference data the solution grid and the objective
//! ever consult.

mod catalog;
mod course;
mod curriculum;
mod ids;
mod room;
mod slot;
mod unavailability;

pub use catalog::Catalog;
pub use course::Course;
pub use curriculum::Curriculum;
pub use ids::{CourseId, CurriculumId, RoomId};
pub use room::Room;
pub use slot::Slot;
pub use unavailability::Unavailability;
