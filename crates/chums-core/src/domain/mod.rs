//! Domain Layer
//!
//! Records exchanged with the backend services, plus the current actor.
//! No transport or UI concerns live here.

mod actor;
mod entity;
mod group;
mod note;
mod task;

pub use actor::Actor;
pub use entity::{dedupe_by_id, is_missing, DomainError, DomainResult, Entity};
pub use group::{Group, GroupTags, TEAM_TAG};
pub use note::Note;
pub use task::{NewTask, Task, TaskStatus};

pub(crate) use entity::null_as_default;
