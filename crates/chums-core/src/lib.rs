//! CHUMS Core
//!
//! Browser-independent half of the CHUMS UI components:
//! - domain: Records exchanged with the membership and task APIs
//! - gateway: Remote data gateway contract
//! - commands: Typed endpoint wrappers over the gateway
//! - state: View state for the notes panel, group editor and task list

pub mod commands;
pub mod config;
pub mod domain;
pub mod gateway;
pub mod humanize;
pub mod locale;
pub mod permissions;
pub mod state;

#[cfg(test)]
mod testing;

pub use config::{AppConfig, DemoTargets, ServiceEndpoint};
pub use domain::{Actor, DomainError, DomainResult, Entity, Group, GroupTags, Note, Task, TaskStatus};
pub use gateway::{Gateway, ServiceName};
pub use locale::{Labels, Locale};
pub use permissions::{Capability, PermissionPolicy};
