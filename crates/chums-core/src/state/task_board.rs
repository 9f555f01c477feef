//! Task list state.
//!
//! One fetched list, shown twice: tasks assigned to the actor and tasks the
//! actor requested. A task can sit in both sections.

use log::{debug, warn};

use super::cell::StateCell;
use super::generation::{Generation, LoadTicket};
use crate::commands;
use crate::domain::{dedupe_by_id, Actor, DomainResult, Task, TaskStatus};
use crate::gateway::Gateway;
use crate::locale::keys;

#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    status: TaskStatus,
    tasks: Vec<Task>,
    generation: Generation,
    show_add: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLoad {
    pub ticket: LoadTicket,
    pub status: TaskStatus,
}

impl TaskLoad {
    pub async fn fetch(&self, gateway: &dyn Gateway) -> DomainResult<Vec<Task>> {
        commands::list_tasks(gateway, self.status).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    AssignedToMe,
    RequestedByMe,
}

impl SectionKind {
    pub fn label_key(&self) -> &'static str {
        match self {
            SectionKind::AssignedToMe => keys::TASKS_ASSIGNED,
            SectionKind::RequestedByMe => keys::TASKS_REQUESTED,
        }
    }
}

/// A non-empty section of the task list
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSection<'a> {
    pub kind: SectionKind,
    pub tasks: Vec<&'a Task>,
}

impl TaskBoard {
    pub fn new(status: TaskStatus) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Change the filter. Returns true when a reload is needed.
    pub fn set_status(&mut self, status: TaskStatus) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        self.generation.invalidate();
        true
    }

    pub fn begin_load(&mut self) -> TaskLoad {
        TaskLoad {
            ticket: self.generation.next(),
            status: self.status,
        }
    }

    /// Replace the whole list with the result of a current load
    pub fn finish_load(&mut self, ticket: LoadTicket, result: DomainResult<Vec<Task>>) -> bool {
        if !self.generation.is_current(ticket) {
            debug!("[TASKS] dropping stale load");
            return false;
        }
        match result {
            Ok(tasks) => {
                self.tasks = dedupe_by_id(tasks);
                true
            }
            Err(e) => {
                warn!("[TASKS] load failed: {}", e);
                false
            }
        }
    }

    pub fn assigned_to<'a>(&'a self, actor: &Actor) -> Vec<&'a Task> {
        match actor.person_id() {
            Some(id) => self.tasks.iter().filter(|t| t.is_assigned_to(id)).collect(),
            None => Vec::new(),
        }
    }

    pub fn requested_by<'a>(&'a self, actor: &Actor) -> Vec<&'a Task> {
        match actor.person_id() {
            Some(id) => self.tasks.iter().filter(|t| t.is_created_by(id)).collect(),
            None => Vec::new(),
        }
    }

    /// Sections to render, in display order, with empty ones left out
    pub fn sections<'a>(&'a self, actor: &Actor) -> Vec<TaskSection<'a>> {
        [
            (SectionKind::AssignedToMe, self.assigned_to(actor)),
            (SectionKind::RequestedByMe, self.requested_by(actor)),
        ]
        .into_iter()
        .filter(|(_, tasks)| !tasks.is_empty())
        .map(|(kind, tasks)| TaskSection { kind, tasks })
        .collect()
    }

    pub fn show_add(&self) -> bool {
        self.show_add
    }

    pub fn open_add_form(&mut self) {
        self.show_add = true;
    }

    /// Called on both cancel and save of the creation form. No reload here.
    pub fn close_add_form(&mut self) {
        self.show_add = false;
    }
}

/// Fetch the list for the current filter. Returns true when it was replaced.
pub async fn load_tasks<C: StateCell<TaskBoard>>(cell: &C, gateway: &dyn Gateway) -> bool {
    let Some(load) = cell.try_update(|b| b.begin_load()) else {
        return false;
    };
    let result = load.fetch(gateway).await;
    cell.try_update(|b| b.finish_load(load.ticket, result))
        .unwrap_or(false)
}

/// Switch the filter, reloading only when it actually changed
pub async fn apply_status<C: StateCell<TaskBoard>>(cell: &C, gateway: &dyn Gateway, status: TaskStatus) -> bool {
    if !cell.try_update(|b| b.set_status(status)).unwrap_or(false) {
        return false;
    }
    load_tasks(cell, gateway).await
}
