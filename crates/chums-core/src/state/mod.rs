//! View State
//!
//! Plain state machines behind the three components. Each component owns one
//! of these inside a signal; async calls are split into `begin_*` (produce the
//! request) and `finish_*` (apply the response) so a late response can be
//! recognized and dropped. The async flows that chain those steps take the
//! state through a [`StateCell`] and are shared by the components and tests.

mod cell;
mod generation;
mod group_editor;
mod notes;
mod task_board;

pub use cell::StateCell;
pub use generation::{Generation, LoadTicket};
pub use group_editor::{run_delete, run_save, EditorPhase, GroupEditor, GroupField, GROUP_LIST_ROUTE};
pub use notes::{discard_note, load_notes, save_draft, show_notes_for, NotesLoad, NotesState};
pub use task_board::{apply_status, load_tasks, SectionKind, TaskBoard, TaskLoad, TaskSection};
