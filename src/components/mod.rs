//! UI Components
//!
//! Leptos components for notes, group editing and task lists, plus the small
//! presentation collaborators they render through.

mod delete_confirm_button;
mod error_messages;
mod failure_notice;
mod gallery_picker;
mod group_details_edit;
mod input_box;
mod markdown_editor;
mod new_task_form;
mod notes_panel;
mod task_list;

pub use delete_confirm_button::DeleteConfirmButton;
pub use error_messages::ErrorMessages;
pub use failure_notice::FailureNotice;
pub use gallery_picker::GalleryPicker;
pub use group_details_edit::GroupDetailsEdit;
pub use input_box::{DisplayBox, InputBox};
pub use markdown_editor::MarkdownEditor;
pub use new_task_form::NewTaskForm;
pub use notes_panel::NotesPanel;
pub use task_list::TaskList;
