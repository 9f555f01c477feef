//! Localization
//!
//! Label lookup for user-facing text. Unknown keys echo back unchanged so a
//! missing translation is visible rather than blank.

use std::collections::HashMap;

/// Label keys used by the components
pub mod keys {
    pub const NOTES_HEADER: &str = "notes.header";
    pub const NOTES_ADD: &str = "notes.add";
    pub const NOTES_ADD_LABEL: &str = "notes.addLabel";

    pub const GROUP_DETAILS: &str = "groups.groupDetailsEdit.groupDet";
    pub const GROUP_CAT_NAME: &str = "groups.groupDetailsEdit.catName";
    pub const GROUP_CAT_NAME_MSG: &str = "groups.groupDetailsEdit.catNameMsg";
    pub const GROUP_NAME: &str = "groups.groupDetailsEdit.groupName";
    pub const GROUP_NAME_MSG: &str = "groups.groupDetailsEdit.groupNameMsg";
    pub const GROUP_ATTENDANCE: &str = "groups.groupDetailsEdit.attTrack";
    pub const GROUP_PICKUP: &str = "groups.groupDetailsEdit.parPick";
    pub const GROUP_DESCRIPTION: &str = "groups.groupDetailsEdit.groupDesc";
    pub const GROUP_IMAGE: &str = "groups.groupDetailsEdit.groupImg";
    pub const GROUP_SELECT_IMAGE: &str = "groups.groupDetailsEdit.selImg";
    pub const GROUP_CONFIRM_DELETE: &str = "groups.groupDetailsEdit.confirmMsg";

    pub const TASKS_HEADER: &str = "tasks.header";
    pub const TASKS_ASSIGNED: &str = "tasks.assignedToMe";
    pub const TASKS_REQUESTED: &str = "tasks.requestedByMe";
    pub const TASKS_TITLE: &str = "tasks.title";
    pub const TASKS_ASSOCIATED: &str = "tasks.associatedWith";
    pub const TASKS_ASSIGNED_TO: &str = "tasks.assignedTo";
    pub const TASKS_NEW: &str = "tasks.newTask";

    pub const COMMON_YES: &str = "common.yes";
    pub const COMMON_NO: &str = "common.no";
    pub const COMMON_SAVE: &str = "common.save";
    pub const COMMON_CANCEL: &str = "common.cancel";
    pub const COMMON_DELETE: &str = "common.delete";
    pub const COMMON_FAILURE: &str = "common.failure";
}

pub trait Locale: Send + Sync {
    fn label(&self, key: &str) -> String;
}

/// In-memory label table
#[derive(Debug, Clone, Default)]
pub struct Labels {
    entries: HashMap<String, String>,
}

impl Labels {
    pub fn english() -> Self {
        use keys::*;
        let entries = [
            (NOTES_HEADER, "Notes"),
            (NOTES_ADD, "Add Note"),
            (NOTES_ADD_LABEL, "Add a Note"),
            (GROUP_DETAILS, "Group Details"),
            (GROUP_CAT_NAME, "Category Name"),
            (GROUP_CAT_NAME_MSG, "Please enter a category name."),
            (GROUP_NAME, "Group Name"),
            (GROUP_NAME_MSG, "Please enter a group name."),
            (GROUP_ATTENDANCE, "Track Attendance"),
            (GROUP_PICKUP, "Parent Pickup"),
            (GROUP_DESCRIPTION, "Group description"),
            (GROUP_IMAGE, "Group Image"),
            (GROUP_SELECT_IMAGE, "Select photo"),
            (GROUP_CONFIRM_DELETE, "Are you sure you wish to permanently delete this group?"),
            (TASKS_HEADER, "Tasks"),
            (TASKS_ASSIGNED, "Assigned to Me"),
            (TASKS_REQUESTED, "Requested by Me"),
            (TASKS_TITLE, "Title"),
            (TASKS_ASSOCIATED, "Associated with"),
            (TASKS_ASSIGNED_TO, "Assigned to"),
            (TASKS_NEW, "New Task"),
            (COMMON_YES, "Yes"),
            (COMMON_NO, "No"),
            (COMMON_SAVE, "Save"),
            (COMMON_CANCEL, "Cancel"),
            (COMMON_DELETE, "Delete"),
            (COMMON_FAILURE, "Something went wrong. Please try again."),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self { entries }
    }

    /// Replace or add labels, e.g. from configuration
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.entries.extend(overrides);
        self
    }
}

impl Locale for Labels {
    fn label(&self, key: &str) -> String {
        self.entries.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}
