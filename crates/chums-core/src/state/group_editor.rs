//! Group details editor state.
//!
//! `Idle → Editing → Saving → Saved | Editing`, with a parallel
//! `Deleting → NavigatedAway` branch after the user confirms a delete.

use log::{debug, warn};

use super::cell::StateCell;
use crate::commands;
use crate::domain::{DomainError, DomainResult, Entity, Group};
use crate::gateway::Gateway;
use crate::locale::{keys, Locale};

/// Where the editor sends the user after a delete
pub const GROUP_LIST_ROUTE: &str = "/groups";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorPhase {
    #[default]
    Idle,
    Editing,
    Saving,
    Saved,
    Deleting,
    NavigatedAway(String),
}

/// One editable field with its new value
#[derive(Debug, Clone, PartialEq)]
pub enum GroupField {
    CategoryName(String),
    Name(String),
    TrackAttendance(bool),
    ParentPickup(bool),
    About(String),
    PhotoUrl(String),
}

#[derive(Debug, Clone, Default)]
pub struct GroupEditor {
    group: Group,
    errors: Vec<String>,
    phase: EditorPhase,
}

impl GroupEditor {
    pub fn new(group: Group) -> Self {
        Self {
            group,
            ..Default::default()
        }
    }

    /// Replace the local copy with a record from the caller
    pub fn load(&mut self, group: Group) {
        self.group = group;
        self.errors.clear();
        self.phase = EditorPhase::Idle;
    }

    pub fn group(&self) -> &Group {
        &self.group
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn phase(&self) -> &EditorPhase {
        &self.phase
    }

    pub fn team_mode(&self) -> bool {
        self.group.is_team()
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, EditorPhase::Saving | EditorPhase::Deleting)
    }

    pub fn redirect(&self) -> Option<&str> {
        match &self.phase {
            EditorPhase::NavigatedAway(route) => Some(route),
            _ => None,
        }
    }

    /// Update one field of the local copy. Nothing is sent to the server.
    ///
    /// Description edits are ignored until the group has been loaded.
    pub fn apply(&mut self, field: GroupField) -> bool {
        if self.redirect().is_some() {
            return false;
        }
        let group = &mut self.group;
        match field {
            GroupField::CategoryName(value) => group.category_name = value,
            GroupField::Name(value) => group.name = value,
            GroupField::TrackAttendance(value) => group.track_attendance = value,
            GroupField::ParentPickup(value) => group.parent_pickup = value,
            GroupField::About(value) => {
                if !group.is_persisted() {
                    return false;
                }
                group.about = Some(value);
            }
            GroupField::PhotoUrl(value) => group.photo_url = Some(value),
        }
        if !self.is_busy() {
            self.phase = EditorPhase::Editing;
        }
        true
    }

    /// Check required fields, storing one message per problem
    pub fn validate(&mut self, locale: &dyn Locale) -> bool {
        let mut errors = Vec::new();
        if !self.team_mode() && self.group.category_name.is_empty() {
            errors.push(locale.label(keys::GROUP_CAT_NAME_MSG));
        }
        if self.group.name.is_empty() {
            errors.push(locale.label(keys::GROUP_NAME_MSG));
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Validate and move to `Saving`; returns the record to submit
    pub fn begin_save(&mut self, locale: &dyn Locale) -> Option<Group> {
        if self.is_busy() || self.redirect().is_some() {
            return None;
        }
        if !self.validate(locale) {
            self.phase = EditorPhase::Editing;
            debug!("[GROUP] save aborted: {} validation errors", self.errors.len());
            return None;
        }
        self.phase = EditorPhase::Saving;
        Some(self.group.clone())
    }

    /// Apply the save response. The server copy replaces local state verbatim.
    pub fn finish_save(&mut self, result: DomainResult<Group>) -> DomainResult<Group> {
        match result {
            Ok(saved) => {
                self.group = saved.clone();
                self.errors.clear();
                self.phase = EditorPhase::Saved;
                Ok(saved)
            }
            Err(e) => {
                warn!("[GROUP] save failed: {}", e);
                self.phase = EditorPhase::Editing;
                Err(e)
            }
        }
    }

    /// Move to `Deleting` after the user confirmed; returns the id to delete
    pub fn begin_delete(&mut self) -> DomainResult<String> {
        if self.is_busy() {
            return Err(DomainError::Busy);
        }
        let id = match self.group.id() {
            Some(id) if self.group.is_persisted() => id.to_string(),
            _ => return Err(DomainError::MissingId),
        };
        self.phase = EditorPhase::Deleting;
        Ok(id)
    }

    pub fn finish_delete(&mut self, result: DomainResult<()>) -> DomainResult<()> {
        match result {
            Ok(()) => {
                self.phase = EditorPhase::NavigatedAway(GROUP_LIST_ROUTE.to_string());
                Ok(())
            }
            Err(e) => {
                warn!("[GROUP] delete failed: {}", e);
                self.phase = EditorPhase::Editing;
                Err(e)
            }
        }
    }

    /// Record reported to the caller on cancel: the current local copy
    pub fn cancel(&self) -> Group {
        self.group.clone()
    }
}

/// Validate, submit and apply the server copy.
///
/// `None` when nothing was sent (invalid, busy) or the editor is gone.
pub async fn run_save<C: StateCell<GroupEditor>>(
    cell: &C,
    gateway: &dyn Gateway,
    locale: &dyn Locale,
) -> Option<DomainResult<Group>> {
    let group = cell.try_update(|e| e.begin_save(locale)).flatten()?;
    let result = commands::save_group(gateway, &group).await;
    cell.try_update(|e| e.finish_save(result))
}

/// Delete the confirmed group. `Ok` means the editor has navigated away.
pub async fn run_delete<C: StateCell<GroupEditor>>(cell: &C, gateway: &dyn Gateway) -> Option<DomainResult<()>> {
    let id = match cell.try_update(|e| e.begin_delete())? {
        Ok(id) => id,
        Err(e) => return Some(Err(e)),
    };
    let result = commands::delete_group(gateway, &id).await;
    cell.try_update(|e| e.finish_delete(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands;
    use crate::domain::GroupTags;
    use crate::locale::Labels;
    use crate::testing::{Method, MockGateway};
    use serde_json::json;
    use std::cell::RefCell;

    fn loaded(category: &str, name: &str) -> GroupEditor {
        let mut group = Group::new(category, name);
        group.id = Some("g1".into());
        GroupEditor::new(group)
    }

    fn team(name: &str) -> GroupEditor {
        let mut editor = loaded("", name);
        let mut group = editor.group().clone();
        group.tags = Some(GroupTags::list(["team"]));
        editor.load(group);
        editor
    }

    #[test]
    fn test_empty_name_is_one_error() {
        let labels = Labels::english();
        let mut editor = loaded("Foo", "");
        assert!(editor.begin_save(&labels).is_none());
        assert_eq!(editor.errors(), ["Please enter a group name."]);
        assert_eq!(editor.group().category_name, "Foo");
        assert_eq!(editor.group().name, "");
        assert_eq!(editor.phase(), &EditorPhase::Editing);
    }

    #[test]
    fn test_load_clears_previous_errors() {
        let labels = Labels::english();
        let mut editor = loaded("Foo", "");
        assert!(!editor.validate(&labels));

        editor.load(Group::new("Adults", "Study"));
        assert!(editor.errors().is_empty());
        assert_eq!(editor.phase(), &EditorPhase::Idle);
    }

    #[test]
    fn test_empty_category_is_one_error_outside_team_mode() {
        let labels = Labels::english();
        let mut editor = loaded("", "Foo");
        assert!(!editor.validate(&labels));
        assert_eq!(editor.errors(), ["Please enter a category name."]);
    }

    #[test]
    fn test_team_mode_ignores_category() {
        let labels = Labels::english();
        let mut editor = team("Greeters");
        assert!(editor.team_mode());
        assert!(editor.validate(&labels));
        assert!(editor.errors().is_empty());

        editor.apply(GroupField::Name(String::new()));
        assert!(!editor.validate(&labels));
        assert_eq!(editor.errors().len(), 1);
    }

    #[test]
    fn test_field_updates_touch_one_field() {
        let mut editor = loaded("Adults", "Study");
        let before = editor.group().clone();

        assert!(editor.apply(GroupField::ParentPickup(true)));
        assert_eq!(editor.phase(), &EditorPhase::Editing);

        let mut expected = before;
        expected.parent_pickup = true;
        assert_eq!(editor.group(), &expected);
    }

    #[test]
    fn test_about_ignored_before_load() {
        let mut editor = GroupEditor::new(Group::new("Adults", "Study"));
        assert!(!editor.apply(GroupField::About("# Hello".into())));
        assert_eq!(editor.group().about, None);

        let mut editor = loaded("Adults", "Study");
        assert!(editor.apply(GroupField::About("# Hello".into())));
        assert_eq!(editor.group().about.as_deref(), Some("# Hello"));
    }

    #[tokio::test]
    async fn test_save_replaces_local_state_with_server_copy() {
        let labels = Labels::english();
        let gateway = MockGateway::new();
        gateway.respond(
            Method::Post,
            "/groups",
            Ok(json!([{ "id": "g1", "categoryName": "Adults", "name": "Study (Tue)", "slug": "study-tue" }])),
        );

        let mut editor = loaded("Adults", "Study");
        editor.apply(GroupField::Name("Study (Tue)".into()));
        let payload = editor.begin_save(&labels).unwrap();
        assert_eq!(editor.phase(), &EditorPhase::Saving);

        let result = commands::save_group(&gateway, &payload).await;
        let saved = editor.finish_save(result).unwrap();
        assert_eq!(editor.group(), &saved);
        assert_eq!(editor.group().extra.get("slug"), Some(&json!("study-tue")));
        assert_eq!(editor.phase(), &EditorPhase::Saved);
    }

    #[test]
    fn test_failed_save_returns_to_editing_with_edits() {
        let labels = Labels::english();
        let mut editor = loaded("Adults", "Study");
        editor.apply(GroupField::Name("Renamed".into()));
        editor.begin_save(&labels).unwrap();

        assert!(editor.finish_save(Err(DomainError::Network("offline".into()))).is_err());
        assert_eq!(editor.phase(), &EditorPhase::Editing);
        assert_eq!(editor.group().name, "Renamed");
    }

    #[test]
    fn test_no_double_save() {
        let labels = Labels::english();
        let mut editor = loaded("Adults", "Study");
        assert!(editor.begin_save(&labels).is_some());
        assert!(editor.begin_save(&labels).is_none());
        assert_eq!(editor.begin_delete(), Err(DomainError::Busy));
    }

    #[tokio::test]
    async fn test_run_save_posts_once_and_applies_server_copy() {
        let labels = Labels::english();
        let gateway = MockGateway::new();
        gateway.respond(Method::Post, "/groups", Ok(json!([{ "id": "g1", "categoryName": "Adults", "name": "Study" }])));
        let cell = RefCell::new(loaded("Adults", "Study"));

        let saved = run_save(&cell, &gateway, &labels).await.unwrap().unwrap();
        assert_eq!(saved.name, "Study");
        assert_eq!(cell.borrow().phase(), &EditorPhase::Saved);
        assert_eq!(gateway.count(Method::Post, "/groups"), 1);
    }

    #[tokio::test]
    async fn test_run_save_invalid_sends_nothing() {
        let labels = Labels::english();
        let gateway = MockGateway::new();
        let cell = RefCell::new(loaded("Adults", ""));

        assert!(run_save(&cell, &gateway, &labels).await.is_none());
        assert!(gateway.calls().is_empty());
        assert_eq!(cell.borrow().errors().len(), 1);
    }

    #[tokio::test]
    async fn test_run_save_failure_keeps_edits() {
        let labels = Labels::english();
        let gateway = MockGateway::new();
        gateway.respond(Method::Post, "/groups", Err(DomainError::Status { status: 500, path: "/groups".into() }));
        let cell = RefCell::new(loaded("Adults", "Study"));
        cell.borrow_mut().apply(GroupField::Name("Renamed".into()));

        assert!(run_save(&cell, &gateway, &labels).await.unwrap().is_err());
        assert_eq!(cell.borrow().group().name, "Renamed");
        assert_eq!(cell.borrow().phase(), &EditorPhase::Editing);
    }

    #[tokio::test]
    async fn test_run_delete_flows() {
        let gateway = MockGateway::new();
        let unsaved = RefCell::new(GroupEditor::new(Group::new("Adults", "Study")));
        assert_eq!(run_delete(&unsaved, &gateway).await, Some(Err(DomainError::MissingId)));
        assert!(gateway.calls().is_empty());

        let cell = RefCell::new(loaded("Adults", "Study"));
        assert_eq!(run_delete(&cell, &gateway).await, Some(Ok(())));
        assert_eq!(gateway.count(Method::Delete, "/groups/g1"), 1);
        assert_eq!(cell.borrow().redirect(), Some(GROUP_LIST_ROUTE));
    }

    #[tokio::test]
    async fn test_delete_navigates_to_list() {
        let gateway = MockGateway::new();
        let mut editor = loaded("Adults", "Study");

        let id = editor.begin_delete().unwrap();
        let result = commands::delete_group(&gateway, &id).await;
        editor.finish_delete(result).unwrap();

        assert_eq!(gateway.count(Method::Delete, "/groups/g1"), 1);
        assert_eq!(editor.redirect(), Some(GROUP_LIST_ROUTE));
        assert!(!editor.apply(GroupField::Name("late".into())));
    }

    #[test]
    fn test_delete_requires_id() {
        let mut editor = GroupEditor::new(Group::new("Adults", "Study"));
        assert_eq!(editor.begin_delete(), Err(DomainError::MissingId));
        assert_eq!(editor.phase(), &EditorPhase::Idle);
    }

    #[test]
    fn test_photo_selection_is_local() {
        let mut editor = loaded("Adults", "Study");
        editor.apply(GroupField::PhotoUrl("https://img.example.org/a.png".into()));
        assert_eq!(editor.group().photo_url.as_deref(), Some("https://img.example.org/a.png"));
        assert_eq!(editor.cancel(), editor.group().clone());
    }
}
