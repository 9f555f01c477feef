//! Notes panel state.

use std::future::Future;
use std::sync::Arc;

use log::{debug, warn};

use super::cell::StateCell;
use super::generation::{Generation, LoadTicket};
use crate::commands;
use crate::domain::{dedupe_by_id, is_missing, DomainError, DomainResult, Note};
use crate::gateway::Gateway;

/// Notes attached to one record, plus the unsaved draft
#[derive(Debug, Clone, Default)]
pub struct NotesState {
    content_type: String,
    content_id: Option<String>,
    notes: Vec<Note>,
    draft: String,
    generation: Generation,
}

/// A pending fetch for one (content type, content id) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesLoad {
    pub ticket: LoadTicket,
    pub content_type: String,
    pub content_id: String,
}

impl NotesLoad {
    pub async fn fetch(&self, gateway: &dyn Gateway) -> DomainResult<Vec<Note>> {
        commands::list_notes(gateway, &self.content_type, &self.content_id).await
    }
}

impl NotesState {
    pub fn new(content_type: &str, content_id: Option<String>) -> Self {
        Self {
            content_type: content_type.to_string(),
            content_id,
            ..Default::default()
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    pub fn content_id(&self) -> Option<&str> {
        self.content_id.as_deref().filter(|id| !is_missing(Some(id)))
    }

    /// Point the panel at another record. Returns false when nothing changed.
    /// The old record's notes and draft go away and in-flight loads for it
    /// become stale.
    pub fn retarget(&mut self, content_type: &str, content_id: Option<String>) -> bool {
        if self.content_type == content_type && self.content_id == content_id {
            return false;
        }
        self.content_type = content_type.to_string();
        self.content_id = content_id;
        self.notes.clear();
        self.draft.clear();
        self.generation.invalidate();
        true
    }

    /// Start a load; `None` when the content id is missing
    pub fn begin_load(&mut self) -> Option<NotesLoad> {
        let content_id = self.content_id()?.to_string();
        Some(NotesLoad {
            ticket: self.generation.next(),
            content_type: self.content_type.clone(),
            content_id,
        })
    }

    /// Apply a load result. Returns true when the list was replaced.
    ///
    /// Stale tickets are dropped; failures keep the previous list.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: DomainResult<Vec<Note>>) -> bool {
        if !self.generation.is_current(ticket) {
            debug!("[NOTES] dropping stale load");
            return false;
        }
        match result {
            Ok(notes) => {
                self.notes = dedupe_by_id(notes);
                true
            }
            Err(e) => {
                warn!("[NOTES] load failed: {}", e);
                false
            }
        }
    }

    /// Note to submit for the current draft; `None` without a content id
    pub fn draft_note(&self) -> Option<Note> {
        let content_id = self.content_id()?;
        Some(Note::draft(&self.content_type, content_id, &self.draft))
    }

    /// Apply a save result. On success the draft clears and the caller reloads.
    pub fn finish_save(&mut self, result: DomainResult<()>) -> DomainResult<()> {
        if result.is_ok() {
            self.draft.clear();
        }
        result
    }

    /// Optimistically drop a note. The remote delete is not awaited.
    pub fn remove_note(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id.as_deref() != Some(id));
        self.notes.len() != before
    }
}

/// Fetch the notes of the current target. Returns true when the list was replaced.
pub async fn load_notes<C: StateCell<NotesState>>(cell: &C, gateway: &dyn Gateway) -> bool {
    let Some(load) = cell.try_update(|s| s.begin_load()).flatten() else {
        return false;
    };
    let result = load.fetch(gateway).await;
    cell.try_update(|s| s.finish_load(load.ticket, result))
        .unwrap_or(false)
}

/// Point the panel at a record and load its notes
pub async fn show_notes_for<C: StateCell<NotesState>>(
    cell: &C,
    gateway: &dyn Gateway,
    content_type: &str,
    content_id: Option<String>,
) -> bool {
    cell.try_update(|s| s.retarget(content_type, content_id));
    load_notes(cell, gateway).await
}

/// Save the draft as a one-note batch; a successful save always reloads
pub async fn save_draft<C: StateCell<NotesState>>(cell: &C, gateway: &dyn Gateway) -> DomainResult<()> {
    let note = cell
        .try_update(|s| s.draft_note())
        .flatten()
        .ok_or(DomainError::MissingId)?;
    let result = commands::save_notes(gateway, &[note]).await;
    match cell.try_update(|s| s.finish_save(result)) {
        Some(Ok(())) => {
            load_notes(cell, gateway).await;
            Ok(())
        }
        Some(Err(e)) => Err(e),
        None => Ok(()),
    }
}

/// Drop the note from the list now and hand back the remote delete.
///
/// The returned future is meant to run unawaited; a failure is only logged
/// and the list stays pruned until the next load.
pub fn discard_note<C: StateCell<NotesState>>(
    cell: &C,
    gateway: Arc<dyn Gateway>,
    id: String,
) -> impl Future<Output = ()> + 'static {
    cell.try_update(|s| s.remove_note(&id));
    async move {
        if let Err(e) = commands::delete_note(gateway.as_ref(), &id).await {
            warn!("[NOTES] delete of {} failed: {}", id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::testing::{Method, MockGateway};
    use serde_json::json;
    use std::cell::RefCell;

    fn note(id: &str, contents: &str) -> Note {
        Note {
            id: Some(id.to_string()),
            contents: contents.to_string(),
            ..Default::default()
        }
    }

    async fn load(state: &mut NotesState, gateway: &MockGateway) -> bool {
        match state.begin_load() {
            Some(load) => {
                let result = load.fetch(gateway).await;
                state.finish_load(load.ticket, result)
            }
            None => false,
        }
    }

    #[tokio::test]
    async fn test_mount_fetches_once_for_present_id() {
        let gateway = MockGateway::new();
        gateway.respond(Method::Get, "/notes/person/p1", Ok(json!([{ "id": "n1", "contents": "a" }])));

        let mut state = NotesState::new("person", Some("p1".into()));
        assert!(load(&mut state, &gateway).await);
        assert_eq!(gateway.calls().len(), 1);
        assert_eq!(gateway.count(Method::Get, "/notes/person/p1"), 1);
        assert_eq!(state.notes().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_id_never_fetches() {
        let gateway = MockGateway::new();
        for missing in [None, Some(String::new()), Some("0".to_string())] {
            let mut state = NotesState::new("person", missing);
            assert!(!load(&mut state, &gateway).await);
            assert!(state.draft_note().is_none());
        }
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_mount_flow_fetches_once() {
        let gateway = MockGateway::new();
        let cell = RefCell::new(NotesState::new("person", Some("p1".into())));

        assert!(show_notes_for(&cell, &gateway, "person", Some("p1".into())).await);
        assert_eq!(gateway.calls().len(), 1);
        assert_eq!(gateway.count(Method::Get, "/notes/person/p1"), 1);

        let gateway = MockGateway::new();
        let cell = RefCell::new(NotesState::new("person", None));
        assert!(!show_notes_for(&cell, &gateway, "person", None).await);
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_save_clears_draft_and_reloads() {
        let gateway = MockGateway::new();
        gateway.respond(Method::Get, "/notes/person/p1", Ok(json!([{ "id": "n9", "contents": "Visited on Sunday" }])));
        let cell = RefCell::new(NotesState::new("person", Some("p1".into())));
        cell.borrow_mut().set_draft("Visited on Sunday".into());

        assert!(save_draft(&cell, &gateway).await.is_ok());

        let calls = gateway.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!((calls[0].method, calls[0].path.as_str()), (Method::Post, "/notes"));
        assert_eq!(calls[0].body, Some(json!([{ "contentType": "person", "contentId": "p1", "contents": "Visited on Sunday" }])));
        assert_eq!((calls[1].method, calls[1].path.as_str()), (Method::Get, "/notes/person/p1"));
        assert_eq!(cell.borrow().draft(), "");
        assert_eq!(cell.borrow().notes()[0].contents, "Visited on Sunday");
    }

    #[tokio::test]
    async fn test_failed_save_flow_skips_reload() {
        let gateway = MockGateway::new();
        gateway.respond(Method::Post, "/notes", Err(DomainError::Network("offline".into())));
        let cell = RefCell::new(NotesState::new("person", Some("p1".into())));
        cell.borrow_mut().set_draft("keep me".into());

        assert!(save_draft(&cell, &gateway).await.is_err());
        assert_eq!(gateway.calls().len(), 1);
        assert_eq!(cell.borrow().draft(), "keep me");
    }

    #[tokio::test]
    async fn test_save_without_target_sends_nothing() {
        let gateway = MockGateway::new();
        let cell = RefCell::new(NotesState::new("person", None));
        cell.borrow_mut().set_draft("orphan".into());

        assert_eq!(save_draft(&cell, &gateway).await, Err(DomainError::MissingId));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_discard_removes_before_delete_runs() {
        let gateway = Arc::new(MockGateway::new());
        gateway.respond(Method::Delete, "/notes/b", Err(DomainError::Status { status: 500, path: "/notes/b".into() }));
        let cell = RefCell::new(NotesState::new("person", Some("p1".into())));
        let ticket = cell.borrow_mut().begin_load().unwrap().ticket;
        cell.borrow_mut().finish_load(ticket, Ok(vec![note("a", "1"), note("b", "2")]));

        let pending = discard_note(&cell, gateway.clone(), "b".into());
        assert_eq!(cell.borrow().notes().len(), 1);
        assert!(gateway.calls().is_empty());

        pending.await;
        assert_eq!(gateway.count(Method::Delete, "/notes/b"), 1);
        assert_eq!(cell.borrow().notes()[0].id.as_deref(), Some("a"));
    }

    #[test]
    fn test_failed_save_keeps_draft() {
        let mut state = NotesState::new("person", Some("p1".into()));
        state.set_draft("keep me".into());
        let err = DomainError::Network("offline".into());
        assert_eq!(state.finish_save(Err(err.clone())), Err(err));
        assert_eq!(state.draft(), "keep me");
    }

    #[test]
    fn test_remove_note_removes_only_matching_id() {
        let mut state = NotesState::new("person", Some("p1".into()));
        let ticket = state.begin_load().unwrap().ticket;
        state.finish_load(ticket, Ok(vec![note("a", "1"), note("b", "2"), note("c", "3")]));

        assert!(state.remove_note("b"));
        let ids: Vec<_> = state.notes().iter().map(|n| n.id.clone().unwrap()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(!state.remove_note("zzz"));
    }

    #[test]
    fn test_failed_load_keeps_previous_list() {
        let mut state = NotesState::new("person", Some("p1".into()));
        let ticket = state.begin_load().unwrap().ticket;
        state.finish_load(ticket, Ok(vec![note("a", "1")]));

        let ticket = state.begin_load().unwrap().ticket;
        assert!(!state.finish_load(ticket, Err(DomainError::Status { status: 500, path: "/notes".into() })));
        assert_eq!(state.notes().len(), 1);
    }

    #[test]
    fn test_stale_load_after_retarget_is_dropped() {
        let mut state = NotesState::new("person", Some("p1".into()));
        let old = state.begin_load().unwrap();

        assert!(state.retarget("person", Some("p2".into())));
        let new = state.begin_load().unwrap();
        assert_eq!(new.content_id, "p2");

        assert!(!state.finish_load(old.ticket, Ok(vec![note("old", "x")])));
        assert!(state.notes().is_empty());
        assert!(state.finish_load(new.ticket, Ok(vec![note("new", "y")])));
        assert_eq!(state.notes()[0].id.as_deref(), Some("new"));
    }

    #[test]
    fn test_retarget_drops_previous_record() {
        let mut state = NotesState::new("person", Some("p1".into()));
        let ticket = state.begin_load().unwrap().ticket;
        state.finish_load(ticket, Ok(vec![note("n1", "p1 only")]));
        state.set_draft("about p1".into());

        assert!(state.retarget("person", None));
        assert!(state.begin_load().is_none());
        assert!(state.notes().is_empty());
        assert_eq!(state.draft(), "");

        assert!(state.retarget("person", Some("p1".into())));
        let ticket = state.begin_load().unwrap().ticket;
        state.finish_load(ticket, Ok(vec![note("n1", "p1 only")]));
        assert!(state.retarget("person", Some("p2".into())));
        assert!(state.notes().is_empty());
    }

    #[test]
    fn test_retarget_same_id_is_noop() {
        let mut state = NotesState::new("person", Some("p1".into()));
        let load = state.begin_load().unwrap();
        assert!(!state.retarget("person", Some("p1".into())));
        assert!(state.finish_load(load.ticket, Ok(vec![])));
    }

    #[test]
    fn test_reload_drops_duplicate_ids() {
        let mut state = NotesState::new("person", Some("p1".into()));
        let ticket = state.begin_load().unwrap().ticket;
        state.finish_load(ticket, Ok(vec![note("a", "1"), note("a", "dup"), note("b", "2")]));
        assert_eq!(state.notes().len(), 2);
        assert_eq!(state.notes()[0].contents, "1");
    }
}
