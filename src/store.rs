//! UI State Store
//!
//! App-wide UI state with field-level reactivity (reactive_stores).

use chums_core::state::StateCell;
use chums_core::DomainError;
use leptos::prelude::*;
use reactive_stores::Store;

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Generic failure notice shown in the banner
    pub failure: Option<String>,
    /// Bumped for every notice so an old dismiss timer leaves a newer notice alone
    pub failure_seq: u32,
    /// Status filter handed to the task list
    pub task_status: String,
}

impl UiState {
    pub fn new(task_status: &str) -> Self {
        Self {
            task_status: task_status.to_string(),
            ..Default::default()
        }
    }
}

pub type UiStore = Store<UiState>;

pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

/// Component-owned view state, handed to the async flows in `chums_core::state`.
/// Updates after the component is disposed are dropped.
pub struct SignalCell<T: 'static>(pub RwSignal<T>);

impl<T: Send + Sync + 'static> StateCell<T> for SignalCell<T> {
    fn try_update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

// ========================
// Store Helper Functions
// ========================

/// Log a service failure and show the generic notice
pub fn store_report_failure(store: &UiStore, notice: String, error: &DomainError) {
    log::error!("[APP] {}", error);
    *store.failure().write() = Some(notice);
    *store.failure_seq().write() += 1;
}

/// Clear the notice if it is still the one raised as `seq`
pub fn store_clear_failure(store: &UiStore, seq: u32) {
    if store.failure_seq().get_untracked() == seq {
        *store.failure().write() = None;
    }
}

pub fn store_set_task_status(store: &UiStore, status: &str) {
    *store.task_status().write() = status.to_string();
}
