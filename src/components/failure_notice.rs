//! Failure Notice Banner
//!
//! Shows the generic failure notice from the store and dismisses it after
//! the configured delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{store_clear_failure, use_ui_store, UiStateStoreFields};

#[component]
pub fn FailureNotice() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();

    // Each new notice starts its own dismiss timer
    Effect::new(move |_| {
        let seq = store.failure_seq().get();
        if seq == 0 {
            return;
        }
        let timeout = ctx.notice_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            store_clear_failure(&store, seq);
        });
    });

    view! {
        {move || store.failure().get().map(|message| view! {
            <div class="failure-notice" role="alert">
                <span>{message}</span>
                <button
                    class="close-btn"
                    on:click=move |_| store_clear_failure(&store, store.failure_seq().get_untracked())
                >
                    "×"
                </button>
            </div>
        })}
    }
}
