//! Notes Panel Component
//!
//! Notes attached to one record. Actors with the notes edit capability also
//! get a form to add a note.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use chums_core::locale::keys;
use chums_core::state::{discard_note, save_draft, show_notes_for, NotesState};
use chums_core::{humanize, Capability, DomainError, Note};

use crate::components::{DisplayBox, InputBox};
use crate::context::use_app_context;
use crate::store::{store_report_failure, use_ui_store, SignalCell};

#[component]
fn NoteRow(note: Note, can_edit: bool, on_delete: Callback<String>) -> impl IntoView {
    let added = humanize::since(note.date_added.as_deref(), Utc::now());
    let meta = match (note.added_by.clone(), added.is_empty()) {
        (Some(by), false) => Some(format!("{} · {} ago", by, added)),
        (Some(by), true) => Some(by),
        (None, false) => Some(format!("{} ago", added)),
        (None, true) => None,
    };

    view! {
        <div class="note">
            {meta.map(|meta| view! { <div class="note-meta">{meta}</div> })}
            <div class="note-contents">{note.contents.clone()}</div>
            {note.id.clone().filter(|_| can_edit).map(|id| view! {
                <button class="note-delete" on:click=move |_| on_delete.run(id.clone())>"×"</button>
            })}
        </div>
    }
}

#[component]
pub fn NotesPanel(
    #[prop(into)] content_type: Signal<String>,
    #[prop(into)] content_id: Signal<Option<String>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let state = RwSignal::new(NotesState::new(
        &content_type.get_untracked(),
        content_id.get_untracked(),
    ));

    // Load on mount and whenever the target record changes
    Effect::new(move |_| {
        let content_type = content_type.get();
        let content_id = content_id.get();
        let gateway = ctx.gateway();
        spawn_local(async move {
            show_notes_for(&SignalCell(state), gateway.as_ref(), &content_type, content_id).await;
        });
    });

    let save_note = move || {
        let gateway = ctx.gateway();
        spawn_local(async move {
            match save_draft(&SignalCell(state), gateway.as_ref()).await {
                Ok(()) => {}
                Err(DomainError::MissingId) => log::debug!("[NOTES] no record to attach the note to"),
                Err(e) => store_report_failure(&store, ctx.label(keys::COMMON_FAILURE), &e),
            }
        });
    };

    // The row goes away now; the delete runs unawaited
    let delete_note = Callback::new(move |id: String| {
        spawn_local(discard_note(&SignalCell(state), ctx.gateway(), id));
    });

    // No add form without a record to attach notes to
    let can_edit = move || ctx.can(&Capability::notes_edit());
    let can_add = move || can_edit() && state.with(|s| s.content_id().is_some());

    let note_rows = move || {
        let can_edit = can_edit();
        view! {
            <For
                each=move || state.with(|s| s.notes().to_vec())
                key=|note| note.id.clone()
                children=move |note| view! {
                    <NoteRow note=note can_edit=can_edit on_delete=delete_note />
                }
            />
        }
    };

    view! {
        {move || if can_add() {
            view! {
                <InputBox
                    header_text=ctx.label(keys::NOTES_HEADER)
                    header_icon="sticky_note_2"
                    save_text=ctx.label(keys::NOTES_ADD)
                    on_save=Callback::new(move |_| save_note())
                >
                    {note_rows()}
                    <div class="form-group">
                        <label for="noteText">{ctx.label(keys::NOTES_ADD_LABEL)}</label>
                        <textarea
                            id="noteText"
                            class="form-control"
                            name="contents"
                            prop:value=move || state.with(|s| s.draft().to_string())
                            on:input=move |ev| state.update(|s| s.set_draft(event_target_value(&ev)))
                        ></textarea>
                    </div>
                </InputBox>
            }.into_any()
        } else {
            view! {
                <DisplayBox header_text=ctx.label(keys::NOTES_HEADER) header_icon="sticky_note_2">
                    {note_rows()}
                </DisplayBox>
            }.into_any()
        }}
    }
}
