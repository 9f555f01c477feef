//! Group Details Edit Component
//!
//! Edits one group locally and reports the outcome through `on_updated`
//! (saved or cancelled) and `on_navigate` (after a delete).

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;

use chums_core::locale::keys;
use chums_core::state::{run_delete, run_save, GroupEditor, GroupField, GROUP_LIST_ROUTE};
use chums_core::{DomainError, Group};

use crate::components::{ErrorMessages, GalleryPicker, InputBox, MarkdownEditor};
use crate::context::use_app_context;
use crate::store::{store_report_failure, use_ui_store, SignalCell};

#[component]
fn YesNoSelect(
    #[prop(into)] id: String,
    #[prop(into)] value: Signal<bool>,
    #[prop(into)] on_change: Callback<bool>,
    #[prop(into)] on_enter: Callback<KeyboardEvent>,
) -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <select
            id=id
            class="form-control"
            on:change=move |ev| on_change.run(event_target_value(&ev) == "true")
            on:keydown=move |ev| on_enter.run(ev)
        >
            <option value="false" selected=move || !value.get()>{ctx.label(keys::COMMON_NO)}</option>
            <option value="true" selected=move || value.get()>{ctx.label(keys::COMMON_YES)}</option>
        </select>
    }
}

#[component]
pub fn GroupDetailsEdit(
    #[prop(into)] group: Signal<Group>,
    #[prop(into)] on_updated: Callback<Group>,
    #[prop(into)] on_navigate: Callback<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let editor = RwSignal::new(GroupEditor::new(group.get_untracked()));
    let (show_picker, set_show_picker) = signal(false);

    // Take a fresh copy whenever the caller hands in a new record
    Effect::new(move |_| {
        let group = group.get();
        editor.update(|e| e.load(group));
    });

    let apply = move |field: GroupField| {
        editor.update(|e| {
            e.apply(field);
        });
    };

    let save = move || {
        let locale = ctx.locale();
        let gateway = ctx.gateway();
        spawn_local(async move {
            match run_save(&SignalCell(editor), gateway.as_ref(), locale.as_ref()).await {
                Some(Ok(saved)) => on_updated.run(saved),
                Some(Err(e)) => store_report_failure(&store, ctx.label(keys::COMMON_FAILURE), &e),
                None => {}
            }
        });
    };

    let delete = Callback::new(move |_: ()| {
        let gateway = ctx.gateway();
        spawn_local(async move {
            match run_delete(&SignalCell(editor), gateway.as_ref()).await {
                Some(Ok(())) => on_navigate.run(GROUP_LIST_ROUTE.to_string()),
                Some(Err(e @ (DomainError::MissingId | DomainError::Busy))) => warn!("[GROUP] delete refused: {}", e),
                Some(Err(e)) => store_report_failure(&store, ctx.label(keys::COMMON_FAILURE), &e),
                None => {}
            }
        });
    });

    let cancel = Callback::new(move |_: ()| {
        on_updated.run(editor.with_untracked(|e| e.cancel()));
    });

    let on_enter = Callback::new(move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            save();
        }
    });

    let team_mode = move || editor.with(|e| e.team_mode());
    let errors = Signal::derive(move || editor.with(|e| e.errors().to_vec()));
    let busy = Signal::derive(move || editor.with(|e| e.is_busy()));
    let about = Signal::derive(move || editor.with(|e| e.group().about.clone().unwrap_or_default()));
    let photo_url = move || editor.with(|e| e.group().photo_url.clone().filter(|url| !url.is_empty()));

    view! {
        <Show when=move || editor.with(|e| e.redirect().is_none())>
            <Show when=move || show_picker.get()>
                <GalleryPicker
                    aspect_ratio=4
                    on_select=Callback::new(move |url: String| {
                        apply(GroupField::PhotoUrl(url));
                        set_show_picker.set(false);
                    })
                    on_close=Callback::new(move |_| set_show_picker.set(false))
                />
            </Show>
            <InputBox
                header_text=ctx.label(keys::GROUP_DETAILS)
                header_icon="group"
                on_save=Callback::new(move |_| save())
                on_cancel=cancel
                on_delete=delete
                delete_prompt=ctx.label(keys::GROUP_CONFIRM_DELETE)
                busy=busy
            >
                <ErrorMessages errors=errors />
                <Show when=move || !team_mode()>
                    <div class="form-group">
                        <label for="categoryName">{ctx.label(keys::GROUP_CAT_NAME)}</label>
                        <input
                            id="categoryName"
                            type="text"
                            class="form-control"
                            prop:value=move || editor.with(|e| e.group().category_name.clone())
                            on:input=move |ev| apply(GroupField::CategoryName(event_target_value(&ev)))
                            on:keydown=move |ev| on_enter.run(ev)
                        />
                    </div>
                </Show>
                <div class="form-group">
                    <label for="groupName">{ctx.label(keys::GROUP_NAME)}</label>
                    <input
                        id="groupName"
                        type="text"
                        class="form-control"
                        prop:value=move || editor.with(|e| e.group().name.clone())
                        on:input=move |ev| apply(GroupField::Name(event_target_value(&ev)))
                        on:keydown=move |ev| on_enter.run(ev)
                    />
                </div>
                <Show when=move || !team_mode()>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="trackAttendance">{ctx.label(keys::GROUP_ATTENDANCE)}</label>
                            <YesNoSelect
                                id="trackAttendance"
                                value=Signal::derive(move || editor.with(|e| e.group().track_attendance))
                                on_change=Callback::new(move |v| apply(GroupField::TrackAttendance(v)))
                                on_enter=on_enter
                            />
                        </div>
                        <div class="form-group">
                            <label for="parentPickup">{ctx.label(keys::GROUP_PICKUP)}</label>
                            <YesNoSelect
                                id="parentPickup"
                                value=Signal::derive(move || editor.with(|e| e.group().parent_pickup))
                                on_change=Callback::new(move |v| apply(GroupField::ParentPickup(v)))
                                on_enter=on_enter
                            />
                        </div>
                    </div>
                    <div class="form-group">
                        <label>{ctx.label(keys::GROUP_DESCRIPTION)}</label>
                        <MarkdownEditor
                            placeholder=ctx.label(keys::GROUP_DESCRIPTION)
                            value=about
                            on_change=Callback::new(move |text| apply(GroupField::About(text)))
                        />
                    </div>
                    <div class="form-group">
                        <label>{ctx.label(keys::GROUP_IMAGE)}</label>
                        {move || photo_url().map(|url| view! {
                            <img class="group-photo" src=url alt="" />
                        })}
                        <button type="button" class="btn" on:click=move |_| set_show_picker.set(true)>
                            {ctx.label(keys::GROUP_SELECT_IMAGE)}
                        </button>
                    </div>
                </Show>
            </InputBox>
        </Show>
    }
}
