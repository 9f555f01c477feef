//! Boxed panels.
//!
//! `DisplayBox` is a read-only panel; `InputBox` adds save, cancel and delete
//! actions below its contents.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use chums_core::locale::keys;

#[component]
fn BoxHeader(header_text: String, header_icon: String) -> impl IntoView {
    view! {
        <div class="box-header">
            <span class="box-icon material-icons">{header_icon}</span>
            <span class="box-title">{header_text}</span>
        </div>
    }
}

/// Read-only panel with an optional "add" affordance in the header
#[component]
pub fn DisplayBox(
    #[prop(into)] header_text: String,
    #[prop(optional, into)] header_icon: String,
    #[prop(optional)] on_add: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="display-box">
            <div class="box-header-row">
                <BoxHeader header_text=header_text header_icon=header_icon />
                {on_add.map(|on_add| view! {
                    <button class="small-btn" on:click=move |_| on_add.run(())>"+"</button>
                })}
            </div>
            <div class="box-content">{children()}</div>
        </div>
    }
}

/// Editable panel. Delete asks for confirmation with `delete_prompt`.
#[component]
pub fn InputBox(
    #[prop(into)] header_text: String,
    #[prop(optional, into)] header_icon: String,
    #[prop(into)] on_save: Callback<()>,
    #[prop(optional, into)] save_text: Option<String>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
    #[prop(optional)] on_delete: Option<Callback<()>>,
    #[prop(optional, into)] delete_prompt: String,
    #[prop(optional, into)] busy: MaybeProp<bool>,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    let save_text = save_text.unwrap_or_else(|| ctx.label(keys::COMMON_SAVE));
    let is_busy = move || busy.get().unwrap_or(false);

    view! {
        <div class="input-box">
            <BoxHeader header_text=header_text header_icon=header_icon />
            <div class="box-content">{children()}</div>
            <div class="box-footer">
                {on_delete.map(|on_delete| view! {
                    <DeleteConfirmButton
                        button_class="btn btn-delete"
                        prompt=delete_prompt.clone()
                        on_confirm=on_delete
                    />
                })}
                {on_cancel.map(|on_cancel| view! {
                    <button type="button" class="btn btn-cancel" on:click=move |_| on_cancel.run(())>
                        {ctx.label(keys::COMMON_CANCEL)}
                    </button>
                })}
                <button
                    type="button"
                    class="btn btn-save"
                    disabled=is_busy
                    on:click=move |_| on_save.run(())
                >
                    {save_text}
                </button>
            </div>
        </div>
    }
}
