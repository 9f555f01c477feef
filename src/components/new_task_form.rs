//! New Task Form Component
//!
//! Minimal task creation: a title, created as an open task by the current
//! actor.

use leptos::prelude::*;
use leptos::task::spawn_local;

use chums_core::locale::keys;
use chums_core::domain::NewTask;
use chums_core::{commands, TaskStatus};

use crate::components::InputBox;
use crate::context::use_app_context;
use crate::store::{store_report_failure, use_ui_store};

#[component]
pub fn NewTaskForm(
    #[prop(optional)] compact: bool,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_save: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let (title, set_title) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let save = move || {
        let text = title.get_untracked().trim().to_string();
        if text.is_empty() || saving.get_untracked() {
            return;
        }
        let actor = ctx.actor();
        let task = NewTask {
            title: text,
            status: TaskStatus::Open.as_str().to_string(),
            created_by_id: actor.person_id().map(str::to_string),
            created_by_label: Some(actor.display_name.clone()).filter(|name| !name.is_empty()),
        };
        set_saving.set(true);
        let gateway = ctx.gateway();
        spawn_local(async move {
            let result = commands::create_task(gateway.as_ref(), &task).await;
            set_saving.try_set(false);
            match result {
                Ok(()) => on_save.run(()),
                Err(e) => store_report_failure(&store, ctx.label(keys::COMMON_FAILURE), &e),
            }
        });
    };

    view! {
        <InputBox
            header_text=ctx.label(keys::TASKS_NEW)
            header_icon="add_task"
            on_save=Callback::new(move |_| save())
            on_cancel=on_cancel
            busy=Signal::derive(move || saving.get())
        >
            <div class=if compact { "form-group compact" } else { "form-group" }>
                <label for="taskTitle">{ctx.label(keys::TASKS_TITLE)}</label>
                <input
                    id="taskTitle"
                    type="text"
                    class="form-control"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            save();
                        }
                    }
                />
            </div>
        </InputBox>
    }
}
