//! CHUMS UI Frontend App
//!
//! Demo shell hosting the notes panel, the group editor and the task list.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use chums_core::locale::keys;
use chums_core::{commands, Group, TaskStatus};

use crate::components::{DisplayBox, FailureNotice, GroupDetailsEdit, NotesPanel, TaskList};
use crate::config::load_config;
use crate::context::AppContext;
use crate::gateway::HttpGateway;
use crate::store::{store_report_failure, store_set_task_status, UiState, UiStateStoreFields};

#[component]
fn GroupSummary(group: Group, on_edit: Callback<()>) -> impl IntoView {
    let title = if group.category_name.is_empty() {
        group.name.clone()
    } else {
        format!("{}: {}", group.category_name, group.name)
    };
    view! {
        <div class="group-summary">
            <h3>{title}</h3>
            {group.photo_url.clone().filter(|url| !url.is_empty()).map(|url| view! {
                <img class="group-photo" src=url alt="" />
            })}
            <button class="btn" on:click=move |_| on_edit.run(())>"Edit"</button>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let ctx = AppContext::new(&config, Arc::new(HttpGateway::new(&config)));
    let store = Store::new(UiState::new(&config.demo.task_status));
    provide_context(ctx);
    provide_context(store);

    // Notes target: content type fixed by config, id editable in the shell
    let content_type = config.demo.content_type.clone();
    let notes_target = RwSignal::new(config.demo.content_id.clone());

    let (group, set_group) = signal(Group::default());
    let (editing_group, set_editing_group) = signal(false);

    if let Some(group_id) = config.demo.group_id.clone() {
        let gateway = ctx.gateway();
        spawn_local(async move {
            match commands::load_group(gateway.as_ref(), &group_id).await {
                Ok(loaded) => {
                    log::debug!("[APP] loaded group {}", group_id);
                    set_group.try_set(loaded);
                }
                Err(e) => store_report_failure(&store, ctx.label(keys::COMMON_FAILURE), &e),
            }
        });
    }

    let on_group_updated = Callback::new(move |updated: Group| {
        set_group.set(updated);
        set_editing_group.set(false);
    });

    let on_navigate = Callback::new(move |route: String| {
        log::info!("[APP] navigating to {}", route);
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(&route) {
                log::error!("[APP] navigation failed: {:?}", e);
            }
        }
    });

    let task_status = Signal::derive(move || store.task_status().get());
    let status_button = move |status: TaskStatus| {
        let class = move || {
            if TaskStatus::from_filter(&task_status.get()) == status {
                "btn btn-active"
            } else {
                "btn"
            }
        };
        view! {
            <button class=class on:click=move |_| store_set_task_status(&store, status.as_str())>
                {status.as_str()}
            </button>
        }
    };

    view! {
        <div class="app-layout">
            <FailureNotice />
            <main class="main-content">
                <h1>"CHUMS"</h1>

                <section class="demo-notes">
                    <input
                        type="text"
                        class="form-control"
                        placeholder="Content id"
                        prop:value=move || notes_target.get().unwrap_or_default()
                        on:change=move |ev| {
                            let id = event_target_value(&ev).trim().to_string();
                            notes_target.set(Some(id).filter(|id| !id.is_empty()));
                        }
                    />
                    <NotesPanel
                        content_type=Signal::derive(move || content_type.clone())
                        content_id=notes_target
                    />
                </section>

                <section class="demo-group">
                    {move || if editing_group.get() {
                        view! {
                            <GroupDetailsEdit
                                group=group
                                on_updated=on_group_updated
                                on_navigate=on_navigate
                            />
                        }.into_any()
                    } else {
                        view! {
                            <DisplayBox header_text=ctx.label(keys::GROUP_DETAILS) header_icon="group">
                                <GroupSummary
                                    group=group.get()
                                    on_edit=Callback::new(move |_| set_editing_group.set(true))
                                />
                            </DisplayBox>
                        }.into_any()
                    }}
                </section>

                <section class="demo-tasks">
                    <div class="status-toggle">
                        {status_button(TaskStatus::Open)}
                        {status_button(TaskStatus::Closed)}
                    </div>
                    <TaskList status=task_status />
                </section>
            </main>
        </div>
    }
}
