//! Task List Component
//!
//! Tasks for one status filter, split into "Assigned to Me" and "Requested by
//! Me". Empty sections are not rendered.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use chums_core::locale::keys;
use chums_core::state::{apply_status, load_tasks, TaskBoard};
use chums_core::{humanize, Task, TaskStatus};

use crate::components::{DisplayBox, NewTaskForm};
use crate::context::use_app_context;
use crate::store::SignalCell;

#[component]
fn TaskRow(task: Task, compact: bool) -> impl IntoView {
    let href = task.id.as_deref().map(|id| format!("/tasks/{}", id)).unwrap_or_default();
    let number = task.task_number.map(|n| n.to_string()).unwrap_or_default();
    let created_by = task.created_by_label.clone().unwrap_or_default();
    let date_created = task.date_created.clone();
    // Recomputed on every render
    let opened = move || {
        format!(
            "#{} opened {} ago by {}",
            number,
            humanize::since(date_created.as_deref(), Utc::now()),
            created_by
        )
    };

    view! {
        <tr class="task-row">
            <td>
                <a href=href class="task-title">{task.title.clone()}</a>
                <div class="task-meta">{opened}</div>
            </td>
            {(!compact).then(|| view! {
                <td class="task-associated">{task.associated_with_label.clone().unwrap_or_default()}</td>
                <td class="task-assigned">{task.assigned_to_label.clone().unwrap_or_default()}</td>
            })}
        </tr>
    }
}

#[component]
fn TaskTable(label: String, tasks: Vec<Task>, compact: bool) -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <div class="task-section">
            <h4>{label}</h4>
            <table class="table task-table">
                {(!compact).then(|| view! {
                    <thead>
                        <tr>
                            <th>{ctx.label(keys::TASKS_TITLE)}</th>
                            <th>{ctx.label(keys::TASKS_ASSOCIATED)}</th>
                            <th>{ctx.label(keys::TASKS_ASSIGNED_TO)}</th>
                        </tr>
                    </thead>
                })}
                <tbody>
                    {tasks.into_iter().map(|task| view! { <TaskRow task=task compact=compact /> }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn TaskList(
    #[prop(into)] status: Signal<String>,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let board = RwSignal::new(TaskBoard::new(TaskStatus::from_filter(&status.get_untracked())));

    // First run loads; later runs only when the filter actually changed
    Effect::new(move |prev: Option<()>| {
        let status = TaskStatus::from_filter(&status.get());
        let gateway = ctx.gateway();
        spawn_local(async move {
            let cell = SignalCell(board);
            if prev.is_none() {
                load_tasks(&cell, gateway.as_ref()).await;
            } else {
                apply_status(&cell, gateway.as_ref(), status).await;
            }
        });
    });

    let sections = move || {
        let actor = ctx.actor();
        board.with(|b| {
            b.sections(&actor)
                .into_iter()
                .map(|section| (ctx.label(section.kind.label_key()), section.tasks.into_iter().cloned().collect::<Vec<_>>()))
                .collect::<Vec<_>>()
        })
    };

    let close_form = Callback::new(move |_: ()| board.update(|b| b.close_add_form()));

    view! {
        <DisplayBox
            header_text=ctx.label(keys::TASKS_HEADER)
            header_icon="list_alt"
            on_add=Callback::new(move |_| board.update(|b| b.open_add_form()))
        >
            <Show when=move || board.with(|b| b.show_add())>
                <NewTaskForm compact=compact on_cancel=close_form on_save=close_form />
            </Show>
            {move || sections().into_iter().map(|(label, tasks)| view! {
                <TaskTable label=label tasks=tasks compact=compact />
            }).collect_view()}
        </DisplayBox>
    }
}
