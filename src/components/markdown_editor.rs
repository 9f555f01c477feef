//! Markdown Editor Component
//!
//! Side-by-side edit and preview. Changes go to `on_change`; the caller owns
//! the value.

use leptos::prelude::*;

use crate::markdown::parse_markdown;

#[component]
pub fn MarkdownEditor(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let rendered_html = move || parse_markdown(&value.get());

    view! {
        <div class="markdown-editor">
            <textarea
                class="markdown-textarea"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            ></textarea>
            <div class="markdown-preview" inner_html=rendered_html></div>
        </div>
    }
}
