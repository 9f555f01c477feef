//! Validation message list.

use leptos::prelude::*;

#[component]
pub fn ErrorMessages(#[prop(into)] errors: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <Show when=move || !errors.get().is_empty()>
            <div class="error-messages" role="alert">
                <ul>
                    {move || errors.get().into_iter().map(|message| view! { <li>{message}</li> }).collect_view()}
                </ul>
            </div>
        </Show>
    }
}
