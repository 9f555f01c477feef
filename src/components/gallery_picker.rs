//! Gallery Picker Component
//!
//! Modal for choosing an image: one of the configured gallery images or a
//! pasted URL.

use leptos::prelude::*;

use crate::context::use_app_context;
use chums_core::locale::keys;

#[component]
pub fn GalleryPicker(
    /// Preferred width/height ratio of the chosen image
    aspect_ratio: u32,
    #[prop(into)] on_select: Callback<String>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (custom_url, set_custom_url) = signal(String::new());
    let thumb_style = format!("aspect-ratio: {}; object-fit: cover; width: 100%;", aspect_ratio.max(1));

    let use_custom = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let url = custom_url.get().trim().to_string();
        if url.is_empty() {
            return;
        }
        on_select.run(url);
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog gallery-dialog" on:click=move |ev| ev.stop_propagation()>
                <div class="gallery-grid">
                    {ctx.gallery().into_iter().map(|url| {
                        let chosen = url.clone();
                        view! {
                            <button type="button" class="gallery-item" on:click=move |_| on_select.run(chosen.clone())>
                                <img src=url style=thumb_style.clone() alt="" />
                            </button>
                        }
                    }).collect_view()}
                </div>
                <form class="gallery-url-form" on:submit=use_custom>
                    <input
                        type="url"
                        placeholder="https://"
                        prop:value=move || custom_url.get()
                        on:input=move |ev| set_custom_url.set(event_target_value(&ev))
                    />
                    <button type="submit">"OK"</button>
                </form>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        {ctx.label(keys::COMMON_CANCEL)}
                    </button>
                </div>
            </div>
        </div>
    }
}
