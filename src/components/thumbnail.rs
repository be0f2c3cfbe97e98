//! Thumbnail Component

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::format::image_src;

/// Table-cell image that swaps to `fallback` if the file is missing
#[component]
pub fn Thumbnail(path: Option<String>, alt: String, fallback: &'static str) -> impl IntoView {
    match path.filter(|p| !p.is_empty()) {
        Some(path) => view! {
            <img
                class="thumbnail"
                src=image_src(&path)
                alt=alt
                on:error=move |ev| {
                    if let Some(img) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok()) {
                        if !img.src().ends_with(fallback) {
                            img.set_src(fallback);
                        }
                    }
                }
            />
        }
        .into_any(),
        None => view! { <span class="no-image">"No image"</span> }.into_any(),
    }
}
