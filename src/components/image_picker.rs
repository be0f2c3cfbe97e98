//! Image Picker Component
//!
//! File input with type check, FileReader preview, and a remove button.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::components::form_field::FieldError;
use crate::error::js_message;
use crate::format::image_src;
use crate::validation::{is_image_mime, FormErrors};

pub const IMAGE_TYPE_ERROR: &str = "Please select an image file (JPG, PNG, etc.)";

/// Read `file` as a data URL and hand it to `set_preview` once loaded
fn read_preview(file: &web_sys::File, set_preview: WriteSignal<Option<String>>) -> Result<(), JsValue> {
    let reader = web_sys::FileReader::new()?;
    let onload = {
        let reader = reader.clone();
        Closure::once_into_js(move || {
            if let Ok(result) = reader.result() {
                set_preview.set(result.as_string());
            }
        })
    };
    reader.set_onload(Some(onload.unchecked_ref()));
    reader.read_as_data_url(file)
}

/// Image upload field
///
/// # Arguments
/// * `existing` - Stored image path shown until a new file is picked
/// * `on_file` - Receives the chosen file, or `None` when it was rejected
/// * `on_remove` - Clears both the chosen file and the stored path
/// * `set_errors` - Where the type error is recorded under `id`
#[component]
pub fn ImagePicker(
    id: &'static str,
    label: &'static str,
    #[prop(into)] existing: Signal<Option<String>>,
    #[prop(into)] on_file: Callback<Option<web_sys::File>>,
    #[prop(into)] on_remove: Callback<()>,
    errors: ReadSignal<FormErrors>,
    set_errors: WriteSignal<FormErrors>,
) -> impl IntoView {
    let (preview, set_preview) = signal::<Option<String>>(None);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_change = move |_| {
        let Some(input) = input_ref.get() else { return; };
        let file = input.files().and_then(|files| files.get(0));
        let Some(file) = file else {
            on_file.run(None);
            return;
        };
        if !is_image_mime(&file.type_()) {
            set_errors.update(|e| e.add(id, IMAGE_TYPE_ERROR));
            input.set_value("");
            on_file.run(None);
            return;
        }
        set_errors.update(|e| e.remove(id));
        if let Err(err) = read_preview(&file, set_preview) {
            log::warn!("Could not preview image: {}", js_message(&err));
        }
        on_file.run(Some(file));
    };

    let shown = move || preview.get().or_else(|| existing.get().filter(|p| !p.is_empty()).map(|p| image_src(&p)));

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input id=id node_ref=input_ref type="file" accept="image/*" class="form-control" on:change=on_change />
            <FieldError errors=errors field=id />
            {move || shown().map(|src| view! {
                <div class="image-preview-container">
                    <img class="image-preview" src=src alt="Preview" />
                    <button
                        type="button"
                        class="btn btn-sm btn-secondary"
                        on:click=move |_| {
                            if let Some(input) = input_ref.get() {
                                input.set_value("");
                            }
                            set_preview.set(None);
                            on_remove.run(());
                        }
                    >
                        "Remove image"
                    </button>
                </div>
            })}
        </div>
    }
}
