//! Form Field Components
//!
//! Labelled inputs that show their validation message underneath.

use leptos::prelude::*;

use crate::validation::FormErrors;

/// Inline message under a form field, empty when the field is valid
#[component]
pub fn FieldError(errors: ReadSignal<FormErrors>, field: &'static str) -> impl IntoView {
    view! {
        {move || errors.with(|e| e.get(field).map(|msg| view! {
            <div class="invalid-feedback">{msg.to_string()}</div>
        }))}
    }
}

/// `form-control`, plus `is-invalid` while the field has an error
pub fn control_class(errors: ReadSignal<FormErrors>, field: &'static str) -> impl Fn() -> &'static str + Copy {
    move || {
        if errors.with(|e| e.get(field).is_some()) {
            "form-control is-invalid"
        } else {
            "form-control"
        }
    }
}

/// Text-like input whose id doubles as its error key
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    errors: ReadSignal<FormErrors>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                type=input_type
                class=control_class(errors, id)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError errors=errors field=id />
        </div>
    }
}

/// Multi-line variant of [`TextField`]
#[component]
pub fn TextAreaField(
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    errors: ReadSignal<FormErrors>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <textarea
                id=id
                rows="4"
                class=control_class(errors, id)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
            <FieldError errors=errors field=id />
        </div>
    }
}

/// Labelled checkbox
#[component]
pub fn CheckboxField(
    id: &'static str,
    label: &'static str,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group form-check">
            <input
                id=id
                type="checkbox"
                class="form-check-input"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <label for=id class="form-check-label">{label}</label>
        </div>
    }
}

/// Dropdown over `(value, label)` pairs
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    /// Disabled first option, e.g. "Select a patient"
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    errors: ReadSignal<FormErrors>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <select
                id=id
                class=control_class(errors, id)
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {placeholder.map(|text| view! { <option value="">{text}</option> })}
                {move || options.get().into_iter().map(|(val, text)| {
                    let selected = value.get_untracked() == val;
                    view! { <option value=val selected=selected>{text}</option> }
                }).collect_view()}
            </select>
            <FieldError errors=errors field=id />
        </div>
    }
}

/// Toolbar dropdown that narrows a table, with no label or error slot
#[component]
pub fn FilterSelect(
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    value: ReadSignal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="form-control filter-select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {move || options.get().into_iter().map(|(val, text)| {
                let selected = value.get_untracked() == val;
                view! { <option value=val selected=selected>{text}</option> }
            }).collect_view()}
        </select>
    }
}

/// Static option lists shared by several forms
pub fn options(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(v, l)| (v.to_string(), l.to_string())).collect()
}

pub const GENDER_OPTIONS: &[(&str, &str)] = &[("Male", "Male"), ("Female", "Female")];

pub const USER_TYPE_OPTIONS: &[(&str, &str)] = &[("Normal", "Normal"), ("Doctor", "Doctor"), ("Admin", "Admin")];
