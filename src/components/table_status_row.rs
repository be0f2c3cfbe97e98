//! Table Status Row Component
//!
//! Single full-width row for the loading, failed and empty states. Rows
//! from an earlier load stay visible while a reload is in flight.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed,
}

#[component]
pub fn TableStatusRow(
    #[prop(into)] state: Signal<LoadState>,
    #[prop(into)] empty: Signal<bool>,
    colspan: u32,
    /// Plural noun, e.g. "users"
    noun: &'static str,
) -> impl IntoView {
    move || {
        let text = match state.get() {
            LoadState::Loading if empty.get() => format!("Loading {}...", noun),
            LoadState::Failed => format!("Failed to load {}. Please try again.", noun),
            LoadState::Ready if empty.get() => format!("No {} found", noun),
            LoadState::Loading | LoadState::Ready => return None,
        };
        Some(view! {
            <tr class="table-status-row">
                <td colspan=colspan.to_string() class="text-center">{text}</td>
            </tr>
        })
    }
}
