//! Delete Confirm Modal Component
//!
//! Reusable delete confirmation dialog with confirm/cancel actions.

use leptos::prelude::*;

use crate::components::Modal;

/// Delete confirmation dialog
///
/// Open while `target` holds the display name of the record about to go.
///
/// # Arguments
/// * `entity` - What is being deleted, e.g. "User"
/// * `target` - Name of the pending record, `None` when closed
/// * `on_confirm` - Callback to execute when user confirms deletion
/// * `on_cancel` - Callback to close the dialog without deleting
#[component]
pub fn DeleteConfirmModal(
    entity: &'static str,
    #[prop(into)] target: Signal<Option<String>>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (deleting, set_deleting) = signal(false);

    // Re-arm the confirm button whenever a new record is picked
    Effect::new(move |_| {
        if target.get().is_some() {
            set_deleting.set(false);
        }
    });

    view! {
        <Modal
            open=Signal::derive(move || target.get().is_some())
            title=format!("Delete {}", entity)
            on_close=on_cancel
        >
            <p class="delete-confirm-text">
                "Are you sure you want to delete "
                <strong>{move || target.get().unwrap_or_default()}</strong>
                "? This cannot be undone."
            </p>
            <div class="modal-actions">
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button
                    class="btn btn-danger"
                    disabled=move || deleting.get()
                    on:click=move |_| {
                        set_deleting.set(true);
                        on_confirm.run(());
                    }
                >
                    {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        </Modal>
    }
}
