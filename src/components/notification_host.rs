//! Notification Host
//!
//! Fixed toast stack in the corner of the screen.

use leptos::prelude::*;

use crate::store::{store_dismiss_notification, store_notifications, use_app_store};

#[component]
pub fn NotificationHost() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="notification-host">
            <For
                each=move || store_notifications(&store)
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class()>
                            <span class="notification-message">{n.message}</span>
                            <button
                                class="notification-close"
                                on:click=move |_| store_dismiss_notification(&store, id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
