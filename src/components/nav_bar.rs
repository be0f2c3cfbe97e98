//! Nav Bar Component
//!
//! Tab bar for switching between admin sections, with the signed-in user.

use leptos::prelude::*;

use crate::context::{AppContext, Page};
use crate::store::{store_session, use_app_store};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    view! {
        <nav class="nav-bar">
            <span class="nav-brand">"Clinic Admin"</span>
            <div class="nav-tabs">
                {Page::ALL.into_iter().map(|page| {
                    let is_active = move || ctx.current_page.get() == page;
                    view! {
                        <button
                            class=move || if is_active() { "nav-tab active" } else { "nav-tab" }
                            on:click=move |_| ctx.navigate(page)
                        >
                            {page.title()}
                        </button>
                    }
                }).collect_view()}
            </div>
            <div class="nav-user">
                <span class="nav-user-name">
                    {move || store_session(&store).map(|u| u.user_name).unwrap_or_default()}
                </span>
                <button class="btn btn-secondary btn-sm" on:click=move |_| ctx.logout()>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
