//! Clinic Admin Frontend App
//!
//! Main application component: login gate, nav bar, and the active section.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    AppointmentsPage, CheckupTypesPage, DashboardPage, HealthFactsPage, LoginForm, NavBar, NotificationHost, SignupForm,
    SpecialistsPage, UsersPage,
};
use crate::config::AppConfig;
use crate::context::{AppContext, Page};
use crate::store::{store_session, AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthView {
    Login,
    Signup,
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let (current_page, set_current_page) = signal(Page::Dashboard);
    let (auth_view, set_auth_view) = signal(AuthView::Login);

    // Provide context to all children
    provide_context(store);
    let ctx = AppContext::new((current_page, set_current_page), config, store);
    provide_context(ctx);

    let session = Memo::new(move |_| store_session(&store));

    view! {
        <NotificationHost />
        {move || match session.get() {
            None => {
                match auth_view.get() {
                    AuthView::Login => view! {
                        <div class="auth-layout">
                            <LoginForm on_signup=move |_| set_auth_view.set(AuthView::Signup) />
                        </div>
                    }.into_any(),
                    AuthView::Signup => view! {
                        <div class="auth-layout">
                            <SignupForm on_login=move |_| set_auth_view.set(AuthView::Login) />
                        </div>
                    }.into_any(),
                }
            }
            Some(user) if !user.is_admin() => view! {
                <div class="auth-layout">
                    <div class="auth-form">
                        <h2>"Admin access required"</h2>
                        <p>{format!("{} is signed in as a {} user.", user.user_name, user.user_type)}</p>
                        <a class="btn btn-secondary" href="/">"Go to the clinic site"</a>
                        <button class="btn btn-primary" on:click=move |_| ctx.logout()>"Switch account"</button>
                    </div>
                </div>
            }.into_any(),
            Some(_) => view! {
                <div class="app-layout">
                    <NavBar />
                    <main class="main-content">
                        <h1>{move || current_page.get().title()}</h1>
                        {move || match current_page.get() {
                            Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                            Page::Users => view! { <UsersPage /> }.into_any(),
                            Page::Appointments => view! { <AppointmentsPage /> }.into_any(),
                            Page::CheckupTypes => view! { <CheckupTypesPage /> }.into_any(),
                            Page::Specialists => view! { <SpecialistsPage /> }.into_any(),
                            Page::HealthFacts => view! { <HealthFactsPage /> }.into_any(),
                        }}
                    </main>
                </div>
            }.into_any(),
        }}
    }
}
