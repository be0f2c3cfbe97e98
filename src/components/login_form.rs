//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, Page};
use crate::store::{store_just_registered, store_set_just_registered, store_set_session, use_app_store, NotificationKind};
use crate::validation::validate_login;

pub const REGISTERED_NOTICE: &str = "Registration successful! Please log in with your credentials.";

#[component]
pub fn LoginForm(#[prop(into)] on_signup: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        let payload = match validate_login(&username.get(), &password.get()) {
            Ok(payload) => payload,
            Err(msg) => {
                set_error.set(Some(msg));
                return;
            }
        };

        set_busy.set(true);
        spawn_local(async move {
            match api::login(&payload).await {
                Ok(user) => {
                    log::info!("Logged in as {} ({})", user.user_name, user.user_type);
                    store_set_just_registered(&store, false);
                    if !user.is_admin() {
                        ctx.notify("This console is for administrators only", NotificationKind::Warning);
                    }
                    store_set_session(&store, user);
                    ctx.navigate(Page::Dashboard);
                }
                Err(err) => {
                    log::warn!("Login failed: {}", err);
                    set_error.set(Some(err.to_string()));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Login"</h2>
            <Show when=move || store_just_registered(&store)>
                <div class="alert alert-success">{REGISTERED_NOTICE}</div>
            </Show>
            {move || error.get().map(|msg| view! {
                <div class="alert alert-danger">{msg}</div>
            })}
            <div class="form-group">
                <label for="login-username">"Username"</label>
                <input
                    id="login-username"
                    class="form-control"
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="login-password">"Password"</label>
                <input
                    id="login-password"
                    class="form-control"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                {move || if busy.get() { "Logging in..." } else { "Login" }}
            </button>
            <p class="auth-switch">
                "No account yet? "
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    on_signup.run(());
                }>"Sign up"</a>
            </p>
        </form>
    }
}
