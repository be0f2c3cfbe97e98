//! Signup Form Component

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::form_field::{options, SelectField, TextField, GENDER_OPTIONS};
use crate::store::{store_set_just_registered, use_app_store};
use crate::validation::{validate_signup, FormErrors, SignupForm as SignupFields};

/// Pause on the success message before switching to the login form
const REDIRECT_DELAY_MS: u32 = 2000;

#[component]
pub fn SignupForm(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
    let store = use_app_store();

    let form = RwSignal::new(SignupFields::default());
    let (errors, set_errors) = signal(FormErrors::default());
    let (server_error, set_server_error) = signal::<Option<String>>(None);
    let (registered, set_registered) = signal(false);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_server_error.set(None);
        let payload = match form.with(validate_signup) {
            Ok(payload) => payload,
            Err(errs) => {
                log::debug!("Signup form has {} errors", errs.len());
                set_errors.set(errs);
                return;
            }
        };
        set_errors.set(FormErrors::default());

        set_busy.set(true);
        spawn_local(async move {
            match api::signup(&payload).await {
                Ok(()) => {
                    log::info!("Registered {}", payload.username);
                    set_registered.set(true);
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    store_set_just_registered(&store, true);
                    on_login.run(());
                }
                Err(err) => {
                    log::warn!("Signup failed: {}", err);
                    set_server_error.set(Some(err.to_string()));
                    set_busy.set(false);
                }
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Create Account"</h2>
            <Show when=move || registered.get()>
                <div class="alert alert-success">"Registration successful! Redirecting to login page..."</div>
            </Show>
            {move || server_error.get().map(|msg| view! {
                <div class="alert alert-danger">{msg}</div>
            })}
            <TextField
                id="username"
                label="Username"
                value=Signal::derive(move || form.with(|f| f.username.clone()))
                on_input=move |v| form.update(|f| f.username = v)
                errors=errors
            />
            <TextField
                id="fullname"
                label="Full Name"
                value=Signal::derive(move || form.with(|f| f.full_name.clone()))
                on_input=move |v| form.update(|f| f.full_name = v)
                errors=errors
            />
            <TextField
                id="email"
                label="Email"
                input_type="email"
                value=Signal::derive(move || form.with(|f| f.email.clone()))
                on_input=move |v| form.update(|f| f.email = v)
                errors=errors
            />
            <TextField
                id="phone"
                label="Phone Number"
                input_type="tel"
                value=Signal::derive(move || form.with(|f| f.phone.clone()))
                on_input=move |v| form.update(|f| f.phone = v)
                errors=errors
            />
            <SelectField
                id="gender"
                label="Gender"
                options=options(GENDER_OPTIONS)
                placeholder="Select gender"
                value=Signal::derive(move || form.with(|f| f.gender.clone()))
                on_change=move |v| form.update(|f| f.gender = v)
                errors=errors
            />
            <TextField
                id="birthday"
                label="Date of Birth"
                input_type="date"
                value=Signal::derive(move || form.with(|f| f.birthday.clone()))
                on_input=move |v| form.update(|f| f.birthday = v)
                errors=errors
            />
            <TextField
                id="password"
                label="Password"
                input_type="password"
                value=Signal::derive(move || form.with(|f| f.password.clone()))
                on_input=move |v| form.update(|f| f.password = v)
                errors=errors
            />
            <TextField
                id="confirm-password"
                label="Confirm Password"
                input_type="password"
                value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                on_input=move |v| form.update(|f| f.confirm_password = v)
                errors=errors
            />
            <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                {move || if busy.get() { "Processing..." } else { "Sign Up" }}
            </button>
            <p class="auth-switch">
                "Already registered? "
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    on_login.run(());
                }>"Log in"</a>
            </p>
        </form>
    }
}
