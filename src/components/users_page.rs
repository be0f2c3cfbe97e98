//! Users Page
//!
//! Searchable user table with add/edit modal and delete confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::form_field::{options, SelectField, TextField, GENDER_OPTIONS, USER_TYPE_OPTIONS};
use crate::components::{DeleteConfirmModal, LoadState, Modal, PaginationBar, TableStatusRow};
use crate::context::AppContext;
use crate::filters::UserFilter;
use crate::listing::Listing;
use crate::models::User;
use crate::validation::{validate_user, FormErrors, FormMode, UserForm};

#[component]
pub fn UsersPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let window = ctx.page_window();

    let listing = RwSignal::new(Listing::<User>::new(ctx.page_size()));
    let (load_state, set_load_state) = signal(LoadState::Loading);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let reload = move || set_reload_trigger.update(|v| *v += 1);

    // Filters
    let (search, set_search) = signal(String::new());
    let (type_filter, set_type_filter) = signal(String::from("all"));
    let filter = Memo::new(move |_| UserFilter::new(&search.get(), &type_filter.get()));

    // Modal state
    let (editing, set_editing) = signal::<Option<FormMode>>(None);
    let form = RwSignal::new(UserForm::default());
    let (errors, set_errors) = signal(FormErrors::default());
    let (busy, set_busy) = signal(false);

    // Load users whenever the trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("Loading users, trigger={}", trigger);
        set_load_state.set(LoadState::Loading);
        spawn_local(async move {
            match api::list_users().await {
                Ok(users) => {
                    log::info!("Loaded {} users", users.len());
                    let f = filter.get_untracked();
                    listing.update(|l| l.replace(users, |u| f.matches(u)));
                    set_load_state.set(LoadState::Ready);
                }
                Err(err) => {
                    set_load_state.set(LoadState::Failed);
                    ctx.failure(&err, "Failed to load users");
                }
            }
        });
    });

    // Re-filter from page 1 when the search or type changes
    Effect::new(move |_| {
        let f = filter.get();
        listing.update(|l| l.apply(|u| f.matches(u)));
    });

    let open_add = move |_| {
        form.set(UserForm {
            gender: "Male".to_string(),
            user_type: "Normal".to_string(),
            ..Default::default()
        });
        set_errors.set(FormErrors::default());
        set_editing.set(Some(FormMode::Add));
    };

    let open_edit = move |id: u32| {
        let Some(user) = listing.with_untracked(|l| l.find(id).cloned()) else {
            log::warn!("User {} is no longer loaded", id);
            return;
        };
        form.set(UserForm {
            name: user.user_name,
            email: user.email,
            username: user.username,
            password: String::new(),
            gender: user.gender,
            user_type: user.user_type,
        });
        set_errors.set(FormErrors::default());
        set_editing.set(Some(FormMode::Edit(id)));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(mode) = editing.get_untracked() else { return; };
        let payload = match form.with_untracked(|f| validate_user(f, mode)) {
            Ok(payload) => payload,
            Err(errs) => {
                set_errors.set(errs);
                return;
            }
        };
        set_errors.set(FormErrors::default());
        set_busy.set(true);
        spawn_local(async move {
            let (result, done, fallback) = match mode {
                FormMode::Add => (api::create_user(&payload).await, "User added successfully", "Failed to add user"),
                FormMode::Edit(id) => (
                    api::update_user(id, &payload).await,
                    "User updated successfully",
                    "Failed to update user",
                ),
            };
            set_busy.set(false);
            match result {
                Ok(()) => {
                    set_editing.set(None);
                    ctx.success(done);
                    reload();
                }
                Err(err) => ctx.failure(&err, fallback),
            }
        });
    };

    let delete_target = Signal::derive(move || {
        listing.with(|l| l.pending_delete().and_then(|id| l.find(id)).map(|u| u.user_name.clone()))
    });

    let confirm_delete = move |_| {
        let Some(id) = listing.with_untracked(|l| l.pending_delete()) else { return; };
        spawn_local(async move {
            match api::delete_user(id).await {
                Ok(()) => {
                    ctx.success("User deleted successfully");
                    reload();
                }
                Err(err) => ctx.failure(&err, "Failed to delete user"),
            }
            listing.update(|l| l.clear_pending_delete());
        });
    };

    view! {
        <section class="users-management">
            <div class="page-toolbar">
                <input
                    type="search"
                    class="form-control search-input"
                    placeholder="Search by name, email or username..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    class="form-control filter-select"
                    prop:value=move || type_filter.get()
                    on:change=move |ev| set_type_filter.set(event_target_value(&ev))
                >
                    <option value="all">"All Types"</option>
                    {USER_TYPE_OPTIONS.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
                <button class="btn btn-primary" on:click=open_add>"Add User"</button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Gender"</th>
                        <th>"Username"</th>
                        <th>"Type"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <TableStatusRow
                        state=load_state
                        empty=Signal::derive(move || listing.with(|l| l.is_empty()))
                        colspan=6
                        noun="users"
                    />
                    {move || listing.with(|l| l.page_items().into_iter().map(|user| {
                        let id = user.user_id;
                        let badge = if user.is_admin() { "badge badge-admin" } else { "badge badge-normal" };
                        view! {
                            <tr>
                                <td>{id}</td>
                                <td>
                                    <div class="user-info">
                                        <div class="user-name">{user.user_name.clone()}</div>
                                        <div class="user-email">{user.email.clone()}</div>
                                    </div>
                                </td>
                                <td>{user.gender.clone()}</td>
                                <td>{user.username.clone()}</td>
                                <td><span class=badge>{user.user_type.clone()}</span></td>
                                <td class="actions-cell">
                                    <button class="btn btn-icon btn-edit" on:click=move |_| open_edit(id)>"Edit"</button>
                                    <button
                                        class="btn btn-icon btn-delete"
                                        on:click=move |_| listing.update(|l| { l.mark_for_delete(id); })
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view())}
                </tbody>
            </table>

            <PaginationBar
                noun="users"
                range=Signal::derive(move || listing.with(|l| l.range()))
                controls=Signal::derive(move || listing.with(|l| l.controls(window)))
                on_page=move |page| listing.update(|l| l.set_page(page))
            />

            <Modal
                open=Signal::derive(move || editing.get().is_some())
                title=Signal::derive(move || match editing.get() {
                    Some(FormMode::Edit(_)) => "Edit User".to_string(),
                    _ => "Add New User".to_string(),
                })
                on_close=move |_| set_editing.set(None)
            >
                <form class="entity-form" on:submit=on_submit>
                    <TextField
                        id="user-name"
                        label="Full Name"
                        value=Signal::derive(move || form.with(|f| f.name.clone()))
                        on_input=move |v| form.update(|f| f.name = v)
                        errors=errors
                    />
                    <TextField
                        id="user-email"
                        label="Email"
                        input_type="email"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=move |v| form.update(|f| f.email = v)
                        errors=errors
                    />
                    <TextField
                        id="user-username"
                        label="Username"
                        value=Signal::derive(move || form.with(|f| f.username.clone()))
                        on_input=move |v| form.update(|f| f.username = v)
                        errors=errors
                    />
                    // Password is only set when creating; edits keep the stored one
                    <Show when=move || editing.get() == Some(FormMode::Add)>
                        <TextField
                            id="user-password"
                            label="Password"
                            input_type="password"
                            value=Signal::derive(move || form.with(|f| f.password.clone()))
                            on_input=move |v| form.update(|f| f.password = v)
                            errors=errors
                        />
                    </Show>
                    <SelectField
                        id="user-gender"
                        label="Gender"
                        options=options(GENDER_OPTIONS)
                        value=Signal::derive(move || form.with(|f| f.gender.clone()))
                        on_change=move |v| form.update(|f| f.gender = v)
                        errors=errors
                    />
                    <SelectField
                        id="user-type"
                        label="User Type"
                        options=options(USER_TYPE_OPTIONS)
                        value=Signal::derive(move || form.with(|f| f.user_type.clone()))
                        on_change=move |v| form.update(|f| f.user_type = v)
                        errors=errors
                    />
                    <div class="modal-actions">
                        <button type="button" class="btn btn-secondary" on:click=move |_| set_editing.set(None)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </Modal>

            <DeleteConfirmModal
                entity="User"
                target=delete_target
                on_confirm=confirm_delete
                on_cancel=move |_| listing.update(|l| l.clear_pending_delete())
            />
        </section>
    }
}
