//! Checkup Types Page
//!
//! Checkup catalogue with status filter. Create and edit upload through
//! multipart so an image can be attached.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::form_field::{CheckboxField, TextAreaField, TextField};
use crate::components::{DeleteConfirmModal, ImagePicker, LoadState, Modal, PaginationBar, TableStatusRow, Thumbnail};
use crate::context::AppContext;
use crate::filters::CheckupTypeFilter;
use crate::format::{active_class, active_label, format_price, preview, DEFAULT_CHECKUP_IMAGE};
use crate::listing::Listing;
use crate::models::CheckupType;
use crate::validation::{validate_checkup_type, CheckupTypeForm, FormErrors, FormMode};

#[component]
pub fn CheckupTypesPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let window = ctx.page_window();

    let listing = RwSignal::new(Listing::<CheckupType>::new(ctx.page_size()));
    let (load_state, set_load_state) = signal(LoadState::Loading);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let reload = move || set_reload_trigger.update(|v| *v += 1);

    // Filters
    let (search, set_search) = signal(String::new());
    let (status, set_status) = signal(String::from("all"));
    let filter = Memo::new(move |_| CheckupTypeFilter::new(&search.get(), &status.get()));

    // Modal state
    let (editing, set_editing) = signal::<Option<FormMode>>(None);
    let form = RwSignal::new(CheckupTypeForm::default());
    let (errors, set_errors) = signal(FormErrors::default());
    let (existing_image, set_existing_image) = signal::<Option<String>>(None);
    let (image, set_image) = signal_local::<Option<web_sys::File>>(None);
    let (busy, set_busy) = signal(false);

    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("Loading checkup types, trigger={}", trigger);
        set_load_state.set(LoadState::Loading);
        spawn_local(async move {
            match api::list_checkup_types().await {
                Ok(loaded) => {
                    log::info!("Loaded {} checkup types", loaded.len());
                    let f = filter.get_untracked();
                    listing.update(|l| l.replace(loaded, |c| f.matches(c)));
                    set_load_state.set(LoadState::Ready);
                }
                Err(err) => {
                    set_load_state.set(LoadState::Failed);
                    ctx.failure(&err, "Failed to load checkup types");
                }
            }
        });
    });

    Effect::new(move |_| {
        let f = filter.get();
        listing.update(|l| l.apply(|c| f.matches(c)));
    });

    let reset_modal = move |mode: FormMode, values: CheckupTypeForm, stored_image: Option<String>| {
        form.set(values);
        set_errors.set(FormErrors::default());
        set_existing_image.set(stored_image);
        set_image.set(None);
        set_editing.set(Some(mode));
    };

    let open_add = move |_| reset_modal(FormMode::Add, CheckupTypeForm::default(), None);

    // Edits start from the server copy, not the possibly stale table row
    let open_edit = move |id: u32| {
        spawn_local(async move {
            match api::get_checkup_type(id).await {
                Ok(checkup) => reset_modal(FormMode::Edit(id), CheckupTypeForm::from(&checkup), checkup.image_path),
                Err(err) => ctx.failure(&err, "Failed to load checkup type details"),
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(mode) = editing.get_untracked() else { return; };
        let fields = match form.with_untracked(validate_checkup_type) {
            Ok(fields) => fields,
            Err(errs) => {
                set_errors.set(errs);
                return;
            }
        };
        set_errors.set(FormErrors::default());
        let file = image.get_untracked();
        set_busy.set(true);
        spawn_local(async move {
            let (result, done, fallback) = match mode {
                FormMode::Add => (
                    api::create_checkup_type(&fields, file.as_ref()).await,
                    "Checkup type added successfully",
                    "Failed to add checkup type",
                ),
                FormMode::Edit(id) => (
                    api::update_checkup_type(id, &fields, file.as_ref()).await,
                    "Checkup type updated successfully",
                    "Failed to update checkup type",
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
        listing.with(|l| l.pending_delete().and_then(|id| l.find(id)).map(|c| c.name.clone()))
    });

    let confirm_delete = move |_| {
        let Some(id) = listing.with_untracked(|l| l.pending_delete()) else { return; };
        spawn_local(async move {
            match api::delete_checkup_type(id).await {
                Ok(()) => {
                    ctx.success("Checkup type deleted successfully");
                    reload();
                }
                Err(err) => ctx.failure(&err, "Failed to delete checkup type"),
            }
            listing.update(|l| l.clear_pending_delete());
        });
    };

    view! {
        <section class="checkup-types-management">
            <div class="page-toolbar">
                <input
                    type="search"
                    class="form-control search-input"
                    placeholder="Search checkup types..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    class="form-control filter-select"
                    prop:value=move || status.get()
                    on:change=move |ev| set_status.set(event_target_value(&ev))
                >
                    <option value="all">"All Status"</option>
                    <option value="active">"Active"</option>
                    <option value="inactive">"Inactive"</option>
                </select>
                <button class="btn btn-primary" on:click=open_add>"Add Checkup Type"</button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th>"Image"</th>
                        <th>"Price"</th>
                        <th>"Duration (min)"</th>
                        <th>"Max Slots"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <TableStatusRow
                        state=load_state
                        empty=Signal::derive(move || listing.with(|l| l.is_empty()))
                        colspan=9
                        noun="checkup types"
                    />
                    {move || listing.with(|l| l.page_items().into_iter().map(|checkup| {
                        let id = checkup.checkup_id;
                        view! {
                            <tr>
                                <td>{id}</td>
                                <td>{checkup.name.clone()}</td>
                                <td>{preview(checkup.description.as_deref())}</td>
                                <td>
                                    <Thumbnail
                                        path=checkup.image_path.clone()
                                        alt=checkup.name.clone()
                                        fallback=DEFAULT_CHECKUP_IMAGE
                                    />
                                </td>
                                <td>{format_price(checkup.price)}</td>
                                <td>{checkup.duration_minutes}</td>
                                <td>{checkup.max_slots_per_time}</td>
                                <td><span class=active_class(checkup.is_active)>{active_label(checkup.is_active)}</span></td>
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
                noun="checkup types"
                range=Signal::derive(move || listing.with(|l| l.range()))
                controls=Signal::derive(move || listing.with(|l| l.controls(window)))
                on_page=move |page| listing.update(|l| l.set_page(page))
            />

            <Modal
                open=Signal::derive(move || editing.get().is_some())
                title=Signal::derive(move || match editing.get() {
                    Some(FormMode::Edit(_)) => "Edit Checkup Type".to_string(),
                    _ => "Add New Checkup Type".to_string(),
                })
                on_close=move |_| set_editing.set(None)
            >
                <form class="entity-form" on:submit=on_submit>
                    <TextField
                        id="checkup-name"
                        label="Name"
                        value=Signal::derive(move || form.with(|f| f.name.clone()))
                        on_input=move |v| form.update(|f| f.name = v)
                        errors=errors
                    />
                    <TextAreaField
                        id="checkup-description"
                        label="Description"
                        value=Signal::derive(move || form.with(|f| f.description.clone()))
                        on_input=move |v| form.update(|f| f.description = v)
                        errors=errors
                    />
                    <TextField
                        id="checkup-price"
                        label="Price (RM)"
                        input_type="number"
                        value=Signal::derive(move || form.with(|f| f.price.clone()))
                        on_input=move |v| form.update(|f| f.price = v)
                        errors=errors
                    />
                    <TextField
                        id="checkup-duration"
                        label="Duration (minutes)"
                        input_type="number"
                        value=Signal::derive(move || form.with(|f| f.duration.clone()))
                        on_input=move |v| form.update(|f| f.duration = v)
                        errors=errors
                    />
                    <TextField
                        id="checkup-max-slots"
                        label="Max Slots per Time"
                        input_type="number"
                        value=Signal::derive(move || form.with(|f| f.max_slots.clone()))
                        on_input=move |v| form.update(|f| f.max_slots = v)
                        errors=errors
                    />
                    <ImagePicker
                        id="checkup-image"
                        label="Image"
                        existing=existing_image
                        on_file=move |file| set_image.set(file)
                        on_remove=move |_| {
                            set_image.set(None);
                            set_existing_image.set(None);
                        }
                        errors=errors
                        set_errors=set_errors
                    />
                    <CheckboxField
                        id="checkup-active"
                        label="Active"
                        checked=Signal::derive(move || form.with(|f| f.active))
                        on_toggle=move |v| form.update(|f| f.active = v)
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
                entity="Checkup Type"
                target=delete_target
                on_confirm=confirm_delete
                on_cancel=move |_| listing.update(|l| l.clear_pending_delete())
            />
        </section>
    }
}
