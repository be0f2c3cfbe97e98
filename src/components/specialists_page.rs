//! Specialists Page
//!
//! Specialist directory with status and specialization filters. Edits
//! without a new photo resend the stored image path.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::form_field::{CheckboxField, FilterSelect, TextAreaField, TextField};
use crate::components::{DeleteConfirmModal, ImagePicker, LoadState, Modal, PaginationBar, TableStatusRow, Thumbnail};
use crate::context::AppContext;
use crate::filters::{distinct_values, filter_choices, SpecialistFilter};
use crate::format::{active_class, active_label, DEFAULT_SPECIALIST_IMAGE};
use crate::listing::Listing;
use crate::models::Specialist;
use crate::validation::{validate_specialist, FormErrors, FormMode, SpecialistForm};

#[component]
pub fn SpecialistsPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let window = ctx.page_window();

    let listing = RwSignal::new(Listing::<Specialist>::new(ctx.page_size()));
    let (load_state, set_load_state) = signal(LoadState::Loading);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let reload = move || set_reload_trigger.update(|v| *v += 1);

    // Filters
    let (search, set_search) = signal(String::new());
    let (status, set_status) = signal(String::from("all"));
    let (specialization, set_specialization) = signal(String::from("all"));
    let filter = Memo::new(move |_| SpecialistFilter::new(&search.get(), &status.get(), &specialization.get()));
    let specializations = Memo::new(move |_| {
        listing.with(|l| distinct_values(l.all(), |s: &Specialist| Some(s.specialization.as_str())))
    });

    // Modal state
    let (editing, set_editing) = signal::<Option<FormMode>>(None);
    let form = RwSignal::new(SpecialistForm::default());
    let (errors, set_errors) = signal(FormErrors::default());
    let (image, set_image) = signal_local::<Option<web_sys::File>>(None);
    let (busy, set_busy) = signal(false);

    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("Loading specialists, trigger={}", trigger);
        set_load_state.set(LoadState::Loading);
        spawn_local(async move {
            match api::list_specialists().await {
                Ok(loaded) => {
                    log::info!("Loaded {} specialists", loaded.len());
                    let f = filter.get_untracked();
                    listing.update(|l| l.replace(loaded, |s| f.matches(s)));
                    set_load_state.set(LoadState::Ready);
                }
                Err(err) => {
                    set_load_state.set(LoadState::Failed);
                    ctx.failure(&err, "Failed to load specialists");
                }
            }
        });
    });

    Effect::new(move |_| {
        let f = filter.get();
        listing.update(|l| l.apply(|s| f.matches(s)));
    });

    let reset_filters = move |_| {
        set_search.set(String::new());
        set_status.set("all".to_string());
        set_specialization.set("all".to_string());
    };

    let open_modal = move |mode: FormMode, values: SpecialistForm| {
        form.set(values);
        set_errors.set(FormErrors::default());
        set_image.set(None);
        set_editing.set(Some(mode));
    };

    let open_add = move |_| open_modal(FormMode::Add, SpecialistForm::default());

    let open_edit = move |id: u32| {
        spawn_local(async move {
            match api::get_specialist(id).await {
                Ok(specialist) => open_modal(FormMode::Edit(id), SpecialistForm::from(&specialist)),
                Err(err) => ctx.failure(&err, "Failed to load specialist details"),
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(mode) = editing.get_untracked() else { return; };
        let fields = match form.with_untracked(validate_specialist) {
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
                    api::create_specialist(&fields, file.as_ref()).await,
                    "Specialist added successfully",
                    "Failed to add specialist",
                ),
                FormMode::Edit(id) => (
                    api::update_specialist(id, &fields, file.as_ref()).await,
                    "Specialist updated successfully",
                    "Failed to update specialist",
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
        listing.with(|l| l.pending_delete().and_then(|id| l.find(id)).map(|s| s.name.clone()))
    });

    let confirm_delete = move |_| {
        let Some(id) = listing.with_untracked(|l| l.pending_delete()) else { return; };
        spawn_local(async move {
            match api::delete_specialist(id).await {
                Ok(()) => {
                    ctx.success("Specialist deleted successfully");
                    reload();
                }
                Err(err) => ctx.failure(&err, "Failed to delete specialist"),
            }
            listing.update(|l| l.clear_pending_delete());
        });
    };

    view! {
        <section class="specialists-management">
            <div class="page-toolbar">
                <input
                    type="search"
                    class="form-control search-input"
                    placeholder="Search specialists..."
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
                <FilterSelect
                    options=Signal::derive(move || filter_choices("All Specializations", specializations.get()))
                    value=specialization
                    on_change=move |v| set_specialization.set(v)
                />
                <button class="btn btn-secondary" on:click=reset_filters>"Reset"</button>
                <button class="btn btn-primary" on:click=open_add>"Add Specialist"</button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Title"</th>
                        <th>"Specialization"</th>
                        <th>"Image"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <TableStatusRow
                        state=load_state
                        empty=Signal::derive(move || listing.with(|l| l.is_empty()))
                        colspan=7
                        noun="specialists"
                    />
                    {move || listing.with(|l| l.page_items().into_iter().map(|specialist| {
                        let id = specialist.specialist_id;
                        view! {
                            <tr>
                                <td>{id}</td>
                                <td>{specialist.name.clone()}</td>
                                <td>{specialist.title.clone()}</td>
                                <td>{specialist.specialization.clone()}</td>
                                <td>
                                    <Thumbnail
                                        path=specialist.image_path.clone()
                                        alt=specialist.name.clone()
                                        fallback=DEFAULT_SPECIALIST_IMAGE
                                    />
                                </td>
                                <td>
                                    <span class=active_class(specialist.is_active)>{active_label(specialist.is_active)}</span>
                                </td>
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
                noun="specialists"
                range=Signal::derive(move || listing.with(|l| l.range()))
                controls=Signal::derive(move || listing.with(|l| l.controls(window)))
                on_page=move |page| listing.update(|l| l.set_page(page))
            />

            <Modal
                open=Signal::derive(move || editing.get().is_some())
                title=Signal::derive(move || match editing.get() {
                    Some(FormMode::Edit(_)) => "Edit Specialist".to_string(),
                    _ => "Add New Specialist".to_string(),
                })
                on_close=move |_| set_editing.set(None)
            >
                <form class="entity-form" on:submit=on_submit>
                    <TextField
                        id="specialist-name"
                        label="Name"
                        value=Signal::derive(move || form.with(|f| f.name.clone()))
                        on_input=move |v| form.update(|f| f.name = v)
                        errors=errors
                    />
                    <TextField
                        id="specialist-title"
                        label="Title"
                        value=Signal::derive(move || form.with(|f| f.title.clone()))
                        on_input=move |v| form.update(|f| f.title = v)
                        errors=errors
                    />
                    <TextField
                        id="specialist-specialization"
                        label="Specialization"
                        value=Signal::derive(move || form.with(|f| f.specialization.clone()))
                        on_input=move |v| form.update(|f| f.specialization = v)
                        errors=errors
                    />
                    <TextAreaField
                        id="specialist-bio"
                        label="Bio"
                        value=Signal::derive(move || form.with(|f| f.bio.clone()))
                        on_input=move |v| form.update(|f| f.bio = v)
                        errors=errors
                    />
                    <ImagePicker
                        id="specialist-image"
                        label="Photo"
                        existing=Signal::derive(move || form.with(|f| f.existing_image_path.clone()))
                        on_file=move |file| set_image.set(file)
                        on_remove=move |_| {
                            set_image.set(None);
                            form.update(|f| f.existing_image_path = None);
                        }
                        errors=errors
                        set_errors=set_errors
                    />
                    <CheckboxField
                        id="specialist-active"
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
                entity="Specialist"
                target=delete_target
                on_confirm=confirm_delete
                on_cancel=move |_| listing.update(|l| l.clear_pending_delete())
            />
        </section>
    }
}
