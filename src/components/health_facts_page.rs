//! Health Facts Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::form_field::{CheckboxField, FilterSelect, TextAreaField, TextField};
use crate::components::{DeleteConfirmModal, LoadState, Modal, PaginationBar, TableStatusRow};
use crate::context::AppContext;
use crate::filters::{distinct_values, filter_choices, HealthFactFilter};
use crate::format::{active_class, active_label, featured_class, featured_label, truncate, CONTENT_PREVIEW};
use crate::listing::Listing;
use crate::models::HealthFact;
use crate::validation::{validate_health_fact, FormErrors, FormMode, HealthFactForm};

#[component]
pub fn HealthFactsPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let window = ctx.page_window();

    let listing = RwSignal::new(Listing::<HealthFact>::new(ctx.page_size()));
    let (load_state, set_load_state) = signal(LoadState::Loading);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let reload = move || set_reload_trigger.update(|v| *v += 1);

    // Filters
    let (search, set_search) = signal(String::new());
    let (status, set_status) = signal(String::from("all"));
    let (featured, set_featured) = signal(String::from("all"));
    let (category, set_category) = signal(String::from("all"));
    let filter = Memo::new(move |_| {
        HealthFactFilter::new(&search.get(), &status.get(), &featured.get(), &category.get())
    });
    let categories = Memo::new(move |_| {
        listing.with(|l| distinct_values(l.all(), |f: &HealthFact| f.category.as_deref()))
    });

    // Modal state
    let (editing, set_editing) = signal::<Option<FormMode>>(None);
    let form = RwSignal::new(HealthFactForm::default());
    let (errors, set_errors) = signal(FormErrors::default());
    let (busy, set_busy) = signal(false);

    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("Loading health facts, trigger={}", trigger);
        set_load_state.set(LoadState::Loading);
        spawn_local(async move {
            match api::list_health_facts().await {
                Ok(loaded) => {
                    log::info!("Loaded {} health facts", loaded.len());
                    let f = filter.get_untracked();
                    listing.update(|l| l.replace(loaded, |fact| f.matches(fact)));
                    set_load_state.set(LoadState::Ready);
                }
                Err(err) => {
                    set_load_state.set(LoadState::Failed);
                    ctx.failure(&err, "Failed to load health facts");
                }
            }
        });
    });

    Effect::new(move |_| {
        let f = filter.get();
        listing.update(|l| l.apply(|fact| f.matches(fact)));
    });

    let reset_filters = move |_| {
        set_search.set(String::new());
        set_status.set("all".to_string());
        set_featured.set("all".to_string());
        set_category.set("all".to_string());
    };

    let open_modal = move |mode: FormMode, values: HealthFactForm| {
        form.set(values);
        set_errors.set(FormErrors::default());
        set_editing.set(Some(mode));
    };

    let open_add = move |_| open_modal(FormMode::Add, HealthFactForm::default());

    let open_edit = move |id: u32| {
        spawn_local(async move {
            match api::get_health_fact(id).await {
                Ok(fact) => open_modal(FormMode::Edit(id), HealthFactForm::from(&fact)),
                Err(err) => ctx.failure(&err, "Failed to load health fact details"),
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(mode) = editing.get_untracked() else { return; };
        let payload = match form.with_untracked(validate_health_fact) {
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
                FormMode::Add => (
                    api::create_health_fact(&payload).await,
                    "Health fact added successfully",
                    "Failed to add health fact",
                ),
                FormMode::Edit(id) => (
                    api::update_health_fact(id, &payload).await,
                    "Health fact updated successfully",
                    "Failed to update health fact",
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
        listing.with(|l| l.pending_delete().and_then(|id| l.find(id)).map(|f| f.title.clone()))
    });

    let confirm_delete = move |_| {
        let Some(id) = listing.with_untracked(|l| l.pending_delete()) else { return; };
        spawn_local(async move {
            match api::delete_health_fact(id).await {
                Ok(()) => {
                    ctx.success("Health fact deleted successfully");
                    reload();
                }
                Err(err) => ctx.failure(&err, "Failed to delete health fact"),
            }
            listing.update(|l| l.clear_pending_delete());
        });
    };

    view! {
        <section class="health-facts-management">
            <div class="page-toolbar">
                <input
                    type="search"
                    class="form-control search-input"
                    placeholder="Search health facts..."
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
                <select
                    class="form-control filter-select"
                    prop:value=move || featured.get()
                    on:change=move |ev| set_featured.set(event_target_value(&ev))
                >
                    <option value="all">"All"</option>
                    <option value="featured">"Featured"</option>
                    <option value="not-featured">"Not Featured"</option>
                </select>
                <FilterSelect
                    options=Signal::derive(move || filter_choices("All Categories", categories.get()))
                    value=category
                    on_change=move |v| set_category.set(v)
                />
                <button class="btn btn-secondary" on:click=reset_filters>"Reset"</button>
                <button class="btn btn-primary" on:click=open_add>"Add Health Fact"</button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Title"</th>
                        <th>"Content"</th>
                        <th>"Category"</th>
                        <th>"Featured"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <TableStatusRow
                        state=load_state
                        empty=Signal::derive(move || listing.with(|l| l.is_empty()))
                        colspan=7
                        noun="health facts"
                    />
                    {move || listing.with(|l| l.page_items().into_iter().map(|fact| {
                        let id = fact.fact_id;
                        view! {
                            <tr>
                                <td>{id}</td>
                                <td>{fact.title.clone()}</td>
                                <td>{truncate(Some(&fact.content), CONTENT_PREVIEW)}</td>
                                <td>{fact.category.clone().filter(|c| !c.is_empty()).unwrap_or_else(|| "-".to_string())}</td>
                                <td><span class=featured_class(fact.is_featured)>{featured_label(fact.is_featured)}</span></td>
                                <td><span class=active_class(fact.is_active)>{active_label(fact.is_active)}</span></td>
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
                noun="health facts"
                range=Signal::derive(move || listing.with(|l| l.range()))
                controls=Signal::derive(move || listing.with(|l| l.controls(window)))
                on_page=move |page| listing.update(|l| l.set_page(page))
            />

            <Modal
                open=Signal::derive(move || editing.get().is_some())
                title=Signal::derive(move || match editing.get() {
                    Some(FormMode::Edit(_)) => "Edit Health Fact".to_string(),
                    _ => "Add New Health Fact".to_string(),
                })
                on_close=move |_| set_editing.set(None)
            >
                <form class="entity-form" on:submit=on_submit>
                    <TextField
                        id="fact-title"
                        label="Title"
                        value=Signal::derive(move || form.with(|f| f.title.clone()))
                        on_input=move |v| form.update(|f| f.title = v)
                        errors=errors
                    />
                    <TextAreaField
                        id="fact-content"
                        label="Content"
                        value=Signal::derive(move || form.with(|f| f.content.clone()))
                        on_input=move |v| form.update(|f| f.content = v)
                        errors=errors
                    />
                    <TextField
                        id="fact-category"
                        label="Category"
                        value=Signal::derive(move || form.with(|f| f.category.clone()))
                        on_input=move |v| form.update(|f| f.category = v)
                        errors=errors
                    />
                    <CheckboxField
                        id="fact-featured"
                        label="Featured"
                        checked=Signal::derive(move || form.with(|f| f.featured))
                        on_toggle=move |v| form.update(|f| f.featured = v)
                    />
                    <CheckboxField
                        id="fact-active"
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
                entity="Health Fact"
                target=delete_target
                on_confirm=confirm_delete
                on_cancel=move |_| listing.update(|l| l.clear_pending_delete())
            />
        </section>
    }
}
