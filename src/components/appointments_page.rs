//! Appointments Page
//!
//! Appointment table with date filter, status badges, and a booking modal
//! that checks slot availability before allowing submit.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::form_field::{SelectField, TextField};
use crate::components::{DeleteConfirmModal, LoadState, Modal, PaginationBar, TableStatusRow};
use crate::context::AppContext;
use crate::filters::AppointmentFilter;
use crate::format::{format_date, format_time};
use crate::listing::Listing;
use crate::models::{Appointment, CheckupType, SlotAvailability, User};
use crate::schedule::{enrich_with_patients, sort_ascending, AppointmentStatus};
use crate::validation::{validate_appointment, AppointmentForm, FormErrors, FormMode};

const DATE_FILTERS: &[(&str, &str)] = &[
    ("all", "All Dates"),
    ("today", "Today"),
    ("upcoming", "Upcoming"),
    ("past", "Past"),
];

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let window = ctx.page_window();

    let listing = RwSignal::new(Listing::<Appointment>::new(ctx.page_size()));
    let (patients, set_patients) = signal(Vec::<User>::new());
    let (checkups, set_checkups) = signal(Vec::<CheckupType>::new());
    let (load_state, set_load_state) = signal(LoadState::Loading);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let reload = move || set_reload_trigger.update(|v| *v += 1);

    // Filters
    let (search, set_search) = signal(String::new());
    let (date_filter, set_date_filter) = signal(String::from("all"));
    let filter = Memo::new(move |_| AppointmentFilter::new(&search.get(), &date_filter.get(), Local::now().date_naive()));

    // Modal state
    let (editing, set_editing) = signal::<Option<FormMode>>(None);
    let form = RwSignal::new(AppointmentForm::default());
    let (errors, set_errors) = signal(FormErrors::default());
    let (slot, set_slot) = signal::<Option<SlotAvailability>>(None);
    let (busy, set_busy) = signal(false);
    let slot_full = move || slot.with(|s| s.as_ref().is_some_and(|s| !s.is_available));

    // Patients and checkup types feed the dropdowns and the patient column
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("Loading appointments, trigger={}", trigger);
        set_load_state.set(LoadState::Loading);
        spawn_local(async move {
            let known_patients = match api::list_users_by_type("Normal").await {
                Ok(loaded) => loaded,
                Err(err) => {
                    ctx.failure(&err, "Failed to load patients");
                    Vec::new()
                }
            };
            match api::list_checkup_types().await {
                Ok(loaded) => set_checkups.set(loaded),
                Err(err) => ctx.failure(&err, "Failed to load checkup types"),
            }
            match api::list_appointments().await {
                Ok(mut appts) => {
                    log::info!("Loaded {} appointments", appts.len());
                    enrich_with_patients(&mut appts, &known_patients);
                    sort_ascending(&mut appts);
                    let f = filter.get_untracked();
                    listing.update(|l| l.replace(appts, |a| f.matches(a)));
                    set_load_state.set(LoadState::Ready);
                }
                Err(err) => {
                    set_load_state.set(LoadState::Failed);
                    ctx.failure(&err, "Failed to load appointments");
                }
            }
            set_patients.set(known_patients);
        });
    });

    // Re-filter from page 1 when the search or date range changes
    Effect::new(move |_| {
        let f = filter.get();
        listing.update(|l| l.apply(|a| f.matches(a)));
    });

    // Ask the backend about the chosen slot once all three parts are set
    Effect::new(move |_| {
        if editing.get().is_none() {
            return;
        }
        let (date, time, checkup) = form.with(|f| (f.date.clone(), f.time.clone(), f.checkup_id.clone()));
        let Ok(checkup_id) = checkup.parse::<u32>() else {
            set_slot.set(None);
            return;
        };
        if date.is_empty() || time.is_empty() {
            set_slot.set(None);
            return;
        }
        spawn_local(async move {
            match api::check_slot_availability(&date, &time, checkup_id).await {
                Ok(availability) => set_slot.set(Some(availability)),
                Err(err) => {
                    log::warn!("Error checking slot availability: {}", err);
                    set_slot.set(None);
                }
            }
        });
    });

    let open_add = move |_| {
        form.set(AppointmentForm::default());
        set_errors.set(FormErrors::default());
        set_slot.set(None);
        set_editing.set(Some(FormMode::Add));
    };

    let open_edit = move |id: u32| {
        let Some(appt) = listing.with_untracked(|l| l.find(id).cloned()) else {
            log::warn!("Appointment {} is no longer loaded", id);
            return;
        };
        form.set(AppointmentForm {
            patient_id: appt.user_id.to_string(),
            date: appt.appointment_date.clone(),
            time: appt.appointment_time.split(':').take(2).collect::<Vec<_>>().join(":"),
            checkup_id: appt.checkup_id.to_string(),
        });
        set_errors.set(FormErrors::default());
        set_slot.set(None);
        set_editing.set(Some(FormMode::Edit(id)));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(mode) = editing.get_untracked() else { return; };
        if slot_full() {
            return;
        }
        let payload = match form.with_untracked(validate_appointment) {
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
                    api::create_appointment(&payload).await,
                    "Appointment added successfully",
                    "Failed to add appointment",
                ),
                FormMode::Edit(id) => (
                    api::update_appointment(id, &payload).await,
                    "Appointment updated successfully",
                    "Failed to update appointment",
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
        listing.with(|l| {
            l.pending_delete().and_then(|id| l.find(id)).map(|a| {
                format!(
                    "{} on {} for {}",
                    a.patient_name.as_deref().unwrap_or("Unknown"),
                    format_date(Some(&a.appointment_date)),
                    a.checkup_name
                )
            })
        })
    });

    let confirm_delete = move |_| {
        let Some(id) = listing.with_untracked(|l| l.pending_delete()) else { return; };
        spawn_local(async move {
            match api::delete_appointment(id).await {
                Ok(()) => {
                    ctx.success("Appointment deleted successfully");
                    reload();
                }
                Err(err) => ctx.failure(&err, "Failed to delete appointment"),
            }
            listing.update(|l| l.clear_pending_delete());
        });
    };

    let patient_options = Signal::derive(move || {
        patients.with(|ps| ps.iter().map(|p| (p.user_id.to_string(), p.user_name.clone())).collect::<Vec<_>>())
    });
    let checkup_options = Signal::derive(move || {
        checkups.with(|cs| cs.iter().map(|c| (c.checkup_id.to_string(), c.name.clone())).collect::<Vec<_>>())
    });

    view! {
        <section class="appointments-management">
            <div class="page-toolbar">
                <input
                    type="search"
                    class="form-control search-input"
                    placeholder="Search by patient or checkup..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    class="form-control filter-select"
                    prop:value=move || date_filter.get()
                    on:change=move |ev| set_date_filter.set(event_target_value(&ev))
                >
                    {DATE_FILTERS.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
                <button class="btn btn-primary" on:click=open_add>"Add Appointment"</button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Patient"</th>
                        <th>"Date"</th>
                        <th>"Time"</th>
                        <th>"Checkup"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <TableStatusRow
                        state=load_state
                        empty=Signal::derive(move || listing.with(|l| l.is_empty()))
                        colspan=7
                        noun="appointments"
                    />
                    {move || {
                        let now = Local::now().naive_local();
                        listing.with(|l| l.page_items().into_iter().map(|appt| {
                            let id = appt.appointment_id;
                            let status = AppointmentStatus::at(appt, now);
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>
                                        <div class="patient-info">
                                            <div class="patient-name">
                                                {appt.patient_name.clone().unwrap_or_else(|| "Unknown".to_string())}
                                            </div>
                                            <div class="patient-email">
                                                {appt.patient_email.clone().unwrap_or_else(|| "N/A".to_string())}
                                            </div>
                                        </div>
                                    </td>
                                    <td>{format_date(Some(&appt.appointment_date))}</td>
                                    <td>{format_time(Some(&appt.appointment_time))}</td>
                                    <td>{appt.checkup_name.clone()}</td>
                                    <td><span class=status.badge_class()>{status.label()}</span></td>
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
                        }).collect_view())
                    }}
                </tbody>
            </table>

            <PaginationBar
                noun="appointments"
                range=Signal::derive(move || listing.with(|l| l.range()))
                controls=Signal::derive(move || listing.with(|l| l.controls(window)))
                on_page=move |page| listing.update(|l| l.set_page(page))
            />

            <Modal
                open=Signal::derive(move || editing.get().is_some())
                title=Signal::derive(move || match editing.get() {
                    Some(FormMode::Edit(_)) => "Edit Appointment".to_string(),
                    _ => "Add New Appointment".to_string(),
                })
                on_close=move |_| set_editing.set(None)
            >
                <form class="entity-form" on:submit=on_submit>
                    <SelectField
                        id="appointment-patient"
                        label="Patient"
                        options=patient_options
                        placeholder="Select a patient"
                        value=Signal::derive(move || form.with(|f| f.patient_id.clone()))
                        on_change=move |v| form.update(|f| f.patient_id = v)
                        errors=errors
                    />
                    <TextField
                        id="appointment-date"
                        label="Date"
                        input_type="date"
                        value=Signal::derive(move || form.with(|f| f.date.clone()))
                        on_input=move |v| form.update(|f| f.date = v)
                        errors=errors
                    />
                    <TextField
                        id="appointment-time"
                        label="Time"
                        input_type="time"
                        value=Signal::derive(move || form.with(|f| f.time.clone()))
                        on_input=move |v| form.update(|f| f.time = v)
                        errors=errors
                    />
                    <SelectField
                        id="appointment-type"
                        label="Checkup Type"
                        options=checkup_options
                        placeholder="Select a checkup type"
                        value=Signal::derive(move || form.with(|f| f.checkup_id.clone()))
                        on_change=move |v| form.update(|f| f.checkup_id = v)
                        errors=errors
                    />
                    {move || slot.get().filter(|s| !s.is_available).map(|s| view! {
                        <div class="alert alert-danger">
                            {format!(
                                "This time slot is fully booked. Only {} slots remain out of {}.",
                                s.slots_remaining, s.max_slots
                            )}
                        </div>
                    })}
                    <div class="modal-actions">
                        <button type="button" class="btn btn-secondary" on:click=move |_| set_editing.set(None)>
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="btn btn-primary btn-submit"
                            disabled=move || busy.get() || slot_full()
                        >
                            {move || if busy.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </Modal>

            <DeleteConfirmModal
                entity="Appointment"
                target=delete_target
                on_confirm=confirm_delete
                on_cancel=move |_| listing.update(|l| l.clear_pending_delete())
            />
        </section>
    }
}
