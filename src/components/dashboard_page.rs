//! Dashboard Page
//!
//! Headline counts and the five most recent appointments.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::LoadState;
use crate::context::AppContext;
use crate::error::ApiError;
use crate::format::format_activity_time;
use crate::models::{Appointment, User};
use crate::schedule::{recent_activity, ActivityEntry, DashboardStats, RECENT_ACTIVITY_LIMIT};

async fn load_dashboard() -> Result<(Vec<User>, Vec<Appointment>), ApiError> {
    let users = api::list_users().await?;
    let appointments = api::list_appointments().await?;
    Ok((users, appointments))
}

#[component]
fn StatCard(label: &'static str, state: ReadSignal<LoadState>, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-label">{label}</div>
            <div class="stat-value">
                {move || match state.get() {
                    LoadState::Loading => "...".to_string(),
                    LoadState::Failed => "Error".to_string(),
                    LoadState::Ready => value.get().to_string(),
                }}
            </div>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (stats, set_stats) = signal(DashboardStats::default());
    let (activity, set_activity) = signal(Vec::<ActivityEntry>::new());
    let (load_state, set_load_state) = signal(LoadState::Loading);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("Loading dashboard, trigger={}", trigger);
        set_load_state.set(LoadState::Loading);
        spawn_local(async move {
            match load_dashboard().await {
                Ok((users, appointments)) => {
                    let today = Local::now().date_naive();
                    set_stats.set(DashboardStats::compute(&users, &appointments, today));
                    set_activity.set(recent_activity(&appointments, &users, RECENT_ACTIVITY_LIMIT));
                    set_load_state.set(LoadState::Ready);
                }
                Err(err) => {
                    log::error!("Error loading dashboard data: {}", err);
                    set_load_state.set(LoadState::Failed);
                    ctx.failure(&err, "Failed to load dashboard data");
                }
            }
        });
    });

    let stat = move |pick: fn(&DashboardStats) -> usize| Signal::derive(move || stats.with(pick));

    view! {
        <section class="dashboard">
            <div class="page-toolbar">
                <button
                    class="btn btn-secondary"
                    disabled=move || load_state.get() == LoadState::Loading
                    on:click=move |_| set_reload_trigger.update(|v| *v += 1)
                >
                    "Refresh"
                </button>
            </div>

            <div class="stats-grid">
                <StatCard label="Total Users" state=load_state value=stat(|s| s.total_users) />
                <StatCard label="Doctors" state=load_state value=stat(|s| s.doctors) />
                <StatCard label="Patients" state=load_state value=stat(|s| s.patients) />
                <StatCard label="Total Appointments" state=load_state value=stat(|s| s.total_appointments) />
                <StatCard label="Today's Appointments" state=load_state value=stat(|s| s.today_appointments) />
                <StatCard label="Upcoming Appointments" state=load_state value=stat(|s| s.upcoming_appointments) />
            </div>

            <div class="recent-activity">
                <h2>"Recent Activity"</h2>
                {move || match load_state.get() {
                    LoadState::Loading => view! {
                        <div class="loading-indicator">"Loading recent activity..."</div>
                    }.into_any(),
                    LoadState::Failed => view! {
                        <div class="error-message">"Failed to load data. Please try again."</div>
                    }.into_any(),
                    LoadState::Ready if activity.with(|a| a.is_empty()) => view! {
                        <div class="no-activity">"No recent activity to display."</div>
                    }.into_any(),
                    LoadState::Ready => view! {
                        <ul class="activity-list">
                            <For
                                each=move || activity.get()
                                key=|entry| entry.clone()
                                children=|entry| view! {
                                    <li class="activity-item">
                                        <div class="activity-title">
                                            {format!("{} - {}", entry.patient_name, entry.checkup_name)}
                                        </div>
                                        <div class="activity-time">{format_activity_time(entry.starts_at)}</div>
                                    </li>
                                }
                            />
                        </ul>
                    }.into_any(),
                }}
            </div>
        </section>
    }
}
