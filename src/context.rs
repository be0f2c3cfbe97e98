//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::store::{store_clear_session, store_dismiss_notification, store_push_notification, AppStore, NotificationKind};

/// Admin sections reachable from the nav bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Users,
    Appointments,
    CheckupTypes,
    Specialists,
    HealthFacts,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Users,
        Page::Appointments,
        Page::CheckupTypes,
        Page::Specialists,
        Page::HealthFacts,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Users => "Users",
            Page::Appointments => "Appointments",
            Page::CheckupTypes => "Checkup Types",
            Page::Specialists => "Specialists",
            Page::HealthFacts => "Health Facts",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Section currently shown - read
    pub current_page: ReadSignal<Page>,
    /// Section currently shown - write
    set_current_page: WriteSignal<Page>,
    config: StoredValue<AppConfig>,
    store: AppStore,
}

impl AppContext {
    pub fn new(current_page: (ReadSignal<Page>, WriteSignal<Page>), config: AppConfig, store: AppStore) -> Self {
        Self {
            current_page: current_page.0,
            set_current_page: current_page.1,
            config: StoredValue::new(config),
            store,
        }
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("Navigating to {}", page.title());
        self.set_current_page.set(page);
    }

    pub fn page_size(&self) -> usize {
        self.config.with_value(|c| c.page_size)
    }

    pub fn page_window(&self) -> usize {
        self.config.with_value(|c| c.page_window)
    }

    /// Show a toast that removes itself after the configured lifetime
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let store = self.store;
        let id = store_push_notification(&store, message.into(), kind);
        let lifetime = self.config.with_value(|c| c.notification_ms);
        spawn_local(async move {
            TimeoutFuture::new(lifetime).await;
            store_dismiss_notification(&store, id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Success);
    }

    /// Report a failed request, preferring the server's own message
    pub fn failure(&self, err: &ApiError, fallback: &str) {
        log::warn!("{}: {}", fallback, err);
        self.notify(err.notice(fallback), NotificationKind::Danger);
    }

    pub fn logout(&self) {
        store_clear_session(&self.store);
        self.set_current_page.set(Page::Dashboard);
        self.notify("You have been logged out", NotificationKind::Info);
    }
}
