//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::SessionUser;

const SESSION_KEY: &str = "userData";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Danger,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "notification notification-success",
            Self::Danger => "notification notification-danger",
            Self::Warning => "notification notification-warning",
            Self::Info => "notification notification-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub kind: NotificationKind,
}

/// Visible toasts, oldest first, with ids that are never reused
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u32,
}

impl NotificationQueue {
    /// Append a notification and return its id
    pub fn push(&mut self, message: String, kind: NotificationKind) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, message, kind });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Logged-in user, if any
    pub session: Option<SessionUser>,
    /// Visible toast notifications
    pub notifications: NotificationQueue,
    /// Set after signup so the login form can greet the new user
    pub just_registered: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: load_session(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a notification and return its id
pub fn store_push_notification(store: &AppStore, message: String, kind: NotificationKind) -> u32 {
    store.notifications().write().push(message, kind)
}

pub fn store_dismiss_notification(store: &AppStore, id: u32) {
    store.notifications().write().dismiss(id);
}

pub fn store_notifications(store: &AppStore) -> Vec<Notification> {
    store.notifications().with(|queue| queue.items().to_vec())
}

pub fn store_session(store: &AppStore) -> Option<SessionUser> {
    store.session().get()
}

/// Remember the logged-in user for this tab
pub fn store_set_session(store: &AppStore, user: SessionUser) {
    save_session(&user);
    *store.session().write() = Some(user);
}

pub fn store_clear_session(store: &AppStore) {
    if let Some(storage) = session_storage() {
        if storage.remove_item(SESSION_KEY).is_err() {
            log::warn!("Could not clear stored session");
        }
    }
    *store.session().write() = None;
}

pub fn store_just_registered(store: &AppStore) -> bool {
    store.just_registered().get()
}

pub fn store_set_just_registered(store: &AppStore, value: bool) {
    *store.just_registered().write() = value;
}

// ========================
// Session Storage
// ========================

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

fn load_session() -> Option<SessionUser> {
    let raw = session_storage()?.get_item(SESSION_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(err) => {
            log::warn!("Ignoring stored session: {}", err);
            None
        }
    }
}

fn save_session(user: &SessionUser) {
    let Some(storage) = session_storage() else {
        return;
    };
    match serde_json::to_string(user) {
        Ok(json) => {
            if storage.set_item(SESSION_KEY, &json).is_err() {
                log::warn!("Could not persist session");
            }
        }
        Err(err) => log::warn!("Could not encode session: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_ids_are_unique_after_dismiss() {
        let mut queue = NotificationQueue::default();
        let first = queue.push("Saved".into(), NotificationKind::Success);
        let second = queue.push("Failed".into(), NotificationKind::Danger);
        assert_ne!(first, second);

        queue.dismiss(first);
        let third = queue.push("Logged out".into(), NotificationKind::Info);
        assert!(third > second);

        let ids: Vec<u32> = queue.items().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![second, third]);
        assert_eq!(queue.items()[0].kind, NotificationKind::Danger);
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut queue = NotificationQueue::default();
        queue.push("Saved".into(), NotificationKind::Success);
        queue.dismiss(99);
        assert_eq!(queue.items().len(), 1);
    }
}
