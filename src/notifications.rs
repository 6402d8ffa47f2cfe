//! Notification Center
//!
//! Transient toast queue with auto-expiry. Dismissal marks the entry as
//! exiting and removes it 300 ms later so the exit transition can play;
//! dismissing an already-exiting entry is a no-op.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::store::{AppStateStoreFields, AppStore};

pub const DEFAULT_DURATION_MS: u32 = 3000;
pub const EXIT_GRACE_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// One visible toast. Arrival order, newest last.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationEntry {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub exiting: bool,
}

/// Mark an entry as exiting. Returns false if the entry is gone or the
/// exit already started, making repeated dismissal idempotent.
pub fn begin_exit(entries: &mut [NotificationEntry], id: u64) -> bool {
    match entries.iter_mut().find(|e| e.id == id) {
        Some(entry) if !entry.exiting => {
            entry.exiting = true;
            true
        }
        _ => false,
    }
}

pub fn remove_entry(entries: &mut Vec<NotificationEntry>, id: u64) {
    entries.retain(|e| e.id != id);
}

/// Show a toast for the default 3000 ms.
pub fn notify(store: AppStore, message: impl Into<String>, severity: Severity) {
    notify_for(store, message, severity, DEFAULT_DURATION_MS);
}

/// Show a toast and schedule its auto-dismiss.
pub fn notify_for(
    store: AppStore,
    message: impl Into<String>,
    severity: Severity,
    duration_ms: u32,
) {
    // One store write guard at a time.
    let id = {
        let counter = store.next_notification_id();
        let mut next = counter.write();
        *next += 1;
        *next
    };
    store.notifications().write().push(NotificationEntry {
        id,
        message: message.into(),
        severity,
        exiting: false,
    });
    Timeout::new(duration_ms, move || dismiss(store, id)).forget();
}

/// Dismiss a toast, manually or on expiry. Idempotent.
pub fn dismiss(store: AppStore, id: u64) {
    if !begin_exit(&mut store.notifications().write(), id) {
        return;
    }
    Timeout::new(EXIT_GRACE_MS, move || {
        remove_entry(&mut store.notifications().write(), id);
    })
    .forget();
}
