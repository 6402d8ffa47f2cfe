//! Browser-timer tests for the toast lifecycle.
//!
//! Run with `wasm-pack test --headless --chrome` (or firefox); the
//! auto-dismiss schedule needs a real event loop.

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen_test::*;

use coupon_tracker_ui::notifications::{dismiss, notify, notify_for, Severity};
use coupon_tracker_ui::store::{AppState, AppStateStoreFields};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn toast_exits_at_its_duration_and_is_gone_after_the_grace() {
    let store = Store::new(AppState::default());
    notify(store, "Coupon deleted successfully", Severity::Success);

    // Visible and not yet exiting shortly before the 3000 ms duration.
    TimeoutFuture::new(2900).await;
    {
        let entries = store.notifications().read_untracked();
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].exiting);
    }

    // Exiting once the duration elapses, still present during the grace.
    TimeoutFuture::new(200).await;
    {
        let entries = store.notifications().read_untracked();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].exiting);
    }

    // Removed once the 300 ms exit grace is over.
    TimeoutFuture::new(300).await;
    assert!(store.notifications().read_untracked().is_empty());
}

#[wasm_bindgen_test]
async fn manual_dismiss_before_expiry_removes_once() {
    let store = Store::new(AppState::default());
    notify_for(store, "saved", Severity::Info, 200);
    let id = store.notifications().read_untracked()[0].id;

    dismiss(store, id);
    assert!(store.notifications().read_untracked()[0].exiting);

    // The later auto-dismiss finds the entry gone and does nothing.
    TimeoutFuture::new(700).await;
    assert!(store.notifications().read_untracked().is_empty());
}
