//! Admin Actions
//!
//! Network-bound coupon actions with confirmation prompts, in-flight guards
//! and toast feedback. Single-item actions mutate the store only after the
//! server confirms; bulk actions reload the full row set instead, trading
//! responsiveness for consistency.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAnchorElement;

use crate::api;
use crate::context::AppContext;
use crate::models::CouponStatus;
use crate::notifications::{notify, Severity};
use crate::store::{self, AppStateStoreFields, AppStore};

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Claim the per-row in-flight slot. At most one action per row at a time.
fn try_begin(store: AppStore, coupon_id: &str) -> bool {
    store.pending().write().insert(coupon_id.to_string())
}

fn finish(store: AppStore, coupon_id: &str) {
    store.pending().write().remove(coupon_id);
}

/// Pre-flight check shared by the bulk actions, evaluated before any
/// confirmation prompt. The selection warning wins over the busy warning.
fn bulk_blocker(coupon_ids: &[String], in_flight: bool, verb: &str) -> Option<String> {
    if coupon_ids.is_empty() {
        return Some(format!("Please select coupons to {verb}"));
    }
    in_flight.then(|| "A bulk action is already running".to_string())
}

fn selected_ids(store: AppStore) -> Vec<String> {
    store.selected().read_untracked().iter().cloned().collect()
}

/// Delete one coupon after a blocking confirmation prompt.
pub fn delete_coupon(store: AppStore, coupon_id: String) {
    if !confirm("Are you sure you want to delete this coupon? This action cannot be undone.") {
        return;
    }
    if !try_begin(store, &coupon_id) {
        notify(store, "An action for this coupon is already running", Severity::Warning);
        return;
    }
    spawn_local(async move {
        match api::delete_coupon(&coupon_id).await {
            Ok(()) => {
                store::store_remove_coupon(&store, &coupon_id);
                notify(store, "Coupon deleted successfully", Severity::Success);
            }
            Err(err) => {
                web_sys::console::error_1(&format!("[API] delete failed: {err}").into());
                notify(store, "Failed to delete coupon", Severity::Error);
            }
        }
        finish(store, &coupon_id);
    });
}

/// Flip a coupon between active and inactive. No confirmation step.
pub fn toggle_status(store: AppStore, coupon_id: String, current: CouponStatus) {
    let new_status = current.toggled();
    if !try_begin(store, &coupon_id) {
        notify(store, "An action for this coupon is already running", Severity::Warning);
        return;
    }
    spawn_local(async move {
        match api::update_coupon_status(&coupon_id, new_status).await {
            Ok(()) => {
                store::store_set_status(&store, &coupon_id, new_status);
                notify(store, format!("Coupon {new_status}"), Severity::Success);
            }
            Err(err) => {
                web_sys::console::error_1(&format!("[API] status update failed: {err}").into());
                notify(store, "Failed to update coupon status", Severity::Error);
            }
        }
        finish(store, &coupon_id);
    });
}

/// Delete every selected coupon, then reload the row set from the server.
pub fn bulk_delete(store: AppStore, ctx: AppContext) {
    let coupon_ids = selected_ids(store);
    let in_flight = store.bulk_in_flight().get_untracked();
    if let Some(warning) = bulk_blocker(&coupon_ids, in_flight, "delete") {
        notify(store, warning, Severity::Warning);
        return;
    }
    if !confirm(&format!(
        "Are you sure you want to delete {} coupons? This action cannot be undone.",
        coupon_ids.len()
    )) {
        return;
    }
    store.bulk_in_flight().set(true);
    spawn_local(async move {
        match api::bulk_delete(&coupon_ids).await {
            Ok(()) => {
                store::store_select_all(&store, false);
                notify(
                    store,
                    format!("{} coupons deleted successfully", coupon_ids.len()),
                    Severity::Success,
                );
                ctx.reload();
            }
            Err(err) => {
                web_sys::console::error_1(&format!("[API] bulk delete failed: {err}").into());
                notify(store, "Failed to delete coupons", Severity::Error);
            }
        }
        store.bulk_in_flight().set(false);
    });
}

/// Set the status of every selected coupon, then reload the row set.
pub fn bulk_update_status(store: AppStore, ctx: AppContext, status: CouponStatus) {
    let coupon_ids = selected_ids(store);
    let in_flight = store.bulk_in_flight().get_untracked();
    if let Some(warning) = bulk_blocker(&coupon_ids, in_flight, "update") {
        notify(store, warning, Severity::Warning);
        return;
    }
    store.bulk_in_flight().set(true);
    spawn_local(async move {
        match api::bulk_update_status(&coupon_ids, status).await {
            Ok(()) => {
                store::store_select_all(&store, false);
                notify(
                    store,
                    format!("{} coupons updated successfully", coupon_ids.len()),
                    Severity::Success,
                );
                ctx.reload();
            }
            Err(err) => {
                web_sys::console::error_1(&format!("[API] bulk status failed: {err}").into());
                notify(store, "Failed to update coupons", Severity::Error);
            }
        }
        store.bulk_in_flight().set(false);
    });
}

/// Copy a coupon code via the async clipboard API.
pub fn copy_code(store: AppStore, text: String) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let clipboard = window.navigator().clipboard();
    spawn_local(async move {
        match JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => notify(store, "Copied to clipboard!", Severity::Success),
            Err(_) => notify(store, "Failed to copy to clipboard", Severity::Error),
        }
    });
}

/// Kick off a file download through a synthetic link click.
pub fn export_coupons(store: AppStore, format: &str) {
    let result = (|| -> Result<(), String> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let link: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| format!("{e:?}"))?
            .dyn_into()
            .map_err(|e| format!("{e:?}"))?;
        link.set_href(&format!("/api/export/coupons?format={format}"));
        let stamp = String::from(js_sys::Date::new_0().to_iso_string());
        let date = stamp.split('T').next().unwrap_or_default().to_string();
        link.set_download(&format!("coupons_export_{date}.{format}"));
        let body = document.body().ok_or("no body")?;
        body.append_child(&link).map_err(|e| format!("{e:?}"))?;
        link.click();
        body.remove_child(&link).map_err(|e| format!("{e:?}"))?;
        Ok(())
    })();
    match result {
        Ok(()) => notify(store, "Export started", Severity::Success),
        Err(err) => {
            web_sys::console::error_1(&format!("[APP] export failed: {err}").into());
            notify(store, "Failed to start export", Severity::Error);
        }
    }
}
