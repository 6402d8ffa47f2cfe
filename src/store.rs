//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is the
//! single source of truth; the DOM is a pure render target derived from it.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ActivityEntry, Coupon, CouponStatus, Stats};
use crate::notifications::NotificationEntry;
use crate::table::FilterState;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All coupon rows, filtered or not
    pub coupons: Vec<Coupon>,
    /// Current query/filter/sort
    pub filter: FilterState,
    /// Checked row ids for bulk actions
    pub selected: HashSet<String>,
    /// Row ids with an action in flight (one action per row at a time)
    pub pending: HashSet<String>,
    /// A bulk action is in flight
    pub bulk_in_flight: bool,
    /// Row ids showing the transient realtime-update highlight
    pub flashing: HashSet<String>,
    /// Visible toasts, newest last
    pub notifications: Vec<NotificationEntry>,
    pub next_notification_id: u64,
    /// Dashboard counters, None until the first load
    pub stats: Option<Stats>,
    /// Reverse-chronological activity feed
    pub activity: Vec<ActivityEntry>,
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

/// Replace the row set, dropping selection/pending state for rows that no
/// longer exist.
pub fn store_set_coupons(store: &AppStore, coupons: Vec<Coupon>) {
    let ids: HashSet<String> = coupons.iter().map(|c| c.id.clone()).collect();
    store.coupons().set(coupons);
    store.selected().write().retain(|id| ids.contains(id));
    store.pending().write().retain(|id| ids.contains(id));
    store.flashing().write().retain(|id| ids.contains(id));
}

/// Set a coupon's status by id
pub fn store_set_status(store: &AppStore, coupon_id: &str, status: CouponStatus) {
    store
        .coupons()
        .write()
        .iter_mut()
        .find(|c| c.id == coupon_id)
        .map(|c| c.status = status);
}

/// Remove a coupon from the store by id
pub fn store_remove_coupon(store: &AppStore, coupon_id: &str) {
    store.coupons().write().retain(|c| c.id != coupon_id);
    store.selected().write().remove(coupon_id);
    store.flashing().write().remove(coupon_id);
}

/// Toggle a row checkbox
pub fn store_toggle_selected(store: &AppStore, coupon_id: &str) {
    let field = store.selected();
    let mut selected = field.write();
    if !selected.remove(coupon_id) {
        selected.insert(coupon_id.to_string());
    }
}

/// Select every row, or clear the selection
pub fn store_select_all(store: &AppStore, select: bool) {
    if select {
        let ids: HashSet<String> = store
            .coupons()
            .read_untracked()
            .iter()
            .map(|c| c.id.clone())
            .collect();
        store.selected().set(ids);
    } else {
        store.selected().write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_selected_checks_then_unchecks() {
        let store = Store::new(AppState::default());
        store_toggle_selected(&store, "c1");
        assert!(store.selected().read_untracked().contains("c1"));
        store_toggle_selected(&store, "c1");
        assert!(store.selected().read_untracked().is_empty());
    }
}
