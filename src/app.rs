//! Coupon Tracker Admin App
//!
//! Root component: owns the store and context, loads initial data and
//! opens the realtime connection for the lifetime of the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    ActivityFeed, BulkToolbar, CouponForm, CouponTable, FilterBar, NotificationArea, SearchBar,
    StatsGrid,
};
use crate::context::AppContext;
use crate::realtime::RealtimeConnection;
use crate::store::{store_set_coupons, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    provide_context(store);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    // Load the row set on mount and on every reload trigger.
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        spawn_local(async move {
            match api::list_coupons().await {
                Ok(coupons) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} coupons, trigger={}", coupons.len(), trigger)
                            .into(),
                    );
                    store_set_coupons(&store, coupons);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] coupon load failed: {err}").into());
                }
            }
        });
    });

    // Stats and activity load once, independently; failures stay silent.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_stats().await {
                Ok(stats) => store.stats().set(Some(stats)),
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] Failed to load stats: {err}").into());
                }
            }
        });
        spawn_local(async move {
            match api::get_recent_activity().await {
                Ok(entries) => store.activity().set(entries),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[APP] Failed to load recent activity: {err}").into(),
                    );
                }
            }
        });
    });

    // One connection for the page, dropped (and closed) when the root
    // owner is disposed. Never reconnected.
    let connection = match RealtimeConnection::connect(store) {
        Ok(connection) => Some(connection),
        Err(err) => {
            web_sys::console::error_1(&format!("[WS] connect failed: {err}").into());
            None
        }
    };
    let _realtime = StoredValue::new_local(connection);

    view! {
        <div class="app-layout">
            <NotificationArea />

            <main class="main-content">
                <h1>"Coupon Tracker"</h1>

                <StatsGrid />

                <section class="coupon-admin">
                    <SearchBar />
                    <FilterBar />
                    <BulkToolbar />
                    <CouponTable />
                </section>

                <CouponForm />
            </main>

            <aside class="sidebar">
                <ActivityFeed />
            </aside>
        </div>
    }
}
