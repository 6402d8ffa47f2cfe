//! Bulk Toolbar Component
//!
//! Bulk actions over the checked rows, visible only while the selection is
//! non-empty. Export is always available.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::models::CouponStatus;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BulkToolbar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let selected_count = move || store.selected().read().len();
    let busy = move || store.bulk_in_flight().get();

    view! {
        <div class="table-toolbar">
            <Show when=move || { selected_count() > 0 }>
                <div class="bulk-actions">
                    <span class="bulk-count">
                        {move || format!("{} selected", selected_count())}
                    </span>
                    <button
                        class="bulk-btn danger"
                        prop:disabled=busy
                        on:click=move |_| actions::bulk_delete(store, ctx)
                    >
                        "Delete Selected"
                    </button>
                    <button
                        class="bulk-btn"
                        prop:disabled=busy
                        on:click=move |_| {
                            actions::bulk_update_status(store, ctx, CouponStatus::Active)
                        }
                    >
                        "Activate"
                    </button>
                    <button
                        class="bulk-btn"
                        prop:disabled=busy
                        on:click=move |_| {
                            actions::bulk_update_status(store, ctx, CouponStatus::Inactive)
                        }
                    >
                        "Deactivate"
                    </button>
                </div>
            </Show>
            <button class="export-btn" on:click=move |_| actions::export_coupons(store, "csv")>
                "Export CSV"
            </button>
        </div>
    }
}
