//! Filter Bar Component
//!
//! Categorical filter buttons. One filter is active at a time; `"all"`
//! clears it.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::table::FilterKind;

const STATUS_FILTERS: &[(&str, &str)] = &[
    ("all", "All"),
    ("active", "Active"),
    ("inactive", "Inactive"),
    ("expired", "Expired"),
];

const TYPE_FILTERS: &[(&str, &str)] = &[
    ("percentage", "Percentage"),
    ("fixed_amount", "Fixed amount"),
];

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    let filter_button = move |kind: FilterKind, value: &'static str, label: &'static str| {
        let is_active = move || {
            let filter = store.filter().read();
            filter.filter_kind == kind && filter.filter_value == value
        };
        view! {
            <button
                class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                on:click=move |_| store.filter().write().set_filter(kind, value)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="filter-bar">
            <div class="filter-group">
                {STATUS_FILTERS
                    .iter()
                    .map(|&(value, label)| filter_button(FilterKind::Status, value, label))
                    .collect_view()}
            </div>
            <div class="filter-group">
                {TYPE_FILTERS
                    .iter()
                    .map(|&(value, label)| filter_button(FilterKind::Type, value, label))
                    .collect_view()}
            </div>
        </div>
    }
}
