//! Search Bar Component
//!
//! Debounced text search over all coupon fields, with a result counter
//! shown only while the query is non-empty.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::table::apply_view;
use crate::timing::{debounce, SEARCH_DEBOUNCE_MS};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    let mut push_query = debounce(
        move |query: String| {
            store.filter().write().query = query;
        },
        SEARCH_DEBOUNCE_MS,
    );

    let visible_count = Memo::new(move |_| {
        let state = store.filter().get();
        apply_view(&store.coupons().get(), &state).len()
    });

    view! {
        <div class="search-bar">
            <input
                id="search"
                type="text"
                placeholder="Search coupons..."
                on:input=move |ev| push_query(event_target_value(&ev))
            />
            <Show when=move || !store.filter().read().query.is_empty()>
                <div id="search-results">
                    {move || {
                        format!(
                            "{} results found for \"{}\"",
                            visible_count.get(),
                            store.filter().read().query,
                        )
                    }}
                </div>
            </Show>
        </div>
    }
}
