//! Activity Feed Component
//!
//! Reverse-chronological recent activity with type icons and humanized
//! timestamps.

use leptos::prelude::*;

use crate::format::{activity_icon, elapsed_seconds, relative_time};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ActivityFeed() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="recent-activity">
            <h2>"Recent Activity"</h2>
            <div class="activity-list">
                <For
                    each=move || store.activity().get()
                    key=|entry| (entry.message.clone(), entry.timestamp.clone())
                    children=move |entry| {
                        view! {
                            <div class="activity-item">
                                <div class=format!("activity-icon {}", entry.kind)>
                                    {activity_icon(&entry.kind)}
                                </div>
                                <div class="activity-content">
                                    <p class="activity-message">{entry.message.clone()}</p>
                                    <span class="activity-time">
                                        {relative_time(elapsed_seconds(&entry.timestamp))}
                                    </span>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
