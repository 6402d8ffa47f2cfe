//! Notification Area Component
//!
//! Renders the toast queue, newest last. Entries marked exiting keep their
//! slot for the exit transition until the center removes them.

use leptos::prelude::*;

use crate::notifications;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NotificationArea() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="notification-container">
            <For
                each=move || store.notifications().get()
                key=|entry| (entry.id, entry.exiting)
                children=move |entry| {
                    let id = entry.id;
                    let class = format!(
                        "notification notification-{}{}",
                        entry.severity.css_class(),
                        if entry.exiting { " notification-exit" } else { "" },
                    );
                    view! {
                        <div class=class>
                            <span class="notification-message">{entry.message.clone()}</span>
                            <button
                                class="notification-close"
                                on:click=move |_| notifications::dismiss(store, id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
