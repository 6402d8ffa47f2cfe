//! Coupon Form Component
//!
//! Create-coupon form with inline validation. Invalid submissions never
//! reach the network; the code is uppercased on submit.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::NewCoupon;
use crate::notifications::{notify, Severity};
use crate::store::use_app_store;
use crate::validate::{validate_draft, CouponDraft};

const DISCOUNT_TYPES: &[(&str, &str)] = &[
    ("percentage", "Percentage"),
    ("fixed_amount", "Fixed amount"),
    ("minimum_spend", "Minimum spend"),
];

#[component]
pub fn CouponForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (draft, set_draft) = signal(CouponDraft::default());
    let (errors, set_errors) = signal(std::collections::BTreeMap::<&'static str, String>::new());
    let (submitting, set_submitting) = signal(false);

    let field_error = move |field: &'static str| {
        errors.get().get(field).cloned().map(|message| {
            view! { <div class="field-error">{message}</div> }
        })
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        let today = String::from(js_sys::Date::new_0().to_iso_string());
        let today = today.split('T').next().unwrap_or_default().to_string();

        let found = validate_draft(&current, &today);
        if !found.is_empty() {
            set_errors.set(found);
            return;
        }
        set_errors.set(Default::default());
        set_submitting.set(true);

        let email = current.assigned_to_email.trim();
        let payload = NewCoupon {
            code: current.code.trim().to_uppercase(),
            name: current.name.trim().to_string(),
            description: current.description.trim().to_string(),
            discount_type: current.discount_type.clone(),
            discount_value: current.discount_value.trim().parse().unwrap_or(0.0),
            expiry_date: current.expiry_date.clone(),
            assigned_to_email: (!email.is_empty()).then(|| email.to_string()),
        };

        spawn_local(async move {
            match api::create_coupon(&payload).await {
                Ok(_created) => {
                    notify(store, "Coupon created successfully!", Severity::Success);
                    set_draft.set(CouponDraft::default());
                    ctx.reload();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[API] create failed: {err}").into());
                    notify(
                        store,
                        "Failed to create coupon. Code might already exist.",
                        Severity::Error,
                    );
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="coupon-form" on:submit=on_submit>
            <div class="form-row">
                <input
                    type="text"
                    placeholder="Code"
                    prop:value=move || draft.get().code
                    on:input=move |ev| set_draft.update(|d| d.code = event_target_value(&ev))
                />
                {move || field_error("code")}
            </div>
            <div class="form-row">
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || draft.get().name
                    on:input=move |ev| set_draft.update(|d| d.name = event_target_value(&ev))
                />
                {move || field_error("name")}
            </div>
            <div class="form-row">
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=move || draft.get().description
                    on:input=move |ev| {
                        set_draft.update(|d| d.description = event_target_value(&ev))
                    }
                />
            </div>
            <div class="form-row">
                <select
                    prop:value=move || draft.get().discount_type
                    on:change=move |ev| {
                        set_draft.update(|d| d.discount_type = event_target_value(&ev))
                    }
                >
                    <option value="">"Discount type..."</option>
                    {DISCOUNT_TYPES
                        .iter()
                        .map(|(value, label)| {
                            view! { <option value=*value>{*label}</option> }
                        })
                        .collect_view()}
                </select>
                {move || field_error("discount_type")}
            </div>
            <div class="form-row">
                <input
                    type="text"
                    placeholder="Discount value"
                    prop:value=move || draft.get().discount_value
                    on:input=move |ev| {
                        set_draft.update(|d| d.discount_value = event_target_value(&ev))
                    }
                />
                {move || field_error("discount_value")}
            </div>
            <div class="form-row">
                <input
                    type="date"
                    class="future-date"
                    prop:value=move || draft.get().expiry_date
                    on:input=move |ev| {
                        set_draft.update(|d| d.expiry_date = event_target_value(&ev))
                    }
                />
                {move || field_error("expiry_date")}
            </div>
            <div class="form-row">
                <input
                    type="email"
                    placeholder="Assign to email (optional)"
                    prop:value=move || draft.get().assigned_to_email
                    on:input=move |ev| {
                        set_draft.update(|d| d.assigned_to_email = event_target_value(&ev))
                    }
                />
                {move || field_error("assigned_to_email")}
            </div>
            <button type="submit" prop:disabled=move || submitting.get()>
                {move || if submitting.get() { "Creating..." } else { "Create Coupon" }}
            </button>
        </form>
    }
}
