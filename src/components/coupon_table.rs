//! Coupon Table Component
//!
//! Sortable, filterable admin table. Rows failing the filter are hidden,
//! not removed, so realtime events can still address them by id.

use leptos::prelude::*;

use crate::actions;
use crate::models::{Coupon, CouponStatus};
use crate::store::{
    store_select_all, store_toggle_selected, use_app_store, AppStateStoreFields,
};
use crate::table::{sort_rows, SortColumn, SortDirection};

const COLUMNS: &[(SortColumn, &str)] = &[
    (SortColumn::Code, "Code"),
    (SortColumn::Name, "Name"),
    (SortColumn::Type, "Type"),
    (SortColumn::Discount, "Discount"),
    (SortColumn::Usage, "Uses"),
    (SortColumn::Status, "Status"),
    (SortColumn::Expiry, "Expires"),
];

#[component]
pub fn CouponTable() -> impl IntoView {
    let store = use_app_store();

    // Sorted but unfiltered; visibility is decided per row.
    let ordered = Memo::new(move |_| {
        let state = store.filter().get();
        let mut rows = store.coupons().get();
        sort_rows(&mut rows, &state);
        rows
    });

    let all_selected = move || {
        let coupons = store.coupons().read();
        let selected = store.selected().read();
        !coupons.is_empty() && coupons.iter().all(|c| selected.contains(&c.id))
    };

    view! {
        <table class="table coupon-table">
            <thead>
                <tr>
                    <th>
                        <input
                            type="checkbox"
                            id="selectAll"
                            prop:checked=all_selected
                            on:change=move |ev| {
                                store_select_all(&store, event_target_checked(&ev));
                            }
                        />
                    </th>
                    {COLUMNS
                        .iter()
                        .map(|&(column, label)| {
                            let sort_class = move || match store.filter().read().sort {
                                Some((active, SortDirection::Asc)) if active == column => {
                                    "sort-asc"
                                }
                                Some((active, SortDirection::Desc)) if active == column => {
                                    "sort-desc"
                                }
                                _ => "",
                            };
                            view! {
                                <th
                                    class=sort_class
                                    on:click=move |_| store.filter().write().toggle_sort(column)
                                >
                                    {label}
                                </th>
                            }
                        })
                        .collect_view()}
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || ordered.get()
                    key=|c| (c.id.clone(), c.status, c.usage_count)
                    children=move |coupon| view! { <CouponRow coupon /> }
                />
            </tbody>
        </table>
    }
}

#[component]
fn CouponRow(coupon: Coupon) -> impl IntoView {
    let store = use_app_store();

    let id = coupon.id.clone();
    let visible = {
        let coupon = coupon.clone();
        move || store.filter().read().matches(&coupon)
    };
    let flashing = {
        let id = id.clone();
        move || store.flashing().read().contains(&id)
    };
    let is_selected = {
        let id = id.clone();
        move || store.selected().read().contains(&id)
    };
    // Disabled while this row or a bulk action is in flight.
    let locked = {
        let id = id.clone();
        move || store.pending().read().contains(&id) || store.bulk_in_flight().get()
    };

    let toggle_label = match coupon.status {
        CouponStatus::Active => "Deactivate",
        CouponStatus::Inactive | CouponStatus::Expired => "Activate",
    };

    let select_id = id.clone();
    let copy_code = coupon.code.clone();
    let toggle_id = id.clone();
    let toggle_status = coupon.status;
    let delete_id = id.clone();

    view! {
        <tr
            style:display=move || (!visible()).then_some("none")
            class=("updated", flashing)
        >
            <td>
                <input
                    type="checkbox"
                    class="coupon-checkbox"
                    prop:checked=is_selected
                    on:change=move |_| store_toggle_selected(&store, &select_id)
                />
            </td>
            <td class="coupon-code">
                {coupon.code.clone()}
                <button
                    class="copy-btn"
                    on:click=move |_| actions::copy_code(store, copy_code.clone())
                >
                    "Copy"
                </button>
            </td>
            <td>{coupon.name.clone()}</td>
            <td class="coupon-type">{coupon.discount_type.clone()}</td>
            <td>{discount_display(&coupon)}</td>
            <td class="usage-count">{coupon.usage_count}</td>
            <td>
                <span class=format!("status-badge {}", coupon.status)>
                    {coupon.status.to_string()}
                </span>
            </td>
            <td>{coupon.expiry_date.clone()}</td>
            <td class="row-actions">
                <button
                    class="toggle-btn"
                    prop:disabled=locked.clone()
                    on:click=move |_| {
                        actions::toggle_status(store, toggle_id.clone(), toggle_status)
                    }
                >
                    {toggle_label}
                </button>
                <button
                    class="delete-btn"
                    prop:disabled=locked
                    on:click=move |_| actions::delete_coupon(store, delete_id.clone())
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

fn discount_display(coupon: &Coupon) -> String {
    if coupon.discount_type == "percentage" {
        format!("{}%", coupon.discount_value)
    } else {
        format!("${}", coupon.discount_value)
    }
}
