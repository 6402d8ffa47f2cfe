//! Stats Grid Component
//!
//! Dashboard counters with a 1000 ms count-up from the currently displayed
//! value to the target on every stats update.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::format::{format_number, interpolate};
use crate::store::{use_app_store, AppStateStoreFields};

const COUNT_UP_MS: f64 = 1000.0;

#[component]
pub fn StatsGrid() -> impl IntoView {
    let store = use_app_store();

    let (total_coupons, set_total_coupons) = signal(0i64);
    let (active_coupons, set_active_coupons) = signal(0i64);
    let (total_claims, set_total_claims) = signal(0i64);
    let (total_savings, set_total_savings) = signal(0i64);

    Effect::new(move |_| {
        let Some(stats) = store.stats().get() else {
            return;
        };
        animate_counter(total_coupons.get_untracked(), stats.total_coupons, move |v| {
            set_total_coupons.set(v)
        });
        animate_counter(active_coupons.get_untracked(), stats.active_coupons, move |v| {
            set_active_coupons.set(v)
        });
        animate_counter(total_claims.get_untracked(), stats.total_claims, move |v| {
            set_total_claims.set(v)
        });
        animate_counter(
            total_savings.get_untracked(),
            stats.total_savings.floor() as i64,
            move |v| set_total_savings.set(v),
        );
    });

    view! {
        <div class="stats-grid">
            <div class="stat-card">
                <span class="stat-value" id="total-coupons">
                    {move || format_number(total_coupons.get())}
                </span>
                <span class="stat-label">"Total Coupons"</span>
            </div>
            <div class="stat-card">
                <span class="stat-value" id="active-coupons">
                    {move || format_number(active_coupons.get())}
                </span>
                <span class="stat-label">"Active Coupons"</span>
            </div>
            <div class="stat-card">
                <span class="stat-value" id="total-claims">
                    {move || format_number(total_claims.get())}
                </span>
                <span class="stat-label">"Total Claims"</span>
            </div>
            <div class="stat-card">
                <span class="stat-value" id="total-savings">
                    {move || format!("${}", format_number(total_savings.get()))}
                </span>
                <span class="stat-label">"Total Savings"</span>
            </div>
        </div>
    }
}

/// Drive one counter from `start` to `target` over an animation-frame loop.
fn animate_counter(start: i64, target: i64, apply: impl Fn(i64) + 'static) {
    if start == target {
        apply(target);
        return;
    }
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let kickoff = Rc::clone(&frame);
    let began: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));

    *kickoff.borrow_mut() = Some(Closure::new(move |now: f64| {
        let from = match began.get() {
            Some(t) => t,
            None => {
                began.set(Some(now));
                now
            }
        };
        let progress = ((now - from) / COUNT_UP_MS).min(1.0);
        apply(interpolate(start, target, progress));
        if progress < 1.0 {
            request_frame(&frame);
        } else {
            // Drop the closure, ending the loop.
            frame.borrow_mut().take();
        }
    }));
    request_frame(&kickoff);
}

fn request_frame(frame: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(callback) = frame.borrow().as_ref() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}
