//! Debounce/Throttle Utilities
//!
//! Rate-limiters for high-frequency event callbacks, built on
//! `gloo_timers` timeouts.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Debounce interval for the search input.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Returns a wrapper that restarts a `wait_ms` timer on every invocation;
/// only the last invocation within any window actually runs `f`, with that
/// invocation's argument.
pub fn debounce<A, F>(f: F, wait_ms: u32) -> impl FnMut(A)
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    let f = Rc::new(RefCell::new(f));
    let pending = Rc::new(RefCell::new(None::<Timeout>));
    move |args: A| {
        if let Some(timer) = pending.borrow_mut().take() {
            timer.cancel();
        }
        let f = Rc::clone(&f);
        let cleared = Rc::clone(&pending);
        let timer = Timeout::new(wait_ms, move || {
            cleared.borrow_mut().take();
            (f.borrow_mut())(args);
        });
        *pending.borrow_mut() = Some(timer);
    }
}

/// Returns a wrapper that runs `f` immediately on the first call, then
/// ignores calls until `limit_ms` has elapsed; the next call after the
/// window runs immediately and restarts it.
pub fn throttle<A, F>(f: F, limit_ms: u32) -> impl FnMut(A)
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    let f = Rc::new(RefCell::new(f));
    let in_window = Rc::new(Cell::new(false));
    move |args: A| {
        if in_window.get() {
            return;
        }
        (f.borrow_mut())(args);
        in_window.set(true);
        let reset = Rc::clone(&in_window);
        Timeout::new(limit_ms, move || reset.set(false)).forget();
    }
}
