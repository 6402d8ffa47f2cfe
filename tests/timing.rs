//! Browser-timer tests for the debounce/throttle utilities.
//!
//! Run with `wasm-pack test --headless --chrome` (or firefox); the timing
//! semantics need a real event loop.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;

use coupon_tracker_ui::timing::{debounce, throttle};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn debounce_fires_only_the_last_call_in_a_window() {
    let hits: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
    let mut debounced = debounce(
        {
            let hits = Rc::clone(&hits);
            move |value: u32| hits.borrow_mut().push(value)
        },
        300,
    );

    // Calls at t=0, 50, 100, 250; only the one at t=250 may fire, at t=550.
    debounced(1);
    TimeoutFuture::new(50).await;
    debounced(2);
    TimeoutFuture::new(50).await;
    debounced(3);
    TimeoutFuture::new(150).await;
    debounced(4);

    TimeoutFuture::new(200).await;
    assert!(hits.borrow().is_empty(), "fired before the window elapsed");

    TimeoutFuture::new(200).await;
    assert_eq!(*hits.borrow(), vec![4]);
}

#[wasm_bindgen_test]
async fn debounce_passes_the_last_invocation_arguments() {
    let hits: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let mut debounced = debounce(
        {
            let hits = Rc::clone(&hits);
            move |value: String| hits.borrow_mut().push(value)
        },
        50,
    );

    debounced("first".to_string());
    debounced("second".to_string());
    TimeoutFuture::new(120).await;
    assert_eq!(*hits.borrow(), vec!["second".to_string()]);
}

#[wasm_bindgen_test]
async fn throttle_runs_immediately_then_blocks_until_the_window_ends() {
    let hits: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
    let mut throttled = throttle(
        {
            let hits = Rc::clone(&hits);
            move |value: u32| hits.borrow_mut().push(value)
        },
        200,
    );

    throttled(1);
    throttled(2);
    assert_eq!(*hits.borrow(), vec![1]);

    TimeoutFuture::new(100).await;
    throttled(3);
    assert_eq!(*hits.borrow(), vec![1]);

    TimeoutFuture::new(150).await;
    throttled(4);
    assert_eq!(*hits.borrow(), vec![1, 4]);
}
