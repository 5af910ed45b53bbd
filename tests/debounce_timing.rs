//! Browser tests for the debounce scheduling primitive
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use sidenotes_wasm::utils::Debouncer;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const WAIT_MS: i32 = 20;

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn counting_debouncer(immediate: bool) -> (Debouncer, Rc<Cell<u32>>) {
    let count = Rc::new(Cell::new(0));
    let debouncer = {
        let count = Rc::clone(&count);
        Debouncer::new(Rc::new(move || count.set(count.get() + 1)), WAIT_MS, immediate)
    };
    (debouncer, count)
}

#[wasm_bindgen_test]
async fn trailing_edge_coalesces_a_burst_into_one_call() {
    let (debouncer, count) = counting_debouncer(false);

    debouncer.call();
    debouncer.call();
    debouncer.call();
    assert_eq!(count.get(), 0, "nothing fires before the quiet period");

    sleep(WAIT_MS * 3).await;
    assert_eq!(count.get(), 1, "a burst collapses to one trailing call");
}

#[wasm_bindgen_test]
async fn separate_bursts_each_fire_once() {
    let (debouncer, count) = counting_debouncer(false);

    debouncer.call();
    sleep(WAIT_MS * 3).await;
    debouncer.call();
    debouncer.call();
    sleep(WAIT_MS * 3).await;

    assert_eq!(count.get(), 2);
}

#[wasm_bindgen_test]
async fn a_new_call_postpones_the_pending_timer() {
    let (debouncer, count) = counting_debouncer(false);

    debouncer.call();
    // Keep poking before the quiet period elapses; the timer must keep
    // resetting.
    for _ in 0..3 {
        sleep(WAIT_MS / 2).await;
        debouncer.call();
        assert_eq!(count.get(), 0);
    }

    sleep(WAIT_MS * 3).await;
    assert_eq!(count.get(), 1);
}

#[wasm_bindgen_test]
async fn leading_edge_fires_once_and_suppresses_the_trailing_call() {
    let (debouncer, count) = counting_debouncer(true);

    debouncer.call();
    assert_eq!(count.get(), 1, "immediate mode fires synchronously");

    debouncer.call();
    debouncer.call();
    assert_eq!(count.get(), 1, "calls inside the burst do not re-fire");

    sleep(WAIT_MS * 3).await;
    assert_eq!(count.get(), 1, "no trailing call in immediate mode");

    // After a full quiet period the next burst leads again.
    debouncer.call();
    assert_eq!(count.get(), 2);
}
