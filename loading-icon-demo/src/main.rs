//! loading-icon demo - mounts a few spinners into a bare page
//!
//! Serve with `trunk serve` from this directory. One icon runs untended,
//! one stops after five seconds to show the frozen-frame behavior.

use gloo_timers::future::TimeoutFuture;
use loading_icon::{create_loading_icon, create_loading_icon_with_label};
use wasm_bindgen_futures::spawn_local;

fn main() {
    let window = web_sys::window().expect("no window");
    let document = window.document().expect("no document");
    let body: web_sys::Element = document.body().expect("no body").into();

    // Small labelled icon, spinning for the page's lifetime.
    create_loading_icon(&body, 10.0)
        .expect("mount small icon")
        .forget();

    // Large icon without a label; frozen mid-spin after five seconds.
    let large = create_loading_icon_with_label(&body, 40.0, false).expect("mount large icon");
    spawn_local(async move {
        TimeoutFuture::new(5_000).await;
        large.stop();
    });
}
