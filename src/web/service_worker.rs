use wasm_bindgen_futures::JsFuture;

use super::dom;
use crate::ui_model::SERVICE_WORKER_URL;

/// Best-effort service worker registration once the page has fully loaded.
/// Both outcomes are terminal; the console line is the only trace. Skipped
/// when the runtime has no serviceWorker support.
pub(super) fn register_when_loaded() -> Result<(), String> {
    let Some(window) = dom::window() else {
        return Ok(());
    };
    let navigator = window.navigator();
    if !js_sys::Reflect::has(navigator.as_ref(), &"serviceWorker".into()).unwrap_or(false) {
        return Ok(());
    }

    // The module may be instantiated after the load event already fired, in
    // which case a listener would never run.
    if window.document().map(|d| d.ready_state()).as_deref() == Some("complete") {
        register(&navigator);
        return Ok(());
    }

    dom::on_event(&window, "load", |_| {
        let Some(window) = dom::window() else {
            return;
        };
        register(&window.navigator());
    })
}

fn register(navigator: &web_sys::Navigator) {
    let promise = navigator.service_worker().register(SERVICE_WORKER_URL);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => web_sys::console::log_1(&"ServiceWorker registered".into()),
            Err(err) => {
                web_sys::console::log_2(&"ServiceWorker registration failed: ".into(), &err);
            }
        }
    });
}
