//! Wasm-only wiring of the page behaviors onto the server-rendered DOM.
//!
//! Each behavior is independent: a missing element disables just that
//! feature, and a wiring failure is reported on the console without stopping
//! the rest.

mod alerts;
mod dom;
mod forms;
mod lazy;
mod nav;
mod scroll;
mod service_worker;
mod styles;

use wasm_bindgen::prelude::*;

use crate::ui_model::Behavior;

#[wasm_bindgen(start)]
pub fn start() {
    run(Behavior::ServiceWorker, service_worker::register_when_loaded());
    dom::on_document_parsed(init_page_behaviors);
}

fn init_page_behaviors() {
    let Some(document) = dom::document() else {
        return;
    };

    if let Err(e) = styles::inject_error_styles(&document) {
        dom::report("styles", &e);
    }

    run(Behavior::NavToggle, nav::wire(&document));
    run(Behavior::Alerts, alerts::wire(&document));
    run(Behavior::LazyImages, lazy::wire(&document));
    run(Behavior::FormValidation, forms::wire_validation(&document));
    run(Behavior::SmoothScroll, scroll::wire(&document));
    run(Behavior::SubmitLoading, forms::wire_submit_loading(&document));
}

fn run(behavior: Behavior, result: Result<(), String>) {
    if let Err(e) = result {
        dom::report(behavior.label(), &e);
    }
}
