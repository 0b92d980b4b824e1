//! Small DOM helpers shared by the behavior modules.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub(super) fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

pub(super) fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Log a wiring failure. Page behaviors degrade silently beyond this line.
pub(super) fn report(label: &str, message: &str) {
    web_sys::console::log_1(&format!("{label}: {message}").into());
}

/// Run `f` once the document structure is fully parsed. Runs immediately
/// when the parse already finished by the time the module was instantiated.
pub(super) fn on_document_parsed(f: impl FnOnce() + 'static) {
    let Some(document) = document() else {
        return;
    };
    if document.ready_state() == "loading" {
        let cb = Closure::once(f);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref());
        cb.forget();
    } else {
        f();
    }
}

/// Visit every element matching `selector` in the whole document.
pub(super) fn for_each_element(
    document: &web_sys::Document,
    selector: &str,
    f: impl FnMut(web_sys::Element),
) -> Result<(), String> {
    let list = document
        .query_selector_all(selector)
        .map_err(|_| format!("query_selector_all({selector}) threw"))?;
    visit(&list, f);
    Ok(())
}

/// Visit every element matching `selector` under `root`.
pub(super) fn for_each_in(
    root: &web_sys::Element,
    selector: &str,
    f: impl FnMut(web_sys::Element),
) -> Result<(), String> {
    let list = root
        .query_selector_all(selector)
        .map_err(|_| format!("query_selector_all({selector}) threw"))?;
    visit(&list, f);
    Ok(())
}

fn visit(list: &web_sys::NodeList, mut f: impl FnMut(web_sys::Element)) {
    for i in 0..list.length() {
        let Some(node) = list.item(i) else {
            continue;
        };
        if let Ok(el) = node.dyn_into::<web_sys::Element>() {
            f(el);
        }
    }
}

/// Attach an event handler to `target`. The closure stays alive for the
/// life of the page; nothing ever unsubscribes.
pub(super) fn on_event(
    target: &web_sys::EventTarget,
    event: &str,
    f: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), String> {
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(web_sys::Event)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|_| format!("add_event_listener({event}) threw"))?;
    cb.forget();
    Ok(())
}

/// One-shot timer. The handle is dropped because nothing ever cancels it.
pub(super) fn set_timeout(f: impl FnOnce() + 'static, delay_ms: i32) {
    let Some(window) = window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    let _ =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
}
