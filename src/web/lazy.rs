use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::dom;
use crate::ui_model::{LAZY_ATTR, LAZY_IMAGE_SELECTOR};

/// Deferred image loading. Each `img[data-src]` present at load swaps its
/// real source in the first time it enters the viewport, then drops out of
/// observation. Skipped entirely when IntersectionObserver is unavailable —
/// no eager-load fallback. Images inserted later are not picked up.
pub(super) fn wire(document: &web_sys::Document) -> Result<(), String> {
    let Some(window) = dom::window() else {
        return Ok(());
    };
    if !js_sys::Reflect::has(window.as_ref(), &"IntersectionObserver".into()).unwrap_or(false) {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let image = entry.target();
                if let Some(src) = image.get_attribute(LAZY_ATTR) {
                    let _ = image.set_attribute("src", &src);
                    let _ = image.remove_attribute(LAZY_ATTR);
                    observer.unobserve(&image);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let observer = web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|_| "IntersectionObserver::new threw".to_string())?;
    callback.forget();

    dom::for_each_element(document, LAZY_IMAGE_SELECTOR, |image| {
        observer.observe(&image);
    })
}
