use wasm_bindgen::JsCast;

use super::dom;
use crate::ui_model::{ALERT_CLOSE_SELECTOR, ALERT_FADE_MS, ALERT_HIDE_DELAY_MS, ALERT_SELECTOR};

/// Alert dismissal: close buttons remove their enclosing alert immediately,
/// and every alert present at load fades out after a fixed delay.
///
/// Both paths may fire for the same alert; removing an already-detached
/// element is a no-op, so the race is harmless. Alerts inserted later are
/// not covered (snapshot at load).
pub(super) fn wire(document: &web_sys::Document) -> Result<(), String> {
    dom::for_each_element(document, ALERT_CLOSE_SELECTOR, |button| {
        let b = button.clone();
        let _ = dom::on_event(&button, "click", move |_| {
            if let Ok(Some(alert)) = b.closest(ALERT_SELECTOR) {
                alert.remove();
            }
        });
    })?;

    dom::for_each_element(document, ALERT_SELECTOR, |alert| {
        dom::set_timeout(
            move || {
                if let Some(el) = alert.dyn_ref::<web_sys::HtmlElement>() {
                    let style = el.style();
                    let _ = style.set_property("transition", &format!("opacity {ALERT_FADE_MS}ms"));
                    let _ = style.set_property("opacity", "0");
                }
                dom::set_timeout(move || alert.remove(), ALERT_FADE_MS);
            },
            ALERT_HIDE_DELAY_MS,
        );
    })
}
