use super::dom;
use crate::ui_model::{fragment_id, ANCHOR_SELECTOR};

/// In-page anchor clicks scroll smoothly to their target instead of
/// jumping. The default jump is suppressed even when the target is missing.
pub(super) fn wire(document: &web_sys::Document) -> Result<(), String> {
    let doc = document.clone();
    dom::for_each_element(document, ANCHOR_SELECTOR, move |link| {
        let doc = doc.clone();
        let l = link.clone();
        let _ = dom::on_event(&link, "click", move |event| {
            event.prevent_default();
            let Some(href) = l.get_attribute("href") else {
                return;
            };
            let Some(id) = fragment_id(&href) else {
                return;
            };
            let Some(target) = doc.get_element_by_id(id) else {
                return;
            };
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    })
}
