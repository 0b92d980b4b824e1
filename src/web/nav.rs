use wasm_bindgen::JsCast;

use super::dom;
use crate::ui_model::{NAV_ACTIVE_CLASS, NAV_MENU_ID, NAV_TOGGLE_ID};

/// Mobile navigation: the toggle button flips the menu open and closed, and
/// any click outside both elements closes it. Skipped when either element is
/// missing from the page.
pub(super) fn wire(document: &web_sys::Document) -> Result<(), String> {
    let (Some(toggle), Some(menu)) = (
        document.get_element_by_id(NAV_TOGGLE_ID),
        document.get_element_by_id(NAV_MENU_ID),
    ) else {
        return Ok(());
    };

    {
        let menu = menu.clone();
        dom::on_event(&toggle, "click", move |_| {
            let _ = menu.class_list().toggle(NAV_ACTIVE_CLASS);
        })?;
    }

    dom::on_event(document, "click", move |event| {
        let Some(target) = event.target() else {
            return;
        };
        let Ok(node) = target.dyn_into::<web_sys::Node>() else {
            return;
        };
        if !toggle.contains(Some(&node)) && !menu.contains(Some(&node)) {
            let _ = menu.class_list().remove_1(NAV_ACTIVE_CLASS);
        }
    })
}
