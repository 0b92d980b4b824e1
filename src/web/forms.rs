use wasm_bindgen::JsCast;

use super::dom;
use crate::ui_model::{
    required_value_missing, ERROR_CLASS, FLAGGED_FIELD_SELECTOR, FORM_CONTROL_SELECTOR,
    FORM_SELECTOR, LOADING_LABEL, REQUIRED_FIELD_SELECTOR, SUBMIT_BUTTON_SELECTOR,
};

/// Submit-time validation: empty required fields get the error class and
/// block the submit, and the first offender receives focus. Editing a
/// flagged control clears its own flag without re-validating the rest.
pub(super) fn wire_validation(document: &web_sys::Document) -> Result<(), String> {
    dom::for_each_element(document, FORM_SELECTOR, |form| {
        let f = form.clone();
        let _ = dom::on_event(&form, "submit", move |event| {
            let mut valid = true;
            let _ = dom::for_each_in(&f, REQUIRED_FIELD_SELECTOR, |field| {
                if required_value_missing(&field_value(&field)) {
                    let _ = field.class_list().add_1(ERROR_CLASS);
                    valid = false;
                } else {
                    let _ = field.class_list().remove_1(ERROR_CLASS);
                }
            });

            if !valid {
                event.prevent_default();
                if let Ok(Some(first)) = f.query_selector(FLAGGED_FIELD_SELECTOR) {
                    if let Some(el) = first.dyn_ref::<web_sys::HtmlElement>() {
                        let _ = el.focus();
                    }
                }
            }
        });
    })?;

    dom::for_each_element(document, FORM_CONTROL_SELECTOR, |control| {
        let c = control.clone();
        let _ = dom::on_event(&control, "input", move |_| {
            let _ = c.class_list().remove_1(ERROR_CLASS);
        });
    })
}

/// Disable a submit button and swap in the loading label when its form
/// submits. One-way per page load; a full navigation resets it.
pub(super) fn wire_submit_loading(document: &web_sys::Document) -> Result<(), String> {
    dom::for_each_element(document, SUBMIT_BUTTON_SELECTOR, |button| {
        let Ok(Some(form)) = button.closest(FORM_SELECTOR) else {
            return;
        };
        let _ = dom::on_event(&form, "submit", move |_| {
            if let Some(b) = button.dyn_ref::<web_sys::HtmlButtonElement>() {
                b.set_disabled(true);
                b.set_text_content(Some(LOADING_LABEL));
            }
        });
    })
}

/// Current value of a required form control. Controls that carry no value
/// (unexpected `[required]` hosts) validate as missing.
fn field_value(field: &web_sys::Element) -> String {
    if let Some(input) = field.dyn_ref::<web_sys::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = field.dyn_ref::<web_sys::HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}
