use crate::ui_model::{ERROR_STYLE_CSS, ERROR_STYLE_ID};

/// Append the validation error styles to the document head, once.
/// Re-running the initializer leaves an existing block untouched.
pub(super) fn inject_error_styles(document: &web_sys::Document) -> Result<(), String> {
    if document.get_element_by_id(ERROR_STYLE_ID).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        return Ok(());
    };

    let style = document
        .create_element("style")
        .map_err(|_| "create_element(style) threw".to_string())?;
    style.set_id(ERROR_STYLE_ID);
    style.set_text_content(Some(ERROR_STYLE_CSS));
    head.append_child(&style)
        .map_err(|_| "append_child threw".to_string())?;
    Ok(())
}
