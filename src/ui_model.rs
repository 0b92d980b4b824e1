//! Markup contract and pure checks shared between wasm and native.
//!
//! Keeping the selectors, timings, and validation rules out of the wasm-only
//! `web` module allows us to unit-test them on the host.

/// Id of the mobile navigation toggle button.
pub const NAV_TOGGLE_ID: &str = "navToggle";
/// Id of the collapsible navigation menu panel.
pub const NAV_MENU_ID: &str = "navMenu";
/// Class that marks the menu panel as open.
pub const NAV_ACTIVE_CLASS: &str = "active";

pub const ALERT_SELECTOR: &str = ".alert";
pub const ALERT_CLOSE_SELECTOR: &str = ".alert-close";
/// Delay before an untouched alert starts fading, in milliseconds.
pub const ALERT_HIDE_DELAY_MS: i32 = 5000;
/// Duration of the opacity fade; the alert is removed when it ends.
pub const ALERT_FADE_MS: i32 = 500;

/// Attribute holding an image's real source until it scrolls into view.
pub const LAZY_ATTR: &str = "data-src";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

pub const FORM_SELECTOR: &str = "form";
/// Class flagging a form control that failed required-field validation.
pub const ERROR_CLASS: &str = "error";
pub const FLAGGED_FIELD_SELECTOR: &str = ".error";
pub const FORM_CONTROL_SELECTOR: &str = ".form-control";
pub const REQUIRED_FIELD_SELECTOR: &str = "[required]";

pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";
/// Label swapped onto a submit button while its form is in flight.
pub const LOADING_LABEL: &str = "Loading...";

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

pub const SERVICE_WORKER_URL: &str = "/static/js/sw.js";

/// Id of the injected error-style element. Injection is skipped when an
/// element with this id already exists, so re-running the initializer never
/// duplicates the block.
pub const ERROR_STYLE_ID: &str = "cellar-error-style";

/// CSS appended once to the document head for validation feedback.
pub const ERROR_STYLE_CSS: &str = "\
.form-control.error {
    border-color: var(--danger-color);
}
.form-control.error:focus {
    border-color: var(--danger-color);
    box-shadow: 0 0 0 0.2rem rgba(220, 53, 69, 0.25);
}
";

/// A required field fails validation when its trimmed value is empty.
pub fn required_value_missing(value: &str) -> bool {
    value.trim().is_empty()
}

/// Extract the target element id from an in-page fragment href.
///
/// Returns `None` for hrefs that are not fragment references and for the
/// bare `"#"` href, which points at nothing.
pub fn fragment_id(href: &str) -> Option<&str> {
    let rest = href.strip_prefix('#')?;
    if rest.is_empty() {
        None
    } else {
        Some(rest)
    }
}

/// The independent page behaviors wired at load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    NavToggle,
    Alerts,
    LazyImages,
    FormValidation,
    SmoothScroll,
    SubmitLoading,
    ServiceWorker,
}

impl Behavior {
    /// Short label used as the prefix on console diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            Behavior::NavToggle => "nav",
            Behavior::Alerts => "alerts",
            Behavior::LazyImages => "lazy",
            Behavior::FormValidation => "forms",
            Behavior::SmoothScroll => "scroll",
            Behavior::SubmitLoading => "submit",
            Behavior::ServiceWorker => "sw",
        }
    }

    pub fn all() -> &'static [Behavior] {
        &[
            Behavior::NavToggle,
            Behavior::Alerts,
            Behavior::LazyImages,
            Behavior::FormValidation,
            Behavior::SmoothScroll,
            Behavior::SubmitLoading,
            Behavior::ServiceWorker,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_ids_resolve_only_for_real_fragments() {
        assert_eq!(fragment_id("#section2"), Some("section2"));
        assert_eq!(fragment_id("#wine-list"), Some("wine-list"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
        assert_eq!(fragment_id("/wines"), None);
        assert_eq!(fragment_id("https://example.com/#top"), None);
    }

    #[test]
    fn required_values_are_missing_only_when_blank() {
        assert!(required_value_missing(""));
        assert!(required_value_missing("   "));
        assert!(required_value_missing("\t\n"));
        assert!(!required_value_missing("0"));
        assert!(!required_value_missing(" x "));
    }

    #[test]
    fn behavior_inventory_is_stable() {
        let all = Behavior::all();
        assert_eq!(all.len(), 7);

        let mut labels: Vec<&'static str> = all.iter().copied().map(Behavior::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 7);

        for b in all {
            assert!(!b.label().trim().is_empty());
        }
    }

    #[test]
    fn alert_timings_cover_the_fade() {
        assert_eq!(ALERT_HIDE_DELAY_MS, 5000);
        assert_eq!(ALERT_FADE_MS, 500);
        assert!(ALERT_HIDE_DELAY_MS > ALERT_FADE_MS);
    }

    #[test]
    fn selectors_agree_with_their_classes() {
        assert_eq!(FLAGGED_FIELD_SELECTOR, format!(".{ERROR_CLASS}"));
        assert_eq!(ALERT_CLOSE_SELECTOR, format!("{ALERT_SELECTOR}-close"));
        assert!(LAZY_IMAGE_SELECTOR.contains(LAZY_ATTR));
        assert!(ANCHOR_SELECTOR.contains('#'));
    }

    #[test]
    fn error_styles_target_flagged_controls() {
        assert!(ERROR_STYLE_CSS.contains(".form-control.error"));
        assert!(!ERROR_STYLE_ID.trim().is_empty());
        assert_eq!(LOADING_LABEL, "Loading...");
    }
}
