use crate::constants::{CONTROLS_ID, CONTROL_MINIMIZER_ID, MINIMIZED_CLASS, START_BUTTON_ID};
use web_sys as web;

#[inline]
pub fn hide_start_button(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_BUTTON_ID) {
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn controls_minimized(document: &web::Document) -> bool {
    document
        .get_element_by_id(CONTROLS_ID)
        .map(|el| el.class_list().contains(MINIMIZED_CLASS))
        .unwrap_or(false)
}

/// Exactly one of the controls panel and its minimized tab carries the
/// `minimized` class.
pub fn set_controls_minimized(document: &web::Document, minimized: bool) {
    let (Some(controls), Some(minimizer)) = (
        document.get_element_by_id(CONTROLS_ID),
        document.get_element_by_id(CONTROL_MINIMIZER_ID),
    ) else {
        return;
    };
    if minimized {
        _ = minimizer.class_list().remove_1(MINIMIZED_CLASS);
        _ = controls.class_list().add_1(MINIMIZED_CLASS);
    } else {
        _ = minimizer.class_list().add_1(MINIMIZED_CLASS);
        _ = controls.class_list().remove_1(MINIMIZED_CLASS);
    }
}

#[inline]
pub fn toggle_controls(document: &web::Document) {
    set_controls_minimized(document, !controls_minimized(document));
}
