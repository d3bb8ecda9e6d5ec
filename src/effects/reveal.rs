use crate::constants::{CLASS_VISIBLE, SEL_FADE_IN};
use crate::core::constants::REVEAL_THRESHOLD;
use crate::dom;
use crate::observer;
use web_sys as web;

/// Fade-in elements get `visible` the first time they scroll into view and are
/// then dropped from observation, so they never re-hide.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let elements = dom::query_all(document, SEL_FADE_IN)?;
    log::debug!("[reveal] observing {} elements", elements.len());
    observer::observe_viewport(&elements, REVEAL_THRESHOLD, |el, observer| {
        _ = el.class_list().add_1(CLASS_VISIBLE);
        observer.unobserve(el);
    })
}
