use super::constants::SECTION_TRIGGER_MARGIN_PX;

/// A page section as seen by the scroll highlighter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionTop<'a> {
    pub id: Option<&'a str>,
    pub top: f64,
}

/// Picks the section the reader is in: the last one (document order) whose top,
/// minus the trigger margin, is at or above the scroll offset.
///
/// Only the lower bound is tested, so a short trailing section can take over
/// before the previous one has scrolled past. Sections without an id (or with
/// an empty one) never become current; the section before them stays current.
pub fn current_section<'a>(sections: &[SectionTop<'a>], scroll_y: f64) -> Option<&'a str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.top - SECTION_TRIGGER_MARGIN_PX)
        .filter_map(|s| s.id.filter(|id| !id.is_empty()))
        .last()
}

/// True when a nav link's `href` points at the section `id`.
///
/// Accepts `#id` as well as `page.html#id` style links.
pub fn link_targets_section(href: &str, id: &str) -> bool {
    match href.rsplit_once('#') {
        Some((_, fragment)) => !fragment.is_empty() && fragment == id,
        None => false,
    }
}
