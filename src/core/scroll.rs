use super::constants::{BACK_TO_TOP_THRESHOLD_PX, HEADER_OFFSET_PX};

/// Element id referenced by an in-page link, or `None` for a bare `#`.
#[inline]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll offset that lands the target just below the fixed header.
#[inline]
pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - HEADER_OFFSET_PX
}

#[inline]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD_PX
}
