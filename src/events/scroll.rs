use crate::constants::{CLASS_ACTIVE, SEL_BACK_TO_TOP, SEL_IN_PAGE_ANCHOR};
use crate::core::scroll::{anchor_scroll_top, back_to_top_visible, fragment_id};
use crate::dom;
use web_sys as web;

/// In-page anchors scroll smoothly, leaving room for the fixed header.
pub fn wire_smooth_anchors(document: &web::Document) -> anyhow::Result<()> {
    let anchors = dom::query_all(document, SEL_IN_PAGE_ANCHOR)?;
    for anchor in &anchors {
        let doc = document.clone();
        let anchor_for_click = anchor.clone();
        dom::add_click_listener(anchor, move |ev| {
            ev.prevent_default();
            let href = anchor_for_click.get_attribute("href").unwrap_or_default();
            let Some(id) = fragment_id(&href) else {
                return;
            };
            let Some(target) = doc.get_element_by_id(id).and_then(|t| dom::html_element(&t))
            else {
                log::debug!("[scroll] no element for #{}", id);
                return;
            };
            dom::smooth_scroll_to(anchor_scroll_top(target.offset_top() as f64));
        })?;
    }
    log::debug!("[scroll] {} in-page anchors wired", anchors.len());
    Ok(())
}

pub fn wire_back_to_top(document: &web::Document) -> anyhow::Result<()> {
    let Some(button) = dom::query(document, SEL_BACK_TO_TOP)? else {
        log::debug!("[scroll] no back-to-top button");
        return Ok(());
    };

    let cl = button.class_list();
    dom::on_window_scroll(move |scroll_y| {
        if back_to_top_visible(scroll_y) {
            _ = cl.add_1(CLASS_ACTIVE);
        } else {
            _ = cl.remove_1(CLASS_ACTIVE);
        }
    })?;

    dom::add_click_listener(&button, |ev| {
        ev.prevent_default();
        dom::smooth_scroll_to(0.0);
    })
}
