use crate::constants::{CLASS_ACTIVE, SEL_HAMBURGER, SEL_NAV_LINK, SEL_NAV_MENU, SEL_SECTION};
use crate::core::nav::{current_section, link_targets_section, SectionTop};
use crate::dom;
use web_sys as web;

/// Mobile menu toggle plus scroll-driven active link highlighting.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let links = dom::query_all(document, SEL_NAV_LINK)?;
    wire_menu(document, &links)?;
    wire_active_link(document, links)
}

fn wire_menu(document: &web::Document, links: &[web::Element]) -> anyhow::Result<()> {
    let (Some(hamburger), Some(menu)) = (
        dom::query(document, SEL_HAMBURGER)?,
        dom::query(document, SEL_NAV_MENU)?,
    ) else {
        log::debug!("[nav] no hamburger/menu, mobile toggle skipped");
        return Ok(());
    };

    {
        let hamburger_cl = hamburger.class_list();
        let menu_cl = menu.class_list();
        dom::add_click_listener(&hamburger, move |_| {
            _ = hamburger_cl.toggle(CLASS_ACTIVE);
            _ = menu_cl.toggle(CLASS_ACTIVE);
        })?;
    }

    for link in links {
        let hamburger_cl = hamburger.class_list();
        let menu_cl = menu.class_list();
        dom::add_click_listener(link, move |_| {
            _ = hamburger_cl.remove_1(CLASS_ACTIVE);
            _ = menu_cl.remove_1(CLASS_ACTIVE);
        })?;
    }
    Ok(())
}

fn wire_active_link(document: &web::Document, links: Vec<web::Element>) -> anyhow::Result<()> {
    let sections: Vec<(Option<String>, web::HtmlElement)> =
        dom::query_all(document, SEL_SECTION)?
            .into_iter()
            .filter_map(|s| Some((s.get_attribute("id"), dom::html_element(&s)?)))
            .collect();
    if sections.is_empty() || links.is_empty() {
        log::debug!("[nav] no sections or links, highlighting skipped");
        return Ok(());
    }

    dom::on_window_scroll(move |scroll_y| {
        // layout can shift after load, so offsets are read per event
        let tops: Vec<SectionTop<'_>> = sections
            .iter()
            .map(|(id, el)| SectionTop {
                id: id.as_deref(),
                top: el.offset_top() as f64,
            })
            .collect();
        let current = current_section(&tops, scroll_y);
        for link in &links {
            let cl = link.class_list();
            _ = cl.remove_1(CLASS_ACTIVE);
            let href = link.get_attribute("href").unwrap_or_default();
            if current.is_some_and(|id| link_targets_section(&href, id)) {
                _ = cl.add_1(CLASS_ACTIVE);
            }
        }
    })
}
