use crate::constants::SEL_TILT_CARDS;
use crate::core::constants::{TILT_HOVER_TRANSITION, TILT_REST_TRANSITION};
use crate::core::tilt::{hover_transform, rest_transform, tilt_angles};
use crate::dom;
use glam::Vec2;
use web_sys as web;

/// Pointer position relative to the element's top-left corner, and the
/// element's size. Both in CSS px.
#[inline]
pub fn pointer_local_px(ev: &web::MouseEvent, el: &web::Element) -> (Vec2, Vec2) {
    let rect = el.get_bounding_client_rect();
    let local = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    (local, Vec2::new(rect.width() as f32, rect.height() as f32))
}

/// 3D tilt on cards following the pointer.
pub fn wire_tilt_cards(document: &web::Document) -> anyhow::Result<()> {
    let cards = dom::query_all(document, SEL_TILT_CARDS)?;
    for card in cards {
        let Some(card_el) = dom::html_element(&card) else {
            continue;
        };
        wire_pointermove(&card, card_el.clone())?;
        wire_pointerleave(&card, card_el)?;
    }
    Ok(())
}

fn wire_pointermove(card: &web::Element, card_el: web::HtmlElement) -> anyhow::Result<()> {
    dom::listen(card, "mousemove", move |ev: web::MouseEvent| {
        let (pos, size) = pointer_local_px(&ev, &card_el);
        let style = card_el.style();
        _ = style.set_property("transform", &hover_transform(tilt_angles(pos, size)));
        _ = style.set_property("transition", TILT_HOVER_TRANSITION);
    })
}

fn wire_pointerleave(card: &web::Element, card_el: web::HtmlElement) -> anyhow::Result<()> {
    dom::listen(card, "mouseleave", move |_: web::MouseEvent| {
        let style = card_el.style();
        _ = style.set_property("transform", &rest_transform());
        _ = style.set_property("transition", TILT_REST_TRANSITION);
    })
}
