use crate::constants::{ATTR_TYPING_TEXT, CLASS_CURSOR, CURSOR_GLYPH, SEL_HERO_ROLE};
use crate::core::typewriter::Typewriter;
use crate::dom::{self, js_err};
use crate::frame;
use web_sys as web;

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let Some(role) = dom::query(document, SEL_HERO_ROLE)? else {
        log::debug!("[typewriter] no role element");
        return Ok(());
    };
    let Some(mut typewriter) = role
        .get_attribute(ATTR_TYPING_TEXT)
        .and_then(|attr| Typewriter::parse(&attr))
    else {
        log::debug!("[typewriter] no phrases to type");
        return Ok(());
    };

    let cursor = document.create_element("span").map_err(js_err)?;
    cursor.set_class_name(CLASS_CURSOR);
    cursor.set_text_content(Some(CURSOR_GLYPH));

    frame::start_timeout_loop(move || {
        let step = typewriter.tick();
        role.set_text_content(Some(&step.text));
        _ = role.append_child(&cursor);
        step.delay_ms
    });
    Ok(())
}
