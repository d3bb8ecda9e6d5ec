#![cfg(target_arch = "wasm32")]
//! Client-side enhancements for the portfolio page.
//!
//! Each controller wires its own listeners against the document and shares
//! nothing with the others; a controller whose markup is missing does nothing.
use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod audio;
pub mod constants;
pub mod core;
pub mod dom;
pub mod effects;
pub mod events;
pub mod frame;
pub mod observer;

type Controller = fn(&web::Document) -> anyhow::Result<()>;

const CONTROLLERS: &[(&str, Controller)] = &[
    ("nav", events::nav::init),
    ("reveal", effects::reveal::init),
    ("anchors", events::scroll::wire_smooth_anchors),
    ("typewriter", effects::typewriter::init),
    ("tilt", events::pointer::wire_tilt_cards),
    ("particles", effects::particles::init),
    ("counters", effects::counter::init),
    ("back-to-top", events::scroll::wire_back_to_top),
    ("audio", audio::init),
];

/// Runs every controller; one failing leaves the rest untouched.
pub fn init_all(document: &web::Document) {
    for (name, init) in CONTROLLERS {
        match init(document) {
            Ok(()) => log::debug!("[{}] ready", name),
            Err(e) => log::error!("[{}] init error: {:?}", name, e),
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    log::info!("portfolio-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let doc = document.clone();
    dom::on_ready(&document, move || init_all(&doc))
        .map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}
