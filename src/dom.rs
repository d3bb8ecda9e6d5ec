use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Converts a thrown JS value into an `anyhow` error.
#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn query(document: &web::Document, selector: &str) -> anyhow::Result<Option<web::Element>> {
    document.query_selector(selector).map_err(js_err)
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> anyhow::Result<Vec<web::Element>> {
    let list = document.query_selector_all(selector).map_err(js_err)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect())
}

pub fn html_element(el: &web::Element) -> Option<web::HtmlElement> {
    el.clone().dyn_into::<web::HtmlElement>().ok()
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Attaches a page-lifetime listener; the closure is leaked on purpose.
pub fn listen<E, F>(target: &web::EventTarget, event: &str, handler: F) -> anyhow::Result<()>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

#[inline]
pub fn add_click_listener(
    el: &web::Element,
    handler: impl FnMut(web::MouseEvent) + 'static,
) -> anyhow::Result<()> {
    listen(el, "click", handler)
}

pub fn on_window_scroll(mut handler: impl FnMut(f64) + 'static) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    listen(&window, "scroll", move |_: web::Event| handler(scroll_y()))
}

/// Runs `f` once the DOM is parsed: immediately if it already is, otherwise on
/// `DOMContentLoaded`.
pub fn on_ready(document: &web::Document, f: impl FnOnce() + 'static) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let mut f = Some(f);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(f) = f.take() {
            f();
        }
    }) as Box<dyn FnMut()>);
    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            closure.as_ref().unchecked_ref(),
            &opts,
        )
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}
