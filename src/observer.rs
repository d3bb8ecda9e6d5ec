use crate::dom::js_err;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Watches `elements` against the viewport and calls `on_enter` for each one
/// that crosses `threshold`. The handler receives the observer so it can
/// unobserve the element.
pub fn observe_viewport(
    elements: &[web::Element],
    threshold: f64,
    mut on_enter: impl FnMut(&web::Element, &web::IntersectionObserver) + 'static,
) -> anyhow::Result<()> {
    if elements.is_empty() {
        return Ok(());
    }
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_enter(&entry.target(), &observer);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin("0px");
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(js_err)?;
    callback.forget();

    for el in elements {
        observer.observe(el);
    }
    Ok(())
}
