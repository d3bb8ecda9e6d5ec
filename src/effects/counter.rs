use crate::constants::{ATTR_COUNTER_TARGET, CLASS_COUNTED, SEL_COUNTER};
use crate::core::constants::COUNTER_THRESHOLD;
use crate::core::counter::{parse_target, CounterAnimation};
use crate::dom;
use crate::frame;
use crate::observer;
use web_sys as web;

/// Stat numbers count up from 0 the first time half of them is on screen.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let counters = dom::query_all(document, SEL_COUNTER)?;
    observer::observe_viewport(&counters, COUNTER_THRESHOLD, |el, observer| {
        let cl = el.class_list();
        if cl.contains(CLASS_COUNTED) {
            return;
        }
        _ = cl.add_1(CLASS_COUNTED);
        observer.unobserve(el);
        start_count(el.clone());
    })
}

fn start_count(el: web::Element) {
    let raw = el.get_attribute(ATTR_COUNTER_TARGET).unwrap_or_default();
    let Some(target) = parse_target(&raw) else {
        log::warn!("[counter] unreadable {} {:?}", ATTR_COUNTER_TARGET, raw);
        return;
    };
    let Some(start_ms) = web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
    else {
        el.set_text_content(Some(&target.to_string()));
        return;
    };

    let anim = CounterAnimation::new(target, start_ms);
    frame::start_loop(move |now_ms| {
        let sample = anim.sample(now_ms);
        el.set_text_content(Some(&sample.value.to_string()));
        !sample.done
    });
}
