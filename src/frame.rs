use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type TimerSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drives `step` once per animation frame with the frame timestamp (ms) until
/// it returns `false`. The closure releases itself after the last frame.
pub fn start_loop(mut step: impl FnMut(f64) -> bool + 'static) {
    let tick: FrameSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        if !step(now_ms) {
            _ = tick_clone.borrow_mut().take();
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

fn request_frame(tick: &FrameSlot) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}

/// Runs `step` on the next timer turn, then again after however many
/// milliseconds it returns, forever. Each run schedules the next with
/// `setTimeout`, so the cadence can change from tick to tick.
pub fn start_timeout_loop(mut step: impl FnMut() -> i32 + 'static) {
    let tick: TimerSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let delay_ms = step();
        schedule_timeout(&tick_clone, delay_ms);
    }) as Box<dyn FnMut()>));
    if !schedule_timeout(&tick, 0) {
        log::error!("[frame] timeout loop could not start");
    }
}

fn schedule_timeout(tick: &TimerSlot, delay_ms: i32) -> bool {
    let Some(w) = web::window() else {
        return false;
    };
    let slot = tick.borrow();
    let Some(cb) = slot.as_ref() else {
        return false;
    };
    match w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), delay_ms)
    {
        Ok(_) => true,
        Err(e) => {
            log::error!("[frame] setTimeout failed: {:?}", e);
            false
        }
    }
}
