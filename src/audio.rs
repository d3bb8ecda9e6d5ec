use crate::constants::{CLASS_PLAYING, ID_MUSIC, ID_MUSIC_TOGGLE, SEL_MUSIC_ICON};
use crate::core::constants::MUSIC_VOLUME;
use crate::core::playback::{IconState, OneShot, ToggleAction};
use crate::dom::{self, js_err};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const RETRY_EVENTS: [&str; 2] = ["click", "keydown"];

/// Background music element and the button that controls it.
struct MusicPlayer {
    audio: web::HtmlAudioElement,
    toggle: web::Element,
    icon: Option<web::Element>,
}

impl MusicPlayer {
    fn sync_icon(&self) {
        let state = IconState::for_paused(self.audio.paused());
        let cl = self.toggle.class_list();
        _ = if state.playing {
            cl.add_1(CLASS_PLAYING)
        } else {
            cl.remove_1(CLASS_PLAYING)
        };
        if let Some(icon) = &self.icon {
            let cl = icon.class_list();
            _ = cl.remove_1(state.icon_remove);
            _ = cl.add_1(state.icon_add);
        }
    }
}

async fn play(audio: &web::HtmlAudioElement) -> anyhow::Result<()> {
    let promise = audio.play().map_err(js_err)?;
    JsFuture::from(promise).await.map_err(js_err)?;
    Ok(())
}

/// Page-wide click/keydown subscription that runs `on_retry` once, on the
/// first interaction after the browser blocked autoplay, then detaches.
pub struct AutoplayRetry {
    document: web::Document,
    gate: OneShot,
    callback: RefCell<Option<Closure<dyn FnMut(web::Event)>>>,
}

impl AutoplayRetry {
    pub fn attach(
        document: &web::Document,
        on_retry: impl Fn() + 'static,
    ) -> anyhow::Result<Rc<Self>> {
        let retry = Rc::new(AutoplayRetry {
            document: document.clone(),
            gate: OneShot::new(),
            callback: RefCell::new(None),
        });
        let retry_cb = retry.clone();
        let closure = Closure::wrap(Box::new(move |_: web::Event| {
            if !retry_cb.gate.fire() {
                return;
            }
            retry_cb.detach();
            on_retry();
        }) as Box<dyn FnMut(web::Event)>);
        for event in RETRY_EVENTS {
            document
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
                .map_err(js_err)?;
        }
        *retry.callback.borrow_mut() = Some(closure);
        Ok(retry)
    }

    // The closure stays owned by `callback`; removing it from inside its own
    // call must not drop it.
    fn detach(&self) {
        if let Some(cb) = self.callback.borrow().as_ref() {
            for event in RETRY_EVENTS {
                _ = self
                    .document
                    .remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
            }
        }
    }

    /// No further retries, whether or not one already happened.
    pub fn disarm(&self) {
        self.gate.fire();
        self.detach();
    }

    pub fn is_armed(&self) -> bool {
        !self.gate.has_fired()
    }
}

fn try_autoplay(player: Rc<MusicPlayer>, on_started: impl FnOnce() + 'static) {
    if !player.audio.paused() {
        return;
    }
    spawn_local(async move {
        match play(&player.audio).await {
            Ok(()) => {
                log::info!("[audio] music started via autoplay/interaction");
                on_started();
            }
            Err(e) => log::info!("[audio] autoplay prevented, waiting for user interaction: {e}"),
        }
        player.sync_icon();
    });
}

fn wire_toggle(player: Rc<MusicPlayer>, retry: Rc<AutoplayRetry>) -> anyhow::Result<()> {
    let toggle = player.toggle.clone();
    dom::add_click_listener(&toggle, move |ev| {
        // keep the page-wide retry listener from seeing this click
        ev.stop_propagation();
        retry.disarm();
        match ToggleAction::for_paused(player.audio.paused()) {
            ToggleAction::Play => {
                let player = player.clone();
                spawn_local(async move {
                    match play(&player.audio).await {
                        Ok(()) => player.sync_icon(),
                        Err(e) => log::error!("[audio] playback failed: {e}"),
                    }
                });
            }
            ToggleAction::Pause => {
                _ = player.audio.pause();
                player.sync_icon();
            }
        }
    })
}

/// Background music: autoplay when allowed, otherwise on first interaction,
/// plus a play/pause toggle button.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let (Some(audio), Some(toggle)) = (
        document.get_element_by_id(ID_MUSIC),
        document.get_element_by_id(ID_MUSIC_TOGGLE),
    ) else {
        log::debug!("[audio] no #{} / #{}", ID_MUSIC, ID_MUSIC_TOGGLE);
        return Ok(());
    };
    let audio = audio
        .dyn_into::<web::HtmlAudioElement>()
        .map_err(|_| anyhow::anyhow!("#{} is not an <audio> element", ID_MUSIC))?;
    let icon = toggle.query_selector(SEL_MUSIC_ICON).map_err(js_err)?;
    audio.set_volume(MUSIC_VOLUME);

    let player = Rc::new(MusicPlayer {
        audio,
        toggle,
        icon,
    });
    // the interaction retry has already detached itself by the time it plays
    let retry = {
        let player = player.clone();
        AutoplayRetry::attach(document, move || try_autoplay(player.clone(), || {}))?
    };
    {
        let retry = retry.clone();
        try_autoplay(player.clone(), move || retry.disarm());
    }
    wire_toggle(player, retry)
}
