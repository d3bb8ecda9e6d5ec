use std::cell::Cell;

/// Latch that lets exactly one caller through.
#[derive(Debug, Default)]
pub struct OneShot {
    fired: Cell<bool>,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true the first time only.
    pub fn fire(&self) -> bool {
        !self.fired.replace(true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

/// What a click on the music toggle should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
}

impl ToggleAction {
    #[inline]
    pub fn for_paused(paused: bool) -> Self {
        if paused {
            ToggleAction::Play
        } else {
            ToggleAction::Pause
        }
    }
}

/// Classes the toggle button and its icon should carry for a playback state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconState {
    pub playing: bool,
    pub icon_add: &'static str,
    pub icon_remove: &'static str,
}

pub const ICON_MUSIC: &str = "fa-music";
pub const ICON_PAUSE: &str = "fa-pause";

impl IconState {
    pub fn for_paused(paused: bool) -> Self {
        if paused {
            IconState {
                playing: false,
                icon_add: ICON_MUSIC,
                icon_remove: ICON_PAUSE,
            }
        } else {
            IconState {
                playing: true,
                icon_add: ICON_PAUSE,
                icon_remove: ICON_MUSIC,
            }
        }
    }
}
