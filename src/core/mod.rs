pub mod constants;
pub mod counter;
pub mod nav;
pub mod particles;
pub mod playback;
pub mod scroll;
pub mod tilt;
pub mod typewriter;
