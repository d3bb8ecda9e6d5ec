pub mod counter;
pub mod particles;
pub mod reveal;
pub mod typewriter;
