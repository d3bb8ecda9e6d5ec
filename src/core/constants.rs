// Timing and geometry tuning shared by the page controllers.

// Navigation
pub const SECTION_TRIGGER_MARGIN_PX: f64 = 200.0; // section counts as current this far above its top
pub const HEADER_OFFSET_PX: f64 = 80.0; // fixed header height kept clear when jumping to anchors

// Back to top
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

// Typewriter (milliseconds)
pub const TYPE_DELAY_MS: i32 = 100;
pub const DELETE_DELAY_MS: i32 = 50;
pub const HOLD_FULL_MS: i32 = 2000;
pub const HOLD_EMPTY_MS: i32 = 500;
pub const TYPING_DELIMITER: char = '|';

// Tilt
pub const TILT_MAX_DEG: f32 = 10.0;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const TILT_HOVER_SCALE: f32 = 1.05;
pub const TILT_HOVER_TRANSITION: &str = "transform 0.1s ease";
pub const TILT_REST_TRANSITION: &str = "transform 0.5s ease";

// Particles
pub const PARTICLE_COUNT: usize = 20;
pub const PARTICLE_SIZE_MIN_PX: f64 = 5.0;
pub const PARTICLE_SIZE_SPAN_PX: f64 = 20.0;
pub const PARTICLE_DURATION_MIN_S: f64 = 10.0;
pub const PARTICLE_DURATION_SPAN_S: f64 = 10.0;
pub const PARTICLE_DELAY_MAX_S: f64 = 5.0;

// Counters
pub const COUNTER_DURATION_MS: f64 = 2000.0;

// Intersection thresholds (fraction of the element visible)
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const COUNTER_THRESHOLD: f64 = 0.5;

// Audio
pub const MUSIC_VOLUME: f64 = 0.3;
