/// Markup hooks and class names the controllers read and write.
///
/// The page's HTML/CSS owns these names; keeping them here keeps string
/// literals out of the controllers.
// Navigation
pub const SEL_HAMBURGER: &str = ".hamburger";
pub const SEL_NAV_MENU: &str = ".nav-menu";
pub const SEL_NAV_LINK: &str = ".nav-link";
pub const SEL_SECTION: &str = "section";

// Reveal
pub const SEL_FADE_IN: &str = ".fade-in-up";

// Smooth scroll
pub const SEL_IN_PAGE_ANCHOR: &str = "a[href^=\"#\"]";

// Typewriter
pub const SEL_HERO_ROLE: &str = ".hero-role";
pub const ATTR_TYPING_TEXT: &str = "data-typing-text";

// Tilt
pub const SEL_TILT_CARDS: &str = ".skill-card, .project-card, .certification-card";

// Particles
pub const ID_HERO: &str = "hero";

// Counters
pub const SEL_COUNTER: &str = ".stat-number";
pub const ATTR_COUNTER_TARGET: &str = "data-target";

// Back to top
pub const SEL_BACK_TO_TOP: &str = ".back-to-top";

// Audio
pub const ID_MUSIC: &str = "bg-music";
pub const ID_MUSIC_TOGGLE: &str = "music-toggle";
pub const SEL_MUSIC_ICON: &str = "i";

// Classes
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_COUNTED: &str = "counted";
pub const CLASS_PLAYING: &str = "playing";
pub const CLASS_CURSOR: &str = "cursor";
pub const CLASS_PARTICLES: &str = "particles-container";
pub const CLASS_PARTICLE: &str = "particle";

pub const CURSOR_GLYPH: &str = "|";
