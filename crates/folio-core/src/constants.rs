use std::time::Duration;

// Shared page tuning constants used by the web frontend.

// Navbar
pub const NAVBAR_COMPACT_SCROLL_Y: f64 = 100.0; // strictly above this the navbar is compact
pub const ACTIVE_CLASS: &str = "active";

// Particles
pub const PARTICLE_MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const PARTICLE_COUNT_MOBILE: usize = 30;
pub const PARTICLE_COUNT_DESKTOP: usize = 50;
pub const PARTICLE_CLASS: &str = "particle";

// Intersection thresholds (fraction of the element that must be visible)
pub const SKILL_BAR_THRESHOLD: f64 = 0.5;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_CLASS: &str = "animated";

// Typewriter timing
pub const TYPE_DELAY: Duration = Duration::from_millis(50); // per typed character
pub const DELETE_DELAY: Duration = Duration::from_millis(30); // per deleted character
pub const PAUSE_AFTER_TYPE: Duration = Duration::from_millis(2000);
pub const PAUSE_AFTER_DELETE: Duration = Duration::from_millis(500);
pub const TYPEWRITER_START_DELAY: Duration = Duration::from_millis(1000);

// Contact form
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const STATUS_CLEAR_DELAY: Duration = Duration::from_millis(5000);
pub const ERROR_COLOR: &str = "#ef4444";
pub const SUCCESS_COLOR: &str = "#10b981";
pub const SUCCESS_BACKGROUND: &str = "rgba(16, 185, 129, 0.1)";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I will get back to you soon.";

// Footer
pub const COPYRIGHT_PLACEHOLDER_YEAR: &str = "2023";
