/// Tuning constants for the page effects.
///
/// These keep the magic numbers of each effect in one place so the core logic
/// and the DOM wiring read the same values.

// Particle field
pub const PARTICLE_COUNT: usize = 140;
pub const PARTICLE_COUNT_MAX: usize = 2000;
pub const PARTICLE_RADIUS_MIN: f32 = 0.6;
pub const PARTICLE_RADIUS_MAX: f32 = 2.6;
pub const PARTICLE_VX_MAX: f32 = 0.3; // px per frame, symmetric
pub const PARTICLE_VY_MAX: f32 = 0.2;
pub const PARTICLE_ALPHA_MIN: f32 = 0.08;
pub const PARTICLE_ALPHA_MAX: f32 = 0.45;
pub const PARTICLE_WRAP_MARGIN: f32 = 10.0;
pub const PARTICLE_RGB: (u8, u8, u8) = (230, 138, 255); // purple

// Motion is specified per 60 Hz frame; longer gaps are clamped
pub const FRAME_SEC: f32 = 1.0 / 60.0;
pub const MAX_FRAMES_PER_STEP: f32 = 4.0;

// Intersection thresholds (fraction of element visible)
pub const REVEAL_THRESHOLD: f64 = 0.12;
pub const SKILLBAR_THRESHOLD: f64 = 0.2;
pub const SHOW_CLASS: &str = "show";

// Typewriter delays (milliseconds)
pub const TYPE_DELAY_MS: u32 = 70;
pub const WORD_HOLD_MS: u32 = 900;
pub const WORD_GAP_MS: u32 = 300;
pub const DEFAULT_WORDS: [&str; 5] = [
    "Computer Science",
    "Machine Learning",
    "Automation",
    "AI",
    "Problem Solver",
];

// Theme presets for the root custom properties
pub const DARK_BG: &str = "#05060a";
pub const DARK_MUTED: &str = "#9aa4b2";
pub const LIGHT_BG: &str = "#ffffff";
pub const LIGHT_MUTED: &str = "#556";

// Avatar tilt
pub const TILT_RANGE_DEG: f32 = 30.0; // pointer offset is mapped to [-15, 15]
pub const TILT_PERSPECTIVE_PX: u32 = 500;

// Showcase reveal delay after load
pub const SHOWCASE_DELAY_MS: i32 = 100;
