use log::Level;

/// Scroll offset (px) at which the header may collapse or expand.
pub const SCROLL_THRESHOLD: u32 = 100;

/// Scroll offset (px) past which the header gets its background tint.
pub const TINT_OFFSET: u32 = 20;

pub const LOGO_MAX_HEIGHT: f64 = 600.0;
pub const LOGO_MIN_HEIGHT: f64 = 300.0;
pub const LOGO_SHRINK_RATE: f64 = 0.15;

pub const SPRING_STIFFNESS: f64 = 100.0;
pub const SPRING_DAMPING: f64 = 30.0;
pub const SPRING_MASS: f64 = 1.0;

// ~60fps
pub const FRAME_INTERVAL_MS: u32 = 16;

pub const LOADING_DELAY_MS: u32 = 500;

/// Fraction of total scroll progress over which the hero fades out.
pub const HERO_FADE_END: f64 = 0.25;
/// Progress at which the hero parallax reaches its full travel.
pub const HERO_PARALLAX_END: f64 = 0.5;
pub const HERO_IMAGE_TRAVEL: f64 = 150.0;
pub const HERO_TEXT_TRAVEL: f64 = -50.0;

pub const FIRM_NAME: &str = "Amara & Partners";
pub const FIRM_LEGAL_NAME: &str = "Amara & Partners LLC";
pub const FIRM_TAGLINE: &str = "A modern legal consultancy redefining excellence in Abu Dhabi's legal landscape";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Development builds log nav transitions
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
