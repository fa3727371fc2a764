use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Carousel
pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;
pub const CAROUSEL_WIDE_WINDOW: usize = 3;

// Contact form
pub const SUBMIT_DELAY_MS: u32 = 1_500;
pub const TOAST_LIFETIME_MS: u32 = 4_000;
pub const INQUIRY_SUCCESS_MESSAGE: &str =
    "Thank you for your inquiry. We will contact you within 24 hours.";

// Counters animate linearly in a fixed number of steps
pub const COUNTER_DURATION_MS: u32 = 2_000;
pub const COUNTER_STEPS: u32 = 60;

// Navbar turns solid after this many pixels of scroll
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
pub const HERO_PARALLAX_FACTOR: f64 = 0.3;

pub const PLACEHOLDER_AVATAR_BASE: &str = "https://ui-avatars.com/api/";

pub const FIRM_NAME: &str = "Adinkra & Associates";
pub const FIRM_EMAIL_DOMAIN: &str = "adinkralaw.com";
pub const FIRM_PHONE_DISPLAY: &str = "+234 800 ADINKRA";
pub const FIRM_PHONE_TEL: &str = "+2348001234567";
