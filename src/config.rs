//! Application-level configuration constants.

// Title ticker
pub const SITE_NAME: &str = "Dandung";
pub const SPINNER_GLYPHS: [char; 4] = ['/', '-', '\\', '|'];
pub const TITLE_TICKS_PER_SEC: f64 = 2.0;
pub const TITLE_TICK_INTERVAL_MS: f64 = 1000.0 / TITLE_TICKS_PER_SEC;

// Reveal counter
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Locale persistence
pub const LOCALE_STORAGE_KEY: &str = "locale";

// Social links shown in the sidebar and footer
pub const GITHUB_URL: &str = "https://github.com/irvandandung";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/irvandandung/";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/irvandandung/";
pub const PROFILE_IMAGE: &str = "/Dandung-removebg-preview.png";
