use log::Level;

pub const CONSENT_STORAGE_KEY: &str = "h2h_cookie_consent";
pub const CONSENT_SCHEMA_VERSION: u32 = 1;

pub const PREFERENCES_STORAGE_KEY: &str = "h2h_accessibility";
pub const PREFERENCES_SCHEMA_VERSION: u32 = 1;

// Key name is shared with language choices saved by earlier site releases.
pub const LANGUAGE_STORAGE_KEY: &str = "i18nextLng";

pub const BRAND: &str = "Heart 2 Heart Somatics";
pub const BOOKING_URL: &str = "https://calendly.com/heart2heartsomatics/";

// Overridable at build time, e.g. `H2H_CONTACT_EMAIL=... trunk build`
pub fn contact_email() -> &'static str {
    option_env!("H2H_CONTACT_EMAIL").unwrap_or("info@heart2heartsomatics.com")
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
