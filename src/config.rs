use chrono::{DateTime, TimeZone, Utc};

#[cfg(debug_assertions)]
pub fn get_asset_base_url() -> &'static str {
    "http://localhost:8080/assets"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base_url() -> &'static str {
    "/assets"
}

pub fn asset_url(file: &str) -> String {
    format!("{}/{}", get_asset_base_url(), file)
}

pub const THEME_STORAGE_KEY: &str = "httcoin-theme";
pub const LANGUAGE_STORAGE_KEY: &str = "httcoin-lang";
pub const COOKIE_STORAGE_KEY: &str = "httcoin-cookie-consent";

pub const CONTACT_RECIPIENTS: &[&str] = &["support@httcoin.com", "Hotelcoinglobal@gmail.com"];

/// Site-wide knobs. Components read these through [`SiteConfig::default`]
/// instead of scattering literals.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub gallery_window_size: usize,
    pub gallery_interval_ms: u32,
    pub rotator_interval_ms: u32,
    pub scroll_duration_ms: f64,
    pub cookie_banner_delay_ms: u32,
    pub countdown_tick_ms: u32,
    pub destinations_page_size: usize,
    pub destinations_page_step: usize,
    pub launch_at: DateTime<Utc>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            gallery_window_size: 5,
            gallery_interval_ms: 3500,
            rotator_interval_ms: 6000,
            scroll_duration_ms: 500.0,
            cookie_banner_delay_ms: 1200,
            countdown_tick_ms: 1000,
            destinations_page_size: 18,
            destinations_page_step: 12,
            launch_at: Utc
                .with_ymd_and_hms(2025, 12, 1, 0, 0, 0)
                .single()
                .unwrap_or_default(),
        }
    }
}
