//! Runtime configuration.
//!
//! Every option is a CLI flag with an `OVERLAY_*` environment fallback and a
//! default that matches the stock backend and a 1080p display.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use clap::Parser;
use layout::geometry::Resolution;

use crate::net::HttpTimeouts;
use crate::net::backend::DEFAULT_BACKEND_URL;
use crate::net::items::{DEFAULT_DDRAGON_LOCALE, DEFAULT_DDRAGON_VERSION, item_data_url};
use crate::services::PollIntervals;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid backend URL `{0}`: expected http:// or https://")]
    InvalidBackendUrl(String),
    #[error("{name} must be greater than zero")]
    ZeroInterval { name: &'static str },
    #[error("screen resolution must be non-zero")]
    ZeroResolution,
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "lol-overlay", about = "Headless core of the game overlay")]
pub struct OverlayConfig {
    /// Base URL of the local game-state backend.
    #[arg(long, env = "OVERLAY_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    #[arg(long, env = "OVERLAY_PICK_INTERVAL_MS", default_value_t = 1000)]
    pub pick_interval_ms: u64,

    #[arg(long, env = "OVERLAY_AUGMENT_INTERVAL_MS", default_value_t = 500)]
    pub augment_interval_ms: u64,

    #[arg(long, env = "OVERLAY_BUILD_INTERVAL_MS", default_value_t = 1000)]
    pub build_interval_ms: u64,

    #[arg(long, env = "OVERLAY_SCREEN_WIDTH", default_value_t = 1920)]
    pub screen_width: u32,

    #[arg(long, env = "OVERLAY_SCREEN_HEIGHT", default_value_t = 1080)]
    pub screen_height: u32,

    /// Data Dragon release used for item metadata and icons.
    #[arg(long, env = "OVERLAY_DDRAGON_VERSION", default_value = DEFAULT_DDRAGON_VERSION)]
    pub ddragon_version: String,

    #[arg(long, env = "OVERLAY_DDRAGON_LOCALE", default_value = DEFAULT_DDRAGON_LOCALE)]
    pub ddragon_locale: String,

    #[arg(long, env = "OVERLAY_REQUEST_TIMEOUT_MS", default_value_t = 2000)]
    pub request_timeout_ms: u64,

    #[arg(long, env = "OVERLAY_CONNECT_TIMEOUT_MS", default_value_t = 500)]
    pub connect_timeout_ms: u64,

    /// Delay before asking the host for click-through mode.
    #[arg(long, env = "OVERLAY_CLICK_THROUGH_DELAY_MS", default_value_t = 1000)]
    pub click_through_delay_ms: u64,
}

impl OverlayConfig {
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a non-HTTP backend URL, a zero poll
    /// interval or timeout, or a zero screen dimension.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.backend_url.trim();
        let has_host = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(ConfigError::InvalidBackendUrl(self.backend_url.clone()));
        }

        let intervals = [
            ("pick interval", self.pick_interval_ms),
            ("augment interval", self.augment_interval_ms),
            ("build interval", self.build_interval_ms),
            ("request timeout", self.request_timeout_ms),
            ("connect timeout", self.connect_timeout_ms),
        ];
        if let Some((name, _)) = intervals.iter().find(|(_, ms)| *ms == 0) {
            return Err(ConfigError::ZeroInterval { name: *name });
        }

        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::ZeroResolution);
        }
        Ok(())
    }

    #[must_use]
    pub fn screen(&self) -> Resolution {
        Resolution::new(self.screen_width, self.screen_height)
    }

    #[must_use]
    pub fn poll_intervals(&self) -> PollIntervals {
        PollIntervals {
            pick: Duration::from_millis(self.pick_interval_ms),
            augment: Duration::from_millis(self.augment_interval_ms),
            build: Duration::from_millis(self.build_interval_ms),
        }
    }

    #[must_use]
    pub fn timeouts(&self) -> HttpTimeouts {
        HttpTimeouts {
            request: Duration::from_millis(self.request_timeout_ms),
            connect: Duration::from_millis(self.connect_timeout_ms),
        }
    }

    #[must_use]
    pub fn click_through_delay(&self) -> Duration {
        Duration::from_millis(self.click_through_delay_ms)
    }

    /// Where the item dataset is downloaded from.
    #[must_use]
    pub fn item_data_url(&self) -> String {
        item_data_url(&self.ddragon_version, &self.ddragon_locale)
    }
}
