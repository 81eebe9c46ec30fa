//! Site settings
//!
//! Every tunable constant of the page lives here. Settings can be loaded
//! from a JSON file; fields left out keep their defaults.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Height of the fixed navbar in pixels.
pub const NAVBAR_OFFSET: f64 = 70.0;
/// Scroll distance after which the navbar gets its "scrolled" styling.
pub const SCROLLED_THRESHOLD: f64 = 100.0;
/// Distance below the top of the viewport used to probe the current section.
pub const ACTIVE_PROBE_OFFSET: f64 = 100.0;
/// Parallax speed used when an element does not configure one.
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;
/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Pixels the reveal trigger line sits above the bottom of the viewport.
pub const REVEAL_BOTTOM_MARGIN: f64 = 50.0;
/// Simulated network latency of a contact form send.
pub const SEND_LATENCY_MS: u64 = 1500;
/// How long a form result message stays visible.
pub const MESSAGE_TTL_MS: u64 = 5000;

/// Tunable settings for the portfolio page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub navbar_offset: f64,
    pub scrolled_threshold: f64,
    pub active_probe_offset: f64,
    pub default_parallax_speed: f64,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin: f64,
    pub send_latency_ms: u64,
    pub message_ttl_ms: u64,
    /// Where a real transport would post the form payload. Unused by the
    /// simulated transport.
    pub submission_endpoint: Option<String>,
    /// Extra filename -> URL entries merged over the built-in placeholders.
    pub placeholders: BTreeMap<String, String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            navbar_offset: NAVBAR_OFFSET,
            scrolled_threshold: SCROLLED_THRESHOLD,
            active_probe_offset: ACTIVE_PROBE_OFFSET,
            default_parallax_speed: DEFAULT_PARALLAX_SPEED,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_bottom_margin: REVEAL_BOTTOM_MARGIN,
            send_latency_ms: SEND_LATENCY_MS,
            message_ttl_ms: MESSAGE_TTL_MS,
            submission_endpoint: None,
            placeholders: BTreeMap::new(),
        }
    }
}

impl SiteSettings {
    /// Parse settings from a JSON document.
    pub fn from_json_str(json: &str) -> FolioResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded site settings");
        Self::from_json_str(&raw)
    }

    /// Reject values that would make the page misbehave.
    pub fn validate(&self) -> FolioResult<()> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(FolioError::Config(format!(
                "reveal_threshold must be within [0, 1], got {}",
                self.reveal_threshold
            )));
        }
        if !self.default_parallax_speed.is_finite() {
            return Err(FolioError::Config(
                "default_parallax_speed must be a finite number".to_string(),
            ));
        }
        let offsets = [
            ("navbar_offset", self.navbar_offset),
            ("scrolled_threshold", self.scrolled_threshold),
            ("active_probe_offset", self.active_probe_offset),
            ("reveal_bottom_margin", self.reveal_bottom_margin),
        ];
        for (name, value) in offsets {
            if !value.is_finite() || value < 0.0 {
                return Err(FolioError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn send_latency(&self) -> Duration {
        Duration::from_millis(self.send_latency_ms)
    }

    pub fn message_ttl(&self) -> Duration {
        Duration::from_millis(self.message_ttl_ms)
    }
}
