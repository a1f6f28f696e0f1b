//! Construction-time configuration for a [`SlideshowController`](crate::SlideshowController)

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{CarouselError, Result};

/// Carousel behaviour switches. Every field has a default, so an empty TOML
/// document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Start the autoplay countdown as soon as there is more than one slide
    pub auto_play: bool,
    /// Time per slide before autoplay advances, in milliseconds
    pub interval_ms: u64,
    /// Wrap past the first/last slide instead of stopping there
    pub infinite: bool,
    /// Suspend the countdown while the pointer is over the carousel
    pub pause_on_hover: bool,
    /// Honor swipe gestures
    pub touch_enabled: bool,
    /// Minimum horizontal distance for a swipe to navigate
    pub swipe_threshold: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_play: false,
            interval_ms: DEFAULT_INTERVAL_MS,
            infinite: true,
            pause_on_hover: true,
            touch_enabled: true,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn with_auto_play(mut self, auto_play: bool) -> Self {
        self.auto_play = auto_play;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval_ms = interval.as_millis().try_into().unwrap_or(u64::MAX);
        self
    }

    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }

    pub fn with_touch_enabled(mut self, touch_enabled: bool) -> Self {
        self.touch_enabled = touch_enabled;
        self
    }

    pub fn with_swipe_threshold(mut self, swipe_threshold: f32) -> Self {
        self.swipe_threshold = swipe_threshold;
        self
    }

    /// Reject combinations the controller cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.auto_play && self.interval_ms == 0 {
            return Err(CarouselError::InvalidConfig(
                "autoplay interval must be greater than zero".to_string(),
            ));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(CarouselError::InvalidConfig(format!(
                "swipe threshold must be a non-negative number, got {}",
                self.swipe_threshold
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: CarouselConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| CarouselError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}
