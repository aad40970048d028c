//! Site configuration, embedded at compile time from `config/showcase.json`.

use serde::Deserialize;

use crate::error::{Result, ShowcaseError};
use crate::footer::FooterConfig;

const EMBEDDED: &str = include_str!("../config/showcase.json");

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ShowcaseConfig {
    pub carousel: CarouselConfig,
    pub mobile: MobileConfig,
    pub footer: FooterConfig,
}

/// Navigation tuning for the full carousel.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CarouselConfig {
    /// Slots within this distance of the current position stay loaded.
    pub window_radius: usize,
    pub transition_ms: u32,
    pub wheel_debounce_ms: u32,
    /// A touch gesture must move strictly more than this to navigate.
    pub touch_threshold_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            window_radius: 1,
            transition_ms: 800,
            wheel_debounce_ms: 50,
            touch_threshold_px: 50.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MobileConfig {
    /// Show a single page instead of the carousel on mobile devices.
    pub single_page: bool,
    /// Logical page shown in single-page mode.
    pub page: usize,
}

impl Default for MobileConfig {
    fn default() -> Self {
        Self {
            single_page: true,
            page: 2,
        }
    }
}

impl ShowcaseConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The configuration shipped with the site.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED)
    }

    pub fn validate(&self, page_count: usize) -> Result<()> {
        if self.carousel.transition_ms == 0 {
            return Err(ShowcaseError::InvalidConfig(
                "carousel.transitionMs must be positive".into(),
            ));
        }
        let threshold = self.carousel.touch_threshold_px;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ShowcaseError::InvalidConfig(format!(
                "carousel.touchThresholdPx must be a non-negative number, got {threshold}"
            )));
        }
        if self.mobile.page >= page_count {
            return Err(ShowcaseError::InvalidConfig(format!(
                "mobile.page {} is outside the {page_count} available pages",
                self.mobile.page
            )));
        }
        Ok(())
    }
}
