//! Mobile detection and the startup presentation choice.

use crate::config::MobileConfig;

const MOBILE_AGENTS: [&str; 9] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
    "mobile",
];

/// Viewports at or below this width count as small screens.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;

/// What the browser reports about the current environment.
#[derive(Clone, Debug, Default)]
pub struct DeviceInfo {
    pub user_agent: String,
    pub inner_width: f64,
    pub has_touch: bool,
}

impl DeviceInfo {
    /// Mobile if the user agent says so, or a small screen with touch.
    pub fn is_mobile(&self) -> bool {
        let agent = self.user_agent.to_ascii_lowercase();
        let mobile_agent = MOBILE_AGENTS.iter().any(|pat| agent.contains(pat));
        mobile_agent || (self.inner_width <= MOBILE_MAX_WIDTH && self.has_touch)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// One page, no navigation.
    Single { page: usize },
    Carousel,
}

impl Presentation {
    pub fn choose(is_mobile: bool, mobile: &MobileConfig) -> Self {
        if is_mobile && mobile.single_page {
            Self::Single { page: mobile.page }
        } else {
            Self::Carousel
        }
    }
}
