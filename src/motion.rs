//! Track motion: how the viewport moves between positions.

use std::fmt;

/// CSS `cubic-bezier()` control points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier(pub f64, pub f64, pub f64, pub f64);

impl CubicBezier {
    /// easeInOutCubic-like curve used for page moves.
    pub const EASE_IN_OUT: Self = Self(0.645, 0.045, 0.355, 1.0);
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cubic-bezier({}, {}, {}, {})", self.0, self.1, self.2, self.3)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub easing: CubicBezier,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration_ms: 800,
            easing: CubicBezier::EASE_IN_OUT,
        }
    }
}

impl Transition {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }

    /// Value for the CSS `transition` property.
    pub fn to_css(&self) -> String {
        format!(
            "transform {}s {}",
            f64::from(self.duration_ms) / 1000.0,
            self.easing
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    Animated(Transition),
    /// Jump without animation, settled before returning.
    Instant,
}

/// CSS transform placing `position` in view. Expressed in viewport units so
/// the offset stays exact across resizes.
pub fn track_transform(position: usize) -> String {
    format!("translateY(-{}vh)", position * 100)
}

/// Receives track moves from the carousel.
pub trait Viewport {
    fn translate(&mut self, position: usize, motion: Motion);
}
