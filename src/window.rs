//! Active-window policy: which slots stay loaded around the current position.

use std::ops::RangeInclusive;

/// Keeps at most `2 * radius + 1` slots live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveWindow {
    radius: usize,
}

impl Default for ActiveWindow {
    fn default() -> Self {
        Self { radius: 1 }
    }
}

impl ActiveWindow {
    pub fn new(radius: usize) -> Self {
        Self { radius }
    }

    pub fn capacity(&self) -> usize {
        2 * self.radius + 1
    }

    pub fn contains(&self, center: usize, position: usize) -> bool {
        center.abs_diff(position) <= self.radius
    }

    /// Positions inside the window for a track of `len` slots. Empty when
    /// `len` is zero.
    pub fn range(&self, center: usize, len: usize) -> RangeInclusive<usize> {
        let Some(last) = len.checked_sub(1) else {
            return RangeInclusive::new(1, 0);
        };
        let lo = center.saturating_sub(self.radius);
        let hi = center.saturating_add(self.radius).min(last);
        lo..=hi
    }
}
