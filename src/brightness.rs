//! Global display brightness
//!
//! A single user controlled level shared by every segment. The fade ramp
//! never exceeds it, and it sets the global-off compare threshold of every
//! refresh period.

use crate::gamma::MAX_LEVEL;

/// Lowest level reachable with the brightness buttons
pub const MIN_BRIGHTNESS: u8 = 2;

/// Level used after power on
pub const DEFAULT_BRIGHTNESS: u8 = 120;

/// User controlled overall brightness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalBrightness {
    target: u8,
}

impl Default for GlobalBrightness {
    fn default() -> Self {
        Self::new(DEFAULT_BRIGHTNESS)
    }
}

impl GlobalBrightness {
    /// Create a new brightness, clamped to `MIN_BRIGHTNESS..=MAX_LEVEL`
    pub const fn new(target: u8) -> Self {
        Self {
            target: clamp(target),
        }
    }

    pub const fn target(self) -> u8 {
        self.target
    }

    /// Set the level, clamped to `MIN_BRIGHTNESS..=MAX_LEVEL`
    pub fn set(&mut self, target: u8) {
        self.target = clamp(target);
    }

    /// Step one level up
    ///
    /// Returns `false` if already at the brightest level.
    pub fn increase(&mut self) -> bool {
        if self.target >= MAX_LEVEL {
            return false;
        }
        self.target += 1;
        true
    }

    /// Step one level down
    ///
    /// Returns `false` if already at the dimmest level.
    pub fn decrease(&mut self) -> bool {
        if self.target <= MIN_BRIGHTNESS {
            return false;
        }
        self.target -= 1;
        true
    }
}

const fn clamp(target: u8) -> u8 {
    if target < MIN_BRIGHTNESS {
        MIN_BRIGHTNESS
    } else if target > MAX_LEVEL {
        MAX_LEVEL
    } else {
        target
    }
}
