//! Twelve-hour time of day as shown by the clock face

/// Minutes per adjustment step
pub const ADJUST_STEP_MINUTES: u8 = 5;

const HOURS_PER_FACE: u8 = 12;
const MINUTES_PER_HOUR: u8 = 60;

/// Time of day on a twelve hour face
///
/// `hours` is in `0..12` where 0 reads "twelve", `minutes` is in `0..60`.
/// Both are checked on construction so every value is displayable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    hours: u8,
    minutes: u8,
}

impl TimeOfDay {
    /// Time reported by the RTC after it lost its backup supply
    pub const MIDNIGHT: Self = Self {
        hours: 0,
        minutes: 0,
    };

    pub const fn new(hours: u8, minutes: u8) -> Option<Self> {
        if hours >= HOURS_PER_FACE || minutes >= MINUTES_PER_HOUR {
            return None;
        }
        Some(Self { hours, minutes })
    }

    /// Create from a 24 hour reading, folding it onto the twelve hour face
    pub const fn from_clock(hours: u8, minutes: u8) -> Option<Self> {
        if hours >= 2 * HOURS_PER_FACE {
            return None;
        }
        Self::new(hours % HOURS_PER_FACE, minutes)
    }

    pub const fn hours(self) -> u8 {
        self.hours
    }

    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    /// Hour that follows this one on the face
    pub const fn next_hour(self) -> u8 {
        (self.hours + 1) % HOURS_PER_FACE
    }

    /// Step forward to the next five minute mark
    ///
    /// Minutes are rounded down first, so `12:34` becomes `12:35` and `11:58`
    /// wraps to `12:00`.
    #[must_use]
    pub const fn advance(self) -> Self {
        let minutes = self.minutes - self.minutes % ADJUST_STEP_MINUTES + ADJUST_STEP_MINUTES;
        if minutes >= MINUTES_PER_HOUR {
            return Self {
                hours: self.next_hour(),
                minutes: 0,
            };
        }
        Self {
            hours: self.hours,
            minutes,
        }
    }

    /// Step back to the previous five minute mark
    ///
    /// Minutes are rounded down first, so both `12:34` and `12:30` become
    /// `12:25`. `12:00` wraps to `11:55`.
    #[must_use]
    pub const fn retreat(self) -> Self {
        let minutes = self.minutes - self.minutes % ADJUST_STEP_MINUTES;
        if minutes != 0 {
            return Self {
                hours: self.hours,
                minutes: minutes - ADJUST_STEP_MINUTES,
            };
        }
        let hours = if self.hours == 0 {
            HOURS_PER_FACE - 1
        } else {
            self.hours - 1
        };
        Self {
            hours,
            minutes: MINUTES_PER_HOUR - ADJUST_STEP_MINUTES,
        }
    }
}
