//! Main loop side of the clock
//!
//! Polls the time source, handles the time adjustment buttons and forwards
//! brightness presses. Nothing here touches the fade state directly; every
//! change is posted as a [`DisplayIntent`] and applied on the next refresh.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::TimeSource;
use crate::channel::TrySendError;
use crate::intent_processor::{DisplayIntent, IntentSender};
use crate::time::TimeOfDay;

/// Default time between time source reads.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1_000);

/// Configuration for the clock
#[derive(Debug, Clone, Copy)]
pub struct ClockConfig {
    /// Time between time source reads
    pub poll_interval: Duration,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Word clock main loop state
pub struct WordClock<'a, T: TimeSource, const INTENT_CHANNEL_SIZE: usize> {
    source: T,
    intents: IntentSender<'a, INTENT_CHANNEL_SIZE>,
    poll_interval: Duration,
    next_poll: Option<Instant>,
    /// Last time handed to the display
    shown: Option<TimeOfDay>,
}

impl<'a, T: TimeSource, const INTENT_CHANNEL_SIZE: usize> WordClock<'a, T, INTENT_CHANNEL_SIZE> {
    pub fn new(
        source: T,
        intents: IntentSender<'a, INTENT_CHANNEL_SIZE>,
        config: &ClockConfig,
    ) -> Self {
        Self {
            source,
            intents,
            poll_interval: config.poll_interval,
            next_poll: None,
            shown: None,
        }
    }

    /// Read the time source if the poll interval elapsed
    ///
    /// Starts a cross-fade when the time differs from the one on display.
    /// A failed read leaves the display alone. Returns the time that was
    /// handed to the display, if any.
    pub fn poll(&mut self, now: Instant) -> Option<TimeOfDay> {
        if self.next_poll.is_some_and(|deadline| now < deadline) {
            return None;
        }
        self.next_poll = Some(now + self.poll_interval);

        let Ok(time) = self.source.read_time() else {
            #[cfg(feature = "esp32-log")]
            println!("[WordClock.poll] time read failed, keeping display");
            return None;
        };
        if self.shown == Some(time) {
            return None;
        }

        // Keep the old time on a full queue so the next poll retries
        self.intents.try_send(DisplayIntent::ShowTime(time)).ok()?;
        #[cfg(feature = "esp32-log")]
        println!("[WordClock.poll] showing {:?}", time);
        self.shown = Some(time);
        Some(time)
    }

    /// Step the time forward to the next five minute mark
    ///
    /// The new time is written to the time source and shown at once. On a
    /// write error the display is left alone.
    pub fn advance(&mut self) -> Result<TimeOfDay, T::Error> {
        let time = self.current_time().advance();
        self.adjust(time)
    }

    /// Step the time back to the previous five minute mark
    pub fn retreat(&mut self) -> Result<TimeOfDay, T::Error> {
        let time = self.current_time().retreat();
        self.adjust(time)
    }

    /// Request one brightness step up
    ///
    /// Returns `Err` if the press was dropped on a full queue.
    pub fn brightness_up(&self) -> Result<(), TrySendError<DisplayIntent>> {
        self.intents.try_send(DisplayIntent::BrightnessUp)
    }

    /// Request one brightness step down
    pub fn brightness_down(&self) -> Result<(), TrySendError<DisplayIntent>> {
        self.intents.try_send(DisplayIntent::BrightnessDown)
    }

    /// Time currently handed to the display
    pub const fn shown(&self) -> Option<TimeOfDay> {
        self.shown
    }

    /// Get a reference to the time source.
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Get a mutable reference to the time source.
    pub fn source_mut(&mut self) -> &mut T {
        &mut self.source
    }

    /// Base time for an adjustment
    ///
    /// Prefers the time on display, then a fresh read, then midnight.
    fn current_time(&mut self) -> TimeOfDay {
        match self.shown {
            Some(time) => time,
            None => self.source.read_time().unwrap_or(TimeOfDay::MIDNIGHT),
        }
    }

    fn adjust(&mut self, time: TimeOfDay) -> Result<TimeOfDay, T::Error> {
        self.source.set_time(time)?;
        #[cfg(feature = "esp32-log")]
        println!("[WordClock.adjust] time set to {:?}", time);

        // A jump supersedes anything queued before it, so the oldest request may go
        let _ = self.intents.send_evicting(DisplayIntent::JumpToTime(time));
        self.shown = Some(time);
        Ok(time)
    }
}
