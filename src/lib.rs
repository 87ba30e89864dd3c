#![no_std]

pub mod brightness;
pub mod channel;
pub mod clock;
pub mod frame_scheduler;
pub mod gamma;
pub mod intent_processor;
pub mod phrase;
pub mod segment;
pub mod time;
pub mod transition;

pub use brightness::GlobalBrightness;
pub use clock::{ClockConfig, WordClock};
pub use frame_scheduler::{CompareEvent, DisplayConfig, FrameScheduler, PeriodPlan, RefreshResult};
pub use gamma::BrightnessCurve;
pub use intent_processor::{
    DisplayIntent, IntentChannel, IntentEffects, IntentProcessor, IntentReceiver, IntentSender,
};
pub use phrase::compose;
pub use segment::{InvalidSegment, Segment, SegmentSet};
pub use time::TimeOfDay;
pub use transition::{FadeSession, FadeState, TransitionEngine, TransitionStart};

pub use embassy_time::{Duration, Instant};

/// Abstract frame output
///
/// Implement this trait to drive the shift registers on a given platform.
/// Called from the refresh and compare interrupts, so it must not block.
pub trait FrameSink {
    /// Latch a frame onto the outputs
    fn emit_frame(&mut self, frame: SegmentSet);
}

/// Abstract time source, usually a battery backed RTC
pub trait TimeSource {
    type Error;

    /// Read the current time
    ///
    /// Garbled readings should be reported as errors so the display keeps
    /// its current phrase.
    fn read_time(&mut self) -> Result<TimeOfDay, Self::Error>;

    /// Write a new time
    fn set_time(&mut self, time: TimeOfDay) -> Result<(), Self::Error>;
}
