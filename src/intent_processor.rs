//! Intent processing module
//!
//! Applies requests posted by the main loop to the fade session. Runs at the
//! top of each refresh tick, which makes the refresh interrupt the only
//! writer of the fade state and the global brightness.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::brightness::GlobalBrightness;
use crate::channel::{Channel, Receiver, Sender};
use crate::phrase::compose;
use crate::segment::SegmentSet;
use crate::time::TimeOfDay;
use crate::transition::TransitionEngine;

/// Request to change what the display shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayIntent {
    /// Cross-fade to the phrase for this time
    ShowTime(TimeOfDay),
    /// Show the phrase for this time at once, without waiting for the ramp
    JumpToTime(TimeOfDay),
    /// Cross-fade to an arbitrary set of segments
    ShowSegments(SegmentSet),
    /// One brightness step up
    BrightnessUp,
    /// One brightness step down
    BrightnessDown,
    /// Set the brightness level directly
    SetBrightness(u8),
}

/// Side effects from processing intents that the scheduler should apply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentEffects {
    /// Frame to emit right away, ahead of the regular refresh
    pub immediate_frame: Option<SegmentSet>,
    /// Global brightness changed
    pub brightness_changed: bool,
}

impl IntentEffects {
    /// Check if any effects need to be applied
    pub const fn has_effects(&self) -> bool {
        self.immediate_frame.is_some() || self.brightness_changed
    }
}

/// Type alias for intent sender
pub type IntentSender<'a, const SIZE: usize> = Sender<'a, DisplayIntent, SIZE>;

/// Type alias for intent receiver
pub type IntentReceiver<'a, const SIZE: usize> = Receiver<'a, DisplayIntent, SIZE>;

/// Type alias for the intent channel
pub type IntentChannel<const SIZE: usize> = Channel<DisplayIntent, SIZE>;

/// Brightness step requested within one refresh period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrightnessStep {
    Up,
    Down,
}

/// Applies queued display intents to the transition engine
pub struct IntentProcessor<'a, const SIZE: usize> {
    intents: IntentReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> IntentProcessor<'a, SIZE> {
    /// Create a new intent processor
    pub const fn new(intents: IntentReceiver<'a, SIZE>) -> Self {
        Self { intents }
    }

    /// Process all pending intents from the channel (non-blocking)
    ///
    /// Drains every queued intent. Brightness buttons are debounced here: no
    /// matter how many step requests arrived, at most one step is applied per
    /// call, and the first one wins.
    pub fn process_pending(
        &mut self,
        engine: &mut TransitionEngine,
        brightness: &mut GlobalBrightness,
    ) -> IntentEffects {
        let mut effects = IntentEffects::default();
        let mut step = None;

        while let Ok(intent) = self.intents.try_receive() {
            match intent {
                DisplayIntent::ShowTime(time) => {
                    engine.begin_transition(compose(time), brightness);
                }
                DisplayIntent::JumpToTime(time) => {
                    let target = compose(time);
                    engine.begin_transition(target, brightness);
                    engine.complete();
                    effects.immediate_frame = Some(engine.session().displayed());
                }
                DisplayIntent::ShowSegments(target) => {
                    engine.begin_transition(target, brightness);
                }
                DisplayIntent::BrightnessUp => {
                    step.get_or_insert(BrightnessStep::Up);
                }
                DisplayIntent::BrightnessDown => {
                    step.get_or_insert(BrightnessStep::Down);
                }
                DisplayIntent::SetBrightness(level) => {
                    let before = brightness.target();
                    brightness.set(level);
                    effects.brightness_changed |= brightness.target() != before;
                }
            }
        }

        let stepped = match step {
            Some(BrightnessStep::Up) => brightness.increase(),
            Some(BrightnessStep::Down) => brightness.decrease(),
            None => false,
        };
        effects.brightness_changed |= stepped;

        #[cfg(feature = "esp32-log")]
        if effects.brightness_changed {
            println!(
                "[IntentProcessor.process_pending] brightness {:?}",
                brightness.target()
            );
        }

        effects
    }
}
