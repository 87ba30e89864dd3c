//! Cross-fade transitions between displayed phrases
//!
//! A transition runs in two phases that share a single fade level:
//! 1. Fading out: segments leaving the display ramp from the current
//!    brightness down to zero while the rest stay steady.
//! 2. Fading in: the leaving segments are dropped, the arriving segments are
//!    lit and ramp from zero back up to the global brightness.
//!
//! The engine only tracks masks and the level. Turning them into frames is
//! the job of the frame scheduler, see [`crate::frame_scheduler::PeriodPlan`].

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::brightness::GlobalBrightness;
use crate::gamma::MAX_LEVEL;
use crate::segment::SegmentSet;

/// Phase of the fade state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeState {
    /// Nothing is transitioning, the fade compare event is disabled
    Standby,
    /// Leaving segments are dimming towards zero
    FadingOut,
    /// Arriving segments are brightening towards the global brightness
    FadingIn,
}

/// Outcome of [`TransitionEngine::begin_transition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStart {
    /// Target is already shown (or already on its way), nothing to do
    Unchanged,
    /// A new fade session started from standby
    Started,
    /// Target was merged into the running fade-out
    Merged,
    /// Fade-in is running, target starts once it settles
    Deferred,
}

/// How a single segment is rendered in the current period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPhase {
    Off,
    /// Lit for the whole global on-time
    Steady,
    /// Lit, cut early by the fade threshold while dimming
    FadingOut,
    /// Not lit yet, turns on when the fade-out completes
    Queued,
    /// Lit, cut early by the fade threshold while brightening
    FadingIn,
}

/// Mutable state of the cross-fade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FadeSession {
    /// Segments lit at the start of each period
    displayed: SegmentSet,
    /// Cleared bits are cut off at the fade threshold
    outgoing_mask: SegmentSet,
    /// Segments that turn on once the fade-out completes
    incoming_mask: SegmentSet,
    /// Brightness level of the transitioning group
    fade_level: u8,
    state: FadeState,
}

impl Default for FadeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeSession {
    /// Dark display, nothing transitioning
    pub const fn new() -> Self {
        Self {
            displayed: SegmentSet::EMPTY,
            outgoing_mask: SegmentSet::ALL,
            incoming_mask: SegmentSet::EMPTY,
            fade_level: 0,
            state: FadeState::Standby,
        }
    }

    pub const fn displayed(&self) -> SegmentSet {
        self.displayed
    }

    pub const fn outgoing_mask(&self) -> SegmentSet {
        self.outgoing_mask
    }

    pub const fn incoming_mask(&self) -> SegmentSet {
        self.incoming_mask
    }

    pub const fn fade_level(&self) -> u8 {
        self.fade_level
    }

    pub const fn state(&self) -> FadeState {
        self.state
    }

    /// Check if a fade is in progress
    pub const fn is_fading(&self) -> bool {
        !matches!(self.state, FadeState::Standby)
    }

    /// Frame left lit after the fade threshold fires
    pub const fn early_off_frame(&self) -> SegmentSet {
        self.displayed.intersection(self.outgoing_mask)
    }

    /// Frame that is shown once the current fade settles
    pub const fn resolved(&self) -> SegmentSet {
        self.early_off_frame().union(self.incoming_mask)
    }

    /// Classify an output id for the current period
    pub const fn phase_of(&self, id: u8) -> SegmentPhase {
        let lit = self.displayed.contains_id(id);
        let steady = self.outgoing_mask.contains_id(id);
        let incoming = self.incoming_mask.contains_id(id);
        match (self.state, lit, steady, incoming) {
            (FadeState::FadingOut, false, _, true) => SegmentPhase::Queued,
            (_, false, _, _) => SegmentPhase::Off,
            (FadeState::Standby, true, _, _) | (_, true, true, _) => SegmentPhase::Steady,
            (FadeState::FadingOut, true, false, _) => SegmentPhase::FadingOut,
            (FadeState::FadingIn, true, false, _) => SegmentPhase::FadingIn,
        }
    }

    fn start(&mut self, target: SegmentSet, level: u8) {
        self.incoming_mask = self.incoming_mask.union(target.difference(self.displayed));
        self.outgoing_mask = self
            .outgoing_mask
            .difference(self.displayed.difference(target));
        self.fade_level = level;
        self.state = FadeState::FadingOut;
    }

    fn merge(&mut self, target: SegmentSet) {
        let steady = self.early_off_frame();
        // Segments already dimming keep dimming and come back with the fade-in
        self.incoming_mask = target.difference(steady);
        self.outgoing_mask = self
            .outgoing_mask
            .difference(self.displayed.difference(target));
    }

    fn commit(&mut self) {
        self.displayed = self.resolved();
        self.outgoing_mask = self.incoming_mask.complement();
        self.state = FadeState::FadingIn;
    }

    fn finish(&mut self) {
        self.outgoing_mask = SegmentSet::ALL;
        self.incoming_mask = SegmentSet::EMPTY;
        self.state = FadeState::Standby;
    }
}

/// Drives the fade session towards the latest requested phrase
#[derive(Debug, Clone, Default)]
pub struct TransitionEngine {
    session: FadeSession,
    /// Target requested while fading in
    pending: Option<SegmentSet>,
}

impl TransitionEngine {
    pub const fn new() -> Self {
        Self {
            session: FadeSession::new(),
            pending: None,
        }
    }

    pub const fn session(&self) -> &FadeSession {
        &self.session
    }

    /// Target waiting for the running fade-in to settle
    pub const fn pending(&self) -> Option<SegmentSet> {
        self.pending
    }

    /// Start fading towards `target`
    ///
    /// A request that arrives mid-fade never resets the ramp. During the
    /// fade-out it is merged into the running masks; during the fade-in it
    /// is held until the ramp reaches the global brightness.
    /// A held target therefore waits at most `brightness.target()` ticks,
    /// 127 at full brightness, before its own fade starts.
    pub fn begin_transition(
        &mut self,
        target: SegmentSet,
        brightness: &GlobalBrightness,
    ) -> TransitionStart {
        match self.session.state {
            FadeState::Standby => {
                if target == self.session.displayed {
                    return TransitionStart::Unchanged;
                }
                #[cfg(feature = "esp32-log")]
                println!(
                    "[TransitionEngine.begin] {:?} -> {:?}",
                    self.session.displayed, target
                );
                self.session.start(target, brightness.target());
                TransitionStart::Started
            }
            FadeState::FadingOut => {
                if target == self.session.resolved() {
                    return TransitionStart::Unchanged;
                }
                #[cfg(feature = "esp32-log")]
                println!(
                    "[TransitionEngine.begin] merging {:?} at level {:?}",
                    target, self.session.fade_level
                );
                self.session.merge(target);
                TransitionStart::Merged
            }
            FadeState::FadingIn => {
                if target == self.session.displayed {
                    self.pending = None;
                    return TransitionStart::Unchanged;
                }
                #[cfg(feature = "esp32-log")]
                println!("[TransitionEngine.begin] deferring {:?}", target);
                self.pending = Some(target);
                TransitionStart::Deferred
            }
        }
    }

    /// Advance the fade by one refresh period
    ///
    /// Returns the state after the step.
    pub fn tick(&mut self, brightness: &GlobalBrightness) -> FadeState {
        match self.session.state {
            FadeState::Standby => {}
            FadeState::FadingOut => {
                self.session.fade_level = self.session.fade_level.saturating_sub(1);
                if self.session.fade_level == 0 {
                    self.session.commit();
                    #[cfg(feature = "esp32-log")]
                    println!(
                        "[TransitionEngine.tick] faded out, showing {:?}",
                        self.session.displayed
                    );
                }
            }
            FadeState::FadingIn => {
                let target = brightness.target();
                if self.session.fade_level < target {
                    self.session.fade_level = (self.session.fade_level + 1).min(MAX_LEVEL);
                }
                if self.session.fade_level >= target {
                    self.session.finish();
                    #[cfg(feature = "esp32-log")]
                    println!("[TransitionEngine.tick] fade complete");
                    if let Some(pending) = self.pending.take() {
                        self.begin_transition(pending, brightness);
                    }
                }
            }
        }
        self.session.state
    }

    /// Jump straight to the frame the current fade would settle on
    ///
    /// Any target held back during a fade-in is applied as well. The session
    /// ends in standby.
    pub fn complete(&mut self) {
        if !self.session.is_fading() {
            return;
        }
        self.session.displayed = self.pending.take().unwrap_or(self.session.resolved());
        self.session.finish();
    }
}
