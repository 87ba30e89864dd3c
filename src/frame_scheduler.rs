//! Refresh period scheduling
//!
//! Every refresh period is built from three events:
//! 1. Refresh: the full displayed frame is emitted and the fade advances.
//! 2. Early-off: the transitioning segments are cut, making them dimmer than
//!    the steady ones. Only armed while a fade is running.
//! 3. Global-off: every segment is cut, ending the on-time for the period.
//!
//! The two compare thresholds come from [`BrightnessCurve`] lookups, so a
//! single shared refresh pulse gives every segment one of two duty cycles.

use embassy_time::{Duration, Instant};

use crate::brightness::{DEFAULT_BRIGHTNESS, GlobalBrightness};
use crate::gamma::BrightnessCurve;
use crate::intent_processor::{IntentEffects, IntentProcessor, IntentReceiver};
use crate::segment::SegmentSet;
use crate::transition::{FadeSession, TransitionEngine};
use crate::FrameSink;

/// Default refresh rate (100 Hz).
pub const DEFAULT_REFRESH_HZ: u64 = 100;

/// Default refresh period based on the refresh rate.
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_millis(1000 / DEFAULT_REFRESH_HZ);

/// Configuration for the display driver
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Global brightness at power on
    pub brightness: u8,
    /// Length of one refresh period
    pub refresh_period: Duration,
    /// Brightness to compare threshold lookup
    pub curve: BrightnessCurve,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            refresh_period: DEFAULT_REFRESH_PERIOD,
            curve: BrightnessCurve::default(),
        }
    }
}

/// A blanking event within a refresh period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareEvent {
    /// Timer count from period start
    pub threshold: u16,
    /// Frame to emit when the threshold is reached
    pub frame: SegmentSet,
}

/// Frames and compare events of one refresh period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodPlan {
    /// Frame emitted at period start
    pub base: SegmentSet,
    /// Fade threshold, `None` while nothing is transitioning
    pub early_off: Option<CompareEvent>,
    /// Overall brightness threshold
    pub global_off: CompareEvent,
}

impl PeriodPlan {
    /// Plan the period for the current fade state
    ///
    /// The fade threshold is capped at the global threshold, so the early-off
    /// event never fires after the global-off event, whatever the curve.
    pub fn for_session(
        session: &FadeSession,
        brightness: &GlobalBrightness,
        curve: &BrightnessCurve,
    ) -> Self {
        let global_level = brightness.target();
        let global_threshold = curve.threshold(global_level);
        let early_off = session.is_fading().then(|| CompareEvent {
            threshold: curve
                .threshold(session.fade_level().min(global_level))
                .min(global_threshold),
            frame: session.early_off_frame(),
        });

        Self {
            base: session.displayed(),
            early_off,
            global_off: CompareEvent {
                threshold: global_threshold,
                frame: SegmentSet::EMPTY,
            },
        }
    }
}

impl Default for PeriodPlan {
    fn default() -> Self {
        Self {
            base: SegmentSet::EMPTY,
            early_off: None,
            global_off: CompareEvent {
                threshold: 0,
                frame: SegmentSet::EMPTY,
            },
        }
    }
}

/// Result of a refresh tick.
#[derive(Debug, Clone, Copy)]
pub struct RefreshResult {
    /// Compare events to arm for this period.
    pub plan: PeriodPlan,
    /// Time from period start to the early-off event.
    pub early_off_at: Option<Duration>,
    /// Time from period start to the global-off event.
    pub global_off_at: Duration,
    /// The deadline for the next refresh.
    pub next_deadline: Instant,
    /// How long to wait until the next refresh (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Word clock display driver.
///
/// Owns the fade session and the global brightness. Hook the three entry
/// points to the matching hardware events:
/// - [`FrameScheduler::refresh`] to the periodic timer,
/// - [`FrameScheduler::early_off`] to the fade compare channel,
/// - [`FrameScheduler::global_off`] to the brightness compare channel.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(intents.receiver(), sink, &DisplayConfig::default());
///
/// // Timer interrupt
/// let result = scheduler.refresh(Instant::now());
/// arm_compare_1(result.plan.global_off.threshold);
/// match result.plan.early_off {
///     Some(event) => arm_compare_2(event.threshold),
///     None => disable_compare_2(),
/// }
///
/// // Compare interrupts
/// scheduler.early_off();
/// scheduler.global_off();
/// ```
pub struct FrameScheduler<'a, S: FrameSink, const INTENT_CHANNEL_SIZE: usize> {
    sink: S,
    intent_processor: IntentProcessor<'a, INTENT_CHANNEL_SIZE>,
    engine: TransitionEngine,
    brightness: GlobalBrightness,
    curve: BrightnessCurve,
    plan: PeriodPlan,
    next_period: Instant,
    period: Duration,
}

impl<'a, S: FrameSink, const INTENT_CHANNEL_SIZE: usize>
    FrameScheduler<'a, S, INTENT_CHANNEL_SIZE>
{
    /// Create a new scheduler with a dark display.
    pub fn new(
        intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
        sink: S,
        config: &DisplayConfig,
    ) -> Self {
        Self {
            sink,
            intent_processor: IntentProcessor::new(intents),
            engine: TransitionEngine::new(),
            brightness: GlobalBrightness::new(config.brightness),
            curve: config.curve.clone(),
            plan: PeriodPlan::default(),
            next_period: Instant::from_millis(0),
            period: config.refresh_period,
        }
    }

    /// Start a refresh period.
    ///
    /// This method:
    /// 1. Applies queued intents
    /// 2. Advances the fade by one step
    /// 3. Emits the base frame
    /// 4. Returns the compare events to arm and the next deadline
    pub fn refresh(&mut self, now: Instant) -> RefreshResult {
        // Drift correction: if we've fallen too far behind, reset to now
        let max_drift = self.period * 2;
        if now > self.next_period + max_drift {
            self.next_period = now;
        }

        let effects = self
            .intent_processor
            .process_pending(&mut self.engine, &mut self.brightness);
        self.apply_effects(&effects);

        self.engine.tick(&self.brightness);
        self.plan = PeriodPlan::for_session(self.engine.session(), &self.brightness, &self.curve);
        self.sink.emit_frame(self.plan.base);

        self.next_period += self.period;
        let sleep_duration = if self.next_period > now {
            self.next_period - now
        } else {
            Duration::from_millis(0)
        };

        RefreshResult {
            plan: self.plan,
            early_off_at: self
                .plan
                .early_off
                .map(|event| BrightnessCurve::offset(event.threshold, self.period)),
            global_off_at: BrightnessCurve::offset(self.plan.global_off.threshold, self.period),
            next_deadline: self.next_period,
            sleep_duration,
        }
    }

    /// Fade compare event: cut the transitioning segments.
    ///
    /// Ignored if no fade was armed for this period.
    pub fn early_off(&mut self) {
        if let Some(event) = self.plan.early_off {
            self.sink.emit_frame(event.frame);
        }
    }

    /// Brightness compare event: cut every segment.
    pub fn global_off(&mut self) {
        self.sink.emit_frame(self.plan.global_off.frame);
    }

    /// Run all three events of a period back to back.
    ///
    /// Emits the frames without waiting for the thresholds, for simulation
    /// and tests.
    pub fn run_period(&mut self, now: Instant) -> RefreshResult {
        let result = self.refresh(now);
        self.early_off();
        self.global_off();
        result
    }

    /// Apply side effects from intent processing
    fn apply_effects(&mut self, effects: &IntentEffects) {
        if let Some(frame) = effects.immediate_frame {
            self.sink.emit_frame(frame);
        }
    }

    /// Get a reference to the transition engine.
    pub fn engine(&self) -> &TransitionEngine {
        &self.engine
    }

    /// Current global brightness.
    pub fn brightness(&self) -> GlobalBrightness {
        self.brightness
    }

    /// Plan of the current period.
    pub fn plan(&self) -> &PeriodPlan {
        &self.plan
    }

    /// Get a reference to the frame sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get a mutable reference to the frame sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
