//! Brightness to compare threshold lookup
//!
//! Brightness levels are linear in perceived brightness. The refresh timer
//! counts [`PERIOD_COUNTS`] per period, and a compare threshold is the count
//! at which a group of segments is switched off. The table applies a 2.2 gamma
//! so that each level step looks equally large.

use embassy_time::Duration;

/// Highest brightness level
pub const MAX_LEVEL: u8 = 127;

/// Number of brightness levels
pub const LEVEL_COUNT: usize = MAX_LEVEL as usize + 1;

/// Timer counts per refresh period (10 ms at 4 MHz)
pub const PERIOD_COUNTS: u16 = 40_000;

/// Threshold of the brightest level
///
/// Stays short of [`PERIOD_COUNTS`] so the off event never races the next
/// refresh.
pub const DEFAULT_TOP: u16 = 39_600;

/// Default gamma exponent
pub const DEFAULT_GAMMA: f32 = 2.2;

/// Compare thresholds for a 2.2 gamma, `DEFAULT_TOP` at the brightest level
pub static GAMMA_TABLE: [u16; LEVEL_COUNT] = [
    0, 1, 4, 10, 20, 32, 48, 67, //
    90, 117, 148, 182, 221, 263, 310, 360, //
    415, 475, 538, 606, 679, 755, 837, 923, //
    1013, 1109, 1209, 1313, 1423, 1537, 1656, 1780, //
    1908, 2042, 2181, 2324, 2473, 2626, 2785, 2949, //
    3118, 3292, 3471, 3656, 3845, 4040, 4240, 4446, //
    4656, 4873, 5094, 5321, 5553, 5791, 6034, 6282, //
    6536, 6796, 7061, 7332, 7608, 7890, 8177, 8470, //
    8768, 9073, 9383, 9698, 10020, 10347, 10679, 11018, //
    11362, 11712, 12068, 12430, 12797, 13171, 13550, 13935, //
    14326, 14723, 15126, 15535, 15949, 16370, 16797, 17229, //
    17668, 18113, 18564, 19020, 19483, 19952, 20427, 20908, //
    21396, 21889, 22388, 22894, 23406, 23924, 24448, 24979, //
    25515, 26058, 26607, 27163, 27724, 28292, 28866, 29447, //
    30034, 30627, 31226, 31832, 32444, 33063, 33687, 34319, //
    34956, 35600, 36251, 36908, 37571, 38241, 38917, 39600, //
];

/// Clamp a brightness level into `0..=MAX_LEVEL`
#[inline]
pub const fn clamp_level(level: u8) -> u8 {
    if level > MAX_LEVEL { MAX_LEVEL } else { level }
}

/// Monotonic brightness level to compare threshold lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrightnessCurve {
    table: [u16; LEVEL_COUNT],
}

impl Default for BrightnessCurve {
    fn default() -> Self {
        Self::new(GAMMA_TABLE)
    }
}

impl BrightnessCurve {
    /// Create a curve from a precomputed table
    ///
    /// The table is expected to be non-decreasing.
    pub const fn new(table: [u16; LEVEL_COUNT]) -> Self {
        Self { table }
    }

    /// Build a table for a custom gamma exponent
    ///
    /// Intended to run once at configuration time. `top` is clamped to
    /// `PERIOD_COUNTS`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn with_exponent(exponent: f32, top: u16) -> Self {
        let top = top.min(PERIOD_COUNTS);
        let mut table = [0; LEVEL_COUNT];
        for (level, threshold) in table.iter_mut().enumerate() {
            let linear = f32::from(level as u8) / f32::from(MAX_LEVEL);
            let scaled = libm::roundf(libm::powf(linear, exponent) * f32::from(top));
            *threshold = (scaled as u16).min(top);
        }
        Self { table }
    }

    /// Compare threshold for `level`, clamped to the brightest level
    #[inline]
    pub fn threshold(&self, level: u8) -> u16 {
        self.table[usize::from(clamp_level(level))]
    }

    /// Time from period start to `threshold` for a period of `period`
    pub fn offset(threshold: u16, period: Duration) -> Duration {
        let threshold = u64::from(threshold.min(PERIOD_COUNTS));
        Duration::from_micros(period.as_micros() * threshold / u64::from(PERIOD_COUNTS))
    }

    /// Access the raw table
    pub const fn table(&self) -> &[u16; LEVEL_COUNT] {
        &self.table
    }
}
