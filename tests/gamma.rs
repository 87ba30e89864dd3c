mod tests {
    use embassy_time::Duration;
    use myrtio_word_clock::gamma::{
        BrightnessCurve, DEFAULT_GAMMA, DEFAULT_TOP, GAMMA_TABLE, MAX_LEVEL, PERIOD_COUNTS,
        clamp_level,
    };

    #[test]
    fn test_gamma_table_is_monotonic() {
        for pair in GAMMA_TABLE.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert_eq!(GAMMA_TABLE[0], 0);
        assert_eq!(GAMMA_TABLE[usize::from(MAX_LEVEL)], DEFAULT_TOP);
        assert!(DEFAULT_TOP < PERIOD_COUNTS);
    }

    #[test]
    fn test_threshold_clamps_level() {
        let curve = BrightnessCurve::default();
        assert_eq!(curve.threshold(0), 0);
        assert_eq!(curve.threshold(64), GAMMA_TABLE[64]);
        assert_eq!(curve.threshold(200), curve.threshold(MAX_LEVEL));
        assert_eq!(clamp_level(255), MAX_LEVEL);
        assert_eq!(clamp_level(5), 5);
    }

    #[test]
    fn test_with_exponent() {
        let curve = BrightnessCurve::with_exponent(DEFAULT_GAMMA, DEFAULT_TOP);
        assert_eq!(curve.threshold(0), 0);
        assert_eq!(curve.threshold(MAX_LEVEL), DEFAULT_TOP);
        for pair in curve.table().windows(2) {
            assert!(pair[0] <= pair[1]);
        }

        let linear = BrightnessCurve::with_exponent(1.0, 50_000);
        assert_eq!(linear.threshold(MAX_LEVEL), PERIOD_COUNTS);
    }

    #[test]
    fn test_offset() {
        let period = Duration::from_millis(10);
        assert_eq!(BrightnessCurve::offset(0, period), Duration::from_micros(0));
        assert_eq!(
            BrightnessCurve::offset(20_000, period),
            Duration::from_micros(5_000)
        );
        assert_eq!(
            BrightnessCurve::offset(DEFAULT_TOP, period),
            Duration::from_micros(9_900)
        );
        assert_eq!(
            BrightnessCurve::offset(u16::MAX, period),
            Duration::from_millis(10)
        );
    }
}
