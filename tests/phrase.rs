mod tests {
    use myrtio_word_clock::phrase::{PHRASE_TABLE, compose, rule_for};
    use myrtio_word_clock::{Segment, SegmentSet, TimeOfDay};

    fn time(hours: u8, minutes: u8) -> TimeOfDay {
        TimeOfDay::new(hours, minutes).unwrap()
    }

    #[test]
    fn test_buckets_partition_the_hour() {
        for minutes in 0..60 {
            let matches = PHRASE_TABLE
                .iter()
                .filter(|rule| rule.contains(minutes))
                .count();
            assert_eq!(matches, 1, "minute {minutes}");
        }
        assert_eq!(rule_for(60), None);
    }

    #[test]
    fn test_buckets_are_contiguous() {
        assert_eq!(PHRASE_TABLE[0].start, 0);
        assert_eq!(PHRASE_TABLE[11].end, 60);
        for pair in PHRASE_TABLE.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert_eq!(pair[0].end - pair[0].start, 5);
        }
    }

    #[test]
    fn test_compose_twenty_five_to() {
        assert_eq!(
            compose(time(2, 37)),
            SegmentSet::of(&[
                Segment::ItIs,
                Segment::Five,
                Segment::Twenty,
                Segment::Of,
                Segment::HourThree,
            ])
        );
    }

    #[test]
    fn test_compose_oclock() {
        assert_eq!(
            compose(TimeOfDay::MIDNIGHT),
            SegmentSet::of(&[Segment::ItIs, Segment::Oclock, Segment::HourTwelve])
        );
    }

    #[test]
    fn test_compose_quarter() {
        assert_eq!(
            compose(time(7, 19)),
            SegmentSet::of(&[
                Segment::ItIs,
                Segment::A,
                Segment::Quarter,
                Segment::Past,
                Segment::HourSeven,
            ])
        );
        assert_eq!(
            compose(time(7, 45)),
            SegmentSet::of(&[
                Segment::ItIs,
                Segment::A,
                Segment::Quarter,
                Segment::Of,
                Segment::HourEight,
            ])
        );
    }

    #[test]
    fn test_compose_half_keeps_current_hour() {
        assert_eq!(
            compose(time(9, 34)),
            SegmentSet::of(&[Segment::ItIs, Segment::Half, Segment::Past, Segment::HourNine])
        );
    }

    #[test]
    fn test_compose_wraps_to_twelve() {
        assert_eq!(
            compose(time(11, 55)),
            SegmentSet::of(&[Segment::ItIs, Segment::Five, Segment::Of, Segment::HourTwelve])
        );
    }

    #[test]
    fn test_compose_same_bucket_same_phrase() {
        for hours in 0..12 {
            for minutes in 0..60 {
                let bucket_start = minutes - minutes % 5;
                assert_eq!(
                    compose(time(hours, minutes)),
                    compose(time(hours, bucket_start))
                );
            }
        }
    }
}
