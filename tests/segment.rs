mod tests {
    use myrtio_word_clock::segment::{InvalidSegment, Segment, SegmentSet};

    const NAMED: [Segment; 22] = [
        Segment::ItIs,
        Segment::A,
        Segment::Quarter,
        Segment::Twenty,
        Segment::Five,
        Segment::Half,
        Segment::Ten,
        Segment::Of,
        Segment::Past,
        Segment::HourNine,
        Segment::HourOne,
        Segment::HourSix,
        Segment::HourThree,
        Segment::HourFour,
        Segment::HourFive,
        Segment::HourTwo,
        Segment::HourEight,
        Segment::HourEleven,
        Segment::HourSeven,
        Segment::HourTwelve,
        Segment::HourTen,
        Segment::Oclock,
    ];

    #[test]
    fn test_named_segments_do_not_alias() {
        let all = SegmentSet::of(&NAMED);
        assert_eq!(all.len(), 22);
        for segment in NAMED {
            assert_eq!(Segment::from_raw(segment.id()), Some(segment));
            assert_eq!(Segment::parse_from_str(segment.as_str()), Some(segment));
        }
    }

    #[test]
    fn test_segment_from_raw_unnamed() {
        assert_eq!(Segment::from_raw(0), None);
        assert_eq!(Segment::from_raw(9), None);
        assert_eq!(Segment::from_raw(32), None);
    }

    #[test]
    fn test_hour_word() {
        assert_eq!(Segment::hour_word(0), Some(Segment::HourTwelve));
        assert_eq!(Segment::hour_word(3), Some(Segment::HourThree));
        assert_eq!(Segment::hour_word(11), Some(Segment::HourEleven));
        assert_eq!(Segment::hour_word(12), None);
    }

    #[test]
    fn test_try_insert_rejects_out_of_range() {
        let mut set = SegmentSet::EMPTY;
        assert_eq!(set.try_insert(32), Err(InvalidSegment(32)));
        assert_eq!(set.try_insert(255), Err(InvalidSegment(255)));
        assert_eq!(set, SegmentSet::EMPTY);

        assert_eq!(set.try_insert(0), Ok(()));
        assert_eq!(set.try_insert(31), Ok(()));
        assert_eq!(set.bits(), 0x8000_0001);
        assert!(!set.contains_id(40));
    }

    #[test]
    fn test_set_operations() {
        let left = SegmentSet::of(&[Segment::ItIs, Segment::Five, Segment::Past]);
        let right = SegmentSet::of(&[Segment::ItIs, Segment::Ten]);

        assert_eq!(
            left | right,
            SegmentSet::of(&[Segment::ItIs, Segment::Five, Segment::Past, Segment::Ten])
        );
        assert_eq!(left & right, SegmentSet::from(Segment::ItIs));
        assert_eq!(
            left.difference(right),
            SegmentSet::of(&[Segment::Five, Segment::Past])
        );
        assert_eq!(!SegmentSet::ALL, SegmentSet::EMPTY);
        assert!((left & !left).is_empty());
    }

    #[test]
    fn test_insert_remove() {
        let mut set = SegmentSet::EMPTY;
        set.insert(Segment::Half);
        assert!(set.contains(Segment::Half));
        set.remove(Segment::Half);
        assert!(!set.contains(Segment::Half));
        assert_eq!(SegmentSet::EMPTY.with(Segment::Of), SegmentSet::from(Segment::Of));
    }

    #[test]
    fn test_register_bytes() {
        assert_eq!(
            SegmentSet::from(Segment::ItIs).to_register_bytes(),
            [0x00, 0x00, 0x00, 0x80]
        );
        assert_eq!(
            SegmentSet::from(Segment::Oclock).to_register_bytes(),
            [0x00, 0x04, 0x00, 0x00]
        );
    }

    #[test]
    fn test_iterators() {
        let set = SegmentSet::of(&[Segment::Oclock, Segment::ItIs]).with(Segment::HourTen);
        let mut raw = SegmentSet::EMPTY;
        raw.try_insert(3).unwrap();
        let set = set | raw;

        assert_eq!(set.ids().collect::<Vec<_>>(), vec![3, 10, 11, 31]);
        assert_eq!(
            set.segments().collect::<Vec<_>>(),
            vec![Segment::Oclock, Segment::HourTen, Segment::ItIs]
        );
    }
}
