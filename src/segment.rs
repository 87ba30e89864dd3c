//! Segment vocabulary and 32-bit segment sets
//!
//! Each word of the clock face is one LED segment wired to one output of the
//! four daisy-chained shift registers. A frame is therefore a 32-bit set, one
//! bit per output.

use core::ops::{BitAnd, BitOr, Not};

/// Number of addressable outputs
pub const SEGMENT_COUNT: u8 = 32;

const SEGMENT_NAME_IT_IS: &str = "it_is";
const SEGMENT_NAME_A: &str = "a";
const SEGMENT_NAME_QUARTER: &str = "quarter";
const SEGMENT_NAME_TWENTY: &str = "twenty";
const SEGMENT_NAME_FIVE: &str = "five";
const SEGMENT_NAME_HALF: &str = "half";
const SEGMENT_NAME_TEN: &str = "ten";
const SEGMENT_NAME_OF: &str = "of";
const SEGMENT_NAME_PAST: &str = "past";
const SEGMENT_NAME_HOUR_NINE: &str = "hour_nine";
const SEGMENT_NAME_HOUR_ONE: &str = "hour_one";
const SEGMENT_NAME_HOUR_SIX: &str = "hour_six";
const SEGMENT_NAME_HOUR_THREE: &str = "hour_three";
const SEGMENT_NAME_HOUR_FOUR: &str = "hour_four";
const SEGMENT_NAME_HOUR_FIVE: &str = "hour_five";
const SEGMENT_NAME_HOUR_TWO: &str = "hour_two";
const SEGMENT_NAME_HOUR_EIGHT: &str = "hour_eight";
const SEGMENT_NAME_HOUR_ELEVEN: &str = "hour_eleven";
const SEGMENT_NAME_HOUR_SEVEN: &str = "hour_seven";
const SEGMENT_NAME_HOUR_TWELVE: &str = "hour_twelve";
const SEGMENT_NAME_HOUR_TEN: &str = "hour_ten";
const SEGMENT_NAME_OCLOCK: &str = "oclock";

const SEGMENT_ID_IT_IS: u8 = 31;
const SEGMENT_ID_A: u8 = 30;
const SEGMENT_ID_QUARTER: u8 = 29;
const SEGMENT_ID_TWENTY: u8 = 28;
const SEGMENT_ID_FIVE: u8 = 27;
const SEGMENT_ID_HALF: u8 = 26;
const SEGMENT_ID_TEN: u8 = 25;
const SEGMENT_ID_OF: u8 = 24;
const SEGMENT_ID_PAST: u8 = 23;
const SEGMENT_ID_HOUR_NINE: u8 = 22;
const SEGMENT_ID_HOUR_ONE: u8 = 21;
const SEGMENT_ID_HOUR_SIX: u8 = 20;
const SEGMENT_ID_HOUR_THREE: u8 = 19;
const SEGMENT_ID_HOUR_FOUR: u8 = 18;
const SEGMENT_ID_HOUR_FIVE: u8 = 17;
const SEGMENT_ID_HOUR_TWO: u8 = 16;
const SEGMENT_ID_HOUR_EIGHT: u8 = 15;
const SEGMENT_ID_HOUR_ELEVEN: u8 = 14;
const SEGMENT_ID_HOUR_SEVEN: u8 = 13;
const SEGMENT_ID_HOUR_TWELVE: u8 = 12;
const SEGMENT_ID_HOUR_TEN: u8 = 11;
const SEGMENT_ID_OCLOCK: u8 = 10;

/// Named words of the clock face, valued by their shift register output
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Segment {
    ItIs = SEGMENT_ID_IT_IS,
    A = SEGMENT_ID_A,
    Quarter = SEGMENT_ID_QUARTER,
    Twenty = SEGMENT_ID_TWENTY,
    Five = SEGMENT_ID_FIVE,
    Half = SEGMENT_ID_HALF,
    Ten = SEGMENT_ID_TEN,
    Of = SEGMENT_ID_OF,
    Past = SEGMENT_ID_PAST,
    HourNine = SEGMENT_ID_HOUR_NINE,
    HourOne = SEGMENT_ID_HOUR_ONE,
    HourSix = SEGMENT_ID_HOUR_SIX,
    HourThree = SEGMENT_ID_HOUR_THREE,
    HourFour = SEGMENT_ID_HOUR_FOUR,
    HourFive = SEGMENT_ID_HOUR_FIVE,
    HourTwo = SEGMENT_ID_HOUR_TWO,
    HourEight = SEGMENT_ID_HOUR_EIGHT,
    HourEleven = SEGMENT_ID_HOUR_ELEVEN,
    HourSeven = SEGMENT_ID_HOUR_SEVEN,
    HourTwelve = SEGMENT_ID_HOUR_TWELVE,
    HourTen = SEGMENT_ID_HOUR_TEN,
    Oclock = SEGMENT_ID_OCLOCK,
}

/// Hour words indexed by hour, where index 0 reads "twelve"
const HOUR_WORDS: [Segment; 12] = [
    Segment::HourTwelve,
    Segment::HourOne,
    Segment::HourTwo,
    Segment::HourThree,
    Segment::HourFour,
    Segment::HourFive,
    Segment::HourSix,
    Segment::HourSeven,
    Segment::HourEight,
    Segment::HourNine,
    Segment::HourTen,
    Segment::HourEleven,
];

impl Segment {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            SEGMENT_ID_IT_IS => Self::ItIs,
            SEGMENT_ID_A => Self::A,
            SEGMENT_ID_QUARTER => Self::Quarter,
            SEGMENT_ID_TWENTY => Self::Twenty,
            SEGMENT_ID_FIVE => Self::Five,
            SEGMENT_ID_HALF => Self::Half,
            SEGMENT_ID_TEN => Self::Ten,
            SEGMENT_ID_OF => Self::Of,
            SEGMENT_ID_PAST => Self::Past,
            SEGMENT_ID_HOUR_NINE => Self::HourNine,
            SEGMENT_ID_HOUR_ONE => Self::HourOne,
            SEGMENT_ID_HOUR_SIX => Self::HourSix,
            SEGMENT_ID_HOUR_THREE => Self::HourThree,
            SEGMENT_ID_HOUR_FOUR => Self::HourFour,
            SEGMENT_ID_HOUR_FIVE => Self::HourFive,
            SEGMENT_ID_HOUR_TWO => Self::HourTwo,
            SEGMENT_ID_HOUR_EIGHT => Self::HourEight,
            SEGMENT_ID_HOUR_ELEVEN => Self::HourEleven,
            SEGMENT_ID_HOUR_SEVEN => Self::HourSeven,
            SEGMENT_ID_HOUR_TWELVE => Self::HourTwelve,
            SEGMENT_ID_HOUR_TEN => Self::HourTen,
            SEGMENT_ID_OCLOCK => Self::Oclock,
            _ => return None,
        })
    }

    /// Output index of the segment
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Hour word for an hour index in `0..12`
    ///
    /// Returns `None` for indices past eleven.
    pub fn hour_word(hour: u8) -> Option<Self> {
        HOUR_WORDS.get(usize::from(hour)).copied()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ItIs => SEGMENT_NAME_IT_IS,
            Self::A => SEGMENT_NAME_A,
            Self::Quarter => SEGMENT_NAME_QUARTER,
            Self::Twenty => SEGMENT_NAME_TWENTY,
            Self::Five => SEGMENT_NAME_FIVE,
            Self::Half => SEGMENT_NAME_HALF,
            Self::Ten => SEGMENT_NAME_TEN,
            Self::Of => SEGMENT_NAME_OF,
            Self::Past => SEGMENT_NAME_PAST,
            Self::HourNine => SEGMENT_NAME_HOUR_NINE,
            Self::HourOne => SEGMENT_NAME_HOUR_ONE,
            Self::HourSix => SEGMENT_NAME_HOUR_SIX,
            Self::HourThree => SEGMENT_NAME_HOUR_THREE,
            Self::HourFour => SEGMENT_NAME_HOUR_FOUR,
            Self::HourFive => SEGMENT_NAME_HOUR_FIVE,
            Self::HourTwo => SEGMENT_NAME_HOUR_TWO,
            Self::HourEight => SEGMENT_NAME_HOUR_EIGHT,
            Self::HourEleven => SEGMENT_NAME_HOUR_ELEVEN,
            Self::HourSeven => SEGMENT_NAME_HOUR_SEVEN,
            Self::HourTwelve => SEGMENT_NAME_HOUR_TWELVE,
            Self::HourTen => SEGMENT_NAME_HOUR_TEN,
            Self::Oclock => SEGMENT_NAME_OCLOCK,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            SEGMENT_NAME_IT_IS => Some(Self::ItIs),
            SEGMENT_NAME_A => Some(Self::A),
            SEGMENT_NAME_QUARTER => Some(Self::Quarter),
            SEGMENT_NAME_TWENTY => Some(Self::Twenty),
            SEGMENT_NAME_FIVE => Some(Self::Five),
            SEGMENT_NAME_HALF => Some(Self::Half),
            SEGMENT_NAME_TEN => Some(Self::Ten),
            SEGMENT_NAME_OF => Some(Self::Of),
            SEGMENT_NAME_PAST => Some(Self::Past),
            SEGMENT_NAME_HOUR_NINE => Some(Self::HourNine),
            SEGMENT_NAME_HOUR_ONE => Some(Self::HourOne),
            SEGMENT_NAME_HOUR_SIX => Some(Self::HourSix),
            SEGMENT_NAME_HOUR_THREE => Some(Self::HourThree),
            SEGMENT_NAME_HOUR_FOUR => Some(Self::HourFour),
            SEGMENT_NAME_HOUR_FIVE => Some(Self::HourFive),
            SEGMENT_NAME_HOUR_TWO => Some(Self::HourTwo),
            SEGMENT_NAME_HOUR_EIGHT => Some(Self::HourEight),
            SEGMENT_NAME_HOUR_ELEVEN => Some(Self::HourEleven),
            SEGMENT_NAME_HOUR_SEVEN => Some(Self::HourSeven),
            SEGMENT_NAME_HOUR_TWELVE => Some(Self::HourTwelve),
            SEGMENT_NAME_HOUR_TEN => Some(Self::HourTen),
            SEGMENT_NAME_OCLOCK => Some(Self::Oclock),
            _ => None,
        }
    }
}

/// Error returned when a segment id is outside of the 32 outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSegment(pub u8);

/// Set of lit segments, one bit per shift register output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SegmentSet(u32);

impl SegmentSet {
    /// No segment lit
    pub const EMPTY: Self = Self(0);
    /// Every output lit (lamp test)
    pub const ALL: Self = Self(u32::MAX);

    /// Create a set from a raw output mask
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw output mask
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Create a set from a list of named segments
    pub const fn of(segments: &[Segment]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < segments.len() {
            bits |= 1 << segments[i].id();
            i += 1;
        }
        Self(bits)
    }

    /// Copy of the set with `segment` added
    #[must_use]
    pub const fn with(self, segment: Segment) -> Self {
        Self(self.0 | 1 << segment.id())
    }

    pub fn insert(&mut self, segment: Segment) {
        self.0 |= 1 << segment.id();
    }

    pub fn remove(&mut self, segment: Segment) {
        self.0 &= !(1 << segment.id());
    }

    /// Add a raw output id
    ///
    /// Ids past the last output are rejected rather than wrapped into
    /// another register.
    pub fn try_insert(&mut self, id: u8) -> Result<(), InvalidSegment> {
        if id >= SEGMENT_COUNT {
            return Err(InvalidSegment(id));
        }
        self.0 |= 1 << id;
        Ok(())
    }

    pub const fn contains(self, segment: Segment) -> bool {
        self.0 & (1 << segment.id()) != 0
    }

    /// Check a raw output id, out of range ids are never contained
    pub const fn contains_id(self, id: u8) -> bool {
        id < SEGMENT_COUNT && self.0 & (1 << id) != 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Segments of `self` that are not in `other`
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[must_use]
    pub const fn complement(self) -> Self {
        Self(!self.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Bytes in shift register order
    ///
    /// Byte `i` holds outputs `8 * i..8 * i + 8`, output `id % 8` at bit
    /// `id % 8`. Byte 0 is clocked out first, most significant bit first.
    pub const fn to_register_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Iterate over the contained output ids in ascending order
    pub fn ids(self) -> impl Iterator<Item = u8> {
        (0..SEGMENT_COUNT).filter(move |id| self.contains_id(*id))
    }

    /// Iterate over the contained named segments
    pub fn segments(self) -> impl Iterator<Item = Segment> {
        self.ids().filter_map(Segment::from_raw)
    }
}

impl From<Segment> for SegmentSet {
    fn from(segment: Segment) -> Self {
        Self::EMPTY.with(segment)
    }
}

impl BitOr for SegmentSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for SegmentSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl Not for SegmentSet {
    type Output = Self;

    fn not(self) -> Self {
        self.complement()
    }
}
