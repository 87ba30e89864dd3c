//! Time to phrase composition
//!
//! The hour is split into twelve five minute buckets. Every bucket lights a
//! fixed list of minute words plus "past" or "of", and the word of either the
//! current or the following hour. "It is" is always lit.

use crate::segment::{Segment, SegmentSet};
use crate::time::TimeOfDay;

/// One five minute bucket of the phrase table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseRule {
    /// First minute of the bucket (inclusive)
    pub start: u8,
    /// End of the bucket (exclusive)
    pub end: u8,
    /// Minute and connective words
    pub words: &'static [Segment],
    /// Added to the hour before picking the hour word
    pub hour_offset: u8,
}

impl PhraseRule {
    const fn new(start: u8, words: &'static [Segment], hour_offset: u8) -> Self {
        Self {
            start,
            end: start + 5,
            words,
            hour_offset,
        }
    }

    /// Check if `minutes` falls into this bucket
    pub const fn contains(&self, minutes: u8) -> bool {
        minutes >= self.start && minutes < self.end
    }
}

/// Buckets in ascending order, together covering `0..60` without gaps
pub static PHRASE_TABLE: [PhraseRule; 12] = [
    PhraseRule::new(0, &[Segment::Oclock], 0),
    PhraseRule::new(5, &[Segment::Five, Segment::Past], 0),
    PhraseRule::new(10, &[Segment::Ten, Segment::Past], 0),
    PhraseRule::new(15, &[Segment::A, Segment::Quarter, Segment::Past], 0),
    PhraseRule::new(20, &[Segment::Twenty, Segment::Past], 0),
    PhraseRule::new(25, &[Segment::Five, Segment::Twenty, Segment::Past], 0),
    PhraseRule::new(30, &[Segment::Half, Segment::Past], 0),
    PhraseRule::new(35, &[Segment::Five, Segment::Twenty, Segment::Of], 1),
    PhraseRule::new(40, &[Segment::Twenty, Segment::Of], 1),
    PhraseRule::new(45, &[Segment::A, Segment::Quarter, Segment::Of], 1),
    PhraseRule::new(50, &[Segment::Ten, Segment::Of], 1),
    PhraseRule::new(55, &[Segment::Five, Segment::Of], 1),
];

/// Find the bucket for a minute value
///
/// Returns `None` for minutes past 59.
pub fn rule_for(minutes: u8) -> Option<&'static PhraseRule> {
    PHRASE_TABLE.iter().find(|rule| rule.contains(minutes))
}

/// Compose the set of segments that spells out `time`
pub fn compose(time: TimeOfDay) -> SegmentSet {
    let mut phrase = SegmentSet::from(Segment::ItIs);
    let Some(rule) = rule_for(time.minutes()) else {
        return phrase;
    };

    for word in rule.words {
        phrase.insert(*word);
    }

    let hour = (time.hours() + rule.hour_offset) % 12;
    if let Some(hour_word) = Segment::hour_word(hour) {
        phrase.insert(hour_word);
    }

    phrase
}
