//! Timeline: the shared unit-level layout of a message.
//!
//! Both the synthesizer and the playback scheduler walk this layout, which
//! keeps the audio buffer and the blink animation in agreement.

use serde::Serialize;

use crate::token::{MorseCode, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Tone,
    Silence,
}

/// A run of tone or silence measured in dot lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub units: u32,
}

const fn tone(units: u32) -> Segment {
    Segment {
        kind: SegmentKind::Tone,
        units,
    }
}

const fn silence(units: u32) -> Segment {
    Segment {
        kind: SegmentKind::Silence,
        units,
    }
}

/// Length of the longest single segment, a dash.
pub const LONGEST_SEGMENT: u32 = 3;

const DOT: [Segment; 2] = [tone(1), silence(1)];
const DASH: [Segment; 2] = [tone(LONGEST_SEGMENT), silence(1)];
const GAP: [Segment; 2] = [silence(1), silence(1)];

/// The segments one symbol expands to. Every symbol ends with a one-unit gap.
///
/// Because the blank between tokens is a symbol of its own, this yields
/// 3 units of silence between characters and 7 around a `/`.
pub fn layout(symbol: Symbol) -> &'static [Segment] {
    match symbol {
        Symbol::Dot => &DOT,
        Symbol::Dash => &DASH,
        Symbol::CharGap | Symbol::WordGap => &GAP,
    }
}

/// One symbol of the message together with its segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub symbol: Symbol,
    pub segments: &'static [Segment],
}

impl Step {
    pub fn units(&self) -> u32 {
        self.segments.iter().map(|s| s.units).sum()
    }
}

/// Lay out a whole message, symbol by symbol.
pub fn steps(code: &MorseCode) -> impl Iterator<Item = Step> + '_ {
    code.symbols().map(|symbol| Step {
        symbol,
        segments: layout(symbol),
    })
}

/// Total length of a message in dot lengths.
pub fn total_units(code: &MorseCode) -> u32 {
    steps(code).map(|s| s.units()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;

    #[test]
    fn every_symbol_ends_with_one_unit_gap() {
        for symbol in [Symbol::Dot, Symbol::Dash, Symbol::CharGap, Symbol::WordGap] {
            assert_eq!(layout(symbol).last(), Some(&silence(1)));
        }
    }

    #[test]
    fn no_segment_is_longer_than_a_dash() {
        for symbol in [Symbol::Dot, Symbol::Dash, Symbol::CharGap, Symbol::WordGap] {
            assert!(layout(symbol).iter().all(|s| s.units <= LONGEST_SEGMENT));
        }
    }

    #[test]
    fn sos_units() {
        // 6 dots (2 units each), 3 dashes (4 each), 2 blanks (2 each)
        let code = encode("SOS").unwrap();
        assert_eq!(total_units(&code), 6 * 2 + 3 * 4 + 2 * 2);
    }

    #[test]
    fn silence_between_characters_and_words() {
        // E E: dot, blank, slash, blank, dot
        let code = encode("EE").unwrap();
        let between: u32 = 1 + steps(&code).nth(1).unwrap().units();
        assert_eq!(between, 3);

        let code = encode("E E").unwrap();
        let between: u32 = 1 + steps(&code).skip(1).take(3).map(|s| s.units()).sum::<u32>();
        assert_eq!(between, 7);
    }
}
