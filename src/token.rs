use serde::{Deserialize, Serialize};
use std::fmt;

/// One element of serialized Morse text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Symbol {
    Dot,     // .
    Dash,    // -
    CharGap, // blank between tokens
    WordGap, // /
}

impl Symbol {
    pub fn from_char(ch: char) -> Option<Symbol> {
        match ch {
            '.' => Some(Symbol::Dot),
            '-' => Some(Symbol::Dash),
            ' ' => Some(Symbol::CharGap),
            '/' => Some(Symbol::WordGap),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
            Symbol::CharGap => ' ',
            Symbol::WordGap => '/',
        }
    }

    /// Dots and dashes key the tone; gaps are silent.
    pub fn is_tone(self) -> bool {
        matches!(self, Symbol::Dot | Symbol::Dash)
    }
}

/// An encoded message: one token per accepted input character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MorseCode {
    tokens: Vec<&'static str>,
}

impl MorseCode {
    pub fn new(tokens: Vec<&'static str>) -> Self {
        MorseCode { tokens }
    }

    pub fn tokens(&self) -> &[&'static str] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Flatten into the symbol stream of the serialized text, with a
    /// `CharGap` between consecutive tokens.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.tokens.iter().enumerate().flat_map(|(i, token)| {
            let gap = (i > 0).then_some(Symbol::CharGap);
            gap.into_iter().chain(token.chars().filter_map(Symbol::from_char))
        })
    }
}

impl fmt::Display for MorseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}
