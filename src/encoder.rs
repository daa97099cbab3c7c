//! Text → Morse encoder.
//!
//! Text is uppercased with full Unicode case mapping first, so a character
//! may expand (`ß` becomes `SS`). Characters outside the alphabet are then
//! dropped, never substituted. Only an empty input string is an error;
//! text that contains no mappable character encodes to an empty, valid
//! `MorseCode`.

use tracing::debug;

use crate::alphabet;
use crate::error::{MorseError, Result};
use crate::token::MorseCode;

pub fn encode(text: &str) -> Result<MorseCode> {
    if text.is_empty() {
        return Err(MorseError::EmptyInput);
    }

    let mut dropped = 0usize;
    let tokens: Vec<&'static str> = text
        .chars()
        .flat_map(char::to_uppercase)
        .filter_map(|ch| {
            let token = alphabet::lookup(ch);
            if token.is_none() {
                dropped += 1;
            }
            token
        })
        .collect();

    if dropped > 0 {
        debug!(dropped, kept = tokens.len(), "dropped unmapped characters");
    }

    Ok(MorseCode::new(tokens))
}
