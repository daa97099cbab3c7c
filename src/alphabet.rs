//! The fixed Morse alphabet: letters, digits, and the word separator.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Token for the space character.
pub const WORD_SEPARATOR: &str = "/";

const ENTRIES: [(char, &str); 37] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
    (' ', WORD_SEPARATOR),
];

static TABLE: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| entries().iter().copied().collect());

/// Look up the token for a character. ASCII case-insensitive; `None` for
/// anything outside the table. The encoder applies full Unicode uppercasing
/// before it gets here.
pub fn lookup(ch: char) -> Option<&'static str> {
    TABLE.get(&ch.to_ascii_uppercase()).copied()
}

/// Every `(character, token)` pair in the table.
pub(crate) fn entries() -> &'static [(char, &'static str)] {
    &ENTRIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup('a'), Some(".-"));
        assert_eq!(lookup('A'), Some(".-"));
        assert_eq!(lookup('z'), lookup('Z'));
    }

    #[test]
    fn space_maps_to_word_separator() {
        assert_eq!(lookup(' '), Some(WORD_SEPARATOR));
    }

    #[test]
    fn unmapped_characters_have_no_token() {
        for ch in ['@', '?', '.', 'é', '\n', '\t'] {
            assert_eq!(lookup(ch), None, "{ch:?} should not be mapped");
        }
    }

    #[test]
    fn every_entry_is_reachable_by_lookup() {
        for &(ch, token) in entries() {
            assert_eq!(lookup(ch), Some(token));
            assert_eq!(lookup(ch.to_ascii_lowercase()), Some(token));
        }
    }

    #[test]
    fn keys_are_unique_and_tokens_well_formed() {
        assert_eq!(TABLE.len(), ENTRIES.len());
        for (ch, token) in entries() {
            if *ch == ' ' {
                continue;
            }
            assert!(!token.is_empty());
            assert!(
                token.chars().all(|c| c == '.' || c == '-'),
                "bad token for {ch}: {token}"
            );
        }
    }
}
