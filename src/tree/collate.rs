//! Polish collation for category names.
//!
//! Three comparison levels, in the spirit of the Unicode Collation Algorithm:
//! 1. primary: letters in Polish alphabet order (`a ą b c ć … z ź ż`),
//!    case- and accent-insensitive for letters that are not Polish letters
//!    in their own right;
//! 2. secondary: accents (`e` < `é`);
//! 3. tertiary: case (`a` < `A`).
//!
//! Whitespace sorts before punctuation, punctuation before digits, digits
//! before letters.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const POLISH_ALPHABET: [char; 35] = [
    'a', 'ą', 'b', 'c', 'ć', 'd', 'e', 'ę', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'ł', 'm', 'n',
    'ń', 'o', 'ó', 'p', 'q', 'r', 's', 'ś', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ź', 'ż',
];

/// Letters outside the Polish alphabet sort after `ż`, by code point.
const FOREIGN_LETTER_BASE: u32 = POLISH_ALPHABET.len() as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum CharClass {
    Space,
    Punctuation,
    Digit,
    Letter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Primary {
    class: CharClass,
    weight: u32,
}

/// Precomputed comparison key. Field order is comparison order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey {
    primary: Vec<Primary>,
    secondary: Vec<u32>,
    tertiary: Vec<u8>,
}

impl SortKey {
    pub fn new(text: &str) -> Self {
        let mut key = SortKey {
            primary: Vec::with_capacity(text.len()),
            secondary: Vec::with_capacity(text.len()),
            tertiary: Vec::with_capacity(text.len()),
        };

        // Compose first so "o" + U+0301 takes the primary weight of "ó".
        for ch in text.nfc() {
            if is_combining_mark(ch) {
                // Mark with no precomposed form: fold into the previous element.
                if let Some(last) = key.secondary.last_mut() {
                    if *last == 0 {
                        *last = ch as u32;
                    }
                }
                continue;
            }

            let lower = ch.to_lowercase().next().unwrap_or(ch);
            let (primary, accent) = classify(lower);
            key.primary.push(primary);
            key.secondary.push(accent);
            key.tertiary.push(u8::from(ch.is_uppercase()));
        }

        key
    }
}

fn polish_index(ch: char) -> Option<u32> {
    POLISH_ALPHABET
        .iter()
        .position(|&letter| letter == ch)
        .map(|pos| pos as u32)
}

/// Primary weight and accent weight for one lowercased character.
fn classify(ch: char) -> (Primary, u32) {
    let letter = |weight| Primary {
        class: CharClass::Letter,
        weight,
    };

    if let Some(pos) = polish_index(ch) {
        return (letter(pos), 0);
    }

    if ch.is_alphabetic() {
        let mut decomposed = std::iter::once(ch).nfd();
        let base = decomposed.next().unwrap_or(ch);
        let accent = decomposed.next().map_or(0, |mark| mark as u32);
        let weight = polish_index(base).unwrap_or(FOREIGN_LETTER_BASE + base as u32);
        return (letter(weight), accent);
    }

    if ch.is_numeric() {
        let weight = ch.to_digit(10).unwrap_or(10 + ch as u32);
        return (
            Primary {
                class: CharClass::Digit,
                weight,
            },
            0,
        );
    }

    if ch.is_whitespace() {
        return (
            Primary {
                class: CharClass::Space,
                weight: 0,
            },
            0,
        );
    }

    (
        Primary {
            class: CharClass::Punctuation,
            weight: ch as u32,
        },
        0,
    )
}

/// Compare two strings with Polish collation rules.
pub fn compare(a: &str, b: &str) -> Ordering {
    SortKey::new(a).cmp(&SortKey::new(b))
}
