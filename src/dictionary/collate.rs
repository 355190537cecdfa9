//! Case- and accent-insensitive key ordering.
//!
//! Approximates root collation at base strength: whitespace, then punctuation
//! and symbols, then digits, then letters, ignoring case and diacritics.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Folds a key to its base letters for comparison.
///
/// Decomposes to NFD, drops combining marks and lowercases, so `"Émile"`,
/// `"emile"` and `"EMILE"` share one collation key. Letters without a
/// decomposition are spelled out (`ß` → `ss`, `ø` → `o`).
#[must_use]
pub fn collation_key(text: &str) -> String {
    let mut key = String::with_capacity(text.len());
    for c in text.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase) {
        match base_letters(c) {
            Some(letters) => key.push_str(letters),
            None => key.push(c),
        }
    }
    key
}

/// Base letters of a lowercase letter that NFD leaves intact.
const fn base_letters(c: char) -> Option<&'static str> {
    match c {
        'ß' => Some("ss"),
        'æ' => Some("ae"),
        'œ' => Some("oe"),
        'ø' => Some("o"),
        'ł' => Some("l"),
        'đ' | 'ð' => Some("d"),
        'þ' => Some("th"),
        'ı' => Some("i"),
        _ => None,
    }
}

/// Primary weight of a folded character: its group first, then its code point.
fn weight(c: char) -> (u8, char) {
    let group = if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        1
    };
    (group, c)
}

/// Compares two keys at base strength.
///
/// Keys that differ only by case or accents compare equal, so a stable sort
/// keeps their existing relative order.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    let (a, b) = (collation_key(a), collation_key(b));
    a.chars().map(weight).cmp(b.chars().map(weight))
}
