//! Extracts translation keys from template and controller source.
//!
//! Matching is purely textual: anything that looks like a helper call with a
//! string literal as its first argument yields a key, wherever it appears.

mod patterns;

use std::collections::BTreeSet;

pub use patterns::{
    KeyPattern,
    load_patterns,
};

/// Distinct keys found by extraction, in byte order.
pub type KeySet = BTreeSet<String>;

/// Extracts every translation key from `content`.
///
/// Non-matching content yields an empty set.
///
/// # Examples
/// ```
/// use lang_sync::extractor::extract_keys;
///
/// let keys = extract_keys("<h1>{{ __('hello.world') }}</h1>");
/// assert!(keys.contains("hello.world"));
/// ```
#[must_use]
pub fn extract_keys(content: &str) -> KeySet {
    let mut keys = KeySet::new();
    extract_into(content, &mut keys);
    keys
}

/// Extracts every translation key from `content` into `keys`.
///
/// Returns the number of matches, including ones already present in `keys`.
pub fn extract_into(content: &str, keys: &mut KeySet) -> usize {
    let mut matches = 0;

    for pattern in load_patterns() {
        for captures in pattern.regex.captures_iter(content) {
            let key = if let Some(single) = captures.get(1) {
                unescape(single.as_str(), '\'')
            } else if let Some(double) = captures.get(2) {
                unescape(double.as_str(), '"')
            } else {
                continue;
            };

            if key.is_empty() {
                continue;
            }

            tracing::trace!(pattern = pattern.name, key = %key, "Matched translation key");
            matches += 1;
            keys.insert(key);
        }
    }

    matches
}

/// Resolves `\<quote>` and `\\` inside a quoted literal.
///
/// Other backslash sequences are kept verbatim.
fn unescape(raw: &str, quote: char) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }

    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(next) if next == quote || next == '\\' => result.push(next),
            Some(next) => {
                result.push('\\');
                result.push(next);
            }
            None => result.push('\\'),
        }
    }
    result
}
