//! Fixed regular expressions for translation helper calls.

use std::sync::OnceLock;

use regex::Regex;

/// Single- or double-quoted literal as the first argument of a call.
///
/// Group 1 captures a single-quoted body, group 2 a double-quoted one. The
/// literal must be followed by `)` or by `,` (replacement parameters).
macro_rules! quoted_first_arg {
    ($callee:literal) => {
        concat!(
            $callee,
            r#"\(\s*(?:'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)")\s*[,)]"#
        )
    };
}

struct PatternSource {
    content: &'static str,
    name: &'static str,
}

const PATTERN_SOURCES: &[PatternSource] = &[
    // `{{ __('key') }}`, `{!! __("key") !!}`, `__('key', [...])`
    PatternSource { content: quoted_first_arg!(r"\b__"), name: "helper" },
    PatternSource { content: quoted_first_arg!(r"@lang"), name: "lang-directive" },
    PatternSource { content: quoted_first_arg!(r"\bLang::get"), name: "lang-facade" },
];

/// A compiled key pattern.
#[derive(Debug)]
pub struct KeyPattern {
    pub name: &'static str,
    pub regex: Regex,
}

static PATTERN_CACHE: OnceLock<Vec<KeyPattern>> = OnceLock::new();

fn compile_patterns() -> Vec<KeyPattern> {
    PATTERN_SOURCES
        .iter()
        .filter_map(|source| {
            Regex::new(source.content)
                .map(|regex| KeyPattern { name: source.name, regex })
                .map_err(|e| tracing::error!("Failed to compile {} pattern: {e}", source.name))
                .ok()
        })
        .collect()
}

/// Loads the cached key patterns. Patterns are compiled once per process.
#[must_use]
pub fn load_patterns() -> &'static [KeyPattern] {
    PATTERN_CACHE.get_or_init(compile_patterns)
}
