//! Slug generation and validation.

use deunicode::deunicode_char;

/// Symbols that read as words in a title and should survive as words in the slug.
const SYMBOL_WORDS: &[(char, &str)] = &[
    ('&', "and"),
    ('|', "or"),
    ('<', "less"),
    ('>', "greater"),
    ('$', "dollar"),
    ('%', "percent"),
    ('♥', "love"),
    ('∞', "infinity"),
];

fn symbol_word(c: char) -> Option<&'static str> {
    SYMBOL_WORDS
        .iter()
        .find(|(symbol, _)| *symbol == c)
        .map(|(_, word)| *word)
}

/// Convert a title to a strict URL-safe slug
///
/// Rules:
/// - Transliterate Unicode to ASCII (`é` → `e`, `ß` → `ss`)
/// - Spell out a few symbols (`&` → `and`, `%` → `percent`)
/// - Treat hyphens as word separators
/// - Drop everything that isn't an ASCII letter, digit, or whitespace
/// - Join words with single hyphens, lowercase
///
/// The result only ever contains `[a-z0-9-]`, never starts or ends with a
/// hyphen, and never contains two hyphens in a row. It may be empty.
///
/// Transliteration covers every script `deunicode` knows, not only accented
/// Latin: a CJK or Cyrillic title yields a romanized slug (`你好` → `ni-hao`)
/// where npm's `slugify` in strict mode would drop those characters and
/// leave nothing.
///
/// # Examples
///
/// ```
/// use postlink_core::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("Rust & Safety"), "rust-and-safety");
/// assert_eq!(slugify("C++ Programming"), "c-programming");
/// ```
pub fn slugify(input: &str) -> String {
    let mut spelled = String::with_capacity(input.len());

    for c in input.chars() {
        let piece = match symbol_word(c) {
            Some(word) => format!(" {word} "),
            None if c.is_ascii() => c.to_string(),
            None => deunicode_char(c).unwrap_or_default().to_string(),
        };

        // Hyphens (and dashes transliterated to them) separate words like spaces
        spelled.extend(piece.chars().filter_map(|ch| match ch {
            '-' => Some(' '),
            ch if ch.is_ascii_alphanumeric() || ch.is_whitespace() => Some(ch),
            _ => None,
        }));
    }

    spelled
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_ascii_lowercase()
}

/// Check whether a string is already a well-formed slug
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Future Post"), "future-post");
    }

    #[test]
    fn test_punctuation_is_dropped() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("C++ Programming"), "c-programming");
        assert_eq!(slugify("Node.js Tips"), "nodejs-tips");
        assert_eq!(slugify("What's new?"), "whats-new");
        assert_eq!(slugify("hello_world"), "helloworld");
    }

    #[test]
    fn test_symbols_are_spelled_out() {
        assert_eq!(slugify("Rust & Safety"), "rust-and-safety");
        assert_eq!(slugify("100% Coverage"), "100-percent-coverage");
        assert_eq!(slugify("a|b"), "a-or-b");
    }

    #[test]
    fn test_transliteration() {
        assert_eq!(slugify("Café Crème"), "cafe-creme");
        assert_eq!(slugify("naïve"), "naive");
        assert_eq!(slugify("Straße"), "strasse");
    }

    #[test]
    fn test_non_latin_scripts_are_romanized() {
        for title in ["你好", "Привет мир", "日本語のタイトル"] {
            let slug = slugify(title);
            assert!(is_valid_slug(&slug), "{title:?} -> {slug:?}");
        }
        assert_eq!(slugify("Привет"), "privet");
    }

    #[test]
    fn test_separators_collapse() {
        assert_eq!(slugify("Hello    World"), "hello-world");
        assert_eq!(slugify("Hello - World"), "hello-world");
        assert_eq!(slugify("Hello—World"), "hello-world");
        assert_eq!(slugify("tabs\tand\nnewlines"), "tabs-and-newlines");
    }

    #[test]
    fn test_leading_trailing_hyphens() {
        assert_eq!(slugify("  Hello World  "), "hello-world");
        assert_eq!(slugify("-Leading Hyphen"), "leading-hyphen");
        assert_eq!(slugify("Trailing Hyphen-"), "trailing-hyphen");
    }

    #[test]
    fn test_mixed_case() {
        assert_eq!(slugify("CamelCase"), "camelcase");
        assert_eq!(slugify("UPPERCASE 2024"), "uppercase-2024");
    }

    #[test]
    fn test_empty_and_special_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_output_is_always_valid_or_empty() {
        for title in ["Hello, World!", "  --a--b--  ", "Ünïcödé ✓ 42", "x & y | z"] {
            let slug = slugify(title);
            assert!(slug.is_empty() || is_valid_slug(&slug), "{title:?} -> {slug:?}");
        }
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("hello-world-2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-hello"));
        assert!(!is_valid_slug("hello--world"));
        assert!(!is_valid_slug("Hello"));
    }
}
