//! Character classifiers used by the recognizers.

/// ASCII whitespace as JSON knows it.
#[inline]
pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Unicode whitespace that is normalized to a single ASCII space on output:
/// NBSP, the en/em space family, line/paragraph separators, narrow no-break,
/// medium mathematical space, ideographic space.
#[inline]
pub(crate) fn is_special_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{00A0}' | '\u{2000}'..='\u{200A}' | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}'
            | '\u{3000}'
    )
}

#[inline]
pub(crate) fn is_double_quote_like(c: char) -> bool {
    matches!(
        c,
        '"' | '\u{201C}' | '\u{201D}' | '\u{201F}' | '\u{2033}' | '\u{2036}'
    )
}

#[inline]
pub(crate) fn is_single_quote_like(c: char) -> bool {
    matches!(
        c,
        '\'' | '\u{2018}' | '\u{2019}' | '\u{201B}' | '\u{2032}' | '\u{2035}' | '\u{0060}'
            | '\u{00B4}'
    )
}

#[inline]
pub(crate) fn is_quote(c: char) -> bool {
    is_double_quote_like(c) || is_single_quote_like(c)
}

/// Characters that terminate unquoted runs and signal structural boundaries.
/// `/` is intentionally absent so regex-like tokens keep their slashes.
#[inline]
pub(crate) fn is_delimiter(c: char) -> bool {
    matches!(c, ',' | ':' | '[' | ']' | '{' | '}' | '(' | ')' | '\n' | '+') || is_quote(c)
}

// Must accept every `is_function_name_char_start` character: `$cb(...)`
// starts a value.
#[inline]
pub(crate) fn is_start_of_value(c: char) -> bool {
    matches!(c, '[' | '{' | '-' | '_' | '$') || c.is_ascii_alphanumeric() || is_quote(c)
}

#[inline]
pub(crate) fn is_control_character(c: char) -> bool {
    c < '\u{20}'
}

/// The JSON escape for a named control character, if it has one.
#[inline]
pub(crate) fn control_escape(c: char) -> Option<&'static str> {
    match c {
        '\u{08}' => Some("\\b"),
        '\u{0C}' => Some("\\f"),
        '\n' => Some("\\n"),
        '\r' => Some("\\r"),
        '\t' => Some("\\t"),
        _ => None,
    }
}

#[inline]
pub(crate) fn is_function_name_char_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

#[inline]
pub(crate) fn is_function_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// MongoDB shell wrappers recognized in addition to generic JSONP callbacks.
const FUNCTION_NAMES: &[&str] = &[
    "NumberLong",
    "NumberInt",
    "NumberDecimal",
    "NumberDouble",
    "ISODate",
    "Date",
    "ObjectId",
    "BinData",
    "UUID",
    "Timestamp",
    "RegExp",
];

/// A callable wrapper name: one of the MongoDB shell constructors or any
/// plain identifier (JSONP callbacks are arbitrary identifiers).
pub(crate) fn is_function_name(name: &str) -> bool {
    if FUNCTION_NAMES.contains(&name) {
        return true;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_function_name_char_start(first) => chars.all(is_function_name_char),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiters_exclude_slash() {
        assert!(is_delimiter(','));
        assert!(is_delimiter('\n'));
        assert!(is_delimiter('\u{2019}'));
        assert!(!is_delimiter('/'));
        assert!(!is_delimiter(' '));
    }

    #[test]
    fn value_starts_include_identifier_starts() {
        for c in ['{', '[', '-', '_', '$', 'a', '7', '"', '\u{2018}'] {
            assert!(is_start_of_value(c));
        }
        assert!(!is_start_of_value('~'));
        assert!(!is_start_of_value(')'));
    }

    #[test]
    fn function_names_accept_mongo_and_identifiers() {
        assert!(is_function_name("NumberLong"));
        assert!(is_function_name("callback"));
        assert!(is_function_name("_cb$2"));
        assert!(!is_function_name("3cb"));
        assert!(!is_function_name(""));
    }

    #[test]
    fn special_whitespace_members() {
        for c in ['\u{00A0}', '\u{2003}', '\u{2028}', '\u{3000}'] {
            assert!(is_special_whitespace(c));
            assert!(!is_whitespace(c));
        }
    }
}
