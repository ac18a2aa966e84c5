use super::*;
use crate::error::RepairErrorKind;

#[test]
fn empty_input_is_unexpected_end() {
    let err = repair("").unwrap_err();
    assert_eq!(err.kind, RepairErrorKind::UnexpectedEnd);
    assert_eq!(err.position, 0);
}

#[test]
fn whitespace_only_input_is_unexpected_end() {
    let err = repair("  \n\t ").unwrap_err();
    assert_eq!(err.kind, RepairErrorKind::UnexpectedEnd);
    assert_eq!(err.position, 5);
}

#[test]
fn comment_only_input_is_unexpected_end() {
    let err = repair("/* nothing here */").unwrap_err();
    assert_eq!(err.kind, RepairErrorKind::UnexpectedEnd);
}

#[test]
fn garbage_after_root_value() {
    let err = repair("{\"a\":1} xyz").unwrap_err();
    assert_eq!(err.kind, RepairErrorKind::UnexpectedCharacter('x'));
    assert_eq!(err.position, 8);
}

#[test]
fn double_comma_in_object_wants_a_key() {
    let err = repair("{\"a\":1,,\"b\":2}").unwrap_err();
    assert_eq!(err.kind, RepairErrorKind::ObjectKeyExpected);
}

#[test]
fn colon_expected_when_nothing_value_like_follows() {
    let err = repair("{\"a\" ~}").unwrap_err();
    assert_eq!(err.kind, RepairErrorKind::ColonExpected);
}

#[test]
fn unnamed_control_character_in_string() {
    let err = repair("\"ab\u{01}cd\"").unwrap_err();
    assert_eq!(err.kind, RepairErrorKind::InvalidCharacter('\u{01}'));
    assert_eq!(err.position, 3);
}

#[test]
fn short_unicode_escape_mid_input() {
    let err = repair("\"\\u26\" ").unwrap_err();
    assert_eq!(err.kind, RepairErrorKind::InvalidUnicodeCharacter);
    assert_eq!(err.position, 1);
}

#[test]
fn errors_render_with_position() {
    let err = repair("").unwrap_err();
    assert_eq!(err.to_string(), "unexpected end of json input at position 0");
}
