use super::*;

#[test]
fn plain_numbers_are_untouched() {
    for s in ["0", "-1", "42", "3.14", "-2.5e-3", "1E+10", "0.001"] {
        assert_eq!(repair(s).unwrap(), s);
    }
}

#[test]
fn truncated_numbers_are_completed_with_zero() {
    assert_eq!(repair("[1.]").unwrap(), "[1.0]");
    assert_eq!(repair("[\"x\", 1.]").unwrap(), "[\"x\", 1.0]");
    assert_eq!(repair("[2e]").unwrap(), "[2e0]");
    assert_eq!(repair("[2e+]").unwrap(), "[2e+0]");
    assert_eq!(repair("[-]").unwrap(), "[-0]");
    assert_eq!(repair("1.").unwrap(), "1.0");
}

#[test]
fn leading_zero_numbers_become_strings() {
    assert_eq!(repair("{\"n\": 00789}").unwrap(), "{\"n\": \"00789\"}");
    assert_eq!(repair("[0123]").unwrap(), "[\"0123\"]");
    assert_eq!(repair("[-0123]").unwrap(), "[\"-0123\"]");
    // A lone zero or a fraction keeps its numeric form.
    assert_eq!(repair("[0, 0.5]").unwrap(), "[0, 0.5]");
}

#[test]
fn number_glued_to_letters_is_a_string() {
    assert_eq!(repair("[123abc]").unwrap(), "[\"123abc\"]");
    assert_eq!(repair("[1e2x]").unwrap(), "[\"1e2x\"]");
}

#[test]
fn fraction_without_integer_part_is_a_string() {
    assert_eq!(repair("[.5]").unwrap(), "[\".5\"]");
    assert_eq!(repair("[-.5]").unwrap(), "[\"-.5\"]");
}

#[test]
fn slashes_keep_number_like_tokens_together() {
    assert_eq!(repair("[1/3]").unwrap(), "[\"1/3\"]");
}
