use super::*;

#[test]
fn already_valid_json_is_untouched() {
    for s in [
        "{\"a\": 1}",
        "[1, 2, 3]",
        "\"hello\"",
        "true",
        "null",
        "-12.5e3",
        "{\"nested\": {\"array\": [1, 2], \"s\": \"x\"}}",
    ] {
        assert_eq!(repair(s).unwrap(), s);
    }
}

#[test]
fn unquoted_key_and_single_quotes() {
    let out = repair("{name: 'John'}").unwrap();
    assert_eq!(out, "{\"name\": \"John\"}");
}

#[test]
fn trailing_comma_in_array() {
    let out = repair("[1, 2, 3,]").unwrap();
    assert_eq!(out, "[1, 2, 3]");
}

#[test]
fn trailing_comma_after_root_value() {
    let out = repair("[1, 2, 3],").unwrap();
    assert_eq!(out, "[1, 2, 3]");
}

#[test]
fn truncated_object_is_closed() {
    let out = repair("{\"msg\": \"hello").unwrap();
    assert_eq!(out, "{\"msg\": \"hello\"}");
}

#[test]
fn python_keywords_normalize() {
    let out = repair("[True, False, None, true]").unwrap();
    assert_eq!(out, "[true, false, null, true]");
}

#[test]
fn undefined_becomes_null() {
    let out = repair("{a: undefined}").unwrap();
    assert_eq!(out, "{\"a\": null}");
}

#[test]
fn bare_words_are_quoted() {
    let out = repair("[hello, world]").unwrap();
    assert_eq!(out, "[\"hello\", \"world\"]");
}

#[test]
fn stray_closers_after_root_are_dropped() {
    let out = repair("{\"a\": 1}}}").unwrap();
    assert_eq!(out, "{\"a\": 1}");
    let out = repair("[1, 2]]").unwrap();
    assert_eq!(out, "[1, 2]");
}

#[test]
fn unclosed_containers_are_closed() {
    assert_eq!(repair("{\"a\": 1").unwrap(), "{\"a\": 1}");
    assert_eq!(repair("[1, 2").unwrap(), "[1, 2]");
    assert_eq!(repair("[[1, 2").unwrap(), "[[1, 2]]");
}

#[test]
fn repair_log_reports_changes() {
    let (out, log) = repair_with_log("{ok: True, bad: undefined,}").unwrap();
    assert_strict(&out);
    assert!(log.iter().any(|e| e.message.contains("python")));
    assert!(log.iter().any(|e| e.message.contains("undefined")));
    assert!(log.iter().any(|e| e.message.contains("unquoted")));
}

#[test]
fn deeply_nested_input_survives() {
    let mut s = String::new();
    for _ in 0..200 {
        s.push('[');
    }
    s.push('1');
    let out = repair(&s).unwrap();
    let v = assert_strict(&out);
    let mut v = &v;
    let mut depth = 0;
    while let Some(arr) = v.as_array() {
        v = &arr[0];
        depth += 1;
    }
    assert_eq!(depth, 200);
    assert_eq!(v, &serde_json::json!(1));
}

#[cfg(feature = "serde")]
#[test]
fn repair_to_value_convenience() {
    let v = repair_to_value("{name: 'John', age: 30}").unwrap();
    assert_eq!(v["name"], "John");
    assert_eq!(v["age"], 30);
}

#[test]
fn repair_to_writer_outputs_bytes() {
    let mut out = Vec::new();
    repair_to_writer("{a:1}", &mut out).unwrap();
    assert_eq!(out, b"{\"a\":1}");
}
