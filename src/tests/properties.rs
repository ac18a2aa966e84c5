use super::*;

const CASES: &[&str] = &[
    "{name: 'John'}",
    "[1, 2, 3,]",
    "{\"a\": 1}\n{\"a\": 2}",
    "{\"msg\": \"hello",
    "/* c */ {\"x\": NumberLong(\"42\")}",
    "callback({\"ok\":True});",
    "\"a\" + \"b\"",
    "{\"n\": 00789}",
    "[\"x\", 1.]",
    "{a:1, b:[True, None], c: 'x' \"d\": undefined}",
    "[\u{201C}curly\u{201D}, 'single', `tick\u{00B4}]",
    "{\"a\":\u{00A0}1,\u{3000}\"b\": 2}",
    "[1 2 {\"x\" 3}]",
    "{\"partial\": \"trunc",
    "[[[[1], 2], 3]",
];

#[test]
fn outputs_satisfy_a_strict_parser() {
    for case in CASES {
        let out = repair(case).unwrap();
        assert_strict(&out);
    }
}

#[test]
fn repair_is_idempotent() {
    for case in CASES {
        let once = repair(case).unwrap();
        let twice = repair(&once).unwrap();
        assert_eq!(once, twice, "not idempotent for {case:?}");
    }
}

#[test]
fn outputs_carry_no_leniencies() {
    for case in CASES {
        let out = repair(case).unwrap();
        assert!(!out.contains("/*") && !out.contains("//"), "{out}");
        assert!(!out.contains('\''), "{out}");
        assert!(
            !out.contains("True") && !out.contains("False") && !out.contains("None"),
            "{out}"
        );
        assert!(!out.chars().any(crate::classify::is_special_whitespace), "{out}");
    }
}

#[test]
fn valid_json_round_trips_through_repair() {
    let values = [
        serde_json::json!(null),
        serde_json::json!([1, 2.5, -3e7, "text", true]),
        serde_json::json!({"nested": {"deep": [{"a": "b"}]}, "empty": {}, "list": []}),
        serde_json::json!({"escape": "line\nbreak \"quoted\" \\ tab\t"}),
    ];
    for v in values {
        let serialized = serde_json::to_string(&v).unwrap();
        let repaired = repair(&serialized).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&repaired).unwrap();
        assert_eq!(parsed, v);
    }
}
