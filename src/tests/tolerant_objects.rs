use super::*;

#[test]
fn unquoted_keys() {
    let v = parse_ok("{name: \"Tom\", age: 30}");
    assert_eq!(v["name"], "Tom");
    assert_eq!(v["age"], 30);
}

#[test]
fn single_quoted_keys_and_values() {
    let v = parse_ok("{'a': 1, 'b': 'x'}");
    assert_eq!(v["a"], 1);
    assert_eq!(v["b"], "x");
}

#[test]
fn trailing_comma_dropped() {
    let v = parse_ok("{\"a\": 1, \"b\": 2,}");
    assert_eq!(v, serde_json::json!({"a": 1, "b": 2}));
}

#[test]
fn missing_comma_between_pairs() {
    let v = parse_ok("{a: 1 b: 2}");
    assert_eq!(v["a"], 1);
    assert_eq!(v["b"], 2);
}

#[test]
fn missing_colon_before_object_value() {
    let v = parse_ok("{a {\"b\": 1}}");
    assert_eq!(v["a"]["b"], 1);
}

#[test]
fn missing_value_becomes_null() {
    let v = parse_ok("{a:}");
    assert!(v["a"].is_null());
}

#[test]
fn missing_value_before_comma_becomes_null() {
    let v = parse_ok("{a:, b: 2}");
    assert!(v["a"].is_null());
    assert_eq!(v["b"], 2);
}

#[test]
fn unquoted_value_reads_as_string() {
    let v = parse_ok("{a: b c d}");
    assert_eq!(v["a"], "b c d");
}

#[test]
fn bare_pairs_get_wrapped() {
    let v = parse_ok("a: 1, b: 2");
    assert_eq!(v, serde_json::json!({"a": 1, "b": 2}));
}

#[test]
fn unterminated_object_is_closed() {
    let v = parse_ok("{\"a\": 1, \"b\": 2");
    assert_eq!(v, serde_json::json!({"a": 1, "b": 2}));
}

#[test]
fn keyword_values_from_bare_words() {
    let v = parse_ok("{a: true, b: false, c: null}");
    assert_eq!(v["a"], true);
    assert_eq!(v["b"], false);
    assert!(v["c"].is_null());
}

#[test]
fn nested_tolerance() {
    let v = parse_ok("{outer: {inner: [1, 2,], flag: true,},}");
    assert_eq!(v["outer"]["inner"], serde_json::json!([1, 2]));
    assert_eq!(v["outer"]["flag"], true);
}

#[test]
fn quoted_key_unquoted_elsewhere() {
    let v = parse_ok("{\"a\": 1, b: two}");
    assert_eq!(v["a"], 1);
    assert_eq!(v["b"], "two");
}
