use super::*;

#[test]
fn unterminated_array_is_closed() {
    let v = parse_ok("[1, 2, 3");
    assert_eq!(v, serde_json::json!([1, 2, 3]));
}

#[test]
fn bare_words_become_strings() {
    let v = parse_ok("[a,b]");
    assert_eq!(v, serde_json::json!(["a", "b"]));
}

#[test]
fn single_bare_word() {
    let v = parse_ok("[hello]");
    assert_eq!(v, serde_json::json!(["hello"]));
}

#[test]
fn repeated_commas_collapse() {
    let v = parse_ok("[1,,2,,,3]");
    assert_eq!(v, serde_json::json!([1, 2, 3]));
}

#[test]
fn trailing_comma_dropped() {
    let v = parse_ok("[1, 2,]");
    assert_eq!(v, serde_json::json!([1, 2]));
}

#[test]
fn trailing_comma_after_single_value() {
    let v = parse_ok("[1,]");
    assert_eq!(v, serde_json::json!([1]));
}

#[test]
fn dangling_word_before_close() {
    let v = parse_ok("[1, two");
    assert_eq!(v, serde_json::json!([1, "two"]));
}

#[test]
fn objects_in_array() {
    let v = parse_ok("[{a: 1}, {b: 2},]");
    assert_eq!(v, serde_json::json!([{"a": 1}, {"b": 2}]));
}

#[test]
fn nested_arrays() {
    let v = parse_ok("[[1], [2, 3]]");
    assert_eq!(v, serde_json::json!([[1], [2, 3]]));
}

#[test]
fn array_of_unquoted_mixed() {
    let v = parse_ok("[a, 1, true, null]");
    assert_eq!(v, serde_json::json!(["a", 1, true, null]));
}
