use super::*;

#[test]
fn single_quoted_strings() {
    let v = parse_ok("'hi'");
    assert_eq!(v, "hi");
}

#[test]
fn doubled_single_quote_escape() {
    let v = parse_ok("{'key': 'it''s here'}");
    assert_eq!(v["key"], "it's here");
}

#[test]
fn unterminated_string_runs_to_end() {
    let v = parse_ok("{\"a\": \"oops");
    assert_eq!(v["a"], "oops");
}

#[test]
fn stray_quotes_inside_string_are_requoted() {
    let v = parse_ok("[\"lorem \"ipsum\" sic\"]");
    assert_eq!(v, serde_json::json!(["lorem \"ipsum\" sic"]));
}

#[test]
fn stray_quotes_in_object_value() {
    let v = parse_ok("{\"a\": \"b \"c\" d\"}");
    assert_eq!(v["a"], "b \"c\" d");
}

#[test]
fn quoted_text_joins_unquoted_prefix() {
    let v = parse_ok("{a: oops\"b\"}");
    assert_eq!(v["a"], "oopsb");
}

#[test]
fn common_escapes_decode() {
    let v = parse_ok("\"a\\nb\\tc\\\\d\"");
    assert_eq!(v, "a\nb\tc\\d");
}

#[test]
fn unicode_escapes_decode() {
    assert_eq!(parse_ok("\"\\u0041\""), "A");
    assert_eq!(parse_ok("\"\\u{1F600}\""), "\u{1F600}");
}

#[test]
fn surrogate_pairs_combine() {
    assert_eq!(parse_ok("\"\\ud83d\\ude00\""), "\u{1F600}");
}

#[test]
fn lone_surrogate_is_replaced() {
    assert_eq!(parse_ok("\"\\ud83dx\""), "\u{FFFD}x");
}

#[test]
fn hex_and_octal_escapes_decode() {
    assert_eq!(parse_ok("\"\\x41\""), "A");
    assert_eq!(parse_ok("\"\\101\""), "A");
}

#[test]
fn unknown_escape_is_kept() {
    assert_eq!(parse_ok("\"\\q\""), "\\q");
}

#[test]
fn escaped_slash_decodes() {
    assert_eq!(parse_ok("\"a\\/b\""), "a/b");
}

#[test]
fn single_quotes_with_backslash_escape() {
    assert_eq!(parse_ok("'don\\'t'"), "don't");
}
