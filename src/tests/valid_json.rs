use super::*;

fn matches_strict(s: &str) {
    let lenient = parse_ok(s);
    let strict: Value = serde_json::from_str(s).unwrap();
    assert_eq!(lenient, strict, "diverged from strict parse on {s:?}");
}

#[test]
fn scalars() {
    matches_strict("true");
    matches_strict("false");
    matches_strict("null");
    matches_strict("42");
    matches_strict("-7");
    matches_strict("3.14");
    matches_strict("\"hello\"");
}

#[test]
fn containers() {
    matches_strict("{}");
    matches_strict("[]");
    matches_strict("[1, 2, 3]");
    matches_strict("[[1, 2], [3]]");
    matches_strict("{\"a\": 1, \"b\": [true, null], \"c\": \"x\"}");
    matches_strict("{\"outer\": {\"inner\": [{\"k\": \"v\"}]}}");
}

#[test]
fn strings_with_escapes() {
    matches_strict("\"line\\nbreak\"");
    matches_strict("\"tab\\there\"");
    matches_strict("\"\\u0041\"");
    matches_strict("\"quote \\\" inside\"");
}

#[test]
fn object_key_order_is_kept() {
    let v = parse_ok("{\"z\": 1, \"a\": 2, \"m\": 3}");
    assert_eq!(serde_json::to_string(&v).unwrap(), "{\"z\":1,\"a\":2,\"m\":3}");
}

#[test]
fn whitespace_everywhere() {
    matches_strict("  {\n  \"a\" :\t[ 1 ,\n 2 ]\n}  ");
}
