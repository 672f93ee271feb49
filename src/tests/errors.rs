use super::*;

#[test]
fn empty_input() {
    let err = parse_err("");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEndOfInput);
    assert_eq!((err.row, err.col), (0, 0));
}

#[test]
fn whitespace_only_input() {
    let err = parse_err("  \n\t ");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEndOfInput);
}

#[test]
fn lone_colon() {
    let err = parse_err(":");
    assert_eq!(err.kind, ParseErrorKind::UnhandledColonValue);
    assert_eq!((err.row, err.col), (0, 0));
}

#[test]
fn colon_value_with_nothing_to_attach_to() {
    let err = parse_err(":5");
    assert_eq!(err.kind, ParseErrorKind::UnhandledColonValue);
}

#[test]
fn lone_close_brace() {
    let err = parse_err("}");
    assert_eq!(err.kind, ParseErrorKind::UnhandledCloseBrace);
    assert_eq!((err.row, err.col), (0, 0));
}

#[test]
fn quoted_key_without_colon_or_value_shape() {
    let err = parse_err("{\"a\" 1}");
    assert_eq!(err.kind, ParseErrorKind::UnhandledCloseBrace);
}

#[test]
fn adjacent_values_cannot_join() {
    let err = parse_err("1 2");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEndOfInput);
}

#[test]
fn error_position_tracks_rows() {
    let err = parse_err("{\n\"a\": 1,\n:2}");
    assert_eq!(err.kind, ParseErrorKind::UnhandledColonValue);
    assert_eq!(err.row, 2);
    assert_eq!(err.col, 1);
}

#[test]
fn disabling_fallback_returns_lenient_error() {
    let opts = Options {
        fallback_to_strict: false,
        ..Options::default()
    };
    let err = crate::parse("{\"a\" 1}", &opts).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnhandledCloseBrace);
}

#[test]
fn subreduce_depth_cap_fails_the_parse() {
    let opts = Options {
        max_subreduce_depth: 0,
        fallback_to_strict: false,
        ..Options::default()
    };
    // the bare words force a re-reduction, which the cap refuses
    let err = crate::parse("[a, b]", &opts).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEndOfInput);
    // a generous cap parses the same input fine
    let v = crate::parse("[a, b]", &Options::default()).unwrap();
    assert_eq!(v, serde_json::json!(["a", "b"]));
}

#[test]
fn error_display_names_kind_and_location() {
    let err = parse_err(":");
    let msg = err.to_string();
    assert!(msg.contains("0:0"), "missing location in {msg:?}");
    assert!(msg.contains(":value"), "missing kind in {msg:?}");
}
