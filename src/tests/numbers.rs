use super::*;

#[test]
fn integers_stay_integers() {
    let v = parse_ok("[0, 42, -7, 9007199254740993]");
    assert_eq!(v[3].as_i64(), Some(9007199254740993));
}

#[test]
fn integer_overflow_demotes_to_float() {
    let v = parse_ok("99999999999999999999");
    assert!(v.is_f64());
}

#[test]
fn floats() {
    assert_eq!(parse_ok("3.14").as_f64(), Some(3.14));
    assert_eq!(parse_ok("-0.5").as_f64(), Some(-0.5));
}

#[test]
fn exponents() {
    assert_eq!(parse_ok("1e3").as_f64(), Some(1000.0));
    assert_eq!(parse_ok("2.5e-2").as_f64(), Some(0.025));
}

#[test]
fn leading_and_trailing_dot() {
    assert_eq!(parse_ok(".5").as_f64(), Some(0.5));
    assert_eq!(parse_ok("5.").as_f64(), Some(5.0));
}

#[test]
fn incomplete_exponent_keeps_prefix() {
    // "1e" has no full exponent; the longest valid prefix wins
    assert_eq!(parse_ok("[1e]")[0].as_f64(), Some(1.0));
}

#[test]
fn digits_inside_word_run_stay_text() {
    let v = parse_ok("{a1: 2}");
    assert_eq!(v["a1"], 2);
}

#[test]
fn numbers_as_object_values() {
    let v = parse_ok("{a: -3, b: 0.25}");
    assert_eq!(v["a"], -3);
    assert_eq!(v["b"], 0.25);
}
