use super::*;

fn log_of(s: &str) -> Vec<RecoveryLogEntry> {
    let (_, entries) = crate::parse_with_log(s, &opts()).unwrap();
    entries
}

#[test]
fn clean_input_logs_nothing() {
    assert!(log_of("{\"a\": [1, 2]}").is_empty());
}

#[test]
fn trailing_comma_is_logged() {
    let entries = log_of("{'a': 1,}");
    assert!(entries.iter().any(|e| e.message.contains("trailing comma")));
}

#[test]
fn unterminated_array_is_logged_at_last_token() {
    let entries = log_of("[1, 2");
    let entry = entries
        .iter()
        .find(|e| e.message.contains("unterminated array"))
        .unwrap();
    assert_eq!((entry.row, entry.col), (0, 4));
}

#[test]
fn bare_pairs_wrap_is_logged() {
    let entries = log_of("a: 1");
    assert!(
        entries
            .iter()
            .any(|e| e.message.contains("wrapped bare key-value pairs"))
    );
}

#[test]
fn unquoted_string_recovery_is_logged() {
    let entries = log_of("[a, b]");
    assert!(
        entries
            .iter()
            .any(|e| e.message.contains("unquoted text"))
    );
}

#[test]
fn several_recoveries_accumulate_in_order() {
    let entries = log_of("[1,,2,]");
    let messages: Vec<&str> = entries.iter().map(|e| e.message).collect();
    assert_eq!(
        messages,
        vec!["dropped repeated comma", "dropped trailing comma"]
    );
}

#[test]
fn plain_parse_has_no_log_overhead() {
    // same input succeeds identically through the log-free entry point
    let (with_log, _) = crate::parse_with_log("[1,,2,]", &opts()).unwrap();
    let plain = crate::parse("[1,,2,]", &opts()).unwrap();
    assert_eq!(with_log, plain);
}
