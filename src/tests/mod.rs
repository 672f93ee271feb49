use super::*;

// Shared test helpers
fn opts() -> Options {
    Options::default()
}

fn parse_ok(s: &str) -> Value {
    crate::parse(s, &opts()).unwrap()
}

fn parse_err(s: &str) -> ParseError {
    crate::parse(s, &opts()).unwrap_err()
}

mod errors;
mod logging;
mod numbers;
mod strings_quotes;
mod tolerant_arrays;
mod tolerant_objects;
mod valid_json;
