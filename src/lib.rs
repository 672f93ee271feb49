//! Lenient parsing for "almost JSON": text that was meant to be JSON but
//! arrives with single quotes, unquoted keys, missing commas or colons,
//! trailing separators, or an unterminated container. The engine tokenizes
//! with an ordered rule set, parses with a tolerant shift-reduce grammar
//! whose production table includes explicit recovery productions, and
//! compiles the result into a [`serde_json::Value`].
//!
//! ```
//! let opts = json_lenient::Options::default();
//! let value = json_lenient::parse("{name: 'Tom', age: 30,}", &opts).unwrap();
//! assert_eq!(value["name"], "Tom");
//! assert_eq!(value["age"], 30);
//! ```
//!
//! Strict JSON parses to the same values `serde_json` would produce, modulo
//! number width (integers are `i64`, everything else is `f64`). By default a
//! lenient failure falls back to one strict `serde_json` attempt before the
//! error is returned; see [`Options::fallback_to_strict`].

pub mod cli;
mod error;
mod escape;
mod options;
mod parser;
pub mod tokenizer;

pub use error::{ParseError, ParseErrorKind};
pub use options::Options;
pub use parser::RecoveryLogEntry;
pub use serde_json::Value;

/// Parse `text` leniently into a [`Value`].
pub fn parse(text: &str, opts: &Options) -> Result<Value, ParseError> {
    let mut logger = parser::Logger::new(false);
    run(text, opts, &mut logger)
}

/// Like [`parse`], but also returns a log of every recovery the grammar
/// performed, each with the position of the token that triggered it.
pub fn parse_with_log(
    text: &str,
    opts: &Options,
) -> Result<(Value, Vec<RecoveryLogEntry>), ParseError> {
    let mut logger = parser::Logger::new(true);
    let value = run(text, opts, &mut logger)?;
    Ok((value, logger.into_entries()))
}

fn run(text: &str, opts: &Options, logger: &mut parser::Logger) -> Result<Value, ParseError> {
    match parser::parse_to_value(text, opts, logger) {
        Ok(value) => Ok(value),
        Err(err) if opts.fallback_to_strict => match serde_json::from_str::<Value>(text) {
            Ok(value) => {
                // the lenient grammar is meant to be a superset of JSON
                log::warn!(
                    "lenient parse failed ({err}) on input that strict JSON accepts; \
                     please report this input as a grammar bug"
                );
                Ok(value)
            }
            Err(_) => Err(err),
        },
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests;
