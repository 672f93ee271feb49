use thiserror::Error;

/// The closed set of fatal conditions the engine can report.
///
/// Recovery from structural irregularities happens inside the grammar via its
/// own productions; these kinds are only raised once every applicable
/// production (recovery included) has been exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The tokenizer found no applicable rule at a position, after all
    /// candidate rejections.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
    /// The grammar ran out of productions mid-structure and could not collapse
    /// the stack to a single node.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A colon-joined value had no key, value, or value-list to attach to.
    /// This is the one recovery site that fails rather than guesses.
    #[error("got a :value that can't be handled")]
    UnhandledColonValue,
    /// A `}` matched no closing production.
    #[error("found a }} that can't be handled")]
    UnhandledCloseBrace,
}

/// A fatal parse error with its source location.
///
/// `row`/`col` are 0-based and counted in characters; `offset` is the byte
/// offset into the input and is only known for tokenizer-level errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {row}:{col}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub row: usize,
    pub col: usize,
    pub offset: Option<usize>,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, row: usize, col: usize) -> Self {
        Self {
            kind,
            row,
            col,
            offset: None,
        }
    }

    pub(crate) fn at_offset(kind: ParseErrorKind, row: usize, col: usize, offset: usize) -> Self {
        Self {
            kind,
            row,
            col,
            offset: Some(offset),
        }
    }
}
