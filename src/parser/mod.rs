//! The tolerant parser: shift-reduce loop over the token stream, recovery
//! logging, and top-level structural repairs that sit outside the production
//! table (closing an unterminated container, wrapping bare key-value pairs).

mod compile;
mod node;
mod reduce;
pub(crate) mod tokens;

use crate::error::{ParseError, ParseErrorKind};
use crate::options::Options;
use node::Node;
use serde_json::Value;
use tokens::{Pos, Token, TokenKind};

/// One recovery the grammar performed while accepting irregular input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryLogEntry {
    /// What was repaired.
    pub message: &'static str,
    /// 0-based row of the token being shifted when the recovery fired.
    pub row: usize,
    /// 0-based column, counted in characters.
    pub col: usize,
}

/// Collects recovery entries and tracks the position of the token currently
/// being shifted, which doubles as the error location for failures that have
/// no token of their own.
#[derive(Debug, Default)]
pub(crate) struct Logger {
    enable: bool,
    row: usize,
    col: usize,
    entries: Vec<RecoveryLogEntry>,
}

impl Logger {
    pub(crate) fn new(enable: bool) -> Self {
        Self {
            enable,
            ..Self::default()
        }
    }

    pub(crate) fn at(&mut self, pos: Pos) {
        self.row = pos.row;
        self.col = pos.col;
    }

    pub(crate) fn here(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub(crate) fn log(&mut self, message: &'static str) {
        if self.enable {
            self.entries.push(RecoveryLogEntry {
                message,
                row: self.row,
                col: self.col,
            });
        }
    }

    pub(crate) fn into_entries(self) -> Vec<RecoveryLogEntry> {
        self.entries
    }
}

/// Run the lenient engine over `text`.
pub(crate) fn parse_to_value(
    text: &str,
    opts: &Options,
    log: &mut Logger,
) -> Result<Value, ParseError> {
    let mut tokens = tokens::scan_all(text)?;
    let Some(last) = tokens.last() else {
        return Err(ParseError::new(ParseErrorKind::UnexpectedEndOfInput, 0, 0));
    };
    let last_pos = last.pos;

    // close a container the input opened but never closed
    let opens_array = matches!(tokens.first().map(|t| &t.kind), Some(TokenKind::Lbracket));
    let opens_object = matches!(tokens.first().map(|t| &t.kind), Some(TokenKind::Lbrace));
    let closes_array = matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Rbracket));
    let closes_object = matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Rbrace));
    if opens_array && !closes_array {
        log.at(last_pos);
        log.log("closed unterminated array");
        tokens.push(Token {
            kind: TokenKind::Rbracket,
            pos: last_pos,
        });
    } else if opens_object && !closes_object {
        log.at(last_pos);
        log.log("closed unterminated object");
        tokens.push(Token {
            kind: TokenKind::Rbrace,
            pos: last_pos,
        });
    }

    let mut stack: Vec<Node> = Vec::new();
    for tok in tokens {
        log.at(tok.pos);
        stack.push(Node::from_token(tok));
        reduce::reduce_to_fixpoint(&mut stack, 0, opts.max_subreduce_depth, log)?;
    }

    // bare key-value pairs with no surrounding braces
    if stack.len() == 1 && matches!(stack[0], Node::Kvlist { .. }) {
        log.log("wrapped bare key-value pairs in an object");
        if let Some(Node::Kvlist { pairs }) = stack.pop() {
            stack.push(Node::Obj {
                pairs: Some(pairs),
                pos: last_pos,
            });
        }
    }

    if stack.len() != 1 {
        return Err(ParseError::new(
            ParseErrorKind::UnexpectedEndOfInput,
            last_pos.row,
            last_pos.col,
        ));
    }
    let Some(root) = stack.pop() else {
        return Err(ParseError::new(
            ParseErrorKind::UnexpectedEndOfInput,
            last_pos.row,
            last_pos.col,
        ));
    };
    compile::compile_root(root, opts.preserve_duplicate_keys)
}
