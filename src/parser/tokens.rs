//! The concrete JSON rule set registered into the generic scanning engine,
//! plus the token type it produces.

use crate::error::{ParseError, ParseErrorKind};
use crate::escape;
use crate::tokenizer::{RuleOutcome, RuleSet, Scan, ScanError, Tokenizer};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// 0-based row/column of a match start, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Pos {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuoteStyle {
    Double,
    Single,
}

impl QuoteStyle {
    pub(crate) fn quote_char(self) -> char {
        match self {
            QuoteStyle::Double => '"',
            QuoteStyle::Single => '\'',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Colon,
    Comma,
    Lbrace,
    Rbrace,
    Lbracket,
    Rbracket,
    Dot,
    Str { text: String, style: QuoteStyle },
    Int(i64),
    Float(f64),
    Word(String),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub pos: Pos,
}

/// Row/column bookkeeping shared by every rule action.
#[derive(Debug, Default)]
pub(crate) struct LexCtx {
    pub row: usize,
    pub col: usize,
}

impl LexCtx {
    fn advance(&mut self, lexeme: &str) {
        for ch in lexeme.chars() {
            if ch == '\n' {
                self.row += 1;
                self.col = 0;
            } else {
                self.col += 1;
            }
        }
    }
}

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("hand-written token pattern must compile")
}

fn lexeme<'t>(caps: &Captures<'t>) -> &'t str {
    caps.get(0).map_or("", |m| m.as_str())
}

fn group<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}

/// Record the match-start position and advance row/column over the lexeme.
fn accept(scan: &mut Scan<'_, LexCtx>, caps: &Captures<'_>) -> Pos {
    let pos = Pos {
        row: scan.ctx.row,
        col: scan.ctx.col,
    };
    scan.ctx.advance(lexeme(caps));
    pos
}

fn token(kind: TokenKind, pos: Pos) -> RuleOutcome<Token> {
    RuleOutcome::Token(Token { kind, pos })
}

/// Parse the longest prefix of `s` that is a valid float.
fn float_prefix(s: &str) -> Option<f64> {
    for end in (1..=s.len()).rev() {
        if !s.is_char_boundary(end) {
            continue;
        }
        if let Ok(v) = s[..end].parse::<f64>() {
            return Some(v);
        }
    }
    None
}

fn float_action(scan: &mut Scan<'_, LexCtx>, caps: &Captures<'_>) -> RuleOutcome<Token> {
    match float_prefix(lexeme(caps).trim_end()) {
        Some(v) => {
            let pos = accept(scan, caps);
            token(TokenKind::Float(v), pos)
        }
        // no numeric prefix (a bare `.`): let the dot rule claim it
        None => RuleOutcome::Reject,
    }
}

fn rules() -> RuleSet<LexCtx, Token> {
    let mut set = RuleSet::new();

    // Double-quoted string; an unterminated quote closes implicitly at end
    // of input.
    set.rule(re(r#""((?:\\.|[^"])*?)($|")"#), |scan, caps| {
        let pos = accept(scan, caps);
        let text = escape::decode(group(caps, 1)).into_owned();
        token(
            TokenKind::Str {
                text,
                style: QuoteStyle::Double,
            },
            pos,
        )
    });

    // Single-quoted string containing SQL-style doubled-quote escapes:
    // 'it''s' reads as "it's". Only matches when a '' is actually present,
    // and then beats the plain rule on length.
    set.rule(re(r"'((?:\\.|[^'])*?''(?:\\.|''|[^'])*?)'"), |scan, caps| {
        let pos = accept(scan, caps);
        let body = group(caps, 1).replace("''", "'");
        let text = escape::decode(&body).into_owned();
        token(
            TokenKind::Str {
                text,
                style: QuoteStyle::Single,
            },
            pos,
        )
    });

    // Single-quoted string; closes implicitly at end of input or at a
    // `",?<newline>` sequence standing in for the missing quote.
    set.rule(re("'((?:\\\\.|[^'])*?)($|'|(\",?[ \t]*\n))"), |scan, caps| {
        let pos = accept(scan, caps);
        let text = escape::decode(group(caps, 1)).into_owned();
        token(
            TokenKind::Str {
                text,
                style: QuoteStyle::Single,
            },
            pos,
        )
    });

    // Float with optional exponent.
    set.rule(re(r"[\-0-9]*\.[0-9]*(?:[eE][\+\-]?)?[0-9]*\s*"), float_action);

    // Integer with a mandatory exponent is a float as well.
    set.rule(re(r"\-?[0-9]+[eE][\+\-]?[0-9]*\s*"), float_action);

    // Plain integer; values beyond i64 demote to float.
    set.rule(re(r"\-?[0-9]+\s*"), |scan, caps| {
        let pos = accept(scan, caps);
        let digits = lexeme(caps).trim_end();
        match digits.parse::<i64>() {
            Ok(v) => token(TokenKind::Int(v), pos),
            Err(_) => token(TokenKind::Float(digits.parse::<f64>().unwrap_or(0.0)), pos),
        }
    });

    // Structural punctuation, each consuming surrounding whitespace.
    let puncts: [(&str, TokenKind); 7] = [
        (r"\s*:\s*", TokenKind::Colon),
        (r"\s*,\s*", TokenKind::Comma),
        (r"\s*\{\s*", TokenKind::Lbrace),
        (r"\s*\}\s*", TokenKind::Rbrace),
        (r"\s*\[\s*", TokenKind::Lbracket),
        (r"\s*\]\s*", TokenKind::Rbracket),
        (r"\s*\.\s*", TokenKind::Dot),
    ];
    for (pattern, kind) in puncts {
        set.rule(re(pattern), move |scan, caps| {
            let pos = accept(scan, caps);
            token(kind.clone(), pos)
        });
    }

    // Whitespace: discarded, row/column bookkeeping only.
    set.rule(re(r"\s"), |scan, caps| {
        accept(scan, caps);
        RuleOutcome::Skip
    });

    // Catch-all word: one non-space character plus any trailing spaces/tabs.
    // This is what lets unquoted keys and bare words tokenize at all.
    set.rule(re(r"\S[ \t]*"), |scan, caps| {
        let pos = accept(scan, caps);
        token(TokenKind::Word(lexeme(caps).to_string()), pos)
    });

    set
}

static JSON_RULES: LazyLock<RuleSet<LexCtx, Token>> = LazyLock::new(rules);

/// Tokenize the whole input eagerly.
pub(crate) fn scan_all(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut lx = Tokenizer::new(&JSON_RULES, input, LexCtx::default());
    let mut out = Vec::new();
    loop {
        match lx.next_token() {
            Ok(Some(t)) => out.push(t),
            Ok(None) => return Ok(out),
            Err(err) => {
                let (row, col) = (lx.ctx.row, lx.ctx.col);
                let parse_err = match err {
                    ScanError::UnexpectedCharacter { ch, offset } => ParseError::at_offset(
                        ParseErrorKind::UnexpectedCharacter(ch),
                        row,
                        col,
                        offset,
                    ),
                    ScanError::ZeroLengthMatch { offset } => {
                        let ch = input[offset..].chars().next().unwrap_or('\u{0}');
                        ParseError::at_offset(ParseErrorKind::UnexpectedCharacter(ch), row, col, offset)
                    }
                };
                return Err(parse_err);
            }
        }
    }
}
