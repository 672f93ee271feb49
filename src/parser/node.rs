//! Stack items for the shift-reduce automaton and the recovered tree (OST)
//! they collapse into.

use super::tokens::{Pos, QuoteStyle, Token, TokenKind};

/// The recovered intermediate tree: what remains once the whole input has
/// been reduced to one node, before compilation to a plain value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Ost {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Ost>),
    /// `None` is the empty-object sentinel produced by `{ }`.
    Obj(Option<Vec<(String, Ost)>>),
}

/// One item on the automaton's stack: a shifted terminal or a reduced
/// nonterminal.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    // terminals
    Colon(Pos),
    Comma(Pos),
    Lbrace(Pos),
    Rbrace(Pos),
    Lbracket(Pos),
    Rbracket(Pos),
    Dot(Pos),
    Word {
        text: String,
        pos: Pos,
    },
    Str {
        text: String,
        style: QuoteStyle,
        pos: Pos,
    },
    Int {
        value: i64,
        pos: Pos,
    },
    Float {
        value: f64,
        pos: Pos,
    },
    // nonterminals
    Boolean {
        value: bool,
        pos: Pos,
    },
    Key {
        text: String,
        pos: Pos,
    },
    /// A resolved value; `style` remembers the quoting of the token it came
    /// from, which the glue recoveries use to requote fragments.
    Value {
        value: Ost,
        style: Option<QuoteStyle>,
        pos: Pos,
    },
    /// A value preceded by a comma.
    Cvalue {
        value: Ost,
    },
    /// A value preceded by a colon.
    Covalue {
        value: Ost,
        pos: Pos,
    },
    Vlist {
        items: Vec<Ost>,
    },
    Kv {
        key: String,
        value: Ost,
    },
    Kvlist {
        pairs: Vec<(String, Ost)>,
    },
    List {
        items: Vec<Ost>,
        pos: Pos,
    },
    Obj {
        pairs: Option<Vec<(String, Ost)>>,
        pos: Pos,
    },
}

impl Node {
    pub(crate) fn from_token(tok: Token) -> Node {
        let pos = tok.pos;
        match tok.kind {
            TokenKind::Colon => Node::Colon(pos),
            TokenKind::Comma => Node::Comma(pos),
            TokenKind::Lbrace => Node::Lbrace(pos),
            TokenKind::Rbrace => Node::Rbrace(pos),
            TokenKind::Lbracket => Node::Lbracket(pos),
            TokenKind::Rbracket => Node::Rbracket(pos),
            TokenKind::Dot => Node::Dot(pos),
            TokenKind::Str { text, style } => Node::Str { text, style, pos },
            TokenKind::Int(value) => Node::Int { value, pos },
            TokenKind::Float(value) => Node::Float { value, pos },
            TokenKind::Word(text) => Node::Word { text, pos },
        }
    }

    pub(crate) fn pos(&self) -> Pos {
        match self {
            Node::Colon(pos)
            | Node::Comma(pos)
            | Node::Lbrace(pos)
            | Node::Rbrace(pos)
            | Node::Lbracket(pos)
            | Node::Rbracket(pos)
            | Node::Dot(pos) => *pos,
            Node::Word { pos, .. }
            | Node::Str { pos, .. }
            | Node::Int { pos, .. }
            | Node::Float { pos, .. }
            | Node::Boolean { pos, .. }
            | Node::Key { pos, .. }
            | Node::Value { pos, .. }
            | Node::Covalue { pos, .. }
            | Node::List { pos, .. }
            | Node::Obj { pos, .. } => *pos,
            Node::Cvalue { .. } | Node::Vlist { .. } | Node::Kv { .. } | Node::Kvlist { .. } => {
                Pos::default()
            }
        }
    }
}

/// The textual form of a value when a recovery production glues it back into
/// surrounding unquoted text.
pub(crate) fn fragment(value: &Ost) -> String {
    match value {
        Ost::Null => "null".to_string(),
        Ost::Bool(b) => b.to_string(),
        Ost::Int(i) => i.to_string(),
        Ost::Float(f) => f.to_string(),
        Ost::Str(s) => s.clone(),
        other => super::compile::compile_ost(other.clone(), false).to_string(),
    }
}
