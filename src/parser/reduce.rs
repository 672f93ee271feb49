//! The production table of the tolerant grammar.
//!
//! After every shift the automaton pops the newest stack item and walks the
//! productions applicable to it, in a fixed order. Ordinary productions build
//! the tree a strict grammar would; recovery productions, interleaved among
//! them, absorb the irregularities (missing commas and colons, dangling
//! words, trailing separators, quoted fragments inside unquoted runs). A few
//! recoveries synthesize a token and re-reduce; that recursion is depth
//! capped.

use super::node::{fragment, Node, Ost};
use super::Logger;
use crate::error::{ParseError, ParseErrorKind};

/// Apply productions until none fires.
pub(crate) fn reduce_to_fixpoint(
    stack: &mut Vec<Node>,
    depth: usize,
    limit: usize,
    log: &mut Logger,
) -> Result<(), ParseError> {
    while reduce(stack, depth, limit, log)? {}
    Ok(())
}

/// One reduction step: pop the newest item, try its productions. Returns
/// whether one fired.
fn reduce(
    stack: &mut Vec<Node>,
    depth: usize,
    limit: usize,
    log: &mut Logger,
) -> Result<bool, ParseError> {
    let Some(next) = stack.pop() else {
        return Ok(false);
    };
    match try_reduce(stack, next, depth, limit, log)? {
        None => Ok(true),
        Some(next) => {
            stack.push(next);
            Ok(false)
        }
    }
}

/// Re-reduce after a recovery synthesized a token mid-production.
fn subreduce(
    stack: &mut Vec<Node>,
    depth: usize,
    limit: usize,
    log: &mut Logger,
) -> Result<(), ParseError> {
    if depth >= limit {
        let (row, col) = log.here();
        return Err(ParseError::new(
            ParseErrorKind::UnexpectedEndOfInput,
            row,
            col,
        ));
    }
    reduce_to_fixpoint(stack, depth + 1, limit, log)
}

/// The item `n` below the top of the stack.
fn under(stack: &[Node], n: usize) -> Option<&Node> {
    stack.len().checked_sub(n + 1).and_then(|i| stack.get(i))
}

/// Walk the productions for `next` against the stack. `Ok(None)` means one
/// fired and the stack was updated; `Ok(Some(next))` hands the item back to
/// be shifted.
fn try_reduce(
    stack: &mut Vec<Node>,
    next: Node,
    depth: usize,
    limit: usize,
    log: &mut Logger,
) -> Result<Option<Node>, ParseError> {
    match next {
        // keywords resolve out of accumulated word runs
        Node::Key { text, pos } => match text.trim() {
            "true" => {
                stack.push(Node::Boolean { value: true, pos });
                Ok(None)
            }
            "false" => {
                stack.push(Node::Boolean { value: false, pos });
                Ok(None)
            }
            "null" => {
                stack.push(Node::Value {
                    value: Ost::Null,
                    style: None,
                    pos,
                });
                Ok(None)
            }
            _ => Ok(Some(Node::Key { text, pos })),
        },

        // words concatenate into the key run below, or start a new one
        Node::Word { text, pos } => {
            if let Some(Node::Key { text: run, .. }) = stack.last_mut() {
                run.push_str(&text);
                return Ok(None);
            }
            stack.push(Node::Key { text, pos });
            Ok(None)
        }

        // an integer inside a word run is text, not a number
        Node::Int { value, pos } => {
            if let Some(Node::Key { text: run, .. }) = stack.last_mut() {
                run.push_str(&value.to_string());
                return Ok(None);
            }
            stack.push(Node::Value {
                value: Ost::Int(value),
                style: None,
                pos,
            });
            Ok(None)
        }

        Node::Str { text, style, pos } => {
            stack.push(Node::Value {
                value: Ost::Str(text),
                style: Some(style),
                pos,
            });
            Ok(None)
        }

        Node::Boolean { value, pos } => {
            stack.push(Node::Value {
                value: Ost::Bool(value),
                style: None,
                pos,
            });
            Ok(None)
        }

        Node::Float { value, pos } => {
            stack.push(Node::Value {
                value: Ost::Float(value),
                style: None,
                pos,
            });
            Ok(None)
        }

        Node::Value { value, style, pos } => {
            match stack.last() {
                Some(Node::Comma(_)) => {
                    stack.pop();
                    stack.push(Node::Cvalue { value });
                    return Ok(None);
                }
                Some(Node::Colon(_)) => {
                    stack.pop();
                    stack.push(Node::Covalue { value, pos });
                    return Ok(None);
                }
                _ => {}
            }

            // A quoted fragment interrupted an unquoted run: requote the run
            // and glue everything back into the value it belongs to.
            let mut glued = false;
            if let [.., Node::Value { value: below, .. }, Node::Key { text: mid, .. }] =
                stack.as_mut_slice()
            {
                let joined = format!("{}\"{}\"{}", fragment(below), mid, fragment(&value));
                *below = Ost::Str(joined);
                glued = true;
            }
            if glued {
                stack.pop();
                log.log("glued quoted fragment back into surrounding text");
                return Ok(None);
            }

            if let [.., Node::Vlist { items }, Node::Key { text: mid, .. }] = stack.as_mut_slice() {
                if let Some(last) = items.pop() {
                    let joined = format!("{}\"{}\"{}", fragment(&last), mid, fragment(&value));
                    items.push(Ost::Str(joined));
                    glued = true;
                }
            }
            if glued {
                stack.pop();
                log.log("glued quoted fragment back into surrounding text");
                return Ok(None);
            }

            if let [.., Node::Kvlist { pairs }, Node::Key { text: mid, .. }] = stack.as_mut_slice()
            {
                if let Some((key, last)) = pairs.pop() {
                    let q = style.map_or('"', super::tokens::QuoteStyle::quote_char);
                    let joined = format!("{}{q}{}{q}{}", fragment(&last), mid, fragment(&value));
                    pairs.push((key, Ost::Str(joined)));
                    glued = true;
                }
            }
            if glued {
                stack.pop();
                log.log("glued quoted fragment back into surrounding text");
                return Ok(None);
            }

            // a value directly after a word run: the run was its unquoted
            // prefix
            if matches!(stack.last(), Some(Node::Key { .. })) {
                if let Some(Node::Key { text, pos: kpos }) = stack.pop() {
                    log.log("joined quoted text onto unquoted prefix");
                    stack.push(Node::Value {
                        value: Ost::Str(format!("{}{}", text, fragment(&value))),
                        style,
                        pos: kpos,
                    });
                }
                return Ok(None);
            }

            Ok(Some(Node::Value { value, style, pos }))
        }

        Node::List { items, pos } => match stack.last() {
            Some(Node::Comma(_)) => {
                stack.pop();
                stack.push(Node::Cvalue {
                    value: Ost::List(items),
                });
                Ok(None)
            }
            Some(Node::Colon(_)) => {
                stack.pop();
                stack.push(Node::Covalue {
                    value: Ost::List(items),
                    pos,
                });
                Ok(None)
            }
            _ => Ok(Some(Node::List { items, pos })),
        },

        Node::Obj { pairs, pos } => match stack.last() {
            Some(Node::Comma(_)) => {
                stack.pop();
                stack.push(Node::Cvalue {
                    value: Ost::Obj(pairs),
                });
                Ok(None)
            }
            Some(Node::Colon(_)) => {
                stack.pop();
                stack.push(Node::Covalue {
                    value: Ost::Obj(pairs),
                    pos,
                });
                Ok(None)
            }
            // missing colon between a key and an object value
            Some(Node::Key { .. }) => {
                if let Some(Node::Key { text, .. }) = stack.pop() {
                    log.log("inserted missing colon before object value");
                    stack.push(Node::Kv {
                        key: text.trim().to_string(),
                        value: Ost::Obj(pairs),
                    });
                }
                Ok(None)
            }
            _ => Ok(Some(Node::Obj { pairs, pos })),
        },

        Node::Cvalue { value } => {
            if let Some(Node::Vlist { items }) = stack.last_mut() {
                items.push(value);
                return Ok(None);
            }
            stack.push(Node::Vlist { items: vec![value] });
            Ok(None)
        }

        Node::Vlist { mut items } => match stack.last() {
            Some(Node::Value { .. }) => {
                if let Some(Node::Value { value, .. }) = stack.pop() {
                    items.insert(0, value);
                }
                stack.push(Node::Vlist { items });
                Ok(None)
            }
            Some(Node::List { .. }) => {
                if let Some(Node::List { items: inner, .. }) = stack.pop() {
                    items.insert(0, Ost::List(inner));
                }
                stack.push(Node::Vlist { items });
                Ok(None)
            }
            Some(Node::Obj { .. }) => {
                if let Some(Node::Obj { pairs, .. }) = stack.pop() {
                    items.insert(0, Ost::Obj(pairs));
                }
                stack.push(Node::Vlist { items });
                Ok(None)
            }
            // a dangling word run heads the list: it was an unquoted string
            Some(Node::Key { .. }) => {
                if let Some(Node::Key { text, pos }) = stack.pop() {
                    log.log("read unquoted text as a string value");
                    stack.push(Node::Value {
                        value: Ost::Str(text),
                        style: None,
                        pos,
                    });
                    subreduce(stack, depth, limit, log)?;
                }
                stack.push(Node::Vlist { items });
                Ok(None)
            }
            // two adjacent lists merge head-first
            Some(Node::Vlist { .. }) => {
                if let Some(Node::Vlist { items: below }) = stack.last_mut() {
                    if let Some(first) = items.into_iter().next() {
                        below.push(first);
                    }
                }
                Ok(None)
            }
            _ => Ok(Some(Node::Vlist { items })),
        },

        Node::Covalue { value, pos } => match stack.last() {
            Some(Node::Key { .. }) => {
                if let Some(Node::Key { text, .. }) = stack.pop() {
                    stack.push(Node::Kv { key: text, value });
                }
                Ok(None)
            }
            Some(Node::Value { .. }) => {
                if let Some(Node::Value { value: key, .. }) = stack.pop() {
                    stack.push(Node::Kv {
                        key: fragment(&key),
                        value,
                    });
                }
                Ok(None)
            }
            Some(Node::Vlist { .. }) => {
                if let Some(Node::Vlist { items }) = stack.pop() {
                    let key = items
                        .iter()
                        .map(fragment)
                        .collect::<Vec<_>>()
                        .join(",");
                    stack.push(Node::Kv { key, value });
                }
                Ok(None)
            }
            _ => Err(ParseError::new(
                ParseErrorKind::UnhandledColonValue,
                pos.row,
                pos.col,
            )),
        },

        Node::Kv { key, value } => {
            if matches!(stack.last(), Some(Node::Comma(_)))
                && matches!(under(stack, 1), Some(Node::Kvlist { .. }))
            {
                stack.pop();
                if let Some(Node::Kvlist { pairs }) = stack.last_mut() {
                    pairs.push((key, value));
                }
                return Ok(None);
            }
            stack.push(Node::Kvlist {
                pairs: vec![(key, value)],
            });
            Ok(None)
        }

        // adjacent pair lists merge (covers a missing comma between pairs)
        Node::Kvlist { pairs } => {
            if let Some(Node::Kvlist { pairs: below }) = stack.last_mut() {
                log.log("inserted missing comma between object entries");
                below.extend(pairs);
                return Ok(None);
            }
            Ok(Some(Node::Kvlist { pairs }))
        }

        Node::Rbracket(pos) => {
            if matches!(stack.last(), Some(Node::Vlist { .. }))
                && matches!(under(stack, 1), Some(Node::Lbracket(_)))
            {
                if let Some(Node::Vlist { items }) = stack.pop() {
                    stack.pop();
                    stack.push(Node::List { items, pos });
                }
                return Ok(None);
            }
            if matches!(stack.last(), Some(Node::List { .. }))
                && matches!(under(stack, 1), Some(Node::Lbracket(_)))
            {
                if let Some(Node::List { items, .. }) = stack.pop() {
                    stack.pop();
                    stack.push(Node::List {
                        items: vec![Ost::List(items)],
                        pos,
                    });
                }
                return Ok(None);
            }
            if matches!(stack.last(), Some(Node::Lbracket(_))) {
                stack.pop();
                stack.push(Node::List {
                    items: Vec::new(),
                    pos,
                });
                return Ok(None);
            }
            if matches!(stack.last(), Some(Node::Value { .. }))
                && matches!(under(stack, 1), Some(Node::Lbracket(_)))
            {
                if let Some(Node::Value { value, .. }) = stack.pop() {
                    stack.pop();
                    stack.push(Node::List {
                        items: vec![value],
                        pos,
                    });
                }
                return Ok(None);
            }
            if matches!(stack.last(), Some(Node::Obj { .. }))
                && matches!(under(stack, 1), Some(Node::Lbracket(_)))
            {
                if let Some(Node::Obj { pairs, .. }) = stack.pop() {
                    stack.pop();
                    stack.push(Node::List {
                        items: vec![Ost::Obj(pairs)],
                        pos,
                    });
                }
                return Ok(None);
            }
            // dangling word run at the end of a list
            if matches!(stack.last(), Some(Node::Key { .. }))
                && matches!(under(stack, 1), Some(Node::Comma(_)))
            {
                if let Some(Node::Key { text, pos: kpos }) = stack.pop() {
                    log.log("read unquoted text as a string value");
                    stack.push(Node::Value {
                        value: Ost::Str(text),
                        style: None,
                        pos: kpos,
                    });
                    subreduce(stack, depth, limit, log)?;
                }
                stack.push(Node::Rbracket(pos));
                return Ok(None);
            }
            // trailing comma before ]
            if matches!(stack.last(), Some(Node::Comma(_)))
                && matches!(
                    under(stack, 1),
                    Some(Node::Key { .. } | Node::Obj { .. } | Node::Value { .. })
                )
            {
                log.log("dropped trailing comma");
                stack.pop();
                stack.push(Node::Rbracket(pos));
                subreduce(stack, depth, limit, log)?;
                return Ok(None);
            }
            // a single bare word is a one-element list
            if matches!(stack.last(), Some(Node::Key { .. }))
                && matches!(under(stack, 1), Some(Node::Lbracket(_)))
            {
                if let Some(Node::Key { text, .. }) = stack.pop() {
                    log.log("read unquoted text as a string value");
                    stack.pop();
                    stack.push(Node::List {
                        items: vec![Ost::Str(text)],
                        pos,
                    });
                }
                return Ok(None);
            }
            if matches!(stack.last(), Some(Node::Comma(_)))
                && matches!(under(stack, 1), Some(Node::Vlist { .. }))
            {
                log.log("dropped trailing comma");
                stack.pop();
                stack.push(Node::Rbracket(pos));
                subreduce(stack, depth, limit, log)?;
                return Ok(None);
            }
            Ok(Some(Node::Rbracket(pos)))
        }

        Node::Rbrace(pos) => {
            if matches!(stack.last(), Some(Node::Kvlist { .. }))
                && matches!(under(stack, 1), Some(Node::Lbrace(_)))
            {
                if let Some(Node::Kvlist { pairs }) = stack.pop() {
                    stack.pop();
                    stack.push(Node::Obj {
                        pairs: Some(pairs),
                        pos,
                    });
                }
                return Ok(None);
            }
            if matches!(stack.last(), Some(Node::Lbrace(_))) {
                stack.pop();
                stack.push(Node::Obj { pairs: None, pos });
                return Ok(None);
            }
            // dangling word run after a colon
            if matches!(stack.last(), Some(Node::Key { .. }))
                && matches!(under(stack, 1), Some(Node::Colon(_)))
            {
                if let Some(Node::Key { text, pos: kpos }) = stack.pop() {
                    log.log("read unquoted text as a string value");
                    stack.push(Node::Value {
                        value: Ost::Str(text),
                        style: None,
                        pos: kpos,
                    });
                    subreduce(stack, depth, limit, log)?;
                }
                stack.push(Node::Rbrace(pos));
                return Ok(None);
            }
            // colon with nothing after it
            if matches!(stack.last(), Some(Node::Colon(_))) {
                log.log("filled in null for missing value");
                stack.push(Node::Value {
                    value: Ost::Null,
                    style: None,
                    pos,
                });
                subreduce(stack, depth, limit, log)?;
                stack.push(Node::Rbrace(pos));
                return Ok(None);
            }
            // trailing comma before }
            if matches!(stack.last(), Some(Node::Comma(_))) {
                log.log("dropped trailing comma");
                stack.pop();
                stack.push(Node::Rbrace(pos));
                return Ok(None);
            }
            Err(ParseError::new(
                ParseErrorKind::UnhandledCloseBrace,
                pos.row,
                pos.col,
            ))
        }

        Node::Comma(pos) => match stack.last() {
            // repeated commas collapse
            Some(Node::Comma(_)) => {
                log.log("dropped repeated comma");
                Ok(None)
            }
            // a dangling word run before a comma is an unquoted string
            Some(Node::Key { .. }) => {
                if let Some(Node::Key { text, pos: kpos }) = stack.pop() {
                    log.log("read unquoted text as a string value");
                    stack.push(Node::Value {
                        value: Ost::Str(text),
                        style: None,
                        pos: kpos,
                    });
                    subreduce(stack, depth, limit, log)?;
                }
                stack.push(Node::Comma(pos));
                Ok(None)
            }
            // a comma straight after a colon: the value was omitted
            Some(Node::Colon(_)) => {
                log.log("filled in null for missing value");
                stack.push(Node::Value {
                    value: Ost::Null,
                    style: None,
                    pos,
                });
                subreduce(stack, depth, limit, log)?;
                stack.push(Node::Comma(pos));
                Ok(None)
            }
            _ => Ok(Some(Node::Comma(pos))),
        },

        // plain shifts
        other @ (Node::Colon(_) | Node::Lbrace(_) | Node::Lbracket(_) | Node::Dot(_)) => {
            Ok(Some(other))
        }
    }
}
