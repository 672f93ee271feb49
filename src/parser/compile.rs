//! Compilation of the recovered tree into a `serde_json::Value`.

use super::node::{Node, Ost};
use crate::error::{ParseError, ParseErrorKind};
use serde_json::{Map, Number, Value};

/// Compile the single node left on the stack. A residual word run reads as a
/// bare string; other residual terminals mean the input never formed a value.
pub(crate) fn compile_root(node: Node, keep_duplicates: bool) -> Result<Value, ParseError> {
    match node {
        Node::Value { value, .. } => Ok(compile_ost(value, keep_duplicates)),
        Node::List { items, .. } => Ok(compile_items(items, keep_duplicates)),
        Node::Vlist { items } => Ok(compile_items(items, keep_duplicates)),
        Node::Obj { pairs, .. } => Ok(compile_obj(pairs, keep_duplicates)),
        Node::Key { text, .. } => Ok(Value::String(text)),
        Node::Colon(pos) => Err(ParseError::new(
            ParseErrorKind::UnhandledColonValue,
            pos.row,
            pos.col,
        )),
        other => {
            let pos = other.pos();
            Err(ParseError::new(
                ParseErrorKind::UnexpectedEndOfInput,
                pos.row,
                pos.col,
            ))
        }
    }
}

pub(crate) fn compile_ost(value: Ost, keep_duplicates: bool) -> Value {
    match value {
        Ost::Null => Value::Null,
        Ost::Bool(b) => Value::Bool(b),
        Ost::Int(i) => Value::Number(Number::from(i)),
        // NaN and infinities have no JSON form
        Ost::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        Ost::Str(s) => Value::String(s),
        Ost::List(items) => compile_items(items, keep_duplicates),
        Ost::Obj(pairs) => compile_obj(pairs, keep_duplicates),
    }
}

fn compile_items(items: Vec<Ost>, keep_duplicates: bool) -> Value {
    Value::Array(
        items
            .into_iter()
            .map(|item| compile_ost(item, keep_duplicates))
            .collect(),
    )
}

/// Build the object map in entry order. With duplicate preservation on, a
/// repeated key chains its occurrences as `{"value": previous, "next": new}`
/// in place, keeping the key's original position in the map.
fn compile_obj(pairs: Option<Vec<(String, Ost)>>, keep_duplicates: bool) -> Value {
    let mut map = Map::new();
    for (key, val) in pairs.unwrap_or_default() {
        let val = compile_ost(val, keep_duplicates);
        if keep_duplicates {
            if let Some(existing) = map.get_mut(&key) {
                let previous = existing.take();
                let mut chain = Map::new();
                chain.insert("value".to_string(), previous);
                chain.insert("next".to_string(), val);
                *existing = Value::Object(chain);
                continue;
            }
        }
        map.insert(key, val);
    }
    Value::Object(map)
}
