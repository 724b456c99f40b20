//! JSON output serialization for token streams.
//!
//! Renders a [TokenizeResult] as a JSON document so editor frontends and
//! other tools can consume the token stream over a process boundary. Both
//! compact and pretty-printed (2-space indented) forms are provided, and
//! output is deterministic: object keys are always sorted.
//!
//! # Examples
//!
//! ```
//! use formula_lang::{tokenize, output::to_json};
//!
//! let json = to_json(&tokenize("1 + 2"));
//! assert!(json.contains("\"tokens\""));
//! assert!(json.contains("\"errors\""));
//! ```

use crate::lexer::{ParseError, TokenizeResult};
use crate::token::{Token, TokenKind};

/// Convert a single token to a JSON object.
///
/// Every object carries `"type"`, `"start"`, and `"end"`; the variant field
/// (`"op"`, `"value"`, or `"isReference"`) is present only where the kind
/// defines it.
pub fn token_to_json(token: &Token) -> serde_json::Value {
    let mut obj = serde_json::Map::new();

    match &token.kind {
        TokenKind::Operator(op) => {
            obj.insert("type".to_string(), "operator".into());
            obj.insert("op".to_string(), op.as_str().into());
        }
        TokenKind::Number => {
            obj.insert("type".to_string(), "number".into());
        }
        TokenKind::String { value } => {
            obj.insert("type".to_string(), "string".into());
            obj.insert("value".to_string(), value.as_str().into());
        }
        TokenKind::Identifier { is_reference } => {
            obj.insert("type".to_string(), "identifier".into());
            obj.insert("isReference".to_string(), (*is_reference).into());
        }
        TokenKind::Boolean => {
            obj.insert("type".to_string(), "boolean".into());
        }
    }

    obj.insert("start".to_string(), token.start.into());
    obj.insert("end".to_string(), token.end.into());

    serde_json::Value::Object(obj)
}

fn error_to_json(error: &ParseError) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    obj.insert("message".to_string(), error.message.as_str().into());
    obj.insert("pos".to_string(), error.pos.into());
    obj.insert("len".to_string(), error.len.into());
    serde_json::Value::Object(obj)
}

/// Convert a tokenize result to a JSON document with `"tokens"` and
/// `"errors"` arrays. The errors array is present even when empty.
pub fn tokens_to_json(result: &TokenizeResult) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    obj.insert(
        "tokens".to_string(),
        serde_json::Value::Array(result.tokens.iter().map(token_to_json).collect()),
    );
    obj.insert(
        "errors".to_string(),
        serde_json::Value::Array(result.errors.iter().map(error_to_json).collect()),
    );
    serde_json::Value::Object(obj)
}

/// Serialize a tokenize result to compact JSON.
pub fn to_json(result: &TokenizeResult) -> String {
    tokens_to_json(result).to_string()
}

/// Serialize a tokenize result to pretty-printed JSON with 2-space
/// indentation.
pub fn to_json_pretty(result: &TokenizeResult) -> String {
    format!("{:#}", tokens_to_json(result))
}
