// tests/output_tests.rs

use formula_lang::output::{to_json, to_json_pretty, token_to_json, tokens_to_json};
use formula_lang::tokenize;

#[test]
fn test_token_stream_json_shape() {
    let json = tokens_to_json(&tokenize("[Total] > 200"));

    let tokens = json["tokens"].as_array().unwrap();
    assert_eq!(tokens.len(), 3);

    assert_eq!(tokens[0]["type"], "identifier");
    assert_eq!(tokens[0]["isReference"], true);
    assert_eq!(tokens[0]["start"], 0);
    assert_eq!(tokens[0]["end"], 7);

    assert_eq!(tokens[1]["type"], "operator");
    assert_eq!(tokens[1]["op"], ">");

    assert_eq!(tokens[2]["type"], "number");
    assert_eq!(tokens[2]["start"], 10);
    assert_eq!(tokens[2]["end"], 13);

    assert!(json["errors"].as_array().unwrap().is_empty());
}

#[test]
fn test_string_token_carries_value() {
    let result = tokenize(r#""Nothing""#);
    let json = token_to_json(&result.tokens[0]);

    assert_eq!(json["type"], "string");
    assert_eq!(json["value"], "Nothing");
    assert_eq!(json["start"], 0);
    assert_eq!(json["end"], 9);
}

#[test]
fn test_word_operators_serialize_lowercase() {
    let json = tokens_to_json(&tokenize("A AND B"));
    assert_eq!(json["tokens"][1]["op"], "and");

    let json = tokens_to_json(&tokenize("NOT A"));
    assert_eq!(json["tokens"][0]["op"], "not");
}

#[test]
fn test_boolean_token_has_no_variant_field() {
    let result = tokenize("true");
    let json = token_to_json(&result.tokens[0]);

    assert_eq!(json["type"], "boolean");
    assert!(json.get("op").is_none());
    assert!(json.get("value").is_none());
    assert!(json.get("isReference").is_none());
}

#[test]
fn test_bare_identifier_is_not_a_reference() {
    let result = tokenize("case");
    let json = token_to_json(&result.tokens[0]);

    assert_eq!(json["type"], "identifier");
    assert_eq!(json["isReference"], false);
}

#[test]
fn test_compact_and_pretty_agree() {
    let result = tokenize(r#"case([Total] > 200, [T], "Nothing")"#);

    let compact: serde_json::Value = serde_json::from_str(&to_json(&result)).unwrap();
    let pretty: serde_json::Value = serde_json::from_str(&to_json_pretty(&result)).unwrap();

    assert_eq!(compact, pretty);
    assert!(to_json_pretty(&result).contains('\n'));
    assert!(!to_json(&result).contains('\n'));
}

#[test]
fn test_empty_result_shape() {
    assert_eq!(to_json(&tokenize("")), r#"{"errors":[],"tokens":[]}"#);
}
