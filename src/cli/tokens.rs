//! Tokenize a formula and render the token stream as JSON

use crate::output::{to_json, to_json_pretty};
use crate::tokenize;

/// Options for the tokens command
#[derive(Debug, Clone, Default)]
pub struct TokensOptions {
    /// The formula to tokenize
    pub formula: String,
    /// Pretty-print the output
    pub pretty: bool,
}

/// Tokenize the formula and serialize the result as JSON.
pub fn execute_tokens(options: &TokensOptions) -> String {
    let result = tokenize(&options.formula);
    if options.pretty {
        to_json_pretty(&result)
    } else {
        to_json(&result)
    }
}
