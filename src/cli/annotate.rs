//! Human-readable token listing for a formula

use crate::token::TokenKind;
use crate::tokenize;

/// Options for the annotate command
#[derive(Debug, Clone, Default)]
pub struct AnnotateOptions {
    /// The formula to annotate
    pub formula: String,
}

/// Render one line per token: kind, span, and the source text it covers.
///
/// Spans are character offsets, so the source slice is taken over the
/// formula's characters rather than its bytes.
pub fn execute_annotate(options: &AnnotateOptions) -> String {
    let chars: Vec<char> = options.formula.chars().collect();
    let result = tokenize(&options.formula);

    let lines: Vec<String> = result
        .tokens
        .iter()
        .map(|token| {
            let text: String = chars[token.start..token.end].iter().collect();
            format!(
                "{:<10} {:>4}..{:<4} {}",
                kind_name(&token.kind),
                token.start,
                token.end,
                text
            )
        })
        .collect();

    lines.join("\n")
}

fn kind_name(kind: &TokenKind) -> &'static str {
    match kind {
        TokenKind::Operator(_) => "operator",
        TokenKind::Number => "number",
        TokenKind::String { .. } => "string",
        TokenKind::Identifier { is_reference: true } => "reference",
        TokenKind::Identifier { is_reference: false } => "identifier",
        TokenKind::Boolean => "boolean",
    }
}
