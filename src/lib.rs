#[cfg(feature = "cli")]
pub mod cli;
pub mod lexer;
pub mod output;
pub mod token;

pub use lexer::{tokenize, Lexer, ParseError, TokenizeResult};
pub use output::{to_json, to_json_pretty};
pub use token::{Operator, Token, TokenKind};
