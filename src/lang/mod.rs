/*!
# Language Module

Lexical analysis and parsing of BASIC source lines.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;
pub use parse::Parsed;

pub mod ast;

/// Span of a token or AST node as character offsets into the tokenized
/// portion of a source line.
pub type Column = std::ops::Range<usize>;

/// `Some` for numbered (stored) lines, `None` for direct input.
pub type LineNumber = Option<u16>;
