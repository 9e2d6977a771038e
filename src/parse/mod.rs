pub mod ast;
mod error;
mod lexer;
mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use lexer::TokenKind;

/// Attempts to parse a string into a dice expression.
///
/// # Examples
/// ```
/// # use random_lib::parse;
///
/// let expr = parse("d20 + 2d4 + 3").unwrap();
/// assert_eq!(expr.to_string(), "1d20+2d4+3");
/// assert_eq!((expr.min_total(), expr.max_total()), (6, 31));
/// ```
///
/// # Errors
/// Returns a [`ParseError`] locating the first part of `s` that is not a
/// sum of dice (`2d6`, `d8`) and non-negative integers.
pub fn parse(s: &str) -> Result<ast::Expression, ParseError> {
    parser::Parser::new(s).parse().map_err(|err| {
        tracing::debug!(notation = s, span = ?err.span, kind = %err.kind, "failed to parse dice expression");
        err
    })
}
