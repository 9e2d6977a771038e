use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    #[regex(r"[0-9]+")]
    Integer,

    // zero and oversized counts are rejected by the parser
    #[regex(r"[0-9]*d[0-9]+")]
    Dice,

    #[token("+")]
    Plus,

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "<integer>",
            Self::Dice => "<dice>",
            Self::Plus => "'+'",
            Self::Error => "<error>",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    fn check(s: &str, expected: &[(TokenKind, &str)]) {
        let mut lex = TokenKind::lexer(s);
        let mut actual = Vec::new();
        while let Some(kind) = lex.next() {
            actual.push((kind, lex.slice()));
        }
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_lex_terms() {
        check("12", &[(Integer, "12")]);
        check("d6", &[(Dice, "d6")]);
        check("3d20", &[(Dice, "3d20")]);
        check("0d0", &[(Dice, "0d0")]);
    }

    #[test]
    fn test_lex_expression() {
        check(
            " 2d6 +1d4+  5\t",
            &[(Dice, "2d6"), (Plus, "+"), (Dice, "1d4"), (Plus, "+"), (Integer, "5")],
        );
    }

    #[test]
    fn test_lex_errors() {
        check("-", &[(Error, "-")]);
        check("2d6-1", &[(Dice, "2d6"), (Error, "-"), (Integer, "1")]);
    }
}
