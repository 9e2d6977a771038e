use super::{ast::*, error::*, lexer::*};
use crate::common::*;
use logos_iter::LogosIter;

type PResult<T = Term> = Result<T, ParseError>;

pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    const TERM_STARTS: &'static [TokenKind] = &[TokenKind::Dice, TokenKind::Integer];

    pub fn new(s: &'a str) -> Self {
        Self {
            source: s,
            lexer: lexer(s),
        }
    }

    pub fn parse(mut self) -> Result<Expression, ParseError> {
        self.parse_expression()
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn consume(&mut self, expected: TokenKind) -> PResult<()> {
        if self.matches(expected) {
            self.lexer.next();
            Ok(())
        } else {
            self.unexpected_token(vec![expected])
        }
    }

    fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.lexer.span(), self.lexer.slice())
    }

    fn unexpected_token<T>(&mut self, expected: Vec<TokenKind>) -> PResult<T> {
        match self.lexer.next() {
            None => {
                let end = self.source.len();
                Err(ParseError::new(
                    ParseErrorKind::UnexpectedEnd { expected },
                    end..end,
                    "",
                ))
            }
            Some(TokenKind::Error) => {
                Err(self.error_here(ParseErrorKind::UnexpectedString { expected }))
            }
            Some(found) => {
                Err(self.error_here(ParseErrorKind::UnexpectedToken { found, expected }))
            }
        }
    }

    fn parse_expression(&mut self) -> PResult<Expression> {
        let mut terms = NonEmpty::new(self.parse_term()?);
        while self.lexer.peek().is_some() {
            self.consume(TokenKind::Plus)?;
            terms.push(self.parse_term()?);
        }
        Ok(Expression::new(terms))
    }

    fn parse_term(&mut self) -> PResult {
        match self.lexer.peek() {
            Some(TokenKind::Dice) => self.parse_dice(),
            Some(TokenKind::Integer) => self.parse_constant(),
            _ => self.unexpected_token(Self::TERM_STARTS.to_vec()),
        }
    }

    fn parse_constant(&mut self) -> PResult {
        self.consume(TokenKind::Integer)?;
        let value = self.parse_number(self.lexer.slice())?;
        Ok(ConstantTerm::new(value).into())
    }

    fn parse_dice(&mut self) -> PResult {
        self.consume(TokenKind::Dice)?;
        // logos has verified that the slice is `[0-9]*d[0-9]+`
        let (count, sides) = self
            .lexer
            .slice()
            .split_once('d')
            .expect("dice literal has a 'd'");
        let count = if count.is_empty() {
            1
        } else {
            self.parse_number(count)?
        };
        let sides = self.parse_number(sides)?;

        match (NonZeroUInt::new(count), NonZeroUInt::new(sides)) {
            (Some(count), Some(sides)) => Ok(DiceTerm::new(count, sides).into()),
            _ => Err(self.error_here(ParseErrorKind::ZeroDice)),
        }
    }

    /// Parses a run of ASCII digits, which can only fail by overflowing.
    fn parse_number(&self, digits: &str) -> PResult<UInt> {
        digits
            .parse()
            .map_err(|_| self.error_here(ParseErrorKind::NumberTooLarge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ast::test_utils::*;

    fn parse(s: &str) -> PResult<Expression> {
        Parser::new(s).parse()
    }

    fn check(s: &str, expected: NonEmpty<Term>) {
        let parsed = parse(s).unwrap();
        assert_eq!(parsed.terms(), &expected);
    }

    fn check_err(s: &str, expected: ParseErrorKind, span: std::ops::Range<usize>) {
        let err = parse(s).unwrap_err();
        assert_eq!(err.kind, expected);
        assert_eq!(err.span, span);
    }

    #[test]
    fn test_parse_constant() {
        check("2", vec1![constant(2)]);
        check("0", vec1![constant(0)]);
        check(" 42 ", vec1![constant(42)]);
        check("4294967295", vec1![constant(UInt::MAX)]);
    }

    #[test]
    fn test_parse_dice() {
        check("1d20", vec1![dice(1, 20)]);
        check("d6", vec1![dice(1, 6)]);
        check("14d4", vec1![dice(14, 4)]);
        check("1d1", vec1![dice(1, 1)]);
    }

    #[test]
    fn test_parse_sum() {
        check("2d6+1d4", vec1![dice(2, 6), dice(1, 4)]);
        check("1d8+2", vec1![dice(1, 8), constant(2)]);
        check(
            "3d6+2d4+5",
            vec1![dice(3, 6), dice(2, 4), constant(5)],
        );
        check(
            " 3d6 +\t2d4+  5\n",
            vec1![dice(3, 6), dice(2, 4), constant(5)],
        );
        check("5+d6", vec1![constant(5), dice(1, 6)]);
    }

    #[test]
    fn test_err_unexpected_string() {
        let err = parse("abc").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedString { .. }));
        assert_eq!(err.span.start, 0);

        let err = parse("2dX").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedString { .. }));

        check_err(
            "2d6-1",
            ParseErrorKind::UnexpectedString {
                expected: vec![TokenKind::Plus],
            },
            3..4,
        );
    }

    #[test]
    fn test_err_unexpected_token() {
        check_err(
            "+5",
            ParseErrorKind::UnexpectedToken {
                found: TokenKind::Plus,
                expected: vec![TokenKind::Dice, TokenKind::Integer],
            },
            0..1,
        );
        check_err(
            "1d6++2",
            ParseErrorKind::UnexpectedToken {
                found: TokenKind::Plus,
                expected: vec![TokenKind::Dice, TokenKind::Integer],
            },
            4..5,
        );
        check_err(
            "2 3",
            ParseErrorKind::UnexpectedToken {
                found: TokenKind::Integer,
                expected: vec![TokenKind::Plus],
            },
            2..3,
        );
    }

    #[test]
    fn test_err_unexpected_end() {
        let expected = ParseErrorKind::UnexpectedEnd {
            expected: vec![TokenKind::Dice, TokenKind::Integer],
        };
        check_err("", expected.clone(), 0..0);
        check_err("   ", expected.clone(), 3..3);
        check_err("1d6+", expected, 4..4);
    }

    #[test]
    fn test_err_zero_dice() {
        check_err("0d6", ParseErrorKind::ZeroDice, 0..3);
        check_err("d0", ParseErrorKind::ZeroDice, 0..2);
        check_err("1d6 + 2d0", ParseErrorKind::ZeroDice, 6..9);
    }

    #[test]
    fn test_err_number_too_large() {
        check_err("4294967296", ParseErrorKind::NumberTooLarge, 0..10);
        check_err("99999999999d6", ParseErrorKind::NumberTooLarge, 0..13);
        check_err("d99999999999", ParseErrorKind::NumberTooLarge, 0..12);
    }
}
