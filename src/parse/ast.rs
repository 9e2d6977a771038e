use crate::common::*;
use crate::roll::{Evaluate, TermRoll};
use crate::sample::Sampler;
use enum_dispatch::enum_dispatch;
use std::fmt::{self, Write};
use std::str::FromStr;

/// A parsed dice expression: one or more terms to be added together, in
/// the order they were written.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Expression {
    terms: NonEmpty<Term>,
}

impl Expression {
    pub fn new(terms: NonEmpty<Term>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &NonEmpty<Term> {
        &self.terms
    }

    /// The number of dice rolled when evaluating this expression.
    pub fn dice_count(&self) -> u64 {
        self.terms.iter().map(Evaluate::dice_count).sum()
    }

    /// The smallest total this expression can produce.
    pub fn min_total(&self) -> Total {
        self.terms
            .iter()
            .fold(0, |acc: Total, term| acc.saturating_add(term.min_total()))
    }

    /// The largest total this expression can produce.
    pub fn max_total(&self) -> Total {
        self.terms
            .iter()
            .fold(0, |acc: Total, term| acc.saturating_add(term.max_total()))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_char('+')?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}

impl FromStr for Expression {
    type Err = super::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse(s)
    }
}

#[enum_dispatch(Evaluate)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Term {
    Dice(DiceTerm),
    Constant(ConstantTerm),
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dice(dice) => fmt::Display::fmt(dice, f),
            Self::Constant(constant) => fmt::Display::fmt(constant, f),
        }
    }
}

/// `count` dice with `sides` faces each, summed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DiceTerm {
    pub count: NonZeroUInt,
    pub sides: NonZeroUInt,
}

impl DiceTerm {
    pub const fn new(count: NonZeroUInt, sides: NonZeroUInt) -> Self {
        Self { count, sides }
    }
}

impl fmt::Display for DiceTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ConstantTerm {
    pub value: UInt,
}

impl ConstantTerm {
    pub const fn new(value: UInt) -> Self {
        Self { value }
    }
}

impl fmt::Display for ConstantTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
