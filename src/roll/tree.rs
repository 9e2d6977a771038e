use crate::common::*;
use crate::parse::ast::{ConstantTerm, DiceTerm};
use std::fmt;

/// The outcome of rolling an expression: what every term produced, and the total.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Roll {
    terms: NonEmpty<TermRoll>,
    total: Total,
}

impl Roll {
    pub(crate) fn new(terms: NonEmpty<TermRoll>, total: Total) -> Self {
        Self { terms, total }
    }

    pub fn terms(&self) -> &NonEmpty<TermRoll> {
        &self.terms
    }

    pub fn total(&self) -> Total {
        self.total
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{}", term)?;
        }
        write!(f, " = {}", self.total)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TermRoll {
    Dice { term: DiceTerm, faces: Vec<UInt> },
    Constant(ConstantTerm),
}

impl TermRoll {
    /// The sum of this term, or `None` if it does not fit in a [`Total`].
    pub fn subtotal(&self) -> Option<Total> {
        match self {
            Self::Dice { faces, .. } => faces
                .iter()
                .try_fold(0 as Total, |acc, &face| acc.checked_add(face.into())),
            Self::Constant(c) => Some(c.value.into()),
        }
    }
}

impl fmt::Display for TermRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dice { term, faces } => {
                write!(f, "{} (", term)?;
                for (i, face) in faces.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", face)?;
                }
                f.write_str(")")
            }
            Self::Constant(c) => write!(f, "{}", c),
        }
    }
}
