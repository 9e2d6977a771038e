use super::{eval::Evaluate, tree::Roll, RResult};
use crate::common::*;
use crate::error::Error;
use crate::parse::ast::Expression;
use crate::sample::Sampler;

/// Evaluates expressions against a borrowed sampler, enforcing an optional
/// roll limit.
pub struct RollContext<'s, S> {
    max_rolls: Option<u64>,
    sampler: &'s mut S,
}

impl<'s, S: Sampler> RollContext<'s, S> {
    pub fn new(max_rolls: Option<u64>, sampler: &'s mut S) -> Self {
        Self { max_rolls, sampler }
    }

    fn check_rolls(&self, expr: &Expression) -> RResult<()> {
        let requested = expr.dice_count();
        match self.max_rolls {
            Some(max) if requested > max => {
                tracing::debug!(%expr, requested, max, "rejected dice expression");
                Err(Error::TooManyRolls { requested, max })
            }
            _ => Ok(()),
        }
    }

    /// Rolls every term of `expr` and adds them up.
    ///
    /// Nothing is drawn from the sampler if the expression asks for more dice
    /// than the limit allows.
    pub fn eval(&mut self, expr: &Expression) -> RResult<Roll> {
        self.check_rolls(expr)?;

        let mut total: Total = 0;
        let terms = expr.terms().try_mapped_ref(|term| {
            let roll = term.evaluate(&mut *self.sampler);
            let subtotal = roll.subtotal().ok_or(Error::Overflow)?;
            total = total.checked_add(subtotal).ok_or(Error::Overflow)?;
            tracing::trace!(%term, subtotal, "rolled term");
            Ok::<_, Error>(roll)
        })?;

        Ok(Roll::new(terms, total))
    }
}
