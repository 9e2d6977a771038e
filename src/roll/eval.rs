use super::tree::TermRoll;
use crate::common::*;
use crate::parse::ast::{ConstantTerm, DiceTerm};
use crate::sample::Sampler;

#[enum_dispatch::enum_dispatch]
pub trait Evaluate {
    /// How many dice evaluating this rolls.
    fn dice_count(&self) -> u64;

    fn min_total(&self) -> Total;

    fn max_total(&self) -> Total;

    fn evaluate<S: Sampler>(&self, sampler: &mut S) -> TermRoll;
}

impl Evaluate for DiceTerm {
    fn dice_count(&self) -> u64 {
        self.count.get().into()
    }

    fn min_total(&self) -> Total {
        self.count.get().into()
    }

    fn max_total(&self) -> Total {
        Total::from(self.count.get()).saturating_mul(self.sides.get().into())
    }

    fn evaluate<S: Sampler>(&self, sampler: &mut S) -> TermRoll {
        let faces = (0..self.count.get())
            .map(|_| sampler.roll(self.sides))
            .collect();
        TermRoll::Dice { term: *self, faces }
    }
}

impl Evaluate for ConstantTerm {
    fn dice_count(&self) -> u64 {
        0
    }

    fn min_total(&self) -> Total {
        self.value.into()
    }

    fn max_total(&self) -> Total {
        self.value.into()
    }

    fn evaluate<S: Sampler>(&self, _sampler: &mut S) -> TermRoll {
        TermRoll::Constant(*self)
    }
}
