use crate::common::{Float, Int, NonZeroUInt, UInt};
use rand::Rng;

/// A source of uniformly distributed reals in `[0, 1)`.
///
/// Every integer draw in this crate is derived from [`Sampler::unit`], so
/// substituting the sampler makes every downstream result reproducible.
/// Any [`rand::Rng`] is a sampler.
pub trait Sampler {
    /// Draws a value uniformly distributed in `[0, 1)`.
    fn unit(&mut self) -> Float;

    /// Draws a value uniformly from `1..=sides`.
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        let sides = sides.get();
        let offset = (self.unit() * Float::from(sides)).floor() as UInt;
        offset.min(sides - 1) + 1
    }

    /// Draws a value uniformly from the closed interval bounded by `a` and `b`,
    /// in either order.
    fn between(&mut self, a: Int, b: Int) -> Int {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let span = i64::from(hi) - i64::from(lo) + 1;
        let offset = (self.unit() * span as Float).floor() as i64;
        // `offset` is below `span` unless the multiplication rounded up
        (i64::from(lo) + offset).min(i64::from(hi)) as Int
    }

    /// Draws an index uniformly from `0..=upper`.
    fn index(&mut self, upper: usize) -> usize {
        let offset = (self.unit() * (upper as Float + 1.0)).floor() as usize;
        offset.min(upper)
    }
}

impl<R: Rng> Sampler for R {
    fn unit(&mut self) -> Float {
        self.gen()
    }
}

#[cfg(test)]
pub(crate) use mock::{ScriptedSampler, UnreachableSampler};
