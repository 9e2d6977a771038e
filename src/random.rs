use crate::common::*;
use crate::error::{ArgumentError, Error};
use crate::parse::{self, ast::Expression};
use crate::roll::{Roll, RollContext};
use crate::sample::Sampler;
use rand::{rngs::StdRng, SeedableRng};

type RResult<T> = Result<T, Error>;

pub type DefaultSampler = rand::rngs::ThreadRng;

/// The chance of `true` for [`Random::fair_flip`].
pub const DEFAULT_PROBABILITY: Float = 0.5;

/// Random draws, shuffles, coin flips and dice rolls backed by one [`Sampler`].
///
/// # Examples
/// ```
/// use random_lib::Random;
///
/// let mut random = Random::seeded(42);
/// let total = random.die_roll("3d6 + 2").unwrap();
/// assert!((5..=20).contains(&total));
/// ```
#[derive(Debug, Clone)]
pub struct Random<S = DefaultSampler> {
    sampler: S,
    max_rolls: Option<u64>,
}

impl<S: Sampler> Random<S> {
    /// Wraps `sampler` with no limit on how many dice an evaluation may roll.
    pub fn new(sampler: S) -> Self {
        Self {
            sampler,
            max_rolls: None,
        }
    }

    /// Limits how many dice a single evaluation may roll.
    pub fn with_max_rolls(mut self, max_rolls: u64) -> Self {
        self.max_rolls = Some(max_rolls);
        self
    }

    /// Removes the limit on how many dice a single evaluation may roll.
    pub fn unbounded(mut self) -> Self {
        self.max_rolls = None;
        self
    }

    pub fn max_rolls(&self) -> Option<u64> {
        self.max_rolls
    }

    pub fn sampler_mut(&mut self) -> &mut S {
        &mut self.sampler
    }

    pub fn into_sampler(self) -> S {
        self.sampler
    }

    /// Returns a value uniformly distributed in `[0, 1)`.
    pub fn random(&mut self) -> Float {
        self.sampler.unit()
    }

    /// Returns an integer uniformly distributed in `0..=n`.
    ///
    /// A negative `n` draws from `n..=0`.
    pub fn random_n(&mut self, n: Int) -> Int {
        self.sampler.between(0, n)
    }

    /// Returns an integer uniformly distributed between `n` and `o`, both
    /// inclusive, in either order.
    pub fn random_n_to_o(&mut self, n: Int, o: Int) -> Int {
        self.sampler.between(n, o)
    }

    /// Rolls a single die with `sides` faces numbered from 1.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `sides` is not positive.
    pub fn die(&mut self, sides: Int) -> RResult<Int> {
        let size = UInt::try_from(sides)
            .ok()
            .and_then(NonZeroUInt::new)
            .ok_or(ArgumentError::NonPositiveSides(sides))?;
        // the face is at most `sides`, which already fits
        Ok(self.sampler.roll(size) as Int)
    }

    /// Returns a uniformly shuffled copy of `items`, leaving `items` untouched.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut ret = items.to_vec();
        self.shuffle_in_place(&mut ret);
        ret
    }

    /// Shuffles `items` in place with the Fisher-Yates algorithm.
    pub fn shuffle_in_place<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.sampler.index(i);
            items.swap(i, j);
        }
    }

    /// Returns `true` with the given probability.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `probability` is outside `[0, 1]`.
    pub fn flip(&mut self, probability: Float) -> RResult<bool> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ArgumentError::ProbabilityOutOfRange(probability).into());
        }
        Ok(self.sampler.unit() < probability)
    }

    /// Flips a fair coin.
    pub fn fair_flip(&mut self) -> bool {
        self.sampler.unit() < DEFAULT_PROBABILITY
    }

    /// Parses and rolls a dice expression such as `"2d6+1d4+5"`, returning its total.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] if `notation` is malformed, in which case
    /// nothing is drawn from the sampler. See [`Random::roll`] for the rest.
    pub fn die_roll(&mut self, notation: &str) -> RResult<Total> {
        let total = self.roll_notation(notation)?.total();
        tracing::trace!(notation, total, "rolled dice expression");
        Ok(total)
    }

    /// Parses and rolls a dice expression, keeping every face drawn.
    ///
    /// # Errors
    /// See [`Random::die_roll`].
    pub fn roll_notation(&mut self, notation: &str) -> RResult<Roll> {
        let expr = parse::parse(notation)?;
        self.roll(&expr)
    }

    /// Rolls an already parsed expression.
    ///
    /// # Errors
    /// Returns [`Error::TooManyRolls`] before drawing anything if a limit was
    /// set with [`Random::with_max_rolls`] and the expression rolls more dice
    /// than it allows, and [`Error::Overflow`] if the total does not fit in a
    /// [`Total`].
    pub fn roll(&mut self, expr: &Expression) -> RResult<Roll> {
        RollContext::new(self.max_rolls, &mut self.sampler).eval(expr)
    }
}

impl Random<StdRng> {
    /// A reproducible instance: equal seeds give equal sequences of results.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new(rand::thread_rng())
    }
}
