//! Uniform draws, coin flips, shuffles and dice rolls.
//!
//! The free functions draw from the thread-local generator, so they can be
//! called from any number of threads at once. Use [`Random`] to supply a
//! seeded or scripted [`Sampler`] instead.
//!
//! ```
//! let total = random_lib::die_roll("2d6 + 1d4 + 5").unwrap();
//! assert!((8..=21).contains(&total));
//!
//! assert!(random_lib::die(0).is_err());
//! assert!(random_lib::die_roll("2d6 - 1").is_err());
//! ```

mod common;
mod error;
mod random;
mod sample;
// `roll` declares the trait that `parse::ast::Term` dispatches to
pub mod roll;
pub mod parse;

pub use common::{Float, Int, NonZeroUInt, Total, UInt};
pub use error::{ArgumentError, Error};
pub use parse::{ast::Expression, parse, ParseError};
pub use random::{DefaultSampler, Random, DEFAULT_PROBABILITY};
pub use roll::Roll;
pub use sample::Sampler;

/// Returns a value uniformly distributed in `[0, 1)`.
pub fn random() -> Float {
    Random::default().random()
}

/// Returns an integer uniformly distributed in `0..=n`.
pub fn random_n(n: Int) -> Int {
    Random::default().random_n(n)
}

/// Returns an integer uniformly distributed between `n` and `o`, both inclusive.
pub fn random_n_to_o(n: Int, o: Int) -> Int {
    Random::default().random_n_to_o(n, o)
}

/// Rolls a single die with `sides` faces.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `sides` is not positive.
pub fn die(sides: Int) -> Result<Int, Error> {
    Random::default().die(sides)
}

/// Returns a shuffled copy of `items`.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    Random::default().shuffle(items)
}

/// Returns `true` with the given probability.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `probability` is outside `[0, 1]`.
pub fn flip(probability: Float) -> Result<bool, Error> {
    Random::default().flip(probability)
}

/// Flips a fair coin.
pub fn fair_flip() -> bool {
    Random::default().fair_flip()
}

/// Rolls a dice expression such as `"3d6+2d4+5"` and returns its total.
///
/// # Errors
/// Returns [`Error::Parse`] for malformed notation.
pub fn die_roll(notation: &str) -> Result<Total, Error> {
    Random::default().die_roll(notation)
}

/// Rolls a dice expression, keeping every face drawn.
///
/// # Errors
/// See [`die_roll`].
pub fn roll(notation: &str) -> Result<Roll, Error> {
    Random::default().roll_notation(notation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions() {
        assert!((0.0..1.0).contains(&random()));
        assert!((0..=10).contains(&random_n(10)));
        assert_eq!(random_n(0), 0);
        assert_eq!(random_n_to_o(7, 7), 7);
        assert_eq!(die(1).unwrap(), 1);
        assert!(matches!(die(-1), Err(Error::InvalidArgument(_))));
        assert_eq!(shuffle(&[1]), vec![1]);
        assert!(flip(1.0).unwrap());
        assert!(flip(1.5).is_err());
        let _ = fair_flip();
        assert_eq!(die_roll("2").unwrap(), 2);
        assert!(matches!(die_roll("abc"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_die_roll_has_no_roll_limit() {
        assert_eq!(die_roll("10001d1"), Ok(10001));
        let total = die_roll("10001d6").unwrap();
        assert!((10001..=60006).contains(&total));
    }

    #[test]
    fn test_roll_trace() {
        let roll = roll("3d6+2d4+5").unwrap();
        assert!((10..=31).contains(&roll.total()));
        assert_eq!(roll.terms().len(), 3);
        assert!(roll.to_string().ends_with(&format!("+ 5 = {}", roll.total())));
    }

    #[test]
    fn test_threads_roll_independently() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    (0..100)
                        .map(|_| die_roll("3d6").unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            for total in handle.join().unwrap() {
                assert!((3..=18).contains(&total));
            }
        }
    }
}
