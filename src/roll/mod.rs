mod ctx;
mod eval;
mod tree;

use crate::error::Error;

type RResult<T> = Result<T, Error>;

pub use ctx::RollContext;
pub use eval::Evaluate;
pub use tree::{Roll, TermRoll};
