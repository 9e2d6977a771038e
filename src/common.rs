use std::num::NonZeroU32;
pub use vec1::vec1;

pub type Int = i32;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

pub type Float = f64;

/// The type of a dice expression's total.
pub type Total = i64;

pub type NonEmpty<T> = vec1::Vec1<T>;
