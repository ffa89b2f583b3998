//! Errors reported by the round computation.
use thiserror::Error;

/// Error type for all fallible operations of this crate.
///
/// Every error aborts the computation, no partial result is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The deck size is zero or negative.
    #[error("expecting a positive number of cards, got {cards}")]
    InvalidInput {
        /// The rejected deck size.
        cards: i64,
    },
    /// A position or the round count does not fit the used unsigned integer type.
    #[error("deck too large, result exceeds {bits}-bit unsigned arithmetic")]
    Overflow {
        /// Width of the integer type that overflowed.
        bits: u32,
    },
}

impl Error {
    pub(crate) fn overflow<T>() -> Self {
        Error::Overflow {
            bits: (std::mem::size_of::<T>() * 8) as u32,
        }
    }
}
