//! Underdeal counts how many rounds of an under-down deal it takes until a deck of cards is back in
//! its original order.
//!
//! A round is a fixed permutation of the deck, see [`deal`]. The deck is back in order when that
//! permutation has been applied a multiple of each of its cycle lengths, so the answer is the least
//! common multiple of the cycle lengths:
//!
//! ```
//! assert_eq!(underdeal::rounds(5), Ok(5));
//! assert_eq!(underdeal::rounds(42), Ok(42));
//! assert_eq!(underdeal::rounds(52), Ok(510));
//! ```

#![warn(missing_docs)]

use std::num::NonZeroUsize;

use tracing::debug;

pub mod arith;
pub mod cycles;
pub mod deal;
pub mod error;
pub mod one_based;
pub mod perm;
pub mod point;

pub use error::Error;

use point::Point;

/// Number of cards in a deck, always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeckSize(NonZeroUsize);

impl DeckSize {
    /// Returns the deck size or [`Error::InvalidInput`] for an empty deck.
    #[inline]
    pub fn new(cards: usize) -> Result<Self, Error> {
        NonZeroUsize::new(cards)
            .map(DeckSize)
            .ok_or(Error::InvalidInput { cards: 0 })
    }

    /// Returns the number of cards.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for DeckSize {
    type Error = Error;

    fn try_from(cards: i64) -> Result<Self, Self::Error> {
        if cards <= 0 {
            return Err(Error::InvalidInput { cards });
        }
        let cards = usize::try_from(cards).map_err(|_| Error::overflow::<usize>())?;
        DeckSize::new(cards)
    }
}

/// Returns the number of rounds after which a deck of `cards` cards is back in its original order.
///
/// Returns [`Error::InvalidInput`] for an empty deck and [`Error::Overflow`] when the number of
/// rounds does not fit into a `u64`.
pub fn rounds(cards: usize) -> Result<u64, Error> {
    let deck = DeckSize::new(cards)?;
    if deck.get() == 1 {
        return Ok(1);
    }

    #[cfg(target_pointer_width = "64")]
    if cards > u32::MAX_DEGREE {
        return rounds_with::<u64>(deck);
    }

    rounds_with::<u32>(deck)
}

fn rounds_with<Pt: Point>(deck: DeckSize) -> Result<u64, Error> {
    let perm = deal::build_permutation::<Pt>(deck.get())?;
    let cycle_type = perm.cycle_type();
    debug!(
        cards = deck.get(),
        cycles = cycle_type.len(),
        fixed_points = cycle_type.fixed_points(),
        "decomposed round permutation"
    );
    let rounds: u64 = cycle_type.order()?;
    debug!(cards = deck.get(), rounds, "computed rounds");
    Ok(rounds)
}
