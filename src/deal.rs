//! The under-down deal.
//!
//! One round of the deal takes the deck in hand and repeats two steps until every card is on the
//! table:
//!
//! 1. Take the top card and put it face down onto the table pile.
//! 2. Take the next card and put it on the bottom of the deck in hand.
//!
//! Picking up the table pile gives the deck for the next round. As the table pile is a stack, the
//! first card dealt ends up at the bottom.
use std::collections::VecDeque;

use tracing::debug;

use crate::{error::Error, perm::Perm, point::Point, DeckSize};

/// Returns the 0-based positions of the cards in the order they are put onto the table.
///
/// The first pass over the deck deals every card at an even 0-based position, the remaining cards
/// keep alternating in a queue. This is linear in `cards` as every pass halves the queue.
fn deal_sequence(deck: DeckSize) -> Vec<usize> {
    let cards = deck.get();
    let half = cards / 2 + cards % 2;

    let mut dealt = Vec::with_capacity(cards);
    dealt.extend((0..half).map(|k| 2 * k));

    let mut hand = VecDeque::with_capacity(cards - half);
    if cards % 2 == 0 {
        // The first pass ends by putting the last card under, the next step deals.
        hand.extend((0..cards - half).map(|k| 2 * k + 1));
    } else {
        // The first pass ends by dealing the last card, so the next step puts the first
        // remaining card under.
        hand.extend((1..cards - half).map(|k| 2 * k + 1));
        if cards > 1 {
            hand.push_back(1);
        }
    }

    while let Some(card) = hand.pop_front() {
        dealt.push(card);
        if let Some(under) = hand.pop_front() {
            hand.push_back(under);
        }
    }

    dealt
}

/// Returns the 1-based card numbers in the order they are put onto the table during one round.
///
/// For a four card deck this is `[1, 3, 2, 4]`.
pub fn deal_order(cards: usize) -> Result<Vec<usize>, Error> {
    let deck = DeckSize::new(cards)?;
    Ok(deal_sequence(deck).into_iter().map(|card| card + 1).collect())
}

/// Returns the permutation performed by one round of dealing `cards` cards.
///
/// The image of position `i` is the position the card now at `i` was at before the round, so
/// [`Perm::apply`] performs a round on a deck given as a sequence from top to bottom. For five
/// cards this is the permutation with 1-based images `[2, 4, 5, 3, 1]`.
///
/// Returns [`Error::InvalidInput`] for an empty deck and [`Error::Overflow`] if the deck has more
/// than `Pt::MAX_DEGREE` cards.
pub fn build_permutation<Pt: Point>(cards: usize) -> Result<Perm<Pt>, Error> {
    let deck = DeckSize::new(cards)?;
    if cards > Pt::MAX_DEGREE {
        return Err(Error::Overflow { bits: Pt::BITS });
    }

    // The table pile is read from the top, i.e. against the dealing order
    let images = deal_sequence(deck)
        .into_iter()
        .rev()
        .map(Pt::from_index)
        .collect();

    debug!(cards, "built round permutation");
    Ok(Perm::from_images_unchecked(images))
}

/// Deals one round by literally moving the cards of `deck`, given from top to bottom.
pub fn simulate_round<T>(deck: &mut VecDeque<T>) {
    let mut table = Vec::with_capacity(deck.len());
    let mut deal = true;

    while let Some(card) = deck.pop_front() {
        if deal || deck.is_empty() {
            table.push(card);
        } else {
            deck.push_back(card);
        }
        deal = !deal;
    }

    deck.extend(table.into_iter().rev());
}

/// Counts rounds by dealing a deck of `cards` cards until it is back in its original order.
///
/// This takes time proportional to `cards` times the result. It serves as a reference for
/// [`crate::rounds`].
pub fn rounds_by_simulation(cards: usize) -> Result<u64, Error> {
    DeckSize::new(cards)?;

    let mut deck: VecDeque<usize> = (0..cards).collect();
    let mut rounds = 0u64;
    loop {
        simulate_round(&mut deck);
        rounds = rounds.checked_add(1).ok_or_else(Error::overflow::<u64>)?;
        if deck.iter().enumerate().all(|(pos, &card)| pos == card) {
            debug!(cards, rounds, "deck back in order");
            return Ok(rounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::proptest;

    use crate::one_based::OneBased;

    use super::*;

    fn one_based_images(perm: &Perm<u32>) -> Vec<usize> {
        perm.images().iter().map(|&image| image as usize + 1).collect()
    }

    #[test]
    fn four_cards() {
        assert_eq!(deal_order(4), Ok(vec![1, 3, 2, 4]));
        let perm = build_permutation::<u32>(4).unwrap();
        assert_eq!(one_based_images(&perm), [4, 2, 3, 1]);
        assert_eq!(perm.order::<u64>(), Ok(2));
    }

    #[test]
    fn five_cards() {
        assert_eq!(deal_order(5), Ok(vec![1, 3, 5, 4, 2]));
        let perm = build_permutation::<u32>(5).unwrap();
        assert_eq!(one_based_images(&perm), [2, 4, 5, 3, 1]);
        assert_eq!(OneBased(&perm).to_string(), "(1 2 4 3 5)");
        assert_eq!(perm.cycle_type().lengths(), &[5]);
    }

    #[test]
    fn small_decks() {
        assert!(build_permutation::<u32>(1).unwrap().is_identity());
        assert_eq!(one_based_images(&build_permutation(2).unwrap()), [2, 1]);
        assert_eq!(one_based_images(&build_permutation(3).unwrap()), [2, 3, 1]);
        assert_eq!(
            one_based_images(&build_permutation(8).unwrap()),
            [8, 4, 6, 2, 7, 5, 3, 1]
        );
    }

    #[test]
    fn invalid_decks() {
        assert_eq!(
            build_permutation::<u32>(0),
            Err(Error::InvalidInput { cards: 0 })
        );
        assert_eq!(deal_order(0), Err(Error::InvalidInput { cards: 0 }));
        assert_eq!(rounds_by_simulation(0), Err(Error::InvalidInput { cards: 0 }));
        assert_eq!(
            build_permutation::<u16>((1 << 16) + 1),
            Err(Error::Overflow { bits: 16 })
        );
    }

    #[test]
    fn largest_u16_deck() {
        let perm = build_permutation::<u16>(1 << 16).unwrap();
        assert_eq!(perm.degree(), 1 << 16);
        assert_eq!(perm.image(u16::MAX), 0);
    }

    #[test]
    fn simulated_rounds() {
        let mut deck: VecDeque<_> = (1..=5).collect();
        simulate_round(&mut deck);
        assert_eq!(deck, [2, 4, 5, 3, 1]);

        assert_eq!(rounds_by_simulation(1), Ok(1));
        assert_eq!(rounds_by_simulation(5), Ok(5));
        assert_eq!(rounds_by_simulation(42), Ok(42));
        assert_eq!(rounds_by_simulation(52), Ok(510));
    }

    proptest! {
        #[test]
        fn permutation_matches_simulation(cards in 1usize..300) {
            let perm = build_permutation::<u32>(cards).unwrap();
            let mut deck: VecDeque<usize> = (0..cards).collect();
            simulate_round(&mut deck);
            assert!(deck.iter().copied().eq(perm.images().iter().map(|&image| image as usize)));

            let mut dealt = deal_order(cards).unwrap();
            dealt.reverse();
            assert_eq!(dealt, one_based_images(&perm));
        }
    }
}
