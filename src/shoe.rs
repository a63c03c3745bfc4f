//! The shoe: the ordered supply of undealt cards.

use alloc::vec::Vec;

use im::Vector;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::ShoeError;

/// An ordered sequence of undealt cards. The front is the top of the shoe.
///
/// Backed by a persistent vector, so cloning a shoe is cheap and the clone
/// shares no mutable storage with the original.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shoe {
    cards: Vector<Card>,
}

impl Shoe {
    /// Creates a shoe of `decks` standard decks, fully shuffled with `rng`.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        Self::from_cards(cards)
    }

    /// Creates a shoe in the given order. The first card is drawn first.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Removes the top card and returns it along with the rest of the shoe.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if there are no cards left.
    pub fn draw(mut self) -> Result<(Card, Self), ShoeError> {
        let card = self.cards.pop_front().ok_or(ShoeError::Empty)?;
        Ok((card, self))
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards from the top down.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
