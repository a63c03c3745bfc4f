//! Player and dealer hand representation.

use core::fmt;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest score that does not bust.
pub const BLACKJACK: u8 = 21;

/// Placeholder rendered in place of the dealer's unrevealed cards.
pub const HIDDEN: &str = "**HIDDEN**";

/// An ordered sequence of cards held by one participant.
///
/// Cards stay in the order they were dealt. Several physical decks share a
/// shoe, so the same rank and suit may appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates an empty hand with room for `capacity` cards.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
        }
    }

    /// Adds a card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes every card from the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of the hand with every ace counted as 1 and face cards as 10.
    #[must_use]
    pub fn min_score(&self) -> u8 {
        self.cards
            .iter()
            .fold(0u8, |score, card| score.saturating_add(card.min_value()))
    }

    /// Best score of the hand.
    ///
    /// At most one ace is promoted from 1 to 11, and only when that cannot
    /// take the hand past 21.
    #[must_use]
    pub fn score(&self) -> u8 {
        let min_score = self.min_score();
        if min_score > 11 {
            return min_score;
        }
        if self.cards.iter().any(Card::is_ace) {
            // ace goes from 1 to 11
            return min_score + 10;
        }
        min_score
    }

    /// Returns whether the score counts an ace as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.score() != self.min_score()
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Renders the first card and hides the rest.
    ///
    /// Used for the dealer's hand while the player is still acting.
    #[must_use]
    pub fn dealer_string(&self) -> alloc::string::String {
        self.cards.first().map_or_else(
            || HIDDEN.into(),
            |card| alloc::format!("{card}, {HIDDEN}"),
        )
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
