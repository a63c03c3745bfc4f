use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::DealError;
use crate::hand::Hand;
use crate::shoe::Shoe;

use super::{GameState, Phase};

/// Cards drawn by a full deal: two each for player and dealer.
const DEAL_SIZE: usize = 4;

impl GameState {
    /// Replaces the shoe with freshly shuffled decks seeded from `seed`.
    ///
    /// Everything else is carried over unchanged.
    #[must_use]
    pub fn shuffle(&self, seed: u64) -> Self {
        self.shuffle_with(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Replaces the shoe with freshly shuffled decks drawn from `rng`.
    #[must_use]
    pub fn shuffle_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let next = Self {
            shoe: Shoe::new(self.options.decks, rng),
            ..self.clone()
        };
        debug!(decks = next.options.decks, remaining = next.shoe.len(), "shuffled");
        next
    }

    /// Deals a new round.
    ///
    /// Both hands start empty and receive two cards each, alternating player
    /// then dealer, from the top of the shoe. The phase resets to
    /// [`Phase::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than four cards remain.
    /// The shoe is never refilled here; shuffle to start a new one.
    pub fn deal(&self) -> Result<Self, DealError> {
        if self.shoe.len() < DEAL_SIZE {
            return Err(DealError::NotEnoughCards);
        }

        let mut shoe = self.shoe.clone();
        let mut player = Hand::with_capacity(self.options.hand_capacity);
        let mut dealer = Hand::with_capacity(self.options.hand_capacity);

        for _ in 0..2 {
            let (card, rest) = shoe.draw()?;
            player.push(card);
            let (card, rest) = rest.draw()?;
            dealer.push(card);
            shoe = rest;
        }

        let next = Self {
            shoe,
            phase: Phase::PlayerTurn,
            player,
            dealer,
            options: self.options,
        };
        debug!(
            player = next.player.score(),
            remaining = next.shoe.len(),
            "dealt"
        );
        Ok(next)
    }
}
