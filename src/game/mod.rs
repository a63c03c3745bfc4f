//! Game state and transitions.
//!
//! Every transition takes the current [`GameState`] by reference and returns
//! a new one. The input is never modified, so a caller may keep any earlier
//! state around and it stays valid.

use crate::error::ActionError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::shoe::Shoe;

mod actions;
mod deal;
mod showdown;
pub mod state;

pub use state::{Participant, Phase};

/// A snapshot of the whole game: shoe, phase, and both hands.
///
/// Cloning is cheap: the shoe is a persistent vector and hands hold only a
/// few cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Cards left to deal. The front is the top of the shoe.
    pub shoe: Shoe,
    /// Current phase.
    pub phase: Phase,
    /// The player's hand.
    pub player: Hand,
    /// The dealer's hand.
    pub dealer: Hand,
    /// Game options.
    pub options: GameOptions,
}

impl GameState {
    /// Creates an uninitialized game.
    ///
    /// The shoe is empty, both hands are empty, and the phase is
    /// [`Phase::HandOver`] so nobody can act. Call [`GameState::shuffle`]
    /// before the first [`GameState::deal`].
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_state::{GameOptions, GameState};
    ///
    /// let game = GameState::new(GameOptions::default()).shuffle(42);
    /// let game = game.deal().unwrap();
    /// assert_eq!(game.player.len(), 2);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        Self {
            shoe: Shoe::default(),
            phase: Phase::HandOver,
            player: Hand::new(),
            dealer: Hand::new(),
            options,
        }
    }

    /// Creates a game over a pre-ordered shoe. The first card is dealt first.
    #[must_use]
    pub fn with_shoe(options: GameOptions, shoe: Shoe) -> Self {
        Self {
            shoe,
            ..Self::new(options)
        }
    }

    /// Returns who is acting, if anyone.
    #[must_use]
    pub const fn participant(&self) -> Option<Participant> {
        self.phase.participant()
    }

    /// Returns the hand of whoever is acting.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidPhase`] when the hand is over.
    pub fn current_hand(&self) -> Result<&Hand, ActionError> {
        match self.participant() {
            Some(Participant::Player) => Ok(&self.player),
            Some(Participant::Dealer) => Ok(&self.dealer),
            None => Err(ActionError::InvalidPhase),
        }
    }

    fn current_hand_mut(&mut self) -> Result<&mut Hand, ActionError> {
        match self.participant() {
            Some(Participant::Player) => Ok(&mut self.player),
            Some(Participant::Dealer) => Ok(&mut self.dealer),
            None => Err(ActionError::InvalidPhase),
        }
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameOptions::default())
    }
}
