//! Dealer strategies.
//!
//! The engine never decides for the dealer. A driver asks a [`DealerPolicy`]
//! what to do and then calls [`GameState::hit`] or [`GameState::stand`].

use crate::error::ActionError;
use crate::game::{GameState, Phase};
use crate::hand::Hand;

/// What the dealer does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerAction {
    /// Draw another card.
    Hit,
    /// Stop drawing.
    Stand,
}

/// A rule for playing the dealer's hand.
pub trait DealerPolicy {
    /// Chooses the dealer's next action for `hand`.
    fn decide(&self, hand: &Hand) -> DealerAction;

    /// Plays the dealer's turn to completion.
    ///
    /// Returns `state` unchanged when it is not the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NoCards`] if the shoe runs out mid-turn.
    fn play(&self, state: &GameState) -> Result<GameState, ActionError> {
        let mut state = state.clone();
        while state.phase == Phase::DealerTurn {
            state = match self.decide(&state.dealer) {
                DealerAction::Hit => state.hit()?,
                DealerAction::Stand => state.stand()?,
            };
        }
        Ok(state)
    }
}

/// Hits on 16 or less and on soft 17.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitSoft17;

impl DealerPolicy for HitSoft17 {
    fn decide(&self, hand: &Hand) -> DealerAction {
        let score = hand.score();
        if score <= 16 || (score == 17 && hand.min_score() != 17) {
            DealerAction::Hit
        } else {
            DealerAction::Stand
        }
    }
}

/// Hits on 16 or less and stands on every 17.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandOnSoft17;

impl DealerPolicy for StandOnSoft17 {
    fn decide(&self, hand: &Hand) -> DealerAction {
        if hand.score() <= 16 {
            DealerAction::Hit
        } else {
            DealerAction::Stand
        }
    }
}
