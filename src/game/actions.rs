use core::mem;

use tracing::debug;

use crate::error::ActionError;

use super::GameState;

impl GameState {
    fn advance(&mut self) -> Result<(), ActionError> {
        self.phase = self.phase.next().ok_or(ActionError::InvalidPhase)?;
        Ok(())
    }

    /// Draws a card for whoever is acting.
    ///
    /// If the hand goes over 21 the turn ends as if [`GameState::stand`]
    /// had been called.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidPhase`] when the hand is over, or
    /// [`ActionError::NoCards`] when the shoe is empty.
    pub fn hit(&self) -> Result<Self, ActionError> {
        let participant = self.participant().ok_or(ActionError::InvalidPhase)?;

        let mut next = self.clone();
        let (card, shoe) = mem::take(&mut next.shoe).draw()?;
        next.shoe = shoe;

        let hand = next.current_hand_mut()?;
        hand.push(card);
        let score = hand.score();
        debug!(?participant, %card, score, "hit");

        if hand.is_bust() {
            next.advance()?;
            debug!(?participant, phase = ?next.phase, "bust");
        }
        Ok(next)
    }

    /// Ends the current participant's turn.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidPhase`] when the hand is already over.
    pub fn stand(&self) -> Result<Self, ActionError> {
        let mut next = self.clone();
        next.advance()?;
        debug!(phase = ?next.phase, "stand");
        Ok(next)
    }
}
