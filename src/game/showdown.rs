use core::mem;

use tracing::info;

use crate::result::RoundResult;

use super::GameState;

impl GameState {
    /// Settles the round and clears both hands.
    ///
    /// Returns the next state together with the final hands, scores, and
    /// outcome. The phase and the shoe are left as they are; the next
    /// [`GameState::deal`] starts a new round.
    #[must_use]
    pub fn end_hand(&self) -> (Self, RoundResult) {
        let mut next = self.clone();
        let result = RoundResult::settle(mem::take(&mut next.player), mem::take(&mut next.dealer));

        info!(
            player = %result.player,
            player_score = result.player_score,
            dealer = %result.dealer,
            dealer_score = result.dealer_score,
            outcome = ?result.outcome,
            "hand over"
        );
        (next, result)
    }
}
