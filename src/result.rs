//! Round result types reported when a hand ends.

use core::fmt;

use crate::hand::{BLACKJACK, Hand};

/// Outcome of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player went over 21 and loses.
    PlayerBust,
    /// Dealer went over 21 and the player wins.
    DealerBust,
    /// Player has the higher score.
    PlayerWin,
    /// Dealer has the higher score.
    DealerWin,
    /// Scores are equal.
    Push,
}

impl HandOutcome {
    /// Decides the outcome from the final scores.
    ///
    /// Checked in order: player bust, dealer bust, higher score, tie.
    #[must_use]
    pub const fn from_scores(player: u8, dealer: u8) -> Self {
        if player > BLACKJACK {
            Self::PlayerBust
        } else if dealer > BLACKJACK {
            Self::DealerBust
        } else if player > dealer {
            Self::PlayerWin
        } else if dealer > player {
            Self::DealerWin
        } else {
            Self::Push
        }
    }

    /// Returns whether the player won the round.
    #[must_use]
    pub const fn player_wins(&self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWin)
    }
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerBust => "You busted",
            Self::DealerBust => "Dealer busted",
            Self::PlayerWin => "You win!",
            Self::DealerWin => "You lose",
            Self::Push => "Draw",
        })
    }
}

/// Final hands, scores, and outcome of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The player's final hand.
    pub player: Hand,
    /// The dealer's final hand.
    pub dealer: Hand,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// The outcome of the round.
    pub outcome: HandOutcome,
}

impl RoundResult {
    /// Scores both hands and decides the outcome.
    #[must_use]
    pub fn settle(player: Hand, dealer: Hand) -> Self {
        let player_score = player.score();
        let dealer_score = dealer.score();
        Self {
            outcome: HandOutcome::from_scores(player_score, dealer_score),
            player,
            dealer,
            player_score,
            dealer_score,
        }
    }
}
