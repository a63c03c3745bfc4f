//! Round phase types.

/// Stage of a round.
///
/// Phases only move forward: `PlayerTurn`, then `DealerTurn`, then
/// `HandOver`. A new deal starts the next round back at `PlayerTurn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// The player is acting.
    PlayerTurn,
    /// The dealer is acting.
    DealerTurn,
    /// The round is finished and can be ended.
    HandOver,
}

impl Phase {
    /// Returns the following phase, or `None` from `HandOver`.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::PlayerTurn => Some(Self::DealerTurn),
            Self::DealerTurn => Some(Self::HandOver),
            Self::HandOver => None,
        }
    }

    /// Returns who is acting in this phase, if anyone.
    #[must_use]
    pub const fn participant(self) -> Option<Participant> {
        match self {
            Self::PlayerTurn => Some(Participant::Player),
            Self::DealerTurn => Some(Participant::Dealer),
            Self::HandOver => None,
        }
    }
}

/// The participant whose hand is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Participant {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}
