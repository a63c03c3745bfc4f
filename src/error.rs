//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    Empty,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the shoe for a full deal.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
}

impl From<ShoeError> for DealError {
    fn from(_: ShoeError) -> Self {
        Self::NotEnoughCards
    }
}

/// Errors that can occur during hit and stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No participant is acting in the current phase.
    #[error("it isn't currently any player's turn")]
    InvalidPhase,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

impl From<ShoeError> for ActionError {
    fn from(_: ShoeError) -> Self {
        Self::NoCards
    }
}
