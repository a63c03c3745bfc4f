//! An immutable blackjack rules engine.
//!
//! A round is driven by transitions on [`GameState`]: [`GameState::shuffle`],
//! [`GameState::deal`], [`GameState::hit`], [`GameState::stand`], and
//! [`GameState::end_hand`]. Each one returns a new state and leaves its input
//! untouched. Dealer decisions live outside the engine in [`policy`].
//!
//! # Example
//!
//! ```
//! use blackjack_state::{DealerPolicy, GameOptions, GameState, HitSoft17, Phase};
//!
//! let game = GameState::new(GameOptions::default()).shuffle(42);
//! let game = game.deal().unwrap();
//! assert_eq!(game.phase, Phase::PlayerTurn);
//!
//! let game = game.stand().unwrap();
//! let game = HitSoft17.play(&game).unwrap();
//! let (_game, result) = game.end_hand();
//! println!("{}", result.outcome);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod policy;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, DealError, ShoeError};
pub use game::{GameState, Participant, Phase};
pub use hand::Hand;
pub use options::GameOptions;
pub use policy::{DealerAction, DealerPolicy, HitSoft17, StandOnSoft17};
pub use result::{HandOutcome, RoundResult};
pub use shoe::Shoe;
