//! Tile-matching memory game.
//!
//! # Architecture
//!
//! - **Board**: [`Board`] deals `rows × cols` face-down [`Card`]s, each
//!   [`Icon`] exactly twice, shuffled
//! - **Session**: [`GameSession`] runs the flip/match state machine over
//!   [`TurnPhase`]; contracts guard every flip and invariants are re-checked
//!   after every transition in debug builds
//! - **Scores**: [`BestScores`] keeps the lowest move count per
//!   [`Difficulty`] in any [`ScoreStore`]
//! - **Controller**: [`MemoryGame`] ties the three together for a host
//!
//! Time never passes on its own. The ticker and the mismatch delay are timers
//! on a [`strictly_timers::Scheduler`] supplied by the caller.
//!
//! # Example
//!
//! ```
//! use strictly_memory::{Difficulty, GameTimer, GameTimings, MemoryGame, MemoryStore};
//! use strictly_timers::TimerQueue;
//!
//! let mut timers = TimerQueue::<GameTimer>::new();
//! let mut game = MemoryGame::seeded(MemoryStore::new(), GameTimings::default(), Difficulty::Easy, 7);
//!
//! game.flip(0, &mut timers);
//! assert!(game.session().ticker_running());
//! assert_eq!(game.session().moves(), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod best_score;
mod board;
mod contracts;
mod error;
mod game;
mod invariants;
mod phase;
mod session;
mod types;

pub use action::{Flip, FlipOutcome, FlipRejection};
pub use best_score::{BestScores, MemoryStore, NO_RECORD, ScoreStore};
pub use board::{Board, BoardError};
pub use contracts::{BoardUnlocked, CardFaceDown, Contract, FlipContract, GameInPlay, LegalFlip};
pub use error::StoreError;
pub use game::MemoryGame;
pub use invariants::{
    IconsPaired, Invariant, InvariantSet, InvariantViolation, MatchedCountConsistent,
    PendingPairBounded, RevealedMatchesPhase, SessionInvariants, TickerMatchesStatus,
};
pub use phase::TurnPhase;
pub use session::{GameSession, GameTimings};
pub use types::{Card, CardStatus, Difficulty, GameStatus, GameTimer, Icon};
