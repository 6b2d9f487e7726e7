//! First-class flip actions and their outcomes.
//!
//! A flip is a domain event: it can be checked against the session before it
//! is applied, and its outcome is reported back to the host for rendering.

use serde::{Deserialize, Serialize};

/// A request to turn one card face up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flip {
    /// Board position of the card.
    pub index: usize,
}

impl Flip {
    /// Creates a flip of the card at `index`.
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

/// Why a flip was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FlipRejection {
    /// Two cards are waiting to resolve.
    #[display("Board is locked while a pair resolves")]
    Locked,

    /// No card at that position.
    #[display("No card at position {}", _0)]
    OutOfBounds(usize),

    /// The card is already face up.
    #[display("Card {} is already revealed", _0)]
    AlreadyRevealed(usize),

    /// The card belongs to a matched pair.
    #[display("Card {} is already matched", _0)]
    AlreadyMatched(usize),

    /// Every pair has been found.
    #[display("Game is already won")]
    GameOver,
}

impl std::error::Error for FlipRejection {}

/// What a flip did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipOutcome {
    /// The flip was a no-op.
    Ignored(FlipRejection),

    /// First card of a turn is face up.
    Revealed {
        /// Position of the card.
        index: usize,
    },

    /// The two cards matched and stay face up.
    Matched {
        /// First card of the pair.
        first: usize,
        /// Second card of the pair.
        second: usize,
    },

    /// The last pair matched.
    Won {
        /// Total moves taken.
        moves: u32,
    },

    /// The two cards differ and will turn back after the reveal delay.
    Mismatched {
        /// First card of the pair.
        first: usize,
        /// Second card of the pair.
        second: usize,
    },
}

impl FlipOutcome {
    /// Whether the flip changed anything.
    pub fn is_ignored(&self) -> bool {
        matches!(self, FlipOutcome::Ignored(_))
    }
}
