//! Turn phases within a session.

use serde::{Deserialize, Serialize};

/// Where the current turn stands.
///
/// The phase records which cards are face up but not yet matched, so the
/// revealed set can never exceed two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No unmatched card is face up.
    #[default]
    AwaitingFirstPick,
    /// One unmatched card is face up.
    AwaitingSecondPick {
        /// The face-up card.
        first: usize,
    },
    /// Two unmatched cards are face up; input is locked.
    Resolving {
        /// First card of the pair.
        first: usize,
        /// Second card of the pair.
        second: usize,
    },
}

impl TurnPhase {
    /// Whether flips are rejected.
    pub fn is_locked(&self) -> bool {
        matches!(self, TurnPhase::Resolving { .. })
    }

    /// Positions of the face-up unmatched cards.
    pub fn revealed(&self) -> Vec<usize> {
        match *self {
            TurnPhase::AwaitingFirstPick => Vec::new(),
            TurnPhase::AwaitingSecondPick { first } => vec![first],
            TurnPhase::Resolving { first, second } => vec![first, second],
        }
    }
}
