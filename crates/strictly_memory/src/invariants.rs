//! First-class invariants for a game session.
//!
//! Invariants are properties that hold between any two events. They are
//! checked after every transition in debug builds and can be tested on their
//! own.

use std::collections::BTreeSet;

use crate::session::GameSession;
use crate::types::{CardStatus, GameStatus};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of up to five invariants.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

/// Invariant: at most two cards are face up and unmatched.
pub struct PendingPairBounded;

impl Invariant<GameSession> for PendingPairBounded {
    fn holds(session: &GameSession) -> bool {
        session.board().count_status(CardStatus::Revealed) <= 2
    }

    fn description() -> &'static str {
        "At most two unmatched cards are revealed"
    }
}

/// Invariant: the revealed cards are exactly the ones the turn phase records.
pub struct RevealedMatchesPhase;

impl Invariant<GameSession> for RevealedMatchesPhase {
    fn holds(session: &GameSession) -> bool {
        let on_board: BTreeSet<usize> = session
            .board()
            .cards()
            .iter()
            .filter(|card| card.status() == CardStatus::Revealed)
            .map(|card| card.index())
            .collect();
        let in_phase: BTreeSet<usize> = session.phase().revealed().into_iter().collect();
        on_board == in_phase
    }

    fn description() -> &'static str {
        "Revealed cards match the turn phase"
    }
}

/// Invariant: matched cards come in pairs and agree with the pair counter.
pub struct MatchedCountConsistent;

impl Invariant<GameSession> for MatchedCountConsistent {
    fn holds(session: &GameSession) -> bool {
        let matched = session.board().count_status(CardStatus::Matched);
        matched == 2 * session.matched_pairs() as usize
            && session.moves() >= session.matched_pairs()
    }

    fn description() -> &'static str {
        "Matched cards equal twice the matched pairs"
    }
}

/// Invariant: every icon on the board appears exactly twice.
pub struct IconsPaired;

impl Invariant<GameSession> for IconsPaired {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        board.len() == board.difficulty().card_count()
            && board.icon_counts().values().all(|&n| n == 2)
    }

    fn description() -> &'static str {
        "Every icon appears exactly twice"
    }
}

/// Invariant: the ticker runs exactly while the game is being played.
pub struct TickerMatchesStatus;

impl Invariant<GameSession> for TickerMatchesStatus {
    fn holds(session: &GameSession) -> bool {
        session.ticker_running() == (session.status() == GameStatus::Playing)
    }

    fn description() -> &'static str {
        "Ticker runs only while playing"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (
    PendingPairBounded,
    RevealedMatchesPhase,
    MatchedCountConsistent,
    IconsPaired,
    TickerMatchesStatus,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::session::GameTimings;
    use crate::types::{Difficulty, Icon};
    use strictly_timers::TimerQueue;

    fn session() -> GameSession {
        let icons = Icon::PALETTE[..6].iter().flat_map(|&i| [i, i]).collect();
        let board = Board::from_icons(Difficulty::Easy, icons).expect("valid layout");
        GameSession::new(board, GameTimings::default())
    }

    #[test]
    fn test_invariants_hold_for_fresh_session() {
        assert!(SessionInvariants::check_all(&session()).is_ok());
    }

    #[test]
    fn test_invariants_hold_through_a_turn() {
        let mut session = session();
        let mut timers = TimerQueue::new();

        session.flip(0, &mut timers);
        assert!(SessionInvariants::check_all(&session).is_ok());
        session.flip(2, &mut timers);
        assert!(SessionInvariants::check_all(&session).is_ok());
        session.flip(1, &mut timers);
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_stray_revealed_card_is_detected() {
        let mut session = session();
        session.board_mut().set_status(5, CardStatus::Revealed);

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, RevealedMatchesPhase::description());
    }

    #[test]
    fn test_half_matched_pair_is_detected() {
        let mut session = session();
        session.board_mut().set_status(0, CardStatus::Matched);

        assert!(!MatchedCountConsistent::holds(&session));
        type TwoInvariants = (PendingPairBounded, MatchedCountConsistent);
        assert!(TwoInvariants::check_all(&session).is_err());
    }
}
