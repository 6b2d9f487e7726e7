//! Contract-based validation for flips.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} flip {Q}. A failed precondition turns the flip into a no-op; a failed
//! postcondition is a bug in the session.

use tracing::instrument;

use crate::action::{Flip, FlipRejection};
use crate::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use crate::session::GameSession;
use crate::types::{CardStatus, GameStatus};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), FlipRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the game is not over.
pub struct GameInPlay;

impl GameInPlay {
    /// Checks the precondition.
    pub fn check(session: &GameSession) -> Result<(), FlipRejection> {
        if session.status() == GameStatus::Won {
            Err(FlipRejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: no pair is resolving.
pub struct BoardUnlocked;

impl BoardUnlocked {
    /// Checks the precondition.
    pub fn check(session: &GameSession) -> Result<(), FlipRejection> {
        if session.is_locked() {
            Err(FlipRejection::Locked)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the card exists and is face down.
pub struct CardFaceDown;

impl CardFaceDown {
    /// Checks the precondition.
    pub fn check(flip: &Flip, session: &GameSession) -> Result<(), FlipRejection> {
        let card = session
            .board()
            .get(flip.index)
            .ok_or(FlipRejection::OutOfBounds(flip.index))?;
        match card.status() {
            CardStatus::Hidden => Ok(()),
            CardStatus::Revealed => Err(FlipRejection::AlreadyRevealed(flip.index)),
            CardStatus::Matched => Err(FlipRejection::AlreadyMatched(flip.index)),
        }
    }
}

/// Composite precondition: a flip is legal when the game is running, the
/// board is unlocked and the card is face down.
pub struct LegalFlip;

impl LegalFlip {
    /// Validates all preconditions for a flip.
    #[instrument(skip(session))]
    pub fn check(flip: &Flip, session: &GameSession) -> Result<(), FlipRejection> {
        GameInPlay::check(session)?;
        BoardUnlocked::check(session)?;
        CardFaceDown::check(flip, session)?;
        Ok(())
    }
}

/// Contract for flips and timer-driven resolution.
///
/// Preconditions: see [`LegalFlip`].
///
/// Postconditions:
/// - every [`SessionInvariants`] member holds
/// - the move counter grows by at most one
/// - matched pairs never decrease
pub struct FlipContract;

impl Contract<GameSession, Flip> for FlipContract {
    fn pre(session: &GameSession, flip: &Flip) -> Result<(), FlipRejection> {
        LegalFlip::check(flip, session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match SessionInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        if after.moves() < before.moves() || after.moves() > before.moves() + 1 {
            violations.push(InvariantViolation::new("Moves advance by at most one per flip"));
        }
        if after.matched_pairs() < before.matched_pairs() {
            violations.push(InvariantViolation::new("Matched pairs never decrease"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
