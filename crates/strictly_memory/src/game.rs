//! Memory game controller: session lifecycle plus best-score recording.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_timers::Scheduler;
use tracing::{info, instrument, warn};

use crate::action::FlipOutcome;
use crate::best_score::{BestScores, ScoreStore};
use crate::board::Board;
use crate::session::{GameSession, GameTimings};
use crate::types::{Difficulty, GameTimer};

/// Owns the current session and the best-score store.
///
/// Hosts route three kinds of events here: setup (start, reset, difficulty
/// change), flips, and timer events from the scheduler they pass in.
#[derive(Debug)]
pub struct MemoryGame<S> {
    session: GameSession,
    scores: BestScores<S>,
    timings: GameTimings,
    rng: StdRng,
}

impl<S: ScoreStore> MemoryGame<S> {
    /// Creates a game with a freshly shuffled board.
    #[instrument(skip(store))]
    pub fn new(store: S, timings: GameTimings, difficulty: Difficulty) -> Self {
        Self::from_rng(store, timings, difficulty, StdRng::from_entropy())
    }

    /// Creates a game whose boards come from a seeded generator.
    #[instrument(skip(store))]
    pub fn seeded(store: S, timings: GameTimings, difficulty: Difficulty, seed: u64) -> Self {
        Self::from_rng(store, timings, difficulty, StdRng::seed_from_u64(seed))
    }

    /// Creates a game on a given board. Later setups shuffle as usual.
    #[instrument(skip(store, board))]
    pub fn with_board(store: S, timings: GameTimings, board: Board) -> Self {
        Self {
            session: GameSession::new(board, timings),
            scores: BestScores::new(store),
            timings,
            rng: StdRng::from_entropy(),
        }
    }

    fn from_rng(store: S, timings: GameTimings, difficulty: Difficulty, mut rng: StdRng) -> Self {
        let board = Board::generate(difficulty, &mut rng);
        Self {
            session: GameSession::new(board, timings),
            scores: BestScores::new(store),
            timings,
            rng,
        }
    }

    /// The current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Difficulty of the current board.
    pub fn difficulty(&self) -> Difficulty {
        self.session.board().difficulty()
    }

    /// Best-score records.
    pub fn scores(&self) -> &BestScores<S> {
        &self.scores
    }

    /// Best move count for a tier, if any.
    pub fn best_score(&self, difficulty: Difficulty) -> Option<u32> {
        self.scores.best(difficulty)
    }

    /// Builds a new board and discards the current session.
    ///
    /// Any running ticker and pending mismatch reversion are cancelled first,
    /// so the new session starts with no timers armed.
    #[instrument(skip(self, scheduler))]
    pub fn setup_board<T>(&mut self, difficulty: Difficulty, scheduler: &mut T)
    where
        T: Scheduler<GameTimer> + ?Sized,
    {
        self.session.cancel_timers(scheduler);
        let board = Board::generate(difficulty, &mut self.rng);
        self.session = GameSession::new(board, self.timings);
        info!(%difficulty, "Board set up");
    }

    /// Flips a card. A winning flip records the best score.
    #[instrument(skip(self, scheduler))]
    pub fn flip<T>(&mut self, index: usize, scheduler: &mut T) -> FlipOutcome
    where
        T: Scheduler<GameTimer> + ?Sized,
    {
        let outcome = self.session.flip(index, scheduler);
        if let FlipOutcome::Won { moves } = outcome {
            self.record_best_score(self.difficulty(), moves);
        }
        outcome
    }

    /// Delivers a timer event.
    pub fn handle_timer(&mut self, event: GameTimer) {
        self.session.handle_timer(event);
    }

    /// Stores `moves` as the tier's best if it beats the record.
    ///
    /// A store failure is logged and reported as "not updated".
    #[instrument(skip(self))]
    pub fn record_best_score(&mut self, difficulty: Difficulty, moves: u32) -> bool {
        match self.scores.record(difficulty, moves) {
            Ok(updated) => updated,
            Err(e) => {
                warn!(error = %e, "Could not persist best score");
                false
            }
        }
    }
}
