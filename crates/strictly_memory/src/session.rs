//! Game session: the flip/match state machine over one board.

use std::time::Duration;

use strictly_timers::{Scheduler, TimerId};
use tracing::{debug, info, instrument, trace};

use crate::action::{Flip, FlipOutcome, FlipRejection};
use crate::board::Board;
use crate::contracts::{Contract, FlipContract};
use crate::phase::TurnPhase;
use crate::types::{CardStatus, GameStatus, GameTimer};

/// Delays used by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTimings {
    /// Period of the elapsed-time ticker.
    pub tick: Duration,
    /// How long a mismatched pair stays face up.
    pub reveal: Duration,
}

impl Default for GameTimings {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            reveal: Duration::from_secs(1),
        }
    }
}

/// One game on one board.
///
/// Created on setup and discarded on the next setup. The session owns every
/// counter; the only way to change them is [`GameSession::flip`] and
/// [`GameSession::handle_timer`].
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    phase: TurnPhase,
    status: GameStatus,
    moves: u32,
    matched_pairs: u32,
    elapsed_secs: u64,
    timings: GameTimings,
    ticker: Option<TimerId>,
    pending_conceal: Option<TimerId>,
}

impl GameSession {
    /// Starts a session on a freshly built board.
    #[instrument(skip(board), fields(difficulty = %board.difficulty()))]
    pub fn new(board: Board, timings: GameTimings) -> Self {
        debug!("Session created");
        Self {
            board,
            phase: TurnPhase::AwaitingFirstPick,
            status: GameStatus::Ready,
            moves: 0,
            matched_pairs: 0,
            elapsed_secs: 0,
            timings,
            ticker: None,
            pending_conceal: None,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current turn phase.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Session lifecycle.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Completed turns (pairs of flips).
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Pairs found so far.
    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    /// Pairs on the board.
    pub fn total_pairs(&self) -> u32 {
        self.board.difficulty().pair_count() as u32
    }

    /// Whole seconds the ticker has counted.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Whether flips are currently rejected.
    pub fn is_locked(&self) -> bool {
        self.phase.is_locked()
    }

    /// Whether every pair has been found.
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Whether the elapsed-time ticker is armed.
    pub fn ticker_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Face-up unmatched cards.
    pub fn revealed(&self) -> Vec<usize> {
        self.phase.revealed()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Turns a card face up.
    ///
    /// Ignored when the board is locked, the card is not face down, or the
    /// game is over. The first flip of the session starts the ticker; the
    /// second flip of a turn counts a move and resolves the pair.
    #[instrument(skip(self, scheduler), fields(moves = self.moves))]
    pub fn flip<S>(&mut self, index: usize, scheduler: &mut S) -> FlipOutcome
    where
        S: Scheduler<GameTimer> + ?Sized,
    {
        let action = Flip::new(index);
        if let Err(reason) = FlipContract::pre(self, &action) {
            debug!(%reason, "Flip ignored");
            return FlipOutcome::Ignored(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let outcome = match self.phase {
            TurnPhase::AwaitingFirstPick => {
                self.board.set_status(index, CardStatus::Revealed);
                self.phase = TurnPhase::AwaitingSecondPick { first: index };
                if self.status == GameStatus::Ready {
                    self.start_ticker(scheduler);
                }
                FlipOutcome::Revealed { index }
            }
            TurnPhase::AwaitingSecondPick { first } => {
                self.board.set_status(index, CardStatus::Revealed);
                self.moves += 1;
                self.phase = TurnPhase::Resolving {
                    first,
                    second: index,
                };
                self.resolve(first, index, scheduler)
            }
            TurnPhase::Resolving { .. } => FlipOutcome::Ignored(FlipRejection::Locked),
        };

        #[cfg(debug_assertions)]
        self.assert_contract(&before);

        debug!(?outcome, "Flip applied");
        outcome
    }

    /// Delivers a timer event scheduled by this session.
    #[instrument(skip(self))]
    pub fn handle_timer(&mut self, event: GameTimer) {
        #[cfg(debug_assertions)]
        let before = self.clone();

        match event {
            GameTimer::Tick => {
                if self.status == GameStatus::Playing {
                    self.elapsed_secs += 1;
                    trace!(elapsed_secs = self.elapsed_secs, "Tick");
                }
            }
            GameTimer::ConcealMismatch => {
                self.pending_conceal = None;
                if let TurnPhase::Resolving { first, second } = self.phase {
                    self.board.set_status(first, CardStatus::Hidden);
                    self.board.set_status(second, CardStatus::Hidden);
                    self.phase = TurnPhase::AwaitingFirstPick;
                    debug!(first, second, "Mismatched pair concealed");
                } else {
                    debug!("No pair waiting to be concealed");
                }
            }
        }

        #[cfg(debug_assertions)]
        self.assert_contract(&before);
    }

    /// Cancels every timer this session armed.
    #[instrument(skip(self, scheduler))]
    pub fn cancel_timers<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<GameTimer> + ?Sized,
    {
        if let Some(id) = self.ticker.take() {
            scheduler.cancel(id);
        }
        if let Some(id) = self.pending_conceal.take() {
            scheduler.cancel(id);
        }
    }

    fn resolve<S>(&mut self, first: usize, second: usize, scheduler: &mut S) -> FlipOutcome
    where
        S: Scheduler<GameTimer> + ?Sized,
    {
        let icon = |index: usize| self.board.get(index).map(|card| card.icon());
        let same = icon(first).is_some() && icon(first) == icon(second);

        if !same {
            let id = scheduler.schedule_once(self.timings.reveal, GameTimer::ConcealMismatch);
            self.pending_conceal = Some(id);
            return FlipOutcome::Mismatched { first, second };
        }

        self.board.set_status(first, CardStatus::Matched);
        self.board.set_status(second, CardStatus::Matched);
        self.matched_pairs += 1;
        self.phase = TurnPhase::AwaitingFirstPick;

        if self.matched_pairs < self.total_pairs() {
            return FlipOutcome::Matched { first, second };
        }

        self.status = GameStatus::Won;
        if let Some(id) = self.ticker.take() {
            scheduler.cancel(id);
        }
        info!(
            moves = self.moves,
            elapsed_secs = self.elapsed_secs,
            "All pairs matched"
        );
        FlipOutcome::Won { moves: self.moves }
    }

    fn start_ticker<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<GameTimer> + ?Sized,
    {
        if let Some(previous) = self.ticker.take() {
            scheduler.cancel(previous);
        }
        self.ticker = Some(scheduler.schedule_repeating(self.timings.tick, GameTimer::Tick));
        self.status = GameStatus::Playing;
        debug!("Ticker started");
    }

    #[cfg(debug_assertions)]
    fn assert_contract(&self, before: &GameSession) {
        if let Err(violations) = FlipContract::post(before, self) {
            tracing::error!(?violations, "Session invariants violated");
            debug_assert!(false, "Session invariants violated: {violations:?}");
        }
    }
}
