//! Tests for the flip state machine, timers and best-score recording.

use std::time::Duration;

use strictly_memory::{
    Board, CardStatus, Difficulty, FlipOutcome, FlipRejection, GameStatus, GameTimer, GameTimings,
    Icon, MemoryGame, MemoryStore, ScoreStore,
};
use strictly_timers::TimerQueue;

/// Easy layout with each pair side by side: 0-1, 2-3, ... 10-11.
fn paired_board() -> Board {
    let icons = Icon::PALETTE[..6].iter().flat_map(|&i| [i, i]).collect();
    Board::from_icons(Difficulty::Easy, icons).expect("valid layout")
}

fn game() -> MemoryGame<MemoryStore> {
    MemoryGame::with_board(MemoryStore::new(), GameTimings::default(), paired_board())
}

fn elapse(game: &mut MemoryGame<MemoryStore>, timers: &mut TimerQueue<GameTimer>, by: Duration) {
    timers.advance_with(by, |_, event| game.handle_timer(event));
}

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

#[test]
fn test_first_flip_starts_ticker() {
    let mut game = game();
    let mut timers = TimerQueue::new();
    assert_eq!(game.session().status(), GameStatus::Ready);

    assert_eq!(game.flip(4, &mut timers), FlipOutcome::Revealed { index: 4 });
    assert_eq!(game.session().status(), GameStatus::Playing);
    assert!(game.session().ticker_running());

    elapse(&mut game, &mut timers, secs(3));
    assert_eq!(game.session().elapsed_secs(), 3);
}

#[test]
fn test_same_card_twice_is_ignored() {
    let mut game = game();
    let mut timers = TimerQueue::new();
    game.flip(0, &mut timers);

    assert_eq!(
        game.flip(0, &mut timers),
        FlipOutcome::Ignored(FlipRejection::AlreadyRevealed(0))
    );
    assert_eq!(game.session().moves(), 0);
    assert_eq!(game.session().revealed(), vec![0]);
}

#[test]
fn test_out_of_range_flip_is_ignored() {
    let mut game = game();
    let mut timers = TimerQueue::new();

    assert!(game.flip(12, &mut timers).is_ignored());
    assert_eq!(game.session().status(), GameStatus::Ready);
    assert_eq!(timers.pending(), 0);
}

#[test]
fn test_matching_pair_stays_face_up() {
    let mut game = game();
    let mut timers = TimerQueue::new();
    game.flip(0, &mut timers);

    assert_eq!(
        game.flip(1, &mut timers),
        FlipOutcome::Matched {
            first: 0,
            second: 1
        }
    );
    assert_eq!(game.session().moves(), 1);
    assert_eq!(game.session().matched_pairs(), 1);
    assert!(!game.session().is_locked());

    let board = game.session().board();
    assert_eq!(board.count_status(CardStatus::Matched), 2);
    assert!(game.flip(1, &mut timers).is_ignored());
}

#[test]
fn test_mismatch_turns_back_after_reveal_delay() {
    let mut game = game();
    let mut timers = TimerQueue::new();
    game.flip(0, &mut timers);

    assert_eq!(
        game.flip(2, &mut timers),
        FlipOutcome::Mismatched {
            first: 0,
            second: 2
        }
    );
    assert_eq!(game.session().moves(), 1);
    assert!(game.session().is_locked());

    elapse(&mut game, &mut timers, Duration::from_millis(999));
    assert_eq!(game.session().revealed(), vec![0, 2]);

    elapse(&mut game, &mut timers, Duration::from_millis(1));
    assert!(game.session().revealed().is_empty());
    assert!(!game.session().is_locked());
    assert_eq!(game.session().board().count_status(CardStatus::Hidden), 12);
}

#[test]
fn test_flips_are_ignored_while_pair_resolves() {
    let mut game = game();
    let mut timers = TimerQueue::new();
    game.flip(0, &mut timers);
    game.flip(2, &mut timers);

    assert_eq!(
        game.flip(4, &mut timers),
        FlipOutcome::Ignored(FlipRejection::Locked)
    );
    assert_eq!(game.session().moves(), 1);
    assert_eq!(game.session().board().count_status(CardStatus::Revealed), 2);
}

#[test]
fn test_win_stops_ticker_and_records_best() {
    let mut game = game();
    let mut timers = TimerQueue::new();

    game.flip(0, &mut timers);
    game.flip(2, &mut timers);
    elapse(&mut game, &mut timers, secs(1));

    let mut last = None;
    for pair in 0..6 {
        game.flip(pair * 2, &mut timers);
        last = Some(game.flip(pair * 2 + 1, &mut timers));
    }

    assert_eq!(last, Some(FlipOutcome::Won { moves: 7 }));
    assert!(game.session().is_won());
    assert!(!game.session().ticker_running());
    assert_eq!(game.best_score(Difficulty::Easy), Some(7));
    assert_eq!(game.best_score(Difficulty::Hard), None);

    let elapsed = game.session().elapsed_secs();
    elapse(&mut game, &mut timers, secs(5));
    assert_eq!(game.session().elapsed_secs(), elapsed);
    assert_eq!(timers.pending(), 0);

    assert_eq!(
        game.flip(0, &mut timers),
        FlipOutcome::Ignored(FlipRejection::GameOver)
    );
}

#[test]
fn test_worse_game_keeps_previous_best() {
    let mut store = MemoryStore::new();
    store.set("bestEasy", "6").expect("set");
    let mut game = MemoryGame::with_board(store, GameTimings::default(), paired_board());
    let mut timers = TimerQueue::new();

    game.flip(0, &mut timers);
    game.flip(2, &mut timers);
    elapse(&mut game, &mut timers, secs(1));
    for pair in 0..6 {
        game.flip(pair * 2, &mut timers);
        game.flip(pair * 2 + 1, &mut timers);
    }

    assert!(game.session().is_won());
    assert_eq!(game.best_score(Difficulty::Easy), Some(6));
}

#[test]
fn test_reset_cancels_ticker_without_duplicate_ticks() {
    let mut game = game();
    let mut timers = TimerQueue::new();
    game.flip(0, &mut timers);
    elapse(&mut game, &mut timers, secs(2));
    assert_eq!(game.session().elapsed_secs(), 2);

    game.setup_board(Difficulty::Easy, &mut timers);
    assert_eq!(game.session().status(), GameStatus::Ready);
    assert_eq!(game.session().elapsed_secs(), 0);
    assert_eq!(game.session().moves(), 0);
    assert_eq!(timers.pending(), 0);

    game.flip(0, &mut timers);
    elapse(&mut game, &mut timers, secs(3));
    assert_eq!(game.session().elapsed_secs(), 3);
    assert_eq!(timers.pending(), 1);
}

#[test]
fn test_reset_during_pending_mismatch() {
    let mut game = game();
    let mut timers = TimerQueue::new();
    game.flip(0, &mut timers);
    game.flip(2, &mut timers);

    game.setup_board(Difficulty::Hard, &mut timers);
    assert_eq!(timers.pending(), 0);
    assert_eq!(game.difficulty(), Difficulty::Hard);
    assert_eq!(game.session().board().len(), 24);

    game.flip(5, &mut timers);
    elapse(&mut game, &mut timers, secs(1));
    assert_eq!(game.session().revealed(), vec![5]);
}

#[test]
fn test_seeded_games_deal_the_same_board() {
    let first = MemoryGame::seeded(MemoryStore::new(), GameTimings::default(), Difficulty::Hard, 11);
    let second = MemoryGame::seeded(MemoryStore::new(), GameTimings::default(), Difficulty::Hard, 11);
    assert_eq!(first.session().board(), second.session().board());
}

#[test]
fn test_custom_reveal_delay() {
    let timings = GameTimings {
        tick: secs(1),
        reveal: Duration::from_millis(300),
    };
    let mut game = MemoryGame::with_board(MemoryStore::new(), timings, paired_board());
    let mut timers = TimerQueue::new();
    game.flip(0, &mut timers);
    game.flip(2, &mut timers);

    elapse(&mut game, &mut timers, Duration::from_millis(300));
    assert!(!game.session().is_locked());
}
