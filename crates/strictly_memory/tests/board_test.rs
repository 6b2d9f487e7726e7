//! Tests for board generation.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_memory::{Board, BoardError, CardStatus, Difficulty, Icon};

#[test]
fn test_easy_board_has_twelve_cards() {
    let mut rng = StdRng::seed_from_u64(1);
    let board = Board::generate(Difficulty::Easy, &mut rng);

    assert_eq!(board.len(), 12);
    assert_eq!(board.rows(), 3);
    assert_eq!(board.cols(), 4);
    assert_eq!(board.icon_counts().len(), 6);
}

#[test]
fn test_hard_board_has_twenty_four_cards() {
    let mut rng = StdRng::seed_from_u64(2);
    let board = Board::generate(Difficulty::Hard, &mut rng);

    assert_eq!(board.len(), 24);
    assert_eq!(board.rows(), 4);
    assert_eq!(board.cols(), 6);
    assert_eq!(board.icon_counts().len(), 12);
}

#[test]
fn test_new_board_is_face_down() {
    let mut rng = StdRng::seed_from_u64(3);
    let board = Board::generate(Difficulty::Hard, &mut rng);

    assert_eq!(board.count_status(CardStatus::Hidden), 24);
    assert!(board.display().chars().filter(|c| !c.is_whitespace()).all(|c| c == '?'));
}

#[test]
fn test_card_indices_are_positions() {
    let mut rng = StdRng::seed_from_u64(4);
    let board = Board::generate(Difficulty::Easy, &mut rng);

    for (position, card) in board.cards().iter().enumerate() {
        assert_eq!(card.index(), position);
    }
}

#[test]
fn test_same_seed_same_layout() {
    let first = Board::generate(Difficulty::Hard, &mut StdRng::seed_from_u64(99));
    let second = Board::generate(Difficulty::Hard, &mut StdRng::seed_from_u64(99));
    assert_eq!(first, second);
}

#[test]
fn test_from_icons_rejects_triplet() {
    let mut icons: Vec<Icon> = Icon::PALETTE[..6].iter().flat_map(|&i| [i, i]).collect();
    icons[11] = Icon::Spade;

    assert!(matches!(
        Board::from_icons(Difficulty::Easy, icons),
        Err(BoardError::Unpaired(_, _))
    ));
}

proptest! {
    #[test]
    fn every_icon_appears_exactly_twice(seed in any::<u64>(), hard in any::<bool>()) {
        let difficulty = if hard { Difficulty::Hard } else { Difficulty::Easy };
        let board = Board::generate(difficulty, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(board.len(), difficulty.card_count());
        prop_assert_eq!(board.icon_counts().len(), difficulty.pair_count());
        prop_assert!(board.icon_counts().values().all(|&n| n == 2));
    }
}
