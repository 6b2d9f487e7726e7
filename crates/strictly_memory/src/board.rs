//! Board generation and layout.

use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

use crate::types::{Card, CardStatus, Difficulty, Icon};

/// Error building a board from an explicit layout.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The layout does not fill the board exactly.
    #[display("Expected {} cards, got {}", expected, actual)]
    WrongCardCount {
        /// Cards the difficulty requires.
        expected: usize,
        /// Cards supplied.
        actual: usize,
    },

    /// An icon does not appear exactly twice.
    #[display("Icon {:?} appears {} times", _0, _1)]
    Unpaired(Icon, usize),
}

impl std::error::Error for BoardError {}

/// Cards in row-major order, sized by difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    difficulty: Difficulty,
    cards: Vec<Card>,
}

impl Board {
    /// Builds a shuffled board.
    ///
    /// Picks `pair_count` distinct icons from [`Icon::PALETTE`], duplicates
    /// them and shuffles the result uniformly.
    #[instrument(skip(rng))]
    pub fn generate<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        let mut faces: Vec<Icon> = Icon::PALETTE
            .choose_multiple(rng, difficulty.pair_count())
            .copied()
            .collect();
        faces.extend_from_within(..);
        faces.shuffle(rng);

        debug!(cards = faces.len(), "Board generated");
        Self::from_faces(difficulty, faces)
    }

    /// Builds a board with a fixed layout, face down.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the layout does not fill the board or an icon
    /// is not used exactly twice.
    #[instrument(skip(icons))]
    pub fn from_icons(difficulty: Difficulty, icons: Vec<Icon>) -> Result<Self, BoardError> {
        if icons.len() != difficulty.card_count() {
            return Err(BoardError::WrongCardCount {
                expected: difficulty.card_count(),
                actual: icons.len(),
            });
        }
        let unpaired = icon_counts(icons.iter().copied())
            .into_iter()
            .find(|(_, n)| *n != 2);
        if let Some((icon, count)) = unpaired {
            return Err(BoardError::Unpaired(icon, count));
        }
        Ok(Self::from_faces(difficulty, icons))
    }

    fn from_faces(difficulty: Difficulty, faces: Vec<Icon>) -> Self {
        let cards = faces
            .into_iter()
            .enumerate()
            .map(|(index, icon)| Card::new(index, icon))
            .collect();
        Self { difficulty, cards }
    }

    /// Difficulty the board was built for.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// All cards, row-major.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card at a position.
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a generated board.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Row count.
    pub fn rows(&self) -> usize {
        self.difficulty.rows()
    }

    /// Column count.
    pub fn cols(&self) -> usize {
        self.difficulty.cols()
    }

    /// Cards in the given status.
    pub fn count_status(&self, status: CardStatus) -> usize {
        self.cards.iter().filter(|c| c.status() == status).count()
    }

    /// How many times each icon appears.
    pub fn icon_counts(&self) -> HashMap<Icon, usize> {
        icon_counts(self.cards.iter().map(Card::icon))
    }

    pub(crate) fn set_status(&mut self, index: usize, status: CardStatus) {
        if let Some(card) = self.cards.get_mut(index) {
            card.set_status(status);
        }
    }

    /// Formats the board as text: `?` face down, the glyph otherwise.
    pub fn display(&self) -> String {
        self.cards
            .chunks(self.cols())
            .map(|row| {
                row.iter()
                    .map(|card| match card.status() {
                        CardStatus::Hidden => "?",
                        CardStatus::Revealed | CardStatus::Matched => card.icon().glyph(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn icon_counts(icons: impl IntoIterator<Item = Icon>) -> HashMap<Icon, usize> {
    let mut counts = HashMap::new();
    for icon in icons {
        *counts.entry(icon).or_insert(0) += 1;
    }
    counts
}
