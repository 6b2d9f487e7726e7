//! Core domain types for the memory game.

use serde::{Deserialize, Serialize};

/// Board size preset.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// 3 × 4 board, 6 pairs.
    #[default]
    Easy,
    /// 4 × 6 board, 12 pairs.
    Hard,
}

impl Difficulty {
    /// Number of rows.
    pub fn rows(self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Hard => 4,
        }
    }

    /// Number of columns.
    pub fn cols(self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Hard => 6,
        }
    }

    /// Total cards on the board (always even).
    pub fn card_count(self) -> usize {
        self.rows() * self.cols()
    }

    /// Number of pairs to match.
    pub fn pair_count(self) -> usize {
        self.card_count() / 2
    }

    /// Key under which the best score for this tier is persisted.
    pub fn storage_key(self) -> &'static str {
        match self {
            Difficulty::Easy => "bestEasy",
            Difficulty::Hard => "bestHard",
        }
    }

    /// The other tier.
    pub fn toggle(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// Card face, drawn from a fixed palette.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Icon {
    /// ♠
    Spade,
    /// ♥
    Heart,
    /// ♦
    Diamond,
    /// ♣
    Club,
    /// ★
    Star,
    /// ☀
    Sun,
    /// ☂
    Umbrella,
    /// ☃
    Snowman,
    /// ♞
    Knight,
    /// ♜
    Rook,
    /// ✿
    Flower,
    /// ❄
    Snowflake,
    /// ⚓
    Anchor,
    /// ⚡
    Bolt,
    /// ☘
    Shamrock,
    /// ♫
    Note,
}

impl Icon {
    /// Every face the board generator can pick from.
    pub const PALETTE: [Icon; 16] = [
        Icon::Spade,
        Icon::Heart,
        Icon::Diamond,
        Icon::Club,
        Icon::Star,
        Icon::Sun,
        Icon::Umbrella,
        Icon::Snowman,
        Icon::Knight,
        Icon::Rook,
        Icon::Flower,
        Icon::Snowflake,
        Icon::Anchor,
        Icon::Bolt,
        Icon::Shamrock,
        Icon::Note,
    ];

    /// Glyph drawn on the revealed card.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Spade => "♠",
            Icon::Heart => "♥",
            Icon::Diamond => "♦",
            Icon::Club => "♣",
            Icon::Star => "★",
            Icon::Sun => "☀",
            Icon::Umbrella => "☂",
            Icon::Snowman => "☃",
            Icon::Knight => "♞",
            Icon::Rook => "♜",
            Icon::Flower => "✿",
            Icon::Snowflake => "❄",
            Icon::Anchor => "⚓",
            Icon::Bolt => "⚡",
            Icon::Shamrock => "☘",
            Icon::Note => "♫",
        }
    }
}

/// Visibility of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    /// Face down.
    Hidden,
    /// Face up, waiting for its pair to resolve.
    Revealed,
    /// Face up for good.
    Matched,
}

/// A card on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    index: usize,
    icon: Icon,
    status: CardStatus,
}

impl Card {
    /// Creates a face-down card.
    pub fn new(index: usize, icon: Icon) -> Self {
        Self {
            index,
            icon,
            status: CardStatus::Hidden,
        }
    }

    /// Position on the board, row-major.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Face value.
    pub fn icon(&self) -> Icon {
        self.icon
    }

    /// Current visibility.
    pub fn status(&self) -> CardStatus {
        self.status
    }

    /// Whether the card is face down.
    pub fn is_hidden(&self) -> bool {
        self.status == CardStatus::Hidden
    }

    pub(crate) fn set_status(&mut self, status: CardStatus) {
        self.status = status;
    }
}

/// Lifecycle of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Board built, nothing flipped yet, timer not started.
    Ready,
    /// At least one card flipped; the ticker is running.
    Playing,
    /// Every pair matched; the ticker is stopped.
    Won,
}

/// Timer events owned by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameTimer {
    /// One second of play elapsed.
    Tick,
    /// Turn the mismatched pair face down again.
    ConcealMismatch,
}
