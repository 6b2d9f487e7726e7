//! Memory game screen: card grid, counters, win banner and best scores.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_memory::{CardStatus, Difficulty, FlipOutcome, GameTimer, MemoryGame, ScoreStore};
use strictly_timers::TimerQueue;
use tracing::{debug, info, instrument};

use crate::tui::input::move_cursor;
use crate::tui::screen::{Screen, ScreenTransition};

/// State for the memory game screen.
#[derive(Debug)]
pub struct MemoryScreen<S> {
    game: MemoryGame<S>,
    timers: TimerQueue<GameTimer>,
    cursor: usize,
    last_outcome: Option<FlipOutcome>,
    /// Best scores as drawn, read from the store only when they can change.
    best_summary: String,
}

impl<S: ScoreStore> MemoryScreen<S> {
    /// Creates the screen around a game.
    #[instrument(skip(game))]
    pub fn new(game: MemoryGame<S>) -> Self {
        debug!(difficulty = %game.difficulty(), "Initializing MemoryScreen");
        let best_summary = best_summary(&game);
        Self {
            game,
            timers: TimerQueue::new(),
            cursor: 0,
            last_outcome: None,
            best_summary,
        }
    }

    /// The game.
    pub fn game(&self) -> &MemoryGame<S> {
        &self.game
    }

    /// Card under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Result of the most recent flip.
    pub fn last_outcome(&self) -> Option<FlipOutcome> {
        self.last_outcome
    }

    /// Timers armed by the current game.
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    #[instrument(skip(self))]
    fn restart(&mut self, difficulty: Difficulty) {
        self.game.setup_board(difficulty, &mut self.timers);
        self.cursor = 0;
        self.last_outcome = None;
        info!(%difficulty, "Board restarted");
    }

    fn status_line(&self) -> Line<'static> {
        let session = self.game.session();
        Line::from(format!(
            "Moves: {}   Pairs: {}/{}   Time: {}s   Difficulty: {}",
            session.moves(),
            session.matched_pairs(),
            session.total_pairs(),
            session.elapsed_secs(),
            self.game.difficulty(),
        ))
    }

    fn grid_lines(&self) -> Vec<Line<'static>> {
        let board = self.game.session().board();
        board
            .cards()
            .chunks(board.cols())
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|card| {
                        let (face, color) = match card.status() {
                            CardStatus::Hidden => ("?", Color::Blue),
                            CardStatus::Revealed => (card.icon().glyph(), Color::Yellow),
                            CardStatus::Matched => (card.icon().glyph(), Color::Green),
                        };
                        let mut style = Style::default().fg(color);
                        if card.index() == self.cursor {
                            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                        }
                        Span::styled(format!(" [ {} ] ", face), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    /// Best scores line as last loaded from the store.
    pub fn best_summary(&self) -> &str {
        &self.best_summary
    }
}

fn best_summary<S: ScoreStore>(game: &MemoryGame<S>) -> String {
    let scores = game.scores();
    format!(
        "Best (easy): {}   Best (hard): {}",
        scores.display(Difficulty::Easy),
        scores.display(Difficulty::Hard),
    )
}

impl<S: ScoreStore> Screen for MemoryScreen<S> {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Memory")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let status = Paragraph::new(self.status_line())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[1]);

        let mut grid = self.grid_lines();
        let session = self.game.session();
        if session.is_won() {
            grid.push(Line::default());
            grid.push(Line::from(Span::styled(
                format!("You found every pair in {} moves!", session.moves()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        let board = Paragraph::new(grid)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Board"));
        frame.render_widget(board, chunks[2]);

        let best = Paragraph::new(self.best_summary.as_str())
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Best scores"));
        frame.render_widget(best, chunks[3]);

        let help = Paragraph::new(
            "Arrows: Move | Enter/Space: Flip | n: New game | d: Difficulty | F1: Form | q: Quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                return ScreenTransition::Quit;
            }
            KeyCode::F(1) => return ScreenTransition::GoToForm,
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                let board = self.game.session().board();
                self.cursor = move_cursor(self.cursor, key.code, board.rows(), board.cols());
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let outcome = self.game.flip(self.cursor, &mut self.timers);
                if let FlipOutcome::Won { .. } = outcome {
                    self.best_summary = best_summary(&self.game);
                }
                self.last_outcome = Some(outcome);
            }
            KeyCode::Char('n') | KeyCode::Char('N') => self.restart(self.game.difficulty()),
            KeyCode::Char('d') | KeyCode::Char('D') => {
                self.restart(self.game.difficulty().toggle())
            }
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn advance(&mut self, elapsed: Duration) {
        let game = &mut self.game;
        self.timers
            .advance_with(elapsed, |_, event| game.handle_timer(event));
    }
}
