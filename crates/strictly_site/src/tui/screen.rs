//! Screen trait and transition type for the site's screen state machine.

use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::Frame;

/// The result of handling an input event on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Switch to the contact form.
    GoToForm,
    /// Switch to the memory game.
    GoToMemory,
    /// Exit the application.
    Quit,
}

/// Implemented by each screen of the terminal UI.
///
/// Screens own their component and its timer queue. The controller renders
/// only the active screen but advances every screen's clock, so timers keep
/// running while a screen is in the background.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;

    /// Moves the screen's clock forward, delivering due timer events.
    fn advance(&mut self, elapsed: Duration);
}
