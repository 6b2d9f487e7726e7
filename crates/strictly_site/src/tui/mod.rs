//! Terminal UI: screen controller and terminal lifecycle.

mod form_screen;
mod input;
mod memory_screen;
mod screen;

pub use form_screen::FormScreen;
pub use input::{cycle_focus, move_cursor};
pub use memory_screen::MemoryScreen;
pub use screen::{Screen, ScreenTransition};

use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use strictly_memory::ScoreStore;
use tokio::time::{Duration, sleep};
use tracing::{debug, error, info, instrument};

/// Which screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveScreen {
    /// The contact form.
    #[default]
    Form,
    /// The memory game.
    Memory,
}

/// Drives both screens from one event loop.
///
/// Only the active screen is drawn and receives keys, but both screens'
/// clocks advance every iteration.
#[derive(Debug)]
pub struct SiteController<S> {
    form: FormScreen,
    memory: MemoryScreen<S>,
    active: ActiveScreen,
}

impl<S: ScoreStore> SiteController<S> {
    /// Creates a controller showing `active` first.
    #[instrument(skip(form, memory))]
    pub fn new(form: FormScreen, memory: MemoryScreen<S>, active: ActiveScreen) -> Self {
        info!("Creating SiteController");
        Self {
            form,
            memory,
            active,
        }
    }

    /// The screen currently shown.
    pub fn active(&self) -> ActiveScreen {
        self.active
    }

    /// The form screen.
    pub fn form(&self) -> &FormScreen {
        &self.form
    }

    /// The memory screen.
    pub fn memory(&self) -> &MemoryScreen<S> {
        &self.memory
    }

    /// Advances both screens' clocks.
    pub fn advance(&mut self, elapsed: Duration) {
        self.form.advance(elapsed);
        self.memory.advance(elapsed);
    }

    /// Routes a key to the active screen and applies the transition.
    ///
    /// Returns false when the user asked to quit.
    #[instrument(skip(self, key))]
    pub fn handle_key(&mut self, key: event::KeyEvent) -> bool {
        let transition = match self.active {
            ActiveScreen::Form => self.form.handle_key(key),
            ActiveScreen::Memory => self.memory.handle_key(key),
        };
        self.apply_transition(transition)
    }

    fn apply_transition(&mut self, transition: ScreenTransition) -> bool {
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::GoToForm => {
                debug!("Navigating to Form");
                self.active = ActiveScreen::Form;
            }
            ScreenTransition::GoToMemory => {
                debug!("Navigating to Memory");
                self.active = ActiveScreen::Memory;
            }
            ScreenTransition::Quit => return false,
        }
        true
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting site event loop");
        let mut last_tick = Instant::now();

        loop {
            let now = Instant::now();
            self.advance(now.duration_since(last_tick));
            last_tick = now;

            terminal.draw(|f| match self.active {
                ActiveScreen::Form => self.form.render(f),
                ActiveScreen::Memory => self.memory.render(f),
            })?;

            if event::poll(Duration::from_millis(50))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if !self.handle_key(key) {
                    info!("Site quitting");
                    return Ok(());
                }
            }

            sleep(Duration::from_millis(10)).await;
        }
    }
}

/// Takes over the terminal, runs the controller and restores the terminal.
///
/// The terminal is restored even when the loop fails.
pub async fn run_terminal<S: ScoreStore>(controller: &mut SiteController<S>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}
