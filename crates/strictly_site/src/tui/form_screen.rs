//! Contact form screen: labelled inputs, inline errors, summary and popup.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use strictly_contact::{ContactForm, FIELD_COUNT, FieldId, FormTimer};
use strictly_timers::TimerQueue;
use tracing::{debug, info, instrument};

use crate::tui::input::cycle_focus;
use crate::tui::screen::{Screen, ScreenTransition};

/// Focus index of the submit button, after the last field.
const SUBMIT_ROW: usize = FIELD_COUNT;

/// State for the contact form screen.
#[derive(Debug)]
pub struct FormScreen {
    form: ContactForm,
    timers: TimerQueue<FormTimer>,
    focus: usize,
    submit_attempted: bool,
}

impl FormScreen {
    /// Creates the screen around a form.
    #[instrument(skip(form))]
    pub fn new(form: ContactForm) -> Self {
        debug!("Initializing FormScreen");
        Self {
            form,
            timers: TimerQueue::new(),
            focus: 0,
            submit_attempted: false,
        }
    }

    /// The form.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Focused row: a field index, or the submit row.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Field under focus, if the focus is not on the submit row.
    pub fn focused_field(&self) -> Option<FieldId> {
        FieldId::from_index(self.focus)
    }

    fn type_char(&mut self, id: FieldId, c: char) {
        let mut text = self.form.raw(id).to_string();
        text.push(c);
        self.form.input(id, &text);
    }

    #[instrument(skip(self))]
    fn submit(&mut self) {
        self.submit_attempted = true;
        match self.form.submit(&mut self.timers) {
            Some(submission) => info!(average = %submission.average_display(), "Form submitted"),
            None => debug!("Submit ignored"),
        }
    }

    fn field_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(FIELD_COUNT * 2 + 2);
        for id in FieldId::ALL {
            let focused = self.focus == id.index();
            let marker = if focused { "> " } else { "  " };
            let label_style = if focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };

            let mut value = self.form.raw(id).to_string();
            if focused {
                value.push('_');
            }
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:<14}", id.label()), label_style),
                Span::raw(value),
            ]));

            let error = self.form.field(id).error();
            // Untouched fields stay quiet until the first submit attempt.
            let touched = self.submit_attempted || !self.form.raw(id).is_empty();
            if !error.is_empty() && touched {
                lines.push(Line::from(Span::styled(
                    format!("{:16}{}", "", error),
                    Style::default().fg(Color::Red),
                )));
            }
        }

        let submit_style = match (self.form.submit_enabled(), self.focus == SUBMIT_ROW) {
            (true, true) => Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::Green),
            (false, true) => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::REVERSED),
            (false, false) => Style::default().fg(Color::DarkGray),
        };
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::raw(if self.focus == SUBMIT_ROW { "> " } else { "  " }),
            Span::styled("[ Submit ]", submit_style),
        ]));
        lines
    }
}

impl Screen for FormScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(12),
                Constraint::Length(9),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Contact Form")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let fields = Paragraph::new(self.field_lines())
            .block(Block::default().borders(Borders::ALL).title("Your details"));
        frame.render_widget(fields, chunks[1]);

        let summary_lines: Vec<Line> = match self.form.summary() {
            Some(submission) => submission
                .summary_lines()
                .into_iter()
                .map(Line::from)
                .collect(),
            None => vec![Line::from(Span::styled(
                "Nothing submitted yet",
                Style::default().fg(Color::DarkGray),
            ))],
        };
        let summary = Paragraph::new(summary_lines)
            .block(Block::default().borders(Borders::ALL).title("Summary"));
        frame.render_widget(summary, chunks[2]);

        let help = Paragraph::new("↑↓/Tab: Move | Enter: Next / Submit | F2: Memory game | Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);

        if self.form.popup().is_visible() {
            let popup_area = centered(area, 44, 5);
            let popup = Paragraph::new("Thank you! Your details were submitted.")
                .style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Submitted"));
            frame.render_widget(Clear, popup_area);
            frame.render_widget(popup, popup_area);
        }
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        let rows = SUBMIT_ROW + 1;
        match key.code {
            KeyCode::Esc => return ScreenTransition::Quit,
            KeyCode::F(2) => return ScreenTransition::GoToMemory,
            KeyCode::Up | KeyCode::BackTab => self.focus = cycle_focus(self.focus, rows, false),
            KeyCode::Down | KeyCode::Tab => self.focus = cycle_focus(self.focus, rows, true),
            KeyCode::Enter => match self.focused_field() {
                Some(_) => self.focus = cycle_focus(self.focus, rows, true),
                None => self.submit(),
            },
            KeyCode::Backspace => {
                if let Some(id) = self.focused_field() {
                    self.form.backspace(id);
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(id) = self.focused_field() {
                    self.type_char(id, c);
                }
            }
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn advance(&mut self, elapsed: Duration) {
        let form = &mut self.form;
        self.timers
            .advance_with(elapsed, |_, event| form.handle_timer(event));
    }
}

/// A `width` × `height` rectangle centered in `area`, clipped to fit.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
