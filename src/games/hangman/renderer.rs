/// Hangman terminal front end: keyboard in, engine views out
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::core::game::Game;
use crate::games::hangman::game::{GameEngine, Status, MAX_WRONG_GUESSES};
use crate::games::hangman::words::Chooser;

/// One picture per wrong-guess count, 0 through `MAX_WRONG_GUESSES`
pub const GALLOWS: [[&str; 7]; MAX_WRONG_GUESSES as usize + 1] = [
    ["  +---+", "  |   |", "      |", "      |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", "      |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", "  |   |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|   |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "      |", "========="],
];

pub struct HangmanApp<C: Chooser> {
    engine: GameEngine<C>,
    input: String,
    message: String,
}

impl<C: Chooser> HangmanApp<C> {
    /// Wrap an engine and start the first round
    pub fn new(engine: GameEngine<C>) -> Self {
        let mut app = Self { engine, input: String::new(), message: String::new() };
        app.start_round();
        app
    }

    pub fn engine(&self) -> &GameEngine<C> {
        &self.engine
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn start_round(&mut self) {
        self.message = match self.engine.new_game() {
            Ok(()) => String::new(),
            Err(e) => e.to_string(),
        };
        self.input.clear();
    }

    fn submit(&mut self) {
        let text = std::mem::take(&mut self.input);
        self.message = match self.engine.guess(&text) {
            Ok(outcome) => outcome.to_string(),
            Err(rejection) => rejection.to_string(),
        };
    }

    fn message_style(&self) -> Style {
        match self.engine.status() {
            Some(Status::Won) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            Some(Status::Lost) | None => {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            }
            Some(Status::InProgress) => Style::default().fg(Color::Yellow),
        }
    }
}

impl<C: Chooser> Game for HangmanApp<C> {
    fn handle_input(&mut self, event: KeyEvent) {
        let control = event.modifiers.contains(KeyModifiers::CONTROL);
        if control && event.code == KeyCode::Char('n') {
            self.start_round();
            return;
        }

        // guessing is disabled outside a running round
        if !self.engine.is_in_progress() {
            return;
        }

        match event.code {
            KeyCode::Char(c) if !control => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame) {
        let [board, help] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
        let [picture, panel] =
            Layout::horizontal([Constraint::Length(15), Constraint::Min(0)]).areas(board);

        let gallows: Vec<Line> =
            GALLOWS[self.engine.stage()].iter().map(|row| Line::from(*row)).collect();
        frame.render_widget(Paragraph::new(gallows).block(Block::bordered()), picture);

        let input_line = if self.engine.is_in_progress() {
            Line::from(vec![
                Span::raw("Guess: "),
                Span::styled(self.input.as_str(), Style::default().fg(Color::Cyan)),
            ])
        } else {
            Line::from(Span::styled("Guessing disabled", Style::default().fg(Color::DarkGray)))
        };

        let lines = vec![
            Line::from(Span::styled(
                self.engine.spaced_masked_word(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(self.engine.guessed_letters_label()),
            Line::from(format!("Tries left: {}", self.engine.tries_left())),
            Line::from(""),
            input_line,
            Line::from(""),
            Line::from(Span::styled(self.message.as_str(), self.message_style())),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(Block::bordered().title(" HANGMAN ")),
            panel,
        );

        frame.render_widget(
            Paragraph::new("[Enter] Guess  [Ctrl-N] New Game  [Esc] Quit")
                .alignment(ratatui::layout::Alignment::Center),
            help,
        );
    }
}
