use crate::core::game::Game;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Draw, wait for a key, dispatch, repeat until the player quits.
    /// Restoring the terminal is left to the caller.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|f| self.game.render(f))?;

            if event::poll(POLL_INTERVAL)? && !self.dispatch(event::read()?) {
                break;
            }
        }

        Ok(())
    }

    /// Route one terminal event to the game. Returns false once the player quits.
    fn dispatch(&mut self, event: Event) -> bool {
        let Event::Key(key) = event else {
            return true;
        };
        if key.kind != KeyEventKind::Press {
            return true;
        }
        if is_quit(&key) {
            debug!("quit requested");
            return false;
        }
        self.game.handle_input(key);
        true
    }
}

/// Esc or Ctrl-C
pub fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
