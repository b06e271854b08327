/// Core interface between the terminal loop and a game front end
use crossterm::event::KeyEvent;

/// A keyboard-driven game the engine can run
pub trait Game {
    /// React to one key press. Quitting is handled by the loop.
    fn handle_input(&mut self, event: KeyEvent);

    /// Draw the current state into the Ratatui frame
    fn render(&self, frame: &mut ratatui::Frame);
}
