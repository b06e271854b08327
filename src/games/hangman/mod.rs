/// Hangman: one player, one hidden five-letter word, six misses allowed
pub mod game;
pub mod renderer;
pub mod words;

pub use game::{
    EngineError, Feedback, GameEngine, GuessOutcome, GuessRejection, RoundView, Status, Terminal,
    MAX_WRONG_GUESSES, PLACEHOLDER,
};
pub use renderer::HangmanApp;
pub use words::{Chooser, SeededChooser, SourceError, ThreadChooser, WordPool, WORD_LENGTH};
