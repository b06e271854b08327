use std::fmt;
use std::sync::Arc;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::config::GameConfig;
use crate::games::hangman::words::{Chooser, ThreadChooser, WordPool};

/// Wrong guesses allowed before the round is lost
pub const MAX_WRONG_GUESSES: u8 = 6;

/// Shown in the masked word for every letter not yet guessed
pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    #[display("No words loaded!")]
    NoWordsAvailable,
}

/// Why a guess was refused. None of these touch the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GuessRejection {
    #[display("The round is over. Start a new game to keep playing.")]
    RoundFinished,
    #[display("Please enter a single letter.")]
    InvalidInput,
    #[display("You already guessed that letter!")]
    DuplicateGuess(#[error(not(source))] char),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    /// `hits` is how many positions the letter revealed
    CorrectGuess { letter: char, hits: usize },
    IncorrectGuess { letter: char, wrong_count: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terminal {
    Victory,
    Defeat { secret: String },
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub terminal: Option<Terminal>,
}

impl GuessOutcome {
    pub fn is_terminal(&self) -> bool {
        self.terminal.is_some()
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.terminal, &self.feedback) {
            (Some(Terminal::Victory), _) => f.write_str("Congratulations! You won!"),
            (Some(Terminal::Defeat { secret }), _) => write!(f, "Game over! Word: {secret}"),
            (None, Feedback::CorrectGuess { .. }) => f.write_str("Good guess!"),
            (None, Feedback::IncorrectGuess { .. }) => f.write_str("Incorrect guess!"),
        }
    }
}

/// One play-through. `revealed` is never stored; it is derived from the
/// secret and the guessed letters so the two cannot drift apart.
#[derive(Debug, Clone)]
struct Round {
    secret: Vec<char>,
    guessed: Vec<char>,
    wrong_count: u8,
    status: Status,
}

impl Round {
    fn new(secret: &str) -> Self {
        Self {
            secret: secret.chars().collect(),
            guessed: Vec::new(),
            wrong_count: 0,
            status: Status::InProgress,
        }
    }

    fn revealed(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.secret
            .iter()
            .map(|c| self.guessed.contains(c).then_some(*c))
    }

    fn is_word_complete(&self) -> bool {
        self.revealed().all(|slot| slot.is_some())
    }

    fn secret(&self) -> String {
        self.secret.iter().collect()
    }

    fn apply(&mut self, letter: char) -> GuessOutcome {
        self.guessed.push(letter);

        let hits = self.secret.iter().filter(|&&c| c == letter).count();
        if hits > 0 {
            let feedback = Feedback::CorrectGuess { letter, hits };
            if self.is_word_complete() {
                self.status = Status::Won;
                return GuessOutcome { feedback, terminal: Some(Terminal::Victory) };
            }
            return GuessOutcome { feedback, terminal: None };
        }

        self.wrong_count += 1;
        let feedback = Feedback::IncorrectGuess { letter, wrong_count: self.wrong_count };
        if self.wrong_count >= MAX_WRONG_GUESSES {
            self.status = Status::Lost;
            return GuessOutcome {
                feedback,
                terminal: Some(Terminal::Defeat { secret: self.secret() }),
            };
        }
        GuessOutcome { feedback, terminal: None }
    }
}

/// Everything a renderer needs after a command, in one serializable value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub masked_word: String,
    pub guessed_letters: Vec<char>,
    pub wrong_count: u8,
    pub tries_left: u8,
    pub status: Status,
    /// Only present once the round is over
    pub secret_word: Option<String>,
}

/// Owns the round and applies the rules. Headless: no terminal types here.
pub struct GameEngine<C: Chooser = ThreadChooser> {
    pool: Arc<WordPool>,
    chooser: C,
    config: GameConfig,
    round: Option<Round>,
}

impl GameEngine<ThreadChooser> {
    pub fn new(pool: Arc<WordPool>, config: GameConfig) -> Self {
        Self::with_chooser(pool, ThreadChooser, config)
    }
}

impl<C: Chooser> GameEngine<C> {
    pub fn with_chooser(pool: Arc<WordPool>, chooser: C, config: GameConfig) -> Self {
        Self { pool, chooser, config, round: None }
    }

    /// Start a fresh round, discarding any current one.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> Result<(), EngineError> {
        let word = match self.pool.pick_random(&mut self.chooser) {
            Ok(word) => word,
            Err(err) => {
                self.round = None;
                info!(%err, "cannot start a round");
                return Err(EngineError::NoWordsAvailable);
            }
        };

        if self.config.reveal_secret {
            debug!(secret = word, "secret word");
        }
        self.round = Some(Round::new(word));
        info!("new round started");
        Ok(())
    }

    /// Submit one guess. The text is trimmed and lower-cased first.
    #[instrument(skip(self))]
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, GuessRejection> {
        let round = match self.round.as_mut() {
            Some(round) if round.status == Status::InProgress => round,
            _ => return Err(GuessRejection::RoundFinished),
        };

        let normalized = input.trim().to_lowercase();
        let mut chars = normalized.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_alphabetic() => c,
            _ => return Err(GuessRejection::InvalidInput),
        };

        if round.guessed.contains(&letter) {
            return Err(GuessRejection::DuplicateGuess(letter));
        }

        let outcome = round.apply(letter);
        debug!(?outcome, "guess applied");
        if let Some(terminal) = &outcome.terminal {
            info!(?terminal, wrong = round.wrong_count, "round finished");
        }
        Ok(outcome)
    }

    pub fn has_round(&self) -> bool {
        self.round.is_some()
    }

    /// `None` until a round has been started
    pub fn status(&self) -> Option<Status> {
        self.round.as_ref().map(|r| r.status)
    }

    pub fn is_in_progress(&self) -> bool {
        self.status() == Some(Status::InProgress)
    }

    /// Secret word with `PLACEHOLDER` for each unrevealed position.
    /// Empty when no round is active.
    pub fn masked_word(&self) -> String {
        self.round
            .as_ref()
            .map(|r| r.revealed().map(|slot| slot.unwrap_or(PLACEHOLDER)).collect())
            .unwrap_or_default()
    }

    /// Masked word with a space between positions, e.g. `_ a _ _ e`
    pub fn spaced_masked_word(&self) -> String {
        let masked = self.masked_word();
        let mut spaced = String::with_capacity(masked.len() * 2);
        for (i, c) in masked.chars().enumerate() {
            if i > 0 {
                spaced.push(' ');
            }
            spaced.push(c);
        }
        spaced
    }

    pub fn guessed_letters(&self) -> &[char] {
        self.round.as_ref().map(|r| r.guessed.as_slice()).unwrap_or(&[])
    }

    /// `Guessed Letters: a b c`
    pub fn guessed_letters_label(&self) -> String {
        let letters: Vec<String> = self.guessed_letters().iter().map(char::to_string).collect();
        format!("Guessed Letters: {}", letters.join(" ")).trim_end().to_string()
    }

    pub fn wrong_count(&self) -> u8 {
        self.round.as_ref().map_or(0, |r| r.wrong_count)
    }

    pub fn tries_left(&self) -> u8 {
        MAX_WRONG_GUESSES.saturating_sub(self.wrong_count())
    }

    /// Which of the seven gallows pictures to draw, 0 through `MAX_WRONG_GUESSES`
    pub fn stage(&self) -> usize {
        usize::from(self.wrong_count().min(MAX_WRONG_GUESSES))
    }

    /// The answer, withheld while the round is still being played
    pub fn secret_word(&self) -> Option<String> {
        self.round
            .as_ref()
            .filter(|r| r.status != Status::InProgress)
            .map(Round::secret)
    }

    pub fn snapshot(&self) -> Option<RoundView> {
        let status = self.status()?;
        Some(RoundView {
            masked_word: self.masked_word(),
            guessed_letters: self.guessed_letters().to_vec(),
            wrong_count: self.wrong_count(),
            tries_left: self.tries_left(),
            status,
            secret_word: self.secret_word(),
        })
    }
}
