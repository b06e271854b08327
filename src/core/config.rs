/// Runtime configuration, assembled from the command line
use std::path::PathBuf;

pub const DEFAULT_WORD_LIST: &str = "resources/wordlist.txt";

/// Options the game engine itself reads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Emit the secret word as a debug event on every new round
    pub reveal_secret: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Nothing is logged unless a file is given; the terminal belongs to the UI
    pub file: Option<PathBuf>,
    /// tracing env-filter directive, falls back to `RUST_LOG` then `info`
    pub filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub words: PathBuf,
    /// Fixed seed for reproducible word selection
    pub seed: Option<u64>,
    pub game: GameConfig,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            words: PathBuf::from(DEFAULT_WORD_LIST),
            seed: None,
            game: GameConfig::default(),
            log: LogConfig::default(),
        }
    }
}
