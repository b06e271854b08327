use std::path::PathBuf;

use clap::Parser;

use crate::core::config::{AppConfig, GameConfig, LogConfig, DEFAULT_WORD_LIST};

#[derive(Parser, Debug)]
#[command(name = "gallows")]
#[command(about = "Terminal hangman: find the five-letter word before the gallows is complete")]
#[command(version)]
pub struct Cli {
    /// Word list to draw secret words from (whitespace separated)
    #[arg(short, long, default_value = DEFAULT_WORD_LIST)]
    pub words: PathBuf,

    /// Seed the word picker for a reproducible sequence of rounds
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log each secret word at debug level (needs --log-file)
    #[arg(long)]
    pub reveal_secret: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "gallows=debug"
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl Cli {
    pub fn into_config(self) -> AppConfig {
        AppConfig {
            words: self.words,
            seed: self.seed,
            game: GameConfig { reveal_secret: self.reveal_secret },
            log: LogConfig { file: self.log_file, filter: self.log_filter },
        }
    }
}
