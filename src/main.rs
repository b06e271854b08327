use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use gallows::cli::Cli;
use gallows::core::{engine::Engine, logging};
use gallows::games::hangman::{
    Chooser, GameEngine, HangmanApp, SeededChooser, ThreadChooser, WordPool,
};
use tracing::{info, warn};

fn main() -> Result<()> {
    let config = Cli::parse().into_config();
    logging::init(&config.log)?;

    // An unreadable list is fatal; an empty one still opens the UI with guessing disabled
    let pool = WordPool::load(&config.words).context("cannot start without a word list")?;
    if pool.is_empty() {
        warn!(path = %config.words.display(), "word list has no usable words");
    }

    let chooser: Box<dyn Chooser> = match config.seed {
        Some(seed) => {
            info!(seed, "using seeded word picker");
            Box::new(SeededChooser::new(seed))
        }
        None => Box::new(ThreadChooser),
    };
    let engine = GameEngine::with_chooser(Arc::new(pool), chooser, config.game);

    let terminal = ratatui::init();
    let result = Engine::new(HangmanApp::new(engine)).run(terminal);
    ratatui::restore();

    result
}
