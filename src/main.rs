//! Unscramble - CLI
//!
//! Word scramble game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use unscramble::{
    commands::{check_word_list, run_simple},
    game::{GameConfig, GameManager, MAX_ROUNDS, SCORE_INCREASE},
    output::print_check_report,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "unscramble",
    about = "Word scramble game: unscramble the letters before the rounds run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for a reproducible word order
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Validate a word list without playing
    Check,
}

/// Load the raw word list selected by the -w flag
fn load_words(wordlist: &str) -> Result<Vec<String>> {
    match wordlist {
        "builtin" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}")),
    }
}

/// Setup logging
///
/// Logs go to `log_file` when given. Otherwise line modes log to stderr and
/// the TUI, which owns the terminal, does not log at all.
fn setup_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
        tracing::info!("Log file: {}", path.display());
    } else if !tui {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    setup_logging(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    let words = load_words(&cli.wordlist)?;

    match command {
        Commands::Check => run_check_command(&cli.wordlist, &words),
        Commands::Play => run_play_command(build_game(words, cli.seed)?),
        Commands::Simple => {
            let mut game = build_game(words, cli.seed)?;
            run_simple(&mut game).context("line mode failed")
        }
    }
}

/// Validate the word list and start a game, failing loudly on bad config
fn build_game(words: Vec<String>, seed: Option<u64>) -> Result<GameManager> {
    let config = GameConfig::new(words, MAX_ROUNDS, SCORE_INCREASE)
        .context("word list cannot be used for a game")?;

    Ok(match seed {
        Some(seed) => {
            tracing::info!(seed, "using fixed seed");
            GameManager::with_seed(config, seed)
        }
        None => GameManager::new(config),
    })
}

fn run_check_command(source: &str, words: &[String]) -> Result<()> {
    let report = check_word_list(source, words, MAX_ROUNDS);
    print_check_report(&report);

    if let Some(err) = report.error {
        anyhow::bail!("word list {source} is not playable: {err}");
    }
    Ok(())
}

fn run_play_command(game: GameManager) -> Result<()> {
    use unscramble::interactive::{App, run_tui};

    let app = App::new(game);
    run_tui(app)
}
