//! CLI entry point for the console exercises.
//!
//! Each subcommand runs one interactive program on stdin/stdout. Without a
//! subcommand the grade tracker starts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use console_exercises::console::Console;
use console_exercises::{grading, guessing, wordcount};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::ffi::OsStr;
use std::io;
use std::path::Path;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "console_exercises")]
#[command(version, about = "Small interactive console programs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter student grades and report the average, lowest and highest
    Grades,
    /// Guess a secret number between 1 and 100
    Guess {
        /// Seed for the secret number, for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Count the words in a text file
    WordCount {
        /// File to count; asked for interactively when omitted
        #[arg(value_name = "FILE")]
        file: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let _file_guard = init_tracing();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    match cli.command.unwrap_or(Commands::Grades) {
        Commands::Grades => {
            info!("Starting grade session");
            grading::run(&mut console)?;
        }
        Commands::Guess { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let secret = guessing::draw_secret(&mut rng);
            info!(seeded = seed.is_some(), "Starting guessing game");
            guessing::play(&mut console, secret)?;
        }
        Commands::WordCount { file } => {
            wordcount::run(&mut console, &mut io::stderr(), file)?;
        }
    }

    Ok(())
}

/// Logging setup: stderr for warnings and above (override with `RUST_LOG`),
/// plus a JSON rolling log file when `LOG_FILE_PATH` is set.
fn init_tracing() -> Option<WorkerGuard> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("RUST_LOG")
                .from_env_lossy(),
        );

    let (json_layer, guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let log_dir = Path::new(&log_file_path)
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("logs"));
            let log_file_name = Path::new(&log_file_path)
                .file_name()
                .unwrap_or(OsStr::new("console_exercises.log"));

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(
                    EnvFilter::builder()
                        .with_default_directive(LevelFilter::DEBUG.into())
                        .with_env_var("RUST_LOG_JSON")
                        .from_env_lossy(),
                );
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    guard
}
