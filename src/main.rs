//! QuizStyle - style generator for quiz-question previews
//!
//! Generates brand kits, shuffles color slots and resolves the derived
//! colors, fonts and borders of a question preview.
//!
//! # Usage
//!
//! ```bash
//! # New brand kit, repeatable with a seed
//! quizstyle brand-kit --seed 7
//!
//! # Resolve an explicit configuration as JSON
//! quizstyle resolve --background Black --options "Accent 1" --json
//!
//! # Shuffle five times from a white background
//! quizstyle shuffle --background White --steps 5
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quizstyle::branding::{APP_BINARY_NAME, APP_DESCRIPTION};
use quizstyle::cli::common::CliResult;
use quizstyle::cli::{BrandKitArgs, ConfigArgs, FontsArgs, ResolveArgs, ShuffleArgs};

/// QuizStyle - style generator for quiz-question previews
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about = APP_DESCRIPTION, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a new brand kit and print its resolved style
    BrandKit(BrandKitArgs),
    /// Randomize the color slots
    Shuffle(ShuffleArgs),
    /// Resolve the style of an explicit configuration
    Resolve(ResolveArgs),
    /// List the font catalog
    Fonts(FontsArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::BrandKit(args) => args.execute(),
            Self::Shuffle(args) => args.execute(),
            Self::Resolve(args) => args.execute(),
            Self::Fonts(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays parseable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {}", err.message);
        std::process::exit(err.exit_code as i32);
    }
}
