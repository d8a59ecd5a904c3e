//! Draggin - CLI
//!
//! Daily word-ordering puzzle with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use draggin::{
    commands::{check_catalog, load_catalog, run_simple, share_today, show_stats},
    config::{DEFAULT_PUZZLE_NAME, DEFAULT_SITE, GameOptions},
    core::{Clock, SystemClock},
    logging::{LogConfig, LogTarget, init_logging},
    session::{PuzzleSession, open},
    store::{FileStore, SessionStore},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "draggin",
    about = "Drag the day's words into the right order",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle catalog JSON file (default: the built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Where progress is saved (default: local data directory)
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// After a wrong guess, mark the words that are out of place
    #[arg(long, global = true)]
    show_incorrect: bool,

    /// Site shown in the share text
    #[arg(long, global = true, default_value = DEFAULT_SITE)]
    site: String,

    /// Puzzle name shown in the share text
    #[arg(long, global = true, default_value = DEFAULT_PUZZLE_NAME)]
    name: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line mode without the TUI
    Simple,

    /// Print today's share text
    Share {
        /// Don't copy to the clipboard
        #[arg(long)]
        no_copy: bool,
    },

    /// Show play history
    Stats,

    /// Validate a catalog and list its days
    Catalog,
}

impl Cli {
    fn options(&self) -> GameOptions {
        GameOptions::default()
            .with_incorrect_guesses(self.show_incorrect)
            .with_site(&self.site)
            .with_puzzle_name(&self.name)
    }

    fn log_config(&self, command: &Commands) -> LogConfig {
        let target = match (&self.log_file, command) {
            (Some(path), _) => LogTarget::File(path.clone()),
            // Anything written to stderr would tear the alternate screen
            (None, Commands::Play) => LogTarget::Discard,
            (None, _) => LogTarget::Stderr,
        };
        LogConfig::from_verbosity(self.verbose).with_target(target)
    }

    fn state_path(&self) -> PathBuf {
        self.state.clone().unwrap_or_else(FileStore::default_path)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    init_logging(&cli.log_config(command)).context("failed to set up logging")?;

    let clock = SystemClock;
    match command {
        Commands::Play => run_play_command(&cli, &clock),
        Commands::Simple => run_simple(open_session(&cli, &clock)?),
        Commands::Share { no_copy } => {
            let session = open_session(&cli, &clock)?;
            share_today(&session, !no_copy);
            Ok(())
        }
        Commands::Stats => run_stats_command(&cli.state_path(), &clock),
        Commands::Catalog => {
            check_catalog(cli.catalog.as_deref(), clock.today())?;
            Ok(())
        }
    }
}

fn open_session(cli: &Cli, clock: &impl Clock) -> Result<PuzzleSession<FileStore>> {
    let catalog = load_catalog(cli.catalog.as_deref())?;
    let path = cli.state_path();
    let store = FileStore::open(&path)
        .with_context(|| format!("failed to open saved progress at {}", path.display()))?;

    let session = open(&catalog, store, clock, cli.options())?;
    Ok(session)
}

fn run_stats_command(path: &Path, clock: &impl Clock) -> Result<()> {
    let store = FileStore::open(path)
        .with_context(|| format!("failed to open saved progress at {}", path.display()))?;
    show_stats(&mut SessionStore::new(store), clock.today());
    Ok(())
}

fn run_play_command(cli: &Cli, clock: &impl Clock) -> Result<()> {
    use draggin::interactive::{App, run_tui};

    let app = App::new(open_session(cli, clock)?);
    run_tui(app)
}
