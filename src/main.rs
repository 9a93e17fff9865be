//! Keysmith CLI
//!
//! Command-line front end for generating passwords, checking password
//! strength and managing the local password history.

use clap::{Parser, Subcommand, ValueEnum};
use keysmith::{
    analyze,
    charset::{CharacterClass, ClassSet},
    config::{ConfigError, FileConfig},
    history::HistoryError,
    Session,
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Configuration file picked up from the working directory.
const DEFAULT_CONFIG: &str = "keysmith.toml";

#[derive(Debug, Parser)]
#[command(name = "keysmith", version, about = "Secure password generator and strength checker")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate one or more passwords
    Generate {
        /// Password length (defaults to the configured length)
        #[arg(short, long)]
        length: Option<usize>,

        /// Character classes, comma separated (defaults to the configured set)
        #[arg(short, long, value_enum, value_delimiter = ',')]
        classes: Vec<ClassArg>,

        /// Number of passwords to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Store a fingerprint of each generated password
        #[arg(long)]
        save: bool,

        /// Do not record the passwords in history
        #[arg(long)]
        no_history: bool,

        /// Continue with a weaker generator if OS entropy is unavailable
        #[arg(long)]
        allow_degraded: bool,
    },
    /// Score a password and show the security checklist
    Check {
        /// Password to analyze
        password: String,
    },
    /// Inspect or manage password history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Debug, Subcommand)]
enum HistoryAction {
    /// Print recorded passwords, newest first
    List,
    /// Remove all recorded passwords
    Clear,
    /// Write history to a text file
    Export {
        /// Destination (defaults to the configured export path)
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ClassArg {
    #[value(alias = "lower")]
    Lowercase,
    #[value(alias = "upper")]
    Uppercase,
    #[value(alias = "digits")]
    Digit,
    #[value(alias = "symbols")]
    Symbol,
}

impl From<ClassArg> for CharacterClass {
    fn from(arg: ClassArg) -> Self {
        match arg {
            ClassArg::Lowercase => CharacterClass::Lowercase,
            ClassArg::Uppercase => CharacterClass::Uppercase,
            ClassArg::Digit => CharacterClass::Digit,
            ClassArg::Symbol => CharacterClass::Symbol,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Keysmith(#[from] keysmith::Error),
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error("please enter a password to analyze")]
    EmptyPassword,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Keysmith v{}", keysmith::VERSION);

    if let Err(e) = run(cli.command, config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<FileConfig, ConfigError> {
    match path {
        Some(path) => FileConfig::from_file(path),
        None if Path::new(DEFAULT_CONFIG).exists() => FileConfig::from_file(DEFAULT_CONFIG),
        None => Ok(FileConfig::default()),
    }
}

fn run(command: Command, mut config: FileConfig) -> Result<(), CliError> {
    match command {
        Command::Generate {
            length,
            classes,
            count,
            save,
            no_history,
            allow_degraded,
        } => {
            if no_history {
                config.history.enabled = false;
            }
            if allow_degraded {
                config.generator.allow_degraded_randomness = true;
            }

            let mut session = Session::new(config);
            let classes = if classes.is_empty() {
                None
            } else {
                Some(
                    classes
                        .into_iter()
                        .map(CharacterClass::from)
                        .collect::<ClassSet>(),
                )
            };
            let request = session.request(length, classes)?;

            for _ in 0..count {
                let generated = session.generate(request)?;
                println!(
                    "{}  ({}/100, {})",
                    generated.password, generated.strength.score, generated.strength.level
                );

                if save {
                    let saved = session.save_current()?;
                    println!("Saved as '{}'", saved.label);
                }
            }

            if session.is_degraded() {
                warn!("Passwords were generated without OS entropy");
            }
        }
        Command::Check { password } => {
            if password.is_empty() {
                return Err(CliError::EmptyPassword);
            }

            let analysis = analyze(&password);
            println!("Score: {}/100", analysis.strength.score);
            println!("Strength Level: {}", analysis.strength.level);
            println!("Security Criteria:");
            for (label, met) in analysis.criteria.items() {
                println!("  [{}] {}", if met { "x" } else { " " }, label);
            }
            if !analysis.patterns.is_empty() {
                println!("Common patterns found: {}", analysis.patterns.join(", "));
            }
        }
        Command::History { action } => {
            let export_path = config.history.export_path.clone();
            let mut session = Session::new(config);

            match action {
                HistoryAction::List => {
                    let history = session.history();
                    if history.is_empty() {
                        println!("No password history yet.");
                    }
                    for entry in history.entries() {
                        println!("{}", entry);
                        println!("{}", "-".repeat(40));
                    }
                }
                HistoryAction::Clear => {
                    session.history_mut().clear()?;
                    println!("History cleared.");
                }
                HistoryAction::Export { path } => {
                    let path = path.unwrap_or(export_path);
                    let count = session.history().export(&path)?;
                    println!("History exported to '{}' ({} entries)", path.display(), count);
                }
            }
        }
    }

    Ok(())
}
