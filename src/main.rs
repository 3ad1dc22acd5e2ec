// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use event_availability::app_config::{AppConfig, LogLevel};
use event_availability::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether an event is visible under a site language
    Check {
        /// Site identifier
        #[arg(short, long, default_value = "main")]
        site: String,

        /// Language id or ISO code (e.g. '1', 'de')
        #[arg(short, long)]
        language: String,

        /// Uid of the event's default-language row
        #[arg(short, long)]
        event: i64,
    },

    /// Import event rows from a JSON file
    Import {
        /// JSON array of event rows
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List the languages configured for a site
    Languages {
        /// Site identifier
        #[arg(short, long, default_value = "main")]
        site: String,
    },

    /// List stored event rows
    Events,

    /// Generate shell completions for event-availability
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// event-availability - language fallback aware event visibility
///
/// Decides whether an event is shown under a site language. Languages with the
/// 'strict' fallback type hide events that have no row in that language.
#[derive(Parser, Debug)]
#[command(name = "event-availability")]
#[command(version)]
#[command(about = "Check event visibility under site language fallback rules")]
#[command(long_about = "event-availability decides whether an event record is visible under a requested site language.

EXAMPLES:
    event-availability import events.json                  # Load event rows
    event-availability check --language 1 --event 42       # Check by language id
    event-availability check -s main -l de -e 42           # Check by ISO code
    event-availability languages --site main               # Show configured languages
    event-availability completions bash > ea.bash          # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "conf.json")]
    config_path: String,

    /// Database file path (overrides the configuration)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Set logging level
    #[arg(long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Accept everything; the effective level is narrowed once the config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "event-availability", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_or_create_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;
    run_command(&controller, cli.command)
}

fn load_or_create_config(cli: &CommandLineOptions) -> Result<AppConfig> {
    let config_path = Path::new(&cli.config_path);

    let mut config = if config_path.exists() {
        AppConfig::load(config_path)?
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            cli.config_path
        );
        let config = AppConfig::default();
        config.save(config_path)?;
        config
    };

    // Override config with CLI options if provided
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    if let Some(database) = &cli.database {
        config.database_path = Some(database.clone());
    }

    config
        .validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

fn run_command(controller: &Controller, command: Commands) -> Result<()> {
    match command {
        Commands::Check {
            site,
            language,
            event,
        } => {
            let available = controller
                .check_availability(&site, &language, event)
                .map_err(|e| anyhow!("Availability check failed: {}", e))?;

            println!("{}", if available { "available" } else { "hidden" });
        }
        Commands::Import { file } => {
            let imported = controller.import_events(&file)?;
            info!("Imported {} event rows", imported);
        }
        Commands::Languages { site } => {
            let languages = controller
                .languages(&site)
                .map_err(|e| anyhow!("Failed to list languages: {}", e))?;

            for language in languages {
                println!(
                    "{:>4}  {:<10} {}",
                    language.language_id,
                    language
                        .fallback_type
                        .map(|f| f.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    language.display_name()
                );
            }
        }
        Commands::Events => {
            for event in controller.events()? {
                println!(
                    "{:>6}  lang {:>3}  parent {:>6}  {:<13} {}",
                    event.uid,
                    event.sys_language_uid,
                    event.l10n_parent,
                    event.kind().to_string(),
                    event.title
                );
            }
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}
