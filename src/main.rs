//! Command-line front-end for puckboard
//!
//! Ranks leaderboard snapshots stored as JSON files and applies add, edit
//! and delete requests to them through the ranking engine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use puckboard::config::AppConfig;
use puckboard::ranking::{EntryDraft, StatField};
use puckboard::{Category, Entry, Leaderboard, Mutation, Role};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Puckboard - hockey-union leaderboards and standings
#[derive(Parser)]
#[command(
    name = "puckboard",
    version,
    about = "Rank hockey-union leaderboards and team standings",
    long_about = "Puckboard ranks individual leaderboards (goals, assists, clean sheets) and \
                 team standings stored as JSON snapshots, and applies add, edit and delete \
                 requests to them, re-ranking the whole table after every change."
)]
struct Cli {
    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        global = true,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, global = true, help = "Enable debug mode with verbose logging")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List configured leaderboard categories
    Categories,

    /// Rank a snapshot file
    Rank {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Add an entry, or edit the entry with --id
    Upsert {
        #[command(flatten)]
        source: SourceArgs,
        /// Entry to edit; omitted or unknown ids add a new entry
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        avatar: Option<String>,
        /// Numeric field, e.g. --field value=12 or --field goals_for=30
        #[arg(long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
        fields: Vec<(StatField, String)>,
        #[arg(long, default_value = "admin")]
        role: Role,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Delete an entry
    Remove {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long)]
        id: String,
        #[arg(long, default_value = "admin")]
        role: Role,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args)]
struct SourceArgs {
    /// Category key from the configuration
    #[arg(long)]
    category: String,
    /// JSON file holding the category's entries
    #[arg(long, value_name = "FILE")]
    input: PathBuf,
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
    /// Only emit the first N ranked entries
    #[arg(long, value_name = "N")]
    top: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Table,
}

fn parse_field(raw: &str) -> std::result::Result<(StatField, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("Expected KEY=VALUE, got {}", raw))?;
    Ok((key.parse()?, value.to_string()))
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration and apply CLI overrides
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_env()?,
    };

    if let Some(log_level) = &cli.log_level {
        config.service.log_level = log_level.clone();
    }
    if cli.debug {
        config.service.log_level = "debug".to_string();
    }

    puckboard::config::validate_config(&config)?;
    Ok(config)
}

fn read_entries(path: &Path) -> Result<Vec<Entry>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse entries in {}", path.display()))
}

fn render_table(category: &Category, entries: &[Entry]) -> String {
    let mut table = format!("{}\n", category.title);
    for entry in entries {
        table.push_str(&format!(
            "{:>4}  {:<28}  {}\n",
            entry.rank.unwrap_or_default(),
            entry.name,
            entry.metric_display()
        ));
    }
    table
}

fn write_output(
    category: &Category,
    entries: &[Entry],
    output: &OutputArgs,
    display_limit: usize,
) -> Result<()> {
    let rendered = match output.format {
        Format::Json => {
            let entries = &entries[..output.top.unwrap_or(entries.len()).min(entries.len())];
            let mut json = serde_json::to_string_pretty(entries)?;
            json.push('\n');
            json
        }
        Format::Table => {
            let limit = output.top.unwrap_or(display_limit).min(entries.len());
            render_table(category, &entries[..limit])
        }
    };

    match &output.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} entries to {}", entries.len(), path.display());
        }
        None => std::io::stdout().write_all(rendered.as_bytes())?,
    }
    Ok(())
}

fn open_leaderboard(config: &AppConfig, source: &SourceArgs) -> Result<Leaderboard> {
    let category = config.category(&source.category)?;
    let entries = read_entries(&source.input)?;
    debug!(
        "Loaded {} entries for {} from {}",
        entries.len(),
        category.key,
        source.input.display()
    );
    Ok(Leaderboard::with_entries(category, entries))
}

fn run(cli: Cli, config: &AppConfig) -> Result<()> {
    let display_limit = config.leaderboards.display_limit;

    match cli.command {
        Command::Categories => {
            let mut stdout = std::io::stdout();
            for category in &config.leaderboards.categories {
                writeln!(
                    stdout,
                    "{:<16} {:<10} {}",
                    category.key,
                    category.kind.to_string(),
                    category.title
                )?;
            }
        }
        Command::Rank { source, output } => {
            let board = open_leaderboard(config, &source)?;
            write_output(board.category(), board.entries(), &output, display_limit)?;
        }
        Command::Upsert {
            source,
            id,
            name,
            avatar,
            fields,
            role,
            output,
        } => {
            let mut board = open_leaderboard(config, &source)?;
            let draft = EntryDraft {
                id,
                name: Some(name),
                avatar,
                fields: fields.into_iter().collect(),
            };
            board.apply_as(role, Mutation::Upsert(draft))?;
            write_output(board.category(), board.entries(), &output, display_limit)?;
        }
        Command::Remove {
            source,
            id,
            role,
            output,
        } => {
            let mut board = open_leaderboard(config, &source)?;
            board.apply_as(role, Mutation::Remove { id })?;
            write_output(board.category(), board.entries(), &output, display_limit)?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    debug!("{} {} starting", config.service.name, puckboard::VERSION);
    run(cli, &config)
}
