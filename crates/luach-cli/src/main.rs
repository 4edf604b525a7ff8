mod cmd;
mod output;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, gematria::GematriaSubcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "luach",
    about = "Live clock with the Hebrew date in gematria notation",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: ~/.config/luach/config.yaml)
    #[arg(long, global = true, env = "LUACH_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current time and Hebrew date once
    Now,

    /// Run the live clock until Ctrl-C
    Watch {
        /// Stop after this many refreshes
        #[arg(long)]
        ticks: Option<u64>,
    },

    /// Encode numbers as Hebrew numerals
    Gematria {
        #[command(subcommand)]
        subcommand: GematriaSubcommand,
    },

    /// List the Hebrew month names
    Months,

    /// Inspect and validate the configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Watch { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Now => config_path(config).and_then(|path| cmd::now::run(&path, cli.json)),
        Commands::Watch { ticks } => {
            config_path(config).and_then(|path| cmd::watch::run(&path, ticks, cli.json))
        }
        Commands::Gematria { subcommand } => cmd::gematria::run(subcommand, cli.json),
        Commands::Months => cmd::months::run(cli.json),
        Commands::Config { subcommand } => {
            config_path(config).and_then(|path| cmd::config::run(&path, subcommand, cli.json))
        }
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn config_path(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    Ok(luach_core::paths::resolve_config_path(explicit)?)
}
