use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use salesdeck::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "salesdeck")]
#[command(about = "Budget vs billed reporting dashboard")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.salesdeck/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard GUI
    Gui {
        /// Auto-mapping result to load on startup
        #[arg(short, long)]
        mapping: Option<PathBuf>,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Print the selector layout for an auto-mapping result
    Inspect {
        /// Auto-mapping result (JSON)
        file: PathBuf,

        /// Number of branch columns (defaults to the configured value)
        #[arg(long)]
        columns: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config_path = cli.config.unwrap_or_else(Config::global_config_path);

    match cli.command {
        Some(Commands::Gui { mapping }) => {
            let config = Config::load_or_default(&config_path);
            salesdeck::gui::run_gui(config, mapping)?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(&config_path, force)?;
        }
        Some(Commands::Inspect { file, columns }) => {
            let config = Config::load_or_default(&config_path);
            let columns = columns.unwrap_or(config.settings.branch_columns);
            cli::inspect::inspect_command(&file, columns)?;
        }
        None => {
            // Default: run the GUI
            let config = Config::load_or_default(&config_path);
            salesdeck::gui::run_gui(config, None)?;
        }
    }

    Ok(())
}
