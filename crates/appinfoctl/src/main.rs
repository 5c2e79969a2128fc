//! appinfoctl - inspect app identity facts and compare app versions

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "appinfoctl")]
#[command(about = "Application identity facts and app version comparison", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.config/app-info/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the store and print the app info record as JSON
    Show {
        /// Container override (expo, native, web)
        #[arg(long)]
        container: Option<String>,
    },

    /// Compare two app versions
    Compare {
        /// Current version
        current: String,
        /// Version to compare against
        other: String,
    },

    /// List container classifications
    Containers,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;
    commands::init_logging(&config);

    match cli.command {
        Commands::Show { container } => commands::show(&config, container.as_deref()).await,
        Commands::Compare { current, other } => commands::compare(&current, &other),
        Commands::Containers => commands::containers(),
    }
}
