//! # postlink CLI
//!
//! Command-line interface for resolving blog post permalinks.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "postlink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "postlink.yml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve permalinks for markdown posts, in the order given
    Resolve {
        /// Markdown files with front matter
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        run: commands::RunOptions,
    },

    /// Resolve permalinks for a YAML or JSON list of front matter records
    Manifest {
        /// Manifest file (.yml, .yaml or .json)
        file: PathBuf,

        #[command(flatten)]
        run: commands::RunOptions,
    },

    /// Resolve markdown posts and report permalinks claimed more than once
    Check {
        /// Markdown files with front matter
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        run: commands::RunOptions,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for results
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Resolve { files, run } => commands::resolve_files(&cli.config, &files, &run),
        Commands::Manifest { file, run } => commands::resolve_manifest(&cli.config, &file, &run),
        Commands::Check { files, run } => commands::check_files(&cli.config, &files, &run),
    }
}
