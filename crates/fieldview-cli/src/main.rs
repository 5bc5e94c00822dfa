//! fieldview CLI.
//!
//! Inspect the view configuration a project resolves to and preview how a
//! sample record is projected into each view.
//!
//! # Quick Start
//!
//! ```bash
//! # Show the views configured for the current directory
//! fieldview views
//!
//! # Project the sample account into the public view
//! fieldview trim --view pub
//!
//! # Check the sample account for conflicting annotations
//! fieldview validate
//! ```

mod commands;
mod sample;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

/// fieldview - project one record type into per-view shapes.
#[derive(Parser)]
#[command(name = "fieldview")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved view configuration.
    Views {
        /// Project directory containing fieldview.toml.
        #[arg(short, long, default_value = ".")]
        project: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Project the sample account into a view and print it as JSON.
    Trim {
        /// View name (create, update, pub, priv or a configured custom view).
        #[arg(short, long)]
        view: String,

        /// Project directory containing fieldview.toml.
        #[arg(short, long, default_value = ".")]
        project: String,

        /// Log every kept field.
        #[arg(long)]
        log: bool,
    },

    /// Check the sample account for conflicting access annotations.
    Validate,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Toml,
}

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for command output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Views { project, format } => commands::views::run(&project, format),
        Commands::Trim { view, project, log } => commands::trim::run(&project, &view, log),
        Commands::Validate => commands::validate::run(),
    }
}
