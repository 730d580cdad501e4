//! htmx-scaffold CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{GenerateCommand, ScaffoldCommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "htmx-scaffold")]
#[command(version)]
#[command(about = "Generate backend route scaffolding from HTMX markup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print generated backend source for the given markup
    Generate {
        /// Backend identifier: flask, gin, or php-slim
        backend: String,

        /// HTML file to scan (defaults to the built-in sample document)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Write the stylesheet, HTML document, and backend source to disk
    Scaffold {
        /// Backend identifier: flask, gin, or php-slim
        backend: String,

        /// HTML file to scan (defaults to the built-in sample document)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory (created if missing, files overwritten)
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so generated source stays pipeable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { backend, input } => {
            GenerateCommand::new(backend, input).execute()?;
        }
        Commands::Scaffold {
            backend,
            input,
            output,
        } => {
            ScaffoldCommand::new(backend, input, output).execute()?;
        }
    }

    Ok(())
}
