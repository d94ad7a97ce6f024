//! Kith CLI - lab walkthroughs and friendship blob tooling.
//!
//! `demo` walks through one of the library crates step by step, `sample`
//! writes the bundled two-person friendship blob, and `inspect` decodes a
//! blob file and lists everyone in it.

mod commands;
mod style;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kith")]
#[command(author, version, about = "Persistent collections, checked matrices, and a friendship graph codec", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through one of the library crates
    #[command(subcommand)]
    Demo(DemoCommands),

    /// Write the bundled two-person friendship blob
    Sample {
        /// File to write instead of standard output
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Decode a friendship blob and list every person in it
    Inspect {
        /// Path to a JSON blob, such as one written by `kith sample`
        path: PathBuf,
    },
}

#[derive(Subcommand)]
enum DemoCommands {
    /// Persistent stacks and queues that share structure across versions
    Collections,
    /// Matrix arithmetic with dimension-checked operations
    Matrix,
    /// A cyclic friendship graph round-tripped through JSON
    Graph,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    match cli.command {
        Commands::Demo(demo) => match demo {
            DemoCommands::Collections => {
                commands::demo::collections();
                Ok(())
            }
            DemoCommands::Matrix => commands::demo::matrix(),
            DemoCommands::Graph => commands::demo::graph(),
        },
        Commands::Sample { out } => commands::sample::run(out.as_deref()),
        Commands::Inspect { path } => commands::inspect::run(&path),
    }
}
