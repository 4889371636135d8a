mod cli;

use anyhow::Result;
use clap::Parser;
use regdesk::{SeedData, Workspace};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::cli::app::App;

#[derive(Parser)]
#[command(name = "regdesk")]
#[command(about = "Terminal desk for client registrations on procurement portals")]
struct Cli {
    /// Load the collections from an alternate JSON fixture
    #[arg(long, value_name = "PATH")]
    seed_file: Option<PathBuf>,

    /// Start with empty collections instead of the builtin fixture
    #[arg(long)]
    empty: bool,

    /// Write tracing output to this file (the terminal is owned by the UI)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }

    let workspace = if cli.empty {
        Workspace::empty()
    } else if let Some(path) = &cli.seed_file {
        Workspace::with_seed(SeedData::from_file(path)?)
    } else {
        Workspace::seeded()?
    };

    let mut app = App::new(workspace);
    app.run()?;
    Ok(())
}
