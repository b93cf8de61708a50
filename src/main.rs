mod cli;
mod error;
mod outline;

use crate::cli::{Cli, Command};
use crate::error::{ErrorKind, Result};
use crate::outline::{Links, Outline};
use clap::Parser;
use exn::ResultExt;
use interop_catalog::{Catalog, source};
use interop_config::Config;
use interop_rotation::{RotationEntry, Session};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).or_raise(|| ErrorKind::Config);
    init_tracing(config.as_ref().map(|c| c.log_level.as_str()).unwrap_or("info"));
    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:?}");
            ExitCode::FAILURE
        },
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr so command output stays pipeable.
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

async fn run(cli: Cli, config: Result<Config>) -> Result<()> {
    let config = config?;
    let content_dir = cli.content.as_deref().unwrap_or(config.content_dir.as_path());
    let records = source::load_dir(content_dir).or_raise(|| ErrorKind::Catalog)?;
    let catalog = Catalog::ingest(records, config.direction).or_raise(|| ErrorKind::Catalog)?;
    if !catalog.flagged().is_empty() {
        tracing::warn!(count = catalog.flagged().len(), "Some libraries were left out of the index");
    }

    match cli.command {
        Command::Languages => {
            for lang in catalog.languages() {
                println!("{lang}");
            }
        },
        Command::Index => print!("{}", Outline { catalog: &catalog, registry_url: &config.registry_url }),
        Command::Links => print!(
            "{}",
            Links { records: catalog.records(), registry_url: &config.registry_url, badge_url: &config.badge_url }
        ),
        Command::Rotate { ticks } => rotate(&catalog, &config, ticks).await?,
    }
    Ok(())
}

async fn rotate(catalog: &Catalog, config: &Config, ticks: Option<u64>) -> Result<()> {
    let mut session = Session::new(config.rotation.interval()).or_raise(|| ErrorKind::Rotation)?;
    let mut current = session.start(catalog.records()).or_raise(|| ErrorKind::Rotation)?;
    print_entry(&current.borrow_and_update());

    let mut remaining = ticks;
    while remaining != Some(0) {
        tokio::select! {
            changed = current.changed() => {
                if changed.is_err() {
                    break;
                }
                print_entry(&current.borrow_and_update());
                remaining = remaining.map(|n| n - 1);
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted; stopping rotation");
                break;
            },
        }
    }
    session.stop();
    Ok(())
}

fn print_entry(entry: &RotationEntry) {
    println!("{}  {}", entry.label, entry.href());
}
