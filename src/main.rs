mod config;

use anyhow::{Context, Result};
use filebytes::{dump, fileio};
use structopt::StructOpt;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::{Command, Opt};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::default().add_directive(Level::WARN.into())),
        )
        .with_writer(std::io::stderr)
        .init();

    let opt = Opt::from_args();

    match opt.cmd {
        Command::Write { path, bytes } => {
            fileio::write_file(&path, &bytes.0)
                .with_context(|| format!("Cannot write {}", path.display()))?;
            println!("Wrote {} bytes to {}", bytes.0.len(), path.display());
        }
        Command::Read { path, width } => {
            let bytes = fileio::read_file(&path)
                .with_context(|| format!("Cannot read {}", path.display()))?;
            dump::table(&bytes, width).printstd();
            println!("{} bytes", bytes.len());
        }
    }

    Ok(())
}
