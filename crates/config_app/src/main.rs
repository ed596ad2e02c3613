//! # config_app — `mkconfig`
//!
//! Writes `user_1.yml` through `user_100.yml` into the current working
//! directory. Takes no arguments.
//!
//! A failed write aborts the run with a non-zero exit status; files written
//! before the failure are kept.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config_emitter::{ConfigEmitter, EmitterConfig};

fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("config_app=info".parse()?)
                .add_directive("config_emitter=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let emitter = ConfigEmitter::new(EmitterConfig::new());
    let report = emitter.run()?;

    info!(count = report.len(), "done");
    Ok(())
}
