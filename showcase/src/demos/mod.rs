//! One module per demo. Each `run` writes its full transcript to `out`.

pub mod age;
pub mod chaining;
pub mod defaults;
pub mod optionals;
pub mod references;
pub mod streams;

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

use crate::config::ShowcaseConfig;

/// Run every demo in a fixed order against the same writer.
pub fn run_all(out: &mut impl Write, cfg: &ShowcaseConfig, today: NaiveDate) -> Result<()> {
    chaining::run(out)?;
    defaults::run(out, &cfg.defaults)?;
    age::run(out, &cfg.age, today)?;
    optionals::run(out, &cfg.optionals)?;
    references::run(out)?;
    streams::run(out, &cfg.streams)?;
    info!("all demos finished");
    Ok(())
}
