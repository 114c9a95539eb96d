//! Capabilities with default methods.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::DefaultsConfig;
use crate::core::capability::{StringOperator, TextConsumer};

pub const SEPARATOR: &str = "/////////////////////////////////";

pub fn run(out: &mut impl Write, cfg: &DefaultsConfig) -> Result<()> {
    let amount = cfg.amount;
    debug!(amount, repeat = cfg.repeat, "defaults demo");

    let operator = move || amount;
    operator
        .operate(out, &cfg.text)
        .context("write operator output")?;
    if let Some(number) = operator.current_number() {
        writeln!(out, "{number}")?;
    }

    writeln!(out, "{SEPARATOR}")?;

    let mut crab = |text: &str| writeln!(out, "🦀 {text}");
    crab.execute(cfg.repeat, &cfg.text)
        .context("write consumer output")?;
    Ok(())
}
