//! Absent values with a lazily computed fallback.

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::config::OptionalsConfig;
use crate::core::presence::{if_present, or_else_get, some_string};

pub fn run(out: &mut impl Write, cfg: &OptionalsConfig) -> Result<()> {
    let value = some_string();
    debug!(present = value.is_some(), "optionals demo");

    if_present(value.as_ref(), |text| writeln!(out, "{text}"))?;

    let another_text = or_else_get(value, || {
        debug!("fallback supplier evaluated");
        cfg.fallback.clone()
    });
    writeln!(out, "{another_text}")?;
    Ok(())
}
