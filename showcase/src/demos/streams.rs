//! List iteration, bounded transform/filter pipelines, and a timed pass over
//! a lazy unbounded sequence.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::StreamsConfig;
use crate::core::functions::get_list;
use crate::core::sequence::{even_prefix, shout_matching, uppercase};

pub const SEPARATOR: &str = "//////////////////////////";

const NANOS_LABEL: &str = "Tiempo de ejecución en nanosegundos";
const MILLIS_LABEL: &str = "Tiempo de ejecución en milisegundos";

pub fn run(out: &mut impl Write, cfg: &StreamsConfig) -> Result<()> {
    debug!(limit = cfg.limit, "streams demo");

    for name in get_list(&["Erix", "Juan", "Robert"]) {
        writeln!(out, "{name}")?;
    }

    writeln!(out, "{SEPARATOR}")?;

    for name in uppercase(["Erix", "Robert", "Ferchis"]) {
        writeln!(out, "{name}")?;
    }

    writeln!(out, "{SEPARATOR}")?;

    for name in shout_matching(["Erix", "Robert", "Ferchis", "Juan", "Robert"], "!!", "ERIX") {
        writeln!(out, "{name}")?;
    }

    writeln!(out, "{SEPARATOR}")?;

    let elapsed = print_evens(out, cfg.limit)?;
    let nanos = elapsed.as_nanos();
    writeln!(out, "{NANOS_LABEL}: {nanos}")?;
    writeln!(out, "{MILLIS_LABEL}: {}", nanos / 1_000_000)?;
    info!(elapsed_ms = elapsed.as_millis() as u64, "streams demo finished");
    Ok(())
}

/// Print the even values among the first `limit` naturals and return how
/// long it took, printing included.
fn print_evens(out: &mut impl Write, limit: usize) -> Result<Duration> {
    let start = Instant::now();
    for n in even_prefix(limit) {
        writeln!(out, "{n}").context("write even value")?;
    }
    Ok(start.elapsed())
}
