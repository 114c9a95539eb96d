//! Fluent calls on a self-returning handle.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::chainer::Chainer;

pub fn run(out: &mut impl Write) -> Result<()> {
    debug!("chaining demo");
    let mut chainer = Chainer::new(out);
    chainer
        .say_bye()
        .and_then(Chainer::say_bye)
        .and_then(Chainer::say_hi)
        .context("write chaining output")?;
    Ok(())
}
