//! Age from day/month/year through two composed three-argument functions.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::debug;

use crate::config::AgeConfig;
use crate::core::calendar::{calculate_age, parse_date};

pub fn run(out: &mut impl Write, birth: &AgeConfig, today: NaiveDate) -> Result<()> {
    debug!(?birth, %today, "age demo");
    let age = calculate_age(parse_date, today);
    let years = age(birth.day, birth.month, birth.year)?;
    writeln!(out, "{years}")?;
    Ok(())
}
