//! Runs the showcase demos.
//!
//! Every subcommand prints a fixed transcript to stdout. Diagnostics go to
//! stderr through `RUST_LOG`.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::debug;

use showcase::config::{ShowcaseConfig, load_config, seed_config};
use showcase::demos;
use showcase::{exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "showcase",
    version,
    about = "Small demonstrations of everyday Rust idioms"
)]
struct Cli {
    /// Optional TOML file overriding demo inputs.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(flatten)]
    Demo(Demo),
    /// Write the default demo inputs to a TOML file.
    InitConfig {
        /// Destination file.
        path: PathBuf,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum Demo {
    /// Fluent calls on a handle that returns itself.
    Chaining,
    /// Traits with one required method and default behavior.
    Defaults,
    /// Whole-year age from a day/month/year birth date.
    Age {
        /// Reference date (YYYY-MM-DD). Defaults to the local date.
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Absent value with a lazy fallback.
    Optionals,
    /// Function references and function objects.
    References,
    /// Iterator pipelines over bounded and unbounded sequences.
    Streams,
    /// Run every demo in order.
    All,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAILED);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::InitConfig { path, force } => seed_config(&path, force),
        Command::Demo(demo) => {
            let cfg = match &cli.config {
                Some(path) => load_config(path)?,
                None => ShowcaseConfig::default(),
            };
            debug!(config = ?cli.config, "configuration loaded");
            run_demo(demo, &cfg)
        }
    }
}

fn run_demo(demo: Demo, cfg: &ShowcaseConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match demo {
        Demo::Chaining => demos::chaining::run(&mut out)?,
        Demo::Defaults => demos::defaults::run(&mut out, &cfg.defaults)?,
        Demo::Age { today } => demos::age::run(&mut out, &cfg.age, resolve_today(today))?,
        Demo::Optionals => demos::optionals::run(&mut out, &cfg.optionals)?,
        Demo::References => demos::references::run(&mut out)?,
        Demo::Streams => demos::streams::run(&mut out, &cfg.streams)?,
        Demo::All => demos::run_all(&mut out, cfg, Local::now().date_naive())?,
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

fn resolve_today(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_age_with_today() {
        let cli = Cli::parse_from(["showcase", "age", "--today", "2024-10-13"]);
        assert!(matches!(
            cli.command,
            Command::Demo(Demo::Age { today: Some(date) }) if date == NaiveDate::from_ymd_opt(2024, 10, 13).expect("date")
        ));
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli = Cli::parse_from(["showcase", "streams", "--config", "demo.toml"]);
        assert!(matches!(cli.command, Command::Demo(Demo::Streams)));
        assert_eq!(cli.config, Some(PathBuf::from("demo.toml")));
    }

    #[test]
    fn parse_init_config_force() {
        let cli = Cli::parse_from(["showcase", "init-config", "demo.toml", "--force"]);
        assert!(matches!(
            cli.command,
            Command::InitConfig { ref path, force: true } if path == &PathBuf::from("demo.toml")
        ));
    }

    #[test]
    fn rejects_malformed_today() {
        assert!(Cli::try_parse_from(["showcase", "age", "--today", "13/10/2024"]).is_err());
    }

    #[test]
    fn today_override_wins() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).expect("date");
        assert_eq!(resolve_today(Some(date)), date);
    }
}
