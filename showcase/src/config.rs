//! Optional demo configuration loaded from a TOML file.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Inputs for the demos (TOML).
///
/// Every field has a default, and the defaults reproduce the fixed
/// transcripts. A config file only needs the keys it changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub defaults: DefaultsConfig,
    pub age: AgeConfig,
    pub optionals: OptionalsConfig,
    pub streams: StreamsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Amount produced by the string operator.
    pub amount: i32,
    /// Text repeated by both capabilities.
    pub text: String,
    /// How many times the consumer is executed.
    pub repeat: i32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            amount: 5,
            text: "Erix".to_string(),
            repeat: 10,
        }
    }
}

/// Birth date fed to the age demo. Not range checked here: an invalid
/// date is reported by the demo itself as a parse error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AgeConfig {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

impl Default for AgeConfig {
    fn default() -> Self {
        Self {
            day: 13,
            month: 10,
            year: 1988,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OptionalsConfig {
    /// Value produced by the fallback supplier on the absent path.
    pub fallback: String,
}

impl Default for OptionalsConfig {
    fn default() -> Self {
        Self {
            fallback: "Nothing".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StreamsConfig {
    /// Prefix length taken from the unbounded sequence.
    pub limit: usize,
}

impl Default for StreamsConfig {
    fn default() -> Self {
        Self { limit: 1_000_000 }
    }
}

impl ShowcaseConfig {
    pub fn validate(&self) -> Result<()> {
        if self.defaults.text.is_empty() {
            return Err(anyhow!("defaults.text must not be empty"));
        }
        if self.optionals.fallback.is_empty() {
            return Err(anyhow!("optionals.fallback must not be empty"));
        }
        if self.streams.limit == 0 {
            return Err(anyhow!("streams.limit must be > 0"));
        }
        Ok(())
    }
}

const SEED_HEADER: &str = "# showcase demo inputs. Delete a key to fall back to its default.\n\n";

/// Read demo inputs from `path`.
///
/// A missing file is not an error: the demos then run on their defaults.
pub fn load_config(path: &Path) -> Result<ShowcaseConfig> {
    let cfg = match fs::read_to_string(path) {
        Ok(contents) => toml::from_str::<ShowcaseConfig>(&contents)
            .with_context(|| format!("parse demo config {}", path.display()))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no demo config, using defaults");
            ShowcaseConfig::default()
        }
        Err(err) => {
            return Err(err).with_context(|| format!("read demo config {}", path.display()));
        }
    };
    cfg.validate()
        .with_context(|| format!("invalid demo config {}", path.display()))?;
    Ok(cfg)
}

/// Render the default demo inputs as a commented TOML document.
pub fn default_config_toml() -> Result<String> {
    let body = toml::to_string_pretty(&ShowcaseConfig::default())
        .context("serialize default demo config")?;
    Ok(format!("{SEED_HEADER}{body}"))
}

/// Write the default demo inputs to `path` for `showcase init-config`.
///
/// An existing file is left alone unless `force` is set.
pub fn seed_config(path: &Path, force: bool) -> Result<()> {
    let contents = default_config_toml()?;
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }

    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut file = match options.open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            bail!("{} already exists (pass --force to overwrite)", path.display());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("open {}", path.display()));
        }
    };
    file.write_all(contents.as_bytes())
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), force, "seeded demo config");
    Ok(())
}
