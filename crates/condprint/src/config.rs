// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named printers described in TOML.
//!
//! ```toml
//! version = 1
//!
//! [printer.trace]
//! enabled = true
//! env = "APP_TRACE"
//! prefix = "[trace] "
//! timestamp = "%H:%M:%S "
//! target = "stderr"          # or "stdout", or { file = "trace.log" }
//! ```
//!
//! Unknown keys are warned about and ignored.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::option::PrinterOption;
use crate::printer::Printer;
use crate::sink::{Stderr, Stdout};
use crate::{env, prefix};

/// Supported config file version.
pub const SUPPORTED_VERSION: i64 = 1;

const KNOWN_KEYS: &[&str] = &["version", "printer"];

const PRINTER_KEYS: &[&str] = &[
    "enabled",
    "env",
    "prefix",
    "timestamp",
    "prefix_after_timestamp",
    "target",
    "append",
];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration file.
#[derive(Debug, Default, Deserialize)]
pub struct PrintersConfig {
    /// Config file version (must be 1).
    pub version: i64,

    /// Printers by name.
    #[serde(default)]
    pub printer: BTreeMap<String, PrinterConfig>,
}

/// One named printer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PrinterConfig {
    /// Gate used when `env` is absent or unset.
    #[serde(default)]
    pub enabled: bool,

    /// Environment variable that overrides `enabled` when set.
    #[serde(default)]
    pub env: Option<String>,

    /// Literal prefix.
    #[serde(default)]
    pub prefix: Option<String>,

    /// strftime format for a local-time prefix.
    #[serde(default)]
    pub timestamp: Option<String>,

    /// Write `prefix` after the timestamp instead of before it.
    #[serde(default)]
    pub prefix_after_timestamp: bool,

    #[serde(default)]
    pub target: Target,

    /// Append to file targets rather than truncating them.
    #[serde(default = "default_append")]
    pub append: bool,
}

fn default_append() -> bool {
    true
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            env: None,
            prefix: None,
            timestamp: None,
            prefix_after_timestamp: false,
            target: Target::default(),
            append: default_append(),
        }
    }
}

/// Output destination of a configured printer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Stdout,
    Stderr,
    File(PathBuf),
}

impl Target {
    fn open(&self, append: bool) -> Result<PrinterOption> {
        match self {
            Target::Stdout => Ok(PrinterOption::sink(Stdout)),
            Target::Stderr => Ok(PrinterOption::sink(Stderr)),
            Target::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .write(true)
                    .append(append)
                    .truncate(!append)
                    .open(path)
                    .map_err(|e| Error::Io {
                        path: path.clone(),
                        source: e,
                    })?;
                tracing::debug!("opened printer target {}", path.display());
                Ok(PrinterOption::sink(Mutex::new(file)))
            }
        }
    }
}

impl PrinterConfig {
    /// Resolved gate: the `env` variable when set, else `enabled`.
    pub fn is_enabled(&self) -> bool {
        match &self.env {
            Some(name) => env::flag_or(name, self.enabled),
            None => self.enabled,
        }
    }

    /// Build the printer. A disabled config yields an inert printer without
    /// opening its target or checking its timestamp format.
    pub fn build(&self) -> Result<Printer> {
        if !self.is_enabled() {
            return Ok(Printer::Inert);
        }

        // Validate before opening: a failed build must leave the target alone.
        let stamp = match &self.timestamp {
            Some(format) if !prefix::is_valid_format(format) => {
                return Err(Error::Config {
                    message: format!("invalid timestamp format `{}`", format),
                    path: None,
                });
            }
            Some(format) => Some(PrinterOption::prefix_fn(prefix::timestamp(format.clone()))),
            None => None,
        };
        let literal = self.prefix.clone().map(PrinterOption::Prefix);

        let mut options = Vec::with_capacity(3);
        options.push(self.target.open(self.append)?);

        // The factory orders the two prefixes by the order they arrive in.
        if self.prefix_after_timestamp {
            options.extend(stamp);
            options.extend(literal);
        } else {
            options.extend(literal);
            options.extend(stamp);
        }

        Ok(Printer::new(true, options))
    }
}

/// Printers built from a [`PrintersConfig`], looked up by name.
#[derive(Debug, Clone, Default)]
pub struct Printers {
    printers: BTreeMap<String, Printer>,
}

impl Printers {
    pub fn from_config(config: &PrintersConfig) -> Result<Self> {
        let mut printers = BTreeMap::new();
        for (name, printer) in &config.printer {
            let built = printer.build().map_err(|e| Error::Printer {
                name: name.clone(),
                source: Box::new(e),
            })?;
            printers.insert(name.clone(), built);
        }
        Ok(Self { printers })
    }

    /// Load a config file and build its printers.
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_config(&load(path)?).map_err(|e| e.or_path(path))
    }

    /// The named printer, or an inert one when no such name is configured.
    pub fn get(&self, name: &str) -> Printer {
        self.printers.get(name).cloned().unwrap_or_default()
    }

    /// Configured printer names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.printers.keys().map(String::as_str)
    }
}

/// Load a config file.
pub fn load(path: &Path) -> Result<PrintersConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<PrintersConfig> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})",
            version, SUPPORTED_VERSION
        )));
    }

    let table: toml::Table = toml::from_str(content).map_err(|e| config_error(e.to_string()))?;
    for key in unknown_keys(&table) {
        warn_unknown_key(path, &key);
    }

    toml::from_str(content).map_err(|e| config_error(e.to_string()))
}

/// Dotted paths of keys this crate does not recognize.
fn unknown_keys(table: &toml::Table) -> BTreeSet<String> {
    let mut unknown = BTreeSet::new();

    for key in table.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown.insert(key.clone());
        }
    }

    if let Some(toml::Value::Table(printers)) = table.get("printer") {
        for (name, value) in printers {
            let toml::Value::Table(fields) = value else {
                continue;
            };
            for key in fields.keys() {
                if !PRINTER_KEYS.contains(&key.as_str()) {
                    unknown.insert(format!("printer.{}.{}", name, key));
                }
            }
        }
    }

    unknown
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!(
        "{}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
