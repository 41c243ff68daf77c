//! Application config, read from a JSON file.
//!
//! ```json
//! {
//!   "origin_unix_secs": 1719907200,
//!   "slot_width_secs": 3600,
//!   "schedule_csv": "grid.csv",
//!   "catalog_csv": "shifts.csv",
//!   "output_dir": "out",
//!   "format": "csv"
//! }
//! ```
//!
//! Relative paths are resolved against the directory holding the config file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use sp_core::ComposeConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Sqlite,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    #[serde(flatten)]
    pub compose:      ComposeConfig,
    pub schedule_csv: PathBuf,
    #[serde(default)]
    pub catalog_csv:  Option<PathBuf>,
    pub output_dir:   PathBuf,
    #[serde(default)]
    pub format:       OutputFormat,
}

impl AppConfig {
    /// Read, parse, and validate the config at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut config: AppConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.compose.validate()?;

        let base = path.parent().unwrap_or(Path::new("."));
        config.schedule_csv = base.join(&config.schedule_csv);
        config.catalog_csv = config.catalog_csv.map(|p| base.join(p));
        config.output_dir = base.join(&config.output_dir);
        Ok(config)
    }
}
