// File: ./src/config.rs
// Handles settings loading, saving, and defaults.
use crate::context::AppContext;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

/// Largest agenda range accepted on either side of the center date.
pub const MAX_RANGE_DAYS: u32 = 3660;

fn default_date_fmt() -> String {
    "%a %b %d, %Y".to_string()
}

fn default_event_color() -> i32 {
    1
}

/// Display settings consumed by the engine. Always passed explicitly.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// strftime-style pattern used when rendering dates.
    #[serde(default = "default_date_fmt")]
    pub date_fmt: String,
    /// Color index given to events whose record has none.
    #[serde(default = "default_event_color")]
    pub event_color: i32,
    /// Days after the center date covered by an agenda.
    #[serde(default)]
    pub range_days: u32,
    /// Days before the center date covered by an agenda.
    #[serde(default)]
    pub range_neg_days: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_fmt: default_date_fmt(),
            event_color: default_event_color(),
            range_days: 0,
            range_neg_days: 0,
        }
    }
}

impl Settings {
    /// Load settings from `config.toml` in the context's config directory.
    /// A missing file yields the defaults.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        if settings.range_days > MAX_RANGE_DAYS || settings.range_neg_days > MAX_RANGE_DAYS {
            anyhow::bail!(
                "Invalid config file '{}': agenda range is limited to {} days each way",
                path.display(),
                MAX_RANGE_DAYS
            );
        }

        Ok(settings)
    }

    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&path, toml_str).map_err(|e| {
            anyhow::anyhow!("Failed to write config file '{}': {}", path.display(), e)
        })?;
        Ok(())
    }
}
