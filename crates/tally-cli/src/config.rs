// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_VERSION: i64 = 1;
const DEFAULT_BASE_URL: &str = "https://api.clockify.me/api/v1";
const DEFAULT_SIDEBAR_HEIGHT: i64 = 10;
pub const APP_NAME: &str = "tally";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub api: Api,
    #[serde(default)]
    pub ui: Ui,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            api: Api::default(),
            ui: Ui::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Api {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Option<String>,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: Some(DEFAULT_BASE_URL.to_owned()),
            timeout: Some("10s".to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub sidebar_height: Option<i64>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            sidebar_height: Some(DEFAULT_SIDEBAR_HEIGHT),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("TALLY_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set TALLY_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [api] and [ui]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(timeout) = &self.api.timeout {
            let parsed = parse_duration(timeout)?;
            if parsed <= Duration::ZERO {
                bail!(
                    "api.timeout in {} must be positive, got {}",
                    path.display(),
                    timeout
                );
            }
        }

        if let Some(height) = self.ui.sidebar_height
            && height <= 0
        {
            bail!(
                "ui.sidebar_height in {} must be positive, got {}",
                path.display(),
                height
            );
        }

        Ok(())
    }

    /// The API key: the `TALLY_API_KEY` environment variable wins over the
    /// config file. Absence is a startup error naming both options.
    pub fn api_key(&self) -> Result<String> {
        if let Ok(key) = env::var("TALLY_API_KEY")
            && !key.trim().is_empty()
        {
            return Ok(key);
        }
        if let Some(key) = &self.api.api_key
            && !key.trim().is_empty()
        {
            return Ok(key.clone());
        }
        bail!(
            "no API key configured; set the TALLY_API_KEY environment variable or api_key under [api] in the config file"
        )
    }

    pub fn base_url(&self) -> &str {
        self.api
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn timeout(&self) -> Result<Duration> {
        parse_duration(self.api.timeout.as_deref().unwrap_or("10s"))
    }

    pub fn sidebar_height(&self) -> usize {
        self.ui
            .sidebar_height
            .filter(|height| *height > 0)
            .unwrap_or(DEFAULT_SIDEBAR_HEIGHT) as usize
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# tally config\n# Place this file at: {}\n\nversion = 1\n\n[api]\n# Optional here; the TALLY_API_KEY environment variable takes precedence.\n# api_key = \"...\"\nbase_url = \"{}\"\ntimeout = \"10s\"\n\n[ui]\nsidebar_height = {}\n",
            path.display(),
            DEFAULT_BASE_URL,
            DEFAULT_SIDEBAR_HEIGHT,
        )
    }
}

fn parse_duration(raw: &str) -> Result<Duration> {
    if let Some(value) = raw.strip_suffix("ms") {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(value) = raw.strip_suffix('s') {
        let secs: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let mins: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_secs(mins * 60));
    }

    bail!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 500ms or 10s)")
}
