use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::{info, warn};

use crate::util::{Formatter, PLACEHOLDER, SENTINEL_SECS};

const CONFIG_FILE_NAME: &str = "track-time.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatSettings {
    #[serde(alias = "unknown_duration")]
    pub sentinel: i64,
    pub placeholder: String,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            sentinel: SENTINEL_SECS,
            placeholder: PLACEHOLDER.to_string(),
        }
    }
}

impl FormatSettings {
    pub fn formatter(&self) -> Formatter {
        Formatter::new(self.sentinel, self.placeholder.clone())
    }
}

/// Loads settings from the first config file that exists, falling back to
/// the defaults when there is none.
pub fn load_settings() -> Result<FormatSettings> {
    if let Some(explicit) = env::var_os("TRACK_TIME_CONFIG") {
        let explicit = PathBuf::from(explicit);
        if !explicit.exists() {
            warn!(
                path = %explicit.display(),
                "TRACK_TIME_CONFIG names a missing file, trying default locations"
            );
        }
    }

    for candidate in default_config_paths() {
        if candidate.exists() {
            return load_settings_from(&candidate);
        }
    }
    Ok(FormatSettings::default())
}

pub fn load_settings_from(path: &Path) -> Result<FormatSettings> {
    let contents = fs::read_to_string(path).with_context(|| {
        format!(
            "failed to read track-time configuration at {}",
            path.display()
        )
    })?;
    let settings = parse_config(&contents).with_context(|| {
        format!(
            "failed to parse track-time configuration at {}",
            path.display()
        )
    })?;
    info!(
        path = %path.display(),
        sentinel = settings.sentinel,
        "loaded format settings"
    );
    Ok(settings)
}

fn parse_config(contents: &str) -> Result<FormatSettings> {
    let settings: FormatSettings =
        serde_json::from_str(contents).context("configuration file is not valid JSON")?;
    if settings.placeholder.is_empty() {
        bail!("`placeholder` must not be empty");
    }
    Ok(settings)
}

pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(explicit) = env::var_os("TRACK_TIME_CONFIG") {
        paths.push(PathBuf::from(explicit));
    }

    if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        paths.push(PathBuf::from(xdg).join("track_time").join(CONFIG_FILE_NAME));
    }

    if let Some(home) = env::var_os("HOME") {
        paths.push(
            PathBuf::from(home)
                .join(".config/track_time")
                .join(CONFIG_FILE_NAME),
        );
    }

    paths.push(PathBuf::from(CONFIG_FILE_NAME));
    paths.push(PathBuf::from("config").join(CONFIG_FILE_NAME));

    paths
}
