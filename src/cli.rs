use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use track_time::config::{self, FormatSettings};
use track_time::format_track_length;

#[derive(Debug, Parser)]
#[command(name = "track-time", about = "Render durations in seconds as MM:SS")]
pub struct Cli {
    /// Read format settings from this file instead of the default locations.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Treat values as milliseconds.
    #[arg(long)]
    pub millis: bool,

    /// Fail on negative values or more than 99 minutes.
    #[arg(long, conflicts_with = "track")]
    pub strict: bool,

    /// Use the `M:SS` track length style.
    #[arg(long)]
    pub track: bool,

    #[arg(required = true, allow_negative_numbers = true, value_name = "VALUE")]
    pub values: Vec<i64>,
}

impl Cli {
    pub fn settings(&self) -> Result<FormatSettings> {
        match &self.config {
            Some(path) => config::load_settings_from(path),
            None => config::load_settings(),
        }
    }
}

pub fn render(cli: &Cli, settings: &FormatSettings) -> Result<Vec<String>> {
    let formatter = settings.formatter();
    let mut lines = Vec::with_capacity(cli.values.len());

    for &value in &cli.values {
        let seconds = if cli.millis { value / 1000 } else { value };
        let line = if cli.track {
            format_track_length(seconds)
        } else if cli.strict {
            formatter
                .try_format(seconds)
                .inspect_err(|err| warn!(value, %err, "rejected value"))
                .with_context(|| format!("cannot format {value}"))?
        } else {
            formatter.format(seconds)
        };
        lines.push(line);
    }

    Ok(lines)
}
