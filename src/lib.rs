//! `MM:SS` rendering of track positions and durations for player UIs.

pub mod config;
pub mod playback;
pub mod util;

pub use config::FormatSettings;
pub use playback::{PlaybackClock, ProgressLabels};
pub use util::{
    FormatError, Formatter, PLACEHOLDER, SENTINEL_SECS, Seconds, format_time,
    format_track_length, try_format_time,
};
