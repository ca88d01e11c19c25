mod time;

pub use time::{
    FormatError, Formatter, PLACEHOLDER, SENTINEL_SECS, Seconds, format_time,
    format_track_length, try_format_time,
};
