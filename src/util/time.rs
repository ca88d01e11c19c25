use thiserror::Error;
use tracing::debug;

/// Seconds value the player hands over when it does not know a track's duration.
pub const SENTINEL_SECS: i64 = 1_000_000;

/// Rendered in place of the sentinel.
pub const PLACEHOLDER: &str = "00:00";

const MAX_MINUTES: i128 = 99;

/// Integer widths accepted as a seconds count.
///
/// Covers the signed and unsigned primitives up to 64 bits, the pointer-sized
/// ones and `i128`. All of them widen losslessly into `i128`, so one
/// implementation of the arithmetic serves every width.
pub trait Seconds: Copy {
    fn into_seconds(self) -> i128;
}

macro_rules! impl_seconds {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Seconds for $ty {
                #[inline]
                fn into_seconds(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_seconds!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("negative duration: {seconds}s")]
    Negative { seconds: i128 },
    #[error("duration of {minutes} minutes does not fit in two digits")]
    MinutesOverflow { minutes: i128 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    sentinel: i64,
    placeholder: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(SENTINEL_SECS, PLACEHOLDER)
    }
}

impl Formatter {
    pub fn new(sentinel: i64, placeholder: impl Into<String>) -> Self {
        Self {
            sentinel,
            placeholder: placeholder.into(),
        }
    }

    pub fn sentinel(&self) -> i64 {
        self.sentinel
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_sentinel<S: Seconds>(&self, seconds: S) -> bool {
        seconds.into_seconds() == i128::from(self.sentinel)
    }

    /// Renders `MM:SS`, or the placeholder for the sentinel.
    ///
    /// Negative values and minute counts above 99 are not rejected: they fall
    /// out of truncating division, so `-61` renders as `-1:-1` and `6000` as
    /// `100:00`. Use [`Formatter::try_format`] to refuse them.
    pub fn format<S: Seconds>(&self, seconds: S) -> String {
        if self.is_sentinel(seconds) {
            debug!(sentinel = self.sentinel, "sentinel duration, rendering placeholder");
            return self.placeholder.clone();
        }
        let total = seconds.into_seconds();
        render(total / 60, total % 60)
    }

    pub fn try_format<S: Seconds>(&self, seconds: S) -> Result<String, FormatError> {
        if self.is_sentinel(seconds) {
            return Ok(self.placeholder.clone());
        }
        let total = seconds.into_seconds();
        if total < 0 {
            return Err(FormatError::Negative { seconds: total });
        }
        let minutes = total / 60;
        if minutes > MAX_MINUTES {
            return Err(FormatError::MinutesOverflow { minutes });
        }
        Ok(render(minutes, total % 60))
    }
}

fn render(minutes: i128, seconds: i128) -> String {
    format!("{minutes:02}:{seconds:02}")
}

pub fn format_time<S: Seconds>(seconds: S) -> String {
    Formatter::default().format(seconds)
}

pub fn try_format_time<S: Seconds>(seconds: S) -> Result<String, FormatError> {
    Formatter::default().try_format(seconds)
}

/// `M:SS` as shown next to a track's metadata, e.g. `3:05`.
pub fn format_track_length<S: Seconds>(seconds: S) -> String {
    let total = seconds.into_seconds();
    let minutes = total / 60;
    let seconds = total % 60;
    format!("{minutes}:{seconds:02}")
}
