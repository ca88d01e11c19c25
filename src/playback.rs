use std::fmt;

use tracing::debug;

use crate::util::Formatter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressLabels {
    pub elapsed: String,
    pub total: String,
}

impl fmt::Display for ProgressLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.elapsed, self.total)
    }
}

/// Position and length of the current track as reported by a player, in
/// milliseconds. A missing duration means the player has not resolved it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackClock {
    position_ms: u64,
    duration_ms: Option<u64>,
}

impl PlaybackClock {
    pub fn from_millis(position_ms: u64, duration_ms: Option<u64>) -> Self {
        Self {
            position_ms,
            duration_ms,
        }
    }

    pub fn position_secs(&self) -> u64 {
        self.position_ms / 1000
    }

    /// Whole seconds of the track, or `sentinel` while it is unknown.
    pub fn duration_secs_or(&self, sentinel: i64) -> i64 {
        match self.duration_ms {
            Some(ms) => i64::try_from(ms / 1000).unwrap_or(i64::MAX),
            None => sentinel,
        }
    }

    pub fn labels(&self, formatter: &Formatter) -> ProgressLabels {
        let duration = self.duration_secs_or(formatter.sentinel());
        if self.duration_ms.is_none() {
            debug!(
                position_ms = self.position_ms,
                "duration unset, rendering placeholder"
            );
        }
        ProgressLabels {
            elapsed: formatter.format(self.position_secs()),
            total: formatter.format(duration),
        }
    }

    pub fn progress(&self) -> Option<f32> {
        let duration_ms = self.duration_ms.filter(|ms| *ms > 0)?;
        Some((self.position_ms as f32 / duration_ms as f32).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_truncate_milliseconds() {
        let clock = PlaybackClock::from_millis(61_999, Some(215_400));
        let labels = clock.labels(&Formatter::default());
        assert_eq!(labels.elapsed, "01:01");
        assert_eq!(labels.total, "03:35");
        assert_eq!(labels.to_string(), "01:01 / 03:35");
    }

    #[test]
    fn unset_duration_uses_placeholder() {
        let clock = PlaybackClock::from_millis(61_500, None);
        assert_eq!(clock.duration_secs_or(1_000_000), 1_000_000);

        let labels = clock.labels(&Formatter::default());
        assert_eq!(labels.elapsed, "01:01");
        assert_eq!(labels.total, "00:00");
        assert_eq!(clock.progress(), None);
    }

    #[test]
    fn unset_duration_follows_configured_formatter() {
        let formatter = Formatter::new(-1, "--:--");
        let labels = PlaybackClock::from_millis(0, None).labels(&formatter);
        assert_eq!(labels.elapsed, "00:00");
        assert_eq!(labels.total, "--:--");
    }

    #[test]
    fn progress_is_clamped() {
        let halfway = PlaybackClock::from_millis(30_000, Some(60_000));
        assert!(
            halfway
                .progress()
                .map(|p| (p - 0.5).abs() < f32::EPSILON)
                .unwrap_or(false)
        );

        let overshoot = PlaybackClock::from_millis(90_000, Some(60_000));
        assert_eq!(overshoot.progress(), Some(1.0));

        let empty = PlaybackClock::from_millis(0, Some(0));
        assert_eq!(empty.progress(), None);
    }
}
