//! Countdown arithmetic: milliseconds-to-party decomposed into unit cards.
//!
//! Pure functions of `(now_ms, target_ms)` so every screen variant shares
//! one computation and the tick loop can recreate the record from scratch
//! each frame. Timestamps are f64 epoch ms, matching `js_sys::Date::now()`.

/// Remaining time until the party, split into display units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    /// True once the target timestamp has passed.
    pub is_complete: bool,
}

impl TimeRemaining {
    /// The all-zero, completed record.
    pub fn complete() -> Self {
        Self {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            is_complete: true,
        }
    }

    /// Total whole seconds represented by the record.
    #[cfg(test)]
    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}

/// Decompose the distance from `now_ms` to `target_ms`.
///
/// A past (or exactly reached) target clamps to the all-zero completed
/// record; there is no other failure mode.
pub fn time_remaining(now_ms: f64, target_ms: f64) -> TimeRemaining {
    if !(now_ms < target_ms) {
        return TimeRemaining::complete();
    }

    let total = ((target_ms - now_ms) / 1000.0) as u64;
    TimeRemaining {
        days: total / 86_400,
        hours: (total % 86_400) / 3_600,
        minutes: (total % 3_600) / 60,
        seconds: total % 60,
        is_complete: false,
    }
}

/// Zero-pad a unit value for card display ("07", "42").
pub fn pad2(n: u64) -> String {
    format!("{:02}", n)
}
