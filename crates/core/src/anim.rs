//! Timing and interpolation for dashboard animations.
//!
//! Everything here is pure: callers feed elapsed time in and get the value to
//! display out. The UI layer owns the frame loop.

use std::time::Duration;

/// How long a stat counter takes to reach its target.
pub const COUNTER_DURATION: Duration = Duration::from_millis(1200);

/// Tick interval used by frame-driven tweens (roughly 60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Stats at or below this value are shown as-is, without a count-up.
pub const COUNTER_MIN_TARGET: f64 = 5.0;

/// Delay before course progress bars grow back to their width.
pub const PROGRESS_BAR_DELAY: Duration = Duration::from_millis(300);

/// Delay before the XP level bar fills after the dashboard appears.
pub const XP_BAR_DELAY: Duration = Duration::from_millis(400);

/// Per-badge offset of the pop-in animation.
pub const BADGE_STAGGER: Duration = Duration::from_millis(70);

/// Cubic ease-out: fast start, gentle landing. Input is clamped to `0.0..=1.0`.
#[must_use]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Count-up tween from zero to a target stat value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterTween {
    target: f64,
    duration: Duration,
    fractional: bool,
}

impl CounterTween {
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self {
            target,
            duration: COUNTER_DURATION,
            fractional: target.fract() != 0.0,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Whether a stat with this target gets a count-up at all.
    #[must_use]
    pub fn should_animate(target: f64) -> bool {
        target.is_finite() && target > COUNTER_MIN_TARGET
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn is_fractional(&self) -> bool {
        self.fractional
    }

    /// Linear progress in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.progress(elapsed) >= 1.0
    }

    /// Raw eased value, never above the target.
    #[must_use]
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        ease_out_cubic(self.progress(elapsed)) * self.target
    }

    /// Text shown on the frame at `elapsed`.
    #[must_use]
    pub fn display_at(&self, elapsed: Duration) -> String {
        format_counter(self.value_at(elapsed), self.target, self.fractional)
    }

    /// Text shown once the tween has settled.
    #[must_use]
    pub fn final_display(&self) -> String {
        format_counter(self.target, self.target, self.fractional)
    }
}

/// Format a stat value the way counters display it, without animating.
#[must_use]
pub fn format_stat(value: f64) -> String {
    format_counter(value, value, value.fract() != 0.0)
}

fn format_counter(value: f64, target: f64, fractional: bool) -> String {
    let value = value.clamp(0.0, target.max(0.0));
    if fractional {
        let mut tenths = (value * 10.0).round();
        // Rounding up must not show more than the target (e.g. 2.96 -> 3.0).
        if tenths / 10.0 > target {
            tenths = (value * 10.0).floor();
        }
        format!("{:.1}", tenths / 10.0)
    } else {
        format_grouped(value.round() as u64)
    }
}

/// Render an integer with comma thousands separators (`1250` -> `1,250`).
#[must_use]
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Start offset of the pop-in for the badge at `index`.
#[must_use]
pub fn badge_delay(index: usize) -> Duration {
    BADGE_STAGGER.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}
