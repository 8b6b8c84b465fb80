//! Session budget against a target duration.

use crate::session::types::SessionBreakdown;
use serde::Serialize;

/// Target durations offered as quick challenges, in minutes.
pub const TARGET_PRESETS: [u32; 3] = [30, 45, 60];

/// Target used when none is chosen.
pub const DEFAULT_TARGET_MINUTES: u32 = 45;

/// Width of the "near target" band below the target, in minutes.
pub const NEAR_TARGET_MARGIN_MINUTES: u32 = 5;

/// Full length of the session timeline bar, in minutes.
pub const TIMELINE_SCALE_MINUTES: f64 = 90.0;

/// Where a session lands relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// At least five minutes to spare
    UnderTarget,
    /// Inside the last five minutes before the target
    NearTarget,
    /// Past the target
    OverTarget,
}

impl BudgetStatus {
    /// Classify a total against a target.
    ///
    /// `total <= target - 5min` is under, `total <= target` is near, anything
    /// longer is over. A total sitting exactly on a boundary takes the milder
    /// tier.
    pub fn classify(total_seconds: f64, target_minutes: u32) -> Self {
        let target = target_minutes as f64 * 60.0;
        let near_threshold = target - NEAR_TARGET_MARGIN_MINUTES as f64 * 60.0;

        if total_seconds > target {
            BudgetStatus::OverTarget
        } else if total_seconds > near_threshold {
            BudgetStatus::NearTarget
        } else {
            BudgetStatus::UnderTarget
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetStatus::UnderTarget => write!(f, "Under target"),
            BudgetStatus::NearTarget => write!(f, "Near target"),
            BudgetStatus::OverTarget => write!(f, "Over target"),
        }
    }
}

/// Budget verdict ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetReport {
    /// Tier relative to the target
    pub status: BudgetStatus,
    /// Target in minutes
    pub target_minutes: u32,
    /// Session total in seconds
    pub total_seconds: f64,
    /// Whole minutes past the target, rounded up (only when over)
    pub minutes_over: Option<u32>,
    /// Whole minutes left before the target, rounded down (when not over)
    pub minutes_remaining: Option<u32>,
    /// One-line guidance
    pub message: String,
    /// Filled fraction of the timeline bar, capped at 1
    pub timeline_fill: f64,
    /// Position of the target marker on the timeline bar
    pub target_marker: f64,
}

impl BudgetReport {
    pub fn new(breakdown: &SessionBreakdown, target_minutes: u32) -> Self {
        let total = breakdown.total;
        let status = BudgetStatus::classify(total, target_minutes);
        let diff = target_minutes as f64 * 60.0 - total;

        let (minutes_over, minutes_remaining, message) = match status {
            BudgetStatus::OverTarget => {
                let over = (diff.abs() / 60.0).ceil() as u32;
                (
                    Some(over),
                    None,
                    format!("You are {over} minutes over target. Reduce rest, sets, or cardio."),
                )
            }
            BudgetStatus::NearTarget => {
                let left = (diff / 60.0).floor() as u32;
                (
                    None,
                    Some(left),
                    format!(
                        "You are close to the limit! {left} min remaining. Careful with adding volume."
                    ),
                )
            }
            BudgetStatus::UnderTarget => {
                let left = (diff / 60.0).floor() as u32;
                (
                    None,
                    Some(left),
                    format!(
                        "Great pace! You are comfortably under the limit with {left} minutes to spare."
                    ),
                )
            }
        };

        Self {
            status,
            target_minutes,
            total_seconds: total,
            minutes_over,
            minutes_remaining,
            message,
            timeline_fill: (breakdown.total_minutes() / TIMELINE_SCALE_MINUTES).min(1.0),
            target_marker: target_minutes as f64 / TIMELINE_SCALE_MINUTES,
        }
    }
}

/// Format seconds as `m:ss`. Minutes are not wrapped into hours.
pub fn format_clock(seconds: f64) -> String {
    let whole = if seconds.is_finite() {
        seconds.max(0.0).round() as u64
    } else {
        0
    };
    format!("{}:{:02}", whole / 60, whole % 60)
}
