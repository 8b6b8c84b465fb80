//! Input ranges for the training controls.
//!
//! Every numeric parameter reaches the core through a bounded control. The
//! ranges here are the single source for those bounds; values coming from
//! config files or other untrusted callers are clamped against them before
//! any computation runs.

use thiserror::Error;

/// Bounds and step size of a single numeric control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    /// Control name used in error messages
    pub name: &'static str,
    /// Smallest accepted value
    pub min: f64,
    /// Largest accepted value
    pub max: f64,
    /// Step between selectable values
    pub step: f64,
}

impl ParamRange {
    pub const fn new(name: &'static str, min: f64, max: f64, step: f64) -> Self {
        Self {
            name,
            min,
            max,
            step,
        }
    }

    /// Check whether a value lies inside the range (step is not enforced).
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamp a value into the range. NaN maps to the minimum.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Clamp and then round to the nearest step, anchored at `min`.
    pub fn snap(&self, value: f64) -> f64 {
        let clamped = self.clamp(value);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    /// Clamp and snap an integer control.
    pub fn snap_u32(&self, value: u32) -> u32 {
        self.snap(value as f64) as u32
    }

    /// Return the value unchanged if it is inside the range.
    pub fn validate(&self, value: f64) -> Result<f64, ParameterError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(ParameterError::OutOfRange {
                name: self.name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Errors raised when a parameter is checked against its control range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// Value outside the control's bounds
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

// Tempo phases (seconds)
pub const ECCENTRIC_SECONDS: ParamRange = ParamRange::new("eccentric", 1.0, 8.0, 1.0);
pub const BOTTOM_PAUSE_SECONDS: ParamRange = ParamRange::new("bottom pause", 0.0, 5.0, 1.0);
pub const CONCENTRIC_SECONDS: ParamRange = ParamRange::new("concentric", 1.0, 8.0, 1.0);
pub const TOP_PAUSE_SECONDS: ParamRange = ParamRange::new("top pause", 0.0, 5.0, 1.0);

// Resistance block
pub const REPS_PER_SET: ParamRange = ParamRange::new("reps", 1.0, 30.0, 1.0);
pub const EXERCISE_COUNT: ParamRange = ParamRange::new("exercises", 1.0, 12.0, 1.0);
pub const SETS_PER_EXERCISE: ParamRange = ParamRange::new("sets", 1.0, 6.0, 1.0);
pub const REST_SECONDS: ParamRange = ParamRange::new("rest", 15.0, 300.0, 15.0);
pub const TRANSITION_SECONDS: ParamRange = ParamRange::new("transition", 15.0, 300.0, 15.0);

// Session blocks (minutes)
pub const WARMUP_MINUTES: ParamRange = ParamRange::new("warm-up", 0.0, 20.0, 1.0);
pub const CARDIO_MINUTES: ParamRange = ParamRange::new("cardio", 0.0, 40.0, 1.0);
pub const COOLDOWN_MINUTES: ParamRange = ParamRange::new("cool-down", 0.0, 20.0, 1.0);

/// Load as a percentage of one-repetition maximum.
pub const LOAD_PERCENT: ParamRange = ParamRange::new("load", 30.0, 100.0, 1.0);
