//! Heuristic training-effect scores.
//!
//! Three independent 0-100 scores describing which adaptation a set
//! emphasises. Each is a sum of points from fixed threshold rules and is
//! clamped after summing. The thresholds are a teaching model, not
//! physiology, and are kept as named constants so they can be checked
//! exactly.

use crate::tempo::TempoProfile;
use serde::{Deserialize, Serialize};

// Strength
const HEAVY_LOAD_PERCENT: f64 = 85.0;
const MODERATE_LOAD_PERCENT: f64 = 75.0;
const HEAVY_LOAD_POINTS: i32 = 60;
const MODERATE_LOAD_POINTS: i32 = 40;
const LIGHT_LOAD_POINTS: i32 = 10;
const LOW_REPS_MAX: u32 = 5;
const MID_REPS_MAX: u32 = 8;
const LOW_REPS_POINTS: i32 = 20;
const MID_REPS_POINTS: i32 = 10;
const FAST_CONCENTRIC_MAX_SECONDS: f64 = 1.5;
const FAST_CONCENTRIC_POINTS: i32 = 20;
const SLOW_CONCENTRIC_POINTS: i32 = -20;

// Hypertrophy
const CORE_REP_RANGE: (u32, u32) = (6, 25);
const WIDE_REP_RANGE: (u32, u32) = (3, 35);
const CORE_REP_RANGE_POINTS: i32 = 50;
const WIDE_REP_RANGE_POINTS: i32 = 40;
const OUTSIDE_REP_RANGE_POINTS: i32 = 20;
const EFFECTIVE_REP_SECONDS: (f64, f64) = (2.0, 8.0);
const EFFECTIVE_REP_POINTS: i32 = 40;
const SLOW_REP_POINTS: i32 = 20;
const FAST_REP_POINTS: i32 = 30;
const HYPERTROPHY_TUT_SECONDS: f64 = 40.0;
const HYPERTROPHY_TUT_POINTS: i32 = 10;

// Metabolic
const LONG_TUT_SECONDS: f64 = 60.0;
const MODERATE_TUT_SECONDS: f64 = 40.0;
const LONG_TUT_POINTS: i32 = 40;
const MODERATE_TUT_POINTS: i32 = 20;
const HIGH_REPS_MIN: u32 = 15;
const MODERATE_REPS_MIN: u32 = 10;
const HIGH_REPS_POINTS: i32 = 40;
const MODERATE_REPS_POINTS: i32 = 20;
const CONTINUOUS_TENSION_POINTS: i32 = 20;

/// Score above which an emphasis is called out as dominant.
const DOMINANT_SCORE: u8 = 80;

/// Strength, hypertrophy and metabolic emphasis of a set, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EffectScoreSet {
    pub strength: u8,
    pub hypertrophy: u8,
    pub metabolic: u8,
}

/// The adaptation a set leans towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Hypertrophy,
    Strength,
    Metabolic,
}

impl Emphasis {
    /// Guidance line shown under the scores.
    pub fn guidance(&self) -> &'static str {
        match self {
            Emphasis::Hypertrophy => "Excellent parameters for hypertrophy! The combination of rep range and time under tension is optimal.",
            Emphasis::Strength => "Optimized for strength. High load and lower reps prioritize neural adaptations.",
            Emphasis::Metabolic => "Metabolic focus. High time under tension creates significant stress.",
        }
    }
}

impl EffectScoreSet {
    /// Dominant emphasis. Hypertrophy wins over strength; metabolic is the
    /// fallback when neither clears the threshold.
    pub fn emphasis(&self) -> Emphasis {
        if self.hypertrophy > DOMINANT_SCORE {
            Emphasis::Hypertrophy
        } else if self.strength > DOMINANT_SCORE {
            Emphasis::Strength
        } else {
            Emphasis::Metabolic
        }
    }
}

/// Score a set of `reps` repetitions at `tempo` and `load_percent` of 1RM.
pub fn score(tempo: &TempoProfile, reps: u32, load_percent: f64) -> EffectScoreSet {
    EffectScoreSet {
        strength: clamp_score(strength_points(tempo, reps, load_percent)),
        hypertrophy: clamp_score(hypertrophy_points(tempo, reps)),
        metabolic: clamp_score(metabolic_points(tempo, reps)),
    }
}

fn strength_points(tempo: &TempoProfile, reps: u32, load_percent: f64) -> i32 {
    let mut points = if load_percent >= HEAVY_LOAD_PERCENT {
        HEAVY_LOAD_POINTS
    } else if load_percent >= MODERATE_LOAD_PERCENT {
        MODERATE_LOAD_POINTS
    } else {
        LIGHT_LOAD_POINTS
    };

    if reps <= LOW_REPS_MAX {
        points += LOW_REPS_POINTS;
    } else if reps <= MID_REPS_MAX {
        points += MID_REPS_POINTS;
    }

    if tempo.concentric <= FAST_CONCENTRIC_MAX_SECONDS {
        points += FAST_CONCENTRIC_POINTS;
    } else {
        points += SLOW_CONCENTRIC_POINTS;
    }

    points
}

fn hypertrophy_points(tempo: &TempoProfile, reps: u32) -> i32 {
    let rep_duration = tempo.rep_duration();

    let mut points = if (CORE_REP_RANGE.0..=CORE_REP_RANGE.1).contains(&reps) {
        CORE_REP_RANGE_POINTS
    } else if (WIDE_REP_RANGE.0..=WIDE_REP_RANGE.1).contains(&reps) {
        WIDE_REP_RANGE_POINTS
    } else {
        OUTSIDE_REP_RANGE_POINTS
    };

    points += if (EFFECTIVE_REP_SECONDS.0..=EFFECTIVE_REP_SECONDS.1).contains(&rep_duration) {
        EFFECTIVE_REP_POINTS
    } else if rep_duration > EFFECTIVE_REP_SECONDS.1 {
        SLOW_REP_POINTS
    } else {
        FAST_REP_POINTS
    };

    if tempo.time_under_tension(reps) >= HYPERTROPHY_TUT_SECONDS {
        points += HYPERTROPHY_TUT_POINTS;
    }

    points
}

fn metabolic_points(tempo: &TempoProfile, reps: u32) -> i32 {
    let tut = tempo.time_under_tension(reps);
    let mut points = 0;

    if tut > LONG_TUT_SECONDS {
        points += LONG_TUT_POINTS;
    } else if tut > MODERATE_TUT_SECONDS {
        points += MODERATE_TUT_POINTS;
    }

    if reps >= HIGH_REPS_MIN {
        points += HIGH_REPS_POINTS;
    } else if reps >= MODERATE_REPS_MIN {
        points += MODERATE_REPS_POINTS;
    }

    if tempo.has_no_pauses() {
        points += CONTINUOUS_TENSION_POINTS;
    }

    points
}

fn clamp_score(points: i32) -> u8 {
    points.clamp(0, 100) as u8
}
