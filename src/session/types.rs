//! Session plan and time breakdown types.

use crate::limits;
use crate::tempo::TempoProfile;
use serde::{Deserialize, Serialize};

/// The resistance-training block of a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResistanceBlock {
    /// Number of distinct exercises (at least 1)
    pub exercise_count: u32,
    /// Working sets per exercise (at least 1)
    pub sets_per_exercise: u32,
    /// Repetitions per set (at least 1)
    pub reps_per_set: u32,
    /// Tempo of every repetition
    pub tempo: TempoProfile,
}

impl Default for ResistanceBlock {
    fn default() -> Self {
        Self {
            exercise_count: 6,
            sets_per_exercise: 3,
            reps_per_set: 10,
            tempo: TempoProfile::default(),
        }
    }
}

/// Immutable snapshot of every parameter that shapes a session.
///
/// Exercises are assumed to run strictly one after another: no supersets and
/// no circuits, so rest and transition time simply add up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionPlan {
    /// General warm-up in minutes
    pub warmup_minutes: u32,
    /// Rest between sets of the same exercise, in seconds
    pub rest_seconds_between_sets: u32,
    /// Changeover between exercises, in seconds
    pub transition_seconds_between_exercises: u32,
    /// Conditioning work in minutes
    pub cardio_minutes: u32,
    /// Cool-down in minutes
    pub cooldown_minutes: u32,
    /// Lifting block
    pub resistance: ResistanceBlock,
}

impl Default for SessionPlan {
    fn default() -> Self {
        Self {
            warmup_minutes: 5,
            resistance: ResistanceBlock::default(),
            rest_seconds_between_sets: 60,
            transition_seconds_between_exercises: 60,
            cardio_minutes: 10,
            cooldown_minutes: 5,
        }
    }
}

impl SessionPlan {
    /// Copy of the plan with every field forced into its control range.
    pub fn clamped(&self) -> Self {
        Self {
            warmup_minutes: limits::WARMUP_MINUTES.snap_u32(self.warmup_minutes),
            resistance: ResistanceBlock {
                exercise_count: limits::EXERCISE_COUNT.snap_u32(self.resistance.exercise_count),
                sets_per_exercise: limits::SETS_PER_EXERCISE
                    .snap_u32(self.resistance.sets_per_exercise),
                reps_per_set: limits::REPS_PER_SET.snap_u32(self.resistance.reps_per_set),
                tempo: self.resistance.tempo.clamped(),
            },
            rest_seconds_between_sets: limits::REST_SECONDS
                .snap_u32(self.rest_seconds_between_sets),
            transition_seconds_between_exercises: limits::TRANSITION_SECONDS
                .snap_u32(self.transition_seconds_between_exercises),
            cardio_minutes: limits::CARDIO_MINUTES.snap_u32(self.cardio_minutes),
            cooldown_minutes: limits::COOLDOWN_MINUTES.snap_u32(self.cooldown_minutes),
        }
    }
}

/// A named slice of session time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Warmup,
    Lifting,
    Rest,
    Transition,
    Cardio,
    Cooldown,
}

impl Bucket {
    /// All buckets in session order.
    pub const ALL: [Bucket; 6] = [
        Bucket::Warmup,
        Bucket::Lifting,
        Bucket::Rest,
        Bucket::Transition,
        Bucket::Cardio,
        Bucket::Cooldown,
    ];
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bucket::Warmup => write!(f, "Warm-up"),
            Bucket::Lifting => write!(f, "Lifting"),
            Bucket::Rest => write!(f, "Rest"),
            Bucket::Transition => write!(f, "Transition"),
            Bucket::Cardio => write!(f, "Cardio"),
            Bucket::Cooldown => write!(f, "Cool-down"),
        }
    }
}

/// Where the seconds of a session go.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionBreakdown {
    pub warmup: f64,
    pub lifting: f64,
    pub rest: f64,
    pub transition: f64,
    pub cardio: f64,
    pub cooldown: f64,
    /// Sum of the six buckets
    pub total: f64,
}

impl SessionBreakdown {
    /// Seconds in one bucket.
    pub fn get(&self, bucket: Bucket) -> f64 {
        match bucket {
            Bucket::Warmup => self.warmup,
            Bucket::Lifting => self.lifting,
            Bucket::Rest => self.rest,
            Bucket::Transition => self.transition,
            Bucket::Cardio => self.cardio,
            Bucket::Cooldown => self.cooldown,
        }
    }

    /// Every bucket with its seconds, in session order.
    pub fn buckets(&self) -> [(Bucket, f64); 6] {
        Bucket::ALL.map(|bucket| (bucket, self.get(bucket)))
    }

    /// Percentage of the total spent in a bucket. Zero for an empty session.
    pub fn share(&self, bucket: Bucket) -> f64 {
        if self.total <= 0.0 {
            return 0.0;
        }
        self.get(bucket) / self.total * 100.0
    }

    /// Percentage per bucket, in session order.
    pub fn shares(&self) -> [(Bucket, f64); 6] {
        Bucket::ALL.map(|bucket| (bucket, self.share(bucket)))
    }

    pub fn total_minutes(&self) -> f64 {
        self.total / 60.0
    }
}
