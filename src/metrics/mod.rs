//! Training-effect heuristics and load references.

pub mod effect;
pub mod intensity;
pub mod research;

pub use effect::{score, EffectScoreSet, Emphasis};
pub use intensity::{load_for_reps, reps_for_load, RM_TABLE};
pub use research::{all_series, ReferenceSeries};
