//! Session design: time budget of a full training session.

pub mod calculator;
pub mod report;
pub mod types;

pub use calculator::compute;
pub use report::{format_clock, BudgetReport, BudgetStatus, DEFAULT_TARGET_MINUTES, TARGET_PRESETS};
pub use types::{Bucket, ResistanceBlock, SessionBreakdown, SessionPlan};
