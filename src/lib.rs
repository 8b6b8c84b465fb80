//! LiftLab - Hypertrophy Training Math
//!
//! The deterministic engine behind a hypertrophy learning pathway: session
//! time budgets, a real-time tempo simulator for a single working set, and
//! heuristic training-effect scores. Presentation, content generation and
//! scheduling belong to the caller; everything here is plain data in, plain
//! data out.

pub mod content;
pub mod limits;
pub mod metrics;
pub mod session;
pub mod storage;
pub mod tempo;

// Re-export commonly used types
pub use metrics::effect::{score, EffectScoreSet};
pub use session::calculator::compute;
pub use session::types::{SessionBreakdown, SessionPlan};
pub use storage::config::AppConfig;
pub use tempo::simulator::TempoSetSimulator;
pub use tempo::types::{TempoProfile, TempoRunState};
