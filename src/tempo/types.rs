//! Tempo types shared by the session budget and the set simulator.

use crate::limits;
use serde::{Deserialize, Serialize};

/// Phase of a single repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Lowering under control
    #[default]
    Eccentric,
    /// Hold in the stretched position
    BottomPause,
    /// Lifting
    Concentric,
    /// Hold at lockout
    TopPause,
}

impl Phase {
    /// All phases in repetition order.
    pub const ALL: [Phase; 4] = [
        Phase::Eccentric,
        Phase::BottomPause,
        Phase::Concentric,
        Phase::TopPause,
    ];

    /// The phase that follows this one. Top pause wraps to eccentric.
    pub fn next(self) -> Phase {
        match self {
            Phase::Eccentric => Phase::BottomPause,
            Phase::BottomPause => Phase::Concentric,
            Phase::Concentric => Phase::TopPause,
            Phase::TopPause => Phase::Eccentric,
        }
    }

    /// Whether the load is held still during this phase.
    pub fn is_pause(self) -> bool {
        matches!(self, Phase::BottomPause | Phase::TopPause)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Eccentric => write!(f, "Eccentric"),
            Phase::BottomPause => write!(f, "Bottom Pause"),
            Phase::Concentric => write!(f, "Concentric"),
            Phase::TopPause => write!(f, "Top Pause"),
        }
    }
}

/// Duration of each repetition phase, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TempoProfile {
    /// Lowering phase
    pub eccentric: f64,
    /// Pause in the bottom position
    pub bottom_pause: f64,
    /// Lifting phase
    pub concentric: f64,
    /// Pause in the top position
    pub top_pause: f64,
}

impl Default for TempoProfile {
    /// The classic 3-0-1-0 tempo.
    fn default() -> Self {
        Self::new(3.0, 0.0, 1.0, 0.0)
    }
}

impl TempoProfile {
    pub const fn new(eccentric: f64, bottom_pause: f64, concentric: f64, top_pause: f64) -> Self {
        Self {
            eccentric,
            bottom_pause,
            concentric,
            top_pause,
        }
    }

    /// Seconds for one full repetition.
    pub fn rep_duration(&self) -> f64 {
        self.eccentric + self.bottom_pause + self.concentric + self.top_pause
    }

    /// Duration of a single phase.
    pub fn phase_duration(&self, phase: Phase) -> f64 {
        match phase {
            Phase::Eccentric => self.eccentric,
            Phase::BottomPause => self.bottom_pause,
            Phase::Concentric => self.concentric,
            Phase::TopPause => self.top_pause,
        }
    }

    /// A profile whose repetitions take no time at all.
    pub fn is_degenerate(&self) -> bool {
        self.rep_duration() <= 0.0
    }

    /// True when neither position is held.
    pub fn has_no_pauses(&self) -> bool {
        Phase::ALL
            .into_iter()
            .filter(|phase| phase.is_pause())
            .all(|phase| self.phase_duration(phase) == 0.0)
    }

    /// Total time under tension for a set of `reps` repetitions.
    pub fn time_under_tension(&self, reps: u32) -> f64 {
        self.rep_duration() * reps as f64
    }

    /// Time under tension per phase across a set, in repetition order.
    pub fn phase_breakdown(&self, reps: u32) -> [(Phase, f64); 4] {
        Phase::ALL.map(|phase| (phase, self.phase_duration(phase) * reps as f64))
    }

    /// Tempo written as `eccentric/bottom/concentric/top`, e.g. `3/0/1/0`.
    pub fn notation(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.eccentric, self.bottom_pause, self.concentric, self.top_pause
        )
    }

    /// Clamp every phase into its control range.
    pub fn clamped(&self) -> Self {
        Self {
            eccentric: limits::ECCENTRIC_SECONDS.clamp(self.eccentric),
            bottom_pause: limits::BOTTOM_PAUSE_SECONDS.clamp(self.bottom_pause),
            concentric: limits::CONCENTRIC_SECONDS.clamp(self.concentric),
            top_pause: limits::TOP_PAUSE_SECONDS.clamp(self.top_pause),
        }
    }
}

/// Lifecycle of a simulated set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulatorStatus {
    /// Not started, or reset
    #[default]
    Idle,
    /// Clock advancing
    Running,
    /// Clock held, counters kept
    Paused,
    /// Last repetition finished
    Completed,
}

/// Live state of one working set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempoRunState {
    /// Zero-based repetition in progress; equals `total_reps` once complete
    pub current_rep_index: u32,
    /// Number of repetitions in the set
    pub total_reps: u32,
    /// Active phase
    pub current_phase: Phase,
    /// Seconds spent in the active phase
    pub phase_elapsed: f64,
    /// Seconds under tension since the set started
    pub total_elapsed: f64,
    /// Lifecycle status
    pub status: SimulatorStatus,
}

impl TempoRunState {
    /// Fresh state for a set of `total_reps` repetitions.
    pub fn new(total_reps: u32) -> Self {
        Self {
            current_rep_index: 0,
            total_reps,
            current_phase: Phase::Eccentric,
            phase_elapsed: 0.0,
            total_elapsed: 0.0,
            status: SimulatorStatus::Idle,
        }
    }

    /// Running in the broad sense: started and not finished, paused or not.
    pub fn is_running(&self) -> bool {
        matches!(
            self.status,
            SimulatorStatus::Running | SimulatorStatus::Paused
        )
    }

    pub fn is_paused(&self) -> bool {
        self.status == SimulatorStatus::Paused
    }

    pub fn is_complete(&self) -> bool {
        self.status == SimulatorStatus::Completed
    }

    /// Repetitions fully finished so far.
    pub fn completed_reps(&self) -> u32 {
        self.current_rep_index.min(self.total_reps)
    }
}
