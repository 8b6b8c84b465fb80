//! Real-time phase clock for a single working set.
//!
//! The clock itself is a pure transition, [`advance`], over a
//! [`TempoRunState`]. [`TempoSetSimulator`] wraps it with the start, pause,
//! resume and reset controls and logs lifecycle changes. Scheduling is left to
//! the caller: whatever timer or frame callback is available calls
//! [`TempoSetSimulator::tick`] with the seconds elapsed since the last call.

use crate::tempo::types::{Phase, SimulatorStatus, TempoProfile, TempoRunState};
use serde::Serialize;

/// Slack, in seconds, when deciding whether a phase has run its course.
const PHASE_EPSILON: f64 = 1e-9;

/// Advance a running set by `delta_seconds`.
///
/// Returns the state unchanged unless it is [`SimulatorStatus::Running`] and
/// the delta is a non-negative finite number. A single call may cross any
/// number of phase and repetition boundaries. Phases with zero duration are
/// passed through on the call that reaches them.
pub fn advance(state: &TempoRunState, tempo: &TempoProfile, delta_seconds: f64) -> TempoRunState {
    let mut next = state.clone();

    if next.status != SimulatorStatus::Running || !delta_seconds.is_finite() || delta_seconds < 0.0
    {
        return next;
    }

    next.phase_elapsed += delta_seconds;
    next.total_elapsed += delta_seconds;

    if next.current_rep_index >= next.total_reps || tempo.is_degenerate() {
        finish(&mut next, tempo);
        return next;
    }

    loop {
        let duration = tempo.phase_duration(next.current_phase);
        // Frame deltas rarely sum exactly; a phase within PHASE_EPSILON of
        // its end counts as finished.
        if next.phase_elapsed + PHASE_EPSILON < duration {
            break;
        }
        next.phase_elapsed = (next.phase_elapsed - duration).max(0.0);

        if next.current_phase == Phase::TopPause {
            next.current_rep_index += 1;
            if next.current_rep_index >= next.total_reps {
                finish(&mut next, tempo);
                break;
            }
        }
        next.current_phase = next.current_phase.next();
    }

    next
}

/// Move a state into the terminal position: last top pause fully elapsed.
///
/// Time past the end of the set is not counted as time under tension, so a
/// finished set reports exactly `rep_duration * total_reps`.
fn finish(state: &mut TempoRunState, tempo: &TempoProfile) {
    state.current_rep_index = state.total_reps;
    state.current_phase = Phase::TopPause;
    state.phase_elapsed = tempo.top_pause;
    state.total_elapsed = tempo.time_under_tension(state.total_reps);
    state.status = SimulatorStatus::Completed;
}

/// Which controls a caller should offer for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlState {
    /// Start (or resume) is available
    pub can_start: bool,
    /// Pause is available
    pub can_pause: bool,
    /// Label for the start button: "Resume" while paused, "Start" otherwise
    pub start_label: &'static str,
}

/// Stateful simulator for one working set.
///
/// Every control is safe to call in any state; calls that make no sense for
/// the current state do nothing.
#[derive(Debug, Clone)]
pub struct TempoSetSimulator {
    /// Phase durations
    tempo: TempoProfile,
    /// Current run state
    state: TempoRunState,
}

impl TempoSetSimulator {
    /// Create a simulator for `reps` repetitions at the given tempo.
    ///
    /// A set has at least one repetition; `reps == 0` is treated as one.
    pub fn new(tempo: TempoProfile, reps: u32) -> Self {
        Self {
            tempo,
            state: TempoRunState::new(reps.max(1)),
        }
    }

    /// Replace the tempo and repetition count. The set returns to idle.
    pub fn reconfigure(&mut self, tempo: TempoProfile, reps: u32) {
        self.tempo = tempo;
        self.state = TempoRunState::new(reps.max(1));
        tracing::debug!("Set reconfigured to {} x {}", self.state.total_reps, tempo.notation());
    }

    /// Start the set.
    ///
    /// From idle or completed this begins a fresh set. From paused it resumes
    /// with counters intact. While already running it does nothing.
    pub fn start(&mut self) {
        match self.state.status {
            SimulatorStatus::Idle | SimulatorStatus::Completed => {
                self.state = TempoRunState::new(self.state.total_reps);
                self.state.status = SimulatorStatus::Running;
                tracing::info!(
                    "Set started: {} reps at {}",
                    self.state.total_reps,
                    self.tempo.notation()
                );
            }
            SimulatorStatus::Paused => self.resume(),
            SimulatorStatus::Running => {}
        }
    }

    /// Hold the clock. Only valid while running.
    pub fn pause(&mut self) {
        if self.state.status == SimulatorStatus::Running {
            self.state.status = SimulatorStatus::Paused;
            tracing::info!("Set paused at rep {}", self.state.current_rep_index + 1);
        }
    }

    /// Release the clock. Only valid while paused.
    pub fn resume(&mut self) {
        if self.state.status == SimulatorStatus::Paused {
            self.state.status = SimulatorStatus::Running;
            tracing::info!("Set resumed");
        }
    }

    /// Return to idle with every counter zeroed.
    pub fn reset(&mut self) {
        self.state = TempoRunState::new(self.state.total_reps);
        tracing::info!("Set reset");
    }

    /// Advance the clock by `delta_seconds` of wall time.
    pub fn tick(&mut self, delta_seconds: f64) {
        let next = advance(&self.state, &self.tempo, delta_seconds);

        if next.current_rep_index != self.state.current_rep_index && !next.is_complete() {
            tracing::debug!("Rep {} of {}", next.current_rep_index + 1, next.total_reps);
        }
        if next.current_phase != self.state.current_phase {
            tracing::debug!("Phase: {}", next.current_phase);
        }
        if next.is_complete() && !self.state.is_complete() {
            tracing::info!(
                "Set completed: {} reps, {:.1}s under tension",
                next.total_reps,
                next.total_elapsed
            );
        }

        self.state = next;
    }

    /// Current run state.
    pub fn state(&self) -> &TempoRunState {
        &self.state
    }

    /// Owned copy of the run state for a rendering layer.
    pub fn snapshot(&self) -> TempoRunState {
        self.state.clone()
    }

    pub fn tempo(&self) -> &TempoProfile {
        &self.tempo
    }

    pub fn total_reps(&self) -> u32 {
        self.state.total_reps
    }

    pub fn status(&self) -> SimulatorStatus {
        self.state.status
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Fraction of the active phase elapsed, in `[0, 1]`.
    ///
    /// A zero-length phase counts as already complete.
    pub fn phase_progress(&self) -> f64 {
        let duration = self.tempo.phase_duration(self.state.current_phase);
        if duration <= 0.0 {
            return 1.0;
        }
        (self.state.phase_elapsed / duration).clamp(0.0, 1.0)
    }

    /// Height of the weight stack as a fraction of its travel (1.0 = top).
    ///
    /// The stack descends during the eccentric, waits at the bottom, rises
    /// during the concentric and waits at the top.
    pub fn stack_position(&self) -> f64 {
        let progress = self.phase_progress();
        match self.state.current_phase {
            Phase::Eccentric => 1.0 - progress,
            Phase::BottomPause => 0.0,
            Phase::Concentric => progress,
            Phase::TopPause => 1.0,
        }
    }

    /// Controls available in the current state.
    pub fn controls(&self) -> ControlState {
        let running = self.state.is_running();
        let paused = self.state.is_paused();
        ControlState {
            can_start: !running || paused,
            can_pause: running && !paused,
            start_label: if paused { "Resume" } else { "Start" },
        }
    }
}
