//! Integration tests for running a working set on a clock.
//!
//! Drives the simulator the way a frame loop would: many small, uneven
//! ticks, with the user pausing, resuming and restarting along the way.

use liftlab::metrics::effect::score;
use liftlab::tempo::{Phase, SimulatorStatus, TempoProfile, TempoSetSimulator};

/// Tick with a repeating pattern of frame lengths until `seconds` have passed.
fn run_frames(sim: &mut TempoSetSimulator, seconds: f64) {
    let frames: [f64; 3] = [0.015625, 0.03125, 0.0625];
    let mut elapsed = 0.0;
    let mut i = 0;
    while elapsed < seconds {
        let dt = frames[i % frames.len()].min(seconds - elapsed);
        sim.tick(dt);
        elapsed += dt;
        i += 1;
    }
}

#[test]
fn test_full_set_with_uneven_frames() {
    let tempo = TempoProfile::new(3.0, 0.0, 1.0, 0.0);
    let mut sim = TempoSetSimulator::new(tempo, 10);
    sim.start();

    run_frames(&mut sim, 40.0);

    let state = sim.snapshot();
    assert_eq!(state.status, SimulatorStatus::Completed);
    assert_eq!(state.current_rep_index, 10);
    assert_eq!(state.total_elapsed, tempo.time_under_tension(10));

    // The set that was run scores as a hypertrophy set
    let scores = score(&tempo, 10, 79.0);
    assert_eq!(scores.hypertrophy, 100);
}

#[test]
fn test_pause_midway_preserves_progress() {
    let mut sim = TempoSetSimulator::new(TempoProfile::new(2.0, 1.0, 1.0, 1.0), 6);
    sim.start();
    run_frames(&mut sim, 12.0);

    sim.pause();
    let paused_at = sim.snapshot();
    run_frames(&mut sim, 30.0);
    assert_eq!(sim.snapshot(), paused_at);

    // Start while paused acts as resume
    sim.start();
    run_frames(&mut sim, 18.0);
    assert!(sim.is_complete());
    assert_eq!(sim.state().total_elapsed, 30.0);
}

#[test]
fn test_restart_after_completion() {
    let mut sim = TempoSetSimulator::new(TempoProfile::new(1.0, 0.0, 1.0, 0.0), 2);
    sim.start();
    run_frames(&mut sim, 5.0);
    assert!(sim.is_complete());

    sim.start();
    assert_eq!(sim.status(), SimulatorStatus::Running);
    run_frames(&mut sim, 1.5);

    let state = sim.state();
    assert_eq!(state.current_rep_index, 0);
    assert_eq!(state.current_phase, Phase::Concentric);
    assert_eq!(state.total_elapsed, 1.5);
}

#[test]
fn test_snapshot_serializes_for_rendering() {
    let mut sim = TempoSetSimulator::new(TempoProfile::default(), 3);
    sim.start();
    sim.tick(1.0);

    let json = serde_json::to_value(sim.snapshot()).unwrap();
    assert_eq!(json["status"], "running");
    assert_eq!(json["current_phase"], "eccentric");
    assert_eq!(json["total_reps"], 3);
}
