//! Unit tests for the TempoSetSimulator state machine.

use liftlab::tempo::{Phase, SimulatorStatus, TempoProfile, TempoSetSimulator};

fn create_test_simulator(reps: u32) -> TempoSetSimulator {
    TempoSetSimulator::new(TempoProfile::new(3.0, 1.0, 2.0, 1.0), reps)
}

#[test]
fn test_idle_tick_is_noop() {
    let mut sim = create_test_simulator(5);
    for _ in 0..10 {
        sim.tick(0.5);
    }

    let state = sim.state();
    assert_eq!(state.status, SimulatorStatus::Idle);
    assert_eq!(state.current_rep_index, 0);
    assert_eq!(state.current_phase, Phase::Eccentric);
    assert_eq!(state.phase_elapsed, 0.0);
    assert_eq!(state.total_elapsed, 0.0);
}

#[test]
fn test_ticks_summing_to_set_duration_complete_the_set() {
    let mut sim = create_test_simulator(5);
    let set_duration = sim.tempo().rep_duration() * 5.0;
    sim.start();

    let steps = (set_duration / 0.25) as u32;
    for _ in 0..steps {
        sim.tick(0.25);
    }

    let state = sim.state();
    assert_eq!(state.status, SimulatorStatus::Completed);
    assert_eq!(state.current_rep_index, 5);
    assert_eq!(state.total_elapsed, set_duration);
}

#[test]
fn test_not_complete_one_step_early() {
    let mut sim = create_test_simulator(2);
    sim.start();
    sim.tick(13.75);

    let state = sim.state();
    assert_eq!(state.status, SimulatorStatus::Running);
    assert_eq!(state.current_rep_index, 1);
    assert_eq!(state.current_phase, Phase::TopPause);
    assert_eq!(state.phase_elapsed, 0.75);
}

#[test]
fn test_pause_then_resume() {
    let mut sim = create_test_simulator(5);
    sim.start();
    sim.tick(2.0);
    sim.pause();
    assert_eq!(sim.status(), SimulatorStatus::Paused);

    for _ in 0..20 {
        sim.tick(1.0);
    }
    assert_eq!(sim.state().phase_elapsed, 2.0);
    assert_eq!(sim.state().total_elapsed, 2.0);

    sim.resume();
    sim.tick(0.5);
    assert_eq!(sim.state().phase_elapsed, 2.5);
    assert_eq!(sim.state().total_elapsed, 2.5);
}

#[test]
fn test_reset_from_completed() {
    let mut sim = create_test_simulator(1);
    sim.start();
    sim.tick(60.0);
    assert!(sim.is_complete());

    sim.reset();
    let state = sim.state();
    assert_eq!(state.status, SimulatorStatus::Idle);
    assert_eq!(state.current_rep_index, 0);
    assert_eq!(state.current_phase, Phase::Eccentric);
    assert_eq!(state.phase_elapsed, 0.0);
    assert_eq!(state.total_elapsed, 0.0);
}

#[test]
fn test_tick_after_completion_is_noop() {
    let mut sim = create_test_simulator(2);
    sim.start();
    sim.tick(14.0);
    assert!(sim.is_complete());

    let finished = sim.snapshot();
    sim.tick(5.0);
    sim.tick(0.0);

    assert_eq!(sim.snapshot(), finished);
    assert_eq!(sim.state().total_elapsed, 14.0);
    assert_eq!(sim.state().phase_elapsed, 1.0);
}

#[test]
fn test_single_tick_visits_every_boundary() {
    // 7s reps; 2 reps + 4s finishes the bottom pause of rep 3
    let mut sim = create_test_simulator(4);
    sim.start();
    sim.tick(18.0);

    let state = sim.state();
    assert_eq!(state.current_rep_index, 2);
    assert_eq!(state.current_phase, Phase::Concentric);
    assert_eq!(state.phase_elapsed, 0.0);
    assert_eq!(state.completed_reps(), 2);
}

#[test]
fn test_progress_is_bounded() {
    let mut sim = create_test_simulator(3);
    sim.start();
    for _ in 0..100 {
        sim.tick(0.125);
        let progress = sim.phase_progress();
        assert!((0.0..=1.0).contains(&progress));
        let position = sim.stack_position();
        assert!((0.0..=1.0).contains(&position));
    }
}

#[test]
fn test_independent_simulators() {
    let mut first = create_test_simulator(3);
    let mut second = create_test_simulator(3);
    first.start();
    second.start();

    first.tick(4.0);
    second.tick(1.0);

    assert_eq!(first.state().total_elapsed, 4.0);
    assert_eq!(second.state().total_elapsed, 1.0);
}
