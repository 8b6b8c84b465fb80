//! Integration tests for session design from a config file.
//!
//! Covers the flow a session designer goes through:
//! - Loading defaults from a TOML config
//! - Clamping untrusted values into control ranges
//! - Computing the breakdown and judging it against a target

use liftlab::session::{compute, format_clock, BudgetReport, BudgetStatus};
use liftlab::storage::config::{load_config_from, save_config_to, AppConfig};

#[test]
fn test_default_config_session() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.toml"))
        .unwrap()
        .clamped();

    let breakdown = compute(&config.session.plan);
    assert_eq!(format_clock(breakdown.total), "49:00");

    let report = BudgetReport::new(&breakdown, config.session.target_minutes);
    assert_eq!(report.status, BudgetStatus::OverTarget);
    assert_eq!(report.minutes_over, Some(4));
}

#[test]
fn test_out_of_range_config_is_clamped_before_compute() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[session]
target_minutes = 30

[session.plan]
warmup_minutes = 0
rest_seconds_between_sets = 5
transition_seconds_between_exercises = 1000
cardio_minutes = 0
cooldown_minutes = 0

[session.plan.resistance]
exercise_count = 0
sets_per_exercise = 2
reps_per_set = 8

[session.plan.resistance.tempo]
eccentric = 2.0
bottom_pause = 0.0
concentric = 1.0
top_pause = 0.0
"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap().clamped();
    let plan = config.session.plan;
    assert_eq!(plan.resistance.exercise_count, 1);
    assert_eq!(plan.rest_seconds_between_sets, 15);
    assert_eq!(plan.transition_seconds_between_exercises, 300);

    // 3s reps x 8 x 2 sets, one 15s rest, no transition
    let breakdown = compute(&plan);
    assert_eq!(breakdown.lifting, 48.0);
    assert_eq!(breakdown.rest, 15.0);
    assert_eq!(breakdown.transition, 0.0);
    assert_eq!(breakdown.total, 63.0);

    let report = BudgetReport::new(&breakdown, config.session.target_minutes);
    assert_eq!(report.status, BudgetStatus::UnderTarget);
    assert_eq!(report.minutes_remaining, Some(28));
}

#[test]
fn test_saved_plan_reproduces_breakdown() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = AppConfig::default();
    config.session.plan.resistance.exercise_count = 8;
    config.session.plan.rest_seconds_between_sets = 90;
    let expected = compute(&config.session.plan);

    save_config_to(&config, &path).unwrap();
    let loaded = load_config_from(&path).unwrap();

    assert_eq!(compute(&loaded.session.plan), expected);
}
