//! Unit tests for the session time budget.

use liftlab::session::{
    compute, Bucket, BudgetReport, BudgetStatus, SessionPlan, TARGET_PRESETS,
};
use liftlab::tempo::TempoProfile;

fn reference_plan() -> SessionPlan {
    let mut plan = SessionPlan::default();
    plan.resistance.tempo = TempoProfile::new(3.0, 0.0, 1.0, 0.0);
    plan.resistance.reps_per_set = 10;
    plan.resistance.sets_per_exercise = 3;
    plan.resistance.exercise_count = 6;
    plan.rest_seconds_between_sets = 60;
    plan.transition_seconds_between_exercises = 60;
    plan.warmup_minutes = 5;
    plan.cardio_minutes = 10;
    plan.cooldown_minutes = 5;
    plan
}

#[test]
fn test_reference_session_is_49_minutes() {
    let breakdown = compute(&reference_plan());

    assert_eq!(breakdown.lifting, 720.0);
    assert_eq!(breakdown.rest, 720.0);
    assert_eq!(breakdown.transition, 300.0);
    assert_eq!(breakdown.warmup, 300.0);
    assert_eq!(breakdown.cardio, 600.0);
    assert_eq!(breakdown.cooldown, 300.0);
    assert_eq!(breakdown.total, 2940.0);
}

#[test]
fn test_total_matches_bucket_sum_across_ranges() {
    for exercises in 1..=12 {
        for sets in 1..=6 {
            for rest in (15..=300).step_by(45) {
                let mut plan = reference_plan();
                plan.resistance.exercise_count = exercises;
                plan.resistance.sets_per_exercise = sets;
                plan.rest_seconds_between_sets = rest;
                plan.resistance.tempo = TempoProfile::new(2.0, 1.0, 1.0, 0.5);

                let breakdown = compute(&plan);
                let sum: f64 = breakdown.buckets().iter().map(|(_, s)| s).sum();
                assert_eq!(breakdown.total, sum);
            }
        }
    }
}

#[test]
fn test_rest_and_transition_need_more_than_one() {
    for seconds in [15, 90, 300] {
        let mut plan = reference_plan();
        plan.resistance.sets_per_exercise = 1;
        plan.resistance.exercise_count = 1;
        plan.rest_seconds_between_sets = seconds;
        plan.transition_seconds_between_exercises = seconds;

        let breakdown = compute(&plan);
        assert_eq!(breakdown.rest, 0.0);
        assert_eq!(breakdown.transition, 0.0);
    }
}

#[test]
fn test_breakdown_is_fresh_per_plan() {
    let plan = reference_plan();
    let before = compute(&plan);

    let mut longer = plan;
    longer.cardio_minutes = 20;
    let after = compute(&longer);

    assert_eq!(before.total, 2940.0);
    assert_eq!(after.total, 3540.0);
    assert_eq!(after.cardio - before.cardio, 600.0);
}

#[test]
fn test_lifting_share() {
    let breakdown = compute(&reference_plan());
    let lifting = breakdown.share(Bucket::Lifting);
    assert!((lifting - 720.0 / 2940.0 * 100.0).abs() < 1e-9);
}

#[test]
fn test_report_tiers_for_presets() {
    let breakdown = compute(&reference_plan());
    let statuses: Vec<BudgetStatus> = TARGET_PRESETS
        .iter()
        .map(|&target| BudgetReport::new(&breakdown, target).status)
        .collect();

    assert_eq!(
        statuses,
        vec![
            BudgetStatus::OverTarget,
            BudgetStatus::OverTarget,
            BudgetStatus::UnderTarget
        ]
    );
}
