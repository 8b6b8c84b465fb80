//! Session time budget.

use crate::session::types::{SessionBreakdown, SessionPlan};

/// Compute where the time of a session goes.
///
/// Rest is only owed between sets of the same exercise, so a single set per
/// exercise needs none. Transitions only happen between distinct exercises.
/// Everything runs serially; the buckets never overlap.
pub fn compute(plan: &SessionPlan) -> SessionBreakdown {
    let block = &plan.resistance;
    let exercises = block.exercise_count as f64;
    let sets = block.sets_per_exercise as f64;

    let warmup = plan.warmup_minutes as f64 * 60.0;
    let cardio = plan.cardio_minutes as f64 * 60.0;
    let cooldown = plan.cooldown_minutes as f64 * 60.0;

    let lifting = block.tempo.rep_duration() * block.reps_per_set as f64 * sets * exercises;

    let rest = if block.sets_per_exercise > 1 {
        (sets - 1.0) * plan.rest_seconds_between_sets as f64 * exercises
    } else {
        0.0
    };

    let transition = if block.exercise_count > 1 {
        (exercises - 1.0) * plan.transition_seconds_between_exercises as f64
    } else {
        0.0
    };

    let total = warmup + lifting + rest + transition + cardio + cooldown;

    SessionBreakdown {
        warmup,
        lifting,
        rest,
        transition,
        cardio,
        cooldown,
        total,
    }
}
