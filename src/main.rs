//! LiftLab - Hypertrophy Training Math
//!
//! Command-line driver. Prints the session budget for the configured plan,
//! then runs the configured working set in real time and prints the final
//! state as JSON.

use liftlab::metrics::effect::score;
use liftlab::session::{compute, format_clock, BudgetReport};
use liftlab::storage::config::load_config;
use liftlab::tempo::{Phase, TempoSetSimulator, TempoRunState};
use liftlab::EffectScoreSet;
use serde::Serialize;
use std::time::Duration;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Final output of a simulated set.
#[derive(Serialize)]
struct SetSummary {
    tempo: String,
    load_percent: u32,
    run: TempoRunState,
    scores: EffectScoreSet,
    emphasis: &'static str,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting LiftLab v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?.clamped();

    // Session budget
    let breakdown = compute(&config.session.plan);
    for (bucket, seconds) in breakdown.buckets() {
        tracing::info!(
            "{:<10} {:>6}  {:5.1}%",
            bucket.to_string(),
            format_clock(seconds),
            breakdown.share(bucket)
        );
    }
    let report = BudgetReport::new(&breakdown, config.session.target_minutes);
    tracing::info!(
        "Total {} against {} min target: {}",
        format_clock(breakdown.total),
        report.target_minutes,
        report.status
    );
    tracing::info!("{}", report.message);

    // Working set
    let tempo = config.tempo.profile;
    let reps = config.tempo.reps;
    let scores = score(&tempo, reps, config.tempo.load_percent as f64);

    let mut simulator = TempoSetSimulator::new(tempo, reps);
    let mut ticker = interval(Duration::from_millis(config.simulation.tick_interval_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    simulator.start();
    let mut last = Instant::now();
    let mut last_phase: Option<(u32, Phase)> = None;

    while !simulator.is_complete() {
        ticker.tick().await;
        let now = Instant::now();
        simulator.tick(now.duration_since(last).as_secs_f64());
        last = now;

        let state = simulator.state();
        let position = (state.current_rep_index, state.current_phase);
        if last_phase != Some(position) && !state.is_complete() {
            tracing::info!(
                "Rep {}/{} {}",
                state.current_rep_index + 1,
                state.total_reps,
                state.current_phase
            );
            last_phase = Some(position);
        }
    }

    let summary = SetSummary {
        tempo: tempo.notation(),
        load_percent: config.tempo.load_percent,
        run: simulator.snapshot(),
        scores,
        emphasis: scores.emphasis().guidance(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
