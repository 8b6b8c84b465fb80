//! Reference chart series summarising the tempo and rep-range literature.

use serde::Serialize;

/// A labelled bar series with relative effect values (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceSeries {
    pub title: &'static str,
    /// Axis label for the values
    pub measure: &'static str,
    pub caption: &'static str,
    pub points: &'static [(&'static str, u8)],
}

impl ReferenceSeries {
    /// Largest value in the series. Ties go to the earliest point.
    pub fn peak(&self) -> Option<(&'static str, u8)> {
        self.points
            .iter()
            .copied()
            .fold(None, |best, point| match best {
                Some((_, value)) if value >= point.1 => best,
                _ => Some(point),
            })
    }
}

pub const STRENGTH_BY_INTENT: ReferenceSeries = ReferenceSeries {
    title: "Intent to Move",
    measure: "Strength Gain",
    caption: "Voluntarily slowing down reduces motor unit recruitment.",
    points: &[("Explosive", 95), ("Controlled", 70), ("Slow", 40)],
};

pub const HYPERTROPHY_BY_REP_RANGE: ReferenceSeries = ReferenceSeries {
    title: "Rep Ranges (Equated Volume)",
    measure: "Effect",
    caption: "Similar growth 8-30 reps. Drop off at extremes.",
    points: &[("3 Reps", 70), ("8 Reps", 95), ("15 Reps", 95), ("35+ Reps", 60)],
};

pub const HYPERTROPHY_BY_REP_DURATION: ReferenceSeries = ReferenceSeries {
    title: "Rep Duration Efficiency",
    measure: "Efficacy",
    caption: "Super slow reps require too much load reduction.",
    points: &[
        ("Fast (<2s)", 80),
        ("Mod (2-6s)", 95),
        ("Slow (6-9s)", 90),
        (">10s", 50),
    ],
};

/// Every reference series, in display order.
pub fn all_series() -> [&'static ReferenceSeries; 3] {
    [
        &STRENGTH_BY_INTENT,
        &HYPERTROPHY_BY_REP_RANGE,
        &HYPERTROPHY_BY_REP_DURATION,
    ]
}
