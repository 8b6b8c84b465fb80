//! Repetitions-to-load lookup against one-repetition maximum.
//!
//! The explorer keeps its reps and load controls in sync: moving one snaps
//! the other to the nearest entry of a %1RM table.

/// Repetition maximum table: (reps, load as % of 1RM).
pub const RM_TABLE: [(u32, u32); 15] = [
    (1, 100),
    (2, 97),
    (3, 94),
    (4, 92),
    (5, 89),
    (6, 87),
    (7, 85),
    (8, 83),
    (9, 81),
    (10, 79),
    (12, 75),
    (15, 69),
    (20, 60),
    (25, 53),
    (30, 48),
];

/// Default explorer reps.
pub const DEFAULT_REPS: u32 = 10;

/// Default explorer load, matching [`DEFAULT_REPS`] in the table.
pub const DEFAULT_LOAD_PERCENT: u32 = 79;

/// Load for the table entry whose rep count is nearest to `reps`.
///
/// Ties go to the lower rep count.
pub fn load_for_reps(reps: u32) -> u32 {
    nearest(|(table_reps, _)| table_reps.abs_diff(reps)).1
}

/// Rep count for the table entry whose load is nearest to `load_percent`.
///
/// Ties go to the lower rep count.
pub fn reps_for_load(load_percent: u32) -> u32 {
    nearest(|(_, table_load)| table_load.abs_diff(load_percent)).0
}

fn nearest(distance: impl Fn((u32, u32)) -> u32) -> (u32, u32) {
    let mut best = RM_TABLE[0];
    let mut best_distance = distance(best);
    for &entry in RM_TABLE.iter().skip(1) {
        let d = distance(entry);
        if d < best_distance {
            best = entry;
            best_distance = d;
        }
    }
    best
}
