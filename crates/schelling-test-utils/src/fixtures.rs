//! Canonical simulation configurations.

use schelling_engine::SimulationConfig;

/// Shorthand for a square-grid configuration.
pub fn config(
    grid_size: u32,
    percent_empty: f64,
    threshold: f64,
    number_of_groups: u32,
    max_rounds: u32,
    seed: u64,
) -> SimulationConfig {
    SimulationConfig {
        grid_size,
        percent_empty,
        threshold,
        number_of_groups,
        max_rounds,
        seed,
    }
}

/// 3×3 grid with exactly one empty cell, two groups, seed 42.
pub fn three_by_three(max_rounds: u32) -> SimulationConfig {
    config(3, 1.0 / 9.0, 0.5, 2, max_rounds, 42)
}

/// A mid-sized run that segregates within a few dozen rounds.
pub const TEN_BY_TEN: SimulationConfig = SimulationConfig {
    grid_size: 10,
    percent_empty: 0.2,
    threshold: 0.5,
    number_of_groups: 2,
    max_rounds: 100,
    seed: 7,
};
