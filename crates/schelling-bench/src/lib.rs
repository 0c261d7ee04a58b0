//! Shared benchmark profiles for the Schelling engine.
//!
//! Each profile is a [`SimulationConfig`] sized to stress one part of the
//! engine. Benchmarks and ad-hoc profiling runs use the same profiles so
//! their numbers are comparable.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use schelling_engine::SimulationConfig;

/// Large, sparse grid with a moderate threshold: relocation-heavy early
/// rounds that settle quickly.
pub fn reference_profile(seed: u64) -> SimulationConfig {
    SimulationConfig {
        grid_size: 100,
        percent_empty: 0.2,
        threshold: 0.5,
        number_of_groups: 2,
        max_rounds: 50,
        seed,
    }
}

/// Dense grid with many groups and a strict threshold: most agents stay
/// unhappy, so every round scans and relocates at full load.
pub fn stress_profile(seed: u64) -> SimulationConfig {
    SimulationConfig {
        grid_size: 100,
        percent_empty: 0.05,
        threshold: 0.8,
        number_of_groups: 6,
        max_rounds: 20,
        seed,
    }
}
