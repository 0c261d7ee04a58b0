//! Schelling: a residential segregation model on a discrete grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all sub-crates. For most users, adding `schelling` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use schelling::prelude::*;
//!
//! let config = SimulationConfig {
//!     grid_size: 3,
//!     percent_empty: 1.0 / 9.0,
//!     threshold: 0.5,
//!     number_of_groups: 2,
//!     max_rounds: 1,
//!     seed: 42,
//! };
//! let output = run_schelling(&config).unwrap();
//!
//! // Round 0 is always recorded; at most one update follows.
//! assert!(output.rounds.len() <= 2);
//! let first = output.rounds.get(0).unwrap();
//! assert_eq!(first.happy_agents + first.unhappy_agents, 8);
//! assert_eq!(output.detailed.round_rows(RoundId(0)).count(), 9);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `schelling-core` | IDs, occupants, random source |
//! | [`space`] | `schelling-space` | Moore lattice and neighbour table |
//! | [`engine`] | `schelling-engine` | Cells, grid, configuration, results, driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, IDs, and the seeded random source (`schelling-core`).
pub use schelling_core as types;

/// Lattice topology (`schelling-space`).
pub use schelling_space as space;

/// Grid engine, configuration, and result tables (`schelling-engine`).
pub use schelling_engine as engine;

/// Common imports for running simulations.
///
/// ```rust
/// use schelling::prelude::*;
/// ```
pub mod prelude {
    pub use schelling_core::{Agent, AgentId, Group, Occupant, RoundId, SimRng};
    pub use schelling_engine::{
        run_schelling, Cell, ConfigError, DetailedRecord, DetailedResults, DoneReason, Grid,
        GridParams, GridState, RoundRecord, RoundResults, Simulation, SimulationConfig,
        SimulationOutput, StepError,
    };
    pub use schelling_space::{Direction, SpaceError, Square8};
}
