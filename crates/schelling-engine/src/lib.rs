//! Grid engine for Schelling segregation simulations.
//!
//! Agents of several groups occupy cells of a [`Square8`](schelling_space::Square8)
//! lattice. Each round, every agent whose share of same-group occupied
//! neighbours falls below the threshold relocates to a random free cell;
//! happiness is then recomputed for the whole lattice. The simulation
//! stops at a round limit or once every agent is happy.
//!
//! - [`Grid`] owns the lattice, the free-cell registry, and the random
//!   stream, and performs one round per [`update()`](Grid::update).
//! - [`Simulation`] drives a grid to completion, appending a row per round
//!   to [`RoundResults`] and a row per (round, cell) to [`DetailedResults`].
//! - [`run_schelling`] is the single entry point for host adapters.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod config;
pub mod grid;
pub mod results;
pub mod simulation;

pub use cell::Cell;
pub use config::{ConfigError, GridParams, SimulationConfig};
pub use grid::{DoneReason, Grid, GridState};
pub use results::{DetailedRecord, DetailedResults, RoundRecord, RoundResults};
pub use simulation::{run_schelling, Simulation, SimulationOutput, StepError};
