//! Simulation driver.
//!
//! [`Simulation`] owns a [`Grid`] plus both result tables. Construction
//! records the initial placement as round 0; each [`step()`](Simulation::step)
//! runs one round and records it. Once the grid is [`GridState::Done`] the
//! driver refuses further steps.
//!
//! # Example
//!
//! ```
//! use schelling_engine::{run_schelling, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     grid_size: 10,
//!     percent_empty: 0.2,
//!     threshold: 0.5,
//!     number_of_groups: 2,
//!     max_rounds: 25,
//!     seed: 42,
//! };
//! let output = run_schelling(&config).unwrap();
//! assert_eq!(output.detailed.len(), output.rounds.len() * 100);
//! ```

use std::error::Error;
use std::fmt;

use schelling_core::RoundId;
use tracing::info;

use crate::config::{ConfigError, SimulationConfig};
use crate::grid::{DoneReason, Grid, GridState};
use crate::results::{DetailedResults, RoundRecord, RoundResults};

/// Upper bound on rounds pre-allocated in the result tables.
const RESERVE_ROUNDS_CAP: usize = 256;

// ── StepError ───────────────────────────────────────────────────────

/// Errors from [`Simulation::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The simulation already reached its terminal state.
    Finished {
        /// The last round that ran.
        round: RoundId,
        /// Why it stopped.
        reason: DoneReason,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished { round, reason } => {
                write!(f, "simulation finished at round {round}: {reason}")
            }
        }
    }
}

impl Error for StepError {}

// ── SimulationOutput ────────────────────────────────────────────────

/// Both result tables of a finished run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimulationOutput {
    /// One row per round, including round 0.
    pub rounds: RoundResults,
    /// One row per (round, cell).
    pub detailed: DetailedResults,
}

// ── Simulation ──────────────────────────────────────────────────────

/// Runs a [`Grid`] until every agent is happy or the round limit is hit.
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    max_rounds: u32,
    output: SimulationOutput,
}

impl Simulation {
    /// Wrap an initialised grid and record its state as the first row of
    /// both tables.
    pub fn new(grid: Grid, max_rounds: u32) -> Self {
        let reserve = (max_rounds as usize).saturating_add(1).min(RESERVE_ROUNDS_CAP);
        let mut output = SimulationOutput::default();
        output.rounds.reserve(reserve);
        output
            .detailed
            .reserve(reserve.saturating_mul(grid.cells().len()));

        let mut sim = Self {
            grid,
            max_rounds,
            output,
        };
        sim.record();
        sim
    }

    /// Validate `config`, build its grid, and record round 0.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(Grid::new(config)?, config.max_rounds))
    }

    /// Current run state.
    pub fn state(&self) -> GridState {
        self.grid.state(self.max_rounds)
    }

    /// Run one round and record it.
    ///
    /// # Errors
    ///
    /// [`StepError::Finished`] if the simulation is already done; nothing
    /// is run or recorded in that case.
    pub fn step(&mut self) -> Result<RoundRecord, StepError> {
        if let GridState::Done(reason) = self.state() {
            return Err(StepError::Finished {
                round: self.grid.round(),
                reason,
            });
        }
        self.grid.update();
        self.record();
        if let GridState::Done(reason) = self.state() {
            self.log_done(reason);
        }
        Ok(self.grid.round_record())
    }

    /// Step until done and return the result tables.
    pub fn simulate(mut self) -> SimulationOutput {
        while self.step().is_ok() {}
        self.output
    }

    fn record(&mut self) {
        self.grid.record_round(&mut self.output.rounds);
        self.grid.record_detailed(&mut self.output.detailed);
    }

    fn log_done(&self, reason: DoneReason) {
        info!(
            round = self.grid.round().0,
            happy = self.grid.happy_agents(),
            total = self.grid.total_agents(),
            %reason,
            "simulation done"
        );
    }

    /// The grid being simulated.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Round limit.
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// Round table so far.
    pub fn rounds(&self) -> &RoundResults {
        &self.output.rounds
    }

    /// Detailed table so far.
    pub fn detailed(&self) -> &DetailedResults {
        &self.output.detailed
    }

    /// Stop and take the tables recorded so far.
    pub fn into_output(self) -> SimulationOutput {
        self.output
    }
}

/// Validate `config`, run the simulation to completion, and return both
/// result tables.
pub fn run_schelling(config: &SimulationConfig) -> Result<SimulationOutput, ConfigError> {
    Ok(Simulation::from_config(config)?.simulate())
}
