//! The lattice of cells, the free-cell registry, and the round update.
//!
//! A [`Grid`] is built once from [`GridParams`]: groups are drawn for every
//! position, a fixed number of positions is emptied by sampling without
//! replacement, and agents receive sequential ids in row-major order.
//! Each [`update()`](Grid::update) then runs one round:
//!
//! 1. advance the round counter;
//! 2. relocation pass: scan cells row-major, moving every unhappy agent
//!    to a uniformly chosen entry of the free-cell registry and putting the
//!    vacated cell into that same registry slot;
//! 3. recompute happiness for every cell.
//!
//! The relocation pass reads and mutates the registry in a single forward
//! scan. A cell vacated early in the pass can be drawn as a destination
//! later in the same pass, and a cell that receives an agent keeps the
//! happy flag it had while empty until the recompute, so it is not moved
//! again this round. Draw order is fixed by the scan order, which makes a
//! run reproducible for a given seed.

use std::fmt;

use schelling_core::{Agent, AgentId, Group, Occupant, RoundId, SimRng};
use schelling_space::{SpaceError, Square8};
use smallvec::SmallVec;
use tracing::debug;

use crate::cell::Cell;
use crate::config::{ConfigError, GridParams, SimulationConfig};
use crate::results::{DetailedRecord, DetailedResults, RoundRecord, RoundResults};

// ── GridState ───────────────────────────────────────────────────────

/// Why a simulation stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoneReason {
    /// Every real agent is happy.
    AllHappy,
    /// The round limit was reached.
    RoundLimit,
}

impl fmt::Display for DoneReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllHappy => write!(f, "all agents happy"),
            Self::RoundLimit => write!(f, "round limit reached"),
        }
    }
}

/// Whether another round should run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridState {
    /// Some agents are unhappy and the round limit is not reached.
    Running,
    /// Terminal.
    Done(DoneReason),
}

// ── Grid ────────────────────────────────────────────────────────────

/// The simulation lattice.
///
/// Invariants, holding after construction and after every update:
/// - every cell is either occupied by a real agent or listed exactly once
///   in the free-cell registry;
/// - `total_agents + empty_cells == rows * cols`, with both counts fixed
///   for the lifetime of the grid.
#[derive(Clone, Debug)]
pub struct Grid {
    space: Square8,
    cells: Vec<Cell>,
    free_cells: Vec<usize>,
    rng: SimRng,
    round: RoundId,
    total_agents: u32,
    happy_agents: u32,
    moves: u32,
}

impl Grid {
    /// Build a square grid from a simulation configuration.
    ///
    /// Does not call [`SimulationConfig::validate`]; see
    /// [`with_params`](Grid::with_params).
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        Self::with_params(config.grid_params())
    }

    /// Build and initialise a grid.
    ///
    /// Threshold and empty fraction are taken as given. Fails only if the
    /// lattice is empty or too large, if there are no groups to draw from,
    /// or if more empty cells are requested than the lattice holds.
    pub fn with_params(params: GridParams) -> Result<Self, ConfigError> {
        let space = Square8::new(params.rows, params.cols)?;
        if params.number_of_groups == 0 {
            return Err(ConfigError::NoGroups);
        }
        let mut rng = SimRng::new(params.seed);
        let n = space.cell_count();

        let mut tags: Vec<Option<Group>> = (0..n)
            .map(|_| Some(Group(rng.uniform_int(1u32, params.number_of_groups))))
            .collect();
        let n_empty = (n as f64 * params.percent_empty).round() as usize;
        for i in rng.sample_without_replacement(n, n_empty)? {
            tags[i] = None;
        }

        let mut cells = Vec::with_capacity(n);
        let mut free_cells = Vec::with_capacity(n_empty);
        let mut next_id = 0u32;
        for (i, tag) in tags.into_iter().enumerate() {
            let occupant = match tag {
                None => {
                    free_cells.push(i);
                    Occupant::Empty
                }
                Some(group) => {
                    let agent = Agent::new(AgentId(next_id), group);
                    next_id += 1;
                    Occupant::Agent(agent)
                }
            };
            cells.push(Cell::with_occupant(params.threshold, occupant));
        }

        let mut grid = Self {
            space,
            cells,
            free_cells,
            rng,
            round: RoundId(0),
            total_agents: next_id,
            happy_agents: 0,
            moves: 0,
        };
        grid.refresh_happiness();
        debug!(
            rows = params.rows,
            cols = params.cols,
            total_agents = grid.total_agents,
            empty_cells = grid.free_cells.len(),
            happy_agents = grid.happy_agents,
            "grid initialised"
        );
        Ok(grid)
    }

    // ── Round update ────────────────────────────────────────────

    /// Run one round: relocate unhappy agents, then recompute happiness.
    pub fn update(&mut self) {
        self.round = self.round.next();
        self.move_unhappy();
        self.refresh_happiness();
        debug!(
            round = self.round.0,
            happy = self.happy_agents,
            unhappy = self.unhappy_agents(),
            moves = self.moves,
            percent_happy = self.round_record().percent_happy(),
            "round complete"
        );
    }

    /// Relocation pass in row-major order.
    fn move_unhappy(&mut self) {
        self.moves = 0;
        if self.free_cells.is_empty() {
            debug!(round = self.round.0, "no free cells, relocation skipped");
            return;
        }
        let last_slot = (self.free_cells.len() - 1) as u64;
        for i in 0..self.cells.len() {
            let cell = &self.cells[i];
            if cell.occupant().is_empty() || cell.is_happy() {
                continue;
            }
            let slot = self.rng.uniform_int(0u64, last_slot) as usize;
            let target = self.free_cells[slot];
            let mover = self.cells[i].replace_occupant(Occupant::Empty);
            let vacancy = self.cells[target].replace_occupant(mover);
            self.cells[i].replace_occupant(vacancy);
            self.free_cells[slot] = i;
            self.moves += 1;
        }
    }

    /// Recompute every cell's happiness and the happy-agent count.
    fn refresh_happiness(&mut self) {
        for i in 0..self.cells.len() {
            let neighbours: SmallVec<[Occupant; 8]> = self
                .space
                .neighbour_slots(i)
                .iter()
                .flatten()
                .map(|&j| self.cells[j].occupant())
                .collect();
            self.cells[i].update_happiness(&neighbours);
        }
        self.happy_agents = self.cells.iter().filter(|c| c.is_happy()).count() as u32;
    }

    // ── Results ─────────────────────────────────────────────────

    /// Aggregated statistics for the current round.
    pub fn round_record(&self) -> RoundRecord {
        RoundRecord {
            round: self.round,
            happy_agents: self.happy_agents,
            unhappy_agents: self.unhappy_agents(),
            number_moves: self.moves,
        }
    }

    /// Append the current round's aggregate row.
    pub fn record_round(&self, out: &mut RoundResults) {
        out.push(self.round_record());
    }

    /// Append one row per cell for the current round, in row-major order.
    ///
    /// Coordinates are 1-based with the origin at the bottom left:
    /// `x = col + 1`, `y = rows - row`.
    pub fn record_detailed(&self, out: &mut DetailedResults) {
        let cols = self.space.cols() as usize;
        let rows = self.space.rows();
        for (i, cell) in self.cells.iter().enumerate() {
            let (row, col) = (i / cols, i % cols);
            let occupant = cell.occupant();
            out.push(DetailedRecord {
                round: self.round,
                x: col as u32 + 1,
                y: rows - row as u32,
                id: occupant.id(),
                group: occupant.group(),
                n_same: cell.n_same(),
                n_different: cell.n_different(),
                happy: cell.is_happy(),
            });
        }
    }

    // ── Accessors ───────────────────────────────────────────────

    /// Run state given a round limit.
    pub fn state(&self, max_rounds: u32) -> GridState {
        if self.happy_agents == self.total_agents {
            GridState::Done(DoneReason::AllHappy)
        } else if self.round.0 >= max_rounds {
            GridState::Done(DoneReason::RoundLimit)
        } else {
            GridState::Running
        }
    }

    /// Current round; 0 before the first update.
    pub fn round(&self) -> RoundId {
        self.round
    }

    /// Number of real agents.
    pub fn total_agents(&self) -> u32 {
        self.total_agents
    }

    /// Happy real agents as of the last recompute.
    pub fn happy_agents(&self) -> u32 {
        self.happy_agents
    }

    /// Unhappy real agents as of the last recompute.
    pub fn unhappy_agents(&self) -> u32 {
        self.total_agents - self.happy_agents
    }

    /// Relocations performed in the current round.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Number of empty cells.
    pub fn empty_cells(&self) -> usize {
        self.free_cells.len()
    }

    /// The free-cell registry: flat indices of all empty cells.
    ///
    /// Slot order reflects relocation history, not position.
    pub fn free_cells(&self) -> &[usize] {
        &self.free_cells
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at `(row, col)`, row 0 at the top.
    pub fn cell(&self, row: u32, col: u32) -> Result<&Cell, SpaceError> {
        Ok(&self.cells[self.space.index(row, col)?])
    }

    /// Lattice topology.
    pub fn space(&self) -> &Square8 {
        &self.space
    }
}

/// Renders the lattice top row first, one right-aligned group number per
/// cell (blank when empty), separated by `" | "`.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.space.cols() as usize) {
            for cell in row {
                match cell.occupant() {
                    Occupant::Empty => write!(f, "{:>5} | ", "")?,
                    Occupant::Agent(a) => write!(f, "{:>5} | ", a.group.0)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
