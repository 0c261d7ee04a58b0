//! A single lattice cell and its happiness rule.

use schelling_core::Occupant;

/// One grid location: its occupant and the derived happiness state.
///
/// Neighbours are not stored here; the owning [`Grid`](crate::Grid)
/// resolves them through the lattice's neighbour table and passes their
/// occupants to [`update_happiness`](Cell::update_happiness).
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    occupant: Occupant,
    threshold: f64,
    n_same: u32,
    n_different: u32,
    happy: bool,
}

impl Cell {
    /// An empty cell with the given similarity threshold.
    pub fn new(threshold: f64) -> Self {
        Self::with_occupant(threshold, Occupant::Empty)
    }

    /// A cell holding `occupant`. Happiness state starts cleared until the
    /// first [`update_happiness`](Cell::update_happiness).
    pub fn with_occupant(threshold: f64, occupant: Occupant) -> Self {
        Self {
            occupant,
            threshold,
            n_same: 0,
            n_different: 0,
            happy: false,
        }
    }

    /// Current occupant.
    pub fn occupant(&self) -> Occupant {
        self.occupant
    }

    /// Put `occupant` in this cell and return the previous one.
    ///
    /// Derived happiness state is left untouched until the next recompute.
    pub fn replace_occupant(&mut self, occupant: Occupant) -> Occupant {
        std::mem::replace(&mut self.occupant, occupant)
    }

    /// Minimum same-group share this cell's occupant accepts.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Occupied neighbours sharing the occupant's group.
    pub fn n_same(&self) -> u32 {
        self.n_same
    }

    /// Occupied neighbours of another group. Empty neighbours are not counted.
    pub fn n_different(&self) -> u32 {
        self.n_different
    }

    /// Raw happy flag used by the relocation rule.
    ///
    /// Always `true` for an empty cell once computed: empty cells never
    /// want to move.
    pub fn happy_flag(&self) -> bool {
        self.happy
    }

    /// Happiness as counted in statistics: `false` for an empty cell,
    /// otherwise the happy flag.
    pub fn is_happy(&self) -> bool {
        !self.occupant.is_empty() && self.happy
    }

    /// Recompute `n_same`, `n_different`, and the happy flag from the
    /// current occupant and the occupants of its existing neighbours.
    ///
    /// A real agent is happy iff `n_same / (n_same + n_different) >=
    /// threshold`. An agent with no occupied neighbours is unhappy.
    pub fn update_happiness(&mut self, neighbours: &[Occupant]) {
        self.n_same = 0;
        self.n_different = 0;
        let Some(agent) = self.occupant.agent().copied() else {
            self.happy = true;
            return;
        };

        let mut total = 0u32;
        for n in neighbours.iter().filter_map(Occupant::agent) {
            total += 1;
            if n.group == agent.group {
                self.n_same += 1;
            }
        }
        self.n_different = total - self.n_same;
        // 0/0 is treated as failing any threshold, never as NaN.
        self.happy = total > 0 && f64::from(self.n_same) / f64::from(total) >= self.threshold;
    }
}
