//! Append-only result tables.
//!
//! Both tables are column-oriented: one `Vec` per column, all of equal
//! length. Field names are the column names, so serializing a table with
//! serde yields the host-facing layout directly. Rows are only ever
//! appended; nothing is mutated after it is written.

use schelling_core::{AgentId, Group, RoundId};
use serde::Serialize;

// ── Round table ─────────────────────────────────────────────────────

/// One row of [`RoundResults`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundRecord {
    /// Round number, 0 for the initial placement.
    pub round: RoundId,
    /// Real agents that are happy.
    pub happy_agents: u32,
    /// Real agents that are unhappy.
    pub unhappy_agents: u32,
    /// Relocations performed during this round.
    pub number_moves: u32,
}

impl RoundRecord {
    /// Share of happy agents, in percent. 0 when there are no agents.
    pub fn percent_happy(&self) -> f64 {
        let total = self.happy_agents + self.unhappy_agents;
        if total == 0 {
            return 0.0;
        }
        f64::from(self.happy_agents) / f64::from(total) * 100.0
    }
}

/// Aggregated statistics, one row per round including round 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RoundResults {
    /// Round number.
    pub round: Vec<u32>,
    /// Happy real agents.
    pub happy_agents: Vec<u32>,
    /// Unhappy real agents.
    pub unhappy_agents: Vec<u32>,
    /// Relocations in the round.
    pub number_moves: Vec<u32>,
}

impl RoundResults {
    /// Column names in output order.
    pub const COLUMNS: [&'static str; 4] =
        ["round", "happy_agents", "unhappy_agents", "number_moves"];

    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve room for `n` more rows in every column.
    pub fn reserve(&mut self, n: usize) {
        self.round.reserve(n);
        self.happy_agents.reserve(n);
        self.unhappy_agents.reserve(n);
        self.number_moves.reserve(n);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.round.len()
    }

    /// `true` if no rows have been written.
    pub fn is_empty(&self) -> bool {
        self.round.is_empty()
    }

    /// Append a row.
    pub fn push(&mut self, record: RoundRecord) {
        self.round.push(record.round.0);
        self.happy_agents.push(record.happy_agents);
        self.unhappy_agents.push(record.unhappy_agents);
        self.number_moves.push(record.number_moves);
    }

    /// Row `i`, if present.
    pub fn get(&self, i: usize) -> Option<RoundRecord> {
        Some(RoundRecord {
            round: RoundId(*self.round.get(i)?),
            happy_agents: self.happy_agents[i],
            unhappy_agents: self.unhappy_agents[i],
            number_moves: self.number_moves[i],
        })
    }

    /// The most recently written row.
    pub fn last(&self) -> Option<RoundRecord> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterate rows in write order.
    pub fn rows(&self) -> impl Iterator<Item = RoundRecord> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }
}

// ── Detailed table ──────────────────────────────────────────────────

/// One row of [`DetailedResults`]: the state of one cell in one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetailedRecord {
    /// Round number.
    pub round: RoundId,
    /// Column, 1-based from the left.
    pub x: u32,
    /// Row, 1-based from the bottom.
    pub y: u32,
    /// Occupant id, 0 for an empty cell.
    pub id: AgentId,
    /// Occupant group, [`Group::NONE`] for an empty cell.
    pub group: Group,
    /// Occupied neighbours of the same group.
    pub n_same: u32,
    /// Occupied neighbours of another group.
    pub n_different: u32,
    /// Whether a real agent occupies the cell and is happy.
    pub happy: bool,
}

/// Per-cell state, one row per (round, cell) in row-major scan order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DetailedResults {
    /// Round number.
    pub round: Vec<u32>,
    /// Column, 1-based from the left.
    pub x: Vec<u32>,
    /// Row, 1-based from the bottom.
    pub y: Vec<u32>,
    /// Occupant id.
    pub id: Vec<u32>,
    /// Occupant group.
    pub group: Vec<u32>,
    /// Same-group occupied neighbours.
    pub n_same: Vec<u32>,
    /// Other-group occupied neighbours.
    pub n_different: Vec<u32>,
    /// Happy real agent.
    pub happy: Vec<bool>,
}

impl DetailedResults {
    /// Column names in output order.
    pub const COLUMNS: [&'static str; 8] = [
        "round",
        "x",
        "y",
        "id",
        "group",
        "n_same",
        "n_different",
        "happy",
    ];

    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve room for `n` more rows in every column.
    pub fn reserve(&mut self, n: usize) {
        self.round.reserve(n);
        self.x.reserve(n);
        self.y.reserve(n);
        self.id.reserve(n);
        self.group.reserve(n);
        self.n_same.reserve(n);
        self.n_different.reserve(n);
        self.happy.reserve(n);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.round.len()
    }

    /// `true` if no rows have been written.
    pub fn is_empty(&self) -> bool {
        self.round.is_empty()
    }

    /// Append a row.
    pub fn push(&mut self, record: DetailedRecord) {
        self.round.push(record.round.0);
        self.x.push(record.x);
        self.y.push(record.y);
        self.id.push(record.id.0);
        self.group.push(record.group.0);
        self.n_same.push(record.n_same);
        self.n_different.push(record.n_different);
        self.happy.push(record.happy);
    }

    /// Row `i`, if present.
    pub fn get(&self, i: usize) -> Option<DetailedRecord> {
        Some(DetailedRecord {
            round: RoundId(*self.round.get(i)?),
            x: self.x[i],
            y: self.y[i],
            id: AgentId(self.id[i]),
            group: Group(self.group[i]),
            n_same: self.n_same[i],
            n_different: self.n_different[i],
            happy: self.happy[i],
        })
    }

    /// Iterate rows in write order.
    pub fn rows(&self) -> impl Iterator<Item = DetailedRecord> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }

    /// Iterate the rows written for `round`.
    pub fn round_rows(&self, round: RoundId) -> impl Iterator<Item = DetailedRecord> + '_ {
        self.rows().filter(move |r| r.round == round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_record(round: u32, happy: u32, unhappy: u32, moves: u32) -> RoundRecord {
        RoundRecord {
            round: RoundId(round),
            happy_agents: happy,
            unhappy_agents: unhappy,
            number_moves: moves,
        }
    }

    #[test]
    fn round_table_push_and_read_back() {
        let mut t = RoundResults::new();
        assert!(t.is_empty());
        assert_eq!(t.last(), None);
        t.push(round_record(0, 3, 5, 0));
        t.push(round_record(1, 6, 2, 5));
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(1), Some(round_record(1, 6, 2, 5)));
        assert_eq!(t.last(), Some(round_record(1, 6, 2, 5)));
        assert_eq!(t.get(2), None);
        assert_eq!(t.rows().count(), 2);
    }

    #[test]
    fn percent_happy() {
        assert_eq!(round_record(0, 3, 1, 0).percent_happy(), 75.0);
        assert_eq!(round_record(0, 0, 0, 0).percent_happy(), 0.0);
    }

    #[test]
    fn detailed_round_rows_filters_by_round() {
        let mut t = DetailedResults::new();
        for round in 0..3 {
            for x in 1..=2 {
                t.push(DetailedRecord {
                    round: RoundId(round),
                    x,
                    y: 1,
                    id: AgentId(x - 1),
                    group: Group(1),
                    n_same: 1,
                    n_different: 0,
                    happy: true,
                });
            }
        }
        assert_eq!(t.len(), 6);
        let r1: Vec<_> = t.round_rows(RoundId(1)).collect();
        assert_eq!(r1.len(), 2);
        assert!(r1.iter().all(|r| r.round == RoundId(1)));
        assert_eq!(r1[1].x, 2);
    }

    #[test]
    fn serialized_keys_are_column_names() {
        let mut t = RoundResults::new();
        t.push(round_record(0, 1, 1, 0));
        let v = serde_json::to_value(&t).unwrap();
        let keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
        for col in RoundResults::COLUMNS {
            assert!(keys.contains(&col), "missing {col}");
        }
        assert_eq!(keys.len(), RoundResults::COLUMNS.len());

        let v = serde_json::to_value(DetailedResults::new()).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), DetailedResults::COLUMNS.len());
        for col in DetailedResults::COLUMNS {
            assert!(obj.contains_key(col), "missing {col}");
        }
    }
}
