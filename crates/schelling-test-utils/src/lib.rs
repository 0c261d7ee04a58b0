//! Test fixtures and invariant checks for Schelling development.
//!
//! Provides canonical configurations and assertions over the result
//! tables that every run must satisfy, so integration tests and
//! benchmarks share one definition of "a valid run".

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::BTreeMap;

use schelling_core::{Group, RoundId};
use schelling_engine::{DetailedResults, SimulationOutput};

pub use fixtures::{config, three_by_three, TEN_BY_TEN};

/// Sorted ids of the real agents recorded for `round`.
pub fn agent_ids_in_round(detailed: &DetailedResults, round: RoundId) -> Vec<u32> {
    let mut ids: Vec<u32> = detailed
        .round_rows(round)
        .filter(|r| r.group != Group::NONE)
        .map(|r| r.id.0)
        .collect();
    ids.sort_unstable();
    ids
}

/// Map of agent id to group for `round`.
pub fn groups_in_round(detailed: &DetailedResults, round: RoundId) -> BTreeMap<u32, u32> {
    detailed
        .round_rows(round)
        .filter(|r| r.group != Group::NONE)
        .map(|r| (r.id.0, r.group.0))
        .collect()
}

/// Number of empty cells recorded for `round`.
pub fn empty_cells_in_round(detailed: &DetailedResults, round: RoundId) -> usize {
    detailed
        .round_rows(round)
        .filter(|r| r.group == Group::NONE)
        .count()
}

/// Number of agents whose `(x, y)` differs between `round - 1` and `round`.
///
/// Each agent relocates at most once per round and always to a different
/// cell, so this equals the round's move count.
pub fn relocated_agents(detailed: &DetailedResults, round: RoundId) -> usize {
    let Some(prev) = round.0.checked_sub(1) else {
        return 0;
    };
    let positions = |r: RoundId| -> BTreeMap<u32, (u32, u32)> {
        detailed
            .round_rows(r)
            .filter(|row| row.group != Group::NONE)
            .map(|row| (row.id.0, (row.x, row.y)))
            .collect()
    };
    let before = positions(RoundId(prev));
    let after = positions(round);
    after
        .iter()
        .filter(|&(id, pos)| before.get(id) != Some(pos))
        .count()
}

/// Assert the invariants every run satisfies:
///
/// - one round row per round, numbered consecutively from 0;
/// - `cells` detailed rows per round;
/// - `happy + unhappy` constant and equal to the real agents present;
/// - the detailed `happy` column agrees with the round table;
/// - the set of agents, their groups, and the number of empty cells
///   never change;
/// - the move count equals the number of agents that changed cell.
pub fn assert_run_invariants(output: &SimulationOutput, cells: usize) {
    let rounds = &output.rounds;
    let detailed = &output.detailed;
    assert!(!rounds.is_empty(), "round 0 must always be recorded");
    assert_eq!(detailed.len(), rounds.len() * cells, "detailed rows per round");

    let first = rounds.get(0).unwrap();
    let total = first.happy_agents + first.unhappy_agents;
    let ids0 = agent_ids_in_round(detailed, RoundId(0));
    let groups0 = groups_in_round(detailed, RoundId(0));
    let empty0 = empty_cells_in_round(detailed, RoundId(0));
    assert_eq!(ids0.len(), total as usize);
    assert_eq!(ids0, (0..total).collect::<Vec<_>>(), "ids are 0..total");
    assert_eq!(first.number_moves, 0);

    for (i, row) in rounds.rows().enumerate() {
        assert_eq!(row.round, RoundId(i as u32));
        assert_eq!(row.happy_agents + row.unhappy_agents, total);
        assert!(row.number_moves <= total);

        let happy_cells = detailed.round_rows(row.round).filter(|r| r.happy).count();
        assert_eq!(happy_cells, row.happy_agents as usize, "round {i}");
        assert_eq!(agent_ids_in_round(detailed, row.round), ids0, "round {i}");
        assert_eq!(groups_in_round(detailed, row.round), groups0, "round {i}");
        assert_eq!(empty_cells_in_round(detailed, row.round), empty0, "round {i}");
        assert_eq!(
            relocated_agents(detailed, row.round),
            row.number_moves as usize,
            "round {i}"
        );
    }
}
