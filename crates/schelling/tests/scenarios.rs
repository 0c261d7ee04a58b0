//! Integration tests: concrete scenarios and boundary behaviour of full runs.

use schelling::prelude::*;
use schelling_test_utils::{assert_run_invariants, config, relocated_agents, three_by_three};

// ── 3×3, one empty cell ─────────────────────────────────────────

#[test]
fn three_by_three_single_round() {
    let mut sim = Simulation::from_config(&three_by_three(1)).unwrap();
    assert_eq!(sim.grid().total_agents(), 8);
    assert_eq!(sim.grid().empty_cells(), 1);
    assert_eq!(sim.detailed().round_rows(RoundId(0)).count(), 9);
    assert_eq!(sim.detailed().len(), 9);

    let unhappy_at_start = sim.grid().unhappy_agents();
    match sim.step() {
        Ok(record) => {
            assert_eq!(record.round, RoundId(1));
            assert!(record.number_moves <= unhappy_at_start);
            // The first unhappy agent in scan order always finds the free cell.
            assert!(record.number_moves >= 1);
            assert_eq!(
                relocated_agents(sim.detailed(), RoundId(1)),
                record.number_moves as usize
            );
            assert_eq!(sim.detailed().len(), 18);
        }
        Err(StepError::Finished { reason, .. }) => {
            // Everyone was already happy at placement.
            assert_eq!(reason, DoneReason::AllHappy);
            assert_eq!(unhappy_at_start, 0);
        }
    }
    assert!(sim.step().is_err());
    assert_run_invariants(&sim.into_output(), 9);
}

#[test]
fn three_by_three_to_completion() {
    let out = run_schelling(&three_by_three(20)).unwrap();
    assert_run_invariants(&out, 9);
    assert!(out.rounds.len() <= 21);
}

// ── Boundaries ──────────────────────────────────────────────────

#[test]
fn no_empty_cells_means_no_moves() {
    let out = run_schelling(&config(8, 0.0, 0.9, 3, 10, 5)).unwrap();
    assert_run_invariants(&out, 64);
    assert!(out.rounds.number_moves.iter().all(|&m| m == 0));
    // Nothing moves, so nothing changes: the limit is what stops the run.
    assert_eq!(out.rounds.len(), 11);
}

#[test]
fn zero_threshold_happy_iff_occupied_neighbour() {
    let out = run_schelling(&config(10, 0.4, 0.0, 3, 30, 11)).unwrap();
    assert_run_invariants(&out, 100);
    for row in out.detailed.rows().filter(|r| r.group != Group::NONE) {
        assert_eq!(row.happy, row.n_same + row.n_different > 0, "{row:?}");
    }
}

#[test]
fn threshold_above_one_runs_to_limit_without_crashing() {
    let grid = Grid::with_params(GridParams {
        rows: 6,
        cols: 6,
        percent_empty: 0.25,
        threshold: 1.01,
        number_of_groups: 2,
        seed: 3,
    })
    .unwrap();
    let total = grid.total_agents();
    let out = Simulation::new(grid, 12).simulate();
    assert_run_invariants(&out, 36);
    assert_eq!(out.rounds.len(), 13);
    assert!(out.rounds.happy_agents.iter().all(|&h| h == 0));
    assert!(out.rounds.unhappy_agents.iter().all(|&u| u == total));
}

#[test]
fn single_group_single_cell() {
    let out = run_schelling(&config(1, 0.0, 0.5, 1, 5, 0)).unwrap();
    // A lone agent has no occupied neighbours and is unhappy, but there is
    // nowhere to move.
    assert_eq!(out.rounds.unhappy_agents[0], 1);
    assert_eq!(out.rounds.len(), 6);
    assert!(out.rounds.number_moves.iter().all(|&m| m == 0));
}

// ── Terminal state ──────────────────────────────────────────────

#[test]
fn update_after_all_happy_is_idempotent() {
    let mut grid = Grid::new(&config(10, 0.1, 0.0, 1, 0, 21)).unwrap();
    let mut guard = 0;
    while grid.happy_agents() != grid.total_agents() {
        grid.update();
        guard += 1;
        assert!(guard < 500, "did not converge");
    }

    let mut before = DetailedResults::new();
    grid.record_detailed(&mut before);
    grid.update();
    let mut after = DetailedResults::new();
    grid.record_detailed(&mut after);

    assert_eq!(grid.moves(), 0);
    assert_eq!(before.id, after.id);
    assert_eq!(before.group, after.group);
    assert_eq!(before.n_same, after.n_same);
    assert_eq!(before.n_different, after.n_different);
    assert_eq!(before.happy, after.happy);
    assert_eq!(before.x, after.x);
    assert_eq!(before.y, after.y);
}

#[test]
fn simulation_stops_once_all_happy() {
    let out = run_schelling(&config(10, 0.1, 0.0, 1, 200, 21)).unwrap();
    let last = out.rounds.last().unwrap();
    assert_eq!(last.unhappy_agents, 0);
    // Only the final row has everyone happy.
    let all_happy_rows = out.rounds.unhappy_agents.iter().filter(|&&u| u == 0).count();
    assert_eq!(all_happy_rows, 1);
}

// ── Configuration ───────────────────────────────────────────────

#[test]
fn config_from_json_runs() {
    let json = r#"{
        "grid_size": 5,
        "percent_empty": 0.2,
        "threshold": 0.4,
        "number_of_groups": 3,
        "max_rounds": 10,
        "seed": 99
    }"#;
    let cfg: SimulationConfig = serde_json::from_str(json).unwrap();
    let out = run_schelling(&cfg).unwrap();
    assert_run_invariants(&out, 25);
}

#[test]
fn invalid_configs_are_rejected_before_running() {
    assert_eq!(
        run_schelling(&config(0, 0.1, 0.5, 2, 1, 0)).unwrap_err(),
        ConfigError::InvalidGridSize
    );
    assert_eq!(
        run_schelling(&config(5, 1.0, 0.5, 2, 1, 0)).unwrap_err(),
        ConfigError::InvalidPercentEmpty { value: 1.0 }
    );
    assert_eq!(
        run_schelling(&config(5, 0.1, 0.5, 0, 1, 0)).unwrap_err(),
        ConfigError::NoGroups
    );
}
