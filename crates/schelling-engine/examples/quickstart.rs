//! Schelling quickstart: a complete run from configuration to tables.
//!
//! Demonstrates:
//!   1. Building and validating a SimulationConfig
//!   2. Stepping a Simulation round by round
//!   3. Reading the round table and rendering the final grid
//!
//! Run with:
//!   RUST_LOG=schelling_engine=debug cargo run --example quickstart

use schelling_engine::{GridState, Simulation, SimulationConfig};

// ─── Parameters ─────────────────────────────────────────────────

const GRID_SIZE: u32 = 20;
const PERCENT_EMPTY: f64 = 0.2;
const THRESHOLD: f64 = 0.5;
const GROUPS: u32 = 2;
const MAX_ROUNDS: u32 = 50;
const SEED: u64 = 42;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = SimulationConfig {
        grid_size: GRID_SIZE,
        percent_empty: PERCENT_EMPTY,
        threshold: THRESHOLD,
        number_of_groups: GROUPS,
        max_rounds: MAX_ROUNDS,
        seed: SEED,
    };
    let mut sim = Simulation::from_config(&config)?;

    println!("Initial placement:\n{}", sim.grid());

    while sim.state() == GridState::Running {
        let record = sim.step()?;
        println!(
            "Round: {:5}, nHappy: {:5}, nUnhappy {:5}, percHappy {:.2}%",
            record.round.0,
            record.happy_agents,
            record.unhappy_agents,
            record.percent_happy()
        );
    }

    println!("\nFinal placement ({:?}):\n{}", sim.state(), sim.grid());

    let output = sim.into_output();
    println!(
        "{} round rows, {} detailed rows",
        output.rounds.len(),
        output.detailed.len()
    );
    Ok(())
}
