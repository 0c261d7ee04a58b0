//! Core types for Schelling segregation simulations.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the workspace:
//! identifiers, the cell occupant model, the seeded random source,
//! and sampling errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod occupant;
pub mod rng;

pub use error::SampleError;
pub use id::{AgentId, Group, RoundId};
pub use occupant::{Agent, Occupant};
pub use rng::SimRng;
