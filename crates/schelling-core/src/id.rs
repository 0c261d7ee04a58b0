//! Strongly-typed identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an agent for the lifetime of a simulation.
///
/// Assigned sequentially from 0 in row-major placement order when the
/// grid is initialised. Agents are never created or destroyed afterwards,
/// so an `AgentId` is stable across every round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AgentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Group affiliation of an agent.
///
/// Real groups are numbered from 1. The value 0 is reserved for "no agent"
/// and only appears in tabular output for empty cells; use
/// [`Occupant::Empty`](crate::Occupant::Empty) in the model itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Group(pub u32);

impl Group {
    /// Tag written to result tables for cells without an agent.
    pub const NONE: Group = Group(0);
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Group {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing round counter.
///
/// Round 0 is the initial placement; each update advances it by one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoundId(pub u32);

impl RoundId {
    /// The next round.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RoundId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
