//! What a grid cell holds: nothing, or exactly one agent.

use crate::id::{AgentId, Group};

/// An agent with a fixed group affiliation.
///
/// Agents are immutable once created. Relocation moves the value between
/// cells; it is never re-created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Agent {
    /// Stable identity.
    pub id: AgentId,
    /// Group used for similarity comparison.
    pub group: Group,
}

impl Agent {
    /// Create an agent.
    pub fn new(id: AgentId, group: Group) -> Self {
        Self { id, group }
    }
}

/// The occupant of a single grid cell.
///
/// Every cell holds exactly one `Occupant` at all times. `Empty` stands in
/// for the shared "no agent" sentinel: it reports id 0 and group 0 in
/// tabular output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Occupant {
    /// No agent; the cell is free.
    #[default]
    Empty,
    /// A real agent.
    Agent(Agent),
}

impl Occupant {
    /// `true` if no agent occupies the cell.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The agent, if any.
    pub fn agent(&self) -> Option<&Agent> {
        match self {
            Self::Empty => None,
            Self::Agent(a) => Some(a),
        }
    }

    /// Group tag, [`Group::NONE`] when empty.
    pub fn group(&self) -> Group {
        self.agent().map_or(Group::NONE, |a| a.group)
    }

    /// Agent id, `AgentId(0)` when empty.
    pub fn id(&self) -> AgentId {
        self.agent().map_or(AgentId(0), |a| a.id)
    }
}

impl From<Agent> for Occupant {
    fn from(agent: Agent) -> Self {
        Self::Agent(agent)
    }
}
