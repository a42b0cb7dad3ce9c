use super::definition::{NodeKind, WorkflowEdge, WorkflowGraph};
use serde::{Deserialize, Serialize};

/// The role a directed edge plays, fully determined by its endpoint kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeRole {
    /// Agent → Agent: conversational handoff.
    Handoff,
    /// FunctionTool → Agent: the tool is made available to the agent.
    Tool,
    /// Agent → Runner: the runner executes a task against the agent.
    Execute,
}

impl EdgeRole {
    /// The connectivity table. `None` means the connection is illegal;
    /// self-loops and reversed directions all fall through to `None`.
    pub fn derive(source: NodeKind, target: NodeKind) -> Option<EdgeRole> {
        match (source, target) {
            (NodeKind::Agent, NodeKind::Agent) => Some(EdgeRole::Handoff),
            (NodeKind::FunctionTool, NodeKind::Agent) => Some(EdgeRole::Tool),
            (NodeKind::Agent, NodeKind::Runner) => Some(EdgeRole::Execute),
            _ => None,
        }
    }

    /// Whether a directed edge between the two kinds is legal at all.
    pub fn is_legal(source: NodeKind, target: NodeKind) -> bool {
        Self::derive(source, target).is_some()
    }
}

impl WorkflowGraph {
    /// Resolves an edge's role from the kinds of its endpoints. Returns `None`
    /// when either endpoint is missing from the graph or the pairing is not in
    /// the connectivity table; such edges are the validator's concern, not a
    /// structural impossibility.
    pub fn edge_role(&self, edge: &WorkflowEdge) -> Option<EdgeRole> {
        let source = self.node(&edge.source)?.kind();
        let target = self.node(&edge.target)?.kind();
        EdgeRole::derive(source, target)
    }
}
