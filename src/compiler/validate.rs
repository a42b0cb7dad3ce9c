use super::connections::ConnectionIndex;
use crate::workflow::{NodeKind, WorkflowGraph};
use itertools::Itertools;

/// Inspects a full graph and returns human-readable diagnostics, in check
/// order. Never fails and never mutates; an empty result means the workflow
/// satisfies every structural precondition. Diagnostics are advisory: the
/// compiler proceeds regardless and the caller decides whether to surface
/// them as warnings or abort.
pub fn validate(graph: &WorkflowGraph) -> Vec<String> {
    let mut diagnostics = Vec::new();

    if graph.nodes.is_empty() {
        diagnostics.push("no nodes in workflow".to_string());
        return diagnostics;
    }

    if graph.agents().next().is_none() {
        diagnostics.push("workflow requires at least one Agent node".to_string());
    }

    if graph.runners().next().is_none() {
        diagnostics.push("workflow requires at least one Runner node to execute a task".to_string());
    }

    let connections = ConnectionIndex::build(&graph.edges);
    for (node, runner) in graph.runners() {
        let fed_by_agent = connections.sources_of(&node.id).iter().any(|source| {
            graph
                .node(source)
                .is_some_and(|source| source.kind() == NodeKind::Agent)
        });
        if !fed_by_agent {
            let label = if runner.input.is_empty() {
                node.id.as_str()
            } else {
                runner.input.as_str()
            };
            diagnostics.push(format!("Runner node '{label}' is not connected to any Agent"));
        }
    }

    // Names are compared by exact string equality; each duplicated name is
    // reported once no matter how often it repeats.
    for name in graph
        .agents()
        .map(|(_, agent)| agent.name.as_str())
        .filter(|name| !name.is_empty())
        .duplicates()
    {
        diagnostics.push(format!("duplicate Agent name: {name}"));
    }

    diagnostics
}
