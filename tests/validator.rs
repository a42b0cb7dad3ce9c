//! Tests for the structural diagnostics produced by `validate`.
mod common;
use common::*;
use kumiki::prelude::*;

#[test]
fn test_empty_graph_short_circuits() {
    let diagnostics = validate(&WorkflowGraph::default());
    assert_eq!(diagnostics, vec!["no nodes in workflow".to_string()]);
}

#[test]
fn test_missing_agent_and_runner_reported_in_order() {
    let graph = WorkflowGraph {
        nodes: vec![function_tool("tool-1", "lookup", &[], "str", "")],
        edges: vec![],
    };
    let diagnostics = validate(&graph);
    assert_eq!(diagnostics[0], "workflow requires at least one Agent node");
    assert_eq!(
        diagnostics[1],
        "workflow requires at least one Runner node to execute a task"
    );
}

#[test]
fn test_clean_workflow_has_no_diagnostics() {
    assert!(validate(&simple_workflow()).is_empty());
}

#[test]
fn test_disconnected_runner_labeled_by_input() {
    let graph = WorkflowGraph {
        nodes: vec![
            agent("agent-1", "Helper"),
            runner("runner-1", "Summarize", ExecutionMode::Sync),
        ],
        edges: vec![],
    };
    let diagnostics = validate(&graph);
    assert_eq!(
        diagnostics,
        vec!["Runner node 'Summarize' is not connected to any Agent".to_string()]
    );
}

#[test]
fn test_disconnected_runner_falls_back_to_id_label() {
    let graph = WorkflowGraph {
        nodes: vec![
            agent("agent-1", "Helper"),
            runner("runner-1", "", ExecutionMode::Sync),
        ],
        edges: vec![],
    };
    let diagnostics = validate(&graph);
    assert_eq!(
        diagnostics,
        vec!["Runner node 'runner-1' is not connected to any Agent".to_string()]
    );
}

#[test]
fn test_runner_fed_by_tool_still_counts_as_disconnected() {
    // Only an incoming edge whose source is an Agent satisfies the check.
    let graph = WorkflowGraph {
        nodes: vec![
            agent("agent-1", "Helper"),
            function_tool("tool-1", "lookup", &[], "str", ""),
            runner("runner-1", "Go", ExecutionMode::Sync),
        ],
        edges: vec![edge("tool-1", "runner-1")],
    };
    let diagnostics = validate(&graph);
    assert_eq!(
        diagnostics,
        vec!["Runner node 'Go' is not connected to any Agent".to_string()]
    );
}

#[test]
fn test_no_runner_and_partial_linking() {
    // Two agents, no runner: only the missing-Runner diagnostic.
    let graph = WorkflowGraph {
        nodes: vec![agent("a", "A"), agent("b", "B")],
        edges: vec![],
    };
    let diagnostics = validate(&graph);
    assert_eq!(
        diagnostics,
        vec!["workflow requires at least one Runner node to execute a task".to_string()]
    );

    // Adding a runner linked only to "A" is fine; "B" being unlinked to the
    // runner is not an error; only full disconnection is checked.
    let graph = WorkflowGraph {
        nodes: vec![
            agent("a", "A"),
            agent("b", "B"),
            runner("runner-1", "Go", ExecutionMode::Sync),
        ],
        edges: vec![edge("a", "runner-1")],
    };
    assert!(validate(&graph).is_empty());
}

#[test]
fn test_duplicate_agent_name_reported_once() {
    let graph = WorkflowGraph {
        nodes: vec![
            agent("a", "Helper"),
            agent("b", "Helper"),
            agent("c", "Helper"),
            runner("runner-1", "Go", ExecutionMode::Sync),
        ],
        edges: vec![edge("a", "runner-1")],
    };
    let diagnostics = validate(&graph);
    assert_eq!(diagnostics, vec!["duplicate Agent name: Helper".to_string()]);
}

#[test]
fn test_duplicate_names_compared_exactly() {
    // Case differences are distinct names; empty names are never duplicates.
    let graph = WorkflowGraph {
        nodes: vec![
            agent("a", "Helper"),
            agent("b", "helper"),
            agent("c", ""),
            agent("d", ""),
            runner("runner-1", "Go", ExecutionMode::Sync),
        ],
        edges: vec![edge("a", "runner-1")],
    };
    assert!(validate(&graph).is_empty());
}

#[test]
fn test_two_duplicated_names_get_two_diagnostics() {
    let graph = WorkflowGraph {
        nodes: vec![
            agent("a", "Alpha"),
            agent("b", "Alpha"),
            agent("c", "Beta"),
            agent("d", "Beta"),
            runner("runner-1", "Go", ExecutionMode::Sync),
        ],
        edges: vec![edge("a", "runner-1")],
    };
    let diagnostics = validate(&graph);
    assert_eq!(
        diagnostics,
        vec![
            "duplicate Agent name: Alpha".to_string(),
            "duplicate Agent name: Beta".to_string(),
        ]
    );
}
