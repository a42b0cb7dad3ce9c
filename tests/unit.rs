//! Unit tests for the graph model, connectivity rules, sanitizer, and
//! connection index.
mod common;
use common::*;
use kumiki::compiler::ConnectionIndex;
use kumiki::error::WorkflowConversionError;
use kumiki::prelude::*;

#[test]
fn test_edge_role_table() {
    assert_eq!(
        EdgeRole::derive(NodeKind::Agent, NodeKind::Agent),
        Some(EdgeRole::Handoff)
    );
    assert_eq!(
        EdgeRole::derive(NodeKind::FunctionTool, NodeKind::Agent),
        Some(EdgeRole::Tool)
    );
    assert_eq!(
        EdgeRole::derive(NodeKind::Agent, NodeKind::Runner),
        Some(EdgeRole::Execute)
    );
}

#[test]
fn test_edge_role_rejects_reversed_and_self_pairs() {
    assert_eq!(EdgeRole::derive(NodeKind::Runner, NodeKind::Agent), None);
    assert_eq!(
        EdgeRole::derive(NodeKind::Agent, NodeKind::FunctionTool),
        None
    );
    assert_eq!(EdgeRole::derive(NodeKind::Runner, NodeKind::Runner), None);
    assert_eq!(
        EdgeRole::derive(NodeKind::FunctionTool, NodeKind::FunctionTool),
        None
    );
    assert!(!EdgeRole::is_legal(NodeKind::Runner, NodeKind::FunctionTool));
}

#[test]
fn test_graph_edge_role_resolution() {
    let graph = simple_workflow();
    assert_eq!(graph.edge_role(&graph.edges[0]), Some(EdgeRole::Execute));

    // An edge pointing at a missing node resolves to no role instead of
    // failing; flagging it is the validator's job.
    let dangling = edge("agent-1", "ghost");
    assert_eq!(graph.edge_role(&dangling), None);
}

#[test]
fn test_sanitize_distinct_names_collide() {
    assert_eq!(sanitize_identifier("My Agent"), "my_agent");
    assert_eq!(sanitize_identifier("my-agent"), "my_agent");
}

#[test]
fn test_sanitize_is_idempotent() {
    let once = sanitize_identifier("Data Cleaner v2!");
    assert_eq!(sanitize_identifier(&once), once);
}

#[test]
fn test_sanitize_degenerate_inputs() {
    assert_eq!(sanitize_identifier(""), "");
    assert_eq!(sanitize_identifier("!!!"), "___");
    assert_eq!(sanitize_identifier("Agent 007"), "agent_007");
}

#[test]
fn test_connection_index_preserves_edge_order() {
    let edges = vec![edge("b", "t"), edge("a", "t"), edge("c", "other")];
    let index = ConnectionIndex::build(&edges);

    // Traversal order per target, never sorted.
    assert_eq!(index.sources_of("t"), ["b".to_string(), "a".to_string()]);
    assert_eq!(index.sources_of("other"), ["c".to_string()]);
    assert!(index.sources_of("unknown").is_empty());
}

#[test]
fn test_node_kind_accessors() {
    let node = agent("a", "Helper");
    assert_eq!(node.kind(), NodeKind::Agent);
    assert!(node.as_agent().is_some());
    assert!(node.as_runner().is_none());
    assert!(node.as_function_tool().is_none());
}

#[test]
fn test_conversion_error_display() {
    let err = WorkflowConversionError::UnknownNodeKind {
        node_id: "node-9".to_string(),
        kind: "widget".to_string(),
    };
    assert!(err.to_string().contains("node-9"));
    assert!(err.to_string().contains("widget"));

    let parse_err = WorkflowConversionError::JsonParseError("unexpected eof".to_string());
    assert!(parse_err.to_string().contains("unexpected eof"));
}
