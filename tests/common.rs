//! Common test utilities for building workflow graphs.
use kumiki::prelude::*;

/// Creates an Agent node with the given display name.
#[allow(dead_code)]
pub fn agent(id: &str, name: &str) -> WorkflowNode {
    WorkflowNode {
        id: id.to_string(),
        attrs: NodeAttrs::Agent(AgentAttrs {
            name: name.to_string(),
            ..AgentAttrs::default()
        }),
    }
}

/// Creates a Runner node with the given task text and execution mode.
#[allow(dead_code)]
pub fn runner(id: &str, input: &str, mode: ExecutionMode) -> WorkflowNode {
    WorkflowNode {
        id: id.to_string(),
        attrs: NodeAttrs::Runner(RunnerAttrs {
            input: input.to_string(),
            execution_mode: mode,
            ..RunnerAttrs::default()
        }),
    }
}

/// Creates a FunctionTool node from `(name, type)` parameter pairs.
#[allow(dead_code)]
pub fn function_tool(
    id: &str,
    name: &str,
    params: &[(&str, &str)],
    return_type: &str,
    implementation: &str,
) -> WorkflowNode {
    WorkflowNode {
        id: id.to_string(),
        attrs: NodeAttrs::FunctionTool(FunctionToolAttrs {
            name: name.to_string(),
            parameters: params
                .iter()
                .map(|(name, ty)| Parameter {
                    name: name.to_string(),
                    ty: ty.to_string(),
                    description: None,
                    required: true,
                })
                .collect(),
            return_type: return_type.to_string(),
            implementation: implementation.to_string(),
        }),
    }
}

#[allow(dead_code)]
pub fn edge(source: &str, target: &str) -> WorkflowEdge {
    WorkflowEdge {
        id: format!("{source}-{target}"),
        source: source.to_string(),
        target: target.to_string(),
    }
}

/// One Agent ("Helper") wired to one sync Runner ("Hello World!"), the
/// smallest workflow that validates cleanly.
#[allow(dead_code)]
pub fn simple_workflow() -> WorkflowGraph {
    WorkflowGraph {
        nodes: vec![
            agent("agent-1", "Helper"),
            runner("runner-1", "Hello World!", ExecutionMode::Sync),
        ],
        edges: vec![edge("agent-1", "runner-1")],
    }
}
