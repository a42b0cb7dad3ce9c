//! Deserialization types for the persisted canvas format, plus their
//! conversion into the canonical [`WorkflowGraph`](crate::workflow::WorkflowGraph).
//!
//! The canvas saves a workflow as a JSON object with top-level `nodes`
//! (`{id, type, position, data}`) and `edges` (`{id, source, target, type}`)
//! arrays; unknown or missing arrays default to empty. These structs are only
//! one possible front door; any format can feed the compiler by implementing
//! [`IntoWorkflow`](crate::workflow::IntoWorkflow) itself.

pub mod types;

pub use types::*;

use crate::error::WorkflowConversionError;
use crate::workflow::{
    AgentAttrs, FunctionToolAttrs, IntoWorkflow, NodeAttrs, Parameter, RunnerAttrs, WorkflowEdge,
    WorkflowGraph, WorkflowNode,
};

impl IntoWorkflow for UiWorkflow {
    fn into_workflow(self) -> Result<WorkflowGraph, WorkflowConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(convert_node)
            .collect::<Result<Vec<_>, _>>()?;

        let edges = self
            .edges
            .into_iter()
            .map(|raw| WorkflowEdge {
                id: raw.id,
                source: raw.source,
                target: raw.target,
            })
            .collect();

        Ok(WorkflowGraph { nodes, edges })
    }
}

fn convert_node(raw: UiNode) -> Result<WorkflowNode, WorkflowConversionError> {
    let attrs = match raw.kind.as_str() {
        "agent" => NodeAttrs::Agent(decode_data::<UiAgentData>(&raw)?.into()),
        "runner" => NodeAttrs::Runner(decode_data::<UiRunnerData>(&raw)?.into()),
        "functionTool" => NodeAttrs::FunctionTool(decode_data::<UiFunctionToolData>(&raw)?.into()),
        other => {
            return Err(WorkflowConversionError::UnknownNodeKind {
                node_id: raw.id,
                kind: other.to_string(),
            });
        }
    };

    Ok(WorkflowNode { id: raw.id, attrs })
}

fn decode_data<T: serde::de::DeserializeOwned>(
    raw: &UiNode,
) -> Result<T, WorkflowConversionError> {
    serde_json::from_value(raw.data.clone()).map_err(|e| {
        WorkflowConversionError::InvalidNodeData {
            node_id: raw.id.clone(),
            field: raw.kind.clone(),
            message: e.to_string(),
        }
    })
}

impl From<UiAgentData> for AgentAttrs {
    fn from(data: UiAgentData) -> Self {
        AgentAttrs {
            name: data.name,
            description: data.description,
            system_message: data.system_message,
            output_type: data.output_type,
            structured_schema: data.structured_schema,
        }
    }
}

impl From<UiRunnerData> for RunnerAttrs {
    fn from(data: UiRunnerData) -> Self {
        RunnerAttrs {
            name: data.name,
            input: data.input,
            context: data.context,
            execution_mode: data.execution_mode,
        }
    }
}

impl From<UiFunctionToolData> for FunctionToolAttrs {
    fn from(data: UiFunctionToolData) -> Self {
        FunctionToolAttrs {
            name: data.name,
            parameters: data.parameters.into_iter().map(Parameter::from).collect(),
            return_type: data.return_type,
            implementation: data.implementation,
        }
    }
}

impl From<UiParameter> for Parameter {
    fn from(p: UiParameter) -> Self {
        Parameter {
            name: p.name,
            ty: p.ty,
            description: p.description,
            required: p.required,
        }
    }
}
