use crate::workflow::{ExecutionMode, OutputType};
use serde::Deserialize;

/// Canvas position. Carried by the persisted format but irrelevant to
/// compilation.
#[derive(Debug, Deserialize, Clone, Copy, Default)]
pub struct UiPosition {
    pub x: f64,
    pub y: f64,
}

/// A node as the canvas persists it: kind tag plus an untyped data payload
/// that is decoded per kind during conversion.
#[derive(Debug, Deserialize)]
pub struct UiNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub position: UiPosition,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// An edge as the canvas persists it. The stored `type` is the editor's
/// cached edge role; conversion discards it and the role is re-derived from
/// the endpoint kinds.
#[derive(Debug, Deserialize)]
pub struct UiEdge {
    #[serde(default)]
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, rename = "type")]
    pub role: Option<String>,
}

/// Complete persisted workflow structure. Missing arrays default to empty.
#[derive(Debug, Deserialize, Default)]
pub struct UiWorkflow {
    #[serde(default)]
    pub nodes: Vec<UiNode>,
    #[serde(default)]
    pub edges: Vec<UiEdge>,
}

/// Agent node payload.
#[derive(Debug, Deserialize, Default)]
pub struct UiAgentData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub system_message: String,
    #[serde(default)]
    pub output_type: OutputType,
    #[serde(default)]
    #[serde(alias = "pydantic_model")]
    pub structured_schema: Option<String>,
}

/// Runner node payload.
#[derive(Debug, Deserialize, Default)]
pub struct UiRunnerData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub execution_mode: ExecutionMode,
}

/// FunctionTool node payload.
#[derive(Debug, Deserialize, Default)]
pub struct UiFunctionToolData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<UiParameter>,
    #[serde(default)]
    #[serde(alias = "returnType")]
    pub return_type: String,
    #[serde(default)]
    pub implementation: String,
}

/// One parameter of a FunctionTool payload.
#[derive(Debug, Deserialize)]
pub struct UiParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
}
