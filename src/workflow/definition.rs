use serde::{Deserialize, Serialize};

/// The three participant kinds of a workflow graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Agent,
    Runner,
    FunctionTool,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Agent => write!(f, "agent"),
            NodeKind::Runner => write!(f, "runner"),
            NodeKind::FunctionTool => write!(f, "functionTool"),
        }
    }
}

/// The response shape an Agent is configured to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    #[default]
    Text,
    Json,
    Structured,
}

/// Whether a Runner drives its task synchronously or asynchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Sync,
    Async,
}

/// Configuration of an Agent node.
#[derive(Debug, Clone, Default)]
pub struct AgentAttrs {
    pub name: String,
    pub description: String,
    pub system_message: String,
    pub output_type: OutputType,
    /// Schema payload spliced into the generated script. Only meaningful when
    /// `output_type` is `Structured`.
    pub structured_schema: Option<String>,
}

/// Configuration of a Runner node.
#[derive(Debug, Clone, Default)]
pub struct RunnerAttrs {
    pub name: Option<String>,
    pub input: String,
    pub context: String,
    pub execution_mode: ExecutionMode,
}

/// A single parameter of a FunctionTool signature.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: String,
    /// Free-form type annotation string (the canvas offers str/int/float/bool/
    /// list/dict, but the compiler accepts anything).
    pub ty: String,
    pub description: Option<String>,
    pub required: bool,
}

/// Configuration of a FunctionTool node.
#[derive(Debug, Clone, Default)]
pub struct FunctionToolAttrs {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: String,
    pub implementation: String,
}

/// Kind-specific attributes of a node. The kind is carried by the variant, so
/// a node can never claim one kind while holding another kind's attributes.
#[derive(Debug, Clone)]
pub enum NodeAttrs {
    Agent(AgentAttrs),
    Runner(RunnerAttrs),
    FunctionTool(FunctionToolAttrs),
}

/// A single node in the workflow graph.
#[derive(Debug, Clone)]
pub struct WorkflowNode {
    pub id: String,
    pub attrs: NodeAttrs,
}

impl WorkflowNode {
    pub fn kind(&self) -> NodeKind {
        match &self.attrs {
            NodeAttrs::Agent(_) => NodeKind::Agent,
            NodeAttrs::Runner(_) => NodeKind::Runner,
            NodeAttrs::FunctionTool(_) => NodeKind::FunctionTool,
        }
    }

    pub fn as_agent(&self) -> Option<&AgentAttrs> {
        match &self.attrs {
            NodeAttrs::Agent(attrs) => Some(attrs),
            _ => None,
        }
    }

    pub fn as_runner(&self) -> Option<&RunnerAttrs> {
        match &self.attrs {
            NodeAttrs::Runner(attrs) => Some(attrs),
            _ => None,
        }
    }

    pub fn as_function_tool(&self) -> Option<&FunctionToolAttrs> {
        match &self.attrs {
            NodeAttrs::FunctionTool(attrs) => Some(attrs),
            _ => None,
        }
    }
}

/// A directed connection between two nodes. The edge's role is never stored;
/// it is computed from the endpoint kinds (see `WorkflowGraph::edge_role`),
/// so a stale stored role cannot contradict the graph.
#[derive(Debug, Clone)]
pub struct WorkflowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// The complete, canonical snapshot of a workflow, ready for compilation.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default)]
pub struct WorkflowGraph {
    pub nodes: Vec<WorkflowNode>,
    pub edges: Vec<WorkflowEdge>,
}

impl WorkflowGraph {
    pub fn node(&self, id: &str) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Agent nodes in graph iteration order.
    pub fn agents(&self) -> impl Iterator<Item = (&WorkflowNode, &AgentAttrs)> {
        self.nodes.iter().filter_map(|n| Some((n, n.as_agent()?)))
    }

    /// Runner nodes in graph iteration order.
    pub fn runners(&self) -> impl Iterator<Item = (&WorkflowNode, &RunnerAttrs)> {
        self.nodes.iter().filter_map(|n| Some((n, n.as_runner()?)))
    }

    /// FunctionTool nodes in graph iteration order.
    pub fn function_tools(&self) -> impl Iterator<Item = (&WorkflowNode, &FunctionToolAttrs)> {
        self.nodes
            .iter()
            .filter_map(|n| Some((n, n.as_function_tool()?)))
    }
}
