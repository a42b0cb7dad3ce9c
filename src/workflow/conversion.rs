use super::definition::WorkflowGraph;
use crate::error::WorkflowConversionError;

/// A trait for custom data models that can be converted into a Kumiki
/// `WorkflowGraph`.
///
/// This is the primary extension point for making Kumiki format-agnostic. The
/// canvas JSON format shipped in [`crate::ui`] implements it; by implementing
/// this trait on your own configuration structs, you provide a translation
/// layer that lets the compiler process any workflow representation.
///
/// # Example
///
/// ```rust,no_run
/// use kumiki::workflow::{AgentAttrs, IntoWorkflow, NodeAttrs, WorkflowGraph, WorkflowNode};
/// use kumiki::error::WorkflowConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyCustomAgent { id: String, name: String }
/// struct MyCustomWorkflow { agents: Vec<MyCustomAgent> }
///
/// // 2. Implement `IntoWorkflow` for your top-level struct.
/// impl IntoWorkflow for MyCustomWorkflow {
///     fn into_workflow(self) -> Result<WorkflowGraph, WorkflowConversionError> {
///         let nodes = self
///             .agents
///             .into_iter()
///             .map(|agent| WorkflowNode {
///                 id: agent.id,
///                 attrs: NodeAttrs::Agent(AgentAttrs {
///                     name: agent.name,
///                     ..AgentAttrs::default()
///                 }),
///             })
///             .collect();
///
///         Ok(WorkflowGraph {
///             nodes,
///             edges: vec![], // Convert your connections here as well
///         })
///     }
/// }
/// ```
pub trait IntoWorkflow {
    /// Consumes the object and converts it into a compilable workflow graph.
    fn into_workflow(self) -> Result<WorkflowGraph, WorkflowConversionError>;
}
