//! # Kumiki - Workflow Graph-to-Source Compiler
//!
//! **Kumiki** is a deterministic compiler that turns a visual multi-agent
//! workflow, a graph of typed building blocks (Agent, Runner, FunctionTool)
//! and typed connections, into an executable Python script targeting the
//! autogen runtime, together with advisory validation diagnostics and the
//! package list the script needs.
//!
//! ## Core Workflow
//!
//! The compiler is format-agnostic. It operates on a canonical internal model
//! of a workflow graph. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your workflow format (the persisted canvas
//!     JSON is supported out of the box via the `ui` module) into Rust structs.
//! 2.  **Convert to Kumiki's Model**: Implement the `IntoWorkflow` trait for
//!     your structs to provide a translation layer into Kumiki's
//!     `WorkflowGraph`.
//! 3.  **Compile**: Use `Compiler::builder` to create a compiler instance and
//!     call `compile()` for a `CodeGenerationResult` holding the generated
//!     script, diagnostics, and dependency list.
//!
//! Compilation is total: structural problems (no Agent, disconnected Runner,
//! duplicate names) come back as ordered diagnostic strings alongside
//! best-effort code, never as errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use kumiki::prelude::*;
//!
//! let graph = WorkflowGraph {
//!     nodes: vec![
//!         WorkflowNode {
//!             id: "agent-1".to_string(),
//!             attrs: NodeAttrs::Agent(AgentAttrs {
//!                 name: "Helper".to_string(),
//!                 system_message: "You are a helpful assistant.".to_string(),
//!                 ..AgentAttrs::default()
//!             }),
//!         },
//!         WorkflowNode {
//!             id: "runner-1".to_string(),
//!             attrs: NodeAttrs::Runner(RunnerAttrs {
//!                 input: "Summarize the report".to_string(),
//!                 ..RunnerAttrs::default()
//!             }),
//!         },
//!     ],
//!     edges: vec![WorkflowEdge {
//!         id: "agent-1-runner-1".to_string(),
//!         source: "agent-1".to_string(),
//!         target: "runner-1".to_string(),
//!     }],
//! };
//!
//! let result = Compiler::new(graph).compile();
//! assert!(result.is_clean());
//! assert!(result.code.contains("helper = AssistantAgent("));
//! ```

pub mod compiler;
pub mod error;
pub mod prelude;
pub mod ui;
pub mod workflow;
