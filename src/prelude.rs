//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and traits from the kumiki crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use kumiki::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let workflow_json = std::fs::read_to_string("path/to/workflow.json")?;
//!
//! let result = Compiler::from_json(&workflow_json)?.compile();
//! for diagnostic in &result.errors {
//!     eprintln!("warning: {diagnostic}");
//! }
//! println!("{}", result.code);
//! # Ok(())
//! # }
//! ```

// Core compilation
pub use crate::compiler::{Compiler, CompilerBuilder, sanitize_identifier, validate};

// Graph model
pub use crate::workflow::{
    AgentAttrs, CodeGenerationResult, EdgeRole, ExecutionMode, FunctionToolAttrs, IntoWorkflow,
    NodeAttrs, NodeKind, OutputType, Parameter, RunnerAttrs, WorkflowEdge, WorkflowGraph,
    WorkflowNode,
};

// Persisted canvas format
pub use crate::ui::UiWorkflow;

// Error types
pub use crate::error::WorkflowConversionError;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
