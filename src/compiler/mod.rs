//! The graph-to-source compiler: a pure, stateless transformation from a
//! [`WorkflowGraph`] snapshot into a [`CodeGenerationResult`].
//!
//! Each compile validates the graph, runs the section emitters over the node
//! snapshot, and assembles the non-empty fragments in a fixed order. Nothing
//! is retained between invocations and the graph is never mutated, so
//! compiles are re-entrant and can run concurrently on different graphs.

use crate::error::WorkflowConversionError;
use crate::ui::UiWorkflow;
use crate::workflow::{CodeGenerationResult, IntoWorkflow, WorkflowGraph};
use itertools::Itertools;

pub mod connections;
pub mod sanitize;
pub mod validate;

mod entry;
mod sections;

pub use connections::ConnectionIndex;
pub use sanitize::sanitize_identifier;
pub use validate::validate;

/// Model identifier baked into the generated client factory.
pub const DEFAULT_MODEL: &str = "gpt-4o";
/// Sentinel token the generated team terminates on.
pub const DEFAULT_TERMINATION_TOKEN: &str = "TERMINATE";
/// Task text used when the driving Runner's input is empty.
pub const DEFAULT_TASK: &str = "Hello World!";

/// Package names the generated script depends on, independent of graph shape.
const BASE_DEPENDENCIES: [&str; 2] = ["autogen-agentchat", "autogen-ext"];

#[derive(Debug, Clone)]
pub(crate) struct CompileOptions {
    pub(crate) model: String,
    pub(crate) termination_token: String,
    pub(crate) default_task: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            termination_token: DEFAULT_TERMINATION_TOKEN.to_string(),
            default_task: DEFAULT_TASK.to_string(),
        }
    }
}

/// Compiles one workflow snapshot into Python source text.
pub struct Compiler {
    graph: WorkflowGraph,
    options: CompileOptions,
}

/// Configures a [`Compiler`] before its one-shot `compile` call.
pub struct CompilerBuilder {
    graph: WorkflowGraph,
    options: CompileOptions,
}

impl CompilerBuilder {
    pub fn new(graph: WorkflowGraph) -> Self {
        Self {
            graph,
            options: CompileOptions::default(),
        }
    }

    /// Overrides the model identifier emitted in the client factory.
    pub fn with_model(mut self, model: &str) -> Self {
        self.options.model = model.to_string();
        self
    }

    /// Overrides the sentinel token the generated team terminates on.
    pub fn with_termination_token(mut self, token: &str) -> Self {
        self.options.termination_token = token.to_string();
        self
    }

    /// Overrides the fallback task text used when a Runner's input is empty.
    pub fn with_default_task(mut self, task: &str) -> Self {
        self.options.default_task = task.to_string();
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            graph: self.graph,
            options: self.options,
        }
    }
}

impl Compiler {
    pub fn builder(graph: WorkflowGraph) -> CompilerBuilder {
        CompilerBuilder::new(graph)
    }

    /// Creates a compiler with default options.
    pub fn new(graph: WorkflowGraph) -> Self {
        Self::builder(graph).build()
    }

    /// Front door for the persisted canvas format: parses the JSON, converts
    /// it to the canonical graph, and wraps it in a default-option compiler.
    pub fn from_json(json: &str) -> Result<Self, WorkflowConversionError> {
        let raw: UiWorkflow = serde_json::from_str(json)
            .map_err(|e| WorkflowConversionError::JsonParseError(e.to_string()))?;
        Ok(Self::new(raw.into_workflow()?))
    }

    /// Runs validation and every section emitter, then assembles the result.
    ///
    /// Total over any graph whose edges reference existing nodes, and
    /// best-effort beyond that: diagnostics never block emission, so `code`
    /// is populated even when `errors` is not empty.
    pub fn compile(self) -> CodeGenerationResult {
        let errors = validate::validate(&self.graph);

        // An empty graph compiles to just the guidance entry point; the
        // import block and client factory only appear once any node exists.
        let has_nodes = !self.graph.nodes.is_empty();
        let imports = if has_nodes {
            sections::emit_imports(&self.graph)
        } else {
            String::new()
        };
        let model_client = if has_nodes {
            sections::emit_model_client(&self.options.model)
        } else {
            String::new()
        };

        let parts = [
            imports,
            sections::emit_structured_models(&self.graph),
            sections::emit_function_tools(&self.graph),
            model_client,
            sections::emit_agents(&self.graph),
            // Reserved for per-Runner sections; always empty in this design.
            String::new(),
            entry::emit_entry_point(&self.graph, &self.options),
        ];

        let code = parts
            .into_iter()
            .filter(|part| !part.trim().is_empty())
            .join("\n\n");

        CodeGenerationResult {
            code,
            errors,
            dependencies: BASE_DEPENDENCIES.iter().map(|d| d.to_string()).collect(),
        }
    }
}
