use thiserror::Error;

/// Errors that can occur when converting an external workflow format (such as
/// the persisted canvas JSON) into a Kumiki `WorkflowGraph`.
///
/// Compilation itself has no error path: it is total over any graph, and
/// structural problems surface as advisory diagnostics in the result instead.
#[derive(Error, Debug, Clone)]
pub enum WorkflowConversionError {
    #[error("Failed to parse workflow JSON: {0}")]
    JsonParseError(String),

    #[error("Node '{node_id}' has an unknown kind: '{kind}'")]
    UnknownNodeKind { node_id: String, kind: String },

    #[error("Node '{node_id}' has invalid {field} data: {message}")]
    InvalidNodeData {
        node_id: String,
        field: String,
        message: String,
    },
}
