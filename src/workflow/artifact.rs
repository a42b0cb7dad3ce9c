use serde::Serialize;

/// The packaged outcome of one compile invocation: the generated script,
/// the validator's advisory diagnostics, and the package names the script
/// needs at runtime. Immutable once returned; owned by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct CodeGenerationResult {
    pub code: String,
    pub errors: Vec<String>,
    pub dependencies: Vec<String>,
}

impl CodeGenerationResult {
    /// True when validation produced no diagnostics. Diagnostics are advisory,
    /// so `code` is populated either way.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}
