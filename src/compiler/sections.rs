//! Pure section emitters. Each function maps a node subset to one text
//! fragment of the generated script; a fragment that comes back blank is
//! dropped by the assembler in [`super::Compiler::compile`].

use crate::compiler::sanitize::sanitize_identifier;
use crate::workflow::{OutputType, WorkflowGraph};
use itertools::Itertools;

/// Display name used when an Agent's name is empty.
pub(super) const DEFAULT_AGENT_NAME: &str = "unnamed_agent";

/// Import block. The runtime and agent-construction imports are always
/// present; tool-message and team imports are switched on by node presence.
pub(super) fn emit_imports(graph: &WorkflowGraph) -> String {
    let mut imports = vec![
        "import asyncio",
        "from autogen_agentchat.agents import AssistantAgent",
        "from autogen_ext.models.openai import OpenAIChatCompletionClient",
    ];

    if graph.function_tools().next().is_some() {
        imports.push("from autogen_agentchat.base import Response");
        imports.push("from autogen_agentchat.messages import TextMessage");
    }

    if graph.agents().count() > 1 {
        imports.push("from autogen_agentchat.teams import RoundRobinGroupChat");
        imports.push("from autogen_agentchat.conditions import TextMentionTermination");
        imports.push("from autogen_agentchat.ui import Console");
    }

    imports.join("\n")
}

/// Structured-output model declarations: each structured Agent's schema
/// payload verbatim, preceded by a single shared pydantic import.
pub(super) fn emit_structured_models(graph: &WorkflowGraph) -> String {
    let models: Vec<&str> = graph
        .agents()
        .filter(|(_, agent)| agent.output_type == OutputType::Structured)
        .filter_map(|(_, agent)| agent.structured_schema.as_deref())
        .filter(|schema| !schema.is_empty())
        .collect();

    if models.is_empty() {
        return String::new();
    }

    format!("from pydantic import BaseModel\n\n{}", models.join("\n\n"))
}

/// Function-tool declarations in node iteration order, joined by a blank
/// line. A non-empty implementation is indented one level line by line
/// (blank lines pass through unindented); an empty one gets a stub body.
pub(super) fn emit_function_tools(graph: &WorkflowGraph) -> String {
    graph
        .function_tools()
        .map(|(_, tool)| {
            let params = tool
                .parameters
                .iter()
                .map(|p| format!("{}: {}", p.name, p.ty))
                .join(", ");
            let return_type = if tool.return_type.is_empty() {
                "str"
            } else {
                tool.return_type.as_str()
            };

            let mut code = format!("def {}({}) -> {}:", tool.name, params, return_type);
            if tool.implementation.is_empty() {
                code.push_str("\n    \"\"\"TODO: implement function logic\"\"\"\n    pass");
            } else {
                for line in tool.implementation.lines() {
                    code.push('\n');
                    if !line.trim().is_empty() {
                        code.push_str("    ");
                    }
                    code.push_str(line);
                }
            }
            code
        })
        .join("\n\n")
}

/// The shared chat-completion client factory. Fixed shape; only the model
/// identifier varies, and no credential is embedded.
pub(super) fn emit_model_client(model: &str) -> String {
    format!(
        "def get_model_client() -> OpenAIChatCompletionClient:\n    \
         return OpenAIChatCompletionClient(\n        \
         model=\"{model}\",\n        \
         # api_key=\"your-api-key-here\",  # or set the OPENAI_API_KEY environment variable\n    \
         )"
    )
}

/// Agent constructor declarations in node iteration order, joined by a blank
/// line. Description and system message are emitted only when non-empty.
pub(super) fn emit_agents(graph: &WorkflowGraph) -> String {
    graph
        .agents()
        .map(|(_, agent)| {
            let display_name = if agent.name.is_empty() {
                DEFAULT_AGENT_NAME
            } else {
                agent.name.as_str()
            };
            let variable = sanitize_identifier(display_name);

            let mut code = format!("{variable} = AssistantAgent(\n");
            code.push_str(&format!("    name=\"{display_name}\",\n"));
            code.push_str("    model_client=get_model_client(),\n");
            if !agent.description.is_empty() {
                code.push_str(&format!("    description=\"{}\",\n", agent.description));
            }
            if !agent.system_message.is_empty() {
                code.push_str(&format!("    system_message=\"{}\",\n", agent.system_message));
            }
            code.push(')');
            code
        })
        .join("\n\n")
}
