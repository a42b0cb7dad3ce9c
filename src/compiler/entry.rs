//! Orchestration entry-point emitter: a small state machine over the shape
//! of the workflow (no runnable pair / single agent / agent team).

use super::CompileOptions;
use super::sanitize::sanitize_identifier;
use super::sections::DEFAULT_AGENT_NAME;
use crate::workflow::{AgentAttrs, ExecutionMode, WorkflowGraph};
use itertools::Itertools;

fn agent_variable(agent: &AgentAttrs) -> String {
    let display_name = if agent.name.is_empty() {
        DEFAULT_AGENT_NAME
    } else {
        agent.name.as_str()
    };
    sanitize_identifier(display_name)
}

/// Emits the `main` entry point.
///
/// Without at least one Agent and one Runner the script can only print
/// guidance. A single agent runs the first Runner's task directly, in the
/// mode the Runners ask for. Two or more agents always run as an async
/// round-robin team regardless of any Runner's declared mode; only the first
/// Runner's task text is reflected in the output.
pub(super) fn emit_entry_point(graph: &WorkflowGraph, options: &CompileOptions) -> String {
    let agents: Vec<&AgentAttrs> = graph.agents().map(|(_, agent)| agent).collect();
    let first_runner = graph.runners().next().map(|(_, runner)| runner);

    let Some(runner) = first_runner else {
        return guidance_entry();
    };
    if agents.is_empty() {
        return guidance_entry();
    }

    let task = if runner.input.is_empty() {
        options.default_task.as_str()
    } else {
        runner.input.as_str()
    };

    if agents.len() == 1 {
        let variable = agent_variable(agents[0]);
        let any_async = graph
            .runners()
            .any(|(_, r)| r.execution_mode == ExecutionMode::Async);
        if any_async {
            single_agent_async(&variable, task)
        } else {
            single_agent_sync(&variable, task)
        }
    } else {
        let variables = agents.iter().map(|agent| agent_variable(agent)).join(", ");
        team_entry(&variables, task, &options.termination_token)
    }
}

fn guidance_entry() -> String {
    "if __name__ == \"__main__\":\n    \
     print(\"Add Agent and Runner nodes to generate an executable workflow\")"
        .to_string()
}

fn single_agent_sync(variable: &str, task: &str) -> String {
    format!(
        r#"def main() -> None:
    model_client = get_model_client()
    try:
        result = {variable}.run_sync(task="{task}")
        print(result)
    finally:
        model_client.close()

if __name__ == "__main__":
    main()"#
    )
}

fn single_agent_async(variable: &str, task: &str) -> String {
    format!(
        r#"async def main() -> None:
    model_client = get_model_client()
    try:
        result = await {variable}.run(task="{task}")
        print(result)
    finally:
        await model_client.close()

if __name__ == "__main__":
    asyncio.run(main())"#
    )
}

fn team_entry(variables: &str, task: &str, termination_token: &str) -> String {
    format!(
        r#"async def main() -> None:
    model_client = get_model_client()

    # Create the termination condition
    termination = TextMentionTermination("{termination_token}")

    # Create the team
    team = RoundRobinGroupChat(
        [{variables}],
        termination_condition=termination
    )

    try:
        # Run the team conversation
        await Console(team.run_stream(task="{task}"))
    finally:
        await model_client.close()

if __name__ == "__main__":
    asyncio.run(main())"#
    )
}
