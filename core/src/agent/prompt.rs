//! Zero-shot prompt for the reason/act loop.

use crate::registry::Registry;

const PREFIX: &str =
    "Answer the following questions as best you can. You have access to the following tools:";

const FORMAT_INSTRUCTIONS: &str = "Use the following format:

Question: the input question you must answer
Thought: you should always think about what to do
Action: the action to take, should be one of [{tool_names}]
Action Input: the input to the action
Observation: the result of the action
... (this Thought/Action/Action Input/Observation can repeat N times)
Thought: I now know the final answer
Final Answer: the final answer to the original input question";

const SUFFIX: &str = "Begin!

Question: {input}
Thought:{agent_scratchpad}";

/// Generation is cut here so the model never invents its own observations.
pub const STOP_SEQUENCES: [&str; 2] = ["\nObservation:", "\n\tObservation:"];

/// Render the full prompt for one step.
pub fn build_prompt(task: &str, registry: &Registry, scratchpad: &str) -> String {
    let tool_strings = registry
        .iter()
        .map(|t| format!("{}: {}", t.name(), t.description()))
        .collect::<Vec<_>>()
        .join("\n");
    let format_instructions =
        FORMAT_INSTRUCTIONS.replace("{tool_names}", &registry.names().join(", "));
    let suffix = SUFFIX
        .replace("{agent_scratchpad}", scratchpad)
        .replacen("{input}", task, 1);

    format!("{PREFIX}\n\n{tool_strings}\n\n{format_instructions}\n\n{suffix}")
}

/// Append one finished step to the scratchpad.
pub fn record_step(scratchpad: &mut String, log: &str, observation: &str) {
    scratchpad.push_str(log);
    scratchpad.push_str("\nObservation: ");
    scratchpad.push_str(observation);
    scratchpad.push_str("\nThought:");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{SuggestPrTemplate, Tool};
    use std::sync::Arc;

    fn registry() -> Registry {
        let tools: Vec<Arc<dyn Tool>> = vec![Arc::new(SuggestPrTemplate)];
        Registry::new(tools).unwrap()
    }

    #[test]
    fn lists_tools_and_question() {
        let prompt = build_prompt("label docs/a.md", &registry(), "");
        assert!(prompt.starts_with(PREFIX));
        assert!(prompt.contains("\n\nSuggestPRTemplate: Suggest a PR label based on changed files\n\n"));
        assert!(prompt.contains("should be one of [SuggestPRTemplate]"));
        assert!(prompt.ends_with("Question: label docs/a.md\nThought:"));
    }

    #[test]
    fn scratchpad_is_appended() {
        let mut pad = String::new();
        record_step(&mut pad, " x\nAction: A\nAction Input: b", "c");
        assert_eq!(pad, " x\nAction: A\nAction Input: b\nObservation: c\nThought:");

        let prompt = build_prompt("q", &registry(), &pad);
        assert!(prompt.ends_with("Thought: x\nAction: A\nAction Input: b\nObservation: c\nThought:"));
    }

    #[test]
    fn task_text_is_not_reinterpreted() {
        let prompt = build_prompt("what is {agent_scratchpad}?", &registry(), "");
        assert!(prompt.ends_with("Question: what is {agent_scratchpad}?\nThought:"));
    }
}
