//! Turns raw model text into the next agent step.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

const FINAL_ANSWER: &str = "Final Answer:";

static ACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Action\s*\d*\s*:[\s]*(.*?)[\s]*Action\s*\d*\s*Input\s*\d*\s*:[\s]*(.*)")
        .expect("valid action regex")
});
static ACTION_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)Action\s*\d*\s*:").expect("valid action regex"));
static INPUT_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)Action\s*\d*\s*Input\s*\d*\s*:").expect("valid input regex"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    #[error("Parsing LLM output produced both a final answer and a parse-able action: {0}")]
    AnswerAndAction(String),

    #[error("Invalid Format: Missing 'Action:' after 'Thought:' in `{0}`")]
    MissingAction(String),

    #[error("Invalid Format: Missing 'Action Input:' after 'Action:' in `{0}`")]
    MissingActionInput(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentStep {
    /// Call `tool` with `input`. `log` is the model text that asked for it.
    Act { tool: String, input: String, log: String },
    Finish { output: String, log: String },
}

pub fn parse(text: &str) -> Result<AgentStep, AgentError> {
    let has_answer = text.contains(FINAL_ANSWER);

    if let Some(caps) = ACTION.captures(text) {
        if let Some(answer_at) = text.find(FINAL_ANSWER) {
            // An answer written before a trailing, made-up action still wins.
            let action_at = caps.get(0).map_or(0, |m| m.start());
            if answer_at >= action_at {
                return Err(AgentError::AnswerAndAction(text.to_string()));
            }
            let rest = &text[answer_at + FINAL_ANSWER.len()..];
            let output = rest.split("\n\n").next().unwrap_or_default().trim();
            return Ok(AgentStep::Finish {
                output: output.to_string(),
                log: text.to_string(),
            });
        }
        let tool = caps[1].trim().to_string();
        // Only spaces are stripped; anything else the model wrote is kept.
        let input = caps[2].trim_matches(' ').trim_matches('"').to_string();
        return Ok(AgentStep::Act {
            tool,
            input,
            log: text.to_string(),
        });
    }

    if has_answer {
        let output = text.rsplit(FINAL_ANSWER).next().unwrap_or_default().trim();
        return Ok(AgentStep::Finish {
            output: output.to_string(),
            log: text.to_string(),
        });
    }

    if !ACTION_ONLY.is_match(text) {
        Err(AgentError::MissingAction(text.to_string()))
    } else if !INPUT_ONLY.is_match(text) {
        Err(AgentError::MissingActionInput(text.to_string()))
    } else {
        // Input label before the action label.
        Err(AgentError::MissingAction(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_action() {
        let text = " I should label this.\nAction: SuggestPRTemplate\nAction Input: \"docs/readme.md\"";
        assert_eq!(
            parse(text).unwrap(),
            AgentStep::Act {
                tool: "SuggestPRTemplate".to_string(),
                input: "docs/readme.md".to_string(),
                log: text.to_string(),
            }
        );
    }

    #[test]
    fn numbered_action_labels() {
        let step = parse("Action 1: NotifySlack\nAction 1 Input: hi team").unwrap();
        match step {
            AgentStep::Act { tool, input, .. } => {
                assert_eq!(tool, "NotifySlack");
                assert_eq!(input, "hi team");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn multiline_input_is_kept() {
        let step = parse("Action: SummarizePR\nAction Input: line one\nline two").unwrap();
        match step {
            AgentStep::Act { input, .. } => assert_eq!(input, "line one\nline two"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parses_final_answer() {
        let text = " I now know the final answer\nFinal Answer: 📄 Documentation Update ";
        assert_eq!(
            parse(text).unwrap(),
            AgentStep::Finish {
                output: "📄 Documentation Update".to_string(),
                log: text.to_string(),
            }
        );
    }

    #[test]
    fn input_keeps_newlines() {
        let step = parse("Action: SummarizePR\nAction Input:  \"Adds login\"  \n").unwrap();
        match step {
            AgentStep::Act { input, .. } => assert_eq!(input, "Adds login\"  \n"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn answer_before_stray_action_finishes() {
        let text = " I know it.\nFinal Answer: 📄 Documentation Update\n\nThought: also\nAction: NotifySlack\nAction Input: hi";
        assert_eq!(
            parse(text).unwrap(),
            AgentStep::Finish {
                output: "📄 Documentation Update".to_string(),
                log: text.to_string(),
            }
        );

        // No blank line after the answer: everything up to the end is kept.
        let step = parse("Final Answer: done Action: NotifySlack Action Input: hi").unwrap();
        match step {
            AgentStep::Finish { output, .. } => {
                assert_eq!(output, "done Action: NotifySlack Action Input: hi")
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn answer_and_action_is_an_error() {
        let text = "Action: NotifySlack\nAction Input: hi\nFinal Answer: done";
        assert!(matches!(parse(text), Err(AgentError::AnswerAndAction(_))));
    }

    #[test]
    fn missing_parts_are_errors() {
        assert!(matches!(
            parse("I am not sure what to do."),
            Err(AgentError::MissingAction(_))
        ));
        assert!(matches!(
            parse("Action: NotifySlack"),
            Err(AgentError::MissingActionInput(_))
        ));
    }
}
