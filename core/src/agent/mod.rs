//! Agent dispatch: turn a task into tool calls and a final answer.

mod parser;
mod prompt;

pub use parser::{parse, AgentError, AgentStep};
pub use prompt::{build_prompt, STOP_SEQUENCES};

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::llm::LanguageModel;
use crate::registry::Registry;

/// Returned when the loop runs out of steps.
pub const ITERATION_LIMIT_OUTPUT: &str = "Agent stopped due to iteration limit or time limit.";

/// What the agent hands back for one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResult {
    pub input: String,
    pub output: String,
}

/// The reasoning engine seen from the gateway: a task plus the available
/// tools in, a final result out.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, task: &str, registry: &Registry) -> Result<AgentResult>;
}

/// Zero-shot "reason and act" agent. The model sees only the tool names and
/// descriptions and writes `Action:` / `Action Input:` lines until it gives
/// a `Final Answer:`.
pub struct ReactAgent {
    model: Arc<dyn LanguageModel>,
    max_iterations: usize,
}

impl ReactAgent {
    pub fn new(model: Arc<dyn LanguageModel>, max_iterations: usize) -> Self {
        Self {
            model,
            max_iterations,
        }
    }

    async fn observe(&self, registry: &Registry, tool: &str, input: &str) -> Result<String> {
        match registry.find(tool) {
            Some(t) => t.invoke(input).await,
            None => {
                warn!("Model asked for unknown tool '{}'", tool);
                Ok(format!(
                    "{} is not a valid tool, try one of [{}].",
                    tool,
                    registry.names().join(", ")
                ))
            }
        }
    }
}

#[async_trait]
impl Dispatcher for ReactAgent {
    async fn dispatch(&self, task: &str, registry: &Registry) -> Result<AgentResult> {
        let stop: Vec<String> = STOP_SEQUENCES.iter().map(|s| s.to_string()).collect();
        let mut scratchpad = String::new();

        for iteration in 0..self.max_iterations {
            debug!("Agent iteration {}", iteration + 1);

            let prompt = build_prompt(task, registry, &scratchpad);
            let text = self.model.complete(&prompt, &stop).await?;

            match parse(&text)? {
                AgentStep::Finish { output, .. } => {
                    info!("Agent finished after {} step(s)", iteration + 1);
                    return Ok(AgentResult {
                        input: task.to_string(),
                        output,
                    });
                }
                AgentStep::Act { tool, input, log } => {
                    info!("Agent calling tool '{}' with input: {}", tool, input);
                    let observation = self.observe(registry, &tool, &input).await?;
                    info!("Observation: {}", observation);
                    prompt::record_step(&mut scratchpad, &log, &observation);
                }
            }
        }

        warn!("Agent hit the iteration limit ({})", self.max_iterations);
        Ok(AgentResult {
            input: task.to_string(),
            output: ITERATION_LIMIT_OUTPUT.to_string(),
        })
    }
}
