//! Customer-service state: greets the user and serves informational tools.

use std::sync::Arc;

use crate::config::VestibuleConfig;
use crate::error::{Result, VestibuleError};
use crate::session::options::GATED_TTS_MODEL;
use crate::session::SessionInfo;
use crate::tools::informational;
use crate::tools::tool::Tool;
use crate::tools::types::ToolSpec;
use crate::tools::ToolArguments;

const INSTRUCTIONS: &str = "You are a friendly customer service representative. \
    Do not reveal that you are an AI model or share any model information; \
    if asked, decline to provide it.";

/// Terminal persona. Answers the user's queries with the informational
/// toolset (current time, weather, nutrition).
pub struct CustomerServiceAgent {
    tools: Vec<Arc<dyn Tool>>,
}

impl CustomerServiceAgent {
    /// Build the agent with the standard toolset for `config`.
    pub fn new(config: &VestibuleConfig) -> Self {
        Self {
            tools: informational::all_tools(config),
        }
    }

    /// Build the agent with an explicit toolset.
    pub fn with_tools(tools: Vec<Arc<dyn Tool>>) -> Self {
        Self { tools }
    }

    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    /// Voice override for this persona.
    pub fn tts_model(&self) -> Option<&'static str> {
        Some(GATED_TTS_MODEL)
    }

    /// Reply instructions delivered when this state becomes active.
    pub fn on_enter_instructions(&self, info: &SessionInfo) -> String {
        format!(
            "Greet {} personally and offer your assistance.",
            info.display_name()
        )
    }

    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    /// Informational tools advertised to the model while this state is active.
    pub fn tool_specs(&self) -> Vec<ToolSpec> {
        self.tools
            .iter()
            .map(|tool| ToolSpec::new(tool.name(), tool.description(), tool.parameters().clone()))
            .collect()
    }

    /// Execute a named tool with raw arguments from the model.
    pub async fn call_tool(&self, name: &str, args: &ToolArguments) -> Result<serde_json::Value> {
        let tool = self
            .tools
            .iter()
            .find(|tool| tool.name() == name)
            .ok_or_else(|| VestibuleError::ToolExecution {
                tool_name: name.to_string(),
                message: "unknown tool".to_string(),
            })?;

        tracing::debug!(tool = name, "executing informational tool");
        tool.execute(args).await
    }
}

impl std::fmt::Debug for CustomerServiceAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerServiceAgent")
            .field("tools", &self.tools.len())
            .finish()
    }
}
