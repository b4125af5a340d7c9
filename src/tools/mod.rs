//! Tool system for function calling.

pub mod arguments;
pub mod informational;
pub mod tool;
pub mod types;

pub use arguments::ToolArguments;
pub use tool::{AgentTool, Tool};
pub use types::{AgentToolParameters, ToolSpec};
