//! Convenience re-exports for common use.

pub use crate::agents::{AgentDispatcher, AgentKind, AgentUpdate, Handoff};
pub use crate::config::VestibuleConfig;
pub use crate::error::{Result, VestibuleError};
pub use crate::session::{run_conversation, RoomInputOptions, SessionInfo, SessionOptions, VoiceSession};
pub use crate::tools::{AgentTool, AgentToolParameters, Tool, ToolArguments, ToolSpec};
