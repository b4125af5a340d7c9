//! Per-conversation session record.

use serde::{Deserialize, Serialize};

/// Data collected from the user over the course of one conversation.
///
/// Created once per conversation, owned by the dispatcher, and mutated only
/// through the active agent state's update operations. Discarded when the
/// conversation ends; nothing persists across sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub user_name: Option<String>,
    pub age: Option<i64>,
    pub parent_name: Option<String>,
    /// Set to `Some(true)` either directly (age >= 18 at intake completion)
    /// or via explicit parental confirmation. Never inferred otherwise.
    pub is_consented: Option<bool>,
}

impl SessionInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both intake fields have been collected.
    pub fn intake_complete(&self) -> bool {
        self.user_name.is_some() && self.age.is_some()
    }

    /// The user's name for reply templates, with a neutral fallback.
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or("there")
    }
}
