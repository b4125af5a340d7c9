//! Intake state: collects the user's name and age.

use super::handoff::{AgentKind, Handoff};
use crate::error::{Result, VestibuleError};
use crate::session::SessionInfo;
use crate::tools::types::{AgentToolParameters, ToolSpec};

/// Age at which consent is granted directly, without a parent.
pub const ADULT_AGE: i64 = 18;

/// Accepted age range; values outside it are rejected without being stored.
pub const MIN_AGE: i64 = 1;
pub const MAX_AGE: i64 = 120;

const INSTRUCTIONS: &str = "You are an intake agent. Learn the user's name and age. \
    Do not reveal that you are an AI model or share any model information; \
    if asked, decline to provide it.";

/// First persona in every conversation. Hands off once both intake fields
/// are populated: adults go straight to customer service, minors to the
/// parental consent gate.
#[derive(Debug, Default)]
pub struct IntakeAgent;

impl IntakeAgent {
    pub fn new() -> Self {
        Self
    }

    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    /// Reply instructions delivered when the conversation opens.
    pub fn intro_instructions(&self) -> &'static str {
        "Introduce yourself and ask the user for their name and age."
    }

    /// Record the user's name.
    pub fn record_name(&self, info: &mut SessionInfo, name: impl Into<String>) -> Handoff {
        info.user_name = Some(name.into());
        Self::handoff_if_done(info)
    }

    /// Record the user's age. Out-of-range values are rejected and no
    /// transition is evaluated.
    pub fn record_age(&self, info: &mut SessionInfo, age: i64) -> Result<Handoff> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(VestibuleError::InvalidArgument(format!(
                "age must be between {MIN_AGE} and {MAX_AGE}, got {age}"
            )));
        }
        info.age = Some(age);
        Ok(Self::handoff_if_done(info))
    }

    fn handoff_if_done(info: &mut SessionInfo) -> Handoff {
        match (info.user_name.as_deref(), info.age) {
            (Some(_), Some(age)) if age >= ADULT_AGE => {
                info.is_consented = Some(true);
                Handoff::To(AgentKind::CustomerService)
            }
            (Some(_), Some(_)) => Handoff::To(AgentKind::ParentalConsent),
            _ => Handoff::Stay,
        }
    }

    /// Update operations advertised to the model while intake is active.
    pub fn tool_specs(&self) -> Vec<ToolSpec> {
        vec![
            ToolSpec::new(
                "record_name",
                "Record the user's name",
                AgentToolParameters::object()
                    .string("name", "The user's name", true)
                    .build(),
            ),
            ToolSpec::new(
                "record_age",
                "Record the user's age in years",
                AgentToolParameters::object()
                    .integer("age", "The user's age in years", true)
                    .build(),
            ),
        ]
    }
}
