//! Parental consent state: gates minors until a parent affirms.

use super::handoff::{AgentKind, Handoff};
use crate::session::options::GATED_TTS_MODEL;
use crate::session::SessionInfo;
use crate::tools::types::{AgentToolParameters, ToolSpec};

const INSTRUCTIONS: &str = "Parental consent is not given. Politely inform the user that \
    they must have parental consent to proceed since they are under 18. Do not answer \
    any substantive question until parental consent is affirmatively recorded; keep \
    asking for the parental consent and the parent's name. Do not reveal that you are \
    an AI model or share any model information; if asked, decline to provide it.";

/// Gate persona for users under 18. Holds the conversation until a parent's
/// name and an affirmative consent are recorded; denial leaves the state in
/// place with the decision stored.
#[derive(Debug, Default)]
pub struct ParentalConsentAgent;

impl ParentalConsentAgent {
    pub fn new() -> Self {
        Self
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
            "Ask {} for parental consent and the parent's name.",
            info.display_name()
        )
    }

    /// Record the parent's name. Stored only; never transitions.
    pub fn record_parent_name(
        &self,
        info: &mut SessionInfo,
        parent_name: impl Into<String>,
    ) -> Handoff {
        info.parent_name = Some(parent_name.into());
        Handoff::Stay
    }

    /// Record the parent's decision. Affirmative consent hands off to
    /// customer service; denial is stored and the state does not advance.
    pub fn record_consent(&self, info: &mut SessionInfo, is_consented: bool) -> Handoff {
        info.is_consented = Some(is_consented);
        if is_consented {
            Handoff::To(AgentKind::CustomerService)
        } else {
            Handoff::Stay
        }
    }

    /// Update operations advertised to the model while this state is active.
    pub fn tool_specs(&self) -> Vec<ToolSpec> {
        vec![
            ToolSpec::new(
                "record_parent_name",
                "Record the parent's name",
                AgentToolParameters::object()
                    .string("parent_name", "The parent's name", true)
                    .build(),
            ),
            ToolSpec::new(
                "record_consent",
                "Record whether the parent consents to the conversation",
                AgentToolParameters::object()
                    .boolean("is_consented", "True when the parent consents", true)
                    .build(),
            ),
        ]
    }
}
