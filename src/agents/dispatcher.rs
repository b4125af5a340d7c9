//! Single dispatcher that owns the session record and the active-state slot.

use uuid::Uuid;

use super::customer_service::CustomerServiceAgent;
use super::handoff::{AgentKind, Handoff};
use super::intake::IntakeAgent;
use super::parental_consent::ParentalConsentAgent;
use crate::config::VestibuleConfig;
use crate::error::{Result, VestibuleError};
use crate::session::{RoomInputOptions, SessionInfo, VoiceSession};
use crate::tools::types::ToolSpec;
use crate::tools::ToolArguments;

/// A user-supplied field arriving from the model's record tool calls.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentUpdate {
    RecordName(String),
    RecordAge(i64),
    RecordParentName(String),
    RecordConsent(bool),
}

enum ActiveAgent {
    Intake(IntakeAgent),
    ParentalConsent(ParentalConsentAgent),
    CustomerService(CustomerServiceAgent),
}

/// Owns the conversation: the session record, the active agent state, and
/// the realtime collaborator.
///
/// Updates are routed to the active state; the returned [`Handoff`] is
/// consumed here, and the on-enter reply for the new state is generated
/// synchronously before further input is accepted. Updates the active state
/// does not define fail with [`VestibuleError::InvalidState`].
pub struct AgentDispatcher<S: VoiceSession> {
    session: S,
    config: VestibuleConfig,
    info: SessionInfo,
    active: ActiveAgent,
    conversation_id: Uuid,
    started: bool,
}

impl<S: VoiceSession> AgentDispatcher<S> {
    /// Create a dispatcher with the intake state active and an empty record.
    pub fn new(session: S, config: VestibuleConfig) -> Self {
        Self {
            session,
            config,
            info: SessionInfo::new(),
            active: ActiveAgent::Intake(IntakeAgent::new()),
            conversation_id: Uuid::new_v4(),
            started: false,
        }
    }

    pub fn active(&self) -> AgentKind {
        match &self.active {
            ActiveAgent::Intake(_) => AgentKind::Intake,
            ActiveAgent::ParentalConsent(_) => AgentKind::ParentalConsent,
            ActiveAgent::CustomerService(_) => AgentKind::CustomerService,
        }
    }

    pub fn info(&self) -> &SessionInfo {
        &self.info
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn conversation_id(&self) -> Uuid {
        self.conversation_id
    }

    /// Instructions for the active persona.
    pub fn instructions(&self) -> &str {
        match &self.active {
            ActiveAgent::Intake(agent) => agent.instructions(),
            ActiveAgent::ParentalConsent(agent) => agent.instructions(),
            ActiveAgent::CustomerService(agent) => agent.instructions(),
        }
    }

    /// TTS model for the active persona: its override, or the session default.
    pub fn tts_model(&self) -> &str {
        let override_model = match &self.active {
            ActiveAgent::Intake(_) => None,
            ActiveAgent::ParentalConsent(agent) => agent.tts_model(),
            ActiveAgent::CustomerService(agent) => agent.tts_model(),
        };
        override_model.unwrap_or(&self.config.session.tts)
    }

    /// Tool specs advertised to the model for the active state.
    pub fn tool_specs(&self) -> Vec<ToolSpec> {
        match &self.active {
            ActiveAgent::Intake(agent) => agent.tool_specs(),
            ActiveAgent::ParentalConsent(agent) => agent.tool_specs(),
            ActiveAgent::CustomerService(agent) => agent.tool_specs(),
        }
    }

    /// Begin the conversation: bind the room and deliver the intake intro.
    ///
    /// A dispatcher binds exactly one room; a second call fails without
    /// touching the session.
    pub async fn start(&mut self, room: &str, input: &RoomInputOptions) -> Result<()> {
        if self.started {
            return Err(VestibuleError::InvalidState(
                "session already started".to_string(),
            ));
        }
        let intro = match &self.active {
            ActiveAgent::Intake(agent) => agent.intro_instructions(),
            _ => {
                return Err(VestibuleError::InvalidState(
                    "conversation already past intake".to_string(),
                ))
            }
        };

        tracing::debug!(conversation = %self.conversation_id, %room, "starting session");
        self.session.start(room, input).await?;
        self.started = true;
        self.session.generate_reply(intro).await
    }

    /// Route an update to the active state and consume the resulting handoff.
    ///
    /// Returns the agent active once the update (and any transition it
    /// triggered) has settled.
    pub async fn apply(&mut self, update: AgentUpdate) -> Result<AgentKind> {
        let handoff = match (&self.active, update) {
            (ActiveAgent::Intake(agent), AgentUpdate::RecordName(name)) => {
                agent.record_name(&mut self.info, name)
            }
            (ActiveAgent::Intake(agent), AgentUpdate::RecordAge(age)) => {
                agent.record_age(&mut self.info, age)?
            }
            (ActiveAgent::ParentalConsent(agent), AgentUpdate::RecordParentName(name)) => {
                agent.record_parent_name(&mut self.info, name)
            }
            (ActiveAgent::ParentalConsent(agent), AgentUpdate::RecordConsent(consented)) => {
                agent.record_consent(&mut self.info, consented)
            }
            (_, update) => {
                return Err(VestibuleError::InvalidState(format!(
                    "{update:?} is not accepted by the {} agent",
                    self.active()
                )))
            }
        };

        if let Handoff::To(kind) = handoff {
            self.transition(kind).await?;
        }
        Ok(self.active())
    }

    /// Execute an informational tool on the active state.
    pub async fn call_tool(&self, name: &str, args: serde_json::Value) -> Result<serde_json::Value> {
        match &self.active {
            ActiveAgent::CustomerService(agent) => {
                agent.call_tool(name, &ToolArguments::new(args)).await
            }
            _ => Err(VestibuleError::InvalidState(format!(
                "tool {name} is not available before customer service"
            ))),
        }
    }

    async fn transition(&mut self, kind: AgentKind) -> Result<()> {
        // Customer service is only reachable with consent on record.
        debug_assert!(
            kind != AgentKind::CustomerService || self.info.is_consented == Some(true)
        );

        tracing::debug!(
            conversation = %self.conversation_id,
            from = %self.active(),
            to = %kind,
            "agent handoff"
        );

        self.active = match kind {
            AgentKind::Intake => ActiveAgent::Intake(IntakeAgent::new()),
            AgentKind::ParentalConsent => {
                ActiveAgent::ParentalConsent(ParentalConsentAgent::new())
            }
            AgentKind::CustomerService => {
                ActiveAgent::CustomerService(CustomerServiceAgent::new(&self.config))
            }
        };
        self.on_enter().await
    }

    /// On-enter hook: runs synchronously after a transition, before any
    /// further input is accepted.
    async fn on_enter(&self) -> Result<()> {
        let instructions = match &self.active {
            ActiveAgent::Intake(agent) => agent.intro_instructions().to_string(),
            ActiveAgent::ParentalConsent(agent) => agent.on_enter_instructions(&self.info),
            ActiveAgent::CustomerService(agent) => agent.on_enter_instructions(&self.info),
        };
        self.session.generate_reply(&instructions).await
    }
}
