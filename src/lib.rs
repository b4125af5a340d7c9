//! Vestibule — voice intake and customer-service agent runtime.
//!
//! Configures a voice assistant that runs a short intake flow (collect the
//! user's name and age, require parental consent for minors) before handing
//! the conversation to a customer-service persona equipped with a few
//! informational tools (current time, weather lookup, nutrition lookup).
//!
//! Speech-to-text, text-to-speech, VAD, turn detection, noise cancellation,
//! and session transport are owned by the hosting realtime framework. This
//! crate models the per-conversation session record, the agent handoff state
//! machine, and the outbound lookup tools, and drives the framework through
//! the two-operation [`session::VoiceSession`] seam.
//!
//! # Quick Start
//!
//! ```no_run
//! use vestibule::agents::AgentUpdate;
//! use vestibule::config::VestibuleConfig;
//! use vestibule::session::{run_conversation, VoiceSession};
//!
//! # async fn example(session: impl VoiceSession) -> vestibule::error::Result<()> {
//! let config = VestibuleConfig::from_env();
//! let mut dispatcher = run_conversation(session, "intake-room", config).await?;
//!
//! // Updates arrive as the model calls the advertised record tools.
//! dispatcher.apply(AgentUpdate::RecordName("Ada".into())).await?;
//! dispatcher.apply(AgentUpdate::RecordAge(30)).await?;
//! # Ok(())
//! # }
//! ```

pub mod agents;
pub mod config;
pub mod error;
pub mod lookup;
pub mod prelude;
pub mod session;
pub mod tools;
