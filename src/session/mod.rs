//! Session record, declarative options, and the realtime collaborator seam.

pub mod info;
pub mod options;
pub mod transport;

pub use info::SessionInfo;
pub use options::{RoomInputOptions, SessionOptions};
pub use transport::VoiceSession;

use crate::agents::AgentDispatcher;
use crate::config::VestibuleConfig;
use crate::error::Result;

/// Configure a dispatcher on `session`, bind it to `room`, and deliver the
/// intake introduction.
///
/// The returned dispatcher starts in the intake state; the host drives it by
/// translating the model's tool calls into [`AgentUpdate`](crate::agents::AgentUpdate)s.
pub async fn run_conversation<S: VoiceSession>(
    session: S,
    room: &str,
    config: VestibuleConfig,
) -> Result<AgentDispatcher<S>> {
    let input = RoomInputOptions::default();
    let mut dispatcher = AgentDispatcher::new(session, config);
    dispatcher.start(room, &input).await?;
    Ok(dispatcher)
}
