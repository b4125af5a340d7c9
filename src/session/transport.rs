//! The two-operation collaborator seam onto the realtime framework.

use async_trait::async_trait;

use super::options::RoomInputOptions;
use crate::error::Result;

/// Operations the hosting realtime framework exposes to this crate.
///
/// Audio ingestion, turn-taking, and reply synthesis all live behind this
/// trait; the dispatcher only ever starts the session and requests replies.
#[async_trait]
pub trait VoiceSession: Send + Sync {
    /// Bind the session to a room and begin accepting audio input.
    async fn start(&self, room: &str, input: &RoomInputOptions) -> Result<()>;

    /// Ask the framework to generate a spoken reply from free-text
    /// instructions, awaited to completion before further input is handled.
    async fn generate_reply(&self, instructions: &str) -> Result<()>;
}
