//! Shared test helpers: a recording voice session.

use std::sync::Mutex;

use async_trait::async_trait;

use vestibule::error::Result;
use vestibule::session::{RoomInputOptions, VoiceSession};

/// A fake realtime session that records every collaborator call.
#[derive(Debug, Default)]
pub struct RecordingSession {
    started: Mutex<Vec<(String, RoomInputOptions)>>,
    replies: Mutex<Vec<String>>,
}

impl RecordingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started_rooms(&self) -> Vec<(String, RoomInputOptions)> {
        self.started.lock().unwrap().clone()
    }

    pub fn replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl VoiceSession for RecordingSession {
    async fn start(&self, room: &str, input: &RoomInputOptions) -> Result<()> {
        self.started
            .lock()
            .unwrap()
            .push((room.to_string(), input.clone()));
        Ok(())
    }

    async fn generate_reply(&self, instructions: &str) -> Result<()> {
        self.replies.lock().unwrap().push(instructions.to_string());
        Ok(())
    }
}
