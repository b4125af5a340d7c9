//! Declarative model selection consumed by the hosting framework.
//!
//! Vestibule implements none of the speech pipeline; it only names the models
//! the framework should load for speech-to-text, the language model,
//! text-to-speech, voice-activity detection, and turn detection.

use serde::{Deserialize, Serialize};

pub const DEFAULT_STT_MODEL: &str = "assemblyai/universal-streaming:en";
pub const DEFAULT_LLM_MODEL: &str = "openai/gpt-4.1-mini";
pub const DEFAULT_TTS_MODEL: &str = "cartesia/sonic-2:9626c31c-bec5-4cca-baa8-f8ba9e84c8bc";
pub const DEFAULT_VAD_MODEL: &str = "silero";
pub const DEFAULT_TURN_DETECTION_MODEL: &str = "multilingual";
pub const DEFAULT_NOISE_CANCELLATION_MODEL: &str = "bvc";

/// Voice used by the consent and customer-service personas.
pub const GATED_TTS_MODEL: &str = "elevenlabs/eleven_flash_v2_5";

/// Model identifiers and session behavior handed to the framework at start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionOptions {
    pub stt: String,
    pub llm: String,
    pub tts: String,
    pub vad: String,
    pub turn_detection: String,
    pub preemptive_generation: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            stt: DEFAULT_STT_MODEL.to_string(),
            llm: DEFAULT_LLM_MODEL.to_string(),
            tts: DEFAULT_TTS_MODEL.to_string(),
            vad: DEFAULT_VAD_MODEL.to_string(),
            turn_detection: DEFAULT_TURN_DETECTION_MODEL.to_string(),
            preemptive_generation: true,
        }
    }
}

/// Audio input options for the room the session is bound to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomInputOptions {
    pub noise_cancellation: String,
}

impl Default for RoomInputOptions {
    fn default() -> Self {
        Self {
            noise_cancellation: DEFAULT_NOISE_CANCELLATION_MODEL.to_string(),
        }
    }
}
