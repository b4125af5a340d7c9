//! Tests for session options and the conversation entrypoint.

mod common;

use common::RecordingSession;
use pretty_assertions::assert_eq;
use vestibule::agents::AgentKind;
use vestibule::config::VestibuleConfig;
use vestibule::session::options::{
    DEFAULT_LLM_MODEL, DEFAULT_NOISE_CANCELLATION_MODEL, DEFAULT_STT_MODEL, DEFAULT_TTS_MODEL,
};
use vestibule::session::{run_conversation, RoomInputOptions, SessionOptions};

#[test]
fn session_options_default_to_the_standard_models() {
    let options = SessionOptions::default();

    assert_eq!(options.stt, DEFAULT_STT_MODEL);
    assert_eq!(options.llm, DEFAULT_LLM_MODEL);
    assert_eq!(options.tts, DEFAULT_TTS_MODEL);
    assert_eq!(options.vad, "silero");
    assert_eq!(options.turn_detection, "multilingual");
    assert!(options.preemptive_generation);
}

#[test]
fn room_input_defaults_to_noise_cancellation() {
    let input = RoomInputOptions::default();
    assert_eq!(input.noise_cancellation, DEFAULT_NOISE_CANCELLATION_MODEL);
}

#[tokio::test]
async fn run_conversation_binds_the_room_and_introduces_intake() {
    let dispatcher = run_conversation(
        RecordingSession::new(),
        "intake-room",
        VestibuleConfig::new(),
    )
    .await
    .unwrap();

    assert_eq!(dispatcher.active(), AgentKind::Intake);

    let started = dispatcher.session().started_rooms();
    assert_eq!(started.len(), 1);
    assert_eq!(started[0].0, "intake-room");
    assert_eq!(
        started[0].1.noise_cancellation,
        DEFAULT_NOISE_CANCELLATION_MODEL
    );

    assert_eq!(
        dispatcher.session().replies(),
        vec!["Introduce yourself and ask the user for their name and age.".to_string()]
    );
}

#[tokio::test]
async fn a_dispatcher_binds_exactly_one_room() {
    let mut dispatcher = run_conversation(
        RecordingSession::new(),
        "intake-room",
        VestibuleConfig::new(),
    )
    .await
    .unwrap();

    // Still in intake, but the session is already bound.
    let err = dispatcher
        .start("another-room", &RoomInputOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        vestibule::error::VestibuleError::InvalidState(_)
    ));

    // The second room was never bound and no extra intro went out.
    assert_eq!(dispatcher.session().started_rooms().len(), 1);
    assert_eq!(dispatcher.session().replies().len(), 1);
}

#[tokio::test]
async fn starting_twice_past_intake_is_rejected() {
    let mut dispatcher = run_conversation(
        RecordingSession::new(),
        "intake-room",
        VestibuleConfig::new(),
    )
    .await
    .unwrap();

    use vestibule::agents::AgentUpdate;
    dispatcher
        .apply(AgentUpdate::RecordName("Ada".to_string()))
        .await
        .unwrap();
    dispatcher.apply(AgentUpdate::RecordAge(30)).await.unwrap();

    let err = dispatcher
        .start("another-room", &RoomInputOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        vestibule::error::VestibuleError::InvalidState(_)
    ));
}
