//! Tests for the tool system and the informational tools.

use vestibule::config::VestibuleConfig;
use vestibule::tools::informational::{current_time_tool, weather_tool};
use vestibule::tools::tool::{AgentTool, Tool};
use vestibule::tools::*;

#[test]
fn parameter_builder_constructs_schema() {
    let params = AgentToolParameters::object()
        .string("city", "City name", true)
        .integer("age", "Age in years", false)
        .boolean("is_consented", "Consent flag", false)
        .build();

    let schema = &params.schema;
    assert_eq!(schema["type"], "object");
    assert_eq!(schema["properties"]["city"]["type"], "string");
    assert_eq!(schema["properties"]["age"]["type"], "integer");
    assert_eq!(schema["properties"]["is_consented"]["type"], "boolean");
    assert_eq!(schema["required"].as_array().unwrap().len(), 1);
}

#[test]
fn empty_parameters() {
    let params = AgentToolParameters::empty();
    assert_eq!(params.schema["type"], "object");
}

#[test]
fn tool_arguments_typed_extraction() {
    let args = ToolArguments::new(serde_json::json!({
        "name": "Alice",
        "age": 30,
        "is_consented": true
    }));

    assert_eq!(args.get_str("name").unwrap(), "Alice");
    assert_eq!(args.get_i64("age").unwrap(), 30);
    assert!(args.get_bool("is_consented").unwrap());
    assert!(args.get_str("missing").is_err());
    assert_eq!(args.get_str_opt("missing"), None);
}

#[tokio::test]
async fn agent_tool_executes() {
    let tool = AgentTool::new(
        "greet",
        "Greet a person",
        AgentToolParameters::object()
            .string("name", "Name", true)
            .build(),
        |args| async move {
            let name = args.get_str("name")?;
            Ok(serde_json::json!({"greeting": format!("Hello, {name}!")}))
        },
    );

    assert_eq!(tool.name(), "greet");
    assert_eq!(tool.description(), "Greet a person");

    let args = ToolArguments::new(serde_json::json!({"name": "World"}));
    let result = tool.execute(&args).await.unwrap();
    assert_eq!(result["greeting"], "Hello, World!");
}

#[tokio::test]
async fn current_time_matches_the_expected_pattern() {
    let tool = current_time_tool();
    let result = tool
        .execute(&ToolArguments::new(serde_json::json!({})))
        .await
        .unwrap();

    let stamp = result.as_str().expect("time is a string");
    assert_eq!(stamp.len(), 19, "got: {stamp}");
    for (i, c) in stamp.char_indices() {
        match i {
            4 | 7 => assert_eq!(c, '-', "got: {stamp}"),
            10 => assert_eq!(c, ' ', "got: {stamp}"),
            13 | 16 => assert_eq!(c, ':', "got: {stamp}"),
            _ => assert!(c.is_ascii_digit(), "got: {stamp}"),
        }
    }
}

#[tokio::test]
async fn weather_tool_requires_a_city_argument() {
    let config = VestibuleConfig::new().with_weather_api_key("test-key");
    let tool = weather_tool(vestibule::lookup::WeatherClient::from_config(&config));

    let err = tool
        .execute(&ToolArguments::new(serde_json::json!({})))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        vestibule::error::VestibuleError::InvalidArgument(_)
    ));
}

#[test]
fn informational_toolset_has_the_three_tools() {
    let config = VestibuleConfig::new();
    let tools = informational::all_tools(&config);

    let names: Vec<&str> = tools.iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["current_time", "weather", "nutrition"]);
}
