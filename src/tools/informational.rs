//! Informational tools served by the customer-service agent.
//!
//! Each tool is stateless with respect to the session record, constructed via
//! [`AgentTool::new`], and returned as `Arc<dyn Tool>`. Results are plain
//! strings suitable for speaking back to the user.

use std::sync::Arc;

use crate::config::VestibuleConfig;
use crate::lookup::{NutritionClient, WeatherClient};
use crate::tools::tool::{AgentTool, Tool};
use crate::tools::types::AgentToolParameters;

/// Timestamp format spoken by the `current_time` tool.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Create the `current_time` tool — local wall-clock time as
/// `YYYY-MM-DD HH:MM:SS`. No failure modes.
pub fn current_time_tool() -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        "current_time",
        "Get the current local date and time",
        AgentToolParameters::empty(),
        |_args| async move {
            let now = chrono::Local::now().format(TIME_FORMAT).to_string();
            Ok(serde_json::Value::String(now))
        },
    ))
}

/// Create the `weather` tool — current conditions for a city via
/// [`WeatherClient`].
pub fn weather_tool(client: WeatherClient) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        "weather",
        "Look up the current weather for a city",
        AgentToolParameters::object()
            .string("city", "Name of the city to look up", true)
            .build(),
        move |args| {
            let client = client.clone();
            async move {
                let city = args.get_str("city")?;
                let sentence = client.current_weather(city).await?;
                Ok(serde_json::Value::String(sentence))
            }
        },
    ))
}

/// Create the `nutrition` tool — nutrient facts for a product category via
/// [`NutritionClient`].
pub fn nutrition_tool(client: NutritionClient) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        "nutrition",
        "Look up nutrition facts for a product or food category",
        AgentToolParameters::object()
            .string("product", "Product or food category to look up", true)
            .build(),
        move |args| {
            let client = client.clone();
            async move {
                let product = args.get_str("product")?;
                let facts = client.nutrition_facts(product).await?;
                Ok(serde_json::Value::String(facts))
            }
        },
    ))
}

/// The full customer-service toolset for a deployment config.
pub fn all_tools(config: &VestibuleConfig) -> Vec<Arc<dyn Tool>> {
    vec![
        current_time_tool(),
        weather_tool(WeatherClient::from_config(config)),
        nutrition_tool(NutritionClient::from_config(config)),
    ]
}
