//! Current-weather lookup against an OpenWeatherMap-style endpoint.

use serde::Deserialize;

use super::http::{shared_client, trim_trailing_slash};
use crate::config::VestibuleConfig;
use crate::error::Result;

/// Client for the current-weather endpoint.
///
/// API-reported failures (the body-level `cod` field) degrade to a
/// user-facing apology string; transport failures propagate to the caller.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    /// Numeric on success, string on API-reported errors.
    cod: serde_json::Value,
    #[serde(default)]
    weather: Vec<WeatherCondition>,
    main: Option<MainReadings>,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
}

fn cod_ok(cod: &serde_json::Value) -> bool {
    cod.as_i64() == Some(200) || cod.as_str() == Some("200")
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: crate::config::DEFAULT_WEATHER_BASE_URL.to_string(),
        }
    }

    pub fn new_with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Build a client from config. A missing key is passed through empty so
    /// the API rejects the call and the user gets the apology string.
    pub fn from_config(config: &VestibuleConfig) -> Self {
        Self::new_with_base_url(
            config.weather_api_key.clone().unwrap_or_default(),
            config.weather_base_url.clone(),
        )
    }

    /// Fetch the current weather for `city` as a user-facing sentence.
    pub async fn current_weather(&self, city: &str) -> Result<String> {
        let url = format!("{}/data/2.5/weather", trim_trailing_slash(&self.base_url));

        let response = shared_client()
            .get(url)
            .query(&[("q", city), ("appid", &self.api_key), ("units", "metric")])
            .send()
            .await?;

        let body: WeatherResponse = response.json().await?;

        if !cod_ok(&body.cod) {
            tracing::warn!(%city, cod = %body.cod, "weather API reported an error");
            return Ok(format!("Could not retrieve weather data for {city}."));
        }

        let (description, temp) = match (body.weather.first(), body.main) {
            (Some(condition), Some(main)) => (condition.description.as_str(), main.temp),
            _ => return Ok(format!("Could not retrieve weather data for {city}.")),
        };

        Ok(format!(
            "The weather in {city} is {description} with a temperature of {temp}°C."
        ))
    }
}
