//! Environment-backed configuration for lookup endpoints and session models.

use crate::error::{Result, VestibuleError};
use crate::session::options::SessionOptions;

/// Default OpenWeatherMap endpoint.
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org";

/// Default Open Food Facts endpoint.
pub const DEFAULT_NUTRITION_BASE_URL: &str = "https://world.openfoodfacts.org";

/// Configuration for a Vestibule deployment.
///
/// The base URLs exist primarily so tests can point the lookup clients at a
/// mock server; production deployments only need the weather API key.
#[derive(Debug, Clone)]
pub struct VestibuleConfig {
    pub weather_api_key: Option<String>,
    pub weather_base_url: String,
    pub nutrition_base_url: String,
    pub session: SessionOptions,
}

impl Default for VestibuleConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl VestibuleConfig {
    /// Create a config with default endpoints and no credentials.
    pub fn new() -> Self {
        Self {
            weather_api_key: None,
            weather_base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            nutrition_base_url: DEFAULT_NUTRITION_BASE_URL.to_string(),
            session: SessionOptions::default(),
        }
    }

    /// Load from environment variables, reading `.env.local` then `.env`
    /// when present (errors ignored).
    pub fn from_env() -> Self {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::dotenv();

        let mut config = Self::new();

        for var in ["WEATHER_API_KEY", "OPENWEATHER_API_KEY"] {
            if let Ok(key) = std::env::var(var) {
                config.weather_api_key = Some(key);
                break;
            }
        }

        if let Ok(url) = std::env::var("WEATHER_BASE_URL") {
            config.weather_base_url = url;
        }
        if let Ok(url) = std::env::var("NUTRITION_BASE_URL") {
            config.nutrition_base_url = url;
        }

        config
    }

    pub fn with_weather_api_key(mut self, key: impl Into<String>) -> Self {
        self.weather_api_key = Some(key.into());
        self
    }

    pub fn with_weather_base_url(mut self, url: impl Into<String>) -> Self {
        self.weather_base_url = url.into();
        self
    }

    pub fn with_nutrition_base_url(mut self, url: impl Into<String>) -> Self {
        self.nutrition_base_url = url.into();
        self
    }

    pub fn with_session_options(mut self, session: SessionOptions) -> Self {
        self.session = session;
        self
    }

    /// Resolve the weather API key, failing with a configuration error when
    /// none is set.
    pub fn require_weather_api_key(&self) -> Result<&str> {
        self.weather_api_key.as_deref().ok_or_else(|| {
            VestibuleError::Configuration(
                "Missing weather API key (set WEATHER_API_KEY)".to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production_endpoints() {
        let config = VestibuleConfig::new();
        assert_eq!(config.weather_base_url, DEFAULT_WEATHER_BASE_URL);
        assert_eq!(config.nutrition_base_url, DEFAULT_NUTRITION_BASE_URL);
        assert!(config.weather_api_key.is_none());
    }

    #[test]
    fn builder_overrides_apply() {
        let config = VestibuleConfig::new()
            .with_weather_api_key("test-key")
            .with_weather_base_url("http://localhost:9000")
            .with_nutrition_base_url("http://localhost:9001");

        assert_eq!(config.weather_api_key.as_deref(), Some("test-key"));
        assert_eq!(config.weather_base_url, "http://localhost:9000");
        assert_eq!(config.nutrition_base_url, "http://localhost:9001");
    }

    #[test]
    fn missing_weather_key_is_a_configuration_error() {
        let config = VestibuleConfig::new();
        let err = config.require_weather_api_key().unwrap_err();
        assert!(matches!(err, VestibuleError::Configuration(_)));
    }
}
