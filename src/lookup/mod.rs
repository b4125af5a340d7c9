//! Outbound HTTP clients behind the informational tools.

pub mod http;
pub mod nutrition;
pub mod weather;

pub use nutrition::NutritionClient;
pub use weather::WeatherClient;
