//! Nutrition lookup against an Open Food Facts-style search endpoint.

use serde::Deserialize;

use super::http::{shared_client, trim_trailing_slash};
use crate::config::VestibuleConfig;
use crate::error::{Result, VestibuleError};

/// Client for the category-filtered product search endpoint.
#[derive(Debug, Clone)]
pub struct NutritionClient {
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<ProductEntry>,
}

#[derive(Debug, Deserialize)]
struct ProductEntry {
    #[serde(default)]
    nutriments: serde_json::Map<String, serde_json::Value>,
}

impl NutritionClient {
    pub fn new() -> Self {
        Self {
            base_url: crate::config::DEFAULT_NUTRITION_BASE_URL.to_string(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &VestibuleConfig) -> Self {
        Self::new_with_base_url(config.nutrition_base_url.clone())
    }

    /// Look up the nutrient map of the first product matching `product` as a
    /// category tag, rendered as a JSON string. No matches yield `{}`.
    pub async fn nutrition_facts(&self, product: &str) -> Result<String> {
        let url = format!("{}/cgi/search.pl", trim_trailing_slash(&self.base_url));

        let response = shared_client()
            .get(url)
            .query(&[
                ("action", "process"),
                ("tagtype_0", "categories"),
                ("tag_contains_0", "contains"),
                ("tag_0", product),
                ("json", "1"),
                ("page_size", "1"),
                ("fields", "product_name,nutriments"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VestibuleError::api(status.as_u16(), body));
        }

        let body: SearchResponse = response.json().await?;

        let nutriments = body
            .products
            .into_iter()
            .next()
            .map(|p| p.nutriments)
            .unwrap_or_default();

        Ok(serde_json::Value::Object(nutriments).to_string())
    }
}

impl Default for NutritionClient {
    fn default() -> Self {
        Self::new()
    }
}
