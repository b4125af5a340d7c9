//! Shared HTTP client for outbound lookups.

use std::sync::OnceLock;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Normalize a configured base URL before joining paths onto it.
pub fn trim_trailing_slash(url: &str) -> &str {
    url.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_only_trailing_slashes() {
        assert_eq!(trim_trailing_slash("http://a.example/"), "http://a.example");
        assert_eq!(trim_trailing_slash("http://a.example"), "http://a.example");
        assert_eq!(
            trim_trailing_slash("http://a.example/v1//"),
            "http://a.example/v1"
        );
    }
}
