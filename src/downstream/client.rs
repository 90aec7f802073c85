//! HTTP client for the greeting and name services.

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::AggregatorConfig;
use crate::http::AppError;
use crate::services::types::{GreetingResponse, NameResponse};

/// Calls the two leaf services on behalf of the aggregator.
///
/// Holds a single pooled `reqwest::Client`. No timeout and no retries are
/// configured: a hung downstream blocks the inbound request.
#[derive(Debug, Clone)]
pub struct DownstreamClient {
    client: Client,
    greeting_url: Url,
    name_url: Url,
}

impl DownstreamClient {
    pub fn new(greeting_url: Url, name_url: Url) -> Self {
        Self {
            client: Client::new(),
            greeting_url,
            name_url,
        }
    }

    /// Build from the aggregator section of the config.
    pub fn from_config(config: &AggregatorConfig) -> Result<Self, url::ParseError> {
        Ok(Self::new(
            Url::parse(&config.greeting_url)?,
            Url::parse(&config.name_url)?,
        ))
    }

    /// `GET {greeting_url}/greet`.
    pub async fn fetch_greeting(&self) -> Result<GreetingResponse, AppError> {
        self.get_json("greeting", endpoint(&self.greeting_url, "greet"))
            .await
    }

    /// `GET {name_url}/name`.
    pub async fn fetch_name(&self) -> Result<NameResponse, AppError> {
        self.get_json("name", endpoint(&self.name_url, "name")).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        service: &'static str,
        url: Url,
    ) -> Result<T, AppError> {
        tracing::debug!(service, url = %url, "Calling downstream");

        self.client
            .get(url)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(AppError::downstream(service))?
            .json::<T>()
            .await
            .map_err(AppError::downstream(service))
    }
}

/// Append `path` to `base`, keeping any path prefix on the base URL.
fn endpoint(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let joined = format!("{}/{}", base.path().trim_end_matches('/'), path);
    url.set_path(&joined);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_to_bare_host() {
        let base = Url::parse("http://localhost:5001").unwrap();
        assert_eq!(endpoint(&base, "greet").as_str(), "http://localhost:5001/greet");
    }

    #[test]
    fn endpoint_keeps_prefix() {
        let base = Url::parse("http://localhost:5002/svc/").unwrap();
        assert_eq!(endpoint(&base, "name").as_str(), "http://localhost:5002/svc/name");
    }

    #[tokio::test]
    async fn unreachable_downstream_is_downstream_error() {
        // Port 9 (discard) is not expected to be listening on loopback.
        let client = DownstreamClient::new(
            Url::parse("http://127.0.0.1:9").unwrap(),
            Url::parse("http://127.0.0.1:9").unwrap(),
        );
        let err = client.fetch_greeting().await.unwrap_err();
        assert!(matches!(err, AppError::Downstream { service: "greeting", .. }));
    }
}
