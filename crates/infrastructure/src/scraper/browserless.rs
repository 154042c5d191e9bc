use async_trait::async_trait;
use judol_filter_application::ports::PageFetcher;
use judol_filter_domain::config::ScraperConfig;
use judol_filter_domain::DomainError;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Renders pages through a Browserless `/content` endpoint. Any failure is
/// logged and reported as an empty page.
pub struct BrowserlessFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl BrowserlessFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DomainError::FetchFailed(e.to_string()))?;

        let mut endpoint = format!("{}/content", config.browserless_url.trim_end_matches('/'));
        if let Some(token) = &config.token {
            endpoint.push_str(&format!("?token={}", token));
        }

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn render(&self, url: &str) -> Result<String, String> {
        let body = serde_json::json!({ "url": url });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("request error: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {}", status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| format!("read error: {}", e))
    }
}

/// Bare domains are fetched over HTTPS.
pub fn target_url(domain: &str) -> String {
    if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("https://{}", domain)
    }
}

#[async_trait]
impl PageFetcher for BrowserlessFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, domain: &str) -> Result<String, DomainError> {
        let url = target_url(domain);
        match self.render(&url).await {
            Ok(html) => {
                debug!(url = %url, bytes = html.len(), "Page rendered");
                Ok(html)
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Page render failed");
                Ok(String::new())
            }
        }
    }
}
