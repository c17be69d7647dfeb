//! Existence probe over HTTP

use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;

use crate::config::DEFAULT_PROBE_TIMEOUT_MS;
use crate::navigate::error::ProbeError;
use crate::navigate::probe::ExistenceProbe;

/// Probes pages with a `HEAD` request against the site origin
pub struct HttpProbe {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProbe {
    /// Creates a new HttpProbe for the site served at `base_url`
    pub fn new(base_url: &str, timeout_ms: u64) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .user_agent("version-selector")
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a new HttpProbe with the default timeout
    pub fn with_default_timeout(base_url: &str) -> Result<Self, ProbeError> {
        Self::new(base_url, DEFAULT_PROBE_TIMEOUT_MS)
    }

    fn absolute_url(&self, url: &str) -> String {
        if url.starts_with('/') {
            format!("{}{}", self.base_url, url)
        } else {
            format!("{}/{}", self.base_url, url)
        }
    }
}

#[async_trait::async_trait]
impl ExistenceProbe for HttpProbe {
    async fn exists(&self, url: &str) -> Result<bool, ProbeError> {
        let url = self.absolute_url(url);
        let response = self.client.head(&url).send().await?;
        let status = response.status();

        debug!("Probe {} returned {}", url, status);

        if status.is_success() {
            return Ok(true);
        }

        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            return Ok(false);
        }

        Err(ProbeError::UnexpectedStatus {
            status: status.as_u16(),
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn exists_returns_true_for_served_page() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("HEAD", "/docs/0.0.3/guide/index.html")
            .with_status(200)
            .create_async()
            .await;

        let probe = HttpProbe::with_default_timeout(&server.url()).unwrap();
        let result = probe.exists("/docs/0.0.3/guide/index.html").await.unwrap();

        mock.assert_async().await;
        assert!(result);
    }

    #[tokio::test]
    async fn exists_returns_false_for_missing_page() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("HEAD", "/docs/0.0.1/guide/index.html")
            .with_status(404)
            .create_async()
            .await;

        let probe = HttpProbe::with_default_timeout(&server.url()).unwrap();
        let result = probe.exists("/docs/0.0.1/guide/index.html").await.unwrap();

        mock.assert_async().await;
        assert!(!result);
    }

    #[tokio::test]
    async fn exists_reports_server_errors() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("HEAD", "/main/index.html")
            .with_status(500)
            .create_async()
            .await;

        let probe = HttpProbe::with_default_timeout(&format!("{}/", server.url())).unwrap();
        let result = probe.exists("main/index.html").await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(ProbeError::UnexpectedStatus { status: 500, .. })
        ));
    }
}
