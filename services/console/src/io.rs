//! HTTP client abstraction for testability

use async_trait::async_trait;

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Abstraction over HTTP client for dependency injection
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Send a GET request to the given URL
    async fn get(&self, url: &str) -> crate::Result<HttpResponse>;
}

/// Production HTTP client using reqwest
#[derive(Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> crate::Result<HttpResponse> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| crate::ConsoleError::Http(format!("GET {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| crate::ConsoleError::Http(format!("Reading response body: {}", e)))?;

        tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}
