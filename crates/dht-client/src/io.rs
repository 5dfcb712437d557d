//! HTTP client abstraction for testability
//!
//! The trait is `?Send` because browser fetch futures are not `Send`; the
//! native reqwest implementation and the mock are unaffected.

use async_trait::async_trait;

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Abstraction over HTTP client for dependency injection
#[async_trait(?Send)]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient {
    /// Send a GET request to the given URL
    async fn get(&self, url: &str) -> crate::Result<HttpResponse>;
}

/// Production HTTP client using reqwest
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> crate::Result<HttpResponse> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| crate::DhtError::Http(format!("GET {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| crate::DhtError::Http(format!("Reading response body: {}", e)))?;

        tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

/// Browser HTTP client using the fetch API via gloo-net
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub struct GlooHttpClient;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn get(&self, url: &str) -> crate::Result<HttpResponse> {
        let response = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| crate::DhtError::Http(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| crate::DhtError::Http(format!("Reading response body: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
