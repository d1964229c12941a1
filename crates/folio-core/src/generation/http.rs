//! Generation over HTTP

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use super::GenerationProvider;
use crate::error::{FolioError, FolioResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// POSTs an empty JSON body to the generation endpoint.
///
/// Transport errors and non-success statuses are both failures.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: Client,
    url: String,
}

impl HttpProvider {
    pub fn new(url: impl Into<String>) -> FolioResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FolioError::Generation(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl GenerationProvider for HttpProvider {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn generate(&self) -> FolioResult<()> {
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body("{}")
            .send()
            .await
            .map_err(|e| FolioError::Generation(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FolioError::Generation(format!("status {}: {}", status, text)));
        }

        tracing::debug!(url = %self.url, "Generation endpoint responded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one request with `status_line`, returning the raw request text
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/generate-plots", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            // Headers, then the two-byte `{}` body
            while !String::from_utf8_lossy(&request).contains("\r\n\r\n{}") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).into_owned()
        });

        (url, handle)
    }

    #[tokio::test]
    async fn test_server_error_status_is_generation_error() {
        let (url, server) = serve_once("500 Internal Server Error", "boom").await;
        let provider = HttpProvider::new(url).unwrap();

        let err = provider.generate().await.unwrap_err();
        match err {
            FolioError::Generation(msg) => {
                assert!(msg.contains("500"), "message: {}", msg);
                assert!(msg.contains("boom"), "message: {}", msg);
            }
            other => panic!("expected generation error, got {:?}", other),
        }

        let request = server.await.unwrap().to_lowercase();
        assert!(request.starts_with("post /generate-plots"));
        assert!(request.contains("content-type: application/json"));
    }

    #[tokio::test]
    async fn test_success_status_is_ok() {
        let (url, server) = serve_once("200 OK", "{}").await;
        let provider = HttpProvider::new(url).unwrap();

        provider.generate().await.unwrap();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_generation_error() {
        // Port 9 (discard) on localhost is normally closed
        let provider = HttpProvider::new("http://127.0.0.1:9/generate-plots").unwrap();
        let err = provider.generate().await.unwrap_err();
        assert!(matches!(err, FolioError::Generation(_)));
    }

    #[test]
    fn test_url_kept() {
        let provider = HttpProvider::new("http://localhost/generate-plots").unwrap();
        assert_eq!(provider.url(), "http://localhost/generate-plots");
        assert_eq!(provider.name(), "http");
    }
}
