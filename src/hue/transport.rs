use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: String,
}

/// The HTTP capability the client needs from the outside world.
///
/// Implementations must allow many concurrent in-flight calls on a shared instance.
#[async_trait]
pub trait Transport: Debug + Send + Sync {
    async fn get(&self, uri: &str) -> Result<TransportResponse, TransportError>;

    async fn put(&self, uri: &str, body: &str) -> Result<TransportResponse, TransportError>;

    async fn post(&self, uri: &str, body: Option<&str>) -> Result<TransportResponse, TransportError>;

    async fn delete(&self, uri: &str) -> Result<TransportResponse, TransportError>;
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("bridge unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(request_timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(request_timeout).build()?;
        Ok(ReqwestTransport { client })
    }

    pub fn with_client(client: Client) -> Self {
        ReqwestTransport { client }
    }

    async fn read(response: reqwest::Response) -> Result<TransportResponse, TransportError> {
        let status = response.status();
        let body = response.text().await?;
        trace!(status_code = %status, body, "Received response");
        Ok(TransportResponse { status, body })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, uri: &str) -> Result<TransportResponse, TransportError> {
        Self::read(self.client.get(uri).send().await?).await
    }

    async fn put(&self, uri: &str, body: &str) -> Result<TransportResponse, TransportError> {
        // Sent as-is, the bridge accepts payloads that are not strictly valid JSON
        Self::read(self.client.put(uri).body(body.to_owned()).send().await?).await
    }

    async fn post(&self, uri: &str, body: Option<&str>) -> Result<TransportResponse, TransportError> {
        let request = self.client.post(uri);
        let request = match body {
            Some(body) => request.body(body.to_owned()),
            None => request,
        };
        Self::read(request.send().await?).await
    }

    async fn delete(&self, uri: &str) -> Result<TransportResponse, TransportError> {
        Self::read(self.client.delete(uri).send().await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn put_transmits_the_body_verbatim() -> Result<(), TransportError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("PUT", "/api/key/lights/1/state")
            .match_body(Matcher::Exact(r#"{"hue":+10000,"sat":255}"#.to_string()))
            .with_status(200)
            .with_body(r#"[{"success":{"/lights/1/state/hue":10000}}]"#)
            .create_async()
            .await;

        let transport = ReqwestTransport::new(Duration::from_secs(1))?;
        let response = transport
            .put(&format!("{}/api/key/lights/1/state", server.url()), r#"{"hue":+10000,"sat":255}"#)
            .await?;

        mock.assert_async().await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, r#"[{"success":{"/lights/1/state/hue":10000}}]"#);
        Ok(())
    }

    #[tokio::test]
    async fn post_without_body_sends_an_empty_request() -> Result<(), TransportError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/api/key/lights")
            .match_body(Matcher::Exact(String::new()))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let transport = ReqwestTransport::new(Duration::from_secs(1))?;
        let response = transport.post(&format!("{}/api/key/lights", server.url()), None).await?;

        mock.assert_async().await;
        assert_eq!(response.body, "[]");
        Ok(())
    }

    #[tokio::test]
    async fn non_success_status_is_returned_with_its_body() -> Result<(), TransportError> {
        let mut server = mockito::Server::new_async().await;

        server.mock("GET", "/api/key/config").with_status(503).with_body("busy").create_async().await;

        let transport = ReqwestTransport::new(Duration::from_secs(1))?;
        let response = transport.get(&format!("{}/api/key/config", server.url())).await?;

        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.body, "busy");
        Ok(())
    }
}
