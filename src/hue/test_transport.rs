use crate::hue::transport::{Transport, TransportError, TransportResponse};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub const API_BASE: &str = "http://bridge/api/key/";

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub resource: String,
    pub body: Option<String>,
}

#[derive(Debug)]
enum Reply {
    Body(String),
    Fail(String),
    Hang,
}

/// In-memory bridge that records every call and tracks how many were in flight at once.
///
/// Unless configured otherwise a resource answers with `[{"success":{"<resource>":true}}]`.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    replies: HashMap<String, Reply>,
    delays: HashMap<String, Duration>,
    default_delay: Option<Duration>,
    cancel_on_call: Option<CancellationToken>,
    calls: Mutex<Vec<Call>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl RecordingTransport {
    pub fn new() -> Self {
        RecordingTransport::default()
    }

    pub fn reply(mut self, resource: &str, body: &str) -> Self {
        self.replies.insert(resource.to_string(), Reply::Body(body.to_string()));
        self
    }

    pub fn fail(mut self, resource: &str, message: &str) -> Self {
        self.replies.insert(resource.to_string(), Reply::Fail(message.to_string()));
        self
    }

    pub fn hang(mut self, resource: &str) -> Self {
        self.replies.insert(resource.to_string(), Reply::Hang);
        self
    }

    pub fn delay(mut self, resource: &str, delay: Duration) -> Self {
        self.delays.insert(resource.to_string(), delay);
        self
    }

    pub fn delay_all(mut self, delay: Duration) -> Self {
        self.default_delay = Some(delay);
        self
    }

    pub fn cancel_on_call(mut self, token: CancellationToken) -> Self {
        self.cancel_on_call = Some(token);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn respond(&self, method: &'static str, uri: &str, body: Option<&str>) -> Result<TransportResponse, TransportError> {
        let resource = uri.strip_prefix(API_BASE).map(|r| format!("/{}", r)).unwrap_or_else(|| uri.to_string());
        self.calls.lock().unwrap().push(Call {
            method,
            resource: resource.clone(),
            body: body.map(str::to_string),
        });

        if let Some(token) = &self.cancel_on_call {
            token.cancel();
        }

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(&resource).copied().or(self.default_delay) {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.replies.get(&resource) {
            Some(Reply::Body(body)) => Ok(TransportResponse {
                status: StatusCode::OK,
                body: body.clone(),
            }),
            Some(Reply::Fail(message)) => Err(TransportError::Unavailable(message.clone())),
            Some(Reply::Hang) => {
                futures::future::pending::<()>().await;
                unreachable!()
            }
            None => Ok(TransportResponse {
                status: StatusCode::OK,
                body: format!(r#"[{{"success":{{"{}":true}}}}]"#, resource),
            }),
        }
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, uri: &str) -> Result<TransportResponse, TransportError> {
        self.respond("GET", uri, None).await
    }

    async fn put(&self, uri: &str, body: &str) -> Result<TransportResponse, TransportError> {
        self.respond("PUT", uri, Some(body)).await
    }

    async fn post(&self, uri: &str, body: Option<&str>) -> Result<TransportResponse, TransportError> {
        self.respond("POST", uri, body).await
    }

    async fn delete(&self, uri: &str) -> Result<TransportResponse, TransportError> {
        self.respond("DELETE", uri, None).await
    }
}
