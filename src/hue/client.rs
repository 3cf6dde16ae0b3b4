use crate::app_config::HueConfig;
use crate::hue::dispatcher::Dispatcher;
use crate::hue::domain::LightCommand;
use crate::hue::results::HueResults;
use crate::hue::target_set::TargetSet;
use crate::hue::transport::{ReqwestTransport, Transport, TransportError, TransportResponse};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

// Not valid JSON because of the `+`, the bridge reads it as an increment
const NEXT_HUE_COLOR_COMMAND: &str = r#"{"hue":+10000,"sat":255}"#;

/// Client for the v1 REST API of a Hue bridge.
#[derive(Debug, Clone)]
pub struct HueClient {
    api_base: String,
    transport: Arc<dyn Transport>,
    dispatcher: Dispatcher,
}

impl HueClient {
    pub fn new(config: &HueConfig) -> Result<Self, HueClientError> {
        let transport = Arc::new(ReqwestTransport::new(config.request_timeout())?);
        Ok(Self::with_transport(
            config.api_base(),
            transport,
            config.parallel_requests(),
            config.request_timeout(),
        ))
    }

    pub fn with_transport(api_base: impl Into<String>, transport: Arc<dyn Transport>, parallel_requests: usize, request_timeout: Duration) -> Self {
        let api_base = api_base.into();
        let dispatcher = Dispatcher::new(transport.clone(), api_base.clone(), parallel_requests, request_timeout);
        HueClient {
            api_base,
            transport,
            dispatcher,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub async fn send(&self, command: &LightCommand, targets: impl Into<TargetSet>) -> Result<HueResults, HueClientError> {
        self.send_cancellable(command, targets, &CancellationToken::new()).await
    }

    #[instrument(skip_all)]
    pub async fn send_cancellable(
        &self,
        command: &LightCommand,
        targets: impl Into<TargetSet>,
        cancellation: &CancellationToken,
    ) -> Result<HueResults, HueClientError> {
        if command.is_empty() {
            return Err(HueClientError::InvalidArgument("command has no attributes set".to_string()));
        }

        let json = serde_json::to_string(command)?;
        self.send_raw_cancellable(&json, targets, cancellation).await
    }

    /// The command is sent as is, the bridge decides what it accepts.
    pub async fn send_raw(&self, command: &str, targets: impl Into<TargetSet>) -> Result<HueResults, HueClientError> {
        self.send_raw_cancellable(command, targets, &CancellationToken::new()).await
    }

    #[instrument(skip_all)]
    pub async fn send_raw_cancellable(
        &self,
        command: &str,
        targets: impl Into<TargetSet>,
        cancellation: &CancellationToken,
    ) -> Result<HueResults, HueClientError> {
        let targets = targets.into();
        debug!(command, "💡 Sending command to {}", targets);
        self.dispatcher.dispatch(command, &targets, cancellation).await
    }

    pub async fn set_next_hue_color(&self, targets: impl Into<TargetSet>) -> Result<HueResults, HueClientError> {
        self.send_raw(NEXT_HUE_COLOR_COMMAND, targets).await
    }

    pub(crate) fn uri(&self, resource: &str) -> String {
        format!("{}{}", self.api_base, resource)
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    pub(crate) fn ensure_id(id: &str) -> Result<(), HueClientError> {
        if id.trim().is_empty() {
            return Err(HueClientError::InvalidArgument("id can not be empty or a blank string".to_string()));
        }
        Ok(())
    }
}

pub(crate) fn ensure_success(response: TransportResponse) -> Result<String, HueClientError> {
    if response.status.is_success() {
        Ok(response.body)
    } else {
        Err(HueClientError::UnexpectedResponse(format!("status {}: {}", response.status, response.body)))
    }
}

#[derive(Error, Debug)]
pub enum HueClientError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("bridge error {code} for '{address}': {description}")]
    Bridge { code: i64, address: String, description: String },
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
