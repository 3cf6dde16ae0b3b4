use crate::hue::client::HueClientError;
use crate::hue::envelope::parse_results;
use crate::hue::results::{HueResult, HueResults};
use crate::hue::target_set::TargetSet;
use crate::hue::transport::{Transport, TransportError};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

/// Group 0 always contains every light known to the bridge.
const BROADCAST_RESOURCE: &str = "groups/0/action";

/// Sends a state change either once to group 0 or to every targeted light, at most `parallel_requests` at a time.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    api_base: String,
    parallel_requests: usize,
    request_timeout: Duration,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn Transport>, api_base: impl Into<String>, parallel_requests: usize, request_timeout: Duration) -> Self {
        Dispatcher {
            transport,
            api_base: api_base.into(),
            parallel_requests: parallel_requests.max(1),
            request_timeout,
        }
    }

    pub fn parallel_requests(&self) -> usize {
        self.parallel_requests
    }

    #[instrument(skip_all, fields(targets = %targets))]
    pub async fn dispatch(&self, command: &str, targets: &TargetSet, cancellation: &CancellationToken) -> Result<HueResults, HueClientError> {
        if command.trim().is_empty() {
            return Err(HueClientError::InvalidArgument("command can not be empty or a blank string".to_string()));
        }
        targets.validate()?;

        let results = match targets {
            TargetSet::Lights(ids) if !ids.is_empty() => self.fan_out(command, ids, cancellation).await,
            _ => self.broadcast(command, cancellation).await,
        };
        Ok(results)
    }

    async fn broadcast(&self, command: &str, cancellation: &CancellationToken) -> HueResults {
        if cancellation.is_cancelled() {
            info!("📨 Broadcasting command... cancelled");
            return HueResults::new();
        }

        debug!("📨 Broadcasting command...");
        let results = self.put(BROADCAST_RESOURCE.to_string(), command).await;
        info!(results = results.len(), errors = results.errors().count(), "📨 Broadcasting command... OK");
        results
    }

    // In-flight calls still complete after cancellation, only new ones are held back
    async fn fan_out(&self, command: &str, ids: &[String], cancellation: &CancellationToken) -> HueResults {
        debug!("📨 Sending command to {} light(s), {} at a time...", ids.len(), self.parallel_requests);
        let per_light = stream::iter(ids)
            .take_until(cancellation.cancelled())
            .map(|id| self.put(format!("lights/{}/state", id), command))
            .buffered(self.parallel_requests)
            .collect::<Vec<HueResults>>()
            .await;

        if per_light.len() < ids.len() {
            warn!("📨 Sending command to {} light(s)... cancelled after {}", ids.len(), per_light.len());
        }

        let results = HueResults::merge(per_light);
        info!(results = results.len(), errors = results.errors().count(), "📨 Sending command to {} light(s)... OK", ids.len());
        results
    }

    async fn put(&self, resource: String, command: &str) -> HueResults {
        let uri = format!("{}{}", self.api_base, resource);
        let address = format!("/{}", resource);

        let response = match timeout(self.request_timeout, self.transport.put(&uri, command)).await {
            Ok(response) => response,
            Err(_) => Err(TransportError::Timeout(self.request_timeout)),
        };

        match response {
            Ok(response) => {
                if !response.status.is_success() {
                    warn!(address, status_code = %response.status, "⚠️ Bridge answered with a non-success status");
                }
                parse_results(&response.body, &address)
            }
            Err(e) => {
                warn!(address, "⚠️ Unable to send the command: {}", e);
                HueResult::transport_failure(address, e.to_string()).into()
            }
        }
    }
}
