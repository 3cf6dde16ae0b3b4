use crate::hue::client::{HueClient, HueClientError, ensure_success};
use crate::hue::domain::{Bridge, BridgeConfig, BridgeConfigUpdate, WhiteListEntry};
use crate::hue::envelope::{RESOURCE_NOT_AVAILABLE, parse_entity, parse_results};
use crate::hue::results::{HueResult, HueResults};
use tracing::{debug, info, instrument, warn};

impl HueClient {
    /// Retrieves the full datastore: lights, schedules, sensors and configuration.
    #[instrument(skip(self))]
    pub async fn get_bridge(&self) -> Result<Bridge, HueClientError> {
        debug!("🌉 Retrieving bridge...");
        let response = self.transport().get(self.api_base()).await?;
        let bridge = parse_entity::<Bridge>(&ensure_success(response)?)?
            .ok_or_else(|| HueClientError::UnexpectedResponse("bridge reported its own datastore as not available".to_string()))?
            .assign_ids();
        info!(lights = bridge.lights.len(), sensors = bridge.sensors.len(), "🌉 Retrieving bridge... OK");

        Ok(bridge)
    }

    #[instrument(skip(self))]
    pub async fn get_config(&self) -> Result<BridgeConfig, HueClientError> {
        let response = self.transport().get(&self.uri("config")).await?;
        let mut config = parse_entity::<BridgeConfig>(&ensure_success(response)?)?
            .ok_or_else(|| HueClientError::UnexpectedResponse("bridge reported its configuration as not available".to_string()))?;

        for (id, entry) in config.whitelist.iter_mut() {
            entry.id.clone_from(id);
        }
        Ok(config)
    }

    #[instrument(skip_all)]
    pub async fn update_bridge_config(&self, update: &BridgeConfigUpdate) -> Result<HueResults, HueClientError> {
        let body = serde_json::to_string(update)?;
        let response = self.transport().put(&self.uri("config"), &body).await?;

        Ok(parse_results(&response.body, "/config"))
    }

    #[instrument(skip(self))]
    pub async fn get_whitelist(&self) -> Result<Vec<WhiteListEntry>, HueClientError> {
        let config = self.get_config().await?;
        Ok(config.whitelist.into_values().collect())
    }

    /// Returns `false` when the entry did not exist.
    #[instrument(skip(self))]
    pub async fn delete_whitelist_entry(&self, entry: &str) -> Result<bool, HueClientError> {
        Self::ensure_id(entry)?;

        let resource = format!("/config/whitelist/{}", entry);
        let response = self.transport().delete(&self.uri(&resource[1..])).await?;
        let results = parse_results(&response.body, &resource);

        match results.into_iter().next() {
            Some(HueResult::Success { .. }) => {
                info!("🌉 Deleted whitelist entry '{}'", entry);
                Ok(true)
            }
            Some(HueResult::Failure { code: RESOURCE_NOT_AVAILABLE, .. }) => {
                warn!("🌉 Whitelist entry '{}' does not exist", entry);
                Ok(false)
            }
            Some(HueResult::Failure { code, description, .. }) if code < 0 => Err(HueClientError::UnexpectedResponse(description)),
            Some(HueResult::Failure { code, address, description }) => Err(HueClientError::Bridge { code, address, description }),
            None => Err(HueClientError::UnexpectedResponse("empty result for whitelist deletion".to_string())),
        }
    }
}
