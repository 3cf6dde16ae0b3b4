use crate::hue::client::{HueClient, HueClientError, ensure_success};
use crate::hue::domain::{Light, NewLight};
use crate::hue::envelope::{parse_collection, parse_entity, parse_results};
use crate::hue::results::HueResults;
use serde_json::json;
use tracing::{debug, info, instrument};

impl HueClient {
    /// Returns `None` when the bridge does not know the light.
    #[instrument(skip(self))]
    pub async fn get_light(&self, id: &str) -> Result<Option<Light>, HueClientError> {
        Self::ensure_id(id)?;

        debug!("💡 Retrieving light '{}'...", id);
        let response = self.transport().get(&self.uri(&format!("lights/{}", id))).await?;
        let light = parse_entity::<Light>(&ensure_success(response)?)?.map(|light| light.with_id(id.to_string()));
        debug!(found = light.is_some(), "💡 Retrieving light '{}'... OK", id);

        Ok(light)
    }

    #[instrument(skip(self))]
    pub async fn get_lights(&self) -> Result<Vec<Light>, HueClientError> {
        debug!("💡 Retrieving lights...");
        let response = self.transport().get(&self.uri("lights")).await?;
        let lights = parse_collection::<Light>(&ensure_success(response)?, &[])?
            .into_iter()
            .map(|(id, light)| light.with_id(id))
            .collect::<Vec<_>>();
        info!("💡 Retrieving lights... OK, {} found", lights.len());

        Ok(lights)
    }

    #[instrument(skip(self))]
    pub async fn set_light_name(&self, id: &str, name: &str) -> Result<HueResults, HueClientError> {
        Self::ensure_id(id)?;

        let resource = format!("lights/{}", id);
        let body = json!({ "name": name }).to_string();
        let response = self.transport().put(&self.uri(&resource), &body).await?;

        Ok(parse_results(&response.body, &format!("/{}", resource)))
    }

    /// Starts a search for new lights, limited to the given serial numbers when provided.
    #[instrument(skip(self))]
    pub async fn search_new_lights(&self, device_ids: Option<&[String]>) -> Result<HueResults, HueClientError> {
        let body = device_ids.map(|ids| json!({ "deviceid": ids }).to_string());
        let response = self.transport().post(&self.uri("lights"), body.as_deref()).await?;

        Ok(parse_results(&response.body, "/lights"))
    }

    /// Lights discovered by the last search, which are forgotten as soon as a new search starts.
    #[instrument(skip(self))]
    pub async fn get_new_lights(&self) -> Result<Vec<NewLight>, HueClientError> {
        let response = self.transport().get(&self.uri("lights/new")).await?;
        let lights = parse_collection::<NewLight>(&ensure_success(response)?, &["lastscan"])?
            .into_iter()
            .map(|(id, light)| light.with_id(id))
            .collect();

        Ok(lights)
    }
}
