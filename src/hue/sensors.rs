use crate::hue::client::{HueClient, HueClientError, ensure_success};
use crate::hue::domain::Sensor;
use crate::hue::envelope::{parse_collection, parse_entity};
use tracing::{info, instrument};

impl HueClient {
    #[instrument(skip(self))]
    pub async fn get_sensors(&self) -> Result<Vec<Sensor>, HueClientError> {
        let response = self.transport().get(&self.uri("sensors")).await?;
        let sensors = parse_collection::<Sensor>(&ensure_success(response)?, &[])?
            .into_iter()
            .map(|(id, sensor)| sensor.with_id(id))
            .collect::<Vec<_>>();
        info!("📡 Retrieving sensors... OK, {} found", sensors.len());

        Ok(sensors)
    }

    /// Returns `None` when the bridge does not know the sensor.
    #[instrument(skip(self))]
    pub async fn get_sensor(&self, id: &str) -> Result<Option<Sensor>, HueClientError> {
        Self::ensure_id(id)?;

        let response = self.transport().get(&self.uri(&format!("sensors/{}", id))).await?;
        Ok(parse_entity::<Sensor>(&ensure_success(response)?)?.map(|sensor| sensor.with_id(id.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use crate::hue::client::{HueClient, HueClientError};
    use crate::hue::test_transport::{API_BASE, RecordingTransport};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::time::Duration;

    fn client(transport: RecordingTransport) -> HueClient {
        HueClient::with_transport(API_BASE, Arc::new(transport), 2, Duration::from_secs(1))
    }

    #[tokio::test]
    async fn get_sensors_maps_every_sensor() -> Result<(), HueClientError> {
        let client = client(RecordingTransport::new().reply("/sensors", include_str!("../../tests/resources/sensors_response.json")));

        let sensors = client.get_sensors().await?;

        assert_eq!(sensors.len(), 2);
        assert_eq!(sensors[0].id, "1");
        assert_eq!(sensors[0].state.daylight, Some(false));
        assert_eq!(sensors[1].sensor_type, "ZGPSwitch");
        assert_eq!(sensors[1].state.button_event, Some(34));
        assert_eq!(sensors[1].config.battery, Some(90));
        Ok(())
    }

    #[tokio::test]
    async fn get_sensor_returns_none_for_an_unknown_sensor() -> Result<(), HueClientError> {
        let client = client(RecordingTransport::new().reply(
            "/sensors/42",
            r#"[{"error":{"type":3,"address":"/sensors/42","description":"resource, /sensors/42, not available"}}]"#,
        ));

        assert_eq!(client.get_sensor("42").await?, None);
        Ok(())
    }
}
