use crate::hue::client::{HueClient, HueClientError, ensure_success};
use crate::hue::domain::Schedule;
use crate::hue::envelope::{parse_collection, parse_entity};
use tracing::{info, instrument};

impl HueClient {
    #[instrument(skip(self))]
    pub async fn get_schedules(&self) -> Result<Vec<Schedule>, HueClientError> {
        let response = self.transport().get(&self.uri("schedules")).await?;
        let schedules = parse_collection::<Schedule>(&ensure_success(response)?, &[])?
            .into_iter()
            .map(|(id, schedule)| schedule.with_id(id))
            .collect::<Vec<_>>();
        info!("🕗 Retrieving schedules... OK, {} found", schedules.len());

        Ok(schedules)
    }

    /// Returns `None` when the bridge does not know the schedule.
    #[instrument(skip(self))]
    pub async fn get_schedule(&self, id: &str) -> Result<Option<Schedule>, HueClientError> {
        Self::ensure_id(id)?;

        let response = self.transport().get(&self.uri(&format!("schedules/{}", id))).await?;
        Ok(parse_entity::<Schedule>(&ensure_success(response)?)?.map(|schedule| schedule.with_id(id.to_string())))
    }
}
