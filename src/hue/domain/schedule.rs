use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;

// API: https://developers.meethue.com/develop/hue-api/3-schedules-api/
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Schedule {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub command: ScheduleCommand,
    /// Hue time pattern, e.g. `W124/T06:00:00` or `PT00:01:00`.
    #[serde(rename = "localtime")]
    pub local_time: Option<String>,
    pub created: Option<NaiveDateTime>,
    #[serde(rename = "starttime")]
    pub start_time: Option<NaiveDateTime>,
    pub status: Option<ScheduleStatus>,
    #[serde(rename = "autodelete")]
    pub auto_delete: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScheduleCommand {
    pub address: String,
    pub method: String,
    pub body: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Enabled,
    Disabled,
}

impl Schedule {
    pub(crate) fn with_id(mut self, id: String) -> Self {
        self.id = id;
        self
    }
}
