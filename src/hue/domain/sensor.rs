use serde::Deserialize;

// API: https://developers.meethue.com/develop/hue-api/5-sensors-api/
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sensor {
    #[serde(skip)]
    pub id: String,
    pub state: SensorState,
    pub config: SensorConfig,
    pub name: String,
    #[serde(rename = "type")]
    pub sensor_type: String,
    #[serde(rename = "modelid")]
    pub model_id: String,
    #[serde(rename = "manufacturername")]
    pub manufacturer_name: Option<String>,
    #[serde(rename = "swversion")]
    pub sw_version: Option<String>,
    #[serde(rename = "uniqueid")]
    pub unique_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SensorState {
    pub daylight: Option<bool>,
    #[serde(rename = "lastupdated")]
    pub last_updated: Option<String>, // "none" until the first update
    pub presence: Option<bool>,
    #[serde(rename = "buttonevent")]
    pub button_event: Option<i32>,
    pub status: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SensorConfig {
    pub on: Option<bool>,
    pub long: Option<String>,
    pub lat: Option<String>,
    #[serde(rename = "sunriseoffset")]
    pub sunrise_offset: Option<i32>,
    #[serde(rename = "sunsetoffset")]
    pub sunset_offset: Option<i32>,
    pub url: Option<String>,
    pub reachable: Option<bool>,
    pub battery: Option<u8>,
}

impl Sensor {
    pub(crate) fn with_id(mut self, id: String) -> Self {
        self.id = id;
        self
    }
}
