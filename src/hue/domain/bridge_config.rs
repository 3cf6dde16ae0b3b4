use crate::hue::domain::{Light, Schedule, Sensor};
use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// API: https://developers.meethue.com/develop/hue-api/7-configuration-api/
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BridgeConfig {
    pub name: String,
    #[serde(rename = "zigbeechannel")]
    pub zigbee_channel: Option<u8>,
    pub mac: Option<String>,
    pub dhcp: Option<bool>,
    #[serde(rename = "ipaddress")]
    pub ip_address: Option<String>,
    pub netmask: Option<String>,
    pub gateway: Option<String>,
    #[serde(rename = "proxyaddress")]
    pub proxy_address: Option<String>,
    #[serde(rename = "proxyport")]
    pub proxy_port: Option<u16>,
    #[serde(rename = "UTC")]
    pub utc: Option<NaiveDateTime>,
    #[serde(rename = "localtime")]
    pub local_time: Option<NaiveDateTime>,
    pub timezone: Option<String>,
    #[serde(default)]
    pub whitelist: IndexMap<String, WhiteListEntry>,
    #[serde(rename = "swversion")]
    pub sw_version: Option<String>,
    #[serde(rename = "apiversion")]
    pub api_version: Option<String>,
    #[serde(rename = "linkbutton")]
    pub link_button: Option<bool>,
    #[serde(rename = "portalservices")]
    pub portal_services: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WhiteListEntry {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    #[serde(rename = "create date")]
    pub create_date: Option<NaiveDateTime>,
    #[serde(rename = "last use date")]
    pub last_use_date: Option<NaiveDateTime>,
}

/// The writable subset of the bridge configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BridgeConfigUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "proxyaddress", skip_serializing_if = "Option::is_none")]
    pub proxy_address: Option<String>,
    #[serde(rename = "proxyport", skip_serializing_if = "Option::is_none")]
    pub proxy_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(rename = "linkbutton", skip_serializing_if = "Option::is_none")]
    pub link_button: Option<bool>,
    #[serde(rename = "zigbeechannel", skip_serializing_if = "Option::is_none")]
    pub zigbee_channel: Option<u8>,
}

/// The full bridge datastore as returned by `GET /api/<key>`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Bridge {
    #[serde(default)]
    pub lights: IndexMap<String, Light>,
    pub config: BridgeConfig,
    #[serde(default)]
    pub schedules: IndexMap<String, Schedule>,
    #[serde(default)]
    pub sensors: IndexMap<String, Sensor>,
}

impl Bridge {
    /// Copies the datastore keys into the `id` fields of the contained resources.
    pub(crate) fn assign_ids(mut self) -> Self {
        for (id, light) in self.lights.iter_mut() {
            light.id.clone_from(id);
        }
        for (id, schedule) in self.schedules.iter_mut() {
            schedule.id.clone_from(id);
        }
        for (id, sensor) in self.sensors.iter_mut() {
            sensor.id.clone_from(id);
        }
        for (id, entry) in self.config.whitelist.iter_mut() {
            entry.id.clone_from(id);
        }
        self
    }
}
