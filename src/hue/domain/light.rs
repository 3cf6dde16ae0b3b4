use crate::hue::domain::light_command::{Alert, Effect};
use serde::Deserialize;

// API: https://developers.meethue.com/develop/hue-api/lights-api/#get-attr-and-state
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Light {
    #[serde(skip)]
    pub id: String,
    pub state: LightState,
    #[serde(rename = "type")]
    pub light_type: String,
    pub name: String,
    #[serde(rename = "modelid")]
    pub model_id: String,
    #[serde(rename = "swversion")]
    pub sw_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LightState {
    pub on: bool,
    pub bri: Option<u8>,
    pub hue: Option<u16>,
    pub sat: Option<u8>,
    pub xy: Option<[f64; 2]>,
    pub ct: Option<u16>,
    pub alert: Option<Alert>,
    pub effect: Option<Effect>,
    #[serde(rename = "colormode")]
    pub color_mode: Option<ColorMode>,
    #[serde(default)]
    pub reachable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Hs,
    Xy,
    Ct,
}

impl Light {
    pub(crate) fn with_id(mut self, id: String) -> Self {
        self.id = id;
        self
    }
}

/// A light found by the last search, only its name is known until it is fully registered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewLight {
    #[serde(skip)]
    pub id: String,
    pub name: String,
}

impl NewLight {
    pub(crate) fn with_id(mut self, id: String) -> Self {
        self.id = id;
        self
    }
}
