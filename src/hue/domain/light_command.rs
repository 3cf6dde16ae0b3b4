use serde::{Deserialize, Serialize};

// API: https://developers.meethue.com/develop/hue-api/lights-api/#set-light-state
/// A desired light-state delta. Attributes left at `None` are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LightCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bri: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sat: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xy: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ct: Option<u16>, // mirek, 153..=500
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<Alert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<Effect>,
    #[serde(rename = "transitiontime", skip_serializing_if = "Option::is_none")]
    pub transition_time: Option<u16>, // multiple of 100ms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bri_inc: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sat_inc: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue_inc: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ct_inc: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xy_inc: Option<[f64; 2]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alert {
    None,
    Select,
    LSelect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    None,
    ColorLoop,
}

impl LightCommand {
    pub fn new() -> Self {
        LightCommand::default()
    }

    pub fn turn_on(mut self) -> Self {
        self.on = Some(true);
        self
    }

    pub fn turn_off(mut self) -> Self {
        self.on = Some(false);
        self
    }

    pub fn brightness(mut self, bri: u8) -> Self {
        self.bri = Some(bri);
        self
    }

    pub fn hue(mut self, hue: u16) -> Self {
        self.hue = Some(hue);
        self
    }

    pub fn saturation(mut self, sat: u8) -> Self {
        self.sat = Some(sat);
        self
    }

    pub fn xy(mut self, x: f64, y: f64) -> Self {
        self.xy = Some([x, y]);
        self
    }

    pub fn color_temperature(mut self, mirek: u16) -> Self {
        self.ct = Some(mirek);
        self
    }

    pub fn alert(mut self, alert: Alert) -> Self {
        self.alert = Some(alert);
        self
    }

    pub fn effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn transition_time(mut self, deciseconds: u16) -> Self {
        self.transition_time = Some(deciseconds);
        self
    }

    pub fn brightness_increment(mut self, delta: i16) -> Self {
        self.bri_inc = Some(delta);
        self
    }

    pub fn hue_increment(mut self, delta: i32) -> Self {
        self.hue_inc = Some(delta);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == LightCommand::default()
    }
}
