//! Client for the v1 REST API of a Philips Hue bridge.
//!
//! State changes go through [`HueClient::send`] and [`HueClient::send_raw`]: a command without targets is broadcast
//! once to group 0, a command with targets is sent to every light individually with a bounded number of requests in
//! flight. Every bridge answer is normalized into [`HueResults`].

pub mod app_config;
pub mod hue;

pub use app_config::{AppConfig, HueConfig};
pub use hue::domain::{Alert, Effect, LightCommand};
pub use hue::{HueClient, HueClientError, HueResult, HueResults, TargetSet};
pub use tokio_util::sync::CancellationToken;
