mod bridge_config;
mod light;
mod light_command;
mod schedule;
mod sensor;

pub use bridge_config::{Bridge, BridgeConfig, BridgeConfigUpdate, WhiteListEntry};
pub use light::{ColorMode, Light, LightState, NewLight};
pub use light_command::{Alert, Effect, LightCommand};
pub use schedule::{Schedule, ScheduleCommand, ScheduleStatus};
pub use sensor::{Sensor, SensorConfig, SensorState};
