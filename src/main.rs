use hue_bridge::{AppConfig, HueClient, HueResult, TargetSet};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let Some((command, targets)) = parse_args(std::env::args().skip(1)) else {
        error!("Usage: {} '<json command>' [light id]...", env!("CARGO_PKG_NAME"));
        return Err("missing command argument".into());
    };

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let client = HueClient::new(config.hue())?;
    let results = client.send_raw(&command, targets).await?;

    for result in &results {
        match result {
            HueResult::Success { address, value } => info!("🟢 {} = {}", address, value),
            HueResult::Failure { code, address, description } => warn!(code, "🔴 {}: {}", address, description),
        }
    }
    info!("🔥 Sent command, {} result(s), {} error(s)", results.len(), results.errors().count());

    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Option<(String, TargetSet)> {
    let command = args.next()?;
    Some((command, TargetSet::lights(args)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values.iter().map(|value| value.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn without_arguments_there_is_nothing_to_send() {
        assert_eq!(parse_args(args(&[])), None);
    }

    #[test]
    fn a_command_without_ids_targets_all_lights() {
        assert_eq!(parse_args(args(&[r#"{"on":true}"#])), Some((r#"{"on":true}"#.to_string(), TargetSet::All)));
    }

    #[test]
    fn trailing_arguments_are_light_ids() {
        assert_eq!(
            parse_args(args(&[r#"{"on":false}"#, "3", "1"])),
            Some((r#"{"on":false}"#.to_string(), TargetSet::from(["3", "1"])))
        );
    }
}
