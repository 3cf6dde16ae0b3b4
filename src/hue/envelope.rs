use crate::hue::client::HueClientError;
use crate::hue::results::{HueResult, HueResults};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Bridge error type for a resource that does not exist.
pub const RESOURCE_NOT_AVAILABLE: i64 = 3;

// API: https://developers.meethue.com/develop/hue-api/error-messages/
#[derive(Debug, Deserialize)]
struct EnvelopeItem {
    success: Option<Value>,
    error: Option<BridgeError>,
}

#[derive(Debug, Deserialize)]
struct BridgeError {
    #[serde(rename = "type")]
    code: i64,
    address: String,
    description: String,
}

/// `resource` addresses the failure reported for a body that is not an array of `success`/`error` objects.
pub fn parse_results(body: &str, resource: &str) -> HueResults {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(items)) => parse_items(items, resource),
        Ok(other) => {
            warn!(resource, "⚠️ Expected an array of results, got: {}", other);
            HueResult::malformed_response(resource, format!("expected an array of results, got: {}", other)).into()
        }
        Err(e) => {
            warn!(resource, "⚠️ Response is not valid JSON: {}", e);
            HueResult::malformed_response(resource, format!("response is not valid JSON: {}", e)).into()
        }
    }
}

fn parse_items(items: Vec<Value>, resource: &str) -> HueResults {
    let mut results = HueResults::new();
    for item in items {
        let envelope = match serde_json::from_value::<EnvelopeItem>(item) {
            Ok(envelope) => envelope,
            Err(e) => {
                results.push(HueResult::malformed_response(resource, format!("unexpected result entry: {}", e)));
                continue;
            }
        };

        match envelope.success {
            Some(Value::Object(success)) => {
                for (address, value) in success {
                    results.push(HueResult::success(address, value));
                }
            }
            // Deletions answer with a plain message, e.g. "/config/whitelist/abc deleted"
            Some(message) => results.push(HueResult::success(resource, message)),
            None => {}
        }

        if let Some(error) = envelope.error {
            results.push(HueResult::failure(error.code, error.address, error.description));
        }
    }

    debug!("Parsed {} result(s)", results.len());
    results
}

pub fn parse_entity<T: DeserializeOwned>(body: &str) -> Result<Option<T>, HueClientError> {
    match serde_json::from_str::<Value>(body)? {
        Value::Array(items) => match first_failure(items, "")? {
            (RESOURCE_NOT_AVAILABLE, _, _) => Ok(None),
            (code, address, description) => Err(HueClientError::Bridge { code, address, description }),
        },
        value => Ok(Some(serde_json::from_value(value)?)),
    }
}

// Keys in `skip` are metadata such as "lastscan", not resources
pub fn parse_collection<T: DeserializeOwned>(body: &str, skip: &[&str]) -> Result<Vec<(String, T)>, HueClientError> {
    match serde_json::from_str::<Value>(body)? {
        Value::Object(map) => map
            .into_iter()
            .filter(|(key, _)| !skip.contains(&key.as_str()))
            .map(|(key, value)| -> Result<(String, T), HueClientError> { Ok((key, serde_json::from_value(value)?)) })
            .collect(),
        Value::Array(items) => {
            let (code, address, description) = first_failure(items, "")?;
            Err(HueClientError::Bridge { code, address, description })
        }
        other => Err(HueClientError::UnexpectedResponse(format!("expected an object, got: {}", other))),
    }
}

fn first_failure(items: Vec<Value>, resource: &str) -> Result<(i64, String, String), HueClientError> {
    parse_items(items, resource)
        .into_iter()
        .find_map(|result| match result {
            HueResult::Failure { code, address, description } => Some((code, address, description)),
            HueResult::Success { .. } => None,
        })
        .ok_or_else(|| HueClientError::UnexpectedResponse("expected an error entry".to_string()))
}
