mod bridge;
mod client;
mod dispatcher;
pub mod domain;
mod envelope;
mod lights;
mod results;
mod schedules;
mod sensors;
mod target_set;
#[cfg(test)]
mod test_transport;
mod transport;

pub use client::{HueClient, HueClientError};
pub use dispatcher::Dispatcher;
pub use envelope::{RESOURCE_NOT_AVAILABLE, parse_results};
pub use results::{HueResult, HueResults, MALFORMED_RESPONSE, TRANSPORT_FAILURE};
pub use target_set::TargetSet;
pub use transport::{ReqwestTransport, Transport, TransportError, TransportResponse};
