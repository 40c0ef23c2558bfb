mod wire;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::config::ClientConfig;
use crate::hierarchy::{HierarchyError, HierarchySnapshot};

/// Errors surfaced by the hierarchy fetch. There is no retry here; a failed
/// fetch is the caller's signal to request again.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, timeout, or TLS failure.
    #[error("hierarchy request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx HTTP response.
    #[error("hierarchy endpoint returned {status}")]
    Status { status: StatusCode },
    /// `success: false` envelope; carries the backend's message.
    #[error("{message}")]
    Backend { message: String },
    /// Body was not a well-formed envelope.
    #[error("malformed hierarchy response: {0}")]
    Decode(#[source] serde_json::Error),
    /// `success: true` but no payload.
    #[error("hierarchy response had no data")]
    MissingData,
    /// The fetched collections violate a hierarchy invariant.
    #[error(transparent)]
    Invariant(#[from] HierarchyError),
}

/// Blocking client for the hierarchy endpoint.
pub struct HierarchyClient {
    http: Client,
    base_url: String,
}

impl HierarchyClient {
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(Policy::limited(10))
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    /// One logical request retrieving both hierarchy collections for a state,
    /// optionally restricted to a party's configured levels.
    pub fn fetch(&self, state_id: u64, party_id: Option<u64>) -> Result<HierarchySnapshot, FetchError> {
        let url = format!("{}/api/v1/hierarchy", self.base_url);
        let mut request = self.http.get(&url).query(&[("stateId", state_id)]);
        if let Some(party_id) = party_id {
            request = request.query(&[("partyId", party_id)]);
        }

        debug!(state_id, ?party_id, "GET {url}");
        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        decode_snapshot(&response.text()?)
    }
}

/// Decode one envelope body into a snapshot. Split out from the network call
/// so the envelope handling is testable without a live endpoint.
pub fn decode_snapshot(body: &str) -> Result<HierarchySnapshot, FetchError> {
    let envelope: wire::Envelope = serde_json::from_str(body).map_err(FetchError::Decode)?;
    if !envelope.success {
        let message = envelope
            .message
            .unwrap_or_else(|| "hierarchy request failed".to_string());
        return Err(FetchError::Backend { message });
    }
    let payload = envelope.data.ok_or(FetchError::MissingData)?;
    Ok(wire::snapshot_from_payload(payload)?)
}
