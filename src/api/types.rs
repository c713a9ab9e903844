//! Wire types for the domain-health API.
//!
//! These types match the JSON produced by the external service that runs
//! the actual health checks. They are kept as close to the wire as
//! possible; parsing of embedded strings happens in [`crate::data`].

use serde::{Deserialize, Serialize};

/// One monitored domain, as returned by `GET /domains`.
///
/// The server attaches more fields; only the name is used here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainRecord {
    pub domain: String,
}

/// One health-check result for a domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Examination {
    pub domain_id: i64,

    /// HTTP-like status code observed by the prober (e.g. 200 or 500).
    pub status_code: u16,

    /// ISO-8601 duration of the form `PT<seconds>S`.
    pub response_time: String,

    /// ISO-8601 timestamp; may carry an offset or be naive (read as UTC).
    pub examination_time: String,
}

/// Response body of `GET /examinations/{domain}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExaminationResponse {
    pub examinations: Vec<Examination>,
}

/// Request body of `POST /add_domain`.
#[derive(Debug, Clone, Serialize)]
pub struct AddDomainRequest {
    pub domain: String,
}

/// Error body the API attaches to non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
