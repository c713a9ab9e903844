//! API client abstraction for the domain-health service.
//!
//! This module provides a trait-based abstraction over the external HTTP
//! API so that the views can be driven by test doubles instead of a live
//! server. Requests are fire-and-forget: issuing one never blocks the TUI
//! loop, and the outcome arrives later through [`ApiClient::poll`].

mod error;
mod http;
pub mod types;

pub use error::ApiError;
pub use http::HttpClient;

use std::fmt::Debug;

use types::{DomainRecord, ExaminationResponse};

/// A resolved request, tagged with the generation it answers.
///
/// The application drops events whose `request_id` is not the current
/// generation: they belong to a view that has since been torn down.
#[derive(Debug)]
pub struct ApiEvent {
    pub request_id: u64,
    pub response: ApiResponse,
}

/// The payload of a resolved request.
#[derive(Debug)]
pub enum ApiResponse {
    /// Outcome of a `fetch_domains` request.
    Domains(Result<Vec<DomainRecord>, ApiError>),
    /// Outcome of an `add_domain` request.
    DomainAdded(Result<(), ApiError>),
    /// Outcome of a `fetch_examinations` request.
    Examinations(Result<ExaminationResponse, ApiError>),
}

/// Capability for talking to the domain-health API.
///
/// Each `fetch_*`/`add_*` call issues exactly one request; there is no
/// retry or de-duplication at this layer. Implementations must make
/// `poll` non-blocking.
pub trait ApiClient: Send + Debug {
    /// Request the set of monitored domains.
    fn fetch_domains(&mut self, request_id: u64);

    /// Request creation of a new monitored domain.
    fn add_domain(&mut self, request_id: u64, domain: String);

    /// Request the examination history for one domain.
    fn fetch_examinations(&mut self, request_id: u64, domain: String);

    /// Poll for a resolved request.
    ///
    /// Returns `Some(event)` when a request has resolved, `None` otherwise.
    fn poll(&mut self) -> Option<ApiEvent>;

    /// Human-readable description of the backing endpoint.
    ///
    /// Shown in the TUI header bar.
    fn description(&self) -> &str;
}
