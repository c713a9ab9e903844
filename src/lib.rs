// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # domwatch
//!
//! A terminal dashboard for monitoring the availability of web domains.
//!
//! The actual health checks are performed by an external HTTP service;
//! this crate is a read/write client over that service. It lists the
//! monitored domains, registers new ones, and shows a single domain's
//! examination history: current status code, response time, 24-hour
//! uptime percentage, and a colored history strip.
//!
//! ## Architecture
//!
//! The crate is organized into five main modules:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(derivation)   │(rendering)   │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │  api    │◀── HttpClient (reqwest) | test doubles        │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, view navigation, and request lifecycle
//! - **[`api`]**: API client abstraction ([`ApiClient`] trait) with the
//!   reqwest-backed [`HttpClient`] and the wire types
//! - **[`data`]**: Derivation of display values - the 24h uptime window,
//!   ISO duration conversion, timestamp formatting, history processing
//! - **[`ui`]**: Terminal rendering using ratatui - domain cards, the
//!   monitor view with its history strip, the add-domain form, themes
//! - **[`config`]**: Resolution of the API base address
//!
//! ## Views
//!
//! - **Domain list**: one card per monitored domain
//! - **Monitor**: status, response time, uptime, and history for a domain
//! - **Add domain**: register a new domain with the health-check service
//!
//! ## Usage
//!
//! ```bash
//! # Dashboard against the default API at http://localhost:8000
//! domwatch
//!
//! # Different API endpoint, straight into one domain's monitor view
//! domwatch --api-base http://monitor.example:9000 --domain example.com
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod ui;

// Re-export main types for convenience
pub use api::{ApiClient, ApiError, ApiEvent, ApiResponse, HttpClient};
pub use app::{App, DomainsState, FormState, MonitorState, Tone, View};
pub use config::Settings;
pub use data::{DomainEntry, DomainHistory, DomainStatus, ExaminationRecord, Outcome};
pub use ui::Theme;
