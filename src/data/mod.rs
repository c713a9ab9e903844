//! Data models and display derivation.
//!
//! This module turns raw API payloads into the values the views render.
//!
//! ## Submodules
//!
//! - [`domain`]: List-view models ([`DomainEntry`], [`DomainStatus`])
//! - [`history`]: Per-domain examination history with derived display
//!   fields ([`DomainHistory`], [`ExaminationRecord`], [`Outcome`])
//! - [`stats`]: The pure derivation functions (24h uptime, ISO duration
//!   to milliseconds, timestamp parsing and formatting)
//!
//! ## Data Flow
//!
//! ```text
//! ExaminationResponse (raw JSON)
//!        │
//!        ▼
//! DomainHistory::from_wire(records, now)
//!        │
//!        ├──▶ ExaminationRecord (with Outcome, for the history strip)
//!        │
//!        └──▶ derived fields (status, response time, uptime, last checked)
//! ```

pub mod domain;
pub mod history;
pub mod stats;

pub use domain::{DomainEntry, DomainStatus};
pub use history::{DomainHistory, ExaminationRecord, Outcome};
