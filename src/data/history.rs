//! Examination history processing for the monitor view.
//!
//! Transforms the raw wire records into display-ready data: a parsed
//! record per examination plus the derived headline fields (latest status,
//! response time, 24h uptime, last-checked time).

use time::OffsetDateTime;

use super::stats;
use crate::api::types::Examination;

/// Outcome of a single examination, used to color the history strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Status 200.
    Up,
    /// Status 500.
    Down,
    /// Any other status code.
    Unknown,
}

impl Outcome {
    /// Classify a status code.
    pub fn from_status(status_code: u16) -> Self {
        match status_code {
            200 => Outcome::Up,
            500 => Outcome::Down,
            _ => Outcome::Unknown,
        }
    }
}

/// One parsed examination.
///
/// `time` is `None` when the upstream timestamp could not be parsed; such
/// records still occupy a history-strip cell but never fall inside the
/// uptime window.
#[derive(Debug, Clone)]
pub struct ExaminationRecord {
    pub status_code: u16,
    pub outcome: Outcome,
    pub response_time: String,
    pub time: Option<OffsetDateTime>,
}

impl ExaminationRecord {
    fn from_wire(wire: &Examination) -> Self {
        Self {
            status_code: wire.status_code,
            outcome: Outcome::from_status(wire.status_code),
            response_time: wire.response_time.clone(),
            time: stats::parse_examination_time(&wire.examination_time),
        }
    }
}

/// Display-ready examination history for one domain.
///
/// The derived fields are `None` when there is nothing to derive them
/// from; the monitor view renders its not-available placeholder then.
#[derive(Debug, Clone)]
pub struct DomainHistory {
    /// All examinations, in the order the API returned them.
    pub records: Vec<ExaminationRecord>,
    /// Status code of the latest examination.
    pub latest_status: Option<u16>,
    /// Response time of the latest examination, in formatted milliseconds.
    pub response_time_ms: Option<String>,
    /// Uptime percentage over the trailing 24 hours.
    pub uptime_24h: Option<String>,
    /// Local-time display of the latest examination's timestamp.
    pub last_checked: Option<String>,
}

impl DomainHistory {
    /// Build the display history from wire records.
    ///
    /// `now` anchors the 24-hour uptime window. The latest examination is
    /// the last element of the sequence as returned.
    pub fn from_wire(examinations: &[Examination], now: OffsetDateTime) -> Self {
        let records: Vec<ExaminationRecord> =
            examinations.iter().map(ExaminationRecord::from_wire).collect();

        let latest = records.last();
        let latest_status = latest.map(|r| r.status_code);
        let response_time_ms = latest.and_then(|r| stats::iso_seconds_to_ms(&r.response_time).ok());
        let last_checked = latest
            .and_then(|r| r.time)
            .map(|t| stats::format_timestamp(stats::to_local(t)));
        let uptime_24h = stats::uptime_24h(&records, now);

        Self {
            records,
            latest_status,
            response_time_ms,
            uptime_24h,
            last_checked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn wire(status_code: u16, response_time: &str, examination_time: &str) -> Examination {
        Examination {
            domain_id: 1,
            status_code,
            response_time: response_time.to_string(),
            examination_time: examination_time.to_string(),
        }
    }

    #[test]
    fn test_outcome_is_three_way() {
        assert_eq!(Outcome::from_status(200), Outcome::Up);
        assert_eq!(Outcome::from_status(500), Outcome::Down);
        assert_eq!(Outcome::from_status(404), Outcome::Unknown);
        assert_eq!(Outcome::from_status(301), Outcome::Unknown);
    }

    #[test]
    fn test_history_derives_from_latest_record() {
        let now = datetime!(2026-01-02 12:00:00 UTC);
        let examinations = vec![
            wire(200, "PT0.123S", "2026-01-02T10:00:00Z"),
            wire(200, "PT0.456S", "2026-01-02T11:00:00Z"),
        ];

        let history = DomainHistory::from_wire(&examinations, now);

        assert_eq!(history.records.len(), 2);
        assert_eq!(history.latest_status, Some(200));
        assert_eq!(history.response_time_ms, Some("456.000".to_string()));
        assert_eq!(history.uptime_24h, Some("100.00".to_string()));
        assert!(history.last_checked.is_some());
    }

    #[test]
    fn test_history_preserves_record_order() {
        let now = datetime!(2026-01-02 12:00:00 UTC);
        let examinations = vec![
            wire(500, "PT0.1S", "2026-01-02T10:00:00Z"),
            wire(404, "PT0.1S", "2026-01-02T10:05:00Z"),
            wire(200, "PT0.1S", "2026-01-02T10:10:00Z"),
        ];

        let history = DomainHistory::from_wire(&examinations, now);

        let outcomes: Vec<Outcome> = history.records.iter().map(|r| r.outcome).collect();
        assert_eq!(outcomes, vec![Outcome::Down, Outcome::Unknown, Outcome::Up]);
    }

    #[test]
    fn test_empty_history_has_no_derived_fields() {
        let now = datetime!(2026-01-02 12:00:00 UTC);
        let history = DomainHistory::from_wire(&[], now);

        assert!(history.records.is_empty());
        assert_eq!(history.latest_status, None);
        assert_eq!(history.response_time_ms, None);
        assert_eq!(history.uptime_24h, None);
        assert_eq!(history.last_checked, None);
    }

    #[test]
    fn test_malformed_response_time_falls_back() {
        let now = datetime!(2026-01-02 12:00:00 UTC);
        let examinations = vec![wire(200, "0.456", "2026-01-02T11:00:00Z")];

        let history = DomainHistory::from_wire(&examinations, now);

        assert_eq!(history.latest_status, Some(200));
        assert_eq!(history.response_time_ms, None);
    }
}
