//! Display models for the domain list.

/// Reachability indicator shown on a domain card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainStatus {
    #[default]
    Online,
    Offline,
}

/// One entry in the domain list.
#[derive(Debug, Clone)]
pub struct DomainEntry {
    pub name: String,
    pub status: DomainStatus,
    /// Informational note shown under the name; an empty note is omitted
    /// from the card entirely.
    pub note: String,
}

impl DomainEntry {
    /// Create an entry with the default status and note.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DomainStatus::default(),
            note: "in database".to_string(),
        }
    }
}
