//! Application state and navigation logic.

use std::time::Instant;

use time::OffsetDateTime;
use tracing::{debug, error};

use crate::api::types::{DomainRecord, ExaminationResponse};
use crate::api::{ApiClient, ApiError, ApiResponse};
use crate::data::{DomainEntry, DomainHistory};
use crate::ui::Theme;

/// The current view in the TUI.
///
/// Views take the place of the dashboard's routes: the domain list, a
/// per-domain monitor, and the add-domain form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// All monitored domains.
    Domains,
    /// Examination history for one domain.
    Monitor,
    /// Form for registering a new domain.
    AddDomain,
}

impl View {
    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Domains => "Domains",
            View::Monitor => "Monitor",
            View::AddDomain => "Add Domain",
        }
    }
}

/// Fetch state of the domain list.
///
/// Progresses `Loading` to either `Loaded` or `Failed`, never backwards
/// within one activation.
#[derive(Debug)]
pub enum DomainsState {
    Loading,
    Loaded(Vec<DomainEntry>),
    Failed(String),
}

/// Fetch state of the monitor view.
#[derive(Debug)]
pub enum MonitorState {
    Loading,
    Loaded(DomainHistory),
    Failed(String),
}

/// Tone of the add-domain form's status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

/// State of the add-domain form.
#[derive(Debug, Default)]
pub struct FormState {
    pub input: String,
    pub message: Option<(String, Tone)>,
    /// A submission is awaiting its response; further submits are ignored.
    pub in_flight: bool,
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub current_view: View,
    pub show_help: bool,

    // API access
    client: Box<dyn ApiClient>,
    /// Generation of the most recently issued request. Responses tagged
    /// with an older generation belong to a view that was torn down and
    /// must not resurrect its state.
    active_request: u64,

    // Domain list
    pub domains: DomainsState,
    pub selected_index: usize,

    // Monitor
    pub monitor_domain: Option<String>,
    pub monitor: MonitorState,

    // Add-domain form
    pub form: FormState,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App with the given API client.
    ///
    /// No request is issued until a view is opened.
    pub fn new(client: Box<dyn ApiClient>, theme: Theme) -> Self {
        Self {
            running: true,
            current_view: View::Domains,
            show_help: false,
            client,
            active_request: 0,
            domains: DomainsState::Loading,
            selected_index: 0,
            monitor_domain: None,
            monitor: MonitorState::Loading,
            form: FormState::default(),
            theme,
            status_message: None,
        }
    }

    /// Returns a description of the API endpoint in use.
    pub fn api_description(&self) -> &str {
        self.client.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < std::time::Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    fn next_request(&mut self) -> u64 {
        self.active_request += 1;
        self.active_request
    }

    /// Switch to the domain list and issue its single fetch.
    pub fn open_domains(&mut self) {
        self.current_view = View::Domains;
        self.domains = DomainsState::Loading;
        let id = self.next_request();
        self.client.fetch_domains(id);
    }

    /// Switch to the monitor view for `domain` and issue its single fetch.
    pub fn open_monitor(&mut self, domain: String) {
        self.current_view = View::Monitor;
        self.monitor = MonitorState::Loading;
        self.monitor_domain = Some(domain.clone());
        let id = self.next_request();
        self.client.fetch_examinations(id, domain);
    }

    /// Open the monitor for the domain currently selected in the list.
    pub fn open_selected_monitor(&mut self) {
        if let DomainsState::Loaded(ref entries) = self.domains {
            if let Some(entry) = entries.get(self.selected_index) {
                let name = entry.name.clone();
                self.open_monitor(name);
            }
        }
    }

    /// Open the monitor via the tab bar: the last monitored domain, or the
    /// current list selection when none has been monitored yet.
    pub fn open_monitor_tab(&mut self) {
        if self.current_view == View::Monitor {
            return;
        }
        match self.monitor_domain.clone() {
            Some(domain) => self.open_monitor(domain),
            None => self.open_selected_monitor(),
        }
    }

    /// Switch to the add-domain form. No request is issued until submit.
    pub fn open_add_form(&mut self) {
        self.current_view = View::AddDomain;
        self.form = FormState::default();
    }

    /// Submit the add-domain form.
    ///
    /// Empty or whitespace-only input is rejected before any network call.
    pub fn submit_form(&mut self) {
        if self.form.in_flight {
            return;
        }
        if self.form.input.trim().is_empty() {
            self.form.message = Some(("Please enter a domain.".to_string(), Tone::Error));
            return;
        }
        self.form.in_flight = true;
        self.form.message = None;
        let id = self.next_request();
        // The raw input is submitted; emptiness was checked on the trimmed
        // value above.
        self.client.add_domain(id, self.form.input.clone());
    }

    /// Navigate back towards the domain list.
    pub fn go_back(&mut self) {
        if self.current_view != View::Domains {
            self.open_domains();
        }
    }

    /// Re-issue the fetch for the current view.
    pub fn reload(&mut self) {
        match self.current_view {
            View::Domains => self.open_domains(),
            View::Monitor => {
                if let Some(domain) = self.monitor_domain.clone() {
                    self.open_monitor(domain);
                }
            }
            View::AddDomain => {}
        }
    }

    /// Drain resolved requests from the client and apply them.
    pub fn poll_api(&mut self) {
        while let Some(event) = self.client.poll() {
            if event.request_id != self.active_request {
                debug!(request_id = event.request_id, "dropping stale response");
                continue;
            }
            match event.response {
                ApiResponse::Domains(result) => self.apply_domains(result),
                ApiResponse::DomainAdded(result) => self.apply_domain_added(result),
                ApiResponse::Examinations(result) => self.apply_examinations(result),
            }
        }
    }

    fn apply_domains(&mut self, result: Result<Vec<DomainRecord>, ApiError>) {
        match result {
            Ok(records) => {
                let entries: Vec<DomainEntry> =
                    records.into_iter().map(|r| DomainEntry::new(r.domain)).collect();
                self.selected_index = self.selected_index.min(entries.len().saturating_sub(1));
                self.domains = DomainsState::Loaded(entries);
            }
            Err(err) => {
                let reason = match err {
                    ApiError::Status { .. } => "Failed to fetch domain list".to_string(),
                    ApiError::Transport(reason) => reason,
                };
                self.domains = DomainsState::Failed(reason);
            }
        }
    }

    fn apply_domain_added(&mut self, result: Result<(), ApiError>) {
        self.form.in_flight = false;
        match result {
            Ok(()) => {
                self.form.input.clear();
                self.form.message =
                    Some(("Domain added successfully!".to_string(), Tone::Success));
                self.set_status_message("Domain added successfully!".to_string());
                self.open_domains();
            }
            Err(ApiError::Status { detail, .. }) => {
                let text = detail.unwrap_or_else(|| "Error adding domain".to_string());
                self.form.message = Some((text, Tone::Error));
            }
            Err(ApiError::Transport(_)) => {
                self.form.message =
                    Some(("Failed to connect to server.".to_string(), Tone::Error));
            }
        }
    }

    fn apply_examinations(&mut self, result: Result<ExaminationResponse, ApiError>) {
        match result {
            Ok(response) => {
                let now = OffsetDateTime::now_utc();
                self.monitor =
                    MonitorState::Loaded(DomainHistory::from_wire(&response.examinations, now));
            }
            Err(err) => {
                error!(%err, "examination history fetch failed");
                self.monitor =
                    MonitorState::Failed(format!("Failed to fetch examination history: {}", err));
            }
        }
    }

    /// Move selection down by one item.
    pub fn select_next(&mut self) {
        self.select_next_n(1);
    }

    /// Move selection up by one item.
    pub fn select_prev(&mut self) {
        self.select_prev_n(1);
    }

    /// Move selection down by n items.
    pub fn select_next_n(&mut self, n: usize) {
        if let DomainsState::Loaded(ref entries) = self.domains {
            let max = entries.len().saturating_sub(1);
            self.selected_index = (self.selected_index + n).min(max);
        }
    }

    /// Move selection up by n items.
    pub fn select_prev_n(&mut self, n: usize) {
        self.selected_index = self.selected_index.saturating_sub(n);
    }

    /// Jump to the first item in the list.
    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Jump to the last item in the list.
    pub fn select_last(&mut self) {
        if let DomainsState::Loaded(ref entries) = self.domains {
            self.selected_index = entries.len().saturating_sub(1);
        }
    }

    /// Append a character to the form input.
    pub fn form_push(&mut self, c: char) {
        self.form.input.push(c);
    }

    /// Remove the last character from the form input.
    pub fn form_pop(&mut self) {
        self.form.input.pop();
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use time::format_description::well_known::Rfc3339;
    use time::Duration;

    use crate::api::types::Examination;
    use crate::api::ApiEvent;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Issued {
        Domains(u64),
        Add(u64, String),
        Examinations(u64, String),
    }

    #[derive(Debug, Default)]
    struct Shared {
        issued: Vec<Issued>,
        queue: VecDeque<ApiEvent>,
    }

    /// Scripted test double: records issued requests and replays queued
    /// responses.
    #[derive(Debug)]
    struct ScriptedClient(Arc<Mutex<Shared>>);

    impl ApiClient for ScriptedClient {
        fn fetch_domains(&mut self, request_id: u64) {
            self.0.lock().unwrap().issued.push(Issued::Domains(request_id));
        }

        fn add_domain(&mut self, request_id: u64, domain: String) {
            self.0.lock().unwrap().issued.push(Issued::Add(request_id, domain));
        }

        fn fetch_examinations(&mut self, request_id: u64, domain: String) {
            self.0.lock().unwrap().issued.push(Issued::Examinations(request_id, domain));
        }

        fn poll(&mut self) -> Option<ApiEvent> {
            self.0.lock().unwrap().queue.pop_front()
        }

        fn description(&self) -> &str {
            "scripted"
        }
    }

    fn test_app() -> (App, Arc<Mutex<Shared>>) {
        let shared = Arc::new(Mutex::new(Shared::default()));
        let client = ScriptedClient(shared.clone());
        let app = App::new(Box::new(client), Theme::dark());
        (app, shared)
    }

    fn deliver(app: &mut App, shared: &Arc<Mutex<Shared>>, request_id: u64, response: ApiResponse) {
        shared.lock().unwrap().queue.push_back(ApiEvent {
            request_id,
            response,
        });
        app.poll_api();
    }

    fn domain_records(names: &[&str]) -> Vec<DomainRecord> {
        names.iter().map(|name| DomainRecord { domain: name.to_string() }).collect()
    }

    fn examination(status_code: u16, response_time: &str, age: Duration) -> Examination {
        let time = (OffsetDateTime::now_utc() - age).format(&Rfc3339).unwrap();
        Examination {
            domain_id: 1,
            status_code,
            response_time: response_time.to_string(),
            examination_time: time,
        }
    }

    #[test]
    fn test_domain_list_success_keeps_order() {
        let (mut app, shared) = test_app();
        app.open_domains();

        deliver(
            &mut app,
            &shared,
            1,
            ApiResponse::Domains(Ok(domain_records(&["example.com", "test.com"]))),
        );

        let DomainsState::Loaded(ref entries) = app.domains else {
            panic!("expected loaded state, got {:?}", app.domains);
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "example.com");
        assert_eq!(entries[1].name, "test.com");
    }

    #[test]
    fn test_domain_list_empty_is_loaded_with_no_entries() {
        let (mut app, shared) = test_app();
        app.open_domains();

        deliver(&mut app, &shared, 1, ApiResponse::Domains(Ok(vec![])));

        let DomainsState::Loaded(ref entries) = app.domains else {
            panic!("expected loaded state, got {:?}", app.domains);
        };
        assert!(entries.is_empty());
    }

    #[test]
    fn test_domain_list_http_failure() {
        let (mut app, shared) = test_app();
        app.open_domains();

        deliver(
            &mut app,
            &shared,
            1,
            ApiResponse::Domains(Err(ApiError::Status {
                status: 503,
                detail: None,
            })),
        );

        let DomainsState::Failed(ref reason) = app.domains else {
            panic!("expected failed state, got {:?}", app.domains);
        };
        assert!(reason.contains("Failed to fetch domain list"));
    }

    #[test]
    fn test_empty_submit_blocks_network_call() {
        let (mut app, shared) = test_app();
        app.open_add_form();
        app.form.input = "   ".to_string();

        app.submit_form();

        assert!(shared.lock().unwrap().issued.is_empty());
        assert_eq!(
            app.form.message,
            Some(("Please enter a domain.".to_string(), Tone::Error))
        );
    }

    #[test]
    fn test_submit_success_navigates_to_list() {
        let (mut app, shared) = test_app();
        app.open_add_form();
        app.form.input = "http://example.com".to_string();

        app.submit_form();
        assert_eq!(
            shared.lock().unwrap().issued,
            vec![Issued::Add(1, "http://example.com".to_string())]
        );

        deliver(&mut app, &shared, 1, ApiResponse::DomainAdded(Ok(())));

        assert_eq!(app.current_view, View::Domains);
        assert!(app.form.input.is_empty());
        assert_eq!(
            app.form.message,
            Some(("Domain added successfully!".to_string(), Tone::Success))
        );
        // Returning to the list re-issues its fetch.
        assert_eq!(shared.lock().unwrap().issued.last(), Some(&Issued::Domains(2)));
    }

    #[test]
    fn test_submit_failure_shows_server_detail() {
        let (mut app, shared) = test_app();
        app.open_add_form();
        app.form.input = "http://example.com".to_string();
        app.submit_form();

        deliver(
            &mut app,
            &shared,
            1,
            ApiResponse::DomainAdded(Err(ApiError::Status {
                status: 400,
                detail: Some("Domain already exists".to_string()),
            })),
        );

        assert_eq!(app.current_view, View::AddDomain);
        assert_eq!(app.form.input, "http://example.com");
        assert_eq!(
            app.form.message,
            Some(("Domain already exists".to_string(), Tone::Error))
        );
    }

    #[test]
    fn test_submit_failure_without_detail_is_generic() {
        let (mut app, shared) = test_app();
        app.open_add_form();
        app.form.input = "http://example.com".to_string();
        app.submit_form();

        deliver(
            &mut app,
            &shared,
            1,
            ApiResponse::DomainAdded(Err(ApiError::Status {
                status: 500,
                detail: None,
            })),
        );

        assert_eq!(
            app.form.message,
            Some(("Error adding domain".to_string(), Tone::Error))
        );
    }

    #[test]
    fn test_submit_transport_failure() {
        let (mut app, shared) = test_app();
        app.open_add_form();
        app.form.input = "http://example.com".to_string();
        app.submit_form();

        deliver(
            &mut app,
            &shared,
            1,
            ApiResponse::DomainAdded(Err(ApiError::Transport("connection refused".to_string()))),
        );

        assert_eq!(
            app.form.message,
            Some(("Failed to connect to server.".to_string(), Tone::Error))
        );
    }

    #[test]
    fn test_submit_while_in_flight_is_ignored() {
        let (mut app, shared) = test_app();
        app.open_add_form();
        app.form.input = "http://example.com".to_string();

        app.submit_form();
        app.submit_form();

        assert_eq!(shared.lock().unwrap().issued.len(), 1);
    }

    #[test]
    fn test_monitor_derives_display_fields() {
        let (mut app, shared) = test_app();
        app.open_monitor("example.com".to_string());
        assert_eq!(
            shared.lock().unwrap().issued,
            vec![Issued::Examinations(1, "example.com".to_string())]
        );

        let response = ExaminationResponse {
            examinations: vec![
                examination(200, "PT0.123S", Duration::hours(2)),
                examination(200, "PT0.456S", Duration::hours(1)),
            ],
        };
        deliver(&mut app, &shared, 1, ApiResponse::Examinations(Ok(response)));

        let MonitorState::Loaded(ref history) = app.monitor else {
            panic!("expected loaded state");
        };
        assert_eq!(history.latest_status, Some(200));
        assert_eq!(history.response_time_ms, Some("456.000".to_string()));
        assert_eq!(history.uptime_24h, Some("100.00".to_string()));
        assert_eq!(history.records.len(), 2);
    }

    #[test]
    fn test_monitor_empty_history_falls_back() {
        let (mut app, shared) = test_app();
        app.open_monitor("example.com".to_string());

        deliver(
            &mut app,
            &shared,
            1,
            ApiResponse::Examinations(Ok(ExaminationResponse::default())),
        );

        let MonitorState::Loaded(ref history) = app.monitor else {
            panic!("expected loaded state");
        };
        assert!(history.records.is_empty());
        assert_eq!(history.latest_status, None);
        assert_eq!(history.response_time_ms, None);
        assert_eq!(history.uptime_24h, None);
        assert_eq!(history.last_checked, None);
    }

    #[test]
    fn test_monitor_failure_is_surfaced() {
        let (mut app, shared) = test_app();
        app.open_monitor("example.com".to_string());

        deliver(
            &mut app,
            &shared,
            1,
            ApiResponse::Examinations(Err(ApiError::Transport("timed out".to_string()))),
        );

        let MonitorState::Failed(ref reason) = app.monitor else {
            panic!("expected failed state, got {:?}", app.monitor);
        };
        assert!(reason.contains("Failed to fetch examination history"));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let (mut app, shared) = test_app();
        app.open_domains();
        app.open_monitor("example.com".to_string());

        // The list response resolves after the view was left behind.
        deliver(
            &mut app,
            &shared,
            1,
            ApiResponse::Domains(Ok(domain_records(&["example.com"]))),
        );

        assert!(matches!(app.domains, DomainsState::Loading));
        assert!(matches!(app.monitor, MonitorState::Loading));
    }

    #[test]
    fn test_selection_is_clamped_to_list() {
        let (mut app, shared) = test_app();
        app.open_domains();
        deliver(
            &mut app,
            &shared,
            1,
            ApiResponse::Domains(Ok(domain_records(&["a.com", "b.com", "c.com"]))),
        );

        app.select_next_n(10);
        assert_eq!(app.selected_index, 2);
        app.select_prev_n(10);
        assert_eq!(app.selected_index, 0);
        app.select_last();
        assert_eq!(app.selected_index, 2);
        app.select_first();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_enter_opens_monitor_for_selected_domain() {
        let (mut app, shared) = test_app();
        app.open_domains();
        deliver(
            &mut app,
            &shared,
            1,
            ApiResponse::Domains(Ok(domain_records(&["a.com", "b.com"]))),
        );

        app.select_next();
        app.open_selected_monitor();

        assert_eq!(app.current_view, View::Monitor);
        assert_eq!(app.monitor_domain.as_deref(), Some("b.com"));
        assert_eq!(
            shared.lock().unwrap().issued.last(),
            Some(&Issued::Examinations(2, "b.com".to_string()))
        );
    }
}
