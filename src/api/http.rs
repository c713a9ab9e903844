//! HTTP-backed API client.
//!
//! Each request is spawned as a task on the runtime owned by `main`. The
//! task resolves the HTTP call and pushes a tagged event into an mpsc
//! channel, which the TUI loop drains via `poll` without blocking.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::debug;

use super::types::{AddDomainRequest, DomainRecord, ErrorBody, ExaminationResponse};
use super::{ApiClient, ApiError, ApiEvent, ApiResponse};

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// An [`ApiClient`] backed by the external HTTP service.
#[derive(Debug)]
pub struct HttpClient {
    base: String,
    http: Client,
    runtime: Handle,
    sender: mpsc::Sender<ApiEvent>,
    receiver: mpsc::Receiver<ApiEvent>,
    description: String,
}

impl HttpClient {
    /// Create a client for the API at `base` (e.g. `http://localhost:8000`).
    ///
    /// Spawned request tasks run on `runtime`, which must outlive the TUI
    /// loop.
    pub fn new(runtime: Handle, base: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        let (sender, receiver) = mpsc::channel(16);
        let description = format!("api: {}", base);
        Self {
            base,
            http,
            runtime,
            sender,
            receiver,
            description,
        }
    }

    fn dispatch<F>(&self, task: F)
    where
        F: Future<Output = ApiEvent> + Send + 'static,
    {
        let tx = self.sender.clone();
        self.runtime.spawn(async move {
            let event = task.await;
            // A dropped receiver means the TUI is gone; nothing to notify.
            let _ = tx.send(event).await;
        });
    }
}

impl ApiClient for HttpClient {
    fn fetch_domains(&mut self, request_id: u64) {
        let url = format!("{}/domains", self.base);
        let http = self.http.clone();
        debug!(%url, request_id, "fetching domain list");
        self.dispatch(async move {
            let result = get_domains(&http, &url).await;
            ApiEvent {
                request_id,
                response: ApiResponse::Domains(result),
            }
        });
    }

    fn add_domain(&mut self, request_id: u64, domain: String) {
        let url = format!("{}/add_domain", self.base);
        let http = self.http.clone();
        debug!(%url, request_id, "adding domain");
        self.dispatch(async move {
            let result = post_domain(&http, &url, domain).await;
            ApiEvent {
                request_id,
                response: ApiResponse::DomainAdded(result),
            }
        });
    }

    fn fetch_examinations(&mut self, request_id: u64, domain: String) {
        let url = format!("{}/examinations/{}", self.base, domain);
        let http = self.http.clone();
        debug!(%url, request_id, "fetching examination history");
        self.dispatch(async move {
            let result = get_examinations(&http, &url).await;
            ApiEvent {
                request_id,
                response: ApiResponse::Examinations(result),
            }
        });
    }

    fn poll(&mut self) -> Option<ApiEvent> {
        // Disconnection is unreachable while we hold a sender clone.
        self.receiver.try_recv().ok()
    }

    fn description(&self) -> &str {
        &self.description
    }
}

async fn get_domains(http: &Client, url: &str) -> Result<Vec<DomainRecord>, ApiError> {
    let response = http.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        let detail = read_detail(response).await;
        return Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        });
    }
    Ok(response.json::<Vec<DomainRecord>>().await?)
}

async fn post_domain(http: &Client, url: &str, domain: String) -> Result<(), ApiError> {
    let response = http.post(url).json(&AddDomainRequest { domain }).send().await?;
    let status = response.status();
    if !status.is_success() {
        let detail = read_detail(response).await;
        return Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        });
    }
    // The success body echoes the stored record; the dashboard has no use
    // for it.
    Ok(())
}

async fn get_examinations(http: &Client, url: &str) -> Result<ExaminationResponse, ApiError> {
    let response = http.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        let detail = read_detail(response).await;
        return Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        });
    }
    Ok(response.json::<ExaminationResponse>().await?)
}

async fn read_detail(response: reqwest::Response) -> Option<String> {
    response.json::<ErrorBody>().await.ok().and_then(|body| body.detail)
}
