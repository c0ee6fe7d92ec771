//! Single authenticated GET against the upstream API.
//!
//! Every failure mode collapses into [`FetchOutcome::Unavailable`]; callers
//! never see an error, only "data" or "no data" with a reason attached.

use std::fmt;
use std::time::Duration;

use once_cell::unsync::OnceCell;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::http_client::http_client;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    Network,
    Status(u16),
    Parse,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::Network => write!(f, "network"),
            UnavailableReason::Status(code) => write!(f, "http {code}"),
            UnavailableReason::Parse => write!(f, "parse"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Success(Value),
    Unavailable(UnavailableReason),
}

impl FetchOutcome {
    pub fn payload(&self) -> Option<&Value> {
        match self {
            FetchOutcome::Success(value) => Some(value),
            FetchOutcome::Unavailable(_) => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }
}

pub trait Fetcher {
    fn fetch(&self, url: &str) -> FetchOutcome;
}

pub struct HttpFetcher {
    api_key: String,
    timeout: Duration,
    client: OnceCell<Client>,
}

impl HttpFetcher {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            api_key: api_key.into(),
            timeout,
            client: OnceCell::new(),
        }
    }

    fn client(&self) -> Option<&Client> {
        match self
            .client
            .get_or_try_init(|| http_client(&self.api_key, self.timeout))
        {
            Ok(client) => Some(client),
            Err(err) => {
                warn!(error = %err, "http client unavailable");
                None
            }
        }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> FetchOutcome {
        let Some(client) = self.client() else {
            return FetchOutcome::Unavailable(UnavailableReason::Network);
        };

        let outcome = match client.get(url).send() {
            Ok(resp) => {
                let status = resp.status();
                match resp.text() {
                    Ok(body) => classify_response(status, &body),
                    Err(_) => FetchOutcome::Unavailable(UnavailableReason::Network),
                }
            }
            Err(err) => {
                debug!(url, error = %err, "request failed");
                FetchOutcome::Unavailable(UnavailableReason::Network)
            }
        };

        match &outcome {
            FetchOutcome::Success(_) => debug!(url, "fetched"),
            FetchOutcome::Unavailable(reason) => warn!(url, %reason, "upstream data unavailable"),
        }
        outcome
    }
}

pub fn classify_response(status: StatusCode, body: &str) -> FetchOutcome {
    if !status.is_success() {
        return FetchOutcome::Unavailable(UnavailableReason::Status(status.as_u16()));
    }
    match serde_json::from_str::<Value>(body) {
        Ok(value) => FetchOutcome::Success(value),
        Err(_) => FetchOutcome::Unavailable(UnavailableReason::Parse),
    }
}
