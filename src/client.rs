use std::env;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{RosterError, RosterResult};
use crate::model::PersonSpec;

/// Base URL used when `ROSTER_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3080/api";

const USER_AGENT: &str = concat!("roster/", env!("CARGO_PKG_VERSION"));

// Error bodies are trimmed to this many bytes before being attached to
// a Status error.
const MAX_ERROR_BODY: usize = 200;

/// HTTP client for the person directory API.
///
/// Holds the base URL and per-request options; each call opens its own
/// connection, so a `Client` is cheap to clone and share.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    user_agent: String,
    timeout: Option<Duration>,
}

impl Client {
    /// Client for an explicit base URL. A trailing `/` is trimmed.
    pub fn new(base_url: &str) -> Self {
        Client {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: None,
        }
    }

    /// Client for the URL in `ROSTER_URL`, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let url = env::var("ROSTER_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Client::new(&url)
    }

    /// Bound each request to the given timeout. No timeout is imposed
    /// unless one is set here.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the person resource addressed by `spec`.
    pub fn person_url(&self, spec: &PersonSpec) -> RosterResult<String> {
        Ok(self.url_for(&["people", &spec.path_component()?]))
    }

    fn url_for(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.push_str(segment);
        }
        url
    }

    /// One GET round-trip: fetch `url`, decode the JSON body into `T`,
    /// and capture the transport metadata alongside it.
    pub(crate) fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> RosterResult<(T, ResponseMeta)> {
        log::debug!("GET {}", url);

        let mut request = ureq::get(url)
            .set("Accept", "application/json")
            .set("User-Agent", &self.user_agent);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.call().map_err(|e| match e {
            ureq::Error::Status(status, resp) => {
                let body = resp.into_string().unwrap_or_default();
                RosterError::Status {
                    status,
                    url: url.to_string(),
                    body: trim_body(&body),
                }
            }
            ureq::Error::Transport(t) => RosterError::Transport {
                url: url.to_string(),
                source: Box::new(t),
            },
        })?;

        let meta = ResponseMeta::capture(&response);
        log::debug!("{} {} from {}", meta.status, meta.status_text, meta.url);

        let value = response.into_json().map_err(|e| RosterError::Decode {
            url: url.to_string(),
            source: e,
        })?;
        Ok((value, meta))
    }
}

/// Transport-level details of a completed response, kept for diagnostics.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    pub status: u16,
    pub status_text: String,
    /// Final URL, after any redirects.
    pub url: String,
    headers: Vec<(String, String)>,
}

impl ResponseMeta {
    fn capture(response: &ureq::Response) -> Self {
        let headers = response
            .headers_names()
            .into_iter()
            .filter_map(|name| {
                let value = response.header(&name)?.to_string();
                Some((name, value))
            })
            .collect();
        ResponseMeta {
            status: response.status(),
            status_text: response.status_text().to_string(),
            url: response.get_url().to_string(),
            headers,
        }
    }

    /// Look up a response header, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

// Truncate an error body without splitting a UTF-8 sequence.
fn trim_body(body: &str) -> String {
    let body = body.trim_end();
    if body.len() <= MAX_ERROR_BODY {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_string()
}
