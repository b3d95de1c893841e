//! Deterministic [`HttpTransport`] for tests, no network involved.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;
use url::Url;

use crate::{
    config::{DEFAULT_DIRECTIONS_PATH, DEFAULT_ROUTE_PATH},
    error::TransportError,
    transport::HttpTransport,
};

#[derive(Clone, Debug)]
pub enum StubResponse {
    Body(String),
    Status { status: u16, body: String },
    /// Answers with a two point route `[[flon, flat], [tlon, tlat]]` built from
    /// the request query.
    EchoEndpoints,
}

/// Canned responses matched by the suffix of the request path.
#[derive(Default)]
pub struct StubTransport {
    responses: Mutex<Vec<(String, StubResponse)>>,
    requests: Mutex<Vec<Url>>,
    calls: AtomicUsize,
    closed: AtomicBool,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_response(self, path_suffix: impl Into<String>, response: StubResponse) -> Self {
        self.set_response(path_suffix, response);
        self
    }

    #[must_use]
    pub fn with_route_body(self, body: impl Into<String>) -> Self {
        self.with_response(DEFAULT_ROUTE_PATH, StubResponse::Body(body.into()))
    }

    #[must_use]
    pub fn with_directions_body(self, body: impl Into<String>) -> Self {
        self.with_response(DEFAULT_DIRECTIONS_PATH, StubResponse::Body(body.into()))
    }

    #[must_use]
    pub fn with_echo_route(self) -> Self {
        self.with_response(DEFAULT_ROUTE_PATH, StubResponse::EchoEndpoints)
    }

    /// Replaces the response for `path_suffix`, later requests see the new one.
    pub fn set_response(&self, path_suffix: impl Into<String>, response: StubResponse) {
        let path_suffix = path_suffix.into();
        let mut responses = self.responses.lock();
        responses.retain(|(suffix, _)| *suffix != path_suffix);
        responses.push((path_suffix, response));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn respond(&self, url: &Url) -> Result<String, TransportError> {
        let response = self
            .responses
            .lock()
            .iter()
            .find(|(suffix, _)| url.path().ends_with(suffix.as_str()))
            .map(|(_, response)| response.clone());

        match response {
            Some(StubResponse::Body(body)) => Ok(body),
            Some(StubResponse::Status { status, body }) => {
                Err(TransportError::Status { status, body })
            }
            Some(StubResponse::EchoEndpoints) => Ok(echo_endpoints(url)),
            None => Err(TransportError::Status {
                status: 404,
                body: format!("No stub response for {}", url.path()),
            }),
        }
    }
}

fn echo_endpoints(url: &Url) -> String {
    let param = |name: &str| {
        url.query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default()
    };

    format!(
        r#"{{"coordinates": [[{}, {}], [{}, {}]]}}"#,
        param("flon"),
        param("flat"),
        param("tlon"),
        param("tlat")
    )
}

impl HttpTransport for StubTransport {
    async fn get(&self, url: Url) -> Result<String, TransportError> {
        if self.is_closed() {
            return Err(TransportError::Closed);
        }

        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(url.clone());

        self.respond(&url)
    }

    fn shutdown(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}
