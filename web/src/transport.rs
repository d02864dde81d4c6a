//! Blocking HTTP transport backed by ureq.

use party_core::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
use tracing::debug;
use ureq::{Agent, RequestBuilder};

/// Executes planner requests over the network.
///
/// Status codes are returned as data, never as errors, so the core client
/// decides what a 404 or a 500 means.
pub struct UreqTransport {
    agent: Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&mut self, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let headers = &req.headers;
        let result = match (req.method, req.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(&req.path), headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(&req.path), headers).call(),
            (HttpMethod::Put, Some(body)) => with_headers(self.agent.put(&req.path), headers).send(body.as_bytes()),
            (HttpMethod::Put, None) => with_headers(self.agent.put(&req.path), headers).send_empty(),
        };
        let mut response = result.map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError(e.to_string()))?;
        debug!(method = req.method.as_str(), path = %req.path, status, "request finished");

        Ok(HttpResponse::new(status, body))
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
