//! Blocking [`Transport`] backed by `ureq`.
//!
//! The agent never treats a status code as an error and has no timeouts, so
//! every response reaches the core parsers and a slow server is waited on.

use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};
use tracing::trace;
use ureq::{Agent, RequestBuilder};

#[derive(Debug, Clone)]
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
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        trace!(method = request.method.as_str(), path = %request.path, "sending");
        let headers = &request.headers;
        let body = request.body.as_deref().unwrap_or_default().as_bytes();

        let result = match request.method {
            HttpMethod::Get => with_headers(self.agent.get(&request.path), headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(&request.path), headers).call(),
            HttpMethod::Post => with_headers(self.agent.post(&request.path), headers).send(body),
            HttpMethod::Patch => with_headers(self.agent.patch(&request.path), headers).send(body),
        };
        let mut response = result.map_err(classify)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                let value = value.to_str().ok()?;
                Some((name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::BadBody(e.to_string()))?;

        trace!(status, "received");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn classify(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::BadUri(uri) => ApiError::BadUrl(uri),
        ureq::Error::Http(e) => ApiError::BadUrl(e.to_string()),
        ureq::Error::Timeout(_) => ApiError::Timeout,
        other => ApiError::Network(other.to_string()),
    }
}
