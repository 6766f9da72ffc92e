use std::error::Error as StdError;

use ccnv_common::config::Config;
use reqwest::blocking::Client;
use tracing::{debug, trace, warn};

use super::{Response, Transport, TransportError};

const USER_AGENT: &str = concat!("ccnv/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client backed by `reqwest`.
///
/// Redirects follow the client defaults. The timeout from [`Config::timeout`]
/// bounds each request as a whole.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(cfg: &Config) -> Result<Self, TransportError> {
        let mut builder = Client::builder().user_agent(USER_AGENT).timeout(cfg.timeout);

        if cfg.insecure_tls {
            warn!("TLS certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Setup(error_chain(&e)))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&mut self, url: &str) -> Result<Response, TransportError> {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| TransportError::request(url, error_chain(&e)))?;

        let status: u16 = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| TransportError::request(url, error_chain(&e)))?;

        debug!(url, status, bytes = body.len(), "response received");
        trace!(body = %String::from_utf8_lossy(&body));

        Ok(Response::new(status, body.to_vec()))
    }
}

/// `reqwest` keeps the useful part (refused, dns, tls...) in the source chain.
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
