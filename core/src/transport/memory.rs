use std::collections::HashMap;

use super::{Response, STATUS_NOT_FOUND, Transport, TransportError};

/// In-memory transport answering from a fixed routing table.
///
/// Unknown URLs get an empty 404, the same as a real server would answer.
/// Every requested URL is recorded in order.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    routes: HashMap<String, Result<Response, TransportError>>,
    requests: Vec<String>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.routes
            .insert(url.into(), Ok(Response::new(status, body)));
        self
    }

    /// Makes `url` fail as if the connection could not be made.
    pub fn fail(mut self, url: impl Into<String>, reason: impl Into<String>) -> Self {
        let url = url.into();
        let err = TransportError::request(&url, reason);
        self.routes.insert(url, Err(err));
        self
    }

    pub fn requests(&self) -> &[String] {
        &self.requests
    }
}

impl Transport for MemoryTransport {
    fn get(&mut self, url: &str) -> Result<Response, TransportError> {
        self.requests.push(url.to_string());
        self.routes
            .get(url)
            .cloned()
            .unwrap_or_else(|| Ok(Response::new(STATUS_NOT_FOUND, Vec::new())))
    }
}
