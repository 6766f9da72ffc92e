//! The network **boundary** of the converter.
//!
//! [`crate::rates::RateService`] only ever sees the [`Transport`] trait. Two
//! adapters implement it:
//!
//! * [`HttpTransport`]: a real blocking HTTP client.
//! * [`MemoryTransport`]: canned responses keyed by URL, used by tests.
//!
//! Every call hands back an owned [`Response`]. Status and body belong to that
//! call alone, so a status code from an earlier request can never be mistaken
//! for the current one.

use thiserror::Error;

mod http;
mod memory;

pub use http::HttpTransport;
pub use memory::MemoryTransport;

pub const STATUS_OK: u16 = 200;
pub const STATUS_NOT_FOUND: u16 = 404;

/// Performs one blocking GET per call.
pub trait Transport {
    fn get(&mut self, url: &str) -> Result<Response, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&mut self, url: &str) -> Result<Response, TransportError> {
        (**self).get(url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    pub fn is_not_found(&self) -> bool {
        self.status == STATUS_NOT_FOUND
    }
}

/// The request never produced an HTTP response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("failed to set up HTTP client: {0}")]
    Setup(String),
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },
}

impl TransportError {
    pub fn request(url: &str, reason: impl Into<String>) -> Self {
        Self::Request {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}
