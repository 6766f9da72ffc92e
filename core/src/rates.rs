//! # Rate Service
//!
//! Implements the two questions the converter asks the rate feed:
//!
//! 1. **Which currencies exist?** ([`RateService::list_currencies`])
//! 2. **What is one unit of `from` worth in `to` today?** ([`RateService::get_rate`])
//!
//! The service owns its [`Transport`] and issues exactly one request per call.
//! Nothing is retried and nothing is cached.

use ccnv_common::config::Config;
use ccnv_common::currency::{CurrencyCatalog, ExchangeRate};
use thiserror::Error;
use tracing::{debug, trace};

use crate::transport::{Response, Transport, TransportError};

mod feed;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RateError {
    /// The feed does not know the currency, or does not quote it against the other one.
    #[error("\"{0}\" currency not found")]
    CurrencyNotFound(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error(transparent)]
    TransportFailure(#[from] TransportError),
}

/// Outcome of a catalog fetch.
///
/// Listing never fails. When the feed cannot be reached or answers with
/// something unusable, the listing is `Unavailable` rather than an error, which
/// keeps "the feed is down" apart from "the feed knows no currencies".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogListing {
    Available(CurrencyCatalog),
    Unavailable { reason: String },
}

impl CatalogListing {
    pub fn is_available(&self) -> bool {
        matches!(self, CatalogListing::Available(_))
    }

    /// The catalog, or an empty one when the listing was unavailable.
    pub fn into_catalog(self) -> CurrencyCatalog {
        match self {
            CatalogListing::Available(catalog) => catalog,
            CatalogListing::Unavailable { .. } => CurrencyCatalog::new(),
        }
    }
}

pub struct RateService<T> {
    transport: T,
    config: Config,
}

impl<T: Transport> RateService<T> {
    pub fn new(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches every known currency code with its display name.
    ///
    /// Anything other than an HTTP 200 with a `code -> name` JSON object ends up
    /// as [`CatalogListing::Unavailable`].
    pub fn list_currencies(&mut self) -> CatalogListing {
        let url = self.config.catalog_url();

        match self.fetch_catalog(&url) {
            Ok(catalog) => {
                debug!(%url, currencies = catalog.len(), "catalog fetched");
                CatalogListing::Available(catalog)
            }
            Err(reason) => {
                debug!(%url, %reason, "catalog unavailable");
                CatalogListing::Unavailable { reason }
            }
        }
    }

    /// Fetches the current quote of `from` in `to`.
    ///
    /// A 404 or an empty body means the feed has no document for `from`.
    /// Other statuses are not special-cased: their body is parsed like any
    /// other and fails as malformed when it is not a rate document.
    pub fn get_rate(&mut self, from: &str, to: &str) -> Result<ExchangeRate, RateError> {
        let url = self.config.rates_url(from);
        debug!(from, to, %url, "fetching rate");

        let response: Response = self.transport.get(&url)?;
        if response.is_not_found() || response.body.is_empty() {
            return Err(RateError::CurrencyNotFound(from.to_string()));
        }

        let rate = feed::parse_rate(&response.body, from, to)?;
        debug!(from, to, rate = rate.rate, as_of = %rate.as_of, "rate fetched");

        Ok(rate)
    }

    fn fetch_catalog(&mut self, url: &str) -> Result<CurrencyCatalog, String> {
        let response = self.transport.get(url).map_err(|e| e.to_string())?;
        if !response.is_ok() {
            return Err(format!("unexpected HTTP status {}", response.status));
        }
        trace!(bytes = response.body.len(), "parsing catalog");
        feed::parse_catalog(&response.body).map_err(|e| e.to_string())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
