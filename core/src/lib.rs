//! # ccnv core
//!
//! Talks to the rate feed.
//!
//! * **[`transport`]**: the blocking HTTP GET capability and its adapters.
//! * **[`rates`]**: [`rates::RateService`], which turns feed documents into
//!   typed catalogs and quotes.
//!
//! Everything here is synchronous. A call blocks until its single request completes.

pub mod rates;
pub mod transport;

pub use rates::{CatalogListing, RateError, RateService};
pub use transport::{HttpTransport, MemoryTransport, Response, Transport, TransportError};
