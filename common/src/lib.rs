//! # ccnv common
//!
//! Types shared by every layer of the converter:
//!
//! * **[`config`]**: where the rate feed lives and how to reach it.
//! * **[`currency`]**: the money value type and the shapes returned by the feed.

pub mod config;
pub mod currency;
