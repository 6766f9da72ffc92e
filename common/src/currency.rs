//! # Currency Model
//!
//! Value types describing amounts of money and the data served by the rate feed.
//!
//! * [`money::Money`]: an exact fixed-point amount in one currency at one precision.
//! * [`rate::ExchangeRate`]: a point-in-time quote between two currencies.
//! * [`catalog::CurrencyCatalog`]: every known code with its display name.
//!
//! Nothing here performs IO.

pub mod catalog;
pub mod money;
pub mod rate;

#[cfg(test)]
mod money_props;

pub use catalog::CurrencyCatalog;
pub use money::{DEFAULT_PRECISION, Money, MoneyError};
pub use rate::ExchangeRate;
