//! # Fixed-Point Money
//!
//! Amounts are stored as an integer count of minor units (cents for `usd` at
//! precision 2), so adding and subtracting never drifts.
//!
//! Floating point only comes back in when an amount changes currency: the major
//! amount is multiplied by the rate and rounded **half away from zero** into the
//! target precision. That single rounding step decides the last digit of every
//! converted amount.

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

use crate::currency::ExchangeRate;

/// Precision used when a currency does not say otherwise (cents).
pub const DEFAULT_PRECISION: u32 = 2;

/// 2^63, the first magnitude an `i64` cannot hold.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MoneyError {
    /// Operands differ in currency code or precision.
    #[error("mismatched currency or precision: {left} vs {right}")]
    CurrencyMismatch { left: String, right: String },
    #[error("{amount} {code} cannot be expressed in minor units at precision {precision}")]
    Unrepresentable {
        amount: f64,
        code: String,
        precision: u32,
    },
    #[error("minor units overflowed while combining {left} and {right}")]
    Overflow { left: String, right: String },
}

/// An exact amount of one currency.
///
/// Equality looks at the currency code and the minor units. Arithmetic and
/// ordering additionally require equal precision and fail with
/// [`MoneyError::CurrencyMismatch`] otherwise.
#[derive(Debug, Clone)]
pub struct Money {
    minor_units: i64,
    currency_code: String,
    precision: u32,
}

impl Money {
    /// Rounds `amount` half away from zero into minor units.
    ///
    /// Zero is exact at any precision. Other amounts need `10^precision` to be
    /// finite in `f64`, so precisions above 308 only hold zero.
    pub fn from_decimal(
        amount: f64,
        code: impl Into<String>,
        precision: u32,
    ) -> Result<Self, MoneyError> {
        let currency_code = code.into();
        if amount == 0.0 {
            return Ok(Self::from_minor_units(0, currency_code, precision));
        }
        let scaled = amount * scale(precision);
        let rounded = if amount >= 0.0 {
            (scaled + 0.5).floor()
        } else {
            (scaled - 0.5).ceil()
        };

        if !rounded.is_finite() || rounded >= I64_LIMIT || rounded < -I64_LIMIT {
            return Err(MoneyError::Unrepresentable {
                amount,
                code: currency_code,
                precision,
            });
        }

        Ok(Self {
            minor_units: rounded as i64,
            currency_code,
            precision,
        })
    }

    /// Exact construction, no rounding involved.
    pub fn from_minor_units(units: i64, code: impl Into<String>, precision: u32) -> Self {
        Self {
            minor_units: units,
            currency_code: code.into(),
            precision,
        }
    }

    pub fn to_decimal(&self) -> f64 {
        self.minor_units as f64 / scale(self.precision)
    }

    pub fn minor_units(&self) -> i64 {
        self.minor_units
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Same currency code and same precision.
    pub fn is_compatible(&self, other: &Money) -> bool {
        self.currency_code == other.currency_code && self.precision == other.precision
    }

    pub fn try_add(&self, other: &Money) -> Result<Money, MoneyError> {
        let units = self.combine(other, i64::checked_add)?;
        Ok(Self::from_minor_units(units, self.currency_code.clone(), self.precision))
    }

    pub fn try_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        let units = self.combine(other, i64::checked_sub)?;
        Ok(Self::from_minor_units(units, self.currency_code.clone(), self.precision))
    }

    /// In-place addition. `self` is left untouched when the operands are incompatible.
    pub fn try_add_assign(&mut self, other: &Money) -> Result<(), MoneyError> {
        self.minor_units = self.combine(other, i64::checked_add)?;
        Ok(())
    }

    pub fn try_sub_assign(&mut self, other: &Money) -> Result<(), MoneyError> {
        self.minor_units = self.combine(other, i64::checked_sub)?;
        Ok(())
    }

    pub fn try_cmp(&self, other: &Money) -> Result<Ordering, MoneyError> {
        self.check_compatibility(other)?;
        Ok(self.minor_units.cmp(&other.minor_units))
    }

    pub fn try_lt(&self, other: &Money) -> Result<bool, MoneyError> {
        Ok(self.try_cmp(other)? == Ordering::Less)
    }

    pub fn try_gt(&self, other: &Money) -> Result<bool, MoneyError> {
        Ok(self.try_cmp(other)? == Ordering::Greater)
    }

    /// Converts into `to_code` at `rate` units of `to_code` per unit of `self`.
    ///
    /// Converting into the same currency returns `self` as is: `rate` and
    /// `to_precision` are ignored in that case, even if the precision differs.
    pub fn convert(&self, to_code: &str, rate: f64, to_precision: u32) -> Result<Money, MoneyError> {
        if self.currency_code == to_code {
            return Ok(self.clone());
        }
        Money::from_decimal(self.to_decimal() * rate, to_code, to_precision)
    }

    /// Applies a fetched quote. The quote must be for this currency.
    pub fn exchange(&self, rate: &ExchangeRate, to_precision: u32) -> Result<Money, MoneyError> {
        if rate.from_code != self.currency_code {
            return Err(MoneyError::CurrencyMismatch {
                left: self.describe(),
                right: format!("{} quote", rate.from_code),
            });
        }
        self.convert(&rate.to_code, rate.rate, to_precision)
    }

    fn check_compatibility(&self, other: &Money) -> Result<(), MoneyError> {
        if !self.is_compatible(other) {
            return Err(MoneyError::CurrencyMismatch {
                left: self.describe(),
                right: other.describe(),
            });
        }
        Ok(())
    }

    fn combine(&self, other: &Money, op: fn(i64, i64) -> Option<i64>) -> Result<i64, MoneyError> {
        self.check_compatibility(other)?;
        op(self.minor_units, other.minor_units).ok_or_else(|| MoneyError::Overflow {
            left: self.to_string(),
            right: other.to_string(),
        })
    }

    fn describe(&self) -> String {
        format!("{} (precision {})", self.currency_code, self.precision)
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency_code == other.currency_code && self.minor_units == other.minor_units
    }
}

impl Eq for Money {}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.*} {}",
            self.precision as usize,
            self.to_decimal(),
            self.currency_code
        )
    }
}

fn scale(precision: u32) -> f64 {
    10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
