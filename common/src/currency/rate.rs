use std::fmt;

/// A quote returned by the rate feed: `rate` units of `to_code` buy one unit of `from_code`.
///
/// Built fresh for every fetch and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    pub from_code: String,
    pub to_code: String,
    pub rate: f64,
    /// Date label reported by the feed. Opaque, and empty when the feed omits it.
    pub as_of: String,
}

impl ExchangeRate {
    pub fn new(
        from_code: impl Into<String>,
        to_code: impl Into<String>,
        rate: f64,
        as_of: impl Into<String>,
    ) -> Self {
        Self {
            from_code: from_code.into(),
            to_code: to_code.into(),
            rate,
            as_of: as_of.into(),
        }
    }

    /// The date label, or `None` when the feed did not send one.
    pub fn date(&self) -> Option<&str> {
        match self.as_of.as_str() {
            "" => None,
            date => Some(date),
        }
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1 {} = {} {}", self.from_code, self.rate, self.to_code)
    }
}
