use std::time::Duration;

/// Public mirror of the currency feed.
pub const DEFAULT_BASE_URL: &str = "https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api@latest";
pub const DEFAULT_CATALOG_PATH: &str = "/v1/currencies.json";
pub const DEFAULT_RATES_PATH: &str = "/v1/currencies/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the rate feed. Endpoint paths are appended to it.
    pub base_url: String,
    /// Path of the `code -> display name` listing.
    pub catalog_path: String,
    /// Prefix of the per-currency rate documents, `{code}.json` follows it.
    pub rates_path: String,
    /// Skips TLS certificate verification.
    ///
    /// Only ever set from an explicit opt-in on the command line.
    pub insecure_tls: bool,
    /// Upper bound for a single request. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
            rates_path: DEFAULT_RATES_PATH.to_string(),
            insecure_tls: false,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl Config {
    /// Default endpoints rooted at a different host, e.g. a local fixture server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn catalog_url(&self) -> String {
        join(&self.base_url, &self.catalog_path)
    }

    /// URL of the rate document for `code`: `{base}{rates_path}{code}.json`.
    pub fn rates_url(&self, code: &str) -> String {
        format!("{}{code}.json", join(&self.base_url, &self.rates_path))
    }
}

fn join(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
