use std::collections::BTreeMap;

/// Every currency the feed knows about, keyed by code, ordered by code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyCatalog {
    entries: BTreeMap<String, String>,
}

impl CurrencyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) {
        self.entries.insert(code.into(), name.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// `(code, display name)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, name)| (code.as_str(), name.as_str()))
    }
}

impl From<BTreeMap<String, String>> for CurrencyCatalog {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}
