use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Language tag used for the official name rendered back to callers.
pub const OFFICIAL_LANGUAGE: &str = "en";

/// One country as supplied by a data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub iso2: String,
    #[serde(default)]
    pub iso3: String,
    /// Language tag -> display name.
    #[serde(default)]
    pub names: BTreeMap<String, String>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Country {
    /// Convenience constructor for sources that only carry an English name.
    pub fn new(iso2: impl Into<String>, iso3: impl Into<String>, name: impl Into<String>) -> Self {
        let mut names = BTreeMap::new();
        names.insert(OFFICIAL_LANGUAGE.to_string(), name.into());
        Self {
            iso2: iso2.into(),
            iso3: iso3.into(),
            names,
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// English name, or the first name in tag order when English is absent.
    pub fn official_name(&self) -> &str {
        self.names
            .get(OFFICIAL_LANGUAGE)
            .or_else(|| self.names.values().next())
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn iso3(&self) -> Option<&str> {
        let code = self.iso3.trim();
        (!code.is_empty()).then_some(code)
    }
}

/// Payload returned to lookup callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryResponse {
    pub query: String,
    pub official_name: String,
    pub iso2_code: String,
    pub iso3_code: String,
}

impl CountryResponse {
    pub fn new(query: impl Into<String>, country: &Country) -> Self {
        Self {
            query: query.into(),
            official_name: country.official_name().to_string(),
            iso2_code: country.iso2.clone(),
            iso3_code: country.iso3.clone(),
        }
    }
}

/// Outcome of a lookup that did not resolve to a country.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("country query parameter is required")]
    Validation { query: String },
    #[error("country not found: {query}")]
    NotFound { query: String },
}

impl LookupError {
    pub fn not_found(query: impl Into<String>) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    pub fn query(&self) -> &str {
        match self {
            Self::Validation { query } | Self::NotFound { query } => query,
        }
    }

    pub const fn result_label(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::NotFound { .. } => "not_found",
        }
    }
}
