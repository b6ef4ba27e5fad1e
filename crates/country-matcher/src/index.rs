//! Name→code index built from a country dataset.
//!
//! Keys come in two tiers. Canonical keys (every display name plus the literal ISO2/ISO3
//! codes) are registered first; aliases are layered on top but never displace a canonical
//! key. Inside a tier the later-loaded entry wins. Every displaced or rejected claim is kept
//! as a [`KeyCollision`] so the caller can report it.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::data::{CountryData, LoadError, Loader};
use crate::domain::{Country, LookupError};
use crate::normalizer::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyTier {
    Canonical,
    Alias,
}

/// A normalized key claimed by more than one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyCollision {
    pub key: String,
    /// ISO2 the key resolves to after the build.
    pub kept: String,
    /// ISO2 whose claim lost.
    pub discarded: String,
    pub discarded_tier: KeyTier,
}

#[derive(Debug, Clone)]
struct KeyEntry {
    iso2: String,
    tier: KeyTier,
}

/// Immutable lookup structure; build a new one instead of mutating.
#[derive(Debug, Clone)]
pub struct CountryIndex {
    keys: HashMap<String, KeyEntry>,
    by_code: HashMap<String, Arc<Country>>,
    countries: Vec<Arc<Country>>,
    collisions: Vec<KeyCollision>,
    orphaned_alias_codes: Vec<String>,
    built_at: DateTime<Utc>,
}

impl CountryIndex {
    /// Read a loader and build from its dataset.
    pub fn load<L: Loader + ?Sized>(loader: &L) -> Result<Self, LoadError> {
        Self::build(CountryData::load(loader)?)
    }

    pub fn build(data: CountryData) -> Result<Self, LoadError> {
        let CountryData { countries, aliases } = data;
        if countries.is_empty() {
            return Err(LoadError::EmptyDataset);
        }

        let mut index = Self {
            keys: HashMap::new(),
            by_code: HashMap::new(),
            countries: Vec::with_capacity(countries.len()),
            collisions: Vec::new(),
            orphaned_alias_codes: Vec::new(),
            built_at: Utc::now(),
        };

        for country in countries {
            index.insert_country(country)?;
        }

        let countries = index.countries.clone();
        for country in &countries {
            for name in country.names.values() {
                index.claim(name, &country.iso2, KeyTier::Canonical);
            }
            index.claim(&country.iso2, &country.iso2, KeyTier::Canonical);
            if let Some(iso3) = country.iso3() {
                index.claim(iso3, &country.iso2, KeyTier::Canonical);
            }
        }

        for country in &countries {
            for alias in &country.aliases {
                index.claim(alias, &country.iso2, KeyTier::Alias);
            }
        }

        for (code, spellings) in &aliases {
            let Some(owner) = index.by_code.get(code.trim()).map(|c| c.iso2.clone()) else {
                index.orphaned_alias_codes.push(code.clone());
                continue;
            };
            for alias in spellings {
                index.claim(alias, &owner, KeyTier::Alias);
            }
        }

        Ok(index)
    }

    fn insert_country(&mut self, country: Country) -> Result<(), LoadError> {
        let country = Arc::new(country);
        let codes = std::iter::once(country.iso2.as_str()).chain(country.iso3());
        for code in codes {
            if self.by_code.contains_key(code) {
                return Err(LoadError::DuplicateCode {
                    code: code.to_string(),
                });
            }
            self.by_code.insert(code.to_string(), Arc::clone(&country));
        }
        self.countries.push(country);
        Ok(())
    }

    fn claim(&mut self, text: &str, iso2: &str, tier: KeyTier) {
        let key = normalize(text);
        if key.is_empty() {
            return;
        }

        let previous = self
            .keys
            .get(&key)
            .map(|entry| (entry.iso2.clone(), entry.tier));

        match previous {
            None => {
                self.insert_key(key, iso2, tier);
            }
            Some((owner, _)) if owner == iso2 => {}
            Some((owner, KeyTier::Canonical)) if tier == KeyTier::Alias => {
                self.collisions.push(KeyCollision {
                    key,
                    kept: owner,
                    discarded: iso2.to_string(),
                    discarded_tier: tier,
                });
            }
            Some((owner, owner_tier)) => {
                self.collisions.push(KeyCollision {
                    key: key.clone(),
                    kept: iso2.to_string(),
                    discarded: owner,
                    discarded_tier: owner_tier,
                });
                self.insert_key(key, iso2, tier);
            }
        }
    }

    fn insert_key(&mut self, key: String, iso2: &str, tier: KeyTier) {
        self.keys.insert(
            key,
            KeyEntry {
                iso2: iso2.to_string(),
                tier,
            },
        );
    }

    /// Normalize `query` and resolve it to a country.
    pub fn find_by_name(&self, query: &str) -> Result<Arc<Country>, LookupError> {
        self.keys
            .get(&normalize(query))
            .and_then(|entry| self.by_code.get(&entry.iso2))
            .cloned()
            .ok_or_else(|| LookupError::not_found(query))
    }

    /// Literal ISO2 or ISO3 lookup; no normalization is applied.
    pub fn find_by_code(&self, code: &str) -> Result<Arc<Country>, LookupError> {
        self.by_code
            .get(code)
            .cloned()
            .ok_or_else(|| LookupError::not_found(code))
    }

    /// ISO2 a normalized key resolves to, if any.
    pub fn code_for_key(&self, key: &str) -> Option<&str> {
        self.keys.get(key).map(|entry| entry.iso2.as_str())
    }

    pub fn countries(&self) -> &[Arc<Country>] {
        &self.countries
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub fn collisions(&self) -> &[KeyCollision] {
        &self.collisions
    }

    /// Alias table codes that matched no loaded country.
    pub fn orphaned_alias_codes(&self) -> &[String] {
        &self.orphaned_alias_codes
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    pub fn summary(&self) -> IndexSummary {
        IndexSummary {
            countries: self.country_count(),
            keys: self.key_count(),
            collisions: self.collisions.len(),
            built_at: self.built_at,
        }
    }
}

/// Counts reported after a build or reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexSummary {
    pub countries: usize,
    pub keys: usize,
    pub collisions: usize,
    pub built_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AliasTable, MemoryLoader};

    fn dataset(countries: Vec<Country>, aliases: &[(&str, &[&str])]) -> CountryData {
        let aliases: AliasTable = aliases
            .iter()
            .map(|(code, list)| {
                (
                    code.to_string(),
                    list.iter().map(|alias| alias.to_string()).collect(),
                )
            })
            .collect();
        CountryData { countries, aliases }
    }

    fn memory_index() -> CountryIndex {
        CountryIndex::load(&MemoryLoader).expect("memory index builds")
    }

    #[test]
    fn resolves_names_regardless_of_case_and_padding() {
        let index = memory_index();
        for query in ["Romania", "romania", "  ROMANIA "] {
            let country = index.find_by_name(query).expect("romania resolves");
            assert_eq!(country.iso2, "RO");
        }
    }

    #[test]
    fn resolves_aliases_and_misspellings() {
        let index = memory_index();
        for query in ["usa", "united states", "America", "untied states"] {
            assert_eq!(index.find_by_name(query).expect("us resolves").iso2, "US");
        }
        assert_eq!(index.find_by_name("România").expect("ro").iso2, "RO");
        assert_eq!(index.find_by_name("cote d'ivoire").expect("ci").iso2, "CI");
    }

    #[test]
    fn resolves_literal_codes_as_names() {
        let index = memory_index();
        assert_eq!(index.find_by_name("deu").expect("iso3").iso2, "DE");
        assert_eq!(index.find_by_name("De").expect("iso2").iso2, "DE");
    }

    #[test]
    fn unknown_name_is_not_found() {
        let index = memory_index();
        let err = index.find_by_name("Atlantis").expect_err("atlantis is fictional");
        assert_eq!(err, LookupError::not_found("Atlantis"));
    }

    #[test]
    fn code_lookup_is_literal() {
        let index = memory_index();
        assert_eq!(index.find_by_code("RO").expect("iso2").iso3, "ROU");
        assert_eq!(index.find_by_code("ROU").expect("iso3").iso2, "RO");
        assert!(index.find_by_code("ro").is_err());
    }

    #[test]
    fn aliases_never_override_canonical_keys() {
        let index = memory_index();
        // "sa" is listed as a South Africa alias but is Saudi Arabia's code.
        assert_eq!(index.find_by_name("sa").expect("sa").iso2, "SA");
        assert!(index.collisions().iter().any(|collision| collision.key == "sa"
            && collision.kept == "SA"
            && collision.discarded == "ZA"
            && collision.discarded_tier == KeyTier::Alias));
    }

    #[test]
    fn later_alias_wins_over_earlier_alias() {
        let data = dataset(
            vec![
                Country::new("AA", "AAA", "Alpha").with_aliases(["shared"]),
                Country::new("BB", "BBB", "Beta").with_aliases(["shared"]),
            ],
            &[],
        );
        let index = CountryIndex::build(data).expect("index builds");
        assert_eq!(index.code_for_key("shared"), Some("BB"));
        assert_eq!(index.collisions().len(), 1);
    }

    #[test]
    fn later_canonical_name_wins_over_earlier_canonical_name() {
        let data = dataset(
            vec![
                Country::new("CG", "COG", "Congo"),
                Country::new("CD", "COD", "Congo"),
            ],
            &[],
        );
        let index = CountryIndex::build(data).expect("index builds");

        assert_eq!(index.find_by_name("congo").expect("shared name").iso2, "CD");
        assert_eq!(
            index.collisions(),
            [KeyCollision {
                key: "congo".to_string(),
                kept: "CD".to_string(),
                discarded: "CG".to_string(),
                discarded_tier: KeyTier::Canonical,
            }]
        );
    }

    #[test]
    fn alias_table_accepts_iso3_owner_codes() {
        let data = dataset(
            vec![Country::new("NL", "NLD", "Netherlands")],
            &[("NLD", &["Holland"]), ("XX", &["Nowhere"])],
        );
        let index = CountryIndex::build(data).expect("index builds");
        assert_eq!(index.find_by_name("holland").expect("alias").iso2, "NL");
        assert!(index.find_by_name("nowhere").is_err());
        assert_eq!(index.orphaned_alias_codes(), ["XX".to_string()]);
    }

    #[test]
    fn every_key_dereferences_to_a_country() {
        let index = memory_index();
        for entry in index.keys.values() {
            assert!(index.by_code.contains_key(&entry.iso2));
        }
    }

    #[test]
    fn empty_dataset_fails() {
        let err = CountryIndex::build(CountryData::default()).expect_err("nothing to index");
        assert!(matches!(err, LoadError::EmptyDataset));
    }

    #[test]
    fn duplicate_codes_fail() {
        let data = dataset(
            vec![
                Country::new("RO", "ROU", "Romania"),
                Country::new("RO", "ROM", "Roumania"),
            ],
            &[],
        );
        let err = CountryIndex::build(data).expect_err("iso2 repeated");
        assert!(matches!(err, LoadError::DuplicateCode { ref code } if code == "RO"));
    }

    #[test]
    fn registers_every_language_name() {
        let mut country = Country::new("DE", "DEU", "Germany");
        country
            .names
            .insert("de".to_string(), "Deutschland".to_string());
        let index = CountryIndex::build(dataset(vec![country], &[])).expect("index builds");
        assert_eq!(index.find_by_name("DEUTSCHLAND").expect("german name").iso2, "DE");
        assert_eq!(index.summary().countries, 1);
        assert_eq!(index.key_count(), 4);
    }
}
