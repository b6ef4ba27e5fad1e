use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{LoadError, Loader};
use crate::domain::Country;

/// Loads one country record per `*.json` file in a directory. Aliases are embedded in
/// each record, so the alias table stays empty.
#[derive(Debug, Clone)]
pub struct JsonDirectoryLoader {
    countries_dir: PathBuf,
}

impl JsonDirectoryLoader {
    pub fn new(countries_dir: impl Into<PathBuf>) -> Self {
        Self {
            countries_dir: countries_dir.into(),
        }
    }

    fn country_files(&self) -> Result<Vec<PathBuf>, LoadError> {
        let entries = fs::read_dir(&self.countries_dir)
            .map_err(|source| LoadError::io(&self.countries_dir, source))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| LoadError::io(&self.countries_dir, source))?
                .path();
            let is_json = path.extension().is_some_and(|ext| ext == "json");
            if is_json && path.is_file() {
                files.push(path);
            }
        }

        if files.is_empty() {
            return Err(LoadError::NoCountryFiles {
                dir: self.countries_dir.clone(),
            });
        }

        files.sort();
        Ok(files)
    }
}

impl Loader for JsonDirectoryLoader {
    fn load_countries(&self) -> Result<Vec<Country>, LoadError> {
        self.country_files()?
            .iter()
            .map(|path| read_country(path))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct CountryFile {
    #[serde(default)]
    iso2: String,
    #[serde(default)]
    iso3: String,
    #[serde(default)]
    names: BTreeMap<String, String>,
    #[serde(default)]
    aliases: Vec<String>,
}

fn read_country(path: &Path) -> Result<Country, LoadError> {
    let raw = fs::read(path).map_err(|source| LoadError::io(path, source))?;
    let file: CountryFile = serde_json::from_slice(&raw).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    into_country(file, path)
}

fn into_country(file: CountryFile, path: &Path) -> Result<Country, LoadError> {
    let missing = |field| LoadError::MissingField {
        path: path.to_path_buf(),
        field,
    };

    let iso2 = file.iso2.trim();
    if iso2.is_empty() {
        return Err(missing("iso2"));
    }
    let iso3 = file.iso3.trim();
    if iso3.is_empty() {
        return Err(missing("iso3"));
    }
    if file.names.is_empty() {
        return Err(missing("names"));
    }

    Ok(Country {
        iso2: iso2.to_string(),
        iso3: iso3.to_string(),
        names: file.names,
        aliases: file.aliases,
    })
}
