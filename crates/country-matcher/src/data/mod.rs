//! Country data sources.
//!
//! Every source implements [`Loader`]; [`DataSource`] is the configured variant the
//! service builds its index from.

mod delimited;
mod json_dir;
mod memory;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::Country;

pub use delimited::{Delimiter, DelimitedLoader};
pub use json_dir::JsonDirectoryLoader;
pub use memory::MemoryLoader;

/// Alias spellings keyed by the ISO2 (or ISO3) code they resolve to.
pub type AliasTable = BTreeMap<String, Vec<String>>;

/// First-column values that mark a delimited file's first row as a header.
pub const HEADER_TOKENS: [&str; 4] = ["code", "iso", "iso_code", "country_code"];

/// Two-operation contract every data source implements.
pub trait Loader: Send + Sync {
    fn load_countries(&self) -> Result<Vec<Country>, LoadError>;

    /// Sources that embed aliases in their records keep the default empty table.
    fn load_aliases(&self) -> Result<AliasTable, LoadError> {
        Ok(AliasTable::new())
    }
}

/// Complete dataset read from a loader.
#[derive(Debug, Clone, Default)]
pub struct CountryData {
    pub countries: Vec<Country>,
    pub aliases: AliasTable,
}

impl CountryData {
    pub fn load<L: Loader + ?Sized>(loader: &L) -> Result<Self, LoadError> {
        let countries = loader.load_countries()?;
        let aliases = loader.load_aliases()?;
        Ok(Self { countries, aliases })
    }
}

/// Configured data source variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Memory,
    Csv {
        countries_file: PathBuf,
        aliases_file: PathBuf,
    },
    Tsv {
        countries_file: PathBuf,
        aliases_file: PathBuf,
    },
    JsonDirectory {
        countries_dir: PathBuf,
    },
}

impl DataSource {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Csv { .. } => "csv",
            Self::Tsv { .. } => "tsv",
            Self::JsonDirectory { .. } => "json",
        }
    }

    fn loader(&self) -> Box<dyn Loader + '_> {
        match self {
            Self::Memory => Box::new(MemoryLoader),
            Self::Csv {
                countries_file,
                aliases_file,
            } => Box::new(DelimitedLoader::csv(countries_file, aliases_file)),
            Self::Tsv {
                countries_file,
                aliases_file,
            } => Box::new(DelimitedLoader::tsv(countries_file, aliases_file)),
            Self::JsonDirectory { countries_dir } => {
                Box::new(JsonDirectoryLoader::new(countries_dir))
            }
        }
    }
}

impl Loader for DataSource {
    fn load_countries(&self) -> Result<Vec<Country>, LoadError> {
        self.loader().load_countries()
    }

    fn load_aliases(&self) -> Result<AliasTable, LoadError> {
        self.loader().load_aliases()
    }
}

/// Failure to read, parse, or validate country data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid delimited data in {}: {source}", path.display())]
    Delimited {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to parse JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing {field} in {}", path.display())]
    MissingField { path: PathBuf, field: &'static str },
    #[error("{} is empty", path.display())]
    EmptyFile { path: PathBuf },
    #[error("no valid countries found in {}", path.display())]
    NoValidRows { path: PathBuf },
    #[error("no JSON country files found in {}", dir.display())]
    NoCountryFiles { dir: PathBuf },
    #[error("country code {code} appears more than once")]
    DuplicateCode { code: String },
    #[error("dataset contains no countries")]
    EmptyDataset,
}

impl LoadError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
