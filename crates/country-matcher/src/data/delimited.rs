use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};

use super::{AliasTable, LoadError, Loader, HEADER_TOKENS};
use crate::domain::Country;

/// Field separator of a delimited source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    const fn byte(self) -> u8 {
        match self {
            Self::Comma => b',',
            Self::Tab => b'\t',
        }
    }
}

/// Reads `code,name[,iso3]` country rows and `code,alias,alias,...` alias rows from a
/// pair of CSV or TSV files.
#[derive(Debug, Clone)]
pub struct DelimitedLoader {
    delimiter: Delimiter,
    countries_file: PathBuf,
    aliases_file: PathBuf,
}

impl DelimitedLoader {
    pub fn new(
        delimiter: Delimiter,
        countries_file: impl Into<PathBuf>,
        aliases_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            delimiter,
            countries_file: countries_file.into(),
            aliases_file: aliases_file.into(),
        }
    }

    pub fn csv(countries_file: impl Into<PathBuf>, aliases_file: impl Into<PathBuf>) -> Self {
        Self::new(Delimiter::Comma, countries_file, aliases_file)
    }

    pub fn tsv(countries_file: impl Into<PathBuf>, aliases_file: impl Into<PathBuf>) -> Self {
        Self::new(Delimiter::Tab, countries_file, aliases_file)
    }
}

impl Loader for DelimitedLoader {
    fn load_countries(&self) -> Result<Vec<Country>, LoadError> {
        let file = open(&self.countries_file)?;
        parse_countries(file, self.delimiter, &self.countries_file)
    }

    fn load_aliases(&self) -> Result<AliasTable, LoadError> {
        let file = open(&self.aliases_file)?;
        parse_aliases(file, self.delimiter, &self.aliases_file)
    }
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::io(path, source))
}

pub(crate) fn parse_countries<R: Read>(
    reader: R,
    delimiter: Delimiter,
    origin: &Path,
) -> Result<Vec<Country>, LoadError> {
    let records = read_records(reader, delimiter, origin)?;
    let mut countries = Vec::with_capacity(records.len());

    for record in data_rows(&records) {
        if record.len() < 2 {
            continue;
        }

        let code = record.get(0).unwrap_or_default().trim();
        let name = record.get(1).unwrap_or_default().trim();
        if code.is_empty() || name.is_empty() {
            continue;
        }

        let iso3 = record.get(2).unwrap_or_default().trim();
        countries.push(Country::new(code, iso3, name));
    }

    if countries.is_empty() {
        return Err(LoadError::NoValidRows {
            path: origin.to_path_buf(),
        });
    }

    Ok(countries)
}

pub(crate) fn parse_aliases<R: Read>(
    reader: R,
    delimiter: Delimiter,
    origin: &Path,
) -> Result<AliasTable, LoadError> {
    let records = read_records(reader, delimiter, origin)?;
    let mut aliases = AliasTable::new();

    for record in data_rows(&records) {
        if record.len() < 2 {
            continue;
        }

        let code = record.get(0).unwrap_or_default().trim();
        if code.is_empty() {
            continue;
        }

        let spellings: Vec<String> = record
            .iter()
            .skip(1)
            .map(str::trim)
            .filter(|alias| !alias.is_empty())
            .map(str::to_string)
            .collect();

        if !spellings.is_empty() {
            aliases.entry(code.to_string()).or_default().extend(spellings);
        }
    }

    Ok(aliases)
}

fn read_records<R: Read>(
    reader: R,
    delimiter: Delimiter,
    origin: &Path,
) -> Result<Vec<StringRecord>, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(delimiter.byte())
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let records = csv_reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| LoadError::Delimited {
            path: origin.to_path_buf(),
            source,
        })?;

    if records.is_empty() {
        return Err(LoadError::EmptyFile {
            path: origin.to_path_buf(),
        });
    }

    Ok(records)
}

fn data_rows(records: &[StringRecord]) -> &[StringRecord] {
    match records.split_first() {
        Some((first, rest)) if is_header(first) => rest,
        _ => records,
    }
}

fn is_header(record: &StringRecord) -> bool {
    record
        .get(0)
        .map(|field| field.trim().to_lowercase())
        .is_some_and(|field| HEADER_TOKENS.contains(&field.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> &'static Path {
        Path::new("countries.csv")
    }

    #[test]
    fn skips_header_row() {
        let csv = "code,name\nRO,Romania\nFR,France\n";
        let countries =
            parse_countries(csv.as_bytes(), Delimiter::Comma, origin()).expect("rows parse");
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].iso2, "RO");
        assert_eq!(countries[0].official_name(), "Romania");
    }

    #[test]
    fn first_row_without_header_token_is_data() {
        let csv = "RO,Romania\nFR,France\n";
        let countries =
            parse_countries(csv.as_bytes(), Delimiter::Comma, origin()).expect("rows parse");
        assert_eq!(countries.len(), 2);
    }

    #[test]
    fn header_tokens_are_case_insensitive() {
        let csv = " Country_Code ,Name\nRO,Romania\n";
        let countries =
            parse_countries(csv.as_bytes(), Delimiter::Comma, origin()).expect("rows parse");
        assert_eq!(countries.len(), 1);
    }

    #[test]
    fn skips_short_and_blank_rows() {
        let csv = "iso,name\nRO\n,Nowhere\nXX,  \nFR, France ,FRA\n";
        let countries =
            parse_countries(csv.as_bytes(), Delimiter::Comma, origin()).expect("rows parse");
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].official_name(), "France");
        assert_eq!(countries[0].iso3, "FRA");
    }

    #[test]
    fn zero_valid_rows_is_a_load_error() {
        let csv = "code,name\nRO\n";
        let err = parse_countries(csv.as_bytes(), Delimiter::Comma, origin())
            .expect_err("no valid rows");
        assert!(matches!(err, LoadError::NoValidRows { .. }));
    }

    #[test]
    fn empty_input_is_a_load_error() {
        let err =
            parse_countries(&b""[..], Delimiter::Comma, origin()).expect_err("file is empty");
        assert!(matches!(err, LoadError::EmptyFile { .. }));
    }

    #[test]
    fn parses_tab_separated_rows() {
        let tsv = "code\tname\tiso3\nCI\tCôte d'Ivoire\tCIV\nUS\tUnited States, America\tUSA\n";
        let countries =
            parse_countries(tsv.as_bytes(), Delimiter::Tab, Path::new("countries.tsv"))
                .expect("rows parse");
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[1].official_name(), "United States, America");
    }

    #[test]
    fn collects_aliases_per_code() {
        let csv = "code,aliases\nUS,usa, america ,,united states\nGB\nRO,rumania\nRO,românia\n";
        let aliases =
            parse_aliases(csv.as_bytes(), Delimiter::Comma, Path::new("aliases.csv"))
                .expect("aliases parse");
        assert_eq!(
            aliases.get("US").map(Vec::as_slice),
            Some(&["usa".to_string(), "america".to_string(), "united states".to_string()][..])
        );
        assert!(!aliases.contains_key("GB"));
        assert_eq!(aliases["RO"], vec!["rumania", "românia"]);
    }

    #[test]
    fn header_only_alias_file_yields_empty_table() {
        let aliases = parse_aliases(
            "code,alias\n".as_bytes(),
            Delimiter::Comma,
            Path::new("aliases.csv"),
        )
        .expect("header-only file parses");
        assert!(aliases.is_empty());
    }
}
