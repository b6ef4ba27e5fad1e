use std::io::{self, Write};
use std::sync::Arc;

use clap::Args;
use country_matcher::config::AppConfig;
use country_matcher::error::AppError;
use country_matcher::repository::CountryRepository;
use country_matcher::telemetry;
use country_matcher::{CountryIndex, CountryService, SharedIndex};
use serde_json::json;

#[derive(Args, Debug)]
pub(crate) struct LookupArgs {
    /// Country names, codes, or aliases to resolve
    #[arg(required = true)]
    pub(crate) names: Vec<String>,
    /// Print one JSON object per line instead of tab-separated columns
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_lookup(args: LookupArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_for_cli(&config.telemetry)?;

    let index = SharedIndex::load(&config.data)?;
    telemetry::record_index(&index.snapshot(), config.data.kind());
    let service = CountryService::new(Arc::new(index));

    let stdout = io::stdout();
    write_lookups(&service, &args.names, args.json, &mut stdout.lock())?;
    Ok(())
}

pub(crate) fn run_check_data() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_for_cli(&config.telemetry)?;

    let index = CountryIndex::load(&config.data)?;
    telemetry::record_index(&index, config.data.kind());

    let stdout = io::stdout();
    write_report(&index, config.data.kind(), &mut stdout.lock())?;
    Ok(())
}

pub(crate) fn write_lookups<R, W>(
    service: &CountryService<R>,
    names: &[String],
    as_json: bool,
    out: &mut W,
) -> io::Result<()>
where
    R: CountryRepository + 'static,
    W: Write,
{
    for name in names {
        let outcome = service.lookup(name);
        if as_json {
            let line = match &outcome {
                Ok(country) => serde_json::to_value(country)?,
                Err(err) => json!({ "error": err.to_string(), "query": err.query() }),
            };
            serde_json::to_writer(&mut *out, &line)?;
            writeln!(out)?;
            continue;
        }

        match outcome {
            Ok(country) => writeln!(
                out,
                "{}\t{}\t{}\t{}",
                country.query, country.iso2_code, country.iso3_code, country.official_name
            )?,
            Err(err) => writeln!(out, "{}\t-\t-\t{}", err.query(), err)?,
        }
    }
    Ok(())
}

pub(crate) fn write_report<W: Write>(
    index: &CountryIndex,
    source: &str,
    out: &mut W,
) -> io::Result<()> {
    let summary = index.summary();
    writeln!(out, "source:     {source}")?;
    writeln!(out, "countries:  {}", summary.countries)?;
    writeln!(out, "keys:       {}", summary.keys)?;
    writeln!(out, "collisions: {}", summary.collisions)?;

    for collision in index.collisions() {
        writeln!(
            out,
            "  {:?} -> {} (dropped {:?} claim from {})",
            collision.key, collision.kept, collision.discarded_tier, collision.discarded
        )?;
    }
    if !index.orphaned_alias_codes().is_empty() {
        writeln!(
            out,
            "unknown alias codes: {}",
            index.orphaned_alias_codes().join(", ")
        )?;
    }
    Ok(())
}
