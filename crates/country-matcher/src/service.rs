use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use serde::Serialize;

use crate::domain::{CountryResponse, LookupError};
use crate::repository::CountryRepository;

/// Number of entries reported in [`LookupStats::popular_countries`].
pub const POPULAR_COUNTRY_LIMIT: usize = 10;

/// Lookup entry point for the HTTP and CLI layers.
///
/// Rejects blank queries before the repository is consulted and keeps running counters of
/// every outcome.
pub struct CountryService<R> {
    repository: Arc<R>,
    counters: LookupCounters,
}

impl<R> CountryService<R>
where
    R: CountryRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            counters: LookupCounters::default(),
        }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Resolve a free-form country name.
    pub fn lookup(&self, query: &str) -> Result<CountryResponse, LookupError> {
        let started = Instant::now();
        let query = query.trim();
        if query.is_empty() {
            return self.record(started, Err(LookupError::Validation {
                query: query.to_string(),
            }));
        }

        let outcome = self
            .repository
            .find_by_name(query)
            .map(|country| CountryResponse::new(query, &country));
        self.record(started, outcome)
    }

    /// Resolve an ISO2 or ISO3 code exactly as stored.
    pub fn lookup_code(&self, code: &str) -> Result<CountryResponse, LookupError> {
        let started = Instant::now();
        let code = code.trim();
        if code.is_empty() {
            return self.record(started, Err(LookupError::Validation {
                query: code.to_string(),
            }));
        }

        let outcome = self
            .repository
            .find_by_code(code)
            .map(|country| CountryResponse::new(code, &country));
        self.record(started, outcome)
    }

    pub fn stats(&self) -> LookupStats {
        self.counters.snapshot()
    }

    fn record(
        &self,
        started: Instant,
        outcome: Result<CountryResponse, LookupError>,
    ) -> Result<CountryResponse, LookupError> {
        let result = match &outcome {
            Ok(response) => {
                self.counters.success(response);
                "success"
            }
            Err(err) => {
                self.counters.failure(err);
                err.result_label()
            }
        };
        metrics::histogram!("country_lookup_duration_seconds", "result" => result)
            .record(started.elapsed().as_secs_f64());
        outcome
    }
}

#[derive(Default)]
struct LookupCounters {
    success: AtomicU64,
    not_found: AtomicU64,
    validation_error: AtomicU64,
    popular: Mutex<HashMap<String, PopularCountry>>,
}

impl LookupCounters {
    fn success(&self, response: &CountryResponse) {
        self.success.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("country_lookups_total", "result" => "success").increment(1);
        metrics::counter!("country_popular_total", "iso2" => response.iso2_code.clone())
            .increment(1);

        let mut popular = self.popular.lock().unwrap_or_else(PoisonError::into_inner);
        popular
            .entry(response.iso2_code.clone())
            .or_insert_with(|| PopularCountry {
                code: response.iso2_code.clone(),
                name: response.official_name.clone(),
                count: 0,
            })
            .count += 1;
    }

    fn failure(&self, err: &LookupError) {
        let counter = match err {
            LookupError::Validation { .. } => &self.validation_error,
            LookupError::NotFound { .. } => &self.not_found,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("country_lookups_total", "result" => err.result_label()).increment(1);
    }

    fn snapshot(&self) -> LookupStats {
        let success_count = self.success.load(Ordering::Relaxed);
        let not_found_count = self.not_found.load(Ordering::Relaxed);
        let validation_error_count = self.validation_error.load(Ordering::Relaxed);
        let total_requests = success_count + not_found_count + validation_error_count;

        let (success_rate, failure_rate) = if total_requests == 0 {
            (0.0, 0.0)
        } else {
            let total = total_requests as f64;
            let success_rate = success_count as f64 / total;
            (success_rate, 1.0 - success_rate)
        };

        let mut popular_countries: Vec<PopularCountry> = self
            .popular
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        popular_countries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.code.cmp(&b.code)));
        popular_countries.truncate(POPULAR_COUNTRY_LIMIT);

        LookupStats {
            total_requests,
            success_count,
            not_found_count,
            validation_error_count,
            success_rate,
            failure_rate,
            popular_countries,
        }
    }
}

/// Point-in-time lookup counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupStats {
    pub total_requests: u64,
    pub success_count: u64,
    pub not_found_count: u64,
    pub validation_error_count: u64,
    pub success_rate: f64,
    pub failure_rate: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub popular_countries: Vec<PopularCountry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularCountry {
    pub code: String,
    pub name: String,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemoryLoader;
    use crate::repository::SharedIndex;
    use metrics_exporter_prometheus::PrometheusBuilder;

    fn service() -> CountryService<SharedIndex> {
        let index = SharedIndex::load(&MemoryLoader).expect("memory index builds");
        CountryService::new(Arc::new(index))
    }

    #[test]
    fn blank_queries_are_validation_errors() {
        let service = service();
        for query in ["", "   ", "\t\n"] {
            let err = service.lookup(query).expect_err("blank query rejected");
            assert!(matches!(err, LookupError::Validation { .. }));
        }
        assert_eq!(service.stats().validation_error_count, 3);
    }

    #[test]
    fn lookup_renders_official_name() {
        let service = service();
        let response = service.lookup("  murica ").expect("alias resolves");
        assert_eq!(response.query, "murica");
        assert_eq!(response.iso2_code, "US");
        assert_eq!(response.iso3_code, "USA");
        assert_eq!(response.official_name, "United States of America");
    }

    #[test]
    fn lookup_code_is_exact() {
        let service = service();
        assert_eq!(service.lookup_code("GBR").expect("iso3").iso2_code, "GB");
        assert!(matches!(
            service.lookup_code("gbr"),
            Err(LookupError::NotFound { .. })
        ));
    }

    #[test]
    fn stats_rank_popular_countries() {
        let service = service();
        service.lookup("france").expect("fr");
        service.lookup("frankreich").expect("fr");
        service.lookup("japan").expect("jp");
        service.lookup("atlantis").expect_err("unknown");

        let stats = service.stats();
        assert_eq!(stats.total_requests, 4);
        assert_eq!(stats.success_count, 3);
        assert_eq!(stats.not_found_count, 1);
        assert!((stats.success_rate - 0.75).abs() < f64::EPSILON);
        assert!((stats.failure_rate - 0.25).abs() < f64::EPSILON);
        assert_eq!(stats.popular_countries[0].code, "FR");
        assert_eq!(stats.popular_countries[0].count, 2);
        assert_eq!(stats.popular_countries[1].code, "JP");
    }

    #[test]
    fn lookups_emit_counters_and_duration_histogram() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        let service = service();

        metrics::with_local_recorder(&recorder, || {
            service.lookup("romania").expect("ro");
            service.lookup("atlantis").expect_err("unknown");
            service.lookup_code("").expect_err("blank");
        });

        let rendered = handle.render();
        assert!(rendered.contains("country_lookup_duration_seconds"));
        assert!(rendered.contains(r#"country_lookups_total{result="success"} 1"#));
        assert!(rendered.contains(r#"country_lookups_total{result="not_found"} 1"#));
        assert!(rendered.contains(r#"country_lookups_total{result="validation_error"} 1"#));
        assert!(rendered.contains(r#"country_popular_total{iso2="RO"} 1"#));
    }
}
