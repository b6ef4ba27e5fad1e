use std::sync::Arc;

use country_matcher::data::MemoryLoader;
use country_matcher::{normalize, CountryIndex, CountryService, LookupError, SharedIndex};

fn memory_service() -> CountryService<SharedIndex> {
    let index = SharedIndex::load(&MemoryLoader).expect("memory index builds");
    CountryService::new(Arc::new(index))
}

#[test]
fn normalizer_examples() {
    assert_eq!(normalize("  FRANÇAIS  "), "francais");
    assert_eq!(normalize("Côte d'Ivoire"), "cote d'ivoire");
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("中国"), "中国");
}

#[test]
fn case_and_padding_variants_share_a_country() {
    let index = CountryIndex::load(&MemoryLoader).expect("memory index builds");
    for query in ["Romania", "romania", "  ROMANIA "] {
        assert_eq!(index.find_by_name(query).expect("romania").iso2, "RO");
    }
    for query in ["usa", "united states", "America"] {
        assert_eq!(index.find_by_name(query).expect("united states").iso2, "US");
    }
}

#[test]
fn unregistered_names_are_not_found() {
    let index = CountryIndex::load(&MemoryLoader).expect("memory index builds");
    assert!(matches!(
        index.find_by_name("Atlantis"),
        Err(LookupError::NotFound { .. })
    ));
}

#[test]
fn blank_queries_never_reach_the_index() {
    let service = memory_service();
    for query in ["", " ", "\u{3000}"] {
        assert!(matches!(
            service.lookup(query),
            Err(LookupError::Validation { .. })
        ));
    }
    let stats = service.stats();
    assert_eq!(stats.validation_error_count, 3);
    assert_eq!(stats.not_found_count, 0);
}

#[test]
fn non_latin_aliases_resolve() {
    let service = memory_service();
    assert_eq!(service.lookup("中国").expect("china").iso2_code, "CN");
    assert_eq!(service.lookup("日本").expect("japan").iso3_code, "JPN");
}

#[test]
fn official_name_is_rendered_for_alias_hits() {
    let service = memory_service();
    let response = service.lookup("Holland").expect("netherlands alias");
    assert_eq!(response.query, "Holland");
    assert_eq!(response.iso2_code, "NL");
    assert_eq!(response.official_name, "Netherlands");
}
