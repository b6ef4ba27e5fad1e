//! Resolves free-form country names, in any casing, spacing or accenting, to ISO 3166
//! codes.
//!
//! Queries go through [`normalize`] and are matched against a [`CountryIndex`] built from a
//! [`data::Loader`]. [`SharedIndex`] serves the live index and swaps in rebuilt ones without
//! interrupting readers.

pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod index;
pub mod normalizer;
pub mod repository;
pub mod router;
pub mod service;
pub mod telemetry;

pub use data::{DataSource, LoadError, Loader};
pub use domain::{Country, CountryResponse, LookupError};
pub use index::CountryIndex;
pub use normalizer::normalize;
pub use repository::{CountryRepository, SharedIndex};
pub use service::CountryService;
