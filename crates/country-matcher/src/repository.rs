use std::sync::{Arc, PoisonError, RwLock};

use crate::data::{LoadError, Loader};
use crate::domain::{Country, LookupError};
use crate::index::CountryIndex;

/// Read side of the country dataset, shared by the service and HTTP layers.
pub trait CountryRepository: Send + Sync {
    fn find_by_name(&self, name: &str) -> Result<Arc<Country>, LookupError>;
    fn find_by_code(&self, code: &str) -> Result<Arc<Country>, LookupError>;
}

impl CountryRepository for CountryIndex {
    fn find_by_name(&self, name: &str) -> Result<Arc<Country>, LookupError> {
        CountryIndex::find_by_name(self, name)
    }

    fn find_by_code(&self, code: &str) -> Result<Arc<Country>, LookupError> {
        CountryIndex::find_by_code(self, code)
    }
}

/// Owner of the live index.
///
/// Readers clone the current `Arc` and query it without holding the lock. A reload builds
/// the replacement completely before it is published, so every reader observes either the
/// previous index or the new one in full. A failed reload leaves the previous index
/// installed.
#[derive(Debug)]
pub struct SharedIndex {
    current: RwLock<Arc<CountryIndex>>,
}

impl SharedIndex {
    pub fn new(index: CountryIndex) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
        }
    }

    pub fn load<L: Loader + ?Sized>(loader: &L) -> Result<Self, LoadError> {
        CountryIndex::load(loader).map(Self::new)
    }

    /// The index installed right now.
    pub fn snapshot(&self) -> Arc<CountryIndex> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Publish `index`, returning the one it replaced.
    pub fn replace(&self, index: CountryIndex) -> Arc<CountryIndex> {
        self.publish(Arc::new(index))
    }

    /// Rebuild from `loader` and publish the result.
    pub fn reload<L: Loader + ?Sized>(&self, loader: &L) -> Result<Arc<CountryIndex>, LoadError> {
        let index = Arc::new(CountryIndex::load(loader)?);
        self.publish(Arc::clone(&index));
        Ok(index)
    }

    fn publish(&self, next: Arc<CountryIndex>) -> Arc<CountryIndex> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }
}

impl CountryRepository for SharedIndex {
    fn find_by_name(&self, name: &str) -> Result<Arc<Country>, LookupError> {
        self.snapshot().find_by_name(name)
    }

    fn find_by_code(&self, code: &str) -> Result<Arc<Country>, LookupError> {
        self.snapshot().find_by_code(code)
    }
}
