use osmgeo_entities::place::GeocodedPlace;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

type Key = String;
type Results = Vec<GeocodedPlace>;

#[derive(Debug, Default)]
struct Cache {
    results: HashMap<Key, Results>,
    // Keys that are currently being fetched.
    pending: HashMap<Key, Arc<Mutex<()>>>,
}

/// Results of previous geocoding requests keyed by the
/// fully built request URL.
///
/// Entries live as long as the cache itself and are never
/// evicted. Readers always receive an independent copy.
#[derive(Debug, Default)]
pub struct ResultCache(RwLock<Cache>);

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached results for `key` or fetch and store them.
    ///
    /// Concurrent callers asking for the same key wait for a single
    /// fetch. Callers with other keys are never blocked by it.
    pub fn get_or_try_fetch<F, E>(&self, key: &str, fetch: F) -> Result<Results, E>
    where
        F: FnOnce() -> Result<Results, E>,
    {
        if let Some(cached) = self.cached(key) {
            return Ok(cached);
        }
        let pending = self.pending(key);
        let _fetching = lock_pending(&pending);
        if let Some(cached) = self.cached(key) {
            return Ok(cached);
        }
        log::debug!("Cache miss: {key}");
        let fetched = fetch();
        let mut cache = self.write();
        if cache
            .pending
            .get(key)
            .is_some_and(|other| Arc::ptr_eq(other, &pending))
        {
            cache.pending.remove(key);
        }
        let results = fetched?;
        if is_cacheable(&results) {
            cache.results.insert(key.to_owned(), results.clone());
        } else {
            log::debug!("Not caching empty results of {key}");
        }
        Ok(results)
    }

    pub fn len(&self) -> usize {
        self.read().results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().results.is_empty()
    }

    pub fn clear(&self) {
        self.write().results.clear();
    }

    fn cached(&self, key: &str) -> Option<Results> {
        let cached = self.read().results.get(key).cloned();
        if cached.is_some() {
            log::debug!("Cache hit: {key}");
        }
        cached
    }

    fn pending(&self, key: &str) -> Arc<Mutex<()>> {
        let pending = self.read().pending.get(key).cloned();
        if let Some(pending) = pending {
            return pending;
        }
        Arc::clone(self.write().pending.entry(key.to_owned()).or_default())
    }

    fn read(&self) -> RwLockReadGuard<'_, Cache> {
        match self.0.read() {
            Ok(guard) => guard,
            Err(poison_err) => {
                log::error!("A poisoned RwLockReadGuard for the ResultCache was found.");
                poison_err.into_inner()
            }
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Cache> {
        match self.0.write() {
            Ok(guard) => guard,
            Err(poison_err) => {
                log::error!("A poisoned RwLockWriteGuard for the ResultCache was found.");
                poison_err.into_inner()
            }
        }
    }
}

fn lock_pending(pending: &Mutex<()>) -> MutexGuard<'_, ()> {
    match pending.lock() {
        Ok(guard) => guard,
        Err(poison_err) => poison_err.into_inner(),
    }
}

// A leading entry is always a complete place, so a
// non-empty list is the only requirement.
fn is_cacheable(results: &[GeocodedPlace]) -> bool {
    results.first().is_some()
}
