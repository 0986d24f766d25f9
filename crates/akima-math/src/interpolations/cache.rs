//! Bounded LRU memo of prepared Akima splines.
//!
//! A [`TangentCache`] maps the exact contents of a dataset, as supplied and
//! before sorting, to the [`AkimaSpline`] prepared from it.  Repeated queries
//! against the same dataset skip the sort and the tangent computation.  The
//! stored spline is the one a fresh preparation would build, bit for bit.
//!
//! The cache is an explicit object owned by the caller; its capacity bounds
//! memory and the least-recently-used dataset is evicted first.
//!
//! Thread safety: one `Mutex` guards lookup and insertion.  Preparation runs
//! outside the lock, so two threads missing on the same dataset may both
//! prepare it; the first insertion wins and the other result is dropped.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use akima_core::{errors::Result, settings::Settings, Real, Size};
use tracing::{debug, trace};

use super::akima::AkimaSpline;

/// Exact bit patterns of a dataset, so `0.0` and `-0.0` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DatasetKey {
    x: Vec<u64>,
    y: Vec<u64>,
}

impl DatasetKey {
    fn new(xs: &[Real], ys: &[Real]) -> Self {
        Self {
            x: xs.iter().map(|v| v.to_bits()).collect(),
            y: ys.iter().map(|v| v.to_bits()).collect(),
        }
    }
}

#[derive(Debug)]
struct Entry {
    spline: Arc<AkimaSpline>,
    last_used: u64,
}

/// Hit, miss and eviction counters of a [`TangentCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to prepare the dataset.
    pub misses: u64,
    /// Entries dropped to stay within capacity.
    pub evictions: u64,
}

#[derive(Debug, Default)]
struct LruState {
    entries: HashMap<DatasetKey, Entry>,
    /// `last_used` tick → key, oldest first.
    recency: BTreeMap<u64, DatasetKey>,
    tick: u64,
    stats: CacheStats,
}

impl LruState {
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    fn touch(&mut self, key: &DatasetKey) -> Option<Arc<AkimaSpline>> {
        let tick = self.next_tick();
        let entry = self.entries.get_mut(key)?;
        self.recency.remove(&entry.last_used);
        entry.last_used = tick;
        self.recency.insert(tick, key.clone());
        Some(Arc::clone(&entry.spline))
    }

    fn insert(&mut self, key: DatasetKey, spline: Arc<AkimaSpline>, capacity: Size) {
        let tick = self.next_tick();
        self.recency.insert(tick, key.clone());
        self.entries.insert(
            key,
            Entry {
                spline,
                last_used: tick,
            },
        );
        while self.entries.len() > capacity {
            let Some((_, oldest)) = self.recency.pop_first() else {
                break;
            };
            if let Some(evicted) = self.entries.remove(&oldest) {
                self.stats.evictions += 1;
                debug!(points = evicted.spline.len(), "evicted dataset from tangent cache");
            }
        }
    }
}

/// Bounded, thread-safe memo of prepared Akima splines.
#[derive(Debug)]
pub struct TangentCache {
    settings: Settings,
    state: Mutex<LruState>,
}

impl TangentCache {
    /// Create a cache holding at most `capacity` datasets, with default
    /// preparation settings.
    ///
    /// # Errors
    /// Returns `Error::Precondition` if `capacity` is zero.
    pub fn new(capacity: Size) -> Result<Self> {
        Self::from_settings(&Settings::new().with_cache_capacity(capacity))
    }

    /// Create a cache sized and configured by `settings`.  Datasets are
    /// prepared with the same input-order and duplicate-abscissa policies.
    ///
    /// # Errors
    /// Returns `Error::Precondition` if the settings are invalid.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings: *settings,
            state: Mutex::new(LruState::default()),
        })
    }

    /// Return the spline prepared from `(xs, ys)`, preparing and storing it on
    /// first use.
    ///
    /// # Errors
    /// Propagates preparation errors; a failed dataset is never stored.
    pub fn get_or_prepare(&self, xs: &[Real], ys: &[Real]) -> Result<Arc<AkimaSpline>> {
        let key = DatasetKey::new(xs, ys);
        {
            let mut state = self.lock();
            if let Some(spline) = state.touch(&key) {
                state.stats.hits += 1;
                trace!(points = xs.len(), "tangent cache hit");
                return Ok(spline);
            }
            state.stats.misses += 1;
        }

        trace!(points = xs.len(), "tangent cache miss");
        let prepared = Arc::new(AkimaSpline::with_settings(xs, ys, &self.settings)?);

        let mut state = self.lock();
        if let Some(existing) = state.touch(&key) {
            // Another thread stored it while we were preparing.
            return Ok(existing);
        }
        state.insert(key, Arc::clone(&prepared), self.settings.cache_capacity());
        Ok(prepared)
    }

    /// Return `true` if `(xs, ys)` is currently stored.  Does not affect
    /// recency.
    pub fn contains(&self, xs: &[Real], ys: &[Real]) -> bool {
        self.lock().entries.contains_key(&DatasetKey::new(xs, ys))
    }

    /// Number of stored datasets.
    pub fn len(&self) -> Size {
        self.lock().entries.len()
    }

    /// Return `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Maximum number of stored datasets.
    pub fn capacity(&self) -> Size {
        self.settings.cache_capacity()
    }

    /// Settings used to prepare datasets.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Snapshot of the hit, miss and eviction counters.
    pub fn stats(&self) -> CacheStats {
        self.lock().stats
    }

    /// Drop every stored dataset.  Counters are kept.
    pub fn clear(&self) {
        let mut state = self.lock();
        let dropped = state.entries.len();
        state.entries.clear();
        state.recency.clear();
        debug!(dropped, "cleared tangent cache");
    }

    // The map is only mutated after every fallible step has succeeded, so a
    // panic elsewhere cannot leave it half-updated.
    fn lock(&self) -> MutexGuard<'_, LruState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
