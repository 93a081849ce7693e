//! Memoization of analysis results per (change key, branch).
//!
//! The cache never expires entries on its own; the caller invalidates a key
//! when the underlying change content may have moved. Concurrent callers on
//! the same key converge on a single computation: each key owns a OnceCell
//! and the map lock is only held long enough to fetch or insert the cell.

use crate::core::AnalysisResult;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Composite cache key: change identifier plus branch name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub change_key: String,
    pub branch: String,
}

impl CacheKey {
    pub fn new(change_key: &str, branch: &str) -> Self {
        Self {
            change_key: change_key.to_string(),
            branch: branch.to_string(),
        }
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.change_key, self.branch)
    }
}

#[derive(Debug, Default)]
pub struct ResultCache {
    entries: Mutex<HashMap<CacheKey, Arc<OnceCell<Arc<AnalysisResult>>>>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached result for `key`, computing it at most once.
    /// The same `Arc` is handed back to every caller until invalidation.
    pub fn get_or_compute<F>(&self, key: CacheKey, compute: F) -> Arc<AnalysisResult>
    where
        F: FnOnce() -> AnalysisResult,
    {
        let cell = {
            let mut entries = self.entries.lock();
            Arc::clone(entries.entry(key.clone()).or_default())
        };

        // Only the first caller past this point runs `compute`; losers of
        // the race block on the cell and share the winner's result.
        let mut computed = false;
        let result = cell.get_or_init(|| {
            computed = true;
            Arc::new(compute())
        });

        if computed {
            self.misses.fetch_add(1, Ordering::Relaxed);
            log::debug!("cache miss for {key}");
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
            log::trace!("cache hit for {key}");
        }

        Arc::clone(result)
    }

    /// Drop one entry. A later call for the key recomputes.
    pub fn invalidate(&self, key: &CacheKey) {
        if self.entries.lock().remove(key).is_some() {
            log::debug!("invalidated cache entry {key}");
        }
    }

    /// Drop every entry.
    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        let count = entries.len();
        entries.clear();
        log::debug!("cleared {count} cache entries");
    }

    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        CacheStats {
            entries: self.entries.lock().len(),
            hits,
            misses,
            hit_rate: if hits + misses > 0 {
                hits as f64 / (hits + misses) as f64
            } else {
                0.0
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: usize,
    pub misses: usize,
    pub hit_rate: f64,
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cache stats: {} entries, {} hits, {} misses, {:.1}% hit rate",
            self.entries,
            self.hits,
            self.misses,
            self.hit_rate * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AnalysisMetrics, IssueCounts};

    fn empty_result(coverage: f64) -> AnalysisResult {
        AnalysisResult {
            issues: Vec::new(),
            metrics: AnalysisMetrics {
                complexity: 0.0,
                coverage,
                duplications: 0,
                issues: IssueCounts::default(),
            },
        }
    }

    #[test]
    fn second_lookup_reuses_the_first_result() {
        let cache = ResultCache::new();
        let key = CacheKey::new("42", "main");

        let first = cache.get_or_compute(key.clone(), || empty_result(100.0));
        let second = cache.get_or_compute(key, || empty_result(0.0));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.metrics.coverage, 100.0);
        assert_eq!(cache.stats().misses, 1);
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn distinct_keys_compute_independently() {
        let cache = ResultCache::new();

        let a = cache.get_or_compute(CacheKey::new("42", "main"), || empty_result(100.0));
        let b = cache.get_or_compute(CacheKey::new("42", "develop"), || empty_result(50.0));

        assert_eq!(a.metrics.coverage, 100.0);
        assert_eq!(b.metrics.coverage, 50.0);
        assert_eq!(cache.stats().misses, 2);
        assert_eq!(cache.stats().entries, 2);
    }

    #[test]
    fn invalidation_forces_recomputation() {
        let cache = ResultCache::new();
        let key = CacheKey::new("42", "main");

        cache.get_or_compute(key.clone(), || empty_result(100.0));
        cache.invalidate(&key);
        let fresh = cache.get_or_compute(key, || empty_result(25.0));

        assert_eq!(fresh.metrics.coverage, 25.0);
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn clear_drops_every_entry() {
        let cache = ResultCache::new();
        cache.get_or_compute(CacheKey::new("1", "main"), || empty_result(1.0));
        cache.get_or_compute(CacheKey::new("2", "main"), || empty_result(2.0));

        cache.clear();
        assert_eq!(cache.stats().entries, 0);
    }

    #[test]
    fn concurrent_same_key_computes_once() {
        let cache = Arc::new(ResultCache::new());
        let counter = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let counter = Arc::clone(&counter);
                std::thread::spawn(move || {
                    cache.get_or_compute(CacheKey::new("42", "main"), || {
                        counter.fetch_add(1, Ordering::SeqCst);
                        empty_result(100.0)
                    })
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        for result in &results[1..] {
            assert!(Arc::ptr_eq(&results[0], result));
        }
    }
}
