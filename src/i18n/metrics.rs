//! Lookup metrics for translation resolution and locale redirects.
//!
//! One instance is created at startup and shared (behind an `Arc`) by the
//! translator and the routing middleware. Counters are relaxed atomics;
//! they are observability data, not synchronization.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct I18nMetrics {
    /// Number of `resolve` calls
    lookups: AtomicUsize,

    /// Number of lookups that found no entry in the requested locale
    misses: AtomicUsize,

    /// Number of misses answered through a fallback policy
    fallbacks: AtomicUsize,

    /// Number of unprefixed requests redirected to the default locale
    redirects: AtomicUsize,
}

impl I18nMetrics {
    /// Create a metrics instance with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a translation lookup
    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that found no entry
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a miss answered through a fallback policy
    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a redirect to the default locale
    pub fn record_redirect(&self) {
        self.redirects.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the number of lookups
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Get the number of misses
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Get the number of fallbacks
    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Get the number of redirects
    pub fn redirects(&self) -> usize {
        self.redirects.load(Ordering::Relaxed)
    }

    /// Snapshot the counters.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let misses = self.misses();
        let hit_rate = if lookups > 0 {
            (lookups.saturating_sub(misses) as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            misses,
            hit_rate,
            fallbacks: self.fallbacks(),
            redirects: self.redirects(),
        }
    }
}

/// Point-in-time view of [`I18nMetrics`].
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub misses: usize,

    /// Lookup hit rate as a percentage (0-100)
    pub hit_rate: f64,

    pub fallbacks: usize,
    pub redirects: usize,
}
