use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::fetch::{FetchOutcome, Fetcher};

pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    outcome: FetchOutcome,
    fetched_at: Instant,
}

/// Time-windowed memo of fetch outcomes, keyed by the exact URL string.
pub struct ResponseCache<F, C = SystemClock> {
    fetcher: F,
    clock: C,
    ttl: Duration,
    cache_failures: bool,
    entries: HashMap<String, CacheEntry>,
}

impl<F: Fetcher> ResponseCache<F, SystemClock> {
    pub fn new(fetcher: F, ttl: Duration) -> Self {
        Self::with_clock(fetcher, SystemClock, ttl)
    }
}

impl<F: Fetcher, C: Clock> ResponseCache<F, C> {
    pub fn with_clock(fetcher: F, clock: C, ttl: Duration) -> Self {
        Self {
            fetcher,
            clock,
            ttl,
            cache_failures: true,
            entries: HashMap::with_capacity(8),
        }
    }

    /// When false, unavailable outcomes are handed back but not remembered.
    pub fn cache_failures(mut self, enabled: bool) -> Self {
        self.cache_failures = enabled;
        self
    }

    pub fn get(&mut self, url: &str) -> FetchOutcome {
        let now = self.clock.now();
        if let Some(entry) = self.entries.get(url) {
            if now.saturating_duration_since(entry.fetched_at) < self.ttl {
                debug!(url, "cache hit");
                return entry.outcome.clone();
            }
        }

        let outcome = self.fetcher.fetch(url);
        if outcome.is_success() || self.cache_failures {
            self.entries.insert(
                url.to_string(),
                CacheEntry {
                    outcome: outcome.clone(),
                    fetched_at: now,
                },
            );
        } else {
            self.entries.remove(url);
        }
        outcome
    }

    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
