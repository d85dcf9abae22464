//! Bounded memoization of full reports.
//!
//! Reports are pure functions of (query, config), so a cache bound to one
//! config can hand back a stored report for a repeated query. Keys round
//! coordinates to 1e-4°; a hit is only taken when the stored query is
//! exactly equal, so cached and uncached results never differ.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::config::PanchangConfig;
use crate::error::SearchError;
use crate::report::{PanchangQuery, PanchangReport, panchang_report};

/// Default number of stored reports.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Counters since the cache was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryStats {
    pub evaluations: u64,
    pub cache_hits: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    lat_e4: i64,
    lon_e4: i64,
    alt_m: i64,
    date: (i32, u32, u32),
    clock: (u32, u32, u64),
    utc_offset_minutes: i32,
}

impl CacheKey {
    fn new(q: &PanchangQuery) -> Self {
        let t = &q.instant;
        Self {
            lat_e4: (q.location.latitude_deg() * 1e4).round() as i64,
            lon_e4: (q.location.longitude_deg() * 1e4).round() as i64,
            alt_m: q.location.altitude_m().round() as i64,
            date: (t.year, t.month, t.day),
            clock: (t.hour, t.minute, t.second.to_bits()),
            utc_offset_minutes: t.utc_offset_minutes,
        }
    }
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<CacheKey, (PanchangQuery, PanchangReport)>,
    /// Insertion order, oldest first.
    order: VecDeque<CacheKey>,
    stats: QueryStats,
}

/// Thread-safe FIFO cache of panchang reports for one configuration.
pub struct PanchangCache {
    config: PanchangConfig,
    capacity: usize,
    state: Mutex<CacheState>,
}

impl PanchangCache {
    pub fn new(config: PanchangConfig, capacity: usize) -> Result<Self, SearchError> {
        if capacity == 0 {
            return Err(SearchError::InvalidConfig(
                "cache capacity must be greater than zero",
            ));
        }
        Ok(Self {
            config,
            capacity,
            state: Mutex::new(CacheState::default()),
        })
    }

    pub fn with_default_capacity(config: PanchangConfig) -> Self {
        Self {
            config,
            capacity: DEFAULT_CACHE_CAPACITY,
            state: Mutex::new(CacheState::default()),
        }
    }

    pub fn config(&self) -> &PanchangConfig {
        &self.config
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Report for `query`, computed at most once while it stays cached.
    ///
    /// The lock is not held while computing, so two threads asking for the
    /// same new query may both compute it.
    pub fn report(&self, query: &PanchangQuery) -> Result<PanchangReport, SearchError> {
        let key = CacheKey::new(query);
        {
            let mut state = self.lock();
            let hit = state
                .entries
                .get(&key)
                .filter(|(stored, _)| stored == query)
                .map(|(_, report)| report.clone());
            if let Some(report) = hit {
                state.stats.cache_hits = state.stats.cache_hits.saturating_add(1);
                return Ok(report);
            }
        }

        let report = panchang_report(query, &self.config)?;

        let mut state = self.lock();
        state.stats.evaluations = state.stats.evaluations.saturating_add(1);
        if state.entries.insert(key, (*query, report.clone())).is_none() {
            state.order.push_back(key);
            while state.order.len() > self.capacity {
                if let Some(old) = state.order.pop_front() {
                    state.entries.remove(&old);
                    debug!("panchang cache evicted entry for {:?}", old.date);
                }
            }
        }
        Ok(report)
    }

    pub fn stats(&self) -> QueryStats {
        self.lock().stats
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.order.clear();
    }
}
