// src/keyed.rs

// per-key window limiting, for enforcing one ceiling independently per client

// dependencies
use crate::clock::{Clock, SystemClock};
use crate::config::WindowLimiterConfig;
use crate::errors::WindowLimiterError;
use crate::window_limiter::Ledger;
use dashmap::DashMap;
use std::hash::Hash;
use std::time::Duration;

/// A window limiter that applies one `(capacity, window)` configuration
/// independently per key.
/// T is the type used to identify clients (e.g., String, u64, etc.).
/// C is the clock type, defaulting to SystemClock.
/// Each key owns its own admission ledger inside a `DashMap`; the map's
/// entry guard is exclusive, so the full decision for a key runs serialized
/// while callers on other keys proceed in parallel.
#[derive(Debug)]
pub struct KeyedWindowLimiter<T, C = SystemClock>
where
    T: Hash + Eq + Clone,
    C: Clock,
{
    capacity: u64,
    window_nanos: u64,
    ledgers: DashMap<T, Ledger>,
    clock: C,
}

// methods for the KeyedWindowLimiter type
impl<T, C> KeyedWindowLimiter<T, C>
where
    T: Hash + Eq + Clone,
    C: Clock,
{
    // method to create a new keyed limiter from a config object
    pub fn with_config(config: WindowLimiterConfig, clock: C) -> Result<Self, WindowLimiterError> {
        config.validate()?;
        Ok(Self {
            capacity: config.capacity,
            window_nanos: config.window.as_nanos() as u64,
            ledgers: DashMap::new(),
            clock,
        })
    }

    // accessor method to return the configured capacity
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    // accessor method to return the configured window duration
    pub fn window(&self) -> Duration {
        Duration::from_nanos(self.window_nanos)
    }

    /// Decide whether the request arriving now, identified by `key`, may
    /// proceed. Same algorithm and boundary semantics as
    /// [`WindowLimiter::try_admit`](crate::WindowLimiter::try_admit), applied
    /// to the key's own ledger. A key seen for the first time starts with an
    /// empty ledger, so its first request is always admitted.
    pub fn try_admit(&self, key: T) -> bool {
        let mut entry = self.ledgers.entry(key).or_default();
        // clock read under the entry guard, same discipline as the mutex path
        let now = self.clock.now();
        entry.admit_at(now, self.capacity, self.window_nanos)
    }

    /// Drop ledgers whose most recent activity is older than `max_idle`.
    ///
    /// Per-call purging bounds each ledger's size but never removes the key
    /// itself, so a gateway tracking one-off clients should call this
    /// periodically. Returns the number of keys removed.
    pub fn cleanup_stale(&self, max_idle: Duration) -> usize {
        let now = self.clock.now();
        let max_idle_nanos = max_idle.as_nanos() as u64;
        let before = self.ledgers.len();
        self.ledgers.retain(|_, ledger| {
            ledger
                .last_activity()
                .is_some_and(|at| at.saturating_add(max_idle_nanos) > now)
        });
        before.saturating_sub(self.ledgers.len())
    }

    /// Number of keys currently holding a ledger.
    pub fn tracked_keys(&self) -> usize {
        self.ledgers.len()
    }
}
