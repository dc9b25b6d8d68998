// src/window_limiter.rs

// window-limiter: a sliding window rate limiter with exact per-timestamp
// admission counting.

// dependencies
use crate::clock::{Clock, SystemClock};
use crate::config::WindowLimiterConfig;
use crate::errors::WindowLimiterError;
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Admission ledger for one protected resource.
///
/// Admitted requests are keyed by the timestamp at which they were admitted;
/// the value is the number of admissions recorded at that exact timestamp.
/// Requests arriving at an identical timestamp collapse into one entry, so
/// memory is bounded by the number of distinct timestamps seen within one
/// window rather than by raw request count.
#[derive(Debug, Default)]
pub(crate) struct Ledger {
    admissions: BTreeMap<u64, u64>,
    window_start: Option<u64>,
}

impl Ledger {
    /// Run one full admission decision at timestamp `now`.
    ///
    /// The very first call only starts the timer; there is nothing to purge
    /// yet. Every later call first drops entries that have aged out of the
    /// trailing window, then counts what remains. Expired entries are dropped
    /// before the capacity check, never after, so the capacity invariant
    /// holds at the point of decision and rejected traffic still pays for its
    /// own cleanup.
    pub(crate) fn admit_at(&mut self, now: u64, capacity: u64, window_nanos: u64) -> bool {
        if self.window_start.is_none() {
            self.window_start = Some(now);
        } else {
            self.drop_expired(now, window_nanos);
        }

        let total: u64 = self.admissions.values().sum();
        if total < capacity {
            *self.admissions.entry(now).or_insert(0) += 1;
            true
        } else {
            false
        }
    }

    // An entry recorded at `at` expires once a full window has elapsed:
    // `at + window <= now` is out, `at + window > now` is retained. The
    // window trails each call's own timestamp, not a fixed epoch.
    fn drop_expired(&mut self, now: u64, window_nanos: u64) {
        self.admissions
            .retain(|&at, _| at.saturating_add(window_nanos) > now);
    }

    /// Timestamp of the most recent activity, for staleness checks.
    pub(crate) fn last_activity(&self) -> Option<u64> {
        self.admissions
            .keys()
            .next_back()
            .copied()
            .or(self.window_start)
    }

    #[cfg(test)]
    fn entry_count(&self) -> usize {
        self.admissions.len()
    }
}

/// The main WindowLimiter model.
/// C is the clock type, defaulting to SystemClock.
/// One instance guards one rate-limited resource; the ledger lives behind a
/// mutex so the whole decision runs as a single serialized critical section.
#[derive(Debug)]
pub struct WindowLimiter<C = SystemClock>
where
    C: Clock,
{
    capacity: u64,
    window_nanos: u64,
    ledger: Mutex<Ledger>,
    clock: C,
}

// methods for the WindowLimiter type
impl<C> WindowLimiter<C>
where
    C: Clock,
{
    // method to create a new limiter given a validated capacity and window
    fn new(capacity: u64, window: Duration, clock: C) -> Self {
        Self {
            capacity,
            window_nanos: window.as_nanos() as u64,
            ledger: Mutex::new(Ledger::default()),
            clock,
        }
    }

    // method to create a new limiter from a config object
    pub fn with_config(config: WindowLimiterConfig, clock: C) -> Result<Self, WindowLimiterError> {
        config.validate()?;
        Ok(Self::new(config.capacity, config.window, clock))
    }

    // accessor method to return the configured capacity
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    // accessor method to return the configured window duration
    pub fn window(&self) -> Duration {
        Duration::from_nanos(self.window_nanos)
    }

    /// Decide whether the request arriving now may proceed.
    ///
    /// Returns `true` when fewer than `capacity` admissions have been
    /// recorded within the trailing window ending at this call's timestamp;
    /// the admission is recorded before returning. Returns `false` otherwise,
    /// leaving the ledger unmodified. Never errors: a rejection is a routine
    /// outcome, not a fault.
    ///
    /// Concurrent callers are totally ordered per instance. The clock is
    /// read inside the critical section, so requests that observe the same
    /// timestamp are still resolved against one serialized total and exactly
    /// one caller can take the last remaining slot.
    pub fn try_admit(&self) -> bool {
        // A poisoned lock only means another caller panicked mid-decision;
        // the ledger is plain integer state and remains coherent.
        let mut ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        let now = self.clock.now();
        ledger.admit_at(now, self.capacity, self.window_nanos)
    }

    #[cfg(test)]
    fn ledger_entries(&self) -> usize {
        self.ledger
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry_count()
    }
}
