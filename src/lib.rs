// src/lib.rs

//! # Window Limiter
//!
//! A sliding window rate limiter with exact per-timestamp admission counting.
//!
//! The limiter records the timestamp of every admitted request and answers
//! each new request against the trailing window ending at that request's own
//! arrival time. This is a genuine sliding window, not a fixed-bucket
//! counter: the window moves with every call, so a burst can never sneak
//! through by straddling a bucket boundary.
//!
//! ## Quick Example
//!
//! ```rust
//! use window_limiter::{SystemClock, WindowLimiter, WindowLimiterConfig};
//! use std::time::Duration;
//!
//! let config = WindowLimiterConfig::new(100, Duration::from_secs(1));
//! let limiter = WindowLimiter::with_config(config, SystemClock::new()).unwrap();
//!
//! if limiter.try_admit() {
//!     println!("Request allowed");
//! } else {
//!     println!("Rate limited");
//! }
//! ```
//!
//! ## Per-Client Limiting
//!
//! ```rust
//! use window_limiter::{KeyedWindowLimiter, SystemClock, WindowLimiterConfig};
//! use std::time::Duration;
//!
//! let config = WindowLimiterConfig::single(Duration::from_millis(500));
//! let limiter: KeyedWindowLimiter<String> =
//!     KeyedWindowLimiter::with_config(config, SystemClock::new()).unwrap();
//!
//! assert!(limiter.try_admit("user_123".to_string()));
//! assert!(limiter.try_admit("user_456".to_string()));
//! assert!(!limiter.try_admit("user_123".to_string()));
//! ```

// private modules
mod clock;
mod config;
mod errors;
mod keyed;
mod window_limiter;

// public API exports
pub use clock::{Clock, SystemClock};
pub use config::WindowLimiterConfig;
pub use errors::WindowLimiterError;
pub use keyed::KeyedWindowLimiter;
pub use window_limiter::WindowLimiter;
