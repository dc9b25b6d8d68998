// src/config.rs

//! Configuration types for the window limiter

// dependencies
use crate::errors::WindowLimiterError;
use std::time::Duration;

/// Configuration for window limiter behavior
#[derive(Debug, Clone)]
pub struct WindowLimiterConfig {
    pub(crate) capacity: u64,
    pub(crate) window: Duration,
}

impl WindowLimiterConfig {
    /// Create a new configuration with capacity and window settings
    pub fn new(capacity: u64, window: Duration) -> Self {
        Self { capacity, window }
    }

    /// Preset: a single admission per window
    pub fn single(window: Duration) -> Self {
        Self::new(1, window)
    }

    /// Builder-style: set capacity
    pub fn capacity(mut self, capacity: u64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builder-style: set window duration
    pub fn window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), WindowLimiterError> {
        if self.capacity < 1 {
            return Err(WindowLimiterError::InvalidCapacity);
        }
        if self.window.is_zero() {
            return Err(WindowLimiterError::InvalidWindow);
        }
        Ok(())
    }
}
