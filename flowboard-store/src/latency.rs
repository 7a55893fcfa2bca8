//! Simulated network latency
//!
//! The mock services pause before answering so consumers exercise their
//! loading and optimistic-update paths against realistic timing. Tests
//! construct stores with [`Latency::none`].

use std::time::Duration;

/// Per-operation artificial delays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    /// Bulk reads (`get_all`, `get_by_project`, `get_by_task`)
    pub list: Duration,
    /// Single-entity reads (`get_by_id`)
    pub fetch: Duration,
    /// `create`
    pub create: Duration,
    /// `update`
    pub update: Duration,
    /// `delete`
    pub delete: Duration,
}

impl Latency {
    /// The delays the mock backend ships with
    pub fn simulated() -> Self {
        Self {
            list: Duration::from_millis(300),
            fetch: Duration::from_millis(200),
            create: Duration::from_millis(400),
            update: Duration::from_millis(300),
            delete: Duration::from_millis(300),
        }
    }

    /// No delays, for tests
    pub fn none() -> Self {
        Self {
            list: Duration::ZERO,
            fetch: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::simulated()
    }
}

/// Sleep for the given delay, skipping the timer entirely when it is zero
pub(crate) async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
