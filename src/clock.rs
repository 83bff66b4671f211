use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering::SeqCst;
#[cfg(test)]
use std::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

use ClockSource::{Mock, System};

/// A source of time.
#[derive(Debug, Clone)]
pub enum ClockSource {
    /// Clock source based on the system clock.
    System,

    /// Manually adjustable time shared between clones. Only for testing.
    Mock(Arc<AtomicU64>),
}

impl ClockSource {
    pub fn new_mock(now_ms: u64) -> ClockSource {
        Mock(Arc::new(AtomicU64::new(now_ms)))
    }

    /// Returns the number of milliseconds since the Unix epoch.
    pub fn epoch_millis(&self) -> u64 {
        match self {
            System => match SystemTime::now().duration_since(UNIX_EPOCH) {
                Ok(n) => n.as_millis() as u64,
                Err(e) => panic!("SystemTime before UNIX EPOCH! {e:?}"),
            },
            Mock(now) => now.load(SeqCst),
        }
    }

    /// Sets the current time of this Mock clock.
    /// For test use only.
    pub fn set_time(&self, now_ms: u64) {
        match self {
            System => unreachable!(),
            Mock(n) => n.store(now_ms, SeqCst),
        }
    }

    /// Increases the current time of this Mock clock by the given duration.
    /// For test use only.
    #[cfg(test)]
    pub fn advance(&self, delta: Duration) {
        match self {
            System => unreachable!(),
            Mock(n) => n.store(n.load(SeqCst) + delta.as_millis() as u64, SeqCst),
        }
    }
}
