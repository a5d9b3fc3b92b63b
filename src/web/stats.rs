//! Page Cache Statistics Module
//!
//! Tracks page cache hits and misses.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Page Stats ==
/// Snapshot of page cache counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageStats {
    /// Requests answered from the cache
    pub hits: u64,
    /// Requests that went to the remote fetcher
    pub misses: u64,
}

impl PageStats {
    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Stats Recorder ==
/// Lock-free counters shared by concurrent page requests.
#[derive(Debug, Default)]
pub struct StatsRecorder {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl StatsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Reads both counters.
    pub fn snapshot(&self) -> PageStats {
        PageStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_new() {
        let stats = StatsRecorder::new().snapshot();
        assert_eq!(stats, PageStats::default());
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_recorder_counts() {
        let recorder = StatsRecorder::new();
        recorder.record_hit();
        recorder.record_hit();
        recorder.record_hit();
        recorder.record_miss();

        let stats = recorder.snapshot();
        assert_eq!(stats.hits, 3);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate() - 0.75).abs() < 0.001);
    }
}
