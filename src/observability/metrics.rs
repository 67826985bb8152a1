use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::core::RhythmType;

#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSnapshot {
    pub readings_processed: u64,
    pub counts: [(RhythmType, u64); 6],
    pub avg_latency_us: u64,
}

impl MetricsSnapshot {
    pub fn count(&self, kind: RhythmType) -> u64 {
        self.counts[kind.index()].1
    }
}

/// Counters for one classifier, safe to share across tasks
pub struct ClassifierMetrics {
    readings_processed: AtomicU64,
    classifications: [AtomicU64; 6],
    total_latency_us: AtomicU64,
    latency_samples: AtomicU64,
}

impl Default for ClassifierMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassifierMetrics {
    pub fn new() -> Self {
        Self {
            readings_processed: AtomicU64::new(0),
            classifications: Default::default(),
            total_latency_us: AtomicU64::new(0),
            latency_samples: AtomicU64::new(0),
        }
    }

    pub fn readings_processed(&self) -> u64 {
        self.readings_processed.load(Ordering::Relaxed)
    }

    pub fn count(&self, kind: RhythmType) -> u64 {
        self.classifications[kind.index()].load(Ordering::Relaxed)
    }

    pub fn record(&self, kind: RhythmType) {
        self.readings_processed.fetch_add(1, Ordering::Relaxed);
        self.classifications[kind.index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn start_processing(&self) -> Instant {
        Instant::now()
    }

    pub fn finish_processing(&self, start: Instant) {
        let latency_us = start.elapsed().as_micros() as u64;
        self.total_latency_us.fetch_add(latency_us, Ordering::Relaxed);
        self.latency_samples.fetch_add(1, Ordering::Relaxed);
    }

    pub fn avg_latency_us(&self) -> u64 {
        let samples = self.latency_samples.load(Ordering::Relaxed);
        if samples == 0 {
            return 0;
        }
        self.total_latency_us.load(Ordering::Relaxed) / samples
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            readings_processed: self.readings_processed(),
            counts: RhythmType::ALL.map(|kind| (kind, self.count(kind))),
            avg_latency_us: self.avg_latency_us(),
        }
    }
}
