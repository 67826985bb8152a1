use std::time::{SystemTime, UNIX_EPOCH};

/// Timestamp source for generated readings, in milliseconds
pub trait Clock: Send {
    fn now_ms(&mut self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&mut self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Logical clock that advances by a fixed step on every read
#[derive(Debug, Clone)]
pub struct ManualClock {
    next: u64,
    step_ms: u64,
}

impl ManualClock {
    pub fn new(start_ms: u64, step_ms: u64) -> Self {
        Self {
            next: start_ms,
            step_ms,
        }
    }
}

impl Clock for ManualClock {
    fn now_ms(&mut self) -> u64 {
        let now = self.next;
        self.next = self.next.saturating_add(self.step_ms);
        now
    }
}
