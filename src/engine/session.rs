use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};

use crate::buffers::RollingWindow;
use crate::config::MonitorConfig;
use crate::core::{
    ClassificationResult, Clock, RandomSource, RhythmMode, SeededRandom, SensorReading,
    SystemClock,
};
use crate::engine::state::SessionState;
use crate::nodes::{ReadingGenerator, RhythmClassifier, VitalsSummary};
use crate::observability::ClassifierMetrics;

/// Points kept for the heart-rate trend chart
pub const HEART_RATE_TREND_LEN: usize = 30;
/// Points kept for the live PPG trace
pub const PPG_TRACE_LEN: usize = 20;

/// Everything the presentation layer needs for one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorEvent {
    pub reading: SensorReading,
    pub result: ClassificationResult,
    pub vitals: VitalsSummary,
}

/// One timestamped value on a chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub timestamp: u64,
    pub value: f64,
}

/// Drives one generator into one classifier at a fixed cadence.
///
/// Readings reach the classifier in generation order; nothing else touches
/// either component's state. Chart histories are cleared whenever `run`
/// starts, the classifier window is not.
pub struct MonitorSession {
    generator: ReadingGenerator,
    classifier: RhythmClassifier,
    metrics: Arc<ClassifierMetrics>,
    heart_rate_trend: RollingWindow<TrendPoint>,
    ppg_trace: RollingWindow<TrendPoint>,
    sample_interval: Duration,
    state: SessionState,
    ticks: u64,
}

// Marks the session stopped however `run` exits, including when its future
// is dropped mid-await.
struct StopOnDrop<'a>(&'a mut MonitorSession);

impl Drop for StopOnDrop<'_> {
    fn drop(&mut self) {
        let total_ticks = self.0.ticks;
        self.0.state = SessionState::Stopped { total_ticks };
    }
}

impl MonitorSession {
    pub fn from_config(config: &MonitorConfig) -> Result<Self> {
        config.validate()?;
        let random = match config.seed {
            Some(seed) => SeededRandom::seeded(seed),
            None => SeededRandom::from_entropy(),
        };
        Ok(Self::with_sources(config, random, SystemClock))
    }

    /// Builds a session around caller-supplied randomness and time, for
    /// reproducible runs.
    pub fn with_sources(
        config: &MonitorConfig,
        random: impl RandomSource + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        let mut generator = ReadingGenerator::with_sources(random, clock)
            .with_sample_interval(config.sample_interval_secs());
        generator.set_mode(config.rhythm_mode());
        generator.set_motion_level(config.motion_level);

        Self {
            generator,
            classifier: RhythmClassifier::with_window_size(config.window_size),
            metrics: Arc::new(ClassifierMetrics::new()),
            heart_rate_trend: RollingWindow::new(HEART_RATE_TREND_LEN),
            ppg_trace: RollingWindow::new(PPG_TRACE_LEN),
            sample_interval: Duration::from_millis(config.sample_interval_ms.max(1)),
            state: SessionState::Idle,
            ticks: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn transition_to(&mut self, new_state: SessionState) -> Result<()> {
        if !self.state.can_transition_to(&new_state) {
            return Err(anyhow!(
                "Invalid state transition: {} -> {}",
                self.state.name(),
                new_state.name()
            ));
        }
        self.state = new_state;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: RhythmMode) {
        self.generator.set_mode(mode);
    }

    pub fn set_motion_level(&mut self, level: f64) {
        self.generator.set_motion_level(level);
    }

    pub fn generator(&self) -> &ReadingGenerator {
        &self.generator
    }

    pub fn classifier(&self) -> &RhythmClassifier {
        &self.classifier
    }

    pub fn metrics(&self) -> Arc<ClassifierMetrics> {
        self.metrics.clone()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Last 30 heart rates, oldest first
    pub fn heart_rate_trend(&self) -> &RollingWindow<TrendPoint> {
        &self.heart_rate_trend
    }

    /// Last 20 PPG samples, oldest first
    pub fn ppg_trace(&self) -> &RollingWindow<TrendPoint> {
        &self.ppg_trace
    }

    /// Mean of the heart-rate trend, 0 when it is empty
    pub fn trend_average_heart_rate(&self) -> f64 {
        if self.heart_rate_trend.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.heart_rate_trend.iter().map(|point| point.value).sum();
        sum / self.heart_rate_trend.len() as f64
    }

    /// One synchronous generate-then-classify step
    pub fn tick(&mut self) -> MonitorEvent {
        let reading = self.generator.next_reading();

        let start = self.metrics.start_processing();
        let result = self.classifier.process(&reading);
        self.metrics.finish_processing(start);
        self.metrics.record(result.kind);

        self.heart_rate_trend.push(TrendPoint {
            timestamp: reading.timestamp,
            value: reading.heart_rate,
        });
        self.ppg_trace.push(TrendPoint {
            timestamp: reading.timestamp,
            value: reading.ppg_value,
        });

        self.ticks += 1;
        if let SessionState::Running { ticks } = &mut self.state {
            *ticks = self.ticks;
        }

        MonitorEvent {
            reading,
            result,
            vitals: self.classifier.vitals(),
        }
    }

    /// Ticks at the configured cadence, forwarding every event to `tx`.
    ///
    /// Stops after `max_ticks` ticks (if given) or once the receiver is
    /// dropped. Dropping the returned future also leaves the session
    /// `Stopped`, so it can be run again. Returns the number of ticks
    /// performed by this call.
    pub async fn run(
        &mut self,
        max_ticks: Option<u64>,
        tx: mpsc::Sender<MonitorEvent>,
    ) -> Result<u64> {
        self.transition_to(SessionState::Running { ticks: self.ticks })?;
        self.heart_rate_trend.clear();
        self.ppg_trace.clear();
        log::info!(
            "monitoring started: mode={}, interval={:?}",
            self.generator.mode(),
            self.sample_interval
        );

        let mut timer = interval(self.sample_interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut guard = StopOnDrop(self);
        let mut performed = 0u64;

        while max_ticks.map_or(true, |limit| performed < limit) {
            timer.tick().await;
            let event = guard.0.tick();
            performed += 1;
            if tx.send(event).await.is_err() {
                log::debug!("event receiver dropped, stopping");
                break;
            }
        }

        drop(guard);
        log::info!("monitoring stopped after {} ticks", performed);
        Ok(performed)
    }
}
