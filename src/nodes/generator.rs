use std::f64::consts::PI;

use crate::core::{
    uniform, Clock, RandomSource, RhythmMode, SeededRandom, SensorReading, SystemClock,
};

pub const DEFAULT_SAMPLE_INTERVAL_SECS: f64 = 0.1;

const MIN_HEART_RATE: f64 = 30.0;
const MAX_HEART_RATE: f64 = 200.0;
const MIN_RR_MS: f64 = 300.0;
const MAX_RR_MS: f64 = 2000.0;
const MIN_SPO2: f64 = 90.0;
const MAX_SPO2: f64 = 100.0;

const PREMATURE_BEAT_PROBABILITY: f64 = 0.1;
const MOTION_INJECTION_THRESHOLD: f64 = 0.3;

/// Synthetic wrist-sensor feed.
///
/// Each call to `next_reading` advances a sine oscillator by the
/// instantaneous heart rate, so the PPG trace stays phase-continuous across
/// rate changes. The phase accumulator is never wrapped.
pub struct ReadingGenerator {
    base_heart_rate: f64,
    phase: f64,
    noise_level: f64,
    motion_level: f64,
    mode: RhythmMode,
    sample_interval: f64,
    last_timestamp: u64,
    random: Box<dyn RandomSource>,
    clock: Box<dyn Clock>,
}

impl Default for ReadingGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingGenerator {
    pub fn new() -> Self {
        Self::with_sources(SeededRandom::from_entropy(), SystemClock)
    }

    pub fn with_sources(random: impl RandomSource + 'static, clock: impl Clock + 'static) -> Self {
        let mode = RhythmMode::Normal;
        Self {
            base_heart_rate: mode.base_heart_rate(),
            phase: 0.0,
            noise_level: mode.noise_level(),
            motion_level: 0.0,
            mode,
            sample_interval: DEFAULT_SAMPLE_INTERVAL_SECS,
            last_timestamp: 0,
            random: Box::new(random),
            clock: Box::new(clock),
        }
    }

    /// Seconds between consecutive readings; non-positive or non-finite
    /// values keep the default.
    pub fn with_sample_interval(mut self, seconds: f64) -> Self {
        if seconds.is_finite() && seconds > 0.0 {
            self.sample_interval = seconds;
        } else {
            log::warn!("ignoring sample interval {}s", seconds);
        }
        self
    }

    pub fn set_mode(&mut self, mode: RhythmMode) {
        self.mode = mode;
        self.base_heart_rate = mode.base_heart_rate();
        self.noise_level = mode.noise_level();
        log::debug!("generator mode set to {} ({} BPM)", mode, self.base_heart_rate);
    }

    /// Unrecognized names select the normal rhythm
    pub fn set_mode_str(&mut self, mode: &str) {
        self.set_mode(RhythmMode::from(mode));
    }

    pub fn set_motion_level(&mut self, level: f64) {
        self.motion_level = if level.is_nan() { 0.0 } else { level.clamp(0.0, 1.0) };
    }

    pub fn mode(&self) -> RhythmMode {
        self.mode
    }

    pub fn motion_level(&self) -> f64 {
        self.motion_level
    }

    pub fn base_heart_rate(&self) -> f64 {
        self.base_heart_rate
    }

    pub fn noise_level(&self) -> f64 {
        self.noise_level
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn sample_interval(&self) -> f64 {
        self.sample_interval
    }

    pub fn next_reading(&mut self) -> SensorReading {
        let timestamp = self.clock.now_ms().max(self.last_timestamp);
        self.last_timestamp = timestamp;

        let heart_rate = self.next_heart_rate();

        self.phase += (heart_rate / 60.0) * 2.0 * PI * self.sample_interval;
        let ppg_noise = uniform(self.random.as_mut(), self.noise_level * 100.0);
        let ppg_value = (self.phase.sin() * 1000.0 + 2000.0 + ppg_noise).max(0.0);

        let r_peak_interval = self.next_rr_interval(heart_rate);

        let spo2_noise = uniform(self.random.as_mut(), 2.0);
        let oxygen_saturation =
            (98.0 + spo2_noise - self.motion_level * 3.0).clamp(MIN_SPO2, MAX_SPO2);

        // Jitter is intentionally left unclamped.
        let motion_artifact = self.motion_level + uniform(self.random.as_mut(), 0.1);

        SensorReading {
            timestamp,
            ppg_value,
            heart_rate,
            r_peak_interval,
            oxygen_saturation,
            motion_artifact,
        }
    }

    fn next_heart_rate(&mut self) -> f64 {
        let mut heart_rate = self.base_heart_rate + uniform(self.random.as_mut(), 5.0);

        match self.mode {
            RhythmMode::Afib => heart_rate += uniform(self.random.as_mut(), 15.0),
            RhythmMode::Pvc => {
                if self.random.next_unit() < PREMATURE_BEAT_PROBABILITY {
                    heart_rate *= 0.7;
                }
            }
            _ => {}
        }

        if self.motion_level > MOTION_INJECTION_THRESHOLD {
            heart_rate += uniform(self.random.as_mut(), self.motion_level * 20.0);
        }

        heart_rate.clamp(MIN_HEART_RATE, MAX_HEART_RATE)
    }

    fn next_rr_interval(&mut self, heart_rate: f64) -> f64 {
        let mut interval = 60_000.0 / heart_rate;

        match self.mode {
            RhythmMode::Afib => interval += uniform(self.random.as_mut(), 200.0),
            RhythmMode::Pvc => {
                if self.random.next_unit() < PREMATURE_BEAT_PROBABILITY {
                    interval *= 0.6;
                }
            }
            _ => {}
        }

        interval.clamp(MIN_RR_MS, MAX_RR_MS)
    }
}
