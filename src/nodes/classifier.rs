use serde::{Deserialize, Serialize};

use crate::buffers::RollingWindow;
use crate::core::{ClassificationResult, RhythmType, SensorReading, Severity};

/// Default window length (about 30 seconds of history at the reference cadence)
pub const DEFAULT_WINDOW_SIZE: usize = 30;
/// Samples required before any statistic is trusted
pub const MIN_SAMPLES: usize = 10;
/// Samples required by the interval-pattern statistics
const MIN_PATTERN_SAMPLES: usize = 5;

const ARTIFACT_MOTION_THRESHOLD: f64 = 0.7;
const BRADYCARDIA_BPM: f64 = 60.0;
const SEVERE_BRADYCARDIA_BPM: f64 = 50.0;
const TACHYCARDIA_BPM: f64 = 100.0;
const SEVERE_TACHYCARDIA_BPM: f64 = 120.0;
const IRREGULAR_STEP_MS: f64 = 200.0;
const AFIB_IRREGULARITY: f64 = 0.6;
const AFIB_VARIABILITY_MS: f64 = 50.0;
const PVC_SHORT_RATIO: f64 = 0.8;
const PVC_LONG_RATIO: f64 = 1.2;

/// Window-level vitals the dashboard shows next to the live reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsSummary {
    pub average_heart_rate: f64,
    pub hr_variability: f64,
    pub samples: usize,
}

/// Sliding-window rhythm classifier.
///
/// Keeps the last `window_size` R-R intervals, heart rates and PPG values in
/// lockstep and classifies every incoming reading against the whole window.
/// Checks run in a fixed priority order and the first match wins: warm-up,
/// motion artifact, bradycardia, tachycardia, atrial fibrillation, premature
/// beats, then normal sinus rhythm.
#[derive(Debug, Clone)]
pub struct RhythmClassifier {
    rr_intervals: RollingWindow,
    heart_rates: RollingWindow,
    ppg_values: RollingWindow,
    last_kind: Option<RhythmType>,
}

impl Default for RhythmClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl RhythmClassifier {
    pub fn new() -> Self {
        Self::with_window_size(DEFAULT_WINDOW_SIZE)
    }

    /// Window sizes below the warm-up minimum would never leave warm-up, so
    /// they are raised to it.
    pub fn with_window_size(window_size: usize) -> Self {
        let window_size = window_size.max(MIN_SAMPLES);
        Self {
            rr_intervals: RollingWindow::new(window_size),
            heart_rates: RollingWindow::new(window_size),
            ppg_values: RollingWindow::new(window_size),
            last_kind: None,
        }
    }

    pub fn process(&mut self, reading: &SensorReading) -> ClassificationResult {
        let evicted = self.rr_intervals.push(reading.r_peak_interval);
        self.heart_rates.push(reading.heart_rate);
        self.ppg_values.push(reading.ppg_value);

        let result = self.classify(reading);
        if self.last_kind != Some(result.kind) {
            if self.last_kind.is_some() {
                log::info!(
                    "rhythm changed to {} (confidence {:.2}, severity {})",
                    result.kind,
                    result.confidence,
                    result.severity
                );
            }
            self.last_kind = Some(result.kind);
        }
        if evicted.is_none() && self.rr_intervals.len() == MIN_SAMPLES {
            log::debug!("baseline collected after {} samples", MIN_SAMPLES);
        }
        result
    }

    fn classify(&self, reading: &SensorReading) -> ClassificationResult {
        if self.rr_intervals.len() < MIN_SAMPLES {
            return ClassificationResult::new(
                RhythmType::Normal,
                0.5,
                Severity::Low,
                "Collecting baseline data...",
                "Continue monitoring",
            );
        }

        if reading.motion_artifact > ARTIFACT_MOTION_THRESHOLD {
            return ClassificationResult::new(
                RhythmType::Artifact,
                0.9,
                Severity::Low,
                "Motion detected - readings may be inaccurate",
                "Keep wrist still for accurate readings",
            );
        }

        let avg_hr = self.heart_rates.mean();

        if avg_hr < BRADYCARDIA_BPM {
            let severity = if avg_hr < SEVERE_BRADYCARDIA_BPM {
                Severity::High
            } else {
                Severity::Medium
            };
            return ClassificationResult::new(
                RhythmType::Bradycardia,
                0.85,
                severity,
                format!("Slow heart rate detected ({} BPM)", avg_hr.round()),
                "Consult healthcare provider if symptoms persist",
            );
        }

        if avg_hr > TACHYCARDIA_BPM {
            let severity = if avg_hr > SEVERE_TACHYCARDIA_BPM {
                Severity::High
            } else {
                Severity::Medium
            };
            return ClassificationResult::new(
                RhythmType::Tachycardia,
                0.85,
                severity,
                format!("Fast heart rate detected ({} BPM)", avg_hr.round()),
                "Monitor closely, seek medical attention if sustained",
            );
        }

        if self.irregularity_score() > AFIB_IRREGULARITY
            && self.rr_variability() > AFIB_VARIABILITY_MS
        {
            return ClassificationResult::new(
                RhythmType::Afib,
                0.78,
                Severity::High,
                "Irregular rhythm pattern detected - possible AFib",
                "Seek immediate medical evaluation",
            );
        }

        if self.has_premature_beat() {
            return ClassificationResult::new(
                RhythmType::Pvc,
                0.72,
                Severity::Medium,
                "Premature beats detected",
                "Monitor frequency, consult cardiologist if frequent",
            );
        }

        ClassificationResult::new(
            RhythmType::Normal,
            0.92,
            Severity::Low,
            "Normal sinus rhythm",
            "Continue regular monitoring",
        )
    }

    /// Number of samples currently held; identical for all three windows
    pub fn window_len(&self) -> usize {
        self.rr_intervals.len()
    }

    pub fn window_capacity(&self) -> usize {
        self.rr_intervals.capacity()
    }

    pub fn average_heart_rate(&self) -> f64 {
        self.heart_rates.mean()
    }

    /// Population standard deviation of the R-R window in ms
    pub fn rr_variability(&self) -> f64 {
        if self.rr_intervals.len() < MIN_PATTERN_SAMPLES {
            return 0.0;
        }
        self.rr_intervals.population_std_dev()
    }

    /// Fraction of consecutive R-R pairs that differ by more than 200 ms
    pub fn irregularity_score(&self) -> f64 {
        if self.rr_intervals.len() < MIN_PATTERN_SAMPLES {
            return 0.0;
        }
        let irregular = self
            .rr_intervals
            .iter()
            .zip(self.rr_intervals.iter().skip(1))
            .filter(|(prev, next)| (*next - *prev).abs() > IRREGULAR_STEP_MS)
            .count();
        irregular as f64 / (self.rr_intervals.len() - 1) as f64
    }

    // Short beat followed by a compensatory pause, both measured against the
    // interval before the short one.
    fn has_premature_beat(&self) -> bool {
        if self.rr_intervals.len() < MIN_PATTERN_SAMPLES {
            return false;
        }
        let intervals = &self.rr_intervals;
        intervals
            .iter()
            .zip(intervals.iter().skip(1))
            .zip(intervals.iter().skip(2))
            .any(|((&prev, &current), &next)| {
                current < prev * PVC_SHORT_RATIO && next > prev * PVC_LONG_RATIO
            })
    }

    pub fn vitals(&self) -> VitalsSummary {
        VitalsSummary {
            average_heart_rate: self.average_heart_rate(),
            hr_variability: self.rr_variability(),
            samples: self.window_len(),
        }
    }
}
