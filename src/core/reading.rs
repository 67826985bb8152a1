use serde::{Deserialize, Serialize};

/// One sample from the wrist sensor, already reduced to scalar features
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReading {
    /// Milliseconds since epoch, non-decreasing across a generator's output
    pub timestamp: u64,

    /// Synthetic optical pulse amplitude, never negative
    pub ppg_value: f64,

    /// Beats per minute in [30, 200]
    pub heart_rate: f64,

    /// Inter-beat interval in milliseconds in [300, 2000]
    pub r_peak_interval: f64,

    /// SpO2 percentage in [90, 100]
    pub oxygen_saturation: f64,

    /// Activity level, nominally [0, 1] but not clamped
    pub motion_artifact: f64,
}

impl SensorReading {
    pub fn new(timestamp: u64, heart_rate: f64, r_peak_interval: f64) -> Self {
        Self {
            timestamp,
            ppg_value: 2000.0,
            heart_rate,
            r_peak_interval,
            oxygen_saturation: 98.0,
            motion_artifact: 0.0,
        }
    }

    pub fn with_motion(mut self, motion_artifact: f64) -> Self {
        self.motion_artifact = motion_artifact;
        self
    }

    pub fn with_ppg(mut self, ppg_value: f64) -> Self {
        self.ppg_value = ppg_value;
        self
    }

    pub fn motion_status(&self) -> MotionStatus {
        MotionStatus::from_level(self.motion_artifact)
    }
}

/// Rhythm the generator is asked to simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RhythmMode {
    Normal,
    Bradycardia,
    Tachycardia,
    Afib,
    Pvc,
}

impl RhythmMode {
    pub const ALL: [RhythmMode; 5] = [
        RhythmMode::Normal,
        RhythmMode::Bradycardia,
        RhythmMode::Tachycardia,
        RhythmMode::Afib,
        RhythmMode::Pvc,
    ];

    /// Centre heart rate in BPM for this mode
    pub fn base_heart_rate(&self) -> f64 {
        match self {
            RhythmMode::Normal => 75.0,
            RhythmMode::Bradycardia => 45.0,
            RhythmMode::Tachycardia => 115.0,
            RhythmMode::Afib => 85.0,
            RhythmMode::Pvc => 72.0,
        }
    }

    /// PPG noise scale for this mode
    pub fn noise_level(&self) -> f64 {
        match self {
            RhythmMode::Afib => 0.3,
            _ => 0.1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RhythmMode::Normal => "normal",
            RhythmMode::Bradycardia => "bradycardia",
            RhythmMode::Tachycardia => "tachycardia",
            RhythmMode::Afib => "afib",
            RhythmMode::Pvc => "pvc",
        }
    }
}

impl Default for RhythmMode {
    fn default() -> Self {
        RhythmMode::Normal
    }
}

/// Lenient parse: anything unrecognized selects the normal rhythm.
impl From<&str> for RhythmMode {
    fn from(value: &str) -> Self {
        match value {
            "normal" => RhythmMode::Normal,
            "bradycardia" => RhythmMode::Bradycardia,
            "tachycardia" => RhythmMode::Tachycardia,
            "afib" => RhythmMode::Afib,
            "pvc" => RhythmMode::Pvc,
            other => {
                log::debug!("unrecognized rhythm mode {:?}, using normal", other);
                RhythmMode::Normal
            }
        }
    }
}

impl std::fmt::Display for RhythmMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse activity bucket shown next to the vitals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionStatus {
    Stable,
    LightMotion,
    HighMotion,
}

impl MotionStatus {
    pub fn from_level(level: f64) -> Self {
        if level < 0.3 {
            MotionStatus::Stable
        } else if level < 0.7 {
            MotionStatus::LightMotion
        } else {
            MotionStatus::HighMotion
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MotionStatus::Stable => "Stable",
            MotionStatus::LightMotion => "Light Motion",
            MotionStatus::HighMotion => "High Motion",
        }
    }
}
