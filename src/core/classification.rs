use serde::{Deserialize, Serialize};

/// Rhythm category assigned to the current window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RhythmType {
    Normal,
    Bradycardia,
    Tachycardia,
    Afib,
    Pvc,
    Artifact,
}

impl RhythmType {
    pub const ALL: [RhythmType; 6] = [
        RhythmType::Normal,
        RhythmType::Bradycardia,
        RhythmType::Tachycardia,
        RhythmType::Afib,
        RhythmType::Pvc,
        RhythmType::Artifact,
    ];

    /// Stable position in `ALL`, used for counter tables
    pub fn index(&self) -> usize {
        match self {
            RhythmType::Normal => 0,
            RhythmType::Bradycardia => 1,
            RhythmType::Tachycardia => 2,
            RhythmType::Afib => 3,
            RhythmType::Pvc => 4,
            RhythmType::Artifact => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RhythmType::Normal => "normal",
            RhythmType::Bradycardia => "bradycardia",
            RhythmType::Tachycardia => "tachycardia",
            RhythmType::Afib => "afib",
            RhythmType::Pvc => "pvc",
            RhythmType::Artifact => "artifact",
        }
    }
}

impl std::fmt::Display for RhythmType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        f.write_str(name)
    }
}

/// Outcome of one classifier step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(rename = "type")]
    pub kind: RhythmType,

    /// In (0, 1]
    pub confidence: f64,

    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
}

impl ClassificationResult {
    pub fn new(
        kind: RhythmType,
        confidence: f64,
        severity: Severity,
        description: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            confidence,
            severity,
            description: description.into(),
            recommendation: recommendation.into(),
        }
    }
}
