pub mod classifier;
pub mod generator;

pub use classifier::{RhythmClassifier, VitalsSummary};
pub use generator::ReadingGenerator;
