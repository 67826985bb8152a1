pub mod classification;
pub mod clock;
pub mod random;
pub mod reading;

pub use classification::{ClassificationResult, RhythmType, Severity};
pub use clock::{Clock, ManualClock, SystemClock};
pub use random::{uniform, RandomSource, ScriptedRandom, SeededRandom};
pub use reading::{MotionStatus, RhythmMode, SensorReading};
