pub mod metrics;
pub mod monitor;

pub use metrics::{ClassifierMetrics, MetricsSnapshot};
pub use monitor::generate_report;
