pub mod session;
pub mod state;

pub use session::{MonitorEvent, MonitorSession, TrendPoint};
pub use state::SessionState;
