pub mod window;

pub use window::RollingWindow;
