pub mod buffers;
pub mod config;
pub mod core;
pub mod engine;
pub mod nodes;
pub mod observability;
