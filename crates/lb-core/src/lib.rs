pub mod config;
pub mod format;
pub mod pipeline;
pub mod store;
pub mod types;
