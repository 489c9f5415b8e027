//! Logging setup shared by the leadboard binaries.
//!
//! Output goes through `tracing-subscriber` with an `EnvFilter`, either
//! human-readable or JSON. The terminal UI owns stdout, so sinks here are
//! stderr or a log file.

pub mod logging;
