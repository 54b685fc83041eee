//! Shared helpers for the engine's test binaries; currently just the
//! tracing bootstrap.

pub mod logging;
